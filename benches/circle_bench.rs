use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use geodesic_circle::{CircleOptions, GeodesicCircle};
use glam::DVec2;
use std::hint::black_box;

fn demo_circle(zoom: f64) -> GeodesicCircle {
    GeodesicCircle::new(
        DVec2::new(-75.343, 39.984),
        3.0,
        CircleOptions::default().with_zoom_level(zoom),
    )
    .expect("Demo-Kreis ungueltig")
}

fn bench_drag_updates(c: &mut Criterion) {
    let mut group = c.benchmark_group("drag_updates");

    // Zoom 0.5 → ca. 188 Schritte, Zoom 12 → Obergrenze
    for &zoom in &[0.5f64, 12.0] {
        let mut circle = demo_circle(zoom);

        group.bench_with_input(BenchmarkId::new("update_radius", zoom), &zoom, |b, _| {
            let mut radius = 3.0;
            b.iter(|| {
                radius = if radius > 5.0 { 3.0 } else { radius + 0.01 };
                circle
                    .update_radius(black_box(radius))
                    .expect("Radius ungueltig");
                black_box(circle.step_count())
            })
        });

        let mut circle = demo_circle(zoom);
        group.bench_with_input(BenchmarkId::new("update_center", zoom), &zoom, |b, _| {
            let mut lon = -75.343;
            b.iter(|| {
                lon += 1e-4;
                circle.update_center(black_box(DVec2::new(lon, 39.984)));
                black_box(circle.polygon().len())
            })
        });
    }

    group.finish();
}

fn bench_feature_output(c: &mut Criterion) {
    let circle = demo_circle(12.0);

    c.bench_function("as_feature_collection_json", |b| {
        b.iter(|| {
            let json = circle
                .as_feature_collection()
                .to_json()
                .expect("Serialisierung fehlgeschlagen");
            black_box(json.len())
        })
    });

    c.bench_function("bounds", |b| b.iter(|| black_box(circle.bounds())));
}

criterion_group!(circle_benches, bench_drag_updates, bench_feature_output);
criterion_main!(circle_benches);
