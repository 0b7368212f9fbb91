//! Geodesic Circle Demo.
//!
//! Lädt einen Kreis aus einer TOML-Config und gibt ihn als GeoJSON-FeatureCollection aus.
//! Aufruf: geodesic-circle [pfad_zur_config.toml]

use anyhow::Context;
use geodesic_circle::{CircleConfig, GeodesicCircle};

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Geodesic Circle v{} startet...", env!("CARGO_PKG_VERSION"));

    let config_path = std::env::args()
        .nth(1)
        .map(std::path::PathBuf::from)
        .unwrap_or_else(CircleConfig::config_path);
    let config = CircleConfig::load_from_file(&config_path);

    let circle = GeodesicCircle::new(config.center(), config.radius, config.options)
        .context("Kreis aus Config ungültig")?;

    log::info!(
        "Mittelpunkt: {:?}, Radius: {} {}, Schritte: {}",
        circle.center().to_array(),
        circle.radius(),
        circle.units(),
        circle.step_count()
    );
    log::info!("Bounds: {:?}", circle.bounds().to_array());

    let json = serde_json::to_string_pretty(&circle.as_feature_collection())
        .context("FeatureCollection konnte nicht serialisiert werden")?;
    println!("{}", json);
    Ok(())
}
