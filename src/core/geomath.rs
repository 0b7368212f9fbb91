//! Großkreis-Primitive auf der Kugel: Zielpunkt, Distanz, Bounding-Box, Runden.
//!
//! Punkte sind `DVec2` mit x = Longitude, y = Latitude in Grad.
//! Bearings in Grad im Uhrzeigersinn ab Nord.

use glam::DVec2;

use super::units::Units;
use crate::shared::Bounds;

/// Zielpunkt nach `distance` (in `units`) entlang des Großkreises mit Kurs `bearing_deg`.
pub fn destination(origin: DVec2, distance: f64, bearing_deg: f64, units: Units) -> DVec2 {
    let lon1 = origin.x.to_radians();
    let lat1 = origin.y.to_radians();
    let bearing = bearing_deg.to_radians();
    let delta = units.length_to_radians(distance);

    let (sin_lat1, cos_lat1) = lat1.sin_cos();
    let (sin_delta, cos_delta) = delta.sin_cos();

    let lat2 = (sin_lat1 * cos_delta + cos_lat1 * sin_delta * bearing.cos()).asin();
    let lon2 = lon1
        + (bearing.sin() * sin_delta * cos_lat1).atan2(cos_delta - sin_lat1 * lat2.sin());

    DVec2::new(lon2.to_degrees(), lat2.to_degrees())
}

/// Haversine-Distanz zwischen zwei Punkten in `units`.
pub fn distance(a: DVec2, b: DVec2, units: Units) -> f64 {
    let d_lat = (b.y - a.y).to_radians();
    let d_lon = (b.x - a.x).to_radians();
    let lat1 = a.y.to_radians();
    let lat2 = b.y.to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + (d_lon / 2.0).sin().powi(2) * lat1.cos() * lat2.cos();
    let central = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    units.radians_to_length(central)
}

/// Bounding-Box über alle Punkte; `None` bei leerer Eingabe.
pub fn bbox<'a>(points: impl IntoIterator<Item = &'a DVec2>) -> Option<Bounds> {
    let mut iter = points.into_iter();
    let first = *iter.next()?;
    let (min, max) = iter.fold((first, first), |(min, max), p| (min.min(*p), max.max(*p)));
    Some(Bounds::new(min, max))
}

/// Rundet auf `precision` Nachkommastellen (wie GeoJSON-Truncate).
pub fn truncate(value: f64, precision: u32) -> f64 {
    let factor = 10f64.powi(precision as i32);
    (value * factor).round() / factor
}

/// Rundet einen Punkt komponentenweise auf `precision` Nachkommastellen.
pub fn truncate_point(p: DVec2, precision: u32) -> DVec2 {
    DVec2::new(truncate(p.x, precision), truncate(p.y, precision))
}

/// Rundet eine Bounding-Box nach außen (min abrunden, max aufrunden),
/// damit die Box nach dem Kürzen nie kleiner wird als ihr Inhalt.
pub fn truncate_bounds_outward(bounds: Bounds, precision: u32) -> Bounds {
    let factor = 10f64.powi(precision as i32);
    let floor = |v: f64| (v * factor).floor() / factor;
    let ceil = |v: f64| (v * factor).ceil() / factor;
    Bounds::new(
        DVec2::new(floor(bounds.min.x), floor(bounds.min.y)),
        DVec2::new(ceil(bounds.max.x), ceil(bounds.max.y)),
    )
}
