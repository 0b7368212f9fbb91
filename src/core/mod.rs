//! Core-Domänentypen: Einheiten und Großkreis-Mathematik.

pub mod geomath;
pub mod units;

pub use units::{convert_distance, Units, EARTH_RADIUS_M};
