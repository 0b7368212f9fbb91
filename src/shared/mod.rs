//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält die Ausgabe-Features für den Renderer und die Konfiguration,
//! damit `core` und `circle` nicht direkt voneinander abhängen müssen.

pub mod feature;
pub mod options;

pub use feature::{Bounds, Feature, FeatureCollection, Geometry, Properties};
pub use options::{CircleConfig, CircleOptions};
pub use options::{COORD_PRECISION, STEP_COUNT_MAX, STEP_COUNT_MIN, ZOOM_LEVEL_MIN};
