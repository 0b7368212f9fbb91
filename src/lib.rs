//! Geodesic Circle Library.
//! Editierbarer geodätischer Kreis als Library exportiert für Renderer-Anbindung und Tests.

pub mod circle;
pub mod core;
pub mod error;
pub mod shared;

pub use circle::{drag_targets, Cardinal, CircleDrag, DragTarget, GeodesicCircle};
pub use crate::core::{convert_distance, Units};
pub use error::{CircleError, CircleResult};
pub use shared::{Bounds, CircleConfig, CircleOptions, Feature, FeatureCollection, Geometry};
