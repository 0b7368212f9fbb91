//! Geodätischer Kreis: Polygon-Approximation mit zoomabhängiger Auflösung
//! und vier ziehbaren Kontrollpunkten.
//!
//! **Auflösung:** `steps = round((sqrt(radius_km * 250) * zoom)²)`, Zoom auf ≥ 0.1
//! geklemmt, Ergebnis auf `[3, STEP_COUNT_MAX]` begrenzt.
//!
//! **Konsistenz:** Jede Mutation baut Ring und Kontrollpunkte vollständig neu auf.
//!
//! Aufgeteilt in:
//! - `state`      : Struct, Konstruktor, Lese-Zugriffe
//! - `geometry`   : Auflösungs-Policy, Ring- und Kontrollpunkt-Berechnung
//! - `lifecycle`  : update_*-Mutationen, FeatureCollection, Bounds
//! - `drag`       : Drag-Logik für Mittelpunkt und Kontrollpunkte

pub mod drag;
pub mod geometry;
mod lifecycle;
mod state;

pub use drag::{drag_targets, CircleDrag, DragTarget};
pub use geometry::{raw_step_count, resolve_step_count, Cardinal};
pub use state::GeodesicCircle;
