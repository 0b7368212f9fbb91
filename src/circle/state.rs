//! State-Definitionen, Konstruktor und Lese-Zugriffe des geodätischen Kreises.

use glam::DVec2;

use super::geometry::{clamp_zoom, validate_radius};
use crate::core::Units;
use crate::error::CircleResult;
use crate::shared::{CircleOptions, Properties};

/// Herkunft der aktuellen Schrittzahl.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StepMode {
    /// Aus Zoom und Radius berechnet (Auflösungs-Policy)
    Auto,
    /// Explizit per `update_steps` gesetzt, gilt bis zur nächsten Zoom-/Radius-Änderung
    Explicit,
}

/// Interaktiv editierbarer geodätischer Kreis.
///
/// Besitzt Mittelpunkt, Radius, Einheit, Zoomstufe und Properties sowie die
/// daraus abgeleitete Geometrie (Polygon-Ring und 4 Kontrollpunkte). Jede
/// Mutation baut die abgeleitete Geometrie vollständig neu auf; nach Rückkehr
/// eines Setters ist nie veralteter Zustand sichtbar.
#[derive(Debug, Clone)]
pub struct GeodesicCircle {
    /// Mittelpunkt (x = Longitude, y = Latitude, Grad)
    pub(crate) center: DVec2,
    /// Radius in `units`, immer endlich und > 0
    pub(crate) radius: f64,
    pub(crate) units: Units,
    /// Zoomstufe, bereits auf `ZOOM_LEVEL_MIN` geklemmt
    pub(crate) zoom_level: f64,
    /// Eckenzahl des Polygons (ohne schließenden Punkt)
    pub(crate) step_count: usize,
    pub(crate) step_mode: StepMode,
    /// Metadaten für das Polygon-Feature
    pub(crate) properties: Properties,
    /// Geschlossener Ring: `step_count + 1` Punkte, erster == letzter
    pub(crate) polygon: Vec<DVec2>,
    /// Kontrollpunkte in der Reihenfolge N, O, S, W
    pub(crate) control_points: [DVec2; 4],
}

impl GeodesicCircle {
    /// Erstellt einen Kreis und berechnet Schrittzahl, Polygon und Kontrollpunkte.
    ///
    /// Schlägt mit `InvalidRadius` fehl, wenn der Radius nicht endlich oder ≤ 0 ist.
    pub fn new(center: DVec2, radius: f64, options: CircleOptions) -> CircleResult<Self> {
        validate_radius(radius)?;
        let CircleOptions {
            units,
            zoom_level,
            properties,
        } = options;

        let mut circle = Self {
            center,
            radius,
            units,
            zoom_level: clamp_zoom(zoom_level),
            step_count: 0,
            step_mode: StepMode::Auto,
            properties,
            polygon: Vec::new(),
            control_points: [center; 4],
        };
        circle.rebuild();
        Ok(circle)
    }

    /// Kreis mit Standard-Optionen (Kilometer, Zoom 8, keine Properties).
    pub fn with_defaults(center: DVec2, radius: f64) -> CircleResult<Self> {
        Self::new(center, radius, CircleOptions::default())
    }

    pub fn center(&self) -> DVec2 {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn units(&self) -> Units {
        self.units
    }

    /// Geklemmte Zoomstufe (≥ 0.1).
    pub fn zoom_level(&self) -> f64 {
        self.zoom_level
    }

    pub fn step_count(&self) -> usize {
        self.step_count
    }

    /// True solange eine explizit gesetzte Schrittzahl aktiv ist.
    pub fn has_explicit_steps(&self) -> bool {
        self.step_mode == StepMode::Explicit
    }

    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    /// Geschlossener Polygon-Ring des Kreises.
    pub fn polygon(&self) -> &[DVec2] {
        &self.polygon
    }

    /// Kontrollpunkte bei Kurs 0°, 90°, 180°, −90°.
    pub fn control_points(&self) -> [DVec2; 4] {
        self.control_points
    }
}
