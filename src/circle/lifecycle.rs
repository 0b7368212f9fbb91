//! Mutationen und Abfragen des Kreises (update_*, Features, Bounds).
//!
//! Jede Mutation validiert zuerst und verändert den Zustand erst danach, ein
//! abgelehnter Aufruf lässt den Kreis unverändert.

use glam::DVec2;

use super::geometry::{cap_explicit_steps, clamp_zoom, validate_radius, Cardinal};
use super::state::{GeodesicCircle, StepMode};
use crate::core::{geomath, Units};
use crate::error::{CircleError, CircleResult};
use crate::shared::{Bounds, Feature, FeatureCollection, COORD_PRECISION, STEP_COUNT_MIN};

impl GeodesicCircle {
    /// Verschiebt den Kreis auf einen neuen Mittelpunkt.
    pub fn update_center(&mut self, center: DVec2) {
        self.center = center;
        self.rebuild();
    }

    /// Setzt einen neuen Radius (in der aktuellen Einheit).
    ///
    /// Eine explizit gesetzte Schrittzahl verfällt; die Auflösung wird neu berechnet.
    pub fn update_radius(&mut self, radius: f64) -> CircleResult<()> {
        validate_radius(radius)?;
        self.radius = radius;
        self.step_mode = StepMode::Auto;
        self.rebuild();
        Ok(())
    }

    /// Setzt die Zoomstufe (geklemmt auf ≥ 0.1) und berechnet die Auflösung neu.
    pub fn update_zoom(&mut self, zoom: f64) {
        self.zoom_level = clamp_zoom(zoom);
        self.step_mode = StepMode::Auto;
        self.rebuild();
    }

    /// Wechselt die Einheit.
    ///
    /// Der Zahlenwert des Radius bleibt erhalten und wird in der neuen Einheit
    /// interpretiert (3 km werden zu 3 mi), es findet keine Umrechnung statt.
    pub fn update_units(&mut self, units: Units) {
        self.units = units;
        self.rebuild();
    }

    /// Wie `update_units`, mit Einheit als Text (`"miles"`, `"kilometers"`, …).
    pub fn update_units_str(&mut self, units: &str) -> CircleResult<()> {
        let units: Units = units.parse()?;
        self.update_units(units);
        Ok(())
    }

    /// Setzt die Eckenzahl explizit (umgeht die Auflösungs-Policy bis zur
    /// nächsten Zoom- oder Radius-Änderung).
    ///
    /// Werte unter 3 werden abgelehnt, Werte über `STEP_COUNT_MAX` auf die
    /// Obergrenze begrenzt.
    pub fn update_steps(&mut self, steps: usize) -> CircleResult<()> {
        if steps < STEP_COUNT_MIN {
            return Err(CircleError::InvalidStepCount(steps));
        }
        self.step_count = cap_explicit_steps(steps);
        self.step_mode = StepMode::Explicit;
        self.rebuild();
        Ok(())
    }

    /// Polygon-Feature des Kreises mit den Properties.
    pub fn polygon_feature(&self) -> Feature {
        Feature::polygon(self.polygon.clone(), self.properties.clone())
    }

    /// Mittelpunkt als Feature mit `{"type": "center"}`.
    pub fn center_feature(&self) -> Feature {
        Feature::point(self.center).with_property("type", "center")
    }

    fn control_point_features(&self) -> Vec<Feature> {
        Cardinal::ALL
            .iter()
            .map(|c| {
                Feature::point(self.control_points[c.index()]).with_property("cardinal", c.as_str())
            })
            .collect()
    }

    /// Snapshot für den Renderer: 4 Kontrollpunkte, Polygon, Mittelpunkt.
    pub fn as_feature_collection(&self) -> FeatureCollection {
        let mut features = self.control_point_features();
        features.push(self.polygon_feature());
        features.push(self.center_feature());
        FeatureCollection::new(features)
    }

    /// Nur die 4 Kontrollpunkte als Collection.
    pub fn control_points_collection(&self) -> FeatureCollection {
        FeatureCollection::new(self.control_point_features())
    }

    /// Bounding-Box `[minLon, minLat, maxLon, maxLat]` auf 6 Nachkommastellen.
    ///
    /// Bezieht die Kontrollpunkte mit ein und rundet nach außen, damit die Box
    /// den Kreis samt Handles immer vollständig enthält. Die sechste Stelle kann
    /// daher von kaufmännischem Runden um eine Einheit abweichen.
    pub fn bounds(&self) -> Bounds {
        let raw = geomath::bbox(self.polygon.iter().chain(self.control_points.iter()))
            .unwrap_or_else(|| Bounds::new(self.center, self.center));
        geomath::truncate_bounds_outward(raw, COORD_PRECISION)
    }

    /// Bounding-Box als geschlossenes Polygon-Feature (5 Koordinaten).
    pub fn bounding_polygon(&self) -> Feature {
        Feature::polygon(self.bounds().to_ring(), Default::default())
    }
}
