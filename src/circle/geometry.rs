//! Auflösungs-Policy und Neuaufbau der abgeleiteten Kreis-Geometrie.

use glam::DVec2;

use super::state::{GeodesicCircle, StepMode};
use crate::core::{convert_distance, geomath, Units};
use crate::error::{CircleError, CircleResult};
use crate::shared::options::RESOLUTION_FACTOR;
use crate::shared::{STEP_COUNT_MAX, STEP_COUNT_MIN, ZOOM_LEVEL_MIN};

/// Himmelsrichtung eines Kontrollpunkts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cardinal {
    North,
    East,
    South,
    West,
}

impl Cardinal {
    /// Reihenfolge der Kontrollpunkte im Kreis und in der FeatureCollection.
    pub const ALL: [Cardinal; 4] = [
        Cardinal::North,
        Cardinal::East,
        Cardinal::South,
        Cardinal::West,
    ];

    /// Kurs in Grad (West als −90°).
    pub fn bearing(self) -> f64 {
        match self {
            Cardinal::North => 0.0,
            Cardinal::East => 90.0,
            Cardinal::South => 180.0,
            Cardinal::West => -90.0,
        }
    }

    /// Index in `GeodesicCircle::control_points`.
    pub fn index(self) -> usize {
        match self {
            Cardinal::North => 0,
            Cardinal::East => 1,
            Cardinal::South => 2,
            Cardinal::West => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Cardinal::North => "north",
            Cardinal::East => "east",
            Cardinal::South => "south",
            Cardinal::West => "west",
        }
    }
}

/// Prüft den Radius: endlich und > 0.
pub(crate) fn validate_radius(radius: f64) -> CircleResult<()> {
    if radius.is_finite() && radius > 0.0 {
        Ok(())
    } else {
        Err(CircleError::InvalidRadius(radius))
    }
}

/// Klemmt die Zoomstufe auf `ZOOM_LEVEL_MIN` (NaN ergibt ebenfalls das Minimum).
pub fn clamp_zoom(zoom: f64) -> f64 {
    zoom.max(ZOOM_LEVEL_MIN)
}

/// Ungekappte Schrittzahl: `(sqrt(radius_km * 250) * zoom)²`.
pub fn raw_step_count(radius: f64, units: Units, zoom: f64) -> f64 {
    let radius_km = convert_distance(radius, units, Units::Kilometers);
    let zoom = clamp_zoom(zoom);
    ((radius_km * RESOLUTION_FACTOR).sqrt() * zoom).powi(2)
}

/// Schrittzahl nach Auflösungs-Policy, gerundet und auf `[3, STEP_COUNT_MAX]` begrenzt.
pub fn resolve_step_count(radius: f64, units: Units, zoom: f64) -> usize {
    let raw = raw_step_count(radius, units, zoom).round();
    if raw > STEP_COUNT_MAX as f64 {
        return STEP_COUNT_MAX;
    }
    // `as` saturiert, NaN wird 0 und landet beim Minimum
    (raw as usize).max(STEP_COUNT_MIN)
}

/// Begrenzt eine explizit gesetzte Schrittzahl auf `STEP_COUNT_MAX`.
pub(crate) fn cap_explicit_steps(steps: usize) -> usize {
    if steps > STEP_COUNT_MAX {
        log::warn!(
            "Explizite Schrittzahl {} ueber Obergrenze, begrenze auf {}",
            steps,
            STEP_COUNT_MAX
        );
        return STEP_COUNT_MAX;
    }
    steps
}

/// True, wenn die Obergrenze mit diesem Neuaufbau erstmals erreicht wird.
pub(crate) fn cap_newly_reached(previous: usize, next: usize) -> bool {
    next == STEP_COUNT_MAX && previous != STEP_COUNT_MAX
}

/// Geschlossener Ring aus `steps` Punkten in gleichmäßigen Kursabständen.
pub fn circle_ring(center: DVec2, radius: f64, steps: usize, units: Units) -> Vec<DVec2> {
    let mut ring = Vec::with_capacity(steps + 1);
    let interval = 360.0 / steps as f64;
    for i in 0..steps {
        ring.push(geomath::destination(
            center,
            radius,
            i as f64 * interval,
            units,
        ));
    }
    if let Some(&first) = ring.first() {
        ring.push(first);
    }
    ring
}

/// Die vier Kontrollpunkte (N, O, S, W) im Abstand `radius`.
pub fn cardinal_points(center: DVec2, radius: f64, units: Units) -> [DVec2; 4] {
    Cardinal::ALL.map(|c| geomath::destination(center, radius, c.bearing(), units))
}

impl GeodesicCircle {
    /// Vollständiger Neuaufbau: Schrittzahl (nur im Auto-Modus), Ring, Kontrollpunkte.
    pub(crate) fn rebuild(&mut self) {
        if self.step_mode == StepMode::Auto {
            let steps = resolve_step_count(self.radius, self.units, self.zoom_level);
            if cap_newly_reached(self.step_count, steps) {
                log::warn!(
                    "Schrittzahl {:.0} ueber Obergrenze, begrenze auf {}",
                    raw_step_count(self.radius, self.units, self.zoom_level).round(),
                    STEP_COUNT_MAX
                );
            }
            self.step_count = steps;
        }
        self.polygon = circle_ring(self.center, self.radius, self.step_count, self.units);
        self.control_points = cardinal_points(self.center, self.radius, self.units);
        log::debug!(
            "Kreis neu aufgebaut: r={} {}, zoom={}, steps={}",
            self.radius,
            self.units,
            self.zoom_level,
            self.step_count
        );
    }
}
