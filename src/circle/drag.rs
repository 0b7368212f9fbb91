//! Drag-Logik für die Kreis-Handles (Mittelpunkt und Kontrollpunkte).
//!
//! Mittelpunkt ziehen verschiebt den Kreis, ein Kontrollpunkt ändert den Radius
//! auf die Distanz zwischen Mittelpunkt und Cursor.

use glam::DVec2;

use super::geometry::Cardinal;
use super::state::GeodesicCircle;
use crate::core::geomath;
use crate::error::CircleResult;
use crate::shared::COORD_PRECISION;

/// Welcher Handle wird gerade per Drag verschoben?
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragTarget {
    Center,
    ControlPoint(Cardinal),
}

/// Gibt die Positionen aller ziehbaren Handles zurück (Mittelpunkt, dann N, O, S, W).
pub fn drag_targets(circle: &GeodesicCircle) -> Vec<DVec2> {
    let mut targets = Vec::with_capacity(5);
    targets.push(circle.center());
    targets.extend(circle.control_points());
    targets
}

/// Laufende Drag-Interaktion auf einem Kreis.
#[derive(Debug, Clone, Default)]
pub struct CircleDrag {
    dragging: Option<DragTarget>,
}

impl CircleDrag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Aktuell gegriffener Handle.
    pub fn target(&self) -> Option<DragTarget> {
        self.dragging
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging.is_some()
    }

    /// Startet einen Drag auf dem Handle nächst `pos`.
    ///
    /// `pick_radius` ist in der Einheit des Kreises angegeben. Bei gleichem
    /// Abstand gewinnen Kontrollpunkte vor dem Mittelpunkt.
    pub fn on_drag_start(&mut self, circle: &GeodesicCircle, pos: DVec2, pick_radius: f64) -> bool {
        let units = circle.units();
        let control_points = circle.control_points();

        let mut candidates: Vec<(DragTarget, f64)> = Cardinal::ALL
            .iter()
            .map(|&c| {
                (
                    DragTarget::ControlPoint(c),
                    geomath::distance(control_points[c.index()], pos, units),
                )
            })
            .collect();
        candidates.push((
            DragTarget::Center,
            geomath::distance(circle.center(), pos, units),
        ));

        candidates.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));
        if let Some((target, dist)) = candidates.first() {
            if *dist <= pick_radius {
                self.dragging = Some(*target);
                return true;
            }
        }
        false
    }

    /// Wendet die Cursor-Position auf den gegriffenen Handle an.
    ///
    /// Liegt der Cursor beim Radius-Drag genau auf dem Mittelpunkt, wird der
    /// Radius 0 mit `InvalidRadius` abgelehnt und der Kreis bleibt unverändert.
    pub fn on_drag_update(&self, circle: &mut GeodesicCircle, pos: DVec2) -> CircleResult<()> {
        match self.dragging {
            Some(DragTarget::Center) => {
                circle.update_center(geomath::truncate_point(pos, COORD_PRECISION));
            }
            Some(DragTarget::ControlPoint(_)) => {
                let radius = geomath::distance(circle.center(), pos, circle.units());
                circle.update_radius(radius)?;
            }
            None => {}
        }
        Ok(())
    }

    /// Beendet den Drag.
    pub fn on_drag_end(&mut self) {
        self.dragging = None;
    }
}
