//! Zentrale Konfiguration: Konstanten, Konstruktions-Optionen und Config-Datei.
//!
//! `CircleOptions` entspricht den optionalen Konstruktions-Parametern eines Kreises.
//! `CircleConfig` ist die TOML-Datei des Demo-Binaries.

use std::path::{Path, PathBuf};

use anyhow::Context;
use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::feature::Properties;
use crate::core::Units;

// ── Auflösung ───────────────────────────────────────────────────────

/// Standard-Zoomstufe, wenn keine angegeben ist.
pub const DEFAULT_ZOOM_LEVEL: f64 = 8.0;
/// Untergrenze der Zoomstufe für die Schrittberechnung.
pub const ZOOM_LEVEL_MIN: f64 = 0.1;
/// Faktor in `sqrt(radius_km * RESOLUTION_FACTOR) * zoom`.
pub const RESOLUTION_FACTOR: f64 = 250.0;
/// Minimale Eckenzahl des Kreis-Polygons.
pub const STEP_COUNT_MIN: usize = 3;
/// Maximale Eckenzahl des Kreis-Polygons (Render-Kosten begrenzen).
pub const STEP_COUNT_MAX: usize = 1024;

// ── Ausgabe ─────────────────────────────────────────────────────────

/// Nachkommastellen für Bounds, Bounding-Polygon und gezogene Mittelpunkte.
pub const COORD_PRECISION: u32 = 6;

// ── Demo-Kreis ──────────────────────────────────────────────────────

/// Standard-Mittelpunkt (lon, lat) des Demo-Binaries.
pub const DEMO_CENTER: [f64; 2] = [-75.343, 39.984];
/// Standard-Radius des Demo-Binaries.
pub const DEMO_RADIUS: f64 = 3.0;

/// Optionale Parameter bei der Konstruktion eines Kreises.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircleOptions {
    /// Einheit, in der der Radius interpretiert wird
    #[serde(default)]
    pub units: Units,
    /// Zoomstufe der Karte (steuert nur die Auflösung)
    #[serde(default = "default_zoom_level")]
    pub zoom_level: f64,
    /// Freie Metadaten, werden unverändert an das Polygon-Feature gehängt
    #[serde(default)]
    pub properties: Properties,
}

impl Default for CircleOptions {
    fn default() -> Self {
        Self {
            units: Units::default(),
            zoom_level: DEFAULT_ZOOM_LEVEL,
            properties: Properties::new(),
        }
    }
}

/// Serde-Default für `zoom_level`.
fn default_zoom_level() -> f64 {
    DEFAULT_ZOOM_LEVEL
}

impl CircleOptions {
    pub fn with_units(mut self, units: Units) -> Self {
        self.units = units;
        self
    }

    pub fn with_zoom_level(mut self, zoom_level: f64) -> Self {
        self.zoom_level = zoom_level;
        self
    }

    pub fn with_properties(mut self, properties: Properties) -> Self {
        self.properties = properties;
        self
    }
}

/// Inhalt der Config-Datei des Demo-Binaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircleConfig {
    /// Mittelpunkt als `[lon, lat]`
    pub center: [f64; 2],
    /// Radius in `options.units`
    pub radius: f64,
    #[serde(default)]
    pub options: CircleOptions,
}

impl Default for CircleConfig {
    fn default() -> Self {
        Self {
            center: DEMO_CENTER,
            radius: DEMO_RADIUS,
            options: CircleOptions::default(),
        }
    }
}

impl CircleConfig {
    /// Mittelpunkt als Vektor (x = lon, y = lat).
    pub fn center(&self) -> DVec2 {
        DVec2::from_array(self.center)
    }

    /// Parst eine Config aus TOML-Text.
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        toml::from_str(content).context("Config-TOML konnte nicht gelesen werden")
    }

    /// Lädt die Config aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_toml_str(&content) {
                Ok(config) => {
                    log::info!("Config geladen aus: {}", path.display());
                    config
                }
                Err(e) => {
                    log::warn!("Config-Datei fehlerhaft, verwende Standardwerte: {:#}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Config-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert die Config als TOML-Datei.
    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Config konnte nicht geschrieben werden: {}", path.display()))?;
        log::info!("Config gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Config-Datei neben der Binary.
    pub fn config_path() -> PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| PathBuf::from("geodesic-circle"))
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join("geodesic-circle.toml")
    }
}
