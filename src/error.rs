//! Fehler-Taxonomie des Kreis-Modells.
//!
//! Alle Fehler sind lokale, synchrone Validierungsfehler. Eine abgelehnte
//! Mutation lässt den Kreis unverändert.

use thiserror::Error;

/// Validierungsfehler bei Konstruktion oder Mutation eines `GeodesicCircle`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CircleError {
    /// Radius ist nicht endlich oder ≤ 0
    #[error("Ungültiger Radius: {0} (muss endlich und > 0 sein)")]
    InvalidRadius(f64),
    /// Einheit liegt nicht in {miles, kilometers, degrees, radians}
    #[error("Unbekannte Einheit: '{0}' (erlaubt: miles, kilometers, degrees, radians)")]
    InvalidUnits(String),
    /// Explizite Schrittzahl < 3
    #[error("Ungültige Schrittzahl: {0} (mindestens 3)")]
    InvalidStepCount(usize),
}

/// Ergebnis-Alias für Kreis-Operationen.
pub type CircleResult<T> = Result<T, CircleError>;
