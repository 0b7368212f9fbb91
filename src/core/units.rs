//! Distanz-Einheiten und exakte Umrechnung über den Erdradius.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CircleError;

/// Mittlerer Erdradius in Metern (sphärisches Modell).
pub const EARTH_RADIUS_M: f64 = 6_371_008.8;
/// Meter pro internationaler Meile.
const METERS_PER_MILE: f64 = 1_609.344;

/// Einheit, in der Radius und alle abgeleiteten Distanzen interpretiert werden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Units {
    /// Internationale Meilen
    Miles,
    /// Kilometer
    #[default]
    Kilometers,
    /// Bogengrad auf der Erdoberfläche
    Degrees,
    /// Bogenmaß auf der Erdoberfläche
    Radians,
}

impl Units {
    /// Alle unterstützten Einheiten.
    pub const ALL: [Units; 4] = [
        Units::Miles,
        Units::Kilometers,
        Units::Degrees,
        Units::Radians,
    ];

    /// Erdradius ausgedrückt in dieser Einheit (Faktor Bogenmaß → Einheit).
    pub fn earth_radius(self) -> f64 {
        match self {
            Units::Miles => EARTH_RADIUS_M / METERS_PER_MILE,
            Units::Kilometers => EARTH_RADIUS_M / 1_000.0,
            Units::Degrees => 180.0 / std::f64::consts::PI,
            Units::Radians => 1.0,
        }
    }

    /// Bezeichner wie in Konfiguration und GeoJSON-Properties.
    pub fn as_str(self) -> &'static str {
        match self {
            Units::Miles => "miles",
            Units::Kilometers => "kilometers",
            Units::Degrees => "degrees",
            Units::Radians => "radians",
        }
    }

    /// Distanz in dieser Einheit → Zentriwinkel (Bogenmaß).
    pub fn length_to_radians(self, distance: f64) -> f64 {
        distance / self.earth_radius()
    }

    /// Zentriwinkel (Bogenmaß) → Distanz in dieser Einheit.
    pub fn radians_to_length(self, radians: f64) -> f64 {
        radians * self.earth_radius()
    }
}

/// Rechnet eine Distanz von `from` nach `to` um (immer über das Bogenmaß).
pub fn convert_distance(distance: f64, from: Units, to: Units) -> f64 {
    if from == to {
        return distance;
    }
    to.radians_to_length(from.length_to_radians(distance))
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Units {
    type Err = CircleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Units::ALL
            .into_iter()
            .find(|u| u.as_str() == s)
            .ok_or_else(|| CircleError::InvalidUnits(s.to_string()))
    }
}

impl TryFrom<String> for Units {
    type Error = CircleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_parse_known_units() {
        assert_eq!("miles".parse::<Units>(), Ok(Units::Miles));
        assert_eq!("kilometers".parse::<Units>(), Ok(Units::Kilometers));
        assert_eq!("degrees".parse::<Units>(), Ok(Units::Degrees));
        assert_eq!("radians".parse::<Units>(), Ok(Units::Radians));
    }

    #[test]
    fn test_parse_unknown_units_fails() {
        assert_eq!(
            "furlongs".parse::<Units>(),
            Err(CircleError::InvalidUnits("furlongs".to_string()))
        );
        // Keine stillen Aliase
        assert!("km".parse::<Units>().is_err());
        assert!("Kilometers".parse::<Units>().is_err());
    }

    #[test]
    fn test_km_to_miles() {
        let miles = convert_distance(1.609344, Units::Kilometers, Units::Miles);
        assert_relative_eq!(miles, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_radians_to_km_is_earth_radius() {
        assert_relative_eq!(
            convert_distance(1.0, Units::Radians, Units::Kilometers),
            6_371.0088
        );
    }

    #[test]
    fn test_degrees_roundtrip_via_km() {
        let km = convert_distance(1.0, Units::Degrees, Units::Kilometers);
        // 1° Bogen ≈ 111.195 km
        assert_relative_eq!(km, 111.195, epsilon = 1e-3);
        assert_relative_eq!(
            convert_distance(km, Units::Kilometers, Units::Degrees),
            1.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        let json = serde_json::to_string(&Units::Miles).unwrap();
        assert_eq!(json, "\"miles\"");
        let parsed: Units = serde_json::from_str("\"radians\"").unwrap();
        assert_eq!(parsed, Units::Radians);
        assert!(serde_json::from_str::<Units>("\"leagues\"").is_err());
    }
}
