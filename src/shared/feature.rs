//! GeoJSON-kompatible Ausgabetypen für die Übergabe an eine Map-Datenquelle.
//!
//! Koordinaten sind `DVec2` mit x = Longitude, y = Latitude (Grad) und werden
//! von glam als `[lon, lat]` serialisiert.

use glam::DVec2;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Freie Metadaten eines Features (werden unverändert durchgereicht).
pub type Properties = Map<String, Value>;

/// Geometrie eines Features.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "coordinates")]
pub enum Geometry {
    /// Einzelner Punkt
    Point(DVec2),
    /// Polygon aus geschlossenen Ringen (erster Ring = Außenrand)
    Polygon(Vec<Vec<DVec2>>),
}

impl Geometry {
    /// Außenring eines Polygons, `None` für Punkte.
    pub fn exterior(&self) -> Option<&[DVec2]> {
        match self {
            Geometry::Polygon(rings) => rings.first().map(Vec::as_slice),
            Geometry::Point(_) => None,
        }
    }
}

/// Ein einzelnes Feature mit Geometrie und Properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "Feature")]
pub struct Feature {
    pub properties: Properties,
    pub geometry: Geometry,
}

impl Feature {
    /// Punkt-Feature ohne Properties.
    pub fn point(position: DVec2) -> Self {
        Self {
            properties: Properties::new(),
            geometry: Geometry::Point(position),
        }
    }

    /// Polygon-Feature aus einem einzelnen Außenring.
    pub fn polygon(ring: Vec<DVec2>, properties: Properties) -> Self {
        Self {
            properties,
            geometry: Geometry::Polygon(vec![ring]),
        }
    }

    /// Setzt eine Property und gibt das Feature zurück (Builder-Stil).
    pub fn with_property(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.properties.insert(key.to_string(), value.into());
        self
    }

    /// True wenn das Feature den Kreismittelpunkt markiert (`{"type": "center"}`).
    pub fn is_center(&self) -> bool {
        self.properties.get("type").and_then(Value::as_str) == Some("center")
    }
}

/// Sammlung von Features (Übergabeformat an den Renderer).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename = "FeatureCollection")]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    pub fn new(features: Vec<Feature>) -> Self {
        Self { features }
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Serialisiert die Sammlung als GeoJSON-String.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Achsenparallele Bounding-Box in Grad.
///
/// Serialisiert als `[minLon, minLat, maxLon, maxLat]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 4]", into = "[f64; 4]")]
pub struct Bounds {
    /// Südwest-Ecke (min lon, min lat)
    pub min: DVec2,
    /// Nordost-Ecke (max lon, max lat)
    pub max: DVec2,
}

impl Bounds {
    pub fn new(min: DVec2, max: DVec2) -> Self {
        Self { min, max }
    }

    /// `[minLon, minLat, maxLon, maxLat]`
    pub fn to_array(self) -> [f64; 4] {
        [self.min.x, self.min.y, self.max.x, self.max.y]
    }

    /// Prüft ob ein Punkt innerhalb (inkl. Rand) liegt.
    pub fn contains(&self, p: DVec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Geschlossener Ring SW → SO → NO → NW → SW.
    pub fn to_ring(self) -> Vec<DVec2> {
        let sw = self.min;
        let se = DVec2::new(self.max.x, self.min.y);
        let ne = self.max;
        let nw = DVec2::new(self.min.x, self.max.y);
        vec![sw, se, ne, nw, sw]
    }
}

impl From<Bounds> for [f64; 4] {
    fn from(b: Bounds) -> Self {
        b.to_array()
    }
}

impl From<[f64; 4]> for Bounds {
    fn from(a: [f64; 4]) -> Self {
        Self::new(DVec2::new(a[0], a[1]), DVec2::new(a[2], a[3]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_point_feature_json_shape() {
        let f = Feature::point(DVec2::new(-75.343, 39.984)).with_property("type", "center");
        let value = serde_json::to_value(&f).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "Feature",
                "properties": { "type": "center" },
                "geometry": { "type": "Point", "coordinates": [-75.343, 39.984] }
            })
        );
        assert!(f.is_center());
    }

    #[test]
    fn test_collection_has_type_tag() {
        let fc = FeatureCollection::new(vec![Feature::point(DVec2::ZERO)]);
        let value = serde_json::to_value(&fc).unwrap();
        assert_eq!(value["type"], "FeatureCollection");
        assert_eq!(value["features"].as_array().map(Vec::len), Some(1));
    }

    #[test]
    fn test_polygon_exterior() {
        let ring = vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(1.0, 0.0),
            DVec2::new(1.0, 1.0),
            DVec2::new(0.0, 0.0),
        ];
        let f = Feature::polygon(ring.clone(), Properties::new());
        assert_eq!(f.geometry.exterior(), Some(ring.as_slice()));
        assert!(!f.is_center());
    }

    #[test]
    fn test_bounds_ring_is_closed() {
        let b = Bounds::new(DVec2::new(-1.0, -2.0), DVec2::new(3.0, 4.0));
        let ring = b.to_ring();
        assert_eq!(ring.len(), 5);
        assert_eq!(ring.first(), ring.last());
        assert_eq!(ring[2], DVec2::new(3.0, 4.0));
        assert_eq!(serde_json::to_value(b).unwrap(), json!([-1.0, -2.0, 3.0, 4.0]));
    }
}
