//! Overpass API response DTOs.

use std::collections::HashMap;

use serde::Deserialize;

use crate::domain::Coordinate;

/// Response of an Overpass QL query with `[out:json]`.
#[derive(Debug, Clone, Deserialize)]
pub struct OverpassResponse {
    #[serde(default)]
    pub elements: Vec<OverpassElement>,
}

/// A node, way or relation.
///
/// Nodes carry `lat`/`lon` directly; ways and relations only have a
/// `center` when the query asks for `out center`.
#[derive(Debug, Clone, Deserialize)]
pub struct OverpassElement {
    #[serde(rename = "type")]
    pub kind: String,

    pub id: i64,

    pub lat: Option<f64>,

    pub lon: Option<f64>,

    pub center: Option<OverpassCenter>,

    pub tags: Option<HashMap<String, String>>,
}

/// Centre point of a way or relation.
#[derive(Debug, Clone, Deserialize)]
pub struct OverpassCenter {
    pub lat: f64,
    pub lon: f64,
}

impl OverpassElement {
    /// Position of the element, from its own coordinates or its centre.
    pub fn coordinate(&self) -> Option<Coordinate> {
        let (lat, lon) = match (self.lat, self.lon, &self.center) {
            (Some(lat), Some(lon), _) => (lat, lon),
            (_, _, Some(center)) => (center.lat, center.lon),
            _ => return None,
        };
        Coordinate::new(lat, lon).ok()
    }

    /// Value of a tag, if present.
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags.as_ref()?.get(key).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_nodes_and_ways() {
        let response: OverpassResponse = serde_json::from_str(
            r#"{
                "version": 0.6,
                "elements": [
                    {"type": "node", "id": 1, "lat": 19.43, "lon": -99.07,
                     "tags": {"aeroway": "aerodrome", "iata": "MEX", "name": "AICM"}},
                    {"type": "way", "id": 2, "center": {"lat": 20.52, "lon": -103.31},
                     "tags": {"aeroway": "aerodrome", "iata": "GDL"}},
                    {"type": "relation", "id": 3}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(response.elements.len(), 3);

        let node = &response.elements[0];
        assert_eq!(node.kind, "node");
        assert_eq!(node.coordinate().unwrap().latitude, 19.43);
        assert_eq!(node.tag("iata"), Some("MEX"));

        let way = &response.elements[1];
        assert_eq!(way.coordinate().unwrap().longitude, -103.31);
        assert_eq!(way.tag("name"), None);

        let relation = &response.elements[2];
        assert!(relation.coordinate().is_none());
        assert!(relation.tag("iata").is_none());
    }

    #[test]
    fn missing_elements_is_empty() {
        let response: OverpassResponse = serde_json::from_str(r#"{"version": 0.6}"#).unwrap();
        assert!(response.elements.is_empty());
    }
}
