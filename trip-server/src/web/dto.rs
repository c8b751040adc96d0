//! Data transfer objects for web requests and responses.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{Airport, Coordinate, OptionKey, TravelOption};
use crate::planner::{MultimodalItinerary, TripResult};

/// Query string of a place search.
#[derive(Debug, Deserialize)]
pub struct PlaceSearchRequest {
    /// Free-text place name
    pub q: Option<String>,
}

/// Position of the best place match.
#[derive(Debug, Serialize)]
pub struct PlaceSearchResponse {
    pub lat: f64,
    pub lon: f64,
}

/// Request to plan a trip. Points are `[lat, lon]` pairs.
#[derive(Debug, Deserialize)]
pub struct PlanTripRequest {
    pub start: [f64; 2],
    pub end: [f64; 2],
}

/// Geometries of a multimodal itinerary, for drawing.
#[derive(Debug, Serialize)]
pub struct MultimodalParts {
    /// Origin to departure airport
    pub ground1: Vec<Coordinate>,

    /// Departure airport to arrival airport
    pub flight: Vec<Coordinate>,

    /// Arrival airport to destination
    pub ground2: Vec<Coordinate>,

    /// Manhattan sketch of the final leg, when the fallback was used
    pub manhattan_path: Option<Vec<Coordinate>>,
}

/// An airport for display.
#[derive(Debug, Serialize)]
pub struct AirportInfo {
    /// Display name, e.g. "AICM (MEX)"
    pub name: String,

    /// IATA code
    pub code: String,

    pub lat: f64,

    pub lon: f64,

    /// Distance from the trip endpoint
    pub distance_km: f64,
}

/// Airports used by a multimodal itinerary.
#[derive(Debug, Serialize)]
pub struct AirportPair {
    pub start: AirportInfo,
    pub end: AirportInfo,
}

/// Successful trip planning response.
#[derive(Debug, Serialize)]
pub struct PlanTripResponse {
    /// Always "success"
    pub status: &'static str,

    /// Always "combined": details mix ground and air options
    pub route_type: &'static str,

    /// Options keyed by mode
    pub details: BTreeMap<OptionKey, TravelOption>,

    pub terrestrial_route: Option<Vec<Coordinate>>,

    pub manhattan_path: Option<Vec<Coordinate>>,

    pub multimodal_parts: Option<MultimodalParts>,

    pub airports: Option<AirportPair>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Always "error"
    pub status: &'static str,

    /// Error message
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: "error",
            message: message.into(),
        }
    }
}

// Conversion implementations

impl From<&Airport> for AirportInfo {
    fn from(airport: &Airport) -> Self {
        Self {
            name: airport.display_name(),
            code: airport.carrier_code.clone(),
            lat: airport.coordinate.latitude,
            lon: airport.coordinate.longitude,
            distance_km: airport.distance_km,
        }
    }
}

impl From<&MultimodalItinerary> for MultimodalParts {
    fn from(itinerary: &MultimodalItinerary) -> Self {
        Self {
            ground1: itinerary.ground1.geometry().to_vec(),
            flight: itinerary.flight_path.to_vec(),
            ground2: itinerary.ground2.geometry().to_vec(),
            manhattan_path: itinerary.manhattan_path.map(|p| p.to_vec()),
        }
    }
}

impl From<&TripResult> for PlanTripResponse {
    fn from(result: &TripResult) -> Self {
        Self {
            status: "success",
            route_type: "combined",
            details: result.options.clone(),
            terrestrial_route: result
                .terrestrial_route
                .as_ref()
                .map(|r| r.geometry().to_vec()),
            manhattan_path: result.manhattan_path.map(|p| p.to_vec()),
            multimodal_parts: result.multimodal.as_ref().map(MultimodalParts::from),
            airports: result.multimodal.as_ref().map(|m| AirportPair {
                start: AirportInfo::from(&m.start_airport),
                end: AirportInfo::from(&m.end_airport),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{RouteSegment, RouteType, TravelMode};
    use crate::planner::{CostModel, TripConfig};

    fn coord(lat: f64, lon: f64) -> Coordinate {
        Coordinate::new(lat, lon).unwrap()
    }

    fn terrestrial_result() -> TripResult {
        let config = TripConfig::default();
        let model = CostModel::new(&config);
        let route = RouteSegment::new(
            vec![coord(19.4326, -99.1332), coord(19.2, -98.7), coord(19.0414, -98.2063)],
            134.2,
            6000.0,
        )
        .unwrap();

        TripResult {
            options: BTreeMap::from([
                (
                    OptionKey::Car,
                    model.option(134.2, TravelMode::Car, RouteType::Terrestrial),
                ),
                (
                    OptionKey::Motorcycle,
                    model.option(134.2, TravelMode::Motorcycle, RouteType::Terrestrial),
                ),
            ]),
            terrestrial_route: Some(route),
            manhattan_path: Some([
                coord(19.2, -98.7),
                coord(19.0414, -98.7),
                coord(19.0414, -98.2063),
            ]),
            multimodal: None,
        }
    }

    #[test]
    fn plan_response_shape() {
        let response = PlanTripResponse::from(&terrestrial_result());
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["status"], "success");
        assert_eq!(json["route_type"], "combined");
        assert_eq!(json["details"]["car"]["mode"], "car");
        assert_eq!(json["details"]["car"]["route_type"], "terrestrial");
        assert_eq!(json["details"]["motorcycle"]["distance_km"], 134.2);
        assert_eq!(json["terrestrial_route"][0][0], 19.4326);
        assert_eq!(json["terrestrial_route"][0][1], -99.1332);
        assert_eq!(json["manhattan_path"].as_array().unwrap().len(), 3);
        assert!(json["multimodal_parts"].is_null());
        assert!(json["airports"].is_null());
    }

    #[test]
    fn request_parses_pairs() {
        let req: PlanTripRequest =
            serde_json::from_str(r#"{"start": [19.4326, -99.1332], "end": [20.6597, -103.3496]}"#)
                .unwrap();
        assert_eq!(req.start, [19.4326, -99.1332]);
        assert_eq!(req.end, [20.6597, -103.3496]);

        assert!(serde_json::from_str::<PlanTripRequest>(r#"{"start": [1.0], "end": [2.0, 3.0]}"#).is_err());
        assert!(serde_json::from_str::<PlanTripRequest>(r#"{"start": [1.0, 2.0]}"#).is_err());
    }

    #[test]
    fn airport_info_uses_display_name() {
        let airport = Airport {
            name: "AICM".into(),
            carrier_code: "MEX".into(),
            coordinate: coord(19.4363, -99.0721),
            distance_km: 6.42,
        };
        let info = AirportInfo::from(&airport);
        assert_eq!(info.name, "AICM (MEX)");
        assert_eq!(info.code, "MEX");
        assert_eq!(info.lat, 19.4363);
        assert_eq!(info.distance_km, 6.42);
    }

    #[test]
    fn error_response_shape() {
        let json = serde_json::to_value(ErrorResponse::new("boom")).unwrap();
        assert_eq!(json["status"], "error");
        assert_eq!(json["message"], "boom");
    }
}
