//! Travel options: the per-mode summaries a trip plan is made of.

use std::fmt;

use serde::Serialize;

/// How a traveller moves along an option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TravelMode {
    Car,
    Motorcycle,
    Bike,
    Walk,
    Flight,
}

/// What kind of path an option follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteType {
    /// A routed ground path.
    Terrestrial,
    /// A direct point-to-point flight.
    Aerial,
    /// Ground leg, flight, ground leg.
    MultimodalAerial,
}

/// Key of an option in a trip result.
///
/// Ordered so that results list ground modes first, then flights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionKey {
    Car,
    Motorcycle,
    Bike,
    Walk,
    Flight,
    MultimodalFlight,
}

impl OptionKey {
    pub fn as_str(self) -> &'static str {
        match self {
            OptionKey::Car => "car",
            OptionKey::Motorcycle => "motorcycle",
            OptionKey::Bike => "bike",
            OptionKey::Walk => "walk",
            OptionKey::Flight => "flight",
            OptionKey::MultimodalFlight => "multimodal_flight",
        }
    }
}

impl fmt::Display for OptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-leg figures of a ground → flight → ground itinerary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MultimodalBreakdown {
    pub ground1_distance_km: f64,
    pub ground1_duration_s: f64,
    pub ground2_distance_km: f64,
    pub ground2_duration_s: f64,
    pub total_distance_km: f64,
}

/// Summary of one way to make the trip.
///
/// All figures are non-negative. Costs are in the configured currency;
/// modes without an engine on the road always have zero fuel and tolls.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TravelOption {
    pub mode: TravelMode,
    pub distance_km: f64,
    pub duration_s: f64,
    pub fuel_cost: f64,
    pub toll_cost: f64,
    pub carbon_g: f64,
    pub route_type: RouteType,

    /// Present only for multimodal itineraries.
    #[serde(flatten)]
    pub multimodal: Option<MultimodalBreakdown>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn option(multimodal: Option<MultimodalBreakdown>) -> TravelOption {
        TravelOption {
            mode: TravelMode::Flight,
            distance_km: 400.0,
            duration_s: 9000.0,
            fuel_cost: 0.0,
            toll_cost: 0.0,
            carbon_g: 102000.0,
            route_type: RouteType::MultimodalAerial,
            multimodal,
        }
    }

    #[test]
    fn serializes_snake_case_enums() {
        let json = serde_json::to_value(option(None)).unwrap();
        assert_eq!(json["mode"], "flight");
        assert_eq!(json["route_type"], "multimodal_aerial");
        assert!(json.get("ground1_distance_km").is_none());
    }

    #[test]
    fn breakdown_is_flattened() {
        let json = serde_json::to_value(option(Some(MultimodalBreakdown {
            ground1_distance_km: 20.0,
            ground1_duration_s: 1200.0,
            ground2_distance_km: 15.0,
            ground2_duration_s: 900.0,
            total_distance_km: 435.0,
        })))
        .unwrap();

        assert_eq!(json["ground1_distance_km"], 20.0);
        assert_eq!(json["ground2_duration_s"], 900.0);
        assert_eq!(json["total_distance_km"], 435.0);
    }

    #[test]
    fn option_keys_order_ground_first() {
        let mut keys = vec![
            OptionKey::MultimodalFlight,
            OptionKey::Walk,
            OptionKey::Flight,
            OptionKey::Car,
        ];
        keys.sort();
        assert_eq!(
            keys,
            vec![
                OptionKey::Car,
                OptionKey::Walk,
                OptionKey::Flight,
                OptionKey::MultimodalFlight
            ]
        );
    }

    #[test]
    fn option_key_display_matches_serde() {
        for key in [
            OptionKey::Car,
            OptionKey::Motorcycle,
            OptionKey::Bike,
            OptionKey::Walk,
            OptionKey::Flight,
            OptionKey::MultimodalFlight,
        ] {
            let json = serde_json::to_string(&key).unwrap();
            assert_eq!(json, format!("\"{key}\""));
        }
    }
}
