//! Flight estimates from great-circle distance alone.

use crate::domain::{Coordinate, RouteType, TravelMode, TravelOption, distance_km, round_km};

use super::config::TripConfig;
use super::cost::CostModel;

/// Figures of a single flight leg.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightLeg {
    /// Great-circle distance, rounded to two decimals.
    pub distance_km: f64,
    /// Cruise time plus airport overhead.
    pub duration_s: f64,
    pub carbon_g: f64,
}

/// Estimate a flight between two points with the given ground overhead.
pub fn flight_leg(config: &TripConfig, from: Coordinate, to: Coordinate, overhead_s: f64) -> FlightLeg {
    let model = CostModel::new(config);
    let distance = round_km(distance_km(from, to));

    FlightLeg {
        distance_km: distance,
        duration_s: model.estimate_time(distance, TravelMode::Flight) + overhead_s,
        carbon_g: model.estimate_carbon(distance, TravelMode::Flight),
    }
}

/// Direct point-to-point flight option.
///
/// Pure computation; there is no failure mode.
pub fn direct_flight(config: &TripConfig, origin: Coordinate, destination: Coordinate) -> TravelOption {
    let overhead = config.direct_flight_overhead().as_secs_f64();
    let leg = flight_leg(config, origin, destination, overhead);

    TravelOption {
        mode: TravelMode::Flight,
        distance_km: leg.distance_km,
        duration_s: leg.duration_s,
        fuel_cost: 0.0,
        toll_cost: 0.0,
        carbon_g: leg.carbon_g,
        route_type: RouteType::Aerial,
        multimodal: None,
    }
}
