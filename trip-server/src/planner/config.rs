//! Trip planning parameters.

use std::time::Duration;

/// Numeric model of the trip planner: speeds, prices, emission factors and
/// the distance thresholds that switch planners on and off.
///
/// Costs are in Mexican pesos; distances in kilometres; speeds in km/h.
#[derive(Debug, Clone, PartialEq)]
pub struct TripConfig {
    /// Car speed on the urban share of a trip.
    pub car_speed_urban_kmh: f64,

    /// Car speed on the highway share of a trip.
    pub car_speed_highway_kmh: f64,

    /// Share of a car trip driven in town (the rest is highway).
    pub car_urban_share: f64,

    /// Motorcycle time is car time divided by this factor.
    pub motorcycle_speed_factor: f64,

    pub bike_speed_kmh: f64,

    pub walk_speed_kmh: f64,

    /// Cruise speed used for all flight estimates.
    pub flight_speed_kmh: f64,

    pub fuel_price_per_litre: f64,

    pub toll_price_per_km: f64,

    pub car_efficiency_km_per_litre: f64,

    pub motorcycle_efficiency_km_per_litre: f64,

    pub car_carbon_g_per_km: f64,

    pub motorcycle_carbon_g_per_km: f64,

    pub flight_carbon_g_per_km: f64,

    /// Ground time added to a direct flight (check-in, security, boarding).
    pub direct_flight_overhead_hours: f64,

    /// Ground time added to the flight leg of a multimodal itinerary.
    pub multimodal_flight_overhead_hours: f64,

    /// Flights are only proposed above this straight-line distance.
    pub flight_threshold_km: f64,

    /// Cycling is only routed when the driving distance is at most this.
    pub max_bike_km: f64,

    /// Walking is only routed when the driving distance is at most this.
    pub max_walk_km: f64,

    /// Search radius for the nearest airport to each endpoint.
    pub airport_search_radius_km: f64,

    /// A final leg longer than this is routed through a Manhattan midpoint.
    pub manhattan_fallback_km: f64,
}

impl TripConfig {
    /// Returns the direct flight overhead as a Duration.
    pub fn direct_flight_overhead(&self) -> Duration {
        Duration::from_secs_f64(self.direct_flight_overhead_hours * 3600.0)
    }

    /// Returns the multimodal flight overhead as a Duration.
    pub fn multimodal_flight_overhead(&self) -> Duration {
        Duration::from_secs_f64(self.multimodal_flight_overhead_hours * 3600.0)
    }
}

impl Default for TripConfig {
    fn default() -> Self {
        Self {
            car_speed_urban_kmh: 50.0,
            car_speed_highway_kmh: 80.0,
            car_urban_share: 0.7,
            motorcycle_speed_factor: 1.2, // 20% faster than a car
            bike_speed_kmh: 15.0,
            walk_speed_kmh: 5.0,
            flight_speed_kmh: 800.0,
            fuel_price_per_litre: 23.50,
            toll_price_per_km: 1.80,
            car_efficiency_km_per_litre: 12.0,
            motorcycle_efficiency_km_per_litre: 25.0,
            car_carbon_g_per_km: 184.0,
            motorcycle_carbon_g_per_km: 98.0,
            flight_carbon_g_per_km: 255.0,
            direct_flight_overhead_hours: 2.0,
            multimodal_flight_overhead_hours: 2.5,
            flight_threshold_km: 300.0,
            max_bike_km: 200.0,
            max_walk_km: 50.0,
            airport_search_radius_km: 500.0,
            manhattan_fallback_km: 50.0,
        }
    }
}
