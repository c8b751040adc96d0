//! Deterministic time, cost and emissions model.
//!
//! Every estimate is a pure function of a distance and a mode, so the same
//! trip always gets the same figures regardless of what the routing engine
//! reports for duration.

use crate::domain::{RouteType, TravelMode, TravelOption};

use super::config::TripConfig;

const SECS_PER_HOUR: f64 = 3600.0;

/// Money spent on the road for a trip.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Cost {
    pub fuel: f64,
    pub tolls: f64,
}

/// Per-mode formulas, parameterised by a [`TripConfig`].
#[derive(Debug, Clone, Copy)]
pub struct CostModel<'a> {
    config: &'a TripConfig,
}

impl<'a> CostModel<'a> {
    pub fn new(config: &'a TripConfig) -> Self {
        Self { config }
    }

    /// Travel time in seconds.
    ///
    /// Flights get cruise time only; airport overheads are added by the
    /// flight planners.
    pub fn estimate_time(&self, distance_km: f64, mode: TravelMode) -> f64 {
        let c = self.config;
        match mode {
            TravelMode::Car => {
                let urban = distance_km * c.car_urban_share;
                let highway = distance_km * (1.0 - c.car_urban_share);
                (urban / c.car_speed_urban_kmh + highway / c.car_speed_highway_kmh)
                    * SECS_PER_HOUR
            }
            TravelMode::Motorcycle => {
                self.estimate_time(distance_km, TravelMode::Car) / c.motorcycle_speed_factor
            }
            TravelMode::Bike => distance_km / c.bike_speed_kmh * SECS_PER_HOUR,
            TravelMode::Walk => distance_km / c.walk_speed_kmh * SECS_PER_HOUR,
            TravelMode::Flight => distance_km / c.flight_speed_kmh * SECS_PER_HOUR,
        }
    }

    /// Fuel and toll cost. Zero for modes without an engine on the road.
    pub fn estimate_cost(&self, distance_km: f64, mode: TravelMode) -> Cost {
        let c = self.config;
        let efficiency = match mode {
            TravelMode::Car => c.car_efficiency_km_per_litre,
            TravelMode::Motorcycle => c.motorcycle_efficiency_km_per_litre,
            TravelMode::Bike | TravelMode::Walk | TravelMode::Flight => return Cost::default(),
        };

        Cost {
            fuel: distance_km / efficiency * c.fuel_price_per_litre,
            tolls: distance_km * c.toll_price_per_km,
        }
    }

    /// Emissions in grams of CO₂.
    pub fn estimate_carbon(&self, distance_km: f64, mode: TravelMode) -> f64 {
        let c = self.config;
        let per_km = match mode {
            TravelMode::Car => c.car_carbon_g_per_km,
            TravelMode::Motorcycle => c.motorcycle_carbon_g_per_km,
            TravelMode::Flight => c.flight_carbon_g_per_km,
            TravelMode::Bike | TravelMode::Walk => 0.0,
        };
        distance_km * per_km
    }

    /// Build a complete single-mode option for a distance.
    pub fn option(&self, distance_km: f64, mode: TravelMode, route_type: RouteType) -> TravelOption {
        let cost = self.estimate_cost(distance_km, mode);
        TravelOption {
            mode,
            distance_km,
            duration_s: self.estimate_time(distance_km, mode),
            fuel_cost: cost.fuel,
            toll_cost: cost.tolls,
            carbon_g: self.estimate_carbon(distance_km, mode),
            route_type,
            multimodal: None,
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn motorcycle_never_slower_than_car(distance in 0.0f64..20_000.0) {
            let config = TripConfig::default();
            let model = CostModel::new(&config);

            let car = model.estimate_time(distance, TravelMode::Car);
            let moto = model.estimate_time(distance, TravelMode::Motorcycle);
            prop_assert!(car >= moto);
            if distance > 0.0 {
                prop_assert!(car > moto);
            }
        }

        #[test]
        fn human_powered_modes_cost_nothing(distance in 0.0f64..20_000.0) {
            let config = TripConfig::default();
            let model = CostModel::new(&config);

            prop_assert_eq!(model.estimate_cost(distance, TravelMode::Bike), Cost::default());
            prop_assert_eq!(model.estimate_cost(distance, TravelMode::Walk), Cost::default());
        }

        #[test]
        fn estimates_are_non_negative(distance in 0.0f64..20_000.0) {
            let config = TripConfig::default();
            let model = CostModel::new(&config);

            for mode in [
                TravelMode::Car,
                TravelMode::Motorcycle,
                TravelMode::Bike,
                TravelMode::Walk,
                TravelMode::Flight,
            ] {
                let option = model.option(distance, mode, RouteType::Terrestrial);
                prop_assert!(option.duration_s >= 0.0);
                prop_assert!(option.fuel_cost >= 0.0);
                prop_assert!(option.toll_cost >= 0.0);
                prop_assert!(option.carbon_g >= 0.0);
            }
        }
    }
}
