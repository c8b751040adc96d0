//! Top-level trip planning.
//!
//! Runs every planner that applies to a trip, waits for all of them and
//! merges whatever succeeded. A failing planner never takes the others
//! down; the trip only fails when nothing at all could be computed.

use std::collections::BTreeMap;

use futures::future::join;
use tracing::{info, warn};

use crate::domain::{Coordinate, OptionKey, RouteSegment, TravelOption, distance_km};

use super::config::TripConfig;
use super::error::PlanError;
use super::flight::direct_flight;
use super::multimodal::{MultimodalItinerary, MultimodalPlanner};
use super::provider::{AirportProvider, RouteProvider};
use super::terrestrial::{TerrestrialPlan, TerrestrialPlanner};

/// Merged result of trip planning. Never empty.
#[derive(Debug, Clone)]
pub struct TripResult {
    pub options: BTreeMap<OptionKey, TravelOption>,

    /// Driving route, when the terrestrial plan succeeded.
    pub terrestrial_route: Option<RouteSegment>,

    /// Display sketch of the driving route's final approach.
    pub manhattan_path: Option<[Coordinate; 3]>,

    /// Ground → flight → ground itinerary, when one was found.
    pub multimodal: Option<MultimodalItinerary>,
}

/// Trip planner over a routing engine and an airport lookup.
///
/// Holds no per-request state; one instance serves all requests.
pub struct TripPlanner<R: RouteProvider, A: AirportProvider> {
    router: R,
    airports: A,
    config: TripConfig,
}

impl<R: RouteProvider, A: AirportProvider> TripPlanner<R, A> {
    pub fn new(router: R, airports: A, config: TripConfig) -> Self {
        Self {
            router,
            airports,
            config,
        }
    }

    /// Plan every applicable option from `start` to `end`.
    ///
    /// Flights are only considered when the straight-line distance exceeds
    /// the configured threshold.
    pub async fn plan(&self, start: Coordinate, end: Coordinate) -> Result<TripResult, PlanError> {
        let direct = distance_km(start, end);
        let consider_flights = direct > self.config.flight_threshold_km;
        info!(%start, %end, direct_km = direct, consider_flights, "planning trip");

        let terrestrial_planner = TerrestrialPlanner::new(&self.router, &self.config);
        let multimodal_planner = MultimodalPlanner::new(&self.router, &self.airports, &self.config);
        let terrestrial = terrestrial_planner.plan(start, end);

        let (terrestrial, multimodal) = if consider_flights {
            let multimodal = multimodal_planner.plan(start, end);
            let (terrestrial, multimodal) = join(terrestrial, multimodal).await;
            (terrestrial, Some(multimodal))
        } else {
            (terrestrial.await, None)
        };

        let mut result = TripResult {
            options: BTreeMap::new(),
            terrestrial_route: None,
            manhattan_path: None,
            multimodal: None,
        };

        match terrestrial {
            Ok(TerrestrialPlan {
                options,
                route,
                manhattan_path,
            }) => {
                result.options.extend(options);
                result.terrestrial_route = Some(route);
                result.manhattan_path = Some(manhattan_path);
            }
            Err(e) => warn!("terrestrial route unavailable: {e}"),
        }

        if consider_flights {
            result
                .options
                .insert(OptionKey::Flight, direct_flight(&self.config, start, end));
        }

        match multimodal {
            Some(Ok(itinerary)) => {
                result
                    .options
                    .insert(OptionKey::MultimodalFlight, itinerary.option.clone());
                result.multimodal = Some(itinerary);
            }
            Some(Err(e)) => warn!("multimodal route unavailable: {e}"),
            None => {}
        }

        if result.options.is_empty() {
            return Err(PlanError::NoOptions);
        }

        info!(
            options = ?result.options.keys().collect::<Vec<_>>(),
            "trip planned"
        );
        Ok(result)
    }
}
