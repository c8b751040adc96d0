//! Ground → flight → ground itineraries.
//!
//! The itinerary drives from the origin to its nearest airport, flies to
//! the airport nearest the destination and drives the rest of the way.
//! Every leg is mandatory: if any of them fails there is no itinerary.

use futures::future::join;
use tracing::debug;

use crate::domain::{
    Airport, Coordinate, MultimodalBreakdown, RouteSegment, RouteType, TravelMode, TravelOption,
    distance_km,
};
use crate::routing::Profile;

use super::config::TripConfig;
use super::error::{Endpoint, Leg, PlanError};
use super::flight::flight_leg;
use super::provider::{AirportProvider, RouteProvider};

/// A complete multimodal itinerary.
#[derive(Debug, Clone)]
pub struct MultimodalItinerary {
    /// Origin to departure airport.
    pub ground1: RouteSegment,

    /// Departure airport to arrival airport, as a straight line.
    pub flight_path: [Coordinate; 2],

    /// Arrival airport to destination; two joined segments when the
    /// Manhattan fallback was used.
    pub ground2: RouteSegment,

    /// `[airport, midpoint, destination]` when the final leg used the
    /// Manhattan fallback.
    pub manhattan_path: Option<[Coordinate; 3]>,

    pub start_airport: Airport,

    pub end_airport: Airport,

    /// Aggregate option with the per-leg breakdown.
    pub option: TravelOption,
}

/// Builds multimodal itineraries.
pub struct MultimodalPlanner<'a, R: RouteProvider, A: AirportProvider> {
    router: &'a R,
    airports: &'a A,
    config: &'a TripConfig,
}

impl<'a, R: RouteProvider, A: AirportProvider> MultimodalPlanner<'a, R, A> {
    pub fn new(router: &'a R, airports: &'a A, config: &'a TripConfig) -> Self {
        Self {
            router,
            airports,
            config,
        }
    }

    /// Plan an itinerary from `origin` to `destination` through two airports.
    pub async fn plan(
        &self,
        origin: Coordinate,
        destination: Coordinate,
    ) -> Result<MultimodalItinerary, PlanError> {
        let (start_airport, end_airport) = self.find_airports(origin, destination).await?;
        debug!(
            start = %start_airport.display_name(),
            end = %end_airport.display_name(),
            "airports selected"
        );

        // The two ground legs are independent; wait for both before judging either.
        let ground1 = async {
            self.router
                .route(origin, start_airport.coordinate, Profile::Driving)
                .await
                .map_err(PlanError::routing(Leg::ToAirport))
        };
        let ground2 = self.final_leg(end_airport.coordinate, destination);
        let (ground1, ground2) = join(ground1, ground2).await;
        let ground1 = ground1?;
        let (ground2, manhattan_path) = ground2?;

        let overhead = self.config.multimodal_flight_overhead().as_secs_f64();
        let flight = flight_leg(
            self.config,
            start_airport.coordinate,
            end_airport.coordinate,
            overhead,
        );

        // Only the flight's emissions are counted; ground legs are left out.
        let option = TravelOption {
            mode: TravelMode::Flight,
            distance_km: flight.distance_km,
            duration_s: ground1.duration_s() + flight.duration_s + ground2.duration_s(),
            fuel_cost: 0.0,
            toll_cost: 0.0,
            carbon_g: flight.carbon_g,
            route_type: RouteType::MultimodalAerial,
            multimodal: Some(MultimodalBreakdown {
                ground1_distance_km: ground1.distance_km(),
                ground1_duration_s: ground1.duration_s(),
                ground2_distance_km: ground2.distance_km(),
                ground2_duration_s: ground2.duration_s(),
                total_distance_km: ground1.distance_km() + flight.distance_km + ground2.distance_km(),
            }),
        };

        Ok(MultimodalItinerary {
            ground1,
            flight_path: [start_airport.coordinate, end_airport.coordinate],
            ground2,
            manhattan_path,
            start_airport,
            end_airport,
            option,
        })
    }

    /// Look up both airports concurrently and check they differ.
    async fn find_airports(
        &self,
        origin: Coordinate,
        destination: Coordinate,
    ) -> Result<(Airport, Airport), PlanError> {
        let radius = self.config.airport_search_radius_km;
        let (start, end) = join(
            self.airports.nearest(origin, radius),
            self.airports.nearest(destination, radius),
        )
        .await;

        let start = start.map_err(|source| PlanError::NoAirport {
            endpoint: Endpoint::Start,
            source,
        })?;
        let end = end.map_err(|source| PlanError::NoAirport {
            endpoint: Endpoint::End,
            source,
        })?;

        if start.is_same_as(&end) {
            return Err(PlanError::SameAirport {
                name: start.display_name(),
            });
        }

        Ok((start, end))
    }

    /// Route from the arrival airport to the destination.
    ///
    /// When the destination is far from the airport, the leg goes through
    /// a midpoint on the airport's parallel and the destination's meridian,
    /// routed as two separate segments.
    async fn final_leg(
        &self,
        airport: Coordinate,
        destination: Coordinate,
    ) -> Result<(RouteSegment, Option<[Coordinate; 3]>), PlanError> {
        let remaining = distance_km(airport, destination);

        if remaining <= self.config.manhattan_fallback_km {
            let segment = self
                .router
                .route(airport, destination, Profile::Driving)
                .await
                .map_err(PlanError::routing(Leg::FromAirport))?;
            return Ok((segment, None));
        }

        let midpoint = Coordinate {
            latitude: airport.latitude,
            longitude: destination.longitude,
        };
        debug!(remaining_km = remaining, %midpoint, "final leg via manhattan midpoint");

        let (first, second) = join(
            self.router.route(airport, midpoint, Profile::Driving),
            self.router.route(midpoint, destination, Profile::Driving),
        )
        .await;
        let first = first.map_err(PlanError::routing(Leg::FromAirportToMidpoint))?;
        let second = second.map_err(PlanError::routing(Leg::MidpointToDestination))?;

        Ok((first.concat(&second), Some([airport, midpoint, destination])))
    }
}
