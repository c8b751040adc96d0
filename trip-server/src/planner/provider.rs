//! Collaborator seams for the planners.
//!
//! The planners only talk to the outside world through these traits, so
//! they can be exercised with in-memory fakes.

use std::future::Future;

use crate::airports::{AirportClient, AirportError};
use crate::domain::{Airport, Coordinate, RouteSegment};
use crate::routing::{Profile, RoutingClient, RoutingError};

/// Something that can route between two points.
pub trait RouteProvider: Sync {
    fn route(
        &self,
        origin: Coordinate,
        destination: Coordinate,
        profile: Profile,
    ) -> impl Future<Output = Result<RouteSegment, RoutingError>> + Send;
}

/// Something that can find the nearest commercial airport to a point.
pub trait AirportProvider: Sync {
    fn nearest(
        &self,
        point: Coordinate,
        radius_km: f64,
    ) -> impl Future<Output = Result<Airport, AirportError>> + Send;
}

impl RouteProvider for RoutingClient {
    async fn route(
        &self,
        origin: Coordinate,
        destination: Coordinate,
        profile: Profile,
    ) -> Result<RouteSegment, RoutingError> {
        RoutingClient::route(self, origin, destination, profile).await
    }
}

impl AirportProvider for AirportClient {
    async fn nearest(&self, point: Coordinate, radius_km: f64) -> Result<Airport, AirportError> {
        AirportClient::nearest(self, point, radius_km).await
    }
}
