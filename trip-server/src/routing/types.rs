//! OSRM route response DTOs.
//!
//! These types map directly to the `route/v1` JSON response. Only the
//! fields the planner uses are modelled; serde ignores the rest.

use serde::Deserialize;

use crate::domain::{Coordinate, RouteSegment, round_km};

use super::error::RoutingError;

/// Top-level response of a `route/v1/{profile}` request.
#[derive(Debug, Clone, Deserialize)]
pub struct OsrmResponse {
    /// `"Ok"` on success, otherwise an error code such as `"NoRoute"`.
    pub code: String,

    /// Human-readable error detail, only sent on failures.
    pub message: Option<String>,

    /// Candidate routes, best first. Missing on failures.
    #[serde(default)]
    pub routes: Vec<OsrmRoute>,
}

/// A single route.
#[derive(Debug, Clone, Deserialize)]
pub struct OsrmRoute {
    /// Length in metres.
    pub distance: f64,

    /// Travel time in seconds.
    pub duration: f64,

    /// Full-overview geometry, present when `geometries=geojson` is requested.
    pub geometry: Option<OsrmGeometry>,
}

/// GeoJSON `LineString` geometry.
#[derive(Debug, Clone, Deserialize)]
pub struct OsrmGeometry {
    /// `[lon, lat]` positions.
    pub coordinates: Vec<[f64; 2]>,
}

impl OsrmResponse {
    /// Convert the first route into a domain segment.
    ///
    /// Distance is converted to kilometres and rounded to two decimals;
    /// geometry positions are reordered to latitude first.
    pub fn into_segment(self) -> Result<RouteSegment, RoutingError> {
        if self.code != "Ok" {
            return Err(RoutingError::NoRoute { code: self.code });
        }

        let route = self
            .routes
            .into_iter()
            .next()
            .ok_or_else(|| RoutingError::NoRoute {
                code: "EmptyRoutes".to_string(),
            })?;

        let positions = route
            .geometry
            .map(|g| g.coordinates)
            .ok_or_else(|| RoutingError::InvalidGeometry("missing geometry".to_string()))?;

        let geometry = positions
            .into_iter()
            .map(Coordinate::from_lon_lat)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| RoutingError::InvalidGeometry(e.to_string()))?;

        RouteSegment::new(geometry, round_km(route.distance / 1000.0), route.duration)
            .map_err(|e| RoutingError::InvalidGeometry(e.to_string()))
    }
}
