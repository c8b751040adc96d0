//! Application state for the web layer.

use std::sync::Arc;

use crate::airports::AirportClient;
use crate::geocode::GeocodeClient;
use crate::planner::TripPlanner;
use crate::routing::RoutingClient;

/// Planner wired to the live routing engine and airport lookup.
pub type LivePlanner = TripPlanner<RoutingClient, AirportClient>;

/// Shared application state.
///
/// Holds only immutable clients; requests never share mutable state.
#[derive(Clone)]
pub struct AppState {
    /// Trip planner
    pub planner: Arc<LivePlanner>,

    /// Place search client
    pub geocoder: Arc<GeocodeClient>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(planner: LivePlanner, geocoder: GeocodeClient) -> Self {
        Self {
            planner: Arc::new(planner),
            geocoder: Arc::new(geocoder),
        }
    }
}
