//! Trip planning engine.
//!
//! This module computes and compares ways to travel between two points:
//! ground modes over a routed path, a direct flight, and a ground → flight
//! → ground itinerary through the airports nearest each end.
//!
//! Planners reach the routing engine and the airport lookup through the
//! [`RouteProvider`] and [`AirportProvider`] traits. Sub-computations that
//! don't depend on each other are awaited together, and a failure in one
//! never cancels its siblings.

mod aggregate;
mod config;
mod cost;
mod error;
mod flight;
mod multimodal;
mod provider;
mod terrestrial;

#[cfg(test)]
mod fakes;

pub use aggregate::{TripPlanner, TripResult};
pub use config::TripConfig;
pub use cost::{Cost, CostModel};
pub use error::{Endpoint, Leg, Necessity, PlanError};
pub use flight::{FlightLeg, direct_flight, flight_leg};
pub use multimodal::{MultimodalItinerary, MultimodalPlanner};
pub use provider::{AirportProvider, RouteProvider};
pub use terrestrial::{TerrestrialPlan, TerrestrialPlanner, manhattan_path};
