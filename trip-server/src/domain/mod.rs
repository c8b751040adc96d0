//! Domain types for the trip planner.
//!
//! This module contains the value types a trip plan is built from. Types
//! with invariants enforce them at construction time, so code that
//! receives them can trust their validity.

mod airport;
mod coordinate;
mod geo;
mod option;
mod route;

pub use airport::{Airport, DEFAULT_AIRPORT_NAME};
pub use coordinate::{Coordinate, InvalidCoordinate};
pub use geo::{EARTH_RADIUS_KM, distance_km, round_km};
pub use option::{MultimodalBreakdown, OptionKey, RouteType, TravelMode, TravelOption};
pub use route::{InvalidSegment, RouteSegment};
