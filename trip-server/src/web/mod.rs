//! Web layer for the trip planner.
//!
//! Provides HTTP endpoints for place search and trip planning, and serves
//! the front-end assets.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::{AppState, LivePlanner};
