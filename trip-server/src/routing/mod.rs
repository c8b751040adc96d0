//! Routing engine client.
//!
//! This module provides an HTTP client for an OSRM-compatible routing
//! engine, which turns an origin, a destination and a travel profile into a
//! routed path with its distance and duration.
//!
//! Key characteristics of OSRM:
//! - Coordinates in URLs and GeoJSON geometries are **longitude first**;
//!   the client reorders them to latitude-first [`Coordinate`]s
//! - Distances are in metres and durations in seconds
//! - "No route" is reported in the body `code`, usually with a 400 status
//!
//! [`Coordinate`]: crate::domain::Coordinate

mod client;
mod error;
mod types;

pub use client::{Profile, RoutingClient, RoutingConfig};
pub use error::RoutingError;
pub use types::{OsrmGeometry, OsrmResponse, OsrmRoute};
