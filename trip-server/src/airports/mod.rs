//! Airport lookup via the Overpass API.
//!
//! Finds the nearest commercial airport to a point by querying
//! OpenStreetMap for `aeroway=aerodrome` elements and keeping only those
//! tagged with an IATA code, which filters out airstrips and heliports.

mod client;
mod error;
mod types;

pub use client::{AirportClient, AirportConfig, nearest_airport};
pub use error::AirportError;
pub use types::{OverpassCenter, OverpassElement, OverpassResponse};
