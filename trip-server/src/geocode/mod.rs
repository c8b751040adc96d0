//! Place search via a Nominatim-compatible geocoder.
//!
//! Maps free text such as "Puebla" to a coordinate. Only the best match is
//! requested.

mod client;
mod error;

pub use client::{GeocodeClient, GeocodeConfig, PlaceDto};
pub use error::GeocodeError;
