//! Overpass API client.

use std::time::Duration;

use tracing::debug;

use crate::domain::{Airport, Coordinate, DEFAULT_AIRPORT_NAME, distance_km};

use super::error::AirportError;
use super::types::{OverpassElement, OverpassResponse};

/// Default Overpass interpreter endpoint.
const DEFAULT_BASE_URL: &str = "http://overpass-api.de/api/interpreter";

/// Default request timeout, matching the server-side `[timeout:25]`.
const DEFAULT_TIMEOUT_SECS: u64 = 25;

/// Configuration for the airport client.
#[derive(Debug, Clone)]
pub struct AirportConfig {
    /// Full URL of the interpreter endpoint
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl AirportConfig {
    /// Create a config pointing at the public Overpass instance.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom interpreter URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for AirportConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Client for finding airports through the Overpass API.
#[derive(Debug, Clone)]
pub struct AirportClient {
    http: reqwest::Client,
    base_url: String,
    timeout_secs: u64,
}

impl AirportClient {
    /// Create a new airport client.
    pub fn new(config: AirportConfig) -> Result<Self, AirportError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            timeout_secs: config.timeout_secs,
        })
    }

    /// Overpass QL query for aerodromes around a point.
    fn query(&self, point: Coordinate, radius_km: f64) -> String {
        let around = format!(
            "around:{:.0},{},{}",
            radius_km * 1000.0,
            point.latitude,
            point.longitude
        );
        format!(
            "[out:json][timeout:{timeout}];\
             (node({around})[aeroway=aerodrome];\
             way({around})[aeroway=aerodrome];\
             relation({around})[aeroway=aerodrome];);\
             out center;",
            timeout = self.timeout_secs,
        )
    }

    /// Find the nearest airport with an IATA code within `radius_km`.
    pub async fn nearest(&self, point: Coordinate, radius_km: f64) -> Result<Airport, AirportError> {
        debug!(%point, radius_km, "searching for airports");

        let response = self
            .http
            .post(&self.base_url)
            .body(self.query(point, radius_km))
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AirportError::Api {
                status: status.as_u16(),
                message: body.chars().take(500).collect(),
            });
        }

        let body = response.text().await?;

        let parsed: OverpassResponse =
            serde_json::from_str(&body).map_err(|e| AirportError::Json {
                message: e.to_string(),
            })?;

        let airport = nearest_airport(point, &parsed.elements)
            .ok_or(AirportError::NotFound { radius_km })?;

        debug!(
            airport = %airport.display_name(),
            distance_km = airport.distance_km,
            "found nearest airport"
        );
        Ok(airport)
    }
}

/// Pick the element closest to `point` among those with an IATA code.
///
/// Elements without tags, without an `iata` tag, or without a usable
/// position are skipped. On equal distance the first element wins.
pub fn nearest_airport(point: Coordinate, elements: &[OverpassElement]) -> Option<Airport> {
    let mut best: Option<Airport> = None;

    for element in elements {
        let Some(code) = element.tag("iata") else {
            continue;
        };
        let Some(coordinate) = element.coordinate() else {
            continue;
        };

        let distance = distance_km(point, coordinate);
        if best.as_ref().is_some_and(|b| b.distance_km <= distance) {
            continue;
        }

        best = Some(Airport {
            name: element.tag("name").unwrap_or(DEFAULT_AIRPORT_NAME).to_string(),
            carrier_code: code.to_string(),
            coordinate,
            distance_km: distance,
        });
    }

    best
}
