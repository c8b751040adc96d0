//! OSRM HTTP client.

use std::fmt;
use std::time::Duration;

use tracing::debug;

use crate::domain::{Coordinate, RouteSegment};

use super::error::RoutingError;
use super::types::OsrmResponse;

/// Default base URL for the public OSRM demo server.
const DEFAULT_BASE_URL: &str = "http://router.project-osrm.org";

/// Default request timeout.
const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Travel profile understood by the routing engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Profile {
    Driving,
    Cycling,
    Walking,
}

impl Profile {
    pub fn as_str(self) -> &'static str {
        match self {
            Profile::Driving => "driving",
            Profile::Cycling => "cycling",
            Profile::Walking => "walking",
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration for the routing client.
#[derive(Debug, Clone)]
pub struct RoutingConfig {
    /// Base URL of the engine, without the `/route/v1` suffix
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl RoutingConfig {
    /// Create a config pointing at the public OSRM server.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom base URL (self-hosted engine or tests).
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

impl Default for RoutingConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Routing engine client.
///
/// Each call issues exactly one request and is never retried; a timeout
/// or error is a definitive failure for that route.
#[derive(Debug, Clone)]
pub struct RoutingClient {
    http: reqwest::Client,
    base_url: String,
}

impl RoutingClient {
    /// Create a new routing client with the given configuration.
    pub fn new(config: RoutingConfig) -> Result<Self, RoutingError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Build the request URL for a route.
    fn route_url(&self, origin: Coordinate, destination: Coordinate, profile: Profile) -> String {
        format!(
            "{}/route/v1/{}/{},{};{},{}",
            self.base_url,
            profile.as_str(),
            origin.longitude,
            origin.latitude,
            destination.longitude,
            destination.latitude
        )
    }

    /// Route from `origin` to `destination` with the given profile.
    ///
    /// Returns the first route the engine proposes, with its full geometry.
    pub async fn route(
        &self,
        origin: Coordinate,
        destination: Coordinate,
        profile: Profile,
    ) -> Result<RouteSegment, RoutingError> {
        let url = self.route_url(origin, destination, profile);
        debug!(%origin, %destination, %profile, "requesting route");

        let response = self
            .http
            .get(&url)
            .query(&[("overview", "full"), ("geometries", "geojson")])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            // OSRM reports "no route" and bad coordinates as 400 with a JSON code
            if let Ok(parsed) = serde_json::from_str::<OsrmResponse>(&body) {
                if parsed.code != "Ok" {
                    debug!(
                        code = %parsed.code,
                        message = parsed.message.as_deref().unwrap_or(""),
                        "routing engine refused route"
                    );
                    return Err(RoutingError::NoRoute { code: parsed.code });
                }
            }
            return Err(RoutingError::Api {
                status: status.as_u16(),
                message: body.chars().take(500).collect(),
            });
        }

        let parsed: OsrmResponse =
            serde_json::from_str(&body).map_err(|e| RoutingError::Json {
                message: e.to_string(),
                body: Some(body.chars().take(500).collect()),
            })?;

        parsed.into_segment()
    }
}
