//! Airport lookup error types.

/// Errors that can occur when looking up airports.
#[derive(Debug, thiserror::Error)]
pub enum AirportError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// No airport with a carrier code within the search radius
    #[error("no airport with an IATA code within {radius_km} km")]
    NotFound { radius_km: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = AirportError::NotFound { radius_km: 500.0 };
        assert_eq!(err.to_string(), "no airport with an IATA code within 500 km");

        let err = AirportError::Api {
            status: 504,
            message: "Gateway Timeout".into(),
        };
        assert_eq!(err.to_string(), "API error 504: Gateway Timeout");
    }
}
