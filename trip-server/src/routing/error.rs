//! Routing client error types.

/// Errors from the routing engine client.
#[derive(Debug, thiserror::Error)]
pub enum RoutingError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// JSON deserialization failed
    #[error("JSON parse error: {message}{}", .body.as_deref().map(|b| format!(" (body: {b})")).unwrap_or_default())]
    Json {
        message: String,
        body: Option<String>,
    },

    /// The engine answered but found no route
    #[error("no route found ({code})")]
    NoRoute { code: String },

    /// The returned geometry could not be used
    #[error("invalid route geometry: {0}")]
    InvalidGeometry(String),
}

impl RoutingError {
    /// Whether the failure happened before any answer was received.
    pub fn is_transport(&self) -> bool {
        matches!(self, RoutingError::Http(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = RoutingError::NoRoute {
            code: "NoRoute".into(),
        };
        assert_eq!(err.to_string(), "no route found (NoRoute)");

        let err = RoutingError::Api {
            status: 429,
            message: "Too Many Requests".into(),
        };
        assert_eq!(err.to_string(), "API error 429: Too Many Requests");

        let err = RoutingError::Json {
            message: "expected value".into(),
            body: Some("<html>".into()),
        };
        assert_eq!(
            err.to_string(),
            "JSON parse error: expected value (body: <html>)"
        );

        let err = RoutingError::Json {
            message: "expected value".into(),
            body: None,
        };
        assert_eq!(err.to_string(), "JSON parse error: expected value");
        assert!(!err.is_transport());
    }
}
