//! Geocoding error types.

/// Errors that can occur when searching for a place.
#[derive(Debug, thiserror::Error)]
pub enum GeocodeError {
    /// The query was empty or whitespace
    #[error("a place name is required")]
    EmptyQuery,

    /// The geocoder returned no match
    #[error("place not found: {query}")]
    NotFound { query: String },

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response JSON, or the match had unusable coordinates
    #[error("JSON parse error: {message}")]
    Json { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        assert_eq!(GeocodeError::EmptyQuery.to_string(), "a place name is required");

        let err = GeocodeError::NotFound {
            query: "Atlantis".into(),
        };
        assert_eq!(err.to_string(), "place not found: Atlantis");
    }
}
