//! Error types for Telegraph API operations.

/// Error from Telegraph API operations.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum TelegraphError {
    /// HTTP request failed (network error, timeout, etc).
    #[error("HTTP request failed")]
    Http(#[from] ureq::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error")]
    Json(#[from] serde_json::Error),

    /// The API rejected the call.
    #[error("telegraph API error: {0}")]
    Api(String),

    /// Rate limited; retry after the given number of seconds.
    #[error("flood wait: retry after {seconds}s")]
    RetryAfter {
        /// Seconds to wait before retrying.
        seconds: u64,
    },

    /// HTML content could not be converted to nodes.
    #[error("HTML conversion failed")]
    Parse(#[from] tgraph_html::ParseError),
}

impl TelegraphError {
    /// Map an error string from the response envelope to a typed error.
    pub(crate) fn from_api(error: String) -> Self {
        if let Some(seconds) = error
            .strip_prefix("FLOOD_WAIT_")
            .and_then(|s| s.parse().ok())
        {
            Self::RetryAfter { seconds }
        } else {
            Self::Api(error)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flood_wait_is_decoded() {
        let err = TelegraphError::from_api("FLOOD_WAIT_25".to_owned());
        assert!(matches!(err, TelegraphError::RetryAfter { seconds: 25 }));
    }

    #[test]
    fn test_malformed_flood_wait_stays_opaque() {
        let err = TelegraphError::from_api("FLOOD_WAIT_soon".to_owned());
        assert!(matches!(err, TelegraphError::Api(_)));
    }

    #[test]
    fn test_other_errors_stay_opaque() {
        let err = TelegraphError::from_api("PAGE_NOT_FOUND".to_owned());
        assert!(matches!(err, TelegraphError::Api(msg) if msg == "PAGE_NOT_FOUND"));
    }
}
