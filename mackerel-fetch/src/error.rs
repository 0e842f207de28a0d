//! Fetch error types.

use thiserror::Error;

/// Error type for Mackerel API calls.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connecting, sending, timing out, or reading a successful body failed.
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API key cannot be sent as a header value.
    #[error("Invalid API key: {0}")]
    InvalidApiKey(#[from] reqwest::header::InvalidHeaderValue),

    /// The API answered with a non-200 status.
    #[error("API error: {body}, status code: {status}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body, empty if it could not be read.
        body: String,
    },

    /// The response body did not have the expected shape.
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    /// Returns true if the request never produced an HTTP response.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::InvalidApiKey(_))
    }

    /// Returns true if the request timed out.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(e) if e.is_timeout())
    }

    /// Returns the HTTP status for [`FetchError::Api`].
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_message_carries_body_and_status() {
        let err = FetchError::Api {
            status: 401,
            body: r#"{"error":{"message":"unauthorized"}}"#.to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("unauthorized"));
        assert!(msg.ends_with("status code: 401"));
        assert_eq!(err.status(), Some(401));
        assert!(!err.is_transport());
    }

    #[test]
    fn test_decode_error_is_not_transport() {
        let err: FetchError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(!err.is_transport());
        assert_eq!(err.status(), None);
    }
}
