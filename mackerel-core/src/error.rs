//! Core error types for `mackerel-lister`.

use thiserror::Error;

/// Core error type.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Neither the flag nor the environment variable supplied an API key.
    #[error("API key is required. Set it with -apikey flag or MACKEREL_APIKEY environment variable")]
    MissingCredential,

    /// Invalid configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_credential_names_both_sources() {
        use crate::credential::{API_KEY_ENV, API_KEY_FLAG};

        let msg = CoreError::MissingCredential.to_string();
        assert!(msg.contains(&format!("-{API_KEY_FLAG}")));
        assert!(msg.contains(API_KEY_ENV));
    }
}
