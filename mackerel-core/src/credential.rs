//! API key resolution.
//!
//! The key is taken from, in priority order:
//!
//! 1. **Flag** - `-apikey <key>`
//! 2. **Environment** - `MACKEREL_APIKEY`
//!
//! An empty value counts as absent at both levels.

use std::fmt;

use tracing::{debug, instrument};

use crate::error::CoreError;

// ============================================================================
// Constants
// ============================================================================

/// Name of the command-line flag carrying the API key.
pub const API_KEY_FLAG: &str = "apikey";

/// Environment variable consulted when the flag is absent or empty.
pub const API_KEY_ENV: &str = "MACKEREL_APIKEY";

// ============================================================================
// API Key
// ============================================================================

/// A Mackerel API key.
///
/// The `Debug` output is redacted so the key cannot leak through log fields.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wraps a raw key.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Returns the raw key for building the request header.
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Resolves the key from the flag value or the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::MissingCredential`] if neither source is set.
    pub fn resolve(explicit: Option<&str>) -> Result<Self, CoreError> {
        Self::resolve_with(explicit, |name| std::env::var(name).ok())
    }

    /// Resolves the key using `lookup` in place of the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::MissingCredential`] if neither source is set.
    #[instrument(skip_all)]
    pub fn resolve_with<F>(explicit: Option<&str>, lookup: F) -> Result<Self, CoreError>
    where
        F: FnOnce(&str) -> Option<String>,
    {
        if let Some(key) = explicit.filter(|k| !k.is_empty()) {
            debug!(source = "flag", "Resolved API key");
            return Ok(Self::new(key));
        }

        if let Some(key) = lookup(API_KEY_ENV).filter(|k| !k.is_empty()) {
            debug!(source = "env", "Resolved API key");
            return Ok(Self(key));
        }

        Err(CoreError::MissingCredential)
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

// ============================================================================
// Tests
// ============================================================================
