//! Mackerel API base URL.

use std::fmt;
use std::str::FromStr;

use url::Url;

use crate::error::CoreError;

/// Production API base.
pub const DEFAULT_API_BASE: &str = "https://api.mackerelio.com";

/// Environment variable overriding the API base.
pub const API_BASE_ENV: &str = "MACKEREL_APIBASE";

/// Validated base URL of the Mackerel API, without a trailing slash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiBase(String);

impl ApiBase {
    /// Parses and validates a base URL.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidConfig`] if `raw` is not an absolute
    /// `http`/`https` URL.
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        let url = Url::parse(raw)
            .map_err(|e| CoreError::InvalidConfig(format!("invalid API base {raw:?}: {e}")))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(CoreError::InvalidConfig(format!(
                "API base must use http or https, got {:?}",
                url.scheme()
            )));
        }

        Ok(Self(raw.trim_end_matches('/').to_string()))
    }

    /// Joins `path` (which must start with `/`) onto the base.
    pub fn join(&self, path: &str) -> String {
        format!("{}{}", self.0, path)
    }

    /// Returns the base as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ApiBase {
    fn default() -> Self {
        Self(DEFAULT_API_BASE.to_string())
    }
}

impl FromStr for ApiBase {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ApiBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_production() {
        assert_eq!(ApiBase::default().as_str(), "https://api.mackerelio.com");
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let base = ApiBase::parse("http://127.0.0.1:8080/").unwrap();
        assert_eq!(base.join("/api/v0/hosts"), "http://127.0.0.1:8080/api/v0/hosts");
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(matches!(
            ApiBase::parse("not a url"),
            Err(CoreError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_rejects_other_schemes() {
        assert!(ApiBase::parse("ftp://example.com").is_err());
    }
}
