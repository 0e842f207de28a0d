//! Host types.

use serde::{Deserialize, Deserializer, Serialize};

/// A monitored host as reported by the hosts endpoint.
///
/// Only the fields this client renders are kept; everything else in the
/// upstream record is ignored during decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Host {
    /// Opaque, server-assigned identifier.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub id: String,
    /// Display name. May be empty.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
}

/// Reads a JSON `null` as an empty string.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl Host {
    /// Creates a new host.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
