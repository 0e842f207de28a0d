//! Metric types.

use serde::{Deserialize, Serialize};

/// A metric name recorded for a host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metric {
    /// Metric identifier, e.g. `loadavg5`.
    pub name: String,
}

impl Metric {
    /// Creates a new metric.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl From<String> for Metric {
    fn from(name: String) -> Self {
        Self { name }
    }
}
