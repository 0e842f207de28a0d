//! JSON output formatting.

use anyhow::Result;
use mackerel_core::{Host, Metric};
use serde::Serialize;

// ============================================================================
// Output Types
// ============================================================================

/// JSON output for the host listing.
#[derive(Debug, Serialize)]
pub struct HostsOutput<'a> {
    pub hosts: &'a [Host],
}

/// JSON output for the metric listing of one host.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsOutput<'a> {
    pub host_id: &'a str,
    pub metrics: &'a [Metric],
}

// ============================================================================
// Formatter
// ============================================================================

/// JSON formatter.
#[derive(Debug)]
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    /// Creates a new JSON formatter.
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    /// Formats the host listing.
    pub fn format_hosts(&self, hosts: &[Host]) -> Result<String> {
        self.serialize(&HostsOutput { hosts })
    }

    /// Formats the metric listing for `host_id`.
    pub fn format_metrics(&self, host_id: &str, metrics: &[Metric]) -> Result<String> {
        self.serialize(&MetricsOutput { host_id, metrics })
    }

    fn serialize<T: Serialize>(&self, value: &T) -> Result<String> {
        let mut json = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        json.push('\n');
        Ok(json)
    }
}
