//! Response parsers for the Mackerel API.

use mackerel_core::{Host, Metric};
use serde::Deserialize;
use tracing::debug;

use crate::error::FetchError;

/// Body of `GET /api/v0/hosts`.
#[derive(Debug, Deserialize)]
struct HostsResponse {
    #[serde(default)]
    hosts: Option<Vec<Host>>,
}

/// Body of `GET /api/v0/hosts/{id}/metrics/names`.
#[derive(Debug, Deserialize)]
struct MetricNamesResponse {
    #[serde(default)]
    names: Option<Vec<Option<String>>>,
}

/// Parses a hosts listing, keeping the server's order.
///
/// A `null` body or a missing or `null` `hosts` field is an empty listing.
pub fn parse_hosts(json_str: &str) -> Result<Vec<Host>, FetchError> {
    debug!(len = json_str.len(), "Parsing hosts response");

    let response: Option<HostsResponse> = serde_json::from_str(json_str)?;
    Ok(response.and_then(|r| r.hosts).unwrap_or_default())
}

/// Parses a metric-name listing into one [`Metric`] per name.
///
/// Names are passed through unchanged: duplicates and empty strings stay,
/// and a `null` entry becomes an empty name. A `null` body or a missing or
/// `null` `names` field is an empty listing.
pub fn parse_metric_names(json_str: &str) -> Result<Vec<Metric>, FetchError> {
    debug!(len = json_str.len(), "Parsing metric names response");

    let response: Option<MetricNamesResponse> = serde_json::from_str(json_str)?;
    Ok(response
        .and_then(|r| r.names)
        .unwrap_or_default()
        .into_iter()
        .map(|name| Metric::from(name.unwrap_or_default()))
        .collect())
}
