//! Mackerel API client.

use async_trait::async_trait;
use mackerel_core::{ApiBase, ApiKey, Host, Metric};
use std::time::Duration;
use tracing::{debug, instrument};

use crate::client::{DEFAULT_TIMEOUT, HttpClient};
use crate::error::FetchError;
use crate::parser::{parse_hosts, parse_metric_names};
use crate::source::{HostSource, MetricSource};

// ============================================================================
// Constants
// ============================================================================

/// Hosts listing endpoint.
const HOSTS_ENDPOINT: &str = "/api/v0/hosts";

// ============================================================================
// API Client
// ============================================================================

/// Production implementation of [`HostSource`] and [`MetricSource`].
///
/// Each call builds its own HTTP client, so nothing outlives the request.
#[derive(Debug, Clone)]
pub struct MackerelClient {
    base: ApiBase,
    timeout: Duration,
}

impl MackerelClient {
    /// Creates a client for `base` with the default timeout.
    pub fn new(base: ApiBase) -> Self {
        Self {
            base,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Overrides the per-request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the API base this client talks to.
    pub fn base(&self) -> &ApiBase {
        &self.base
    }

    fn hosts_url(&self) -> String {
        self.base.join(HOSTS_ENDPOINT)
    }

    /// The host id goes into the path verbatim.
    fn metric_names_url(&self, host_id: &str) -> String {
        self.base
            .join(&format!("{HOSTS_ENDPOINT}/{host_id}/metrics/names"))
    }

    /// Fetches all hosts.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::get_with_api_key`]; a body that is not a hosts
    /// listing yields [`FetchError::Decode`].
    #[instrument(skip(self, api_key))]
    pub async fn fetch_hosts(&self, api_key: &ApiKey) -> Result<Vec<Host>, FetchError> {
        debug!("Fetching hosts");

        let http = HttpClient::with_timeout(self.timeout)?;
        let body = http.get_with_api_key(&self.hosts_url(), api_key).await?;
        let hosts = parse_hosts(&body)?;

        debug!(count = hosts.len(), "Fetched hosts");
        Ok(hosts)
    }

    /// Fetches all metric names for `host_id`.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::get_with_api_key`]; a body that is not a name
    /// listing yields [`FetchError::Decode`].
    #[instrument(skip(self, api_key))]
    pub async fn fetch_metric_names(
        &self,
        api_key: &ApiKey,
        host_id: &str,
    ) -> Result<Vec<Metric>, FetchError> {
        debug!("Fetching metric names");

        let http = HttpClient::with_timeout(self.timeout)?;
        let body = http
            .get_with_api_key(&self.metric_names_url(host_id), api_key)
            .await?;
        let metrics = parse_metric_names(&body)?;

        debug!(count = metrics.len(), "Fetched metric names");
        Ok(metrics)
    }
}

impl Default for MackerelClient {
    fn default() -> Self {
        Self::new(ApiBase::default())
    }
}

#[async_trait]
impl HostSource for MackerelClient {
    async fn list_hosts(&self, api_key: &ApiKey) -> Result<Vec<Host>, FetchError> {
        self.fetch_hosts(api_key).await
    }
}

#[async_trait]
impl MetricSource for MackerelClient {
    async fn list_metrics(&self, api_key: &ApiKey, host_id: &str) -> Result<Vec<Metric>, FetchError> {
        self.fetch_metric_names(api_key, host_id).await
    }
}

// ============================================================================
// Tests
// ============================================================================
