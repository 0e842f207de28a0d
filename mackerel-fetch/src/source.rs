//! Capabilities the dispatcher depends on.
//!
//! [`MackerelClient`](crate::MackerelClient) implements both traits against
//! the real API; tests substitute their own implementations.

use async_trait::async_trait;
use mackerel_core::{ApiKey, Host, Metric};

use crate::error::FetchError;

/// Lists the hosts visible to an API key.
#[async_trait]
pub trait HostSource: Send + Sync {
    /// Returns every host in server order.
    async fn list_hosts(&self, api_key: &ApiKey) -> Result<Vec<Host>, FetchError>;
}

/// Lists the metric names recorded for a host.
#[async_trait]
pub trait MetricSource: Send + Sync {
    /// Returns every metric name for `host_id` in server order.
    async fn list_metrics(&self, api_key: &ApiKey, host_id: &str) -> Result<Vec<Metric>, FetchError>;
}

#[async_trait]
impl<T: HostSource + ?Sized> HostSource for &T {
    async fn list_hosts(&self, api_key: &ApiKey) -> Result<Vec<Host>, FetchError> {
        (**self).list_hosts(api_key).await
    }
}

#[async_trait]
impl<T: MetricSource + ?Sized> MetricSource for &T {
    async fn list_metrics(&self, api_key: &ApiKey, host_id: &str) -> Result<Vec<Metric>, FetchError> {
        (**self).list_metrics(api_key, host_id).await
    }
}
