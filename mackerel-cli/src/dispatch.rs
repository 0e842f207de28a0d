//! Chooses between the host and metric listings and renders the result.

use std::io::Write;

use mackerel_core::{ApiBase, ApiKey, CoreError};
use mackerel_fetch::{FetchError, HostSource, MetricSource};
use thiserror::Error;
use tracing::{info, instrument};

use crate::output::{JsonFormatter, TextFormatter};
use crate::{ExitCode, OutputFormat};

// ============================================================================
// Errors
// ============================================================================

/// Terminal failure of a run.
#[derive(Debug, Error)]
pub enum RunError {
    /// Credential or configuration problem, raised before any request.
    #[error(transparent)]
    Config(#[from] CoreError),

    /// The host listing failed.
    #[error("Failed to get hosts: {0}")]
    Hosts(#[source] FetchError),

    /// The metric listing failed.
    #[error("Failed to get metrics: {0}")]
    Metrics(#[source] FetchError),

    /// Rendering or writing the output failed.
    #[error("Failed to write output: {0}")]
    Output(String),
}

impl RunError {
    /// Maps the failure to the process exit status.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::Config(CoreError::MissingCredential) => ExitCode::MissingCredential,
            Self::Config(CoreError::InvalidConfig(_)) => ExitCode::Usage,
            Self::Hosts(e) | Self::Metrics(e) if e.status().is_some() => ExitCode::ApiError,
            Self::Hosts(_) | Self::Metrics(_) | Self::Output(_) => ExitCode::Error,
        }
    }
}

// ============================================================================
// Dispatcher
// ============================================================================

/// Runs one invocation against injected host and metric sources.
#[derive(Debug)]
pub struct Dispatcher<H, M> {
    hosts: H,
    metrics: M,
    format: OutputFormat,
    pretty: bool,
}

impl<H: HostSource, M: MetricSource> Dispatcher<H, M> {
    /// Creates a dispatcher that renders plain text.
    pub fn new(hosts: H, metrics: M) -> Self {
        Self {
            hosts,
            metrics,
            format: OutputFormat::Text,
            pretty: false,
        }
    }

    /// Sets the output format.
    #[must_use]
    pub fn with_format(mut self, format: OutputFormat, pretty: bool) -> Self {
        self.format = format;
        self.pretty = pretty;
        self
    }

    /// Lists hosts (no `host_id`) or the metrics of `host_id` into `out`.
    ///
    /// # Errors
    ///
    /// See [`RunError`]. Nothing is written to `out` on failure.
    #[instrument(skip_all)]
    pub async fn run_with_key<W: Write>(
        &self,
        api_key: &ApiKey,
        host_id: Option<&str>,
        out: &mut W,
    ) -> Result<(), RunError> {
        let rendered = match host_id.filter(|id| !id.is_empty()) {
            None => self.list_hosts(api_key).await?,
            Some(host_id) => self.list_metrics(api_key, host_id).await?,
        };

        out.write_all(rendered.as_bytes())
            .and_then(|()| out.flush())
            .map_err(|e| RunError::Output(e.to_string()))
    }

    async fn list_hosts(&self, api_key: &ApiKey) -> Result<String, RunError> {
        info!("Listing hosts");

        let hosts = self
            .hosts
            .list_hosts(api_key)
            .await
            .map_err(RunError::Hosts)?;

        match self.format {
            OutputFormat::Text => Ok(TextFormatter::new().format_hosts(&hosts)),
            OutputFormat::Json => JsonFormatter::new(self.pretty)
                .format_hosts(&hosts)
                .map_err(|e| RunError::Output(format!("{e:#}"))),
        }
    }

    async fn list_metrics(&self, api_key: &ApiKey, host_id: &str) -> Result<String, RunError> {
        info!(host_id, "Listing metrics");

        let metrics = self
            .metrics
            .list_metrics(api_key, host_id)
            .await
            .map_err(RunError::Metrics)?;

        match self.format {
            OutputFormat::Text => Ok(TextFormatter::new().format_metrics(host_id, &metrics)),
            OutputFormat::Json => JsonFormatter::new(self.pretty)
                .format_metrics(host_id, &metrics)
                .map_err(|e| RunError::Output(format!("{e:#}"))),
        }
    }
}

// ============================================================================
// Invocation
// ============================================================================

/// Runs one invocation.
///
/// The API key is resolved first (from `api_key`, then `lookup`), then the
/// API base is validated, and only then does `build` create the dispatcher
/// for that base. A missing key therefore wins over a bad base and no source
/// is ever built without a key.
///
/// # Errors
///
/// See [`RunError`].
pub async fn execute<H, M, B, F, W>(
    api_key: Option<&str>,
    host_id: Option<&str>,
    api_base: &str,
    build: B,
    lookup: F,
    out: &mut W,
) -> Result<(), RunError>
where
    H: HostSource,
    M: MetricSource,
    B: FnOnce(ApiBase) -> Dispatcher<H, M>,
    F: FnOnce(&str) -> Option<String>,
    W: Write,
{
    let api_key = ApiKey::resolve_with(api_key, lookup)?;
    let base = ApiBase::parse(api_base)?;

    build(base).run_with_key(&api_key, host_id, out).await
}

// ============================================================================
// Tests
// ============================================================================
