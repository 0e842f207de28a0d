//! Domain models for the Mackerel API.
//!
//! - [`host`] - Monitored hosts
//! - [`metric`] - Metric names recorded for a host

mod host;
mod metric;

pub use host::Host;
pub use metric::Metric;
