//! Line-oriented text output.

use mackerel_core::{Host, Metric};

/// Plain text formatter.
#[derive(Debug, Default)]
pub struct TextFormatter;

impl TextFormatter {
    /// Creates a new text formatter.
    pub fn new() -> Self {
        Self
    }

    /// Formats the host listing, one `ID: .., Name: ..` line per host.
    pub fn format_hosts(&self, hosts: &[Host]) -> String {
        let mut out = String::from("Available hosts:\n");
        for host in hosts {
            out.push_str(&self.format_host_line(host));
            out.push('\n');
        }
        out
    }

    /// Formats a single host line.
    pub fn format_host_line(&self, host: &Host) -> String {
        format!("ID: {}, Name: {}", host.id, host.name)
    }

    /// Formats the metric listing for `host_id`, one name per line.
    pub fn format_metrics(&self, host_id: &str, metrics: &[Metric]) -> String {
        let mut out = format!("Metrics for host {host_id}:\n");
        for metric in metrics {
            out.push_str(&metric.name);
            out.push('\n');
        }
        out
    }
}
