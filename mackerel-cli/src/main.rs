// Lint configuration for this crate
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! mackerel-lister - list Mackerel hosts and their metric names.
//!
//! # Examples
//!
//! ```bash
//! # List every host visible to the API key
//! mackerel-lister -apikey "$KEY"
//!
//! # Key from the environment
//! MACKEREL_APIKEY="$KEY" mackerel-lister
//!
//! # Metric names recorded for one host
//! mackerel-lister -host 2eQGEaLxibb
//!
//! # JSON output
//! mackerel-lister -host 2eQGEaLxibb --format json --pretty
//! ```

mod args;
mod dispatch;
mod output;

use clap::{Parser, ValueEnum};
use mackerel_core::{API_BASE_ENV, DEFAULT_API_BASE};
use mackerel_fetch::MackerelClient;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use dispatch::Dispatcher;

// ============================================================================
// CLI Definition
// ============================================================================

/// List Mackerel hosts, or the metric names recorded for one host.
#[derive(Debug, Parser)]
#[command(name = "mackerel-lister")]
#[command(about = "List Mackerel hosts and metric names")]
#[command(long_about = r#"
Lists the hosts of a Mackerel organization, or the metric names recorded
for a single host when -host is given.

The API key is read from -apikey, falling back to MACKEREL_APIKEY.

Examples:
  mackerel-lister -apikey KEY              # All hosts
  mackerel-lister -host 2eQGEaLxibb        # Metric names of one host
  mackerel-lister --format json --pretty   # JSON output
"#)]
#[command(version)]
pub struct Cli {
    /// Mackerel API key. Falls back to MACKEREL_APIKEY.
    #[arg(long)]
    pub apikey: Option<String>,

    /// Host ID. Lists that host's metric names instead of all hosts.
    #[arg(long)]
    pub host: Option<String>,

    /// Output format (text or json).
    #[arg(long, short = 'f', default_value = "text")]
    pub format: OutputFormat,

    /// Pretty-print JSON output.
    #[arg(long)]
    pub pretty: bool,

    /// API base URL.
    #[arg(long, env = API_BASE_ENV, default_value = DEFAULT_API_BASE, hide_default_value = true)]
    pub api_base: String,

    /// Verbose output (show debug info).
    #[arg(long, short)]
    pub verbose: bool,

    /// Quiet mode (no logging).
    #[arg(long, short)]
    pub quiet: bool,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Line-oriented text.
    #[default]
    Text,
    /// JSON output for scripting.
    Json,
}

/// CLI exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success.
    Success = 0,
    /// Transport, decode or output failure.
    Error = 1,
    /// Invalid arguments or configuration. Matches clap's own usage status.
    Usage = 2,
    /// No API key was supplied.
    MissingCredential = 3,
    /// The API answered with a non-200 status.
    ApiError = 4,
}

// ============================================================================
// Logging Setup
// ============================================================================

fn setup_logging(verbose: bool, quiet: bool) {
    if quiet {
        return; // No logging in quiet mode
    }

    let filter = if verbose {
        EnvFilter::new("mackerel=debug,info")
    } else {
        EnvFilter::new("mackerel=warn")
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

// ============================================================================
// Main Entry Point
// ============================================================================

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse_from(args::normalize(std::env::args_os()));

    setup_logging(cli.verbose, cli.quiet);

    let mut stdout = std::io::stdout().lock();
    let result = dispatch::execute(
        cli.apikey.as_deref(),
        cli.host.as_deref(),
        &cli.api_base,
        |base| {
            let client = MackerelClient::new(base);
            Dispatcher::new(client.clone(), client).with_format(cli.format, cli.pretty)
        },
        |name| std::env::var(name).ok(),
        &mut stdout,
    )
    .await;

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code() as i32);
    }

    std::process::exit(ExitCode::Success as i32);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Cli {
        let argv = argv.iter().map(|a| std::ffi::OsString::from(*a));
        Cli::try_parse_from(args::normalize(argv)).unwrap()
    }

    #[test]
    fn test_go_style_flags() {
        let cli = parse(&["mackerel-lister", "-apikey", "k", "-host", "h1"]);
        assert_eq!(cli.apikey.as_deref(), Some("k"));
        assert_eq!(cli.host.as_deref(), Some("h1"));
        assert_eq!(cli.format, OutputFormat::Text);
    }

    #[test]
    fn test_no_flags() {
        let cli = parse(&["mackerel-lister"]);
        assert!(cli.apikey.is_none());
        assert!(cli.host.is_none());
    }

    #[test]
    fn test_json_format() {
        let cli = parse(&["mackerel-lister", "--format", "json", "--pretty"]);
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.pretty);
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
