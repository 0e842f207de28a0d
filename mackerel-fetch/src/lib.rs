// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Mackerel Fetch
//!
//! HTTP access to the Mackerel API.
//!
//! - [`client::HttpClient`] - `reqwest` wrapper that sends the `X-Api-Key`
//!   header and turns non-200 responses into [`FetchError::Api`]
//! - [`parser`] - Decoding of the hosts and metric-name listings
//! - [`source`] - The [`HostSource`] and [`MetricSource`] traits
//! - [`api::MackerelClient`] - Production implementation of both traits
//!
//! ## Example
//!
//! ```ignore
//! use mackerel_core::{ApiBase, ApiKey};
//! use mackerel_fetch::{HostSource, MackerelClient};
//!
//! let client = MackerelClient::new(ApiBase::default());
//! let hosts = client.list_hosts(&ApiKey::resolve(None)?).await?;
//! ```

pub mod api;
pub mod client;
pub mod error;
pub mod parser;
pub mod source;

pub use api::MackerelClient;
pub use client::{API_KEY_HEADER, DEFAULT_TIMEOUT, HttpClient};
pub use error::FetchError;
pub use source::{HostSource, MetricSource};
