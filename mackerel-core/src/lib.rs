// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Mackerel Core
//!
//! Core types shared by the `mackerel-lister` crates.
//!
//! - Domain models ([`Host`], [`Metric`])
//! - The [`ApiKey`] credential and its resolver
//! - The [`CoreError`] type
//! - The service [`ApiBase`] URL

pub mod credential;
pub mod endpoint;
pub mod error;
pub mod models;

pub use credential::{API_KEY_ENV, API_KEY_FLAG, ApiKey};
pub use endpoint::{API_BASE_ENV, ApiBase, DEFAULT_API_BASE};
pub use error::CoreError;
pub use models::{Host, Metric};
