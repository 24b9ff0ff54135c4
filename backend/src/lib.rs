//! # Pipeline Velocity
//!
//! Sales pipeline reporting for a small team of contact owners.
//!
//! This crate loads a CRM opportunity export, keeps the allow-listed owners,
//! measures how many days each opportunity took to reach every pipeline stage,
//! and summarizes those durations per owner. The result is served as an HTML
//! dashboard and a JSON API.
//!
//! ## Architecture
//!
//! - [`config`]: TOML configuration with environment overrides
//! - [`error`]: the crate-wide [`error::ReportError`]
//! - [`io`]: CSV loading, owner filtering and date parsing
//! - [`models`]: records, summary rows and the owner selection
//! - [`services`]: metrics, aggregation, synthetic rows, top performers and chart
//! - [`http`]: Axum-based HTTP server and the rendered page
//!
//! The raw export is loaded once; the rest of the pipeline is a pure function
//! of it, the configuration and the selected owners.

pub mod config;
pub mod error;
pub mod io;
pub mod models;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;

pub use config::DashboardConfig;
pub use error::{ReportError, ReportResult};
