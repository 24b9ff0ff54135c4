//! Pipeline computations between the loaded export and the rendered view.
//!
//! Each module is one stage of the dashboard pipeline:
//!
//! - [`metrics`]: final outcome date and elapsed days per record
//! - [`aggregation`]: per-owner mean/median/min/max and opportunity counts
//! - [`synthetic`]: company and owners average rows
//! - [`top_performers`]: owners with the largest mean days-to-final
//! - [`selection`]: narrowing the summary to the selected owners
//! - [`chart`]: the stage-lane Plotly figure
//! - [`tables`]: summary and detail tables as text
//! - [`dashboard`]: all of the above for one selection

pub mod aggregation;
pub mod chart;
pub mod dashboard;
pub mod metrics;
pub mod selection;
pub mod synthetic;
pub mod tables;
pub mod top_performers;

#[cfg(test)]
mod dashboard_tests;

pub use dashboard::{build_dashboard, build_summary, prepare_records, DashboardView};
