//! End-to-end dashboard computation.
//!
//! [`build_dashboard`] is a pure function of the raw export, the configuration
//! and the viewer's owner selection. Every selection change calls it again
//! from the top: filter, normalize, derive, aggregate, append, select, chart.
//! Nothing is cached between calls.

use serde::Serialize;

use super::aggregation::aggregate_by_owner;
use super::chart::{build_chart, ChartFigure};
use super::metrics::derive_metrics;
use super::selection::filter_summary;
use super::synthetic::append_synthetic_rows;
use super::top_performers::top_performers;
use crate::config::DashboardConfig;
use crate::io::{normalize, restrict_to_owners, SourceInfo, SourceTable};
use crate::models::{OwnerSelection, OwnerSummary, PipelineDataset};

/// Page title of the dashboard.
pub const DASHBOARD_TITLE: &str = "Performance Comparison Between Owners";

/// Everything the dashboard displays for one selection.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub title: &'static str,
    /// Options of the owner multi-select.
    pub owners: Vec<String>,
    pub selection: OwnerSelection,
    /// Per-owner rows followed by the two synthetic rows.
    pub summary: Vec<OwnerSummary>,
    /// `summary` narrowed to the selection (synthetic rows always kept).
    pub displayed_summary: Vec<OwnerSummary>,
    pub top_performers: Vec<String>,
    pub chart: ChartFigure,
    pub records: PipelineDataset,
    pub source: SourceInfo,
}

/// Allow-listed records with dates parsed and metrics derived.
pub fn prepare_records(table: &SourceTable, owners: &[String]) -> PipelineDataset {
    let rows = restrict_to_owners(table, owners);
    let mut dataset = normalize(table, &rows);
    derive_metrics(&mut dataset.records);
    dataset
}

/// Per-owner summary with the synthetic rows appended.
pub fn build_summary(dataset: &PipelineDataset) -> Vec<OwnerSummary> {
    append_synthetic_rows(aggregate_by_owner(&dataset.records))
}

/// Run the whole pipeline for `selection`.
pub fn build_dashboard(
    table: &SourceTable,
    config: &DashboardConfig,
    selection: &OwnerSelection,
) -> DashboardView {
    let records = prepare_records(table, &config.source.owners);
    let summary = build_summary(&records);
    let top = top_performers(&summary, config.chart.top_performers);
    let displayed_summary = filter_summary(&summary, selection);
    let chart = build_chart(&displayed_summary, &summary, &top, &config.chart);

    log::debug!(
        "Dashboard built: {} records, {} summary rows, {} displayed, top performers {:?}",
        records.records.len(),
        summary.len(),
        displayed_summary.len(),
        top
    );

    DashboardView {
        title: DASHBOARD_TITLE,
        owners: config.source.owners.clone(),
        selection: selection.clone(),
        summary,
        displayed_summary,
        top_performers: top,
        chart,
        records,
        source: table.info(),
    }
}
