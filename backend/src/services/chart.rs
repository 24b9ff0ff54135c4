//! Stage-lane chart as a Plotly figure.
//!
//! The figure is plain data (`data` + `layout`) that plotly.js renders as is.
//! There is one lane per [`Stage`], stacked top to bottom with a shared x-axis.
//! Each lane plots the mean days of every displayed summary row. Top performers
//! get an extra highlighted trace in every lane.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::config::ChartSettings;
use crate::models::{OwnerSummary, Stage};

/// Title of the stage chart.
pub const CHART_TITLE: &str = "Average Number of Days to Progress Through Stages by Contact Owner";

/// Vertical gap between lanes, as a fraction of the plot height.
const LANE_SPACING: f64 = 0.02;

const GRID_COLOR: &str = "#EBF0F8";
const BACKGROUND: &str = "white";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartFigure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trace {
    #[serde(rename = "type")]
    pub trace_type: &'static str,
    pub x: Vec<Option<f64>>,
    pub y: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<&'static str>,
    pub name: String,
    pub xaxis: String,
    pub yaxis: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<LineStyle>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineStyle {
    pub color: String,
    pub width: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub anchor: String,
    pub domain: [f64; 2],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matches: Option<String>,
    pub showticklabels: bool,
    pub gridcolor: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub height: u32,
    pub title: Title,
    pub showlegend: bool,
    pub paper_bgcolor: &'static str,
    pub plot_bgcolor: &'static str,
    /// `xaxis`, `xaxis2`, ..., `yaxis`, `yaxis2`, ... keyed as plotly expects.
    #[serde(flatten)]
    pub axes: BTreeMap<String, Axis>,
}

/// Axis reference for lane `lane` (0-based): `x`, `x2`, `x3`...
fn axis_ref(prefix: &str, lane: usize) -> String {
    if lane == 0 {
        prefix.to_string()
    } else {
        format!("{}{}", prefix, lane + 1)
    }
}

/// Layout key for lane `lane`: `xaxis`, `xaxis2`...
fn axis_key(prefix: &str, lane: usize) -> String {
    axis_ref(&format!("{}axis", prefix), lane)
}

/// Vertical domain of lane `lane` out of `lanes`, top lane first.
fn lane_domain(lane: usize, lanes: usize) -> [f64; 2] {
    let height = (1.0 - LANE_SPACING * (lanes as f64 - 1.0)) / lanes as f64;
    let top = 1.0 - lane as f64 * (height + LANE_SPACING);
    [(top - height).max(0.0), top.min(1.0)]
}

fn layout(settings: &ChartSettings) -> Layout {
    let lanes = Stage::ALL.len();
    let bottom = axis_ref("x", lanes - 1);
    let mut axes = BTreeMap::new();

    for stage in Stage::ALL {
        let lane = stage.index();
        let is_bottom = lane == lanes - 1;
        axes.insert(
            axis_key("x", lane),
            Axis {
                anchor: axis_ref("y", lane),
                domain: [0.0, 1.0],
                matches: (!is_bottom).then(|| bottom.clone()),
                showticklabels: is_bottom,
                gridcolor: GRID_COLOR,
                title: None,
            },
        );
        axes.insert(
            axis_key("y", lane),
            Axis {
                anchor: axis_ref("x", lane),
                domain: lane_domain(lane, lanes),
                matches: None,
                showticklabels: true,
                gridcolor: GRID_COLOR,
                title: Some(Title {
                    text: format!("{} (Mean Days)", stage.label()),
                }),
            },
        );
    }

    Layout {
        height: settings.height,
        title: Title {
            text: CHART_TITLE.to_string(),
        },
        showlegend: false,
        paper_bgcolor: BACKGROUND,
        plot_bgcolor: BACKGROUND,
        axes,
    }
}

/// Build the stage chart.
///
/// Base traces plot `displayed` (the selection-filtered summary). Highlight
/// traces for `top` owners read their values from `full`, so a top performer
/// stays highlighted even when it is not selected.
pub fn build_chart(
    displayed: &[OwnerSummary],
    full: &[OwnerSummary],
    top: &[String],
    settings: &ChartSettings,
) -> ChartFigure {
    let mut data = Vec::with_capacity(Stage::ALL.len() * (1 + top.len()));

    for stage in Stage::ALL {
        let lane = stage.index();
        data.push(Trace {
            trace_type: "scatter",
            x: displayed.iter().map(|row| row.mean(stage)).collect(),
            y: displayed.iter().map(|row| row.label.to_string()).collect(),
            mode: Some("lines+markers"),
            name: format!("{} (Mean)", stage.label()),
            xaxis: axis_ref("x", lane),
            yaxis: axis_ref("y", lane),
            line: None,
        });
    }

    for owner in top {
        let rows: Vec<&OwnerSummary> = full
            .iter()
            .filter(|row| row.label.owner() == Some(owner.as_str()))
            .collect();
        for stage in Stage::ALL {
            let lane = stage.index();
            data.push(Trace {
                trace_type: "scatter",
                x: rows.iter().map(|row| row.mean(stage)).collect(),
                y: rows.iter().map(|row| row.label.to_string()).collect(),
                mode: None,
                name: format!("Top Performer: {} ({})", owner, stage.label()),
                xaxis: axis_ref("x", lane),
                yaxis: axis_ref("y", lane),
                line: Some(LineStyle {
                    color: settings.highlight_color.clone(),
                    width: settings.highlight_width,
                }),
            });
        }
    }

    ChartFigure {
        data,
        layout: layout(settings),
    }
}
