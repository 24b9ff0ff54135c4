//! Server-rendered dashboard page.

use maud::{html, Markup, PreEscaped, DOCTYPE};

use super::dto::{OWNER_PARAM, SUBMITTED_PARAM};
use crate::services::tables::{detail_table, summary_table, DataTable};
use crate::services::DashboardView;

const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

const CHART_SECTION: &str = "Average Number of Days to Progress Through Stages by Owner";

/// JSON for embedding inside a `<script>` element.
fn script_safe(json: &str) -> String {
    json.replace("</", "<\\/")
}

fn data_table(table: &DataTable) -> Markup {
    html! {
        table class="data-table" {
            thead {
                tr {
                    @for column in &table.columns {
                        th { (column) }
                    }
                }
            }
            tbody {
                @for row in &table.rows {
                    tr {
                        @for cell in row {
                            td { (cell.as_deref().unwrap_or("")) }
                        }
                    }
                }
            }
        }
    }
}

fn owner_form(view: &DashboardView) -> Markup {
    html! {
        form method="get" action="/" {
            label for="owner-select" { "Select Contact Owners:" }
            select id="owner-select" name=(OWNER_PARAM) multiple size=(view.owners.len()) {
                @for owner in &view.owners {
                    option value=(owner) selected[view.selection.contains(owner)] { (owner) }
                }
            }
            input type="hidden" name=(SUBMITTED_PARAM) value="1";
            button type="submit" { "Apply" }
        }
    }
}

/// Render the full dashboard for one selection.
pub fn render_dashboard(view: &DashboardView) -> Result<String, serde_json::Error> {
    let figure = script_safe(&serde_json::to_string(&view.chart)?);
    let summary = summary_table(&view.summary);
    let details = detail_table(&view.records);

    let markup = html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (view.title) }
                script src=(PLOTLY_CDN) {}
                style {
                    "body { font-family: sans-serif; margin: 2rem; } "
                    ".data-table { border-collapse: collapse; font-size: 0.85rem; } "
                    ".data-table th, .data-table td { border: 1px solid #ddd; padding: 4px 8px; }"
                }
            }
            body {
                h1 { (view.title) }
                (owner_form(view))

                h3 { (CHART_SECTION) }
                div id="chart" {}
                script {
                    (PreEscaped(format!(
                        "var figure = {};\nPlotly.newPlot('chart', figure.data, figure.layout, {{responsive: true}});",
                        figure
                    )))
                }

                h3 { "Summary Data" }
                (data_table(&summary))

                h3 { "Detailed Data for Each Stage" }
                (data_table(&details))
            }
        }
    };

    Ok(markup.into_string())
}
