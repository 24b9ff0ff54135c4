#![cfg(feature = "http-server")]

mod support;

use axum::extract::{Query, State};

use pipeline_velocity::config::DashboardConfig;
use pipeline_velocity::http::error::AppError;
use pipeline_velocity::http::handlers;
use pipeline_velocity::http::AppState;
use pipeline_velocity::io::load_source;

use support::sample_export;

fn state() -> AppState {
    let file = sample_export();
    let source = load_source(file.path()).unwrap();
    AppState::new(DashboardConfig::default(), source)
}

fn query(items: &[(&str, &str)]) -> Query<Vec<(String, String)>> {
    Query(
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    )
}

#[tokio::test]
async fn test_health_reports_source() {
    let response = handlers::health_check(State(state())).await.unwrap();
    assert_eq!(response.0.status, "ok");
    assert_eq!(response.0.source.row_count, 5);
    assert_eq!(response.0.source.checksum.len(), 64);
}

#[tokio::test]
async fn test_dashboard_default_selection() {
    let view = handlers::get_dashboard(State(state()), query(&[])).await.unwrap().0;
    assert_eq!(view.selection.owners().len(), 4);
    assert_eq!(view.displayed_summary.len(), 4);
}

#[tokio::test]
async fn test_dashboard_narrowed_selection() {
    let view = handlers::get_dashboard(
        State(state()),
        query(&[("owner", "dan@rocketramp.ai"), ("submitted", "1")]),
    )
    .await
    .unwrap()
    .0;

    let labels: Vec<&str> = view.displayed_summary.iter().map(|r| r.label.as_str()).collect();
    assert_eq!(
        labels,
        vec!["dan@rocketramp.ai", "Avg for the Company", "Avg for Contact Owners"]
    );
    assert_eq!(view.summary.len(), 4);
}

#[tokio::test]
async fn test_summary_ignores_selection() {
    let response = handlers::get_summary(State(state()), query(&[("submitted", "1")]))
        .await
        .unwrap()
        .0;
    assert_eq!(response.total, 4);
    assert_eq!(response.rows.len(), 4);
}

#[tokio::test]
async fn test_records_and_chart() {
    let records = handlers::get_records(State(state()), query(&[])).await.unwrap().0;
    assert_eq!(records.records.len(), 4);

    let chart = handlers::get_chart(State(state()), query(&[])).await.unwrap().0;
    let json = serde_json::to_value(&chart).unwrap();
    assert_eq!(json["layout"]["height"], 800);
    assert_eq!(json["layout"]["xaxis"]["matches"], "x5");
}

#[tokio::test]
async fn test_unknown_query_key_is_bad_request() {
    let result = handlers::get_dashboard(State(state()), query(&[("team", "sales")])).await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));
}

#[tokio::test]
async fn test_page_renders_sections() {
    let html = handlers::dashboard_page(State(state()), query(&[("owner", "adam@rocketramp.ai"), ("submitted", "1")]))
        .await
        .unwrap()
        .0;

    assert!(html.contains("<h1>Performance Comparison Between Owners</h1>"));
    assert!(html.contains("Select Contact Owners:"));
    assert!(html.contains("<h3>Summary Data</h3>"));
    assert!(html.contains("<h3>Detailed Data for Each Stage</h3>"));
    assert!(html.contains(r#"<option value="adam@rocketramp.ai" selected>"#));
    assert!(html.contains(r#"<option value="dan@rocketramp.ai">"#));
    assert!(html.contains("Plotly.newPlot"));
}
