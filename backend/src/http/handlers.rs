//! HTTP handlers for the dashboard API.
//!
//! Each handler resolves the owner selection from the query string and runs
//! the full pipeline on a blocking worker.

use axum::{
    extract::{Query, State},
    response::Html,
    Json,
};

use super::dto::{selection_from_query, HealthResponse, SummaryResponse};
use super::error::AppError;
use super::page::render_dashboard;
use super::state::AppState;
use crate::models::PipelineDataset;
use crate::services::chart::ChartFigure;
use crate::services::{build_dashboard, DashboardView};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// Raw query pairs; `owner` may repeat.
pub type SelectionQuery = Query<Vec<(String, String)>>;

async fn run_pipeline(state: AppState, pairs: Vec<(String, String)>) -> Result<DashboardView, AppError> {
    let selection =
        selection_from_query(&pairs, &state.config.source.owners).map_err(AppError::BadRequest)?;

    tokio::task::spawn_blocking(move || build_dashboard(&state.source, &state.config, &selection))
        .await
        .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))
}

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        source: state.source.info(),
    }))
}

// =============================================================================
// Dashboard
// =============================================================================

/// GET /
///
/// Server-rendered dashboard page.
pub async fn dashboard_page(
    State(state): State<AppState>,
    Query(pairs): SelectionQuery,
) -> Result<Html<String>, AppError> {
    let view = run_pipeline(state, pairs).await?;
    Ok(Html(render_dashboard(&view)?))
}

/// GET /v1/dashboard
pub async fn get_dashboard(
    State(state): State<AppState>,
    Query(pairs): SelectionQuery,
) -> HandlerResult<DashboardView> {
    Ok(Json(run_pipeline(state, pairs).await?))
}

/// GET /v1/summary
///
/// Full summary; the selection does not narrow it.
pub async fn get_summary(
    State(state): State<AppState>,
    Query(pairs): SelectionQuery,
) -> HandlerResult<SummaryResponse> {
    let view = run_pipeline(state, pairs).await?;
    let total = view.summary.len();
    Ok(Json(SummaryResponse {
        rows: view.summary,
        total,
    }))
}

/// GET /v1/records
pub async fn get_records(
    State(state): State<AppState>,
    Query(pairs): SelectionQuery,
) -> HandlerResult<PipelineDataset> {
    Ok(Json(run_pipeline(state, pairs).await?.records))
}

/// GET /v1/chart
pub async fn get_chart(
    State(state): State<AppState>,
    Query(pairs): SelectionQuery,
) -> HandlerResult<ChartFigure> {
    Ok(Json(run_pipeline(state, pairs).await?.chart))
}
