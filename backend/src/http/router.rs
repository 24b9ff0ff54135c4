//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{routing::get, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_v1 = Router::new()
        .route("/dashboard", get(handlers::get_dashboard))
        .route("/summary", get(handlers::get_summary))
        .route("/records", get(handlers::get_records))
        .route("/chart", get(handlers::get_chart));

    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/", get(handlers::dashboard_page))
        .nest("/v1", api_v1)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DashboardConfig;
    use crate::io::SourceTable;
    use crate::models::{DateField, OWNER_COLUMN};

    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn empty_state() -> AppState {
        let mut columns = vec![OWNER_COLUMN.to_string()];
        columns.extend(DateField::ALL.iter().map(|f| f.column().to_string()));
        let source = SourceTable::from_rows(columns, Vec::new()).unwrap();
        AppState::new(DashboardConfig::default(), source)
    }

    async fn get(uri: &str) -> (StatusCode, String) {
        let response = create_router(empty_state())
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[test]
    fn test_router_creation() {
        let _router = create_router(empty_state());
    }

    #[tokio::test]
    async fn test_health_route() {
        let (status, body) = get("/health").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("\"status\":\"ok\""));
    }

    #[tokio::test]
    async fn test_repeated_owner_query() {
        let (status, body) =
            get("/v1/dashboard?owner=dan%40rocketramp.ai&owner=adam%40rocketramp.ai&submitted=1")
                .await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(
            json["selection"],
            serde_json::json!(["dan@rocketramp.ai", "adam@rocketramp.ai"])
        );
    }

    #[tokio::test]
    async fn test_unknown_param_rejected() {
        let (status, body) = get("/v1/chart?owners=x").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("BAD_REQUEST"));
    }

    #[tokio::test]
    async fn test_page_route_is_html() {
        let (status, body) = get("/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.starts_with("<!DOCTYPE html>"));
    }
}
