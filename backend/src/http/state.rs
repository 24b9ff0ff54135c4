//! Application state for the HTTP server.

use std::sync::Arc;

use crate::config::DashboardConfig;
use crate::io::SourceTable;

/// Shared application state passed to all handlers.
///
/// Both fields are read-only; every request recomputes the dashboard from them.
#[derive(Clone)]
pub struct AppState {
    /// Immutable dashboard configuration (allow-list, chart settings)
    pub config: Arc<DashboardConfig>,
    /// Raw export loaded at startup
    pub source: Arc<SourceTable>,
}

impl AppState {
    /// Create a new application state.
    pub fn new(config: DashboardConfig, source: SourceTable) -> Self {
        Self {
            config: Arc::new(config),
            source: Arc::new(source),
        }
    }
}
