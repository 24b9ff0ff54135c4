//! Pipeline dashboard HTTP server.
//!
//! Loads the configured CSV export once, then serves the dashboard page and
//! the JSON API.
//!
//! # Usage
//!
//! ```bash
//! PIPELINE_DATA_PATH=Project_Quantum_Leap.csv cargo run --bin pipeline-velocity-server
//! ```
//!
//! # Environment Variables
//!
//! - `PIPELINE_CONFIG`: TOML config file (default: `pipeline.toml` if present)
//! - `PIPELINE_DATA_PATH`: CSV export to load
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use pipeline_velocity::http::{create_router, AppState};
use pipeline_velocity::io::load_source;
use pipeline_velocity::DashboardConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting pipeline dashboard server");

    let config = DashboardConfig::load()?;
    let source = load_source(&config.source.data_path)?;
    info!(
        "Loaded {} rows from {} ({} allow-listed owners)",
        source.rows().len(),
        config.source.data_path.display(),
        config.source.owners.len()
    );

    let addr: SocketAddr = config.bind_address().parse()?;
    let app = create_router(AppState::new(config, source));

    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
