//! Drowsiness Monitor API Server
//!
//! HTTP facade for the drowsiness detection pipeline: a poll endpoint for the
//! current status message, partial settings updates that take effect on the
//! next processed frame, and a health check.

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

mod routes;
mod source;
mod worker;

pub use source::{FrameSource, SyntheticSource};
pub use worker::run_monitor_loop;

use drowsiness::{MonitorConfig, MonitorStatus};

/// Application state shared between the HTTP handlers and the frame loop
pub struct AppState {
    /// Live monitor configuration; the frame loop snapshots it each frame
    pub config: MonitorConfig,
    /// Status published by the frame loop after every step
    pub status: MonitorStatus,
    /// Version string
    pub version: String,
    /// Start time
    pub start_time: std::time::Instant,
}

impl AppState {
    /// Create new application state with the given starting configuration
    pub fn new(config: MonitorConfig) -> Self {
        Self {
            config,
            status: MonitorStatus::Normal,
            version: env!("CARGO_PKG_VERSION").to_string(),
            start_time: std::time::Instant::now(),
        }
    }
}

/// Shared handle to the application state
pub type SharedState = Arc<RwLock<AppState>>;

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: u64,
    pub version: String,
    pub uptime_seconds: u64,
    pub monitor_status: String,
}

/// Create the application router
pub fn create_router(state: SharedState) -> Router {
    Router::new()
        .route("/api/v1/health", get(health_handler))
        .route("/api/v1/status", get(routes::status::get_status))
        .route("/api/v1/settings", post(routes::settings::update_settings))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check handler
async fn health_handler(State(state): State<SharedState>) -> Json<HealthResponse> {
    let state = state.read().await;
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp,
        version: state.version.clone(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        monitor_status: state.status.message().to_string(),
    })
}

/// Initialize logging
pub fn init_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
}

/// Load the starting monitor configuration.
///
/// Layers an optional `monitor.toml` and `DROWSY_*` environment variables
/// over the built-in defaults; an unreadable source falls back to defaults
/// rather than aborting startup.
pub fn load_config() -> MonitorConfig {
    let loaded = config::Config::builder()
        .add_source(config::File::with_name("monitor").required(false))
        .add_source(config::Environment::with_prefix("DROWSY").try_parsing(true))
        .build()
        .and_then(|c| c.try_deserialize::<MonitorConfig>());

    match loaded {
        Ok(config) => config,
        Err(e) => {
            warn!("Failed to load configuration ({e}), using defaults");
            MonitorConfig::default()
        }
    }
}

/// Run the server
pub async fn run_server(
    addr: &str,
    state: SharedState,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = create_router(state);

    info!("Starting API server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
