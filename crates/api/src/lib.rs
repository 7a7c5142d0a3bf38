//! Weather Prediction API Server
//!
//! REST API server for the weather prediction dashboard.

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use rule_matcher::RuleEngine;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

mod routes;

/// Application state shared across handlers
pub struct AppState {
    /// Rule engine serving predictions
    pub engine: RuleEngine,
    /// Version string
    pub version: String,
    /// Start time
    pub start_time: std::time::Instant,
    /// Predictions served since startup
    pub predictions_served: usize,
}

impl AppState {
    /// Create new application state
    pub fn new() -> Self {
        Self {
            engine: RuleEngine::new(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            start_time: std::time::Instant::now(),
            predictions_served: 0,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: u64,
    pub version: String,
    pub uptime_seconds: u64,
    pub metrics: SystemMetrics,
}

/// System metrics
#[derive(Debug, Serialize)]
pub struct SystemMetrics {
    pub rule_count: usize,
    pub predictions_served: usize,
}

/// Create the application router
pub fn create_router(state: Arc<RwLock<AppState>>) -> Router {
    Router::new()
        .route("/api/v1/health", get(health_handler))
        .route("/api/v1/predict", post(routes::predict::post_predict))
        .route("/api/v1/rules", get(routes::rules::get_rules))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check handler
async fn health_handler(State(state): State<Arc<RwLock<AppState>>>) -> Json<HealthResponse> {
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
        metrics: SystemMetrics {
            rule_count: state.engine.rules().len(),
            predictions_served: state.predictions_served,
        },
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

/// Run the server
pub async fn run_server(addr: &str) -> Result<(), Box<dyn std::error::Error>> {
    let state = Arc::new(RwLock::new(AppState::new()));
    let app = create_router(state);

    info!("Starting API server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
