//! HTTP API server for the settings service
//!
//! Routes are organized into modules:
//! - routes::settings: read, validate and update the settings document

pub mod error;
pub mod routes;

use anyhow::Context;
use axum::{
    routing::{get, post},
    Router,
};
use docsettings_config::Config;
use docsettings_core::SettingsStore;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

pub use error::{ApiError, StatusBody};

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RwLock<SettingsStore>>,
}

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    use routes::settings::{
        api_path_problems, api_settings, api_settings_section, api_update_settings,
        api_validate_settings,
    };

    Router::new()
        .route("/health", get(health_check))
        .route("/settings", get(api_settings).post(api_update_settings))
        .route("/settings/validate", post(api_validate_settings))
        .route("/settings/paths", get(api_path_problems))
        .route("/settings/sections/:name", get(api_settings_section))
        .layer(ServiceBuilder::new().layer(CorsLayer::permissive()))
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

/// Start the HTTP server
///
/// Binds to the configured address and serves until Ctrl-C is received.
///
/// # Arguments
///
/// * `config` - The service configuration
/// * `store` - The shared settings store
pub async fn start_server(config: Config, store: Arc<RwLock<SettingsStore>>) -> anyhow::Result<()> {
    let addr = config.bind_address();
    let router = create_router(AppState { store });

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    log::info!("Starting settings server on http://{}", addr);
    log::info!("Available routes:");
    log::info!("  - GET  /settings");
    log::info!("  - POST /settings");
    log::info!("  - POST /settings/validate");
    log::info!("  - GET  /settings/paths");
    log::info!("  - GET  /settings/sections/:name");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    log::info!("Server stopped gracefully");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {}", e);
    }
}

// ==================== Tests ====================
