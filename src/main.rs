//! EMI Predictor
//!
//! Web service that collects a financial profile through a single-page
//! form, derives the engineered features `EMI_Regression_Model` was trained
//! on, and scores them against the model resolved from the registry's
//! production alias.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                      EMI PREDICTOR                       │
//! ├──────────────────────────────────────────────────────────┤
//! │  ┌──────────┐   ┌───────────────┐   ┌────────────────┐  │
//! │  │  Form    │   │  Feature      │   │  Model Handle  │  │
//! │  │  + API   │──▶│  Pipeline     │──▶│  (registry +   │  │
//! │  │  (Axum)  │   │  (34 columns) │   │   serving)     │  │
//! │  └──────────┘   └───────────────┘   └───────┬────────┘  │
//! │                                             ▼           │
//! │                                   ┌──────────────────┐  │
//! │                                   │  MLflow registry │  │
//! │                                   └──────────────────┘  │
//! └──────────────────────────────────────────────────────────┘
//! ```

mod config;
mod error;
mod features;
mod handlers;
mod models;
mod registry;

use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use registry::{ModelHandle, RegistryClient, RegistryConfig};

pub use error::{AppError, AppResult};

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "emi_predictor=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    tracing::info!("EMI Predictor starting...");
    tracing::info!("Model registry: {}", config.tracking_uri);

    // Resolve the model once for the session lifetime
    let client = RegistryClient::new(RegistryConfig {
        tracking_uri: config.tracking_uri.clone(),
        timeout_seconds: config.registry_timeout_seconds,
    });

    let model = match ModelHandle::load(client, &config.model_name, &config.model_alias).await {
        Ok(handle) => {
            tracing::info!(
                "Model loaded: {}@{} (version {})",
                handle.name(),
                handle.alias(),
                handle.version()
            );
            Some(Arc::new(handle))
        }
        Err(e) => {
            tracing::error!("Failed to load model: {} - predictions are blocked until restart", e);
            None
        }
    };

    // Build application state
    let state = AppState {
        model,
        config: config.clone(),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind server address");
    axum::serve(listener, app).await.expect("Server error");
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Session-scoped model handle; None when startup resolution failed
    pub model: Option<Arc<ModelHandle>>,
    pub config: config::Config,
}

/// Create the main router with all routes
fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::form::page))
        .route("/health", get(handlers::health::check))
        .route("/api/v1/model", get(handlers::model::status))
        .route("/api/v1/predict", post(handlers::predict::predict))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
