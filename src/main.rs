//! Student Adaptability Predictor
//!
//! Serves an interactive form and a JSON API that encode a student's
//! learning-environment answers and ask a pre-trained classifier whether
//! they can adapt to online education.
//!
//! # Architecture
//!
//! ```text
//!  form / JSON / CSV
//!         │
//!         ▼
//!  ┌──────────────┐   FeatureRow   ┌──────────────────────┐
//!  │   Encoder    │ ─────────────▶ │  Predictor Pipeline  │──▶ verdict
//!  │ (per-feature │                │  decode + classify   │
//!  │   tables)    │                └──────────┬───────────┘
//!  └──────────────┘                           │
//!                                  ExternalClassifier (loaded once)
//! ```

mod config;
mod constants;
mod error;
mod handlers;
mod logic;
mod middleware;
mod models;
mod views;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LogFormat;
use crate::logic::model::{load_classifier, ModelLoadError, SharedClassifier};

pub use error::{AppError, AppResult};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    init_tracing(config.log_format);

    tracing::info!("{} v{} starting...", constants::APP_NAME, constants::APP_VERSION);
    tracing::info!("Environment: {}", config.environment);

    // Load model once; a failure only disables prediction
    let model = load_classifier(&config.model_path, config.model_sha256.as_deref())
        .map_err(|e| {
            tracing::error!("Model load failed: {} - predictions will be rejected", e);
            Arc::new(e)
        });

    let state = AppState {
        model,
        config: config.clone(),
    };

    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .with_context(|| format!("invalid bind address {}:{}", config.host, config.port))?;
    tracing::info!("🚀 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}

fn init_tracing(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| constants::DEFAULT_LOG_FILTER.into());

    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Loaded classifier, or why loading failed
    pub model: Result<SharedClassifier, Arc<ModelLoadError>>,
    pub config: config::Config,
}

/// Create the main router with all routes
fn create_router(state: AppState) -> Router {
    // Interactive form
    let page_routes = Router::new()
        .route("/", get(handlers::form::index))
        .route("/predict", post(handlers::form::submit));

    // JSON API
    let api_routes = Router::new()
        .route("/health", get(handlers::health::check))
        .route("/api/v1/features", get(handlers::schema::features))
        .route("/api/v1/predict", post(handlers::predict::manual))
        .route("/api/v1/predict/csv", post(handlers::predict::csv));

    let mut router = Router::new()
        .merge(page_routes)
        .merge(api_routes)
        .layer(DefaultBodyLimit::max(state.config.max_upload_bytes))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http());

    if !state.config.is_production() {
        router = router.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );
    }

    router.with_state(state)
}
