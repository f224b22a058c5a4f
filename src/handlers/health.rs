//! Health check handler

use axum::{extract::State, Json};
use serde::Serialize;

use crate::logic::model::ModelMetadata;
use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
    timestamp: i64,
    model_loaded: bool,
    model: Option<ModelMetadata>,
    model_error: Option<String>,
}

pub async fn check(State(state): State<AppState>) -> Json<HealthResponse> {
    let (model, model_error) = match &state.model {
        Ok(model) => (Some(model.metadata().clone()), None),
        Err(err) => (None, Some(err.to_string())),
    };

    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        timestamp: chrono::Utc::now().timestamp(),
        model_loaded: model.is_some(),
        model,
        model_error,
    })
}
