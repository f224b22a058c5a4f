//! JSON prediction handlers

use axum::{body::Bytes, Json};

use crate::logic::pipeline::{self, build_row_from_manual_selection, load_row_from_csv, resolve_selection};
use crate::middleware::model::LoadedModel;
use crate::models::{ManualSelectionRequest, PredictionResponse};
use crate::AppResult;

/// Predict from a manual label selection
pub async fn manual(
    LoadedModel(model): LoadedModel,
    Json(req): Json<ManualSelectionRequest>,
) -> AppResult<Json<PredictionResponse>> {
    let selection = resolve_selection(&req.selection)?;
    let row = build_row_from_manual_selection(&selection)?;
    let outcome = pipeline::run(&row, model.as_ref())?;

    Ok(Json(PredictionResponse::new(&row, outcome)))
}

/// Predict from a pre-encoded CSV body (header + one row)
pub async fn csv(
    LoadedModel(model): LoadedModel,
    body: Bytes,
) -> AppResult<Json<PredictionResponse>> {
    let row = load_row_from_csv(&body)?;
    let outcome = pipeline::run(&row, model.as_ref())?;

    Ok(Json(PredictionResponse::new(&row, outcome)))
}
