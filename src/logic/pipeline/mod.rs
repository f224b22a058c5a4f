//! Predictor Pipeline
//!
//! Synchronous, single-shot chain:
//! selection/upload -> FeatureRow -> decoded echo + classifier verdict.
//! Either the whole outcome is produced or an error is returned.

pub mod display;
pub mod manual;
pub mod prediction;
pub mod table;

#[cfg(test)]
mod tests;

use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::logic::features::{EncodingError, Feature, FeatureRow};
use crate::logic::model::{ExternalClassifier, InferenceError};

pub use display::{decode_row_for_display, DisplayEntry};
pub use manual::{build_row_from_manual_selection, resolve_selection};
pub use prediction::PredictionResult;
pub use table::load_row_from_csv;

/// Errors for a single interaction
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Encoding(#[from] EncodingError),

    #[error("malformed row: {0}")]
    MalformedRow(String),

    #[error("no selection for feature '{0}'")]
    MissingFeature(Feature),

    #[error(transparent)]
    Inference(#[from] InferenceError),
}

/// Full result of one interaction
#[derive(Debug, Clone, Serialize)]
pub struct Outcome {
    pub prediction_id: Uuid,
    pub inputs: Vec<DisplayEntry>,
    pub prediction: PredictionResult,
}

/// Ask the classifier for a verdict on one row
pub fn predict(
    row: &FeatureRow,
    model: &dyn ExternalClassifier,
) -> Result<PredictionResult, PipelineError> {
    let class = model.classify(row)?;
    Ok(PredictionResult::from_class(class))
}

/// Decode the row for display and predict
pub fn run(row: &FeatureRow, model: &dyn ExternalClassifier) -> Result<Outcome, PipelineError> {
    let prediction_id = Uuid::new_v4();
    tracing::debug!(%prediction_id, row = %row.to_log_entry(), "Running prediction");

    let inputs = decode_row_for_display(row)?;
    let prediction = predict(row, model)?;

    tracing::info!(
        %prediction_id,
        model = %model.metadata().model_type,
        verdict = prediction.verdict(),
        "Prediction complete"
    );

    Ok(Outcome {
        prediction_id,
        inputs,
        prediction,
    })
}
