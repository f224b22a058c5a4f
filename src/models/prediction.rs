//! Prediction request/response bodies

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::logic::features::{FeatureRow, LayoutInfo};
use crate::logic::pipeline::{DisplayEntry, Outcome, PredictionResult};

/// Manual selection: column name -> label
#[derive(Debug, Deserialize)]
pub struct ManualSelectionRequest {
    pub selection: HashMap<String, String>,
}

#[derive(Debug, Serialize)]
pub struct PredictionResponse {
    pub prediction_id: Uuid,
    pub prediction: PredictionResult,
    pub verdict: &'static str,
    pub message: String,
    pub can_adapt: bool,
    pub inputs: Vec<DisplayEntry>,
    /// Encoded row as sent to the model
    pub row: Vec<u8>,
    pub layout: LayoutInfo,
}

impl PredictionResponse {
    pub fn new(row: &FeatureRow, outcome: Outcome) -> Self {
        Self {
            prediction_id: outcome.prediction_id,
            prediction: outcome.prediction,
            verdict: outcome.prediction.verdict(),
            message: outcome.prediction.message(),
            can_adapt: outcome.prediction.can_adapt(),
            inputs: outcome.inputs,
            row: row.codes().to_vec(),
            layout: LayoutInfo::current(),
        }
    }
}
