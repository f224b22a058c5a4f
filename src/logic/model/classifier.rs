//! Classifier capability
//!
//! The trained model is opaque to this service: anything that can turn a
//! `FeatureRow` into a binary class can back predictions. Loaders build a
//! concrete classifier once and hand it to the pipeline.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::logic::features::FeatureRow;

/// Model metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelMetadata {
    pub model_path: String,
    pub model_type: String, // "logistic_regression" or "onnx"
    pub features: usize,
    pub threshold: f64,
    /// Hex SHA-256 of the artifact bytes
    pub checksum: String,
    pub loaded_at: chrono::DateTime<chrono::Utc>,
}

/// Run-time failure inside a classifier
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("inference failed: {0}")]
pub struct InferenceError(pub String);

/// Pre-trained binary decision function
pub trait ExternalClassifier: Send + Sync {
    /// Classify one row. `0` means the student cannot adapt, anything else means they can.
    fn classify(&self, row: &FeatureRow) -> Result<u8, InferenceError>;

    fn metadata(&self) -> &ModelMetadata;
}
