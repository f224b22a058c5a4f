//! Fixed-answer classifier for tests

use super::classifier::{ExternalClassifier, InferenceError, ModelMetadata};
use crate::logic::features::{FeatureRow, FEATURE_COUNT};

pub struct StubClassifier {
    answer: Result<u8, InferenceError>,
    metadata: ModelMetadata,
}

impl StubClassifier {
    pub fn returning(class: u8) -> Self {
        Self::with_answer(Ok(class))
    }

    pub fn failing(msg: &str) -> Self {
        Self::with_answer(Err(InferenceError(msg.to_string())))
    }

    fn with_answer(answer: Result<u8, InferenceError>) -> Self {
        Self {
            answer,
            metadata: ModelMetadata {
                model_path: "<stub>".to_string(),
                model_type: "stub".to_string(),
                features: FEATURE_COUNT,
                threshold: 0.5,
                checksum: String::new(),
                loaded_at: chrono::Utc::now(),
            },
        }
    }
}

impl ExternalClassifier for StubClassifier {
    fn classify(&self, _row: &FeatureRow) -> Result<u8, InferenceError> {
        self.answer.clone()
    }

    fn metadata(&self) -> &ModelMetadata {
        &self.metadata
    }
}
