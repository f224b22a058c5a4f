//! Prediction verdicts

use serde::{Deserialize, Serialize};

/// Classifier verdict for one student
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PredictionResult {
    CannotAdapt,
    CanAdapt,
}

impl PredictionResult {
    /// 0 -> CannotAdapt, anything else -> CanAdapt
    pub fn from_class(class: u8) -> Self {
        if class == 0 {
            PredictionResult::CannotAdapt
        } else {
            PredictionResult::CanAdapt
        }
    }

    pub fn verdict(self) -> &'static str {
        match self {
            PredictionResult::CannotAdapt => "Cannot Adaptive",
            PredictionResult::CanAdapt => "Yes Can Adaptive",
        }
    }

    /// Sentence shown to the user
    pub fn message(self) -> String {
        format!("Prediction of this app is {}", self.verdict())
    }

    pub fn can_adapt(self) -> bool {
        self == PredictionResult::CanAdapt
    }
}
