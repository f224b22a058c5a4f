//! Logistic Regression - native scorer for exported coefficients
//!
//! Artifact format (JSON):
//!
//! ```json
//! {
//!   "model_type": "logistic_regression",
//!   "feature_names": ["Gender", "Age", ...],
//!   "coefficients": [0.41, -0.12, ...],
//!   "intercept": -1.3,
//!   "threshold": 0.5
//! }
//! ```
//!
//! `feature_names` and `threshold` are optional. The probability threshold
//! is turned into a cut on the decision function (its logit), so with the
//! default threshold the class is the sign of the decision function, same as
//! the trainer's `predict`.

use ndarray::Array1;
use serde::Deserialize;

use crate::constants::DEFAULT_DECISION_THRESHOLD;
use crate::logic::features::layout::validate_feature_names;
use crate::logic::features::{FeatureRow, FEATURE_COUNT};

use super::classifier::{ExternalClassifier, InferenceError, ModelMetadata};
use super::loader::ModelLoadError;

pub const MODEL_TYPE: &str = "logistic_regression";

/// On-disk artifact
#[derive(Debug, Clone, Deserialize)]
pub struct LogisticArtifact {
    #[serde(default = "default_model_type")]
    pub model_type: String,
    #[serde(default)]
    pub feature_names: Option<Vec<String>>,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
    #[serde(default)]
    pub threshold: Option<f64>,
}

fn default_model_type() -> String {
    MODEL_TYPE.to_string()
}

#[derive(Debug)]
pub struct LogisticModel {
    coefficients: Array1<f64>,
    intercept: f64,
    /// logit(threshold); class 1 iff decision > boundary
    boundary: f64,
    metadata: ModelMetadata,
}

impl LogisticModel {
    /// Parse and validate artifact bytes
    pub fn from_json(bytes: &[u8], model_path: &str, checksum: String) -> Result<Self, ModelLoadError> {
        let artifact: LogisticArtifact = serde_json::from_slice(bytes)
            .map_err(|e| ModelLoadError::InvalidArtifact(format!("malformed JSON: {}", e)))?;
        Self::from_artifact(artifact, model_path, checksum)
    }

    pub fn from_artifact(
        artifact: LogisticArtifact,
        model_path: &str,
        checksum: String,
    ) -> Result<Self, ModelLoadError> {
        if artifact.model_type != MODEL_TYPE {
            return Err(ModelLoadError::InvalidArtifact(format!(
                "unsupported model_type '{}'",
                artifact.model_type
            )));
        }

        if let Some(names) = &artifact.feature_names {
            validate_feature_names(names)?;
        }

        if artifact.coefficients.len() != FEATURE_COUNT {
            return Err(ModelLoadError::InvalidArtifact(format!(
                "expected {} coefficients, got {}",
                FEATURE_COUNT,
                artifact.coefficients.len()
            )));
        }

        if !artifact.intercept.is_finite() || artifact.coefficients.iter().any(|w| !w.is_finite()) {
            return Err(ModelLoadError::InvalidArtifact(
                "coefficients must be finite".to_string(),
            ));
        }

        let threshold = artifact.threshold.unwrap_or(DEFAULT_DECISION_THRESHOLD);
        if !(threshold > 0.0 && threshold < 1.0) {
            return Err(ModelLoadError::InvalidArtifact(format!(
                "threshold {} outside (0, 1)",
                threshold
            )));
        }

        let metadata = ModelMetadata {
            model_path: model_path.to_string(),
            model_type: MODEL_TYPE.to_string(),
            features: FEATURE_COUNT,
            threshold,
            checksum,
            loaded_at: chrono::Utc::now(),
        };

        Ok(Self {
            coefficients: Array1::from(artifact.coefficients),
            intercept: artifact.intercept,
            boundary: logit(threshold),
            metadata,
        })
    }

    /// intercept + w . x
    pub fn decision_function(&self, row: &FeatureRow) -> f64 {
        let x = Array1::from(row.to_f64().to_vec());
        self.intercept + self.coefficients.dot(&x)
    }
}

impl ExternalClassifier for LogisticModel {
    fn classify(&self, row: &FeatureRow) -> Result<u8, InferenceError> {
        let z = self.decision_function(row);
        if z.is_nan() {
            return Err(InferenceError("decision function is NaN".to_string()));
        }
        tracing::trace!(decision = z, probability = sigmoid(z), "Logistic score");
        Ok(u8::from(z > self.boundary))
    }

    fn metadata(&self) -> &ModelMetadata {
        &self.metadata
    }
}

/// Inverse of `sigmoid` on (0, 1); exactly 0 at 0.5
fn logit(p: f64) -> f64 {
    (p / (1.0 - p)).ln()
}

/// Overflow-safe logistic function
fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::features::layout::FEATURE_LAYOUT;

    fn row(codes: [u8; FEATURE_COUNT]) -> FeatureRow {
        FeatureRow::from_codes(codes).unwrap()
    }

    fn artifact(coefficients: Vec<f64>, intercept: f64) -> LogisticArtifact {
        LogisticArtifact {
            model_type: MODEL_TYPE.to_string(),
            feature_names: None,
            coefficients,
            intercept,
            threshold: None,
        }
    }

    #[test]
    fn test_sigmoid() {
        assert_eq!(sigmoid(0.0), 0.5);
        assert!(sigmoid(800.0) <= 1.0);
        assert!(sigmoid(-800.0) >= 0.0);
        assert!((sigmoid(2.0) + sigmoid(-2.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_classifies_by_decision_sign() {
        // Only Financial Condition matters: Poor(1) vs Rich(3), boundary at 2.5
        let mut w = vec![0.0; FEATURE_COUNT];
        w[7] = 1.0;
        let model = LogisticModel::from_artifact(artifact(w, -2.5), "mem", String::new()).unwrap();

        let poor = row([1, 0, 0, 1, 0, 1, 0, 1, 2, 1, 0, 0, 1]);
        let rich = row([1, 0, 0, 1, 0, 1, 0, 3, 2, 1, 0, 0, 1]);

        assert!(model.decision_function(&poor) < 0.0);
        assert_eq!(model.classify(&poor), Ok(0));
        assert_eq!(model.classify(&rich), Ok(1));
    }

    #[test]
    fn test_tiny_positive_decision_is_class_one() {
        // sigmoid(1e-17) rounds to 0.5; the sign still decides
        let model =
            LogisticModel::from_artifact(artifact(vec![0.0; FEATURE_COUNT], 1e-17), "mem", String::new())
                .unwrap();
        let r = row([0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 0, 0, 1]);
        assert_eq!(sigmoid(model.decision_function(&r)), 0.5);
        assert_eq!(model.classify(&r), Ok(1));

        let model =
            LogisticModel::from_artifact(artifact(vec![0.0; FEATURE_COUNT], 0.0), "mem", String::new())
                .unwrap();
        assert_eq!(model.classify(&r), Ok(0));
    }

    #[test]
    fn test_logit_inverts_sigmoid() {
        assert_eq!(logit(0.5), 0.0);
        assert!((sigmoid(logit(0.8)) - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_custom_threshold() {
        let mut a = artifact(vec![0.0; FEATURE_COUNT], 0.0);
        a.threshold = Some(0.4);
        let model = LogisticModel::from_artifact(a, "mem", String::new()).unwrap();
        // p = 0.5 > 0.4
        assert_eq!(model.classify(&row([0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 0, 0, 1])), Ok(1));
    }

    #[test]
    fn test_rejects_wrong_coefficient_count() {
        let err = LogisticModel::from_artifact(artifact(vec![0.1; 12], 0.0), "mem", String::new())
            .unwrap_err();
        assert!(matches!(err, ModelLoadError::InvalidArtifact(_)));
    }

    #[test]
    fn test_rejects_mismatched_feature_names() {
        let mut names: Vec<String> = FEATURE_LAYOUT.iter().map(|s| s.to_string()).collect();
        names.reverse();
        let mut a = artifact(vec![0.0; FEATURE_COUNT], 0.0);
        a.feature_names = Some(names);

        let err = LogisticModel::from_artifact(a, "mem", String::new()).unwrap_err();
        assert!(matches!(err, ModelLoadError::LayoutMismatch(_)));
    }

    #[test]
    fn test_rejects_bad_threshold_and_type() {
        let mut a = artifact(vec![0.0; FEATURE_COUNT], 0.0);
        a.threshold = Some(1.5);
        assert!(LogisticModel::from_artifact(a, "mem", String::new()).is_err());

        let mut a = artifact(vec![0.0; FEATURE_COUNT], 0.0);
        a.model_type = "random_forest".to_string();
        assert!(LogisticModel::from_artifact(a, "mem", String::new()).is_err());
    }

    #[test]
    fn test_from_json() {
        let json = serde_json::json!({
            "feature_names": FEATURE_LAYOUT,
            "coefficients": vec![0.0; FEATURE_COUNT],
            "intercept": 1.0,
        });
        let bytes = serde_json::to_vec(&json).unwrap();
        let model = LogisticModel::from_json(&bytes, "model.json", "abc".to_string()).unwrap();

        assert_eq!(model.metadata().model_type, MODEL_TYPE);
        assert_eq!(model.metadata().threshold, DEFAULT_DECISION_THRESHOLD);
        assert_eq!(model.metadata().checksum, "abc");

        assert!(matches!(
            LogisticModel::from_json(b"{not json", "model.json", String::new()),
            Err(ModelLoadError::InvalidArtifact(_))
        ));
    }
}
