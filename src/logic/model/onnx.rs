//! ONNX Classifier - ONNX Runtime Integration
//!
//! For models exported with a converter that emits either an integer
//! `label` output or a probability output. The first graph output is used.

use ndarray::Array2;
use ort::session::{builder::GraphOptimizationLevel, Session};
use ort::value::Value;
use parking_lot::Mutex;

use crate::logic::features::{FeatureRow, FEATURE_COUNT};

use super::classifier::{ExternalClassifier, InferenceError, ModelMetadata};
use super::loader::ModelLoadError;

pub const MODEL_TYPE: &str = "onnx";

const PROBABILITY_THRESHOLD: f32 = 0.5;

pub struct OnnxClassifier {
    // `Session::run` takes `&mut self`
    session: Mutex<Session>,
    output_name: String,
    metadata: ModelMetadata,
}

impl OnnxClassifier {
    pub fn from_bytes(bytes: &[u8], model_path: &str, checksum: String) -> Result<Self, ModelLoadError> {
        tracing::info!("Loading ONNX model from memory ({} bytes)", bytes.len());

        let session = Session::builder()
            .map_err(|e| ModelLoadError::Runtime(format!("Session builder error: {}", e)))?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(|e| ModelLoadError::Runtime(format!("Optimization error: {}", e)))?
            .commit_from_memory(bytes)
            .map_err(|e| ModelLoadError::Runtime(format!("Load from memory error: {}", e)))?;

        let output_name = session
            .outputs
            .first()
            .map(|o| o.name.clone())
            .ok_or_else(|| ModelLoadError::InvalidArtifact("No output defined".to_string()))?;

        let metadata = ModelMetadata {
            model_path: model_path.to_string(),
            model_type: MODEL_TYPE.to_string(),
            features: FEATURE_COUNT,
            threshold: f64::from(PROBABILITY_THRESHOLD),
            checksum,
            loaded_at: chrono::Utc::now(),
        };

        Ok(Self {
            session: Mutex::new(session),
            output_name,
            metadata,
        })
    }
}

impl ExternalClassifier for OnnxClassifier {
    fn classify(&self, row: &FeatureRow) -> Result<u8, InferenceError> {
        let input = Array2::<f32>::from_shape_vec((1, FEATURE_COUNT), row.to_f32().to_vec())
            .map_err(|e| InferenceError(format!("Array error: {}", e)))?;

        let input_tensor = Value::from_array(input)
            .map_err(|e| InferenceError(format!("Tensor error: {}", e)))?;

        let mut session = self.session.lock();
        let outputs = session
            .run(ort::inputs![input_tensor])
            .map_err(|e| InferenceError(format!("Inference failed: {}", e)))?;

        let output = outputs
            .get(&self.output_name)
            .ok_or_else(|| InferenceError("No output".to_string()))?;

        if let Ok((_, labels)) = output.try_extract_tensor::<i64>() {
            let label = labels
                .first()
                .copied()
                .ok_or_else(|| InferenceError("Empty label output".to_string()))?;
            return Ok(u8::from(label != 0));
        }

        let (_, scores) = output
            .try_extract_tensor::<f32>()
            .map_err(|e| InferenceError(format!("Extract error: {}", e)))?;

        // [p] or [p0, p1]
        let p = match scores {
            [p] => *p,
            [_, p1, ..] => *p1,
            [] => return Err(InferenceError("Empty score output".to_string())),
        };

        Ok(u8::from(p > PROBABILITY_THRESHOLD))
    }

    fn metadata(&self) -> &ModelMetadata {
        &self.metadata
    }
}
