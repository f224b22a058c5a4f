//! Model Loader - artifact file -> classifier
//!
//! The artifact kind is picked from the file extension:
//! - `.json` logistic-regression export (always available)
//! - `.onnx` ONNX graph (requires the `onnx` feature)

use std::path::{Path, PathBuf};
use std::sync::Arc;

use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::logic::features::layout::LayoutMismatchError;

use super::classifier::ExternalClassifier;
use super::logistic::LogisticModel;

/// Shared handle to a loaded classifier
pub type SharedClassifier = Arc<dyn ExternalClassifier>;

#[derive(Debug, Error)]
pub enum ModelLoadError {
    #[error("model not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read model {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("model checksum mismatch: expected {expected}, got {actual}")]
    ChecksumMismatch { expected: String, actual: String },

    #[error("unsupported model format: {0}")]
    UnsupportedFormat(String),

    #[error("invalid model artifact: {0}")]
    InvalidArtifact(String),

    #[error(transparent)]
    LayoutMismatch(#[from] LayoutMismatchError),

    #[error("model runtime error: {0}")]
    Runtime(String),
}

/// Hex SHA-256 of artifact bytes
pub fn artifact_checksum(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}

/// Load a classifier from `path`, optionally pinning its SHA-256
pub fn load_classifier(
    path: &Path,
    expected_sha256: Option<&str>,
) -> Result<SharedClassifier, ModelLoadError> {
    tracing::info!("Loading model from: {}", path.display());

    if !path.exists() {
        return Err(ModelLoadError::NotFound(path.to_path_buf()));
    }

    let bytes = std::fs::read(path).map_err(|source| ModelLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let checksum = artifact_checksum(&bytes);
    if let Some(expected) = expected_sha256 {
        if !expected.eq_ignore_ascii_case(&checksum) {
            return Err(ModelLoadError::ChecksumMismatch {
                expected: expected.to_string(),
                actual: checksum,
            });
        }
    }

    let model_path = path.display().to_string();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    let classifier: SharedClassifier = match extension.as_str() {
        "json" => Arc::new(LogisticModel::from_json(&bytes, &model_path, checksum)?),
        #[cfg(feature = "onnx")]
        "onnx" => Arc::new(super::onnx::OnnxClassifier::from_bytes(&bytes, &model_path, checksum)?),
        #[cfg(not(feature = "onnx"))]
        "onnx" => {
            return Err(ModelLoadError::UnsupportedFormat(
                "ONNX support not compiled in (enable the `onnx` feature)".to_string(),
            ))
        }
        other => {
            return Err(ModelLoadError::UnsupportedFormat(format!(
                "unrecognised extension '{}'",
                other
            )))
        }
    };

    let meta = classifier.metadata();
    tracing::info!(
        model_type = %meta.model_type,
        checksum = %meta.checksum,
        loaded_at = %meta.loaded_at,
        "Model loaded successfully"
    );

    Ok(classifier)
}
