//! Model Module - classifier capability and loaders
//!
//! Loaders turn a persisted artifact into an `ExternalClassifier`.
//! The pipeline only ever sees the trait.

pub mod classifier;
pub mod loader;
pub mod logistic;
#[cfg(feature = "onnx")]
pub mod onnx;
#[cfg(test)]
pub mod stub;

// Re-export common types
pub use classifier::{ExternalClassifier, InferenceError, ModelMetadata};
pub use loader::{load_classifier, ModelLoadError, SharedClassifier};
