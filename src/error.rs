//! Error handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::logic::features::EncodingError;
use crate::logic::model::ModelLoadError;
use crate::logic::pipeline::PipelineError;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug)]
pub enum AppError {
    // Input errors
    UnknownLabel(String),
    UnknownCode(String),
    UnknownFeature(String),
    MissingFeature(String),
    MalformedRow(String),
    BadUpload(String),

    // Model errors
    ModelUnavailable(String),
    InferenceFailed(String),
}

impl AppError {
    /// Stable tag for clients
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::UnknownLabel(_) => "unknown_label",
            AppError::UnknownCode(_) => "unknown_code",
            AppError::UnknownFeature(_) => "unknown_feature",
            AppError::MissingFeature(_) => "missing_feature",
            AppError::MalformedRow(_) => "malformed_row",
            AppError::BadUpload(_) => "bad_upload",
            AppError::ModelUnavailable(_) => "model_unavailable",
            AppError::InferenceFailed(_) => "inference_failed",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::ModelUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::InferenceFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }

    /// Message safe to show the user
    pub fn message(&self) -> String {
        match self {
            AppError::UnknownLabel(msg)
            | AppError::UnknownCode(msg)
            | AppError::UnknownFeature(msg)
            | AppError::MissingFeature(msg)
            | AppError::MalformedRow(msg)
            | AppError::BadUpload(msg) => {
                tracing::debug!(kind = self.kind(), "Rejected input: {}", msg);
                msg.clone()
            }
            AppError::ModelUnavailable(msg) => {
                tracing::warn!("Model unavailable: {}", msg);
                format!("Model is not available: {}", msg)
            }
            AppError::InferenceFailed(msg) => {
                tracing::error!("Inference error: {}", msg);
                "Prediction failed".to_string()
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = Json(json!({
            "error": self.message(),
            "kind": self.kind(),
            "status": status.as_u16()
        }));

        (status, body).into_response()
    }
}

impl From<EncodingError> for AppError {
    fn from(err: EncodingError) -> Self {
        match err {
            EncodingError::UnknownLabel { .. } => AppError::UnknownLabel(err.to_string()),
            EncodingError::UnknownCode { .. } => AppError::UnknownCode(err.to_string()),
            EncodingError::UnknownFeature(_) => AppError::UnknownFeature(err.to_string()),
        }
    }
}

impl From<PipelineError> for AppError {
    fn from(err: PipelineError) -> Self {
        match err {
            PipelineError::Encoding(e) => e.into(),
            PipelineError::MalformedRow(_) => AppError::MalformedRow(err.to_string()),
            PipelineError::MissingFeature(_) => AppError::MissingFeature(err.to_string()),
            PipelineError::Inference(e) => AppError::InferenceFailed(e.to_string()),
        }
    }
}

impl From<&ModelLoadError> for AppError {
    fn from(err: &ModelLoadError) -> Self {
        AppError::ModelUnavailable(err.to_string())
    }
}

impl From<axum::extract::multipart::MultipartError> for AppError {
    fn from(err: axum::extract::multipart::MultipartError) -> Self {
        AppError::BadUpload(err.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::features::Feature;
    use crate::logic::model::InferenceError;

    #[test]
    fn test_pipeline_error_mapping() {
        let err: AppError = PipelineError::MalformedRow("missing column(s): Device".into()).into();
        assert_eq!(err.kind(), "malformed_row");
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);

        let err: AppError = PipelineError::Encoding(EncodingError::UnknownCode {
            feature: Feature::Gender,
            code: 5,
        })
        .into();
        assert_eq!(err.kind(), "unknown_code");

        let err: AppError = PipelineError::Inference(InferenceError("boom".into())).into();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message(), "Prediction failed");
    }

    #[test]
    fn test_model_load_error_mapping() {
        let load = ModelLoadError::NotFound("best_model_logreg_new.json".into());
        let err = AppError::from(&load);
        assert_eq!(err.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert!(err.message().contains("best_model_logreg_new.json"));
    }
}
