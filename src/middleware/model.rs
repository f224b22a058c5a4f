//! Loaded-model extractor
//!
//! Prediction handlers take `LoadedModel`; if the artifact failed to load at
//! startup the request is rejected with the stored load error.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::logic::model::SharedClassifier;
use crate::{AppError, AppState};

#[derive(Clone)]
pub struct LoadedModel(pub SharedClassifier);

impl AppState {
    /// The classifier, or the reason it is missing
    pub fn classifier(&self) -> Result<SharedClassifier, AppError> {
        match &self.model {
            Ok(model) => Ok(model.clone()),
            Err(err) => Err(AppError::from(err.as_ref())),
        }
    }
}

#[axum::async_trait]
impl FromRequestParts<AppState> for LoadedModel {
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        state.classifier().map(LoadedModel)
    }
}
