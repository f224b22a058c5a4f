//! Feature schema handler

use axum::Json;

use crate::models::FeatureSchema;

/// Layout and label/code domains for every feature
pub async fn features() -> Json<FeatureSchema> {
    Json(FeatureSchema::current())
}
