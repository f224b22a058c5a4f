//! FeatureRow -> human-readable echo

use serde::Serialize;

use crate::logic::features::{decode, Feature, FeatureRow};

use super::PipelineError;

/// One line of the "User Inputs" table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayEntry {
    pub feature: Feature,
    pub value: &'static str,
}

/// Decode every code back to its label, in layout order
pub fn decode_row_for_display(row: &FeatureRow) -> Result<Vec<DisplayEntry>, PipelineError> {
    row.iter()
        .map(|(feature, code)| -> Result<DisplayEntry, PipelineError> {
            let value = decode(feature, i64::from(code))?;
            Ok(DisplayEntry { feature, value })
        })
        .collect()
}
