//! Feature Row - the model's input unit
//!
//! One fully-encoded record of all 13 features, in layout order.
//! Rows are only built through the encoder or validated table loading,
//! so every stored code is inside its feature's domain.

use serde::Serialize;

use super::encoding::{EncodingError, EncodingTable};
use super::layout::{layout_hash, Feature, FEATURE_COUNT, FEATURE_LAYOUT, FEATURE_VERSION};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeatureRow {
    codes: [u8; FEATURE_COUNT],
}

impl FeatureRow {
    /// Build from codes in layout order, checking every code
    pub fn from_codes(codes: [u8; FEATURE_COUNT]) -> Result<Self, EncodingError> {
        let table = EncodingTable::global();
        for feature in Feature::ALL {
            table.decode(feature, codes[feature.index()] as i64)?;
        }
        Ok(Self { codes })
    }

    pub fn get(&self, feature: Feature) -> u8 {
        self.codes[feature.index()]
    }

    pub fn codes(&self) -> &[u8; FEATURE_COUNT] {
        &self.codes
    }

    /// Row as model input values
    pub fn to_f32(&self) -> [f32; FEATURE_COUNT] {
        self.codes.map(f32::from)
    }

    pub fn to_f64(&self) -> [f64; FEATURE_COUNT] {
        self.codes.map(f64::from)
    }

    /// (feature, code) pairs in layout order
    pub fn iter(&self) -> impl Iterator<Item = (Feature, u8)> + '_ {
        (0..FEATURE_COUNT).map(move |i| {
            let feature = Feature::ALL[i];
            (feature, self.get(feature))
        })
    }

    /// JSON form for logging
    pub fn to_log_entry(&self) -> serde_json::Value {
        serde_json::json!({
            "feature_version": FEATURE_VERSION,
            "layout_hash": layout_hash(),
            "values": self.codes,
            "named_values": FEATURE_LAYOUT.iter()
                .zip(self.codes.iter())
                .map(|(name, value)| (name.to_string(), *value))
                .collect::<std::collections::BTreeMap<_, _>>(),
        })
    }
}
