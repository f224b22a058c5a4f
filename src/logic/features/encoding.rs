//! Categorical Encoding - label <-> code tables
//!
//! Every feature owns its own table. Codes overlap across features
//! (`1` is "Boy", "6-10", "Government", ...), so lookups are always
//! scoped by `Feature`.
//!
//! The codes are what the classifier was trained on. Do not renumber.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use thiserror::Error;

use super::layout::{Feature, FEATURE_COUNT};

/// Encoding errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodingError {
    #[error("unknown label '{label}' for feature '{feature}'")]
    UnknownLabel { feature: Feature, label: String },

    #[error("unknown code {code} for feature '{feature}'")]
    UnknownCode { feature: Feature, code: i64 },

    #[error("unknown feature '{0}'")]
    UnknownFeature(String),
}

/// (label, code) pairs in the order the form presents them
fn table_for(feature: Feature) -> &'static [(&'static str, u8)] {
    match feature {
        Feature::Gender => &[("Boy", 1), ("Girl", 0)],
        Feature::Age => &[
            ("1-5", 0),
            ("6-10", 1),
            ("11-15", 2),
            ("16-20", 3),
            ("21-25", 4),
            ("26-30", 5),
        ],
        Feature::EducationLevel => &[("School", 0), ("College", 1), ("University", 2)],
        Feature::InstitutionType => &[("Government", 1), ("Non Government", 0)],
        Feature::ItStudent => &[("No", 0), ("Yes", 1)],
        Feature::LocationInTown => &[("Yes", 1), ("No", 0)],
        Feature::LoadShedding => &[("Low", 0), ("High", 1)],
        Feature::FinancialCondition => &[("Poor", 1), ("Mid", 2), ("Rich", 3)],
        Feature::InternetType => &[("Wifi", 2), ("Mobile Data", 1)],
        Feature::NetworkType => &[("2G", 1), ("3G", 2), ("4G", 3)],
        Feature::ClassDuration => &[("0", 0), ("1-3", 1), ("3-6", 2)],
        Feature::SelfLms => &[("No", 0), ("Yes", 1)],
        Feature::Device => &[("Tab", 1), ("Mobile", 2), ("Computer", 3)],
    }
}

// ============================================================================
// ENCODING TABLE
// ============================================================================

/// Lookup maps for one feature
#[derive(Debug)]
pub struct FeatureTable {
    entries: &'static [(&'static str, u8)],
    by_label: HashMap<&'static str, u8>,
    by_code: HashMap<u8, &'static str>,
}

impl FeatureTable {
    fn build(feature: Feature) -> Self {
        let entries = table_for(feature);
        let by_label: HashMap<_, _> = entries.iter().copied().collect();
        let by_code: HashMap<_, _> = entries.iter().map(|&(l, c)| (c, l)).collect();

        assert_eq!(by_label.len(), entries.len(), "duplicate label in {feature}");
        assert_eq!(by_code.len(), entries.len(), "duplicate code in {feature}");

        Self { entries, by_label, by_code }
    }

    pub fn code(&self, label: &str) -> Option<u8> {
        self.by_label.get(label).copied()
    }

    pub fn label(&self, code: u8) -> Option<&'static str> {
        self.by_code.get(&code).copied()
    }

    /// Labels in presentation order
    pub fn labels(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|&(l, _)| l)
    }

    /// Valid codes, ascending
    pub fn codes(&self) -> Vec<u8> {
        let mut codes: Vec<u8> = self.by_code.keys().copied().collect();
        codes.sort_unstable();
        codes
    }

    pub fn entries(&self) -> &'static [(&'static str, u8)] {
        self.entries
    }
}

/// Process-wide, immutable set of per-feature tables
#[derive(Debug)]
pub struct EncodingTable {
    tables: [FeatureTable; FEATURE_COUNT],
}

impl EncodingTable {
    fn build() -> Self {
        Self {
            tables: Feature::ALL.map(FeatureTable::build),
        }
    }

    /// The shared table, built on first use
    pub fn global() -> &'static EncodingTable {
        static TABLE: Lazy<EncodingTable> = Lazy::new(EncodingTable::build);
        &TABLE
    }

    pub fn feature(&self, feature: Feature) -> &FeatureTable {
        &self.tables[feature.index()]
    }

    pub fn encode(&self, feature: Feature, label: &str) -> Result<u8, EncodingError> {
        self.feature(feature)
            .code(label)
            .ok_or_else(|| EncodingError::UnknownLabel {
                feature,
                label: label.to_string(),
            })
    }

    /// Accepts any integer so out-of-range input is reported, not truncated
    pub fn decode(&self, feature: Feature, code: i64) -> Result<&'static str, EncodingError> {
        u8::try_from(code)
            .ok()
            .and_then(|c| self.feature(feature).label(c))
            .ok_or(EncodingError::UnknownCode { feature, code })
    }

    pub fn is_valid_code(&self, feature: Feature, code: i64) -> bool {
        self.decode(feature, code).is_ok()
    }
}

// ============================================================================
// FREE FUNCTIONS
// ============================================================================

pub fn encode(feature: Feature, label: &str) -> Result<u8, EncodingError> {
    EncodingTable::global().encode(feature, label)
}

pub fn decode(feature: Feature, code: i64) -> Result<&'static str, EncodingError> {
    EncodingTable::global().decode(feature, code)
}
