//! Feature Layout - Centralized Feature Definition
//!
//! **This file controls the model input schema.**
//!
//! The column order below is the order the pre-trained classifier was fitted
//! against. Any change to names or order must bump `FEATURE_VERSION`.

use std::fmt;
use std::str::FromStr;

use crc32fast::Hasher;
use serde::{Deserialize, Serialize};

use super::encoding::EncodingError;

// ============================================================================
// FEATURE VERSION
// ============================================================================

/// Current feature layout version
pub const FEATURE_VERSION: u8 = 1;

/// Total number of features
pub const FEATURE_COUNT: usize = 13;

// ============================================================================
// FEATURE
// ============================================================================

/// One categorical input dimension of the classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Feature {
    Gender,
    Age,
    EducationLevel,
    InstitutionType,
    ItStudent,
    LocationInTown,
    LoadShedding,
    FinancialCondition,
    InternetType,
    NetworkType,
    ClassDuration,
    SelfLms,
    Device,
}

impl Feature {
    /// All features in model column order
    pub const ALL: [Feature; FEATURE_COUNT] = [
        Feature::Gender,             // 0
        Feature::Age,                // 1
        Feature::EducationLevel,     // 2
        Feature::InstitutionType,    // 3
        Feature::ItStudent,          // 4
        Feature::LocationInTown,     // 5
        Feature::LoadShedding,       // 6
        Feature::FinancialCondition, // 7
        Feature::InternetType,       // 8
        Feature::NetworkType,        // 9
        Feature::ClassDuration,      // 10
        Feature::SelfLms,            // 11
        Feature::Device,             // 12
    ];

    /// Column name as it appears in uploads and model artifacts
    pub fn name(self) -> &'static str {
        FEATURE_LAYOUT[self.index()]
    }

    /// Position of this feature in the row
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Feature> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Feature {
    type Err = EncodingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        feature_index(s)
            .and_then(Feature::from_index)
            .ok_or_else(|| EncodingError::UnknownFeature(s.to_string()))
    }
}

impl Serialize for Feature {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Feature {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// FEATURE LAYOUT (Authoritative source)
// ============================================================================

/// Feature names in exact order they appear in the row
pub const FEATURE_LAYOUT: [&str; FEATURE_COUNT] = [
    "Gender",
    "Age",
    "Education Level",
    "Institution Type",
    "IT Student",
    "Location in Town",
    "Load-shedding",
    "Financial Condition",
    "Internet Type",
    "Network Type",
    "Class Duration",
    "Self LMS",
    "Device",
];

// ============================================================================
// LAYOUT HASH
// ============================================================================

/// Compute CRC32 hash of the feature layout
pub fn compute_layout_hash() -> u32 {
    let mut hasher = Hasher::new();

    hasher.update(&[FEATURE_VERSION]);

    for name in FEATURE_LAYOUT {
        hasher.update(name.as_bytes());
        hasher.update(&[0]); // Separator
    }

    hasher.finalize()
}

pub fn layout_hash() -> u32 {
    compute_layout_hash()
}

// ============================================================================
// LAYOUT INFO
// ============================================================================

/// Complete layout information for serialization/logging
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutInfo {
    pub version: u8,
    pub hash: u32,
    pub feature_count: usize,
    pub feature_names: Vec<String>,
}

impl LayoutInfo {
    pub fn current() -> Self {
        Self {
            version: FEATURE_VERSION,
            hash: layout_hash(),
            feature_count: FEATURE_COUNT,
            feature_names: FEATURE_LAYOUT.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Default for LayoutInfo {
    fn default() -> Self {
        Self::current()
    }
}

// ============================================================================
// LAYOUT VALIDATION
// ============================================================================

/// Error when a declared column list doesn't match the layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutMismatchError {
    pub expected: Vec<String>,
    pub actual: Vec<String>,
}

impl fmt::Display for LayoutMismatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Feature layout mismatch: expected v{} {:?} (hash: {:08x}), got {:?}",
            FEATURE_VERSION,
            self.expected,
            layout_hash(),
            self.actual
        )
    }
}

impl std::error::Error for LayoutMismatchError {}

/// Validate that a declared column list matches current layout exactly
pub fn validate_feature_names<S: AsRef<str>>(names: &[S]) -> Result<(), LayoutMismatchError> {
    let matches = names.len() == FEATURE_COUNT
        && names
            .iter()
            .zip(FEATURE_LAYOUT.iter())
            .all(|(actual, expected)| actual.as_ref() == *expected);

    if !matches {
        return Err(LayoutMismatchError {
            expected: FEATURE_LAYOUT.iter().map(|s| s.to_string()).collect(),
            actual: names.iter().map(|s| s.as_ref().to_string()).collect(),
        });
    }

    Ok(())
}

// ============================================================================
// FEATURE INDEX LOOKUP
// ============================================================================

/// Get feature index by name
pub fn feature_index(name: &str) -> Option<usize> {
    FEATURE_LAYOUT.iter().position(|&n| n == name)
}
