//! Features Module - categorical schema and encoding
//!
//! Layout (column order), per-feature label/code tables and the
//! encoded row type handed to classifiers.

pub mod layout;
pub mod encoding;
pub mod row;


// Re-export common types
pub use layout::{Feature, LayoutInfo, FEATURE_COUNT};
pub use encoding::{decode, encode, EncodingError, EncodingTable};
pub use row::FeatureRow;
