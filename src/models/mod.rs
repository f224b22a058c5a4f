//! Request/response models

pub mod prediction;
pub mod schema;

pub use prediction::*;
pub use schema::*;
