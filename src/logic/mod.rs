//! Domain logic: encoding, classifiers, prediction pipeline

pub mod features;
pub mod model;
pub mod pipeline;
