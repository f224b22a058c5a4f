//! HTTP handlers

pub mod health;
pub mod schema;
pub mod predict;
pub mod form;
