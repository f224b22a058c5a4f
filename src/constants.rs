//! Central Configuration Constants
//!
//! Single source of truth for all configuration defaults.
//! `config.rs` reads the environment and falls back to these.

/// Default bind host
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default HTTP port
pub const DEFAULT_PORT: u16 = 8501;

/// Default model artifact path (logistic-regression export)
pub const DEFAULT_MODEL_PATH: &str = "best_model_logreg_new.json";

/// Maximum accepted upload size in bytes
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 64 * 1024;

/// Default decision threshold for probability outputs
pub const DEFAULT_DECISION_THRESHOLD: f64 = 0.5;

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App name
pub const APP_NAME: &str = "Students Adaptability Level in Online Education";

/// Default tracing filter when RUST_LOG is unset
pub const DEFAULT_LOG_FILTER: &str = "adaptability_server=debug,tower_http=debug";
