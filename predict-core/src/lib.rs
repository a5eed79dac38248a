//! Predict Core - Fundamental types
//!
//! This crate provides the core types shared by the predictor crates:
//! - `SearchFailure`: why one search level failed
//! - `PredictError`: structured errors for callers
//! - `fuzzy_eq`: relative floating-point equality
//! - `PredictorConfig`: search tunables

mod config;
mod error;
mod fuzzy;

pub use config::{PredictorConfig, ENV_FUZZY_THRESHOLD, ENV_MAX_DEPTH};
pub use error::{codes, Attempt, PredictError, SearchFailure, Severity};
pub use fuzzy::{check_constant, fuzzy_eq, fuzzy_eq_within, FUZZY_EQ_THRESHOLD};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::error::codes;
    pub use crate::{fuzzy_eq, PredictError, PredictorConfig, SearchFailure};
}
