//! Predictor configuration
//!
//! Built with builder methods, or read from `PREDICT_*` environment variables.

use crate::{PredictError, FUZZY_EQ_THRESHOLD};
use serde::{Deserialize, Serialize};
use std::env;

pub const ENV_FUZZY_THRESHOLD: &str = "PREDICT_FUZZY_THRESHOLD";
pub const ENV_MAX_DEPTH: &str = "PREDICT_MAX_DEPTH";

/// Tunables for pattern search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictorConfig {
    /// Relative threshold used to decide a sequence is constant
    pub fuzzy_threshold: f64,
    /// Deepest search level allowed; `None` leaves depth bounded by input length
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<usize>,
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            fuzzy_threshold: FUZZY_EQ_THRESHOLD,
            max_depth: None,
        }
    }
}

impl PredictorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fuzzy_threshold(mut self, threshold: f64) -> Self {
        self.fuzzy_threshold = threshold;
        self
    }

    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Defaults overridden by any `PREDICT_*` variables present
    pub fn from_env() -> Result<Self, PredictError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, PredictError> {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_FUZZY_THRESHOLD) {
            let threshold = raw.trim().parse::<f64>().map_err(|e| {
                PredictError::config(format!("{}='{}': {}", ENV_FUZZY_THRESHOLD, raw, e))
            })?;
            config = config.with_fuzzy_threshold(threshold);
        }

        if let Some(raw) = lookup(ENV_MAX_DEPTH) {
            let depth = raw.trim().parse::<usize>().map_err(|e| {
                PredictError::config(format!("{}='{}': {}", ENV_MAX_DEPTH, raw, e))
            })?;
            config = config.with_max_depth(depth);
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), PredictError> {
        if !self.fuzzy_threshold.is_finite() || self.fuzzy_threshold < 0.0 {
            return Err(PredictError::config(format!(
                "fuzzy threshold must be a finite non-negative number, got {}",
                self.fuzzy_threshold
            )));
        }
        if self.max_depth == Some(0) {
            return Err(PredictError::config("max depth must be at least 1")
                .with_suggestion(format!("Unset {} to search without a depth cap", ENV_MAX_DEPTH)));
        }
        Ok(())
    }
}
