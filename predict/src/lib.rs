//! Predict - continue numeric sequences
//!
//! A `Predictor` looks for a chain of reversible operations (differences,
//! ratios, reciprocals) that reduces a sequence to a constant, then runs the
//! chain backwards to extrapolate. Polynomial, geometric and reciprocal
//! sequences, and mixes of them, are found this way given enough values.

mod node;
mod search;
mod stream;

pub use node::PatternNode;
pub use stream::PredictionStream;

pub use predict_core::{PredictError, PredictorConfig, SearchFailure};
pub use predict_ops::{Operation, OperationRegistry};

use search::Search;
use tracing::debug;

/// Predicts the next values of a sequence
#[derive(Debug, Clone)]
pub struct Predictor {
    root: PatternNode,
    registry: OperationRegistry,
    config: PredictorConfig,
    initialized: bool,
}

impl Predictor {
    /// An uninitialized predictor using the standard registry and defaults
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        Self {
            root: PatternNode::new(values.into()),
            registry: OperationRegistry::standard(),
            config: PredictorConfig::default(),
            initialized: false,
        }
    }

    pub fn with_registry(mut self, registry: OperationRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn with_config(mut self, config: PredictorConfig) -> Self {
        self.config = config;
        self
    }

    /// Search for the pattern.
    ///
    /// Call exactly once, before any extrapolation. Calling it again searches
    /// from the current values and replaces the chain found earlier.
    pub fn initialize(&mut self) -> Result<(), PredictError> {
        self.config.validate()?;
        let search = Search::new(&self.registry, &self.config);
        let root = search.run(self.root.values().to_vec())?;
        debug!(pattern = %root.description(), len = root.values().len(), "pattern found");
        self.root = root;
        self.initialized = true;
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Next value, without appending it to the top-level sequence.
    ///
    /// Lower levels still advance. For a constant sequence this returns the
    /// same value on every call. Before `initialize()` the input is treated
    /// as constant, so the last input value is returned.
    pub fn next_value(&mut self) -> f64 {
        self.root.next_value()
    }

    /// Next value, appended to every level so the next call moves on
    pub fn advance(&mut self) -> f64 {
        self.root.advance()
    }

    /// The operation chain, for example `(a-b) -> (a/b) -> ()`
    pub fn pattern_description(&self) -> String {
        self.root.description()
    }

    /// Unbounded stream of `advance()` results; see `PredictionStream`
    pub fn prediction_stream(&mut self) -> PredictionStream<'_> {
        PredictionStream::new(&mut self.root)
    }

    /// Top-level values, including predictions appended by `advance()`
    pub fn values(&self) -> &[f64] {
        self.root.values()
    }

    pub fn root(&self) -> &PatternNode {
        &self.root
    }

    pub fn registry(&self) -> &OperationRegistry {
        &self.registry
    }

    pub fn config(&self) -> &PredictorConfig {
        &self.config
    }
}
