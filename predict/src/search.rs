//! Recursive pattern search
//!
//! At every level the registry is walked in order. Each eligible operation
//! transforms the sequence and the search recurses into the result; the
//! first branch that reaches a constant sequence is committed. A failed
//! branch only moves the loop on to the next operation.

use crate::PatternNode;
use predict_core::{check_constant, Attempt, PredictorConfig, SearchFailure};
use predict_ops::{Operation, OperationRegistry};
use tracing::{debug, trace};

/// Levels of nested attempts each failure keeps for diagnostics
const DIAGNOSTIC_LEVELS: usize = 1;

pub(crate) struct Search<'a> {
    registry: &'a OperationRegistry,
    config: &'a PredictorConfig,
}

impl<'a> Search<'a> {
    pub fn new(registry: &'a OperationRegistry, config: &'a PredictorConfig) -> Self {
        Self { registry, config }
    }

    /// Search from a root sequence, with no previous operation
    pub fn run(&self, values: Vec<f64>) -> Result<PatternNode, SearchFailure> {
        self.level(values, None, 0)
    }

    fn level(
        &self,
        values: Vec<f64>,
        previous: Option<&Operation>,
        depth: usize,
    ) -> Result<PatternNode, SearchFailure> {
        if values.len() < 2 {
            return Err(SearchFailure::InsufficientData { len: values.len() });
        }

        if let Some(max) = self.config.max_depth {
            if depth > max {
                return Err(SearchFailure::DepthExceeded { depth });
            }
        }

        if check_constant(&values, self.config.fuzzy_threshold)? {
            trace!(depth, len = values.len(), "constant sequence");
            return Ok(PatternNode::new(values));
        }

        let mut attempts = Vec::new();
        for operation in self.registry.eligible_after(previous) {
            debug!(depth, operation = operation.description(), len = values.len(), "trying operation");
            let transformed = operation.forward(&values);
            match self.level(transformed, Some(operation), depth + 1) {
                Ok(child) => return Ok(PatternNode::new(values).with_operation(*operation, child)),
                Err(failure) => attempts.push(Attempt::new(
                    operation.description(),
                    failure.truncated(DIAGNOSTIC_LEVELS),
                )),
            }
        }

        Err(SearchFailure::NoPatternFound { attempts })
    }
}
