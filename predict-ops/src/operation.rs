//! Reversible sequence operations
//!
//! Every operation pairs a forward transform over a whole sequence with an
//! inverse step that rebuilds the next value of the original sequence from
//! the next value of the transformed one.

use serde::Serialize;

/// Shape of an operation's forward transform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    /// Consumes adjacent pairs, output is one element shorter
    Binary,
    /// Maps each element independently, output has the same length
    Unary,
}

/// A reversible transformation over `f64` sequences
///
/// Operations are identified by their description: two operations with the
/// same description compare equal, and a unary operation never follows one
/// that shares its description.
#[derive(Debug, Clone, Copy)]
pub enum Operation {
    Binary {
        description: &'static str,
        /// `forward(previous, current)` for each adjacent pair
        forward: fn(f64, f64) -> f64,
        /// `inverse(last_original, next_transformed)`
        inverse: fn(f64, f64) -> f64,
    },
    Unary {
        description: &'static str,
        forward: fn(f64) -> f64,
        inverse: fn(f64) -> f64,
    },
}

impl Operation {
    pub fn binary(
        description: &'static str,
        forward: fn(f64, f64) -> f64,
        inverse: fn(f64, f64) -> f64,
    ) -> Self {
        Operation::Binary { description, forward, inverse }
    }

    pub fn unary(description: &'static str, forward: fn(f64) -> f64, inverse: fn(f64) -> f64) -> Self {
        Operation::Unary { description, forward, inverse }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Operation::Binary { description, .. } | Operation::Unary { description, .. } => *description,
        }
    }

    pub fn kind(&self) -> OperationKind {
        match self {
            Operation::Binary { .. } => OperationKind::Binary,
            Operation::Unary { .. } => OperationKind::Unary,
        }
    }

    /// Transform a whole sequence
    pub fn forward(&self, values: &[f64]) -> Vec<f64> {
        match self {
            Operation::Binary { forward, .. } => values.windows(2).map(|w| forward(w[0], w[1])).collect(),
            Operation::Unary { forward, .. } => values.iter().map(|&v| forward(v)).collect(),
        }
    }

    /// Next value of the original sequence.
    ///
    /// `last_original` is the current last value of the sequence this
    /// operation was applied to, `next_transformed` the value just appended
    /// to the transformed sequence. Unary operations ignore `last_original`.
    pub fn inverse_step(&self, last_original: f64, next_transformed: f64) -> f64 {
        match self {
            Operation::Binary { inverse, .. } => inverse(last_original, next_transformed),
            Operation::Unary { inverse, .. } => inverse(next_transformed),
        }
    }

    /// Whether this operation may be applied right after `previous`.
    ///
    /// `None` means there is no previous operation (the root of a search).
    pub fn can_follow(&self, previous: Option<&Operation>) -> bool {
        match (self, previous) {
            (Operation::Unary { description, .. }, Some(prev)) => *description != prev.description(),
            _ => true,
        }
    }
}

impl PartialEq for Operation {
    fn eq(&self, other: &Self) -> bool {
        self.description() == other.description()
    }
}

impl Eq for Operation {}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}

/// Successive differences: `1, 4, 9` becomes `3, 5`
pub fn difference() -> Operation {
    Operation::binary("a-b", |prev, cur| cur - prev, |last, diff| last + diff)
}

/// Successive ratios: `2, 6, 18` becomes `3, 3`
pub fn ratio() -> Operation {
    Operation::binary("a/b", |prev, cur| cur / prev, |last, factor| last * factor)
}

/// Element-wise reciprocal: `1, 0.5, 0.25` becomes `1, 2, 4`
pub fn reciprocal() -> Operation {
    Operation::unary("1/a", |v| 1.0 / v, |v| 1.0 / v)
}
