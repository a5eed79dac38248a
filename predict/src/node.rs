//! Pattern nodes
//!
//! One node per level of the decomposition. A node either holds a constant
//! sequence (terminal) or the operation that produced its child's sequence
//! together with that child.

use predict_ops::Operation;
use std::fmt::Write as _;

/// Operation applied at a level, and the node for the transformed sequence
#[derive(Debug, Clone)]
struct Step {
    operation: Operation,
    child: Box<PatternNode>,
}

/// One level of a discovered pattern
#[derive(Debug, Clone)]
pub struct PatternNode {
    values: Vec<f64>,
    step: Option<Step>,
}

impl PatternNode {
    /// A terminal node over `values`
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, step: None }
    }

    /// Attach `operation` and the node holding its output.
    ///
    /// Meant for building known patterns by hand. Calling this on a node
    /// produced by a search replaces whatever the search found.
    pub fn with_operation(mut self, operation: Operation, child: PatternNode) -> Self {
        self.step = Some(Step {
            operation,
            child: Box::new(child),
        });
        self
    }

    /// Values at this level, including any appended predictions
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// True when this level is constant (no operation, no child)
    pub fn is_constant(&self) -> bool {
        self.step.is_none()
    }

    pub fn operation(&self) -> Option<&Operation> {
        self.step.as_ref().map(|s| &s.operation)
    }

    pub fn child(&self) -> Option<&PatternNode> {
        self.step.as_ref().map(|s| s.child.as_ref())
    }

    /// This node followed by every descendant, root to terminal
    pub fn levels(&self) -> impl Iterator<Item = &PatternNode> {
        std::iter::successors(Some(self), |node| node.child())
    }

    /// Number of operations between this node and the terminal
    pub fn depth(&self) -> usize {
        self.levels().count() - 1
    }

    /// Operation descriptions, root to terminal
    pub fn operations(&self) -> Vec<&'static str> {
        self.levels()
            .filter_map(|node| node.operation())
            .map(|op| op.description())
            .collect()
    }

    /// Chain such as `(a-b) -> (a/b) -> ()`, where `()` marks the constant level
    pub fn description(&self) -> String {
        let mut out = String::with_capacity(50);
        for op in self.operations() {
            let _ = write!(out, "({}) -> ", op);
        }
        out.push_str("()");
        out
    }

    fn last(&self) -> f64 {
        // Only an uninitialized, empty root has no values
        self.values.last().copied().unwrap_or(f64::NAN)
    }

    /// Compute the next value without appending it at this level.
    ///
    /// Child levels do advance, so on a non-constant chain consecutive calls
    /// can return different values. A constant level returns its last value.
    pub fn next_value(&mut self) -> f64 {
        let last = self.last();
        match &mut self.step {
            None => last,
            Some(step) => {
                let next = step.child.advance();
                step.operation.inverse_step(last, next)
            }
        }
    }

    /// Compute the next value and append it at this level
    pub fn advance(&mut self) -> f64 {
        let next = self.next_value();
        self.values.push(next);
        next
    }
}
