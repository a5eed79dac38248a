//! Predict Operations
//!
//! Reversible elementary operations and the ordered registry the pattern
//! search walks through:
//! - `a-b`: successive differences
//! - `a/b`: successive ratios
//! - `1/a`: element-wise reciprocal

mod operation;
mod registry;

pub use operation::{difference, ratio, reciprocal, Operation, OperationKind};
pub use registry::{OperationInfo, OperationRegistry};

/// Re-export core types alongside the operation API
pub mod prelude {
    pub use crate::{Operation, OperationKind, OperationRegistry};
    pub use predict_core::prelude::*;
}
