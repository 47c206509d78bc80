//! Evaluation errors.
//!
//! Missing data is not an error: it evaluates to `Value::Absent`. What is
//! left is a list index past the end and recursion past the depth limit.

use crate::parser::Span;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// List index past the end.
    #[error("index {index} out of range for list of length {len}")]
    IndexOutOfBounds { index: usize, len: usize, span: Span },

    /// Evaluation recursion depth exceeded.
    #[error("evaluation depth {depth} exceeds maximum of {max_depth}")]
    DepthExceeded {
        depth: usize,
        max_depth: usize,
        span: Span,
    },
}

impl EvalError {
    pub fn span(&self) -> &Span {
        match self {
            EvalError::IndexOutOfBounds { span, .. } => span,
            EvalError::DepthExceeded { span, .. } => span,
        }
    }
}
