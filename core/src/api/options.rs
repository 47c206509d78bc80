//! Configuration options for evaluation.

use crate::parser::DEFAULT_MAX_DEPTH;

/// Configuration options for classification and evaluation.
///
/// # Example
///
/// ```
/// use tfeval_core::api::EvaluatorOptions;
///
/// let options = EvaluatorOptions { max_depth: 500 };
/// assert_eq!(EvaluatorOptions::default().max_depth, 100);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluatorOptions {
    /// Maximum nesting depth of a single `${...}` segment.
    ///
    /// Applies to parsing, lowering and evaluation alike.
    ///
    /// Default: 100
    pub max_depth: usize,
}

impl Default for EvaluatorOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
