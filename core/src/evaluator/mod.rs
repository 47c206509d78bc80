//! Tree-walking evaluator for checked interpolation strings.
//!
//! The evaluator resolves the segments of a [`CheckedTemplate`] against a
//! [`VariableTable`] and composes the result.
//!
//! ## Design Principles
//!
//! - **Never panic**: every input the analyzer accepts evaluates to a value or an error
//! - **Stack-safe**: depth tracking bounds recursion on deeply nested segments
//! - **Lazy conditionals**: only the chosen branch of a conditional is evaluated
//!
//! ## Example
//!
//! ```
//! use tfeval_core::{analyzer, evaluator, Metadata, Value, VariableTable};
//!
//! let table = VariableTable::build_from_sources(
//!     &[("main.tf", r#"variable "names" { default = ["a", "b"] }"#)],
//!     Metadata::default(),
//! )
//! .unwrap();
//!
//! let checked = analyzer::analyze_source("${var.names[1]}", 100).unwrap();
//! let result = evaluator::eval(&checked, &table).unwrap();
//! assert_eq!(result, Value::from("b"));
//! ```

mod error;
mod eval;


pub use error::EvalError;
pub use eval::Evaluator;

use crate::analyzer::CheckedTemplate;
use crate::parser::DEFAULT_MAX_DEPTH;
use crate::values::Value;
use crate::variables::VariableTable;

/// Evaluate a checked template with the default depth limit.
pub fn eval(template: &CheckedTemplate, table: &VariableTable) -> Result<Value, EvalError> {
    eval_with_limits(template, table, DEFAULT_MAX_DEPTH)
}

/// Evaluate a checked template, failing once nesting exceeds `max_depth`.
pub fn eval_with_limits(
    template: &CheckedTemplate,
    table: &VariableTable,
    max_depth: usize,
) -> Result<Value, EvalError> {
    Evaluator::new(table, max_depth).eval(template)
}
