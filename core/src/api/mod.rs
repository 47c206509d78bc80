//! Public API for static interpolation evaluation.
//!
//! Two questions can be asked about a configuration string:
//!
//! 1. **Classification**: can it be evaluated statically? ([`is_evaluable`])
//! 2. **Evaluation**: what does it evaluate to? ([`eval`], [`Engine::eval`])
//!
//! Internal parse, analysis, build and evaluation errors are converted into
//! the public [`Error`] at this boundary.
//!
//! # Example
//!
//! ```
//! use tfeval_core::api::{Engine, EvaluatorOptions};
//! use tfeval_core::{Metadata, Value, VariableTable};
//!
//! let table = VariableTable::build_from_sources(&[], Metadata::default().with_workspace("dev"))
//!     .unwrap();
//! let engine = Engine::with_options(table, EvaluatorOptions { max_depth: 32 });
//!
//! assert!(engine.is_evaluable("${terraform.workspace}"));
//! assert_eq!(engine.eval("${terraform.workspace}").unwrap(), Value::from("dev"));
//! assert!(!engine.is_evaluable("${aws_instance.web.id}"));
//! ```

pub mod engine;
pub mod error;
pub mod options;


pub use engine::{Engine, eval, is_evaluable};
pub use error::{Diagnostic, Error, Severity};
pub use options::EvaluatorOptions;
