//! Static evaluation of `${...}` interpolations in infrastructure configuration.
//!
//! The crate answers two questions about a configuration string without
//! provisioning anything:
//!
//! - can it be evaluated statically? ([`is_evaluable`])
//! - if so, what does it evaluate to? ([`eval`], [`Engine::eval`])
//!
//! Variables are resolved against a [`VariableTable`] built from the
//! `variable` blocks of parsed configuration files plus the
//! environment/workspace [`Metadata`].
//!
//! ```
//! use tfeval_core::{Engine, Metadata, Value, VariableTable};
//!
//! let table = VariableTable::build_from_sources(
//!     &[("main.tf", r#"variable "name" { default = "prod" }"#)],
//!     Metadata::default(),
//! )
//! .unwrap();
//! let engine = Engine::new(table);
//!
//! let value = engine
//!     .eval(r#"${var.name == "prod" ? "production" : "development"}"#)
//!     .unwrap();
//! assert_eq!(value, Value::from("production"));
//! ```

pub mod analyzer;
pub mod api;
pub mod config;
pub mod evaluator;
pub mod parser;
pub mod syntax;
pub mod values;
pub mod variables;

pub use api::{Diagnostic, Engine, Error, EvaluatorOptions, Severity, eval, is_evaluable};
pub use parser::Span;
pub use values::Value;
pub use variables::{Metadata, VariableTable};
