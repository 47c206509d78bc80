//! tfeval - static evaluation of configuration interpolations
//!
//! # Overview
//!
//! Infrastructure configuration files embed `${...}` interpolations inside
//! string literals. tfeval works out, without provisioning anything, which of
//! those strings can be evaluated statically and what they evaluate to, so
//! that lint rules can inspect concrete values.
//!
//! The evaluable subset is deliberately small:
//!
//! - variable references `var.<name>`, optionally indexed with literal keys
//! - `terraform.env` and `terraform.workspace`
//! - literal values
//! - `cond ? a : b` where `cond` is an `==` comparison
//!
//! Anything else (function calls, resource attributes, module outputs, loop
//! indexes, arithmetic) makes the string non-evaluable.
//!
//! # Quick Start
//!
//! ```
//! use tfeval::{Engine, Metadata, Value, VariableTable};
//!
//! let table = VariableTable::build_from_sources(
//!     &[("variables.tf", r#"
//!         variable "env" { default = "prod" }
//!         variable "zones" { default = ["a", "b"] }
//!     "#)],
//!     Metadata::default().with_workspace("staging"),
//! )
//! .unwrap();
//! let engine = Engine::new(table);
//!
//! assert!(engine.is_evaluable("${var.zones[0]}"));
//! assert_eq!(engine.eval("${var.zones[1]}").unwrap(), Value::from("b"));
//! assert_eq!(
//!     engine.eval(r#"${var.env == "prod" ? "production" : "development"}"#).unwrap(),
//!     Value::from("production")
//! );
//! assert_eq!(
//!     engine.eval("app-${terraform.workspace}").unwrap(),
//!     Value::from("app-staging")
//! );
//! assert!(!engine.is_evaluable("${aws_instance.web.id}"));
//! ```
//!
//! # Errors
//!
//! Missing data is not an error and evaluates to [`Value::Absent`]. Errors
//! can be rendered with source snippets:
//!
//! ```no_run
//! use tfeval::{Engine, VariableTable, render_error};
//!
//! let engine = Engine::new(VariableTable::default());
//! if let Err(err) = engine.eval("${module.vpc.id}") {
//!     render_error(&err);
//! }
//! ```

mod error_renderer;

// Re-export public API from tfeval_core
pub use tfeval_core::api::{Diagnostic, Engine, Error, EvaluatorOptions, Severity, eval, is_evaluable};

// Re-export commonly used types
pub use tfeval_core::config::{self, ModuleSchema};
pub use tfeval_core::values::{self, Value};
pub use tfeval_core::variables::{BuildError, MetaSlot, Metadata, VariableTable};
pub use tfeval_core::Span;

pub use error_renderer::{
    render_error, render_error_to, render_error_to_string, render_error_to_string_no_color,
};
