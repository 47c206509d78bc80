//! The evaluation engine.

use super::{Error, EvaluatorOptions};
use crate::config::{File, ModuleSchema};
use crate::values::Value;
use crate::variables::{Metadata, VariableTable};
use crate::{analyzer, evaluator};
use std::collections::BTreeMap;
use tracing::trace;

/// Evaluates configuration strings against one variable table.
///
/// The engine owns the table and the options; it holds no other state, so
/// every call is independent and repeated calls with the same string return
/// the same result.
///
/// # Example
///
/// ```
/// use tfeval_core::{Engine, Error, Metadata, Value, VariableTable};
///
/// let table = VariableTable::build_from_sources(
///     &[("main.tf", r#"variable "names" { default = ["a", "b"] }"#)],
///     Metadata::default(),
/// )
/// .unwrap();
/// let engine = Engine::new(table);
///
/// assert_eq!(engine.eval("${var.names[0]}").unwrap(), Value::from("a"));
/// assert!(matches!(engine.eval("${var.names[5]}"), Err(Error::Index { .. })));
/// assert!(matches!(
///     engine.eval("${module.vpc.id}"),
///     Err(Error::UnsupportedSyntax { .. })
/// ));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Engine {
    table: VariableTable,
    options: EvaluatorOptions,
}

impl Engine {
    /// Create an engine with default options.
    pub fn new(table: VariableTable) -> Self {
        Self::with_options(table, EvaluatorOptions::default())
    }

    pub fn with_options(table: VariableTable, options: EvaluatorOptions) -> Self {
        Self { table, options }
    }

    /// Build the variable table from parsed files and wrap it in an engine.
    pub fn from_files(
        files: &BTreeMap<String, File>,
        schemas: &[ModuleSchema],
        overrides: &[File],
        metadata: Metadata,
    ) -> Result<Self, Error> {
        let table = VariableTable::build(files, schemas, overrides, metadata)?;
        Ok(Self::new(table))
    }

    pub fn table(&self) -> &VariableTable {
        &self.table
    }

    pub fn options(&self) -> &EvaluatorOptions {
        &self.options
    }

    /// Whether `raw` can be evaluated statically. Never fails.
    pub fn is_evaluable(&self, raw: &str) -> bool {
        analyzer::is_evaluable(raw, self.options.max_depth)
    }

    /// Evaluate `raw`.
    ///
    /// A string that is exactly one `${...}` segment evaluates to the
    /// segment's value with its native type; any other string evaluates to a
    /// `Value::Str`. Data that cannot be found evaluates to `Value::Absent`.
    pub fn eval(&self, raw: &str) -> Result<Value, Error> {
        eval_with_options(raw, &self.table, &self.options)
    }
}

/// Whether `raw` can be evaluated statically, with default options.
pub fn is_evaluable(raw: &str) -> bool {
    analyzer::is_evaluable(raw, EvaluatorOptions::default().max_depth)
}

/// Evaluate `raw` against `table` with default options.
pub fn eval(raw: &str, table: &VariableTable) -> Result<Value, Error> {
    eval_with_options(raw, table, &EvaluatorOptions::default())
}

fn eval_with_options(
    raw: &str,
    table: &VariableTable,
    options: &EvaluatorOptions,
) -> Result<Value, Error> {
    let checked = analyzer::analyze_source(raw, options.max_depth)
        .map_err(|err| Error::from_analyze(err, raw))?;
    let value = evaluator::eval_with_limits(&checked, table, options.max_depth)
        .map_err(|err| Error::from_eval(err, raw))?;
    trace!(raw, kind = value.kind(), "Evaluated");
    Ok(value)
}
