//! Core evaluation logic.

use crate::analyzer::{CheckedPart, CheckedTemplate, Condition, IndexKey, InterpolationExpr};
use crate::evaluator::EvalError;
use crate::parser::Span;
use crate::values::Value;
use crate::variables::VariableTable;
use std::fmt::Write;
use tracing::trace;

/// Evaluator for checked templates.
pub struct Evaluator<'a> {
    table: &'a VariableTable,
    max_depth: usize,
    depth: usize,
    /// Span of the segment being evaluated (used for error context).
    segment: Span,
}

impl<'a> Evaluator<'a> {
    pub fn new(table: &'a VariableTable, max_depth: usize) -> Self {
        Self {
            table,
            max_depth,
            depth: 0,
            segment: Span::default(),
        }
    }

    /// Evaluate a whole template.
    ///
    /// A template that is exactly one segment keeps the segment's native
    /// value. Anything else is stringified and concatenated, so the result is
    /// always a `Str`.
    pub fn eval(&mut self, template: &CheckedTemplate) -> Result<Value, EvalError> {
        if let [CheckedPart::Segment { expr, span }] = template.parts.as_slice() {
            return self.eval_segment(expr, span);
        }

        let mut out = String::new();
        for part in &template.parts {
            match part {
                CheckedPart::Text(text) => out.push_str(text),
                CheckedPart::Segment { expr, span } => {
                    let value = self.eval_segment(expr, span)?;
                    // Writing into a String cannot fail.
                    let _ = write!(out, "{}", value);
                }
            }
        }
        Ok(Value::Str(out))
    }

    fn eval_segment(&mut self, expr: &InterpolationExpr, span: &Span) -> Result<Value, EvalError> {
        self.segment = span.clone();
        let value = self.eval_expr(expr)?;
        trace!(span = ?span, kind = value.kind(), "Evaluated segment");
        Ok(value)
    }

    /// Evaluate an expression node.
    pub(crate) fn eval_expr(&mut self, expr: &InterpolationExpr) -> Result<Value, EvalError> {
        // Check depth before recursing
        if self.depth >= self.max_depth {
            return Err(EvalError::DepthExceeded {
                depth: self.depth + 1,
                max_depth: self.max_depth,
                span: self.segment.clone(),
            });
        }

        self.depth += 1;
        let result = self.eval_expr_inner(expr);
        self.depth -= 1;

        result
    }

    fn eval_expr_inner(&mut self, expr: &InterpolationExpr) -> Result<Value, EvalError> {
        match expr {
            InterpolationExpr::Literal(value) => Ok(value.clone()),

            InterpolationExpr::VarRef(name) => Ok(self.table.lookup(name)),

            InterpolationExpr::MetaRef(slot) => {
                trace!(slot = slot.name(), "Reading metadata");
                Ok(self.table.meta(*slot))
            }

            InterpolationExpr::Index { base, key, span } => {
                let base = self.eval_expr(base)?;
                index(base, key, span)
            }

            InterpolationExpr::Conditional {
                cond,
                then_branch,
                else_branch,
            } => {
                let Condition::Equals(left, right) = cond;
                let left = self.eval_expr(left)?.to_string();
                let right = self.eval_expr(right)?.to_string();
                if left == right {
                    self.eval_expr(then_branch)
                } else {
                    self.eval_expr(else_branch)
                }
            }
        }
    }
}

fn index(base: Value, key: &IndexKey, span: &Span) -> Result<Value, EvalError> {
    match (base, key) {
        (Value::List(mut items), IndexKey::Int(i)) => {
            if *i < items.len() {
                Ok(items.swap_remove(*i))
            } else {
                Err(EvalError::IndexOutOfBounds {
                    index: *i,
                    len: items.len(),
                    span: span.clone(),
                })
            }
        }
        (Value::Map(mut entries), IndexKey::Str(k)) => Ok(entries.remove(k).unwrap_or_default()),
        (Value::Map(mut entries), IndexKey::Int(i)) => {
            Ok(entries.remove(&i.to_string()).unwrap_or_default())
        }
        // Nothing to index into.
        _ => Ok(Value::Absent),
    }
}
