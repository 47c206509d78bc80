use crate::analyzer::{
    AnalyzeError, AnalyzeErrorKind, CheckedPart, CheckedTemplate, Condition, IndexKey,
    InterpolationExpr, UnsupportedReason,
};
use crate::parser::{self, ComparisonOp, Expr, Literal, ParsedExpr, Template, TemplatePart};
use crate::values::Value;
use crate::variables::MetaSlot;
use std::collections::BTreeMap;
use tracing::trace;

/// Lower every segment of `template`, failing on the first one outside the
/// evaluable subset.
pub fn analyze(template: &Template, max_depth: usize) -> Result<CheckedTemplate, AnalyzeError> {
    let parts = template
        .parts
        .iter()
        .map(|part| match part {
            TemplatePart::Text(text) => Ok(CheckedPart::Text(text.clone())),
            TemplatePart::Interpolation(segment) => {
                let expr = Lowerer::new(max_depth).lower(segment)?;
                Ok(CheckedPart::Segment {
                    expr,
                    span: segment.span.clone(),
                })
            }
        })
        .collect::<Result<_, _>>()?;
    Ok(CheckedTemplate { parts })
}

/// Parse and lower a raw string.
///
/// Syntax errors are reported as unsupported syntax, except for excessive
/// nesting which keeps its own kind.
pub fn analyze_source(raw: &str, max_depth: usize) -> Result<CheckedTemplate, AnalyzeError> {
    let template = parser::parse_with_max_depth(raw, max_depth).map_err(|err| {
        let kind = match err.kind {
            parser::ParseErrorKind::MaxDepthExceeded { depth, max_depth } => {
                AnalyzeErrorKind::DepthExceeded { depth, max_depth }
            }
            kind => AnalyzeErrorKind::Unsupported(UnsupportedReason::Syntax {
                message: kind.to_string(),
            }),
        };
        AnalyzeError {
            kind,
            span: err.span,
        }
    })?;
    analyze(&template, max_depth)
}

/// Whether every segment of `raw` can be evaluated statically.
///
/// All or nothing: a single unsupported construct anywhere makes the whole
/// string non-evaluable. Never fails.
pub fn is_evaluable(raw: &str, max_depth: usize) -> bool {
    match analyze_source(raw, max_depth) {
        Ok(_) => true,
        Err(err) => {
            trace!(raw, at = err.span.str_of(raw), reason = %err, "Not evaluable");
            false
        }
    }
}

struct Lowerer {
    max_depth: usize,
    depth: usize,
}

impl Lowerer {
    fn new(max_depth: usize) -> Self {
        Self {
            max_depth,
            depth: 0,
        }
    }

    fn lower(&mut self, expr: &ParsedExpr) -> Result<InterpolationExpr, AnalyzeError> {
        if self.depth >= self.max_depth {
            return Err(AnalyzeError {
                kind: AnalyzeErrorKind::DepthExceeded {
                    depth: self.depth + 1,
                    max_depth: self.max_depth,
                },
                span: expr.span.clone(),
            });
        }

        self.depth += 1;
        let result = self.lower_inner(expr);
        self.depth -= 1;

        result
    }

    fn lower_inner(&mut self, expr: &ParsedExpr) -> Result<InterpolationExpr, AnalyzeError> {
        let unsupported = |reason| Err(AnalyzeError::unsupported(reason, expr.span.clone()));

        match &expr.expr {
            Expr::Literal(literal) => Ok(InterpolationExpr::Literal(literal_value(literal))),

            Expr::Path(segments) => lower_path(segments, expr),

            Expr::Index { value, index } => {
                let base = self.lower(value)?;
                let key = index_key(index)?;
                Ok(InterpolationExpr::Index {
                    base: Box::new(base),
                    key,
                    span: expr.span.clone(),
                })
            }

            Expr::Conditional {
                cond,
                then_branch,
                else_branch,
            } => {
                let cond = match &cond.expr {
                    Expr::Comparison {
                        op: ComparisonOp::Eq,
                        left,
                        right,
                    } => Condition::Equals(Box::new(self.lower(left)?), Box::new(self.lower(right)?)),
                    Expr::Comparison { op, .. } => {
                        return Err(AnalyzeError::unsupported(
                            UnsupportedReason::Comparison { op: op.as_str() },
                            cond.span.clone(),
                        ));
                    }
                    _ => {
                        return Err(AnalyzeError::unsupported(
                            UnsupportedReason::Condition,
                            cond.span.clone(),
                        ));
                    }
                };
                Ok(InterpolationExpr::Conditional {
                    cond,
                    then_branch: Box::new(self.lower(then_branch)?),
                    else_branch: Box::new(self.lower(else_branch)?),
                })
            }

            Expr::List(items) => {
                let values = items
                    .iter()
                    .map(|item| self.lower_literal(item))
                    .collect::<Result<_, _>>()?;
                Ok(InterpolationExpr::Literal(Value::List(values)))
            }

            Expr::Map(entries) => {
                let mut map = BTreeMap::new();
                for (key, value) in entries {
                    map.insert(key.clone(), self.lower_literal(value)?);
                }
                Ok(InterpolationExpr::Literal(Value::Map(map)))
            }

            Expr::Call { name, .. } => unsupported(UnsupportedReason::FunctionCall { name: name.clone() }),
            Expr::Unary { op, .. } => unsupported(UnsupportedReason::Operator { op: op.as_str() }),
            Expr::Binary { op, .. } => unsupported(UnsupportedReason::Operator { op: op.as_str() }),
            Expr::Comparison { op, .. } => unsupported(UnsupportedReason::Operator { op: op.as_str() }),
        }
    }

    /// Collection elements must themselves lower to literal values.
    fn lower_literal(&mut self, expr: &ParsedExpr) -> Result<Value, AnalyzeError> {
        match self.lower(expr)? {
            InterpolationExpr::Literal(value) => Ok(value),
            _ => Err(AnalyzeError::unsupported(
                UnsupportedReason::CollectionElement,
                expr.span.clone(),
            )),
        }
    }
}

fn literal_value(literal: &Literal) -> Value {
    match literal {
        Literal::Number(n) => Value::Num(*n),
        Literal::Str(s) => Value::Str(s.clone()),
        Literal::Bool(b) => Value::Str(b.to_string()),
    }
}

fn lower_path(segments: &[String], expr: &ParsedExpr) -> Result<InterpolationExpr, AnalyzeError> {
    let path = segments.join(".");
    let reason = match segments {
        [root, name] if root == "var" => return Ok(InterpolationExpr::VarRef(name.clone())),
        [root, name] if root == "terraform" => {
            return match MetaSlot::from_name(name) {
                Some(slot) => Ok(InterpolationExpr::MetaRef(slot)),
                None => Err(AnalyzeError::unsupported(
                    UnsupportedReason::UnknownMetadata { name: name.clone() },
                    expr.span.clone(),
                )),
            };
        }
        [root, ..] if root == "module" => UnsupportedReason::ModuleOutput { path },
        [root, ..] if root == "count" || root == "each" => UnsupportedReason::LoopIndex { path },
        [root, ..] if root == "local" => UnsupportedReason::LocalValue { path },
        [root, _, ..] if root == "var" || root == "terraform" || root == "path" || root == "self" => {
            UnsupportedReason::UnknownReference { path }
        }
        [_, _, ..] => UnsupportedReason::ResourceAttribute { path },
        _ => UnsupportedReason::UnknownReference { path },
    };
    Err(AnalyzeError::unsupported(reason, expr.span.clone()))
}

fn index_key(index: &ParsedExpr) -> Result<IndexKey, AnalyzeError> {
    match &index.expr {
        Expr::Literal(Literal::Number(n)) if n.fract() == 0.0 && *n >= 0.0 => {
            Ok(IndexKey::Int(*n as usize))
        }
        Expr::Literal(Literal::Str(s)) => Ok(IndexKey::Str(s.clone())),
        _ => Err(AnalyzeError::unsupported(
            UnsupportedReason::IndexKey,
            index.span.clone(),
        )),
    }
}
