use crate::parser::Span;
use crate::values::Value;
use crate::variables::MetaSlot;

/// One `${...}` segment restricted to what can be evaluated statically.
#[derive(Debug, Clone, PartialEq)]
pub enum InterpolationExpr {
    Literal(Value),
    /// `var.<name>`
    VarRef(String),
    /// `terraform.env`, `terraform.workspace`
    MetaRef(MetaSlot),
    Index {
        base: Box<InterpolationExpr>,
        key: IndexKey,
        /// Location of the whole index expression, for out-of-range errors.
        span: Span,
    },
    Conditional {
        cond: Condition,
        then_branch: Box<InterpolationExpr>,
        else_branch: Box<InterpolationExpr>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum IndexKey {
    Int(usize),
    Str(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    Equals(Box<InterpolationExpr>, Box<InterpolationExpr>),
}

/// A raw string whose every segment lowered successfully.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CheckedTemplate {
    pub parts: Vec<CheckedPart>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CheckedPart {
    Text(String),
    Segment { expr: InterpolationExpr, span: Span },
}

impl CheckedTemplate {
    /// The single segment, when the raw string is nothing but that segment.
    pub fn sole_segment(&self) -> Option<&InterpolationExpr> {
        match self.parts.as_slice() {
            [CheckedPart::Segment { expr, .. }] => Some(expr),
            _ => None,
        }
    }
}
