use crate::parser::Span;
use thiserror::Error;

/// A segment that cannot be evaluated statically.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind}")]
pub struct AnalyzeError {
    pub kind: AnalyzeErrorKind,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalyzeErrorKind {
    #[error("{0}")]
    Unsupported(UnsupportedReason),
    #[error("expression nesting depth {depth} exceeds maximum of {max_depth}")]
    DepthExceeded { depth: usize, max_depth: usize },
}

/// Why a construct is outside the evaluable subset.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum UnsupportedReason {
    #[error("invalid interpolation syntax: {message}")]
    Syntax { message: String },
    #[error("module outputs cannot be evaluated statically: {path}")]
    ModuleOutput { path: String },
    #[error("resource attributes cannot be evaluated statically: {path}")]
    ResourceAttribute { path: String },
    #[error("loop indexes cannot be evaluated statically: {path}")]
    LoopIndex { path: String },
    #[error("local values cannot be evaluated statically: {path}")]
    LocalValue { path: String },
    #[error("unknown reference {path}")]
    UnknownReference { path: String },
    #[error("unknown metadata terraform.{name}")]
    UnknownMetadata { name: String },
    #[error("function calls are not supported: {name}(...)")]
    FunctionCall { name: String },
    #[error("operator '{op}' is not supported")]
    Operator { op: &'static str },
    #[error("only '==' can be used in a condition, found '{op}'")]
    Comparison { op: &'static str },
    #[error("condition must be an equality comparison")]
    Condition,
    #[error("index must be a non-negative integer or string literal")]
    IndexKey,
    #[error("list and map literals may only contain literal values")]
    CollectionElement,
}

impl AnalyzeError {
    pub fn unsupported(reason: UnsupportedReason, span: Span) -> Self {
        Self {
            kind: AnalyzeErrorKind::Unsupported(reason),
            span,
        }
    }

    pub fn is_depth_exceeded(&self) -> bool {
        matches!(self.kind, AnalyzeErrorKind::DepthExceeded { .. })
    }
}
