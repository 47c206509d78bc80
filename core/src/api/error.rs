//! Public error types.
//!
//! Internal errors are converted to these public types at API boundaries.
//! Each evaluation error keeps the raw string it was raised for so that it
//! can be rendered on its own.

use crate::analyzer::{AnalyzeError, AnalyzeErrorKind};
use crate::evaluator::EvalError;
use crate::parser::Span;
use crate::variables::BuildError;
use std::fmt;
use thiserror::Error;

/// Public error type for all operations.
///
/// Absence of data is not an error: it evaluates to `Value::Absent`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The string contains a construct outside the evaluable subset.
    #[error("unsupported interpolation syntax: {reason}")]
    UnsupportedSyntax {
        src: String,
        span: Span,
        reason: String,
    },

    /// A list was indexed past its end.
    #[error("index {index} out of range for list of length {len}")]
    Index {
        src: String,
        span: Span,
        index: usize,
        len: usize,
    },

    /// A segment nests deeper than the configured maximum.
    #[error("nesting depth exceeds maximum of {max_depth}")]
    DepthExceeded {
        src: String,
        span: Span,
        max_depth: usize,
    },

    /// A configuration file could not be turned into a variable table.
    #[error("malformed declaration in {file}: {message}")]
    MalformedDeclaration {
        file: String,
        message: String,
        span: Option<Span>,
    },
}

impl Error {
    pub(crate) fn from_analyze(err: AnalyzeError, src: &str) -> Self {
        match err.kind {
            AnalyzeErrorKind::Unsupported(reason) => Error::UnsupportedSyntax {
                src: src.to_string(),
                span: err.span,
                reason: reason.to_string(),
            },
            AnalyzeErrorKind::DepthExceeded { max_depth, .. } => Error::DepthExceeded {
                src: src.to_string(),
                span: err.span,
                max_depth,
            },
        }
    }

    pub(crate) fn from_eval(err: EvalError, src: &str) -> Self {
        match err {
            EvalError::IndexOutOfBounds { index, len, span } => Error::Index {
                src: src.to_string(),
                span,
                index,
                len,
            },
            EvalError::DepthExceeded {
                max_depth, span, ..
            } => Error::DepthExceeded {
                src: src.to_string(),
                span,
                max_depth,
            },
        }
    }

    /// The raw string an evaluation error was raised for.
    pub fn src(&self) -> Option<&str> {
        match self {
            Error::UnsupportedSyntax { src, .. }
            | Error::Index { src, .. }
            | Error::DepthExceeded { src, .. } => Some(src),
            Error::MalformedDeclaration { .. } => None,
        }
    }

    pub fn span(&self) -> Option<&Span> {
        match self {
            Error::UnsupportedSyntax { span, .. }
            | Error::Index { span, .. }
            | Error::DepthExceeded { span, .. } => Some(span),
            Error::MalformedDeclaration { span, .. } => span.as_ref(),
        }
    }

    /// Stable code for documentation lookup.
    pub fn code(&self) -> &'static str {
        match self {
            Error::UnsupportedSyntax { .. } => "E001",
            Error::Index { .. } => "E002",
            Error::DepthExceeded { .. } => "E003",
            Error::MalformedDeclaration { .. } => "E004",
        }
    }

    /// Convert to a Diagnostic for reporting.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let help = match self {
            Error::UnsupportedSyntax { .. } => Some(
                "only var.<name>, terraform.env, terraform.workspace, literals, \
                 indexing and == conditionals can be evaluated statically"
                    .to_string(),
            ),
            Error::Index { len, .. } => Some(format!("valid indexes are 0 to {}", len.saturating_sub(1))),
            Error::DepthExceeded { .. } => {
                Some("reduce nesting or raise EvaluatorOptions::max_depth".to_string())
            }
            Error::MalformedDeclaration { .. } => None,
        };

        Diagnostic {
            severity: Severity::Error,
            message: self.to_string(),
            span: self.span().cloned(),
            help,
            code: Some(self.code().to_string()),
        }
    }
}

impl From<BuildError> for Error {
    fn from(err: BuildError) -> Self {
        Error::MalformedDeclaration {
            file: err.file,
            message: err.message,
            span: err.span,
        }
    }
}

/// A diagnostic message with source location.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    /// Severity level (error, warning, info).
    pub severity: Severity,

    /// Primary diagnostic message.
    pub message: String,

    /// Location of the primary issue, when known.
    pub span: Option<Span>,

    /// Optional help text suggesting how to fix the issue.
    pub help: Option<String>,

    /// Optional error code (e.g., "E001") for documentation lookup.
    pub code: Option<String>,
}

/// Severity level for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}
