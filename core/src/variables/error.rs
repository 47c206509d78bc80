use crate::parser::Span;
use thiserror::Error;

/// A configuration file the table cannot be built from.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("malformed declaration in {file}: {message}")]
pub struct BuildError {
    /// File identifier the problem was found in.
    pub file: String,
    pub message: String,
    /// Location in the file's source text, when the file was read from text.
    pub span: Option<Span>,
}

impl BuildError {
    pub fn new(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            message: message.into(),
            span: None,
        }
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }
}
