use crate::parser::{Rule, Span};
use thiserror::Error;

/// Parser error with the location of the problem in the raw string.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
}

/// Specific kinds of parse errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseErrorKind {
    /// Unexpected token
    #[error("expected {expected}, found {found}")]
    UnexpectedToken { expected: String, found: String },
    /// Unclosed delimiter
    #[error("unclosed delimiter '{delimiter}'")]
    UnclosedDelimiter { delimiter: char },
    /// Closing delimiter that does not match the innermost open one
    #[error("mismatched closing delimiter '{found}'")]
    MismatchedDelimiter { found: char },
    /// Invalid number literal
    #[error("invalid number literal '{text}'")]
    InvalidNumber { text: String },
    /// Invalid escape in a string literal
    #[error("{message}")]
    InvalidEscape { message: String },
    /// Maximum nesting depth exceeded
    #[error("expression nesting depth {depth} exceeds maximum of {max_depth}")]
    MaxDepthExceeded { depth: usize, max_depth: usize },
    /// Other parse errors (catch-all for Pest errors we don't specifically handle)
    #[error("{message}")]
    Other { message: String },
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, span: Span) -> Self {
        Self { kind, span }
    }

    pub fn is_depth_exceeded(&self) -> bool {
        matches!(self.kind, ParseErrorKind::MaxDepthExceeded { .. })
    }
}

/// Convert Pest error to human-readable ParseError
///
/// `offset` is the position of the parsed segment inside the raw string.
pub fn convert_pest_error(err: pest::error::Error<Rule>, offset: usize) -> ParseError {
    use pest::error::ErrorVariant;

    let span = match err.location {
        pest::error::InputLocation::Pos(pos) => Span(pos..pos),
        pest::error::InputLocation::Span((start, end)) => Span(start..end),
    }
    .offset(offset);

    let kind = match err.variant {
        ErrorVariant::ParsingError {
            positives,
            negatives,
        } => {
            // Convert technical Pest messages to human-readable ones
            let expected = format_expected_rules(&positives);
            let found = format_found_rules(&negatives);

            ParseErrorKind::UnexpectedToken { expected, found }
        }
        ErrorVariant::CustomError { message } => ParseErrorKind::Other { message },
    };

    ParseError::new(kind, span)
}

/// Format expected rules in a human-readable way
fn format_expected_rules(rules: &[Rule]) -> String {
    // Group related rules into higher-level concepts
    let mut concepts: Vec<&str> = Vec::new();

    for rule in rules {
        let concept = match rule {
            Rule::number | Rule::boolean | Rule::string => "literal",
            Rule::ident | Rule::attr | Rule::path => "reference",
            Rule::cond_op
            | Rule::or
            | Rule::and
            | Rule::eq
            | Rule::neq
            | Rule::le
            | Rule::ge
            | Rule::lt
            | Rule::gt
            | Rule::add
            | Rule::sub
            | Rule::mul
            | Rule::div
            | Rule::rem
            | Rule::index_op => "operator",
            Rule::EOI => "end of expression",
            _ => "expression",
        };
        if !concepts.contains(&concept) {
            concepts.push(concept);
        }
    }

    match concepts.split_last() {
        None => "something else".to_string(),
        Some((last, [])) => last.to_string(),
        Some((last, rest)) => format!("{} or {}", rest.join(", "), last),
    }
}

/// Format found rules in a human-readable way
fn format_found_rules(rules: &[Rule]) -> String {
    match rules.first() {
        None => "unexpected token".to_string(),
        Some(Rule::ident) => "identifier".to_string(),
        Some(Rule::number) => "number".to_string(),
        Some(Rule::boolean) => "boolean".to_string(),
        Some(Rule::string) => "string".to_string(),
        Some(Rule::EOI) => "end of expression".to_string(),
        Some(rule) => format!("{:?}", rule),
    }
}
