pub mod error;
mod parsed_expr;
pub mod parser;
mod syntax;
mod template;

// Re-export the parser and rule enum for external use
pub use parser::ExpressionParser;
pub use parser::Rule;
pub use parser::{DEFAULT_MAX_DEPTH, parse, parse_expression, parse_with_max_depth};

pub use error::{ParseError, ParseErrorKind};
pub use parsed_expr::{Expr, Literal, ParsedExpr, Template, TemplatePart};
pub use syntax::{BinaryOp, ComparisonOp, Span, UnaryOp};


#[cfg(test)]
mod rule_valid_test;
