use crate::parser::{BinaryOp, ComparisonOp, Span, UnaryOp};

/// One parsed `${...}` expression with its location in the raw string.
///
/// Equality ignores spans, so trees parsed from differently formatted sources
/// compare equal.
#[derive(Debug, Clone)]
pub struct ParsedExpr {
    pub expr: Expr,
    pub span: Span,
}

impl PartialEq for ParsedExpr {
    fn eq(&self, other: &Self) -> bool {
        self.expr == other.expr
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(Literal),
    /// Dotted reference such as `var.name` or `aws_subnet.app.id`.
    Path(Vec<String>),
    Call {
        name: String,
        args: Vec<ParsedExpr>,
    },
    Index {
        value: Box<ParsedExpr>,
        index: Box<ParsedExpr>,
    },
    Unary {
        op: UnaryOp,
        expr: Box<ParsedExpr>,
    },
    Binary {
        op: BinaryOp,
        left: Box<ParsedExpr>,
        right: Box<ParsedExpr>,
    },
    Comparison {
        op: ComparisonOp,
        left: Box<ParsedExpr>,
        right: Box<ParsedExpr>,
    },
    Conditional {
        cond: Box<ParsedExpr>,
        then_branch: Box<ParsedExpr>,
        else_branch: Box<ParsedExpr>,
    },
    List(Vec<ParsedExpr>),
    Map(Vec<(String, ParsedExpr)>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Number(f64),
    Str(String),
    Bool(bool),
}

impl ParsedExpr {
    pub fn new(expr: Expr, span: Span) -> Self {
        Self { expr, span }
    }
}

/// A raw string split into literal text and parsed `${...}` segments.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Template {
    pub parts: Vec<TemplatePart>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TemplatePart {
    Text(String),
    Interpolation(ParsedExpr),
}

impl Template {
    /// True when the string contains no `${...}` segment at all.
    pub fn is_plain(&self) -> bool {
        self.segments().next().is_none()
    }

    pub fn segments(&self) -> impl Iterator<Item = &ParsedExpr> {
        self.parts.iter().filter_map(|part| match part {
            TemplatePart::Interpolation(expr) => Some(expr),
            TemplatePart::Text(_) => None,
        })
    }
}
