use crate::parser::error::convert_pest_error;
use crate::parser::template::{self, RawPart};
use crate::parser::{
    BinaryOp, ComparisonOp, Expr, Literal, ParseError, ParseErrorKind, ParsedExpr, Span,
    Template, TemplatePart, UnaryOp,
};
use crate::syntax::unescape_string;
use lazy_static::lazy_static;
use pest::Parser;
use pest::iterators::{Pair, Pairs};
use pest::pratt_parser::{Assoc, Op, PrattParser};
use pest_derive::Parser;

/// Nesting depth accepted by [`parse`].
pub const DEFAULT_MAX_DEPTH: usize = 100;

lazy_static! {
    // Note: precedence is defined lowest to highest.
    static ref PRATT_PARSER: PrattParser<Rule> = PrattParser::new()
        // (lowest precedence)
        .op(Op::infix(Rule::cond_op, Assoc::Right))      // `? :`

        // Logical operators.
        .op(Op::infix(Rule::or, Assoc::Left))            // `||`
        .op(Op::infix(Rule::and, Assoc::Left))           // `&&`

        // Comparison operators.
        .op(
            Op::infix(Rule::eq, Assoc::Left) |
            Op::infix(Rule::neq, Assoc::Left)
        )                                               // `==`, `!=`
        .op(
            Op::infix(Rule::lt, Assoc::Left) |
            Op::infix(Rule::gt, Assoc::Left) |
            Op::infix(Rule::le, Assoc::Left) |
            Op::infix(Rule::ge, Assoc::Left)
        )                                               // `<`, `>`, `<=`, `>=`

        // Arithmetic operators.
        .op(
            Op::infix(Rule::add, Assoc::Left) |
            Op::infix(Rule::sub, Assoc::Left)
        )                                               // `+`, `-`
        .op(
            Op::infix(Rule::mul, Assoc::Left) |
            Op::infix(Rule::div, Assoc::Left) |
            Op::infix(Rule::rem, Assoc::Left)
        )                                               // `*`, `/`, `%`
        .op(Op::prefix(Rule::neg) | Op::prefix(Rule::not)) // `-`, `!`

        // Postfix operators.
        .op(Op::postfix(Rule::index_op))                 // `[]`
        // (highest precedence)
        ;
}

#[derive(Parser)]
#[grammar = "parser/interpolation.pest"]
pub struct ExpressionParser;

/// Parse a raw string into text and `${...}` segments.
pub fn parse(source: &str) -> Result<Template, ParseError> {
    parse_with_max_depth(source, DEFAULT_MAX_DEPTH)
}

/// Like [`parse`], rejecting segments nested deeper than `max_depth`.
pub fn parse_with_max_depth(source: &str, max_depth: usize) -> Result<Template, ParseError> {
    let parts = template::split(source, max_depth)?
        .into_iter()
        .map(|part| match part {
            RawPart::Text(text) => Ok(TemplatePart::Text(text)),
            RawPart::Segment {
                inner,
                inner_start,
                span,
            } => {
                let mut expr = parse_expression(inner, inner_start)?;
                expr.span = span;
                Ok(TemplatePart::Interpolation(expr))
            }
        })
        .collect::<Result<_, ParseError>>()?;
    Ok(Template { parts })
}

/// Parse the contents of a single segment.
///
/// `offset` is where `source` starts in the raw string; every span in the
/// result is shifted by it.
pub fn parse_expression(source: &str, offset: usize) -> Result<ParsedExpr, ParseError> {
    let mut pairs = ExpressionParser::parse(Rule::main, source)
        .map_err(|err| convert_pest_error(err, offset))?;
    let main = next_pair(&mut pairs, Span(0..source.len()).offset(offset))?;
    build_expr(main, offset)
}

fn next_pair<'i>(pairs: &mut Pairs<'i, Rule>, span: Span) -> Result<Pair<'i, Rule>, ParseError> {
    pairs.next().ok_or_else(|| {
        ParseError::new(
            ParseErrorKind::Other {
                message: "missing expected pair in rule".to_string(),
            },
            span,
        )
    })
}

fn span_of(pair: &Pair<Rule>, offset: usize) -> Span {
    Span::from(pair.as_span()).offset(offset)
}

fn build_expr(pair: Pair<Rule>, offset: usize) -> Result<ParsedExpr, ParseError> {
    let span = span_of(&pair, offset);
    match pair.as_rule() {
        Rule::main | Rule::grouped => {
            let mut inner = pair.into_inner();
            let expr = build_expr(next_pair(&mut inner, span.clone())?, offset)?;
            Ok(ParsedExpr::new(expr.expr, span))
        }

        Rule::expression => PRATT_PARSER
            .map_primary(|primary| build_expr(primary, offset))
            .map_prefix(|op, rhs| {
                let rhs = rhs?;
                let op_span = span_of(&op, offset);
                let op = match op.as_rule() {
                    Rule::neg => UnaryOp::Neg,
                    Rule::not => UnaryOp::Not,
                    rule => return Err(unhandled(rule, op_span)),
                };
                let span = Span::combine(&op_span, &rhs.span);
                Ok(ParsedExpr::new(
                    Expr::Unary {
                        op,
                        expr: Box::new(rhs),
                    },
                    span,
                ))
            })
            .map_infix(|lhs, op, rhs| {
                let (lhs, rhs) = (lhs?, rhs?);
                let span = Span::combine(&lhs.span, &rhs.span);
                let left = Box::new(lhs);
                let right = Box::new(rhs);
                let expr = match op.as_rule() {
                    Rule::cond_op => {
                        let op_span = span_of(&op, offset);
                        let mut inner = op.into_inner();
                        let then_branch = build_expr(next_pair(&mut inner, op_span)?, offset)?;
                        Expr::Conditional {
                            cond: left,
                            then_branch: Box::new(then_branch),
                            else_branch: right,
                        }
                    }
                    Rule::or => binary(BinaryOp::Or, left, right),
                    Rule::and => binary(BinaryOp::And, left, right),
                    Rule::add => binary(BinaryOp::Add, left, right),
                    Rule::sub => binary(BinaryOp::Sub, left, right),
                    Rule::mul => binary(BinaryOp::Mul, left, right),
                    Rule::div => binary(BinaryOp::Div, left, right),
                    Rule::rem => binary(BinaryOp::Rem, left, right),
                    Rule::eq => comparison(ComparisonOp::Eq, left, right),
                    Rule::neq => comparison(ComparisonOp::Neq, left, right),
                    Rule::lt => comparison(ComparisonOp::Lt, left, right),
                    Rule::gt => comparison(ComparisonOp::Gt, left, right),
                    Rule::le => comparison(ComparisonOp::Le, left, right),
                    Rule::ge => comparison(ComparisonOp::Ge, left, right),
                    rule => return Err(unhandled(rule, span_of(&op, offset))),
                };
                Ok(ParsedExpr::new(expr, span))
            })
            .map_postfix(|lhs, op| {
                let lhs = lhs?;
                let op_span = span_of(&op, offset);
                match op.as_rule() {
                    Rule::index_op => {
                        let span = Span::combine(&lhs.span, &op_span);
                        let mut inner = op.into_inner();
                        let index = build_expr(next_pair(&mut inner, op_span)?, offset)?;
                        Ok(ParsedExpr::new(
                            Expr::Index {
                                value: Box::new(lhs),
                                index: Box::new(index),
                            },
                            span,
                        ))
                    }
                    rule => Err(unhandled(rule, op_span)),
                }
            })
            .parse(pair.into_inner()),

        Rule::path => {
            let segments = pair.into_inner().map(|p| p.as_str().to_string()).collect();
            Ok(ParsedExpr::new(Expr::Path(segments), span))
        }

        Rule::call => {
            let mut inner = pair.into_inner();
            let name = next_pair(&mut inner, span.clone())?.as_str().to_string();
            let args = inner
                .map(|arg| build_expr(arg, offset))
                .collect::<Result<_, _>>()?;
            Ok(ParsedExpr::new(Expr::Call { name, args }, span))
        }

        Rule::list => {
            let items = pair
                .into_inner()
                .map(|item| build_expr(item, offset))
                .collect::<Result<_, _>>()?;
            Ok(ParsedExpr::new(Expr::List(items), span))
        }

        Rule::map => {
            let entries = pair
                .into_inner()
                .map(|entry| build_map_entry(entry, offset))
                .collect::<Result<_, _>>()?;
            Ok(ParsedExpr::new(Expr::Map(entries), span))
        }

        Rule::number => {
            let value = parse_number(pair.as_str()).ok_or_else(|| {
                ParseError::new(
                    ParseErrorKind::InvalidNumber {
                        text: pair.as_str().to_string(),
                    },
                    span.clone(),
                )
            })?;
            Ok(ParsedExpr::new(Expr::Literal(Literal::Number(value)), span))
        }

        Rule::boolean => {
            let value = pair.as_str() == "true";
            Ok(ParsedExpr::new(Expr::Literal(Literal::Bool(value)), span))
        }

        Rule::string => {
            let value = build_string(pair, offset)?;
            Ok(ParsedExpr::new(Expr::Literal(Literal::Str(value)), span))
        }

        rule => Err(unhandled(rule, span)),
    }
}

fn build_map_entry(pair: Pair<Rule>, offset: usize) -> Result<(String, ParsedExpr), ParseError> {
    let span = span_of(&pair, offset);
    let mut inner = pair.into_inner();
    let key = next_pair(&mut inner, span.clone())?;
    let key = match key.as_rule() {
        Rule::string => build_string(key, offset)?,
        _ => key.as_str().to_string(),
    };
    let value = build_expr(next_pair(&mut inner, span)?, offset)?;
    Ok((key, value))
}

fn build_string(pair: Pair<Rule>, offset: usize) -> Result<String, ParseError> {
    let span = span_of(&pair, offset);
    let inner = pair.into_inner().next().map_or("", |p| p.as_str());
    unescape_string(inner)
        .map(|s| s.into_owned())
        .map_err(|err| {
            ParseError::new(
                ParseErrorKind::InvalidEscape {
                    message: err.to_string(),
                },
                span,
            )
        })
}

fn parse_number(text: &str) -> Option<f64> {
    match text.strip_prefix("0x") {
        Some(hex) => i64::from_str_radix(hex, 16).ok().map(|n| n as f64),
        None => text.parse().ok(),
    }
}

fn binary(op: BinaryOp, left: Box<ParsedExpr>, right: Box<ParsedExpr>) -> Expr {
    Expr::Binary { op, left, right }
}

fn comparison(op: ComparisonOp, left: Box<ParsedExpr>, right: Box<ParsedExpr>) -> Expr {
    Expr::Comparison { op, left, right }
}

fn unhandled(rule: Rule, span: Span) -> ParseError {
    ParseError::new(
        ParseErrorKind::Other {
            message: format!("Unhandled rule: {:?}", rule),
        },
        span,
    )
}
