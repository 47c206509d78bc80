use crate::config::{Attribute, Block, Body, File, Item, Literal};
use crate::parser::Span;
use crate::syntax::unescape_string;
use pest::Parser;
use pest::iterators::{Pair, Pairs};
use pest_derive::Parser;
use thiserror::Error;

#[derive(Parser)]
#[grammar = "config/config.pest"]
pub struct ConfigParser;

/// A configuration file that could not be read.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message} (line {line}, column {column})")]
pub struct ReadError {
    pub message: String,
    pub span: Span,
    pub line: usize,
    pub column: usize,
}

impl ReadError {
    fn at(source: &str, span: Span, message: impl Into<String>) -> Self {
        let (line, column) = line_col(source, span.0.start);
        Self {
            message: message.into(),
            span,
            line,
            column,
        }
    }

    fn from_pest(err: pest::error::Error<Rule>) -> Self {
        let span = match err.location {
            pest::error::InputLocation::Pos(pos) => Span(pos..pos),
            pest::error::InputLocation::Span((start, end)) => Span(start..end),
        };
        let (line, column) = match err.line_col {
            pest::error::LineColLocation::Pos(pos) => pos,
            pest::error::LineColLocation::Span(start, _) => start,
        };
        Self {
            message: err.variant.message().into_owned(),
            span,
            line,
            column,
        }
    }
}

fn line_col(source: &str, pos: usize) -> (usize, usize) {
    let before = &source[..pos.min(source.len())];
    let line = before.matches('\n').count() + 1;
    let column = before.rfind('\n').map_or(before.len(), |nl| before.len() - nl - 1) + 1;
    (line, column)
}

/// Read one configuration file into its syntax tree.
pub fn read(source: &str) -> Result<File, ReadError> {
    let mut pairs = ConfigParser::parse(Rule::file, source).map_err(ReadError::from_pest)?;
    let file = next_pair(source, &mut pairs, Span(0..source.len()))?;
    let items = file
        .into_inner()
        .filter(|pair| pair.as_rule() != Rule::EOI)
        .map(|pair| read_item(source, pair))
        .collect::<Result<_, _>>()?;
    Ok(File::new(items))
}

fn next_pair<'i>(
    source: &str,
    pairs: &mut Pairs<'i, Rule>,
    span: Span,
) -> Result<Pair<'i, Rule>, ReadError> {
    pairs
        .next()
        .ok_or_else(|| ReadError::at(source, span, "missing expected element"))
}

fn read_item(source: &str, pair: Pair<Rule>) -> Result<Item, ReadError> {
    let span = Span::from(pair.as_span());
    match pair.as_rule() {
        Rule::attribute => {
            let mut inner = pair.into_inner();
            let key = read_key(source, next_pair(source, &mut inner, span.clone())?)?;
            let value = read_literal(source, next_pair(source, &mut inner, span)?)?;
            Ok(Item::Attribute(Attribute { key, value }))
        }
        Rule::block => {
            let mut inner = pair.into_inner();
            let ident = next_pair(source, &mut inner, span.clone())?.as_str().to_string();
            let mut labels = Vec::new();
            let mut items = Vec::new();
            for part in inner {
                match part.as_rule() {
                    Rule::body => {
                        items = part
                            .into_inner()
                            .map(|pair| read_item(source, pair))
                            .collect::<Result<_, _>>()?;
                    }
                    _ => labels.push(read_key(source, part)?),
                }
            }
            Ok(Item::Block(Block {
                ident,
                labels,
                body: Body { items },
            }))
        }
        rule => Err(ReadError::at(
            source,
            span,
            format!("unexpected {:?}", rule),
        )),
    }
}

fn read_key(source: &str, pair: Pair<Rule>) -> Result<String, ReadError> {
    match pair.as_rule() {
        Rule::string => read_string(source, pair),
        _ => Ok(pair.as_str().to_string()),
    }
}

fn read_string(source: &str, pair: Pair<Rule>) -> Result<String, ReadError> {
    let span = Span::from(pair.as_span());
    let inner = pair.into_inner().next().map_or("", |p| p.as_str());
    unescape_string(inner)
        .map(|s| s.into_owned())
        .map_err(|e| ReadError::at(source, span, e.to_string()))
}

fn read_literal(source: &str, pair: Pair<Rule>) -> Result<Literal, ReadError> {
    let span = Span::from(pair.as_span());
    match pair.as_rule() {
        Rule::string => read_string(source, pair).map(Literal::Str),
        Rule::number => read_number(pair.as_str())
            .map(Literal::Number)
            .ok_or_else(|| ReadError::at(source, span, "invalid number literal")),
        Rule::boolean => Ok(Literal::Bool(pair.as_str() == "true")),
        Rule::list => pair
            .into_inner()
            .map(|item| read_literal(source, item))
            .collect::<Result<_, _>>()
            .map(Literal::List),
        Rule::object => {
            let mut entries = Vec::new();
            for entry in pair.into_inner() {
                let entry_span = Span::from(entry.as_span());
                let mut inner = entry.into_inner();
                let key = read_key(source, next_pair(source, &mut inner, entry_span.clone())?)?;
                let value = read_literal(source, next_pair(source, &mut inner, entry_span)?)?;
                entries.push((key, value));
            }
            Ok(Literal::Object(entries))
        }
        rule => Err(ReadError::at(
            source,
            span,
            format!("unexpected {:?}", rule),
        )),
    }
}

fn read_number(text: &str) -> Option<f64> {
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    let magnitude = match digits.strip_prefix("0x") {
        Some(hex) => i64::from_str_radix(hex, 16).ok()? as f64,
        None => digits.parse::<f64>().ok()?,
    };
    Some(if negative { -magnitude } else { magnitude })
}
