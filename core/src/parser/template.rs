//! Splitting a raw string into literal text and `${...}` segments.
//!
//! A segment ends at the first `}` that is not matched by an opening brace
//! inside it. Quoted strings are skipped, so braces inside string, map and
//! index literals never end a segment early. `$${` is an escaped `${` and
//! stays literal text.
//!
//! The scan also bounds how deeply the parsed segment can nest and rejects
//! it before the recursive parser ever sees it. The bound is the number of
//! open delimiters plus every operator seen so far in the segment: prefix,
//! infix, conditional and postfix index operators each add at most one level
//! to the tree, and a long left-associative chain like `a+a+a` or
//! `x[0][0][0]` nests as deeply as it is long.

use crate::parser::{ParseError, ParseErrorKind, Span};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum RawPart<'a> {
    Text(String),
    Segment {
        /// The expression between `${` and `}`.
        inner: &'a str,
        /// Position of `inner` in the raw string.
        inner_start: usize,
        /// The whole `${...}`, delimiters included.
        span: Span,
    },
}

pub(crate) fn split(source: &str, max_depth: usize) -> Result<Vec<RawPart<'_>>, ParseError> {
    let mut parts = Vec::new();
    let mut text = String::new();
    let mut pos = 0;

    while pos < source.len() {
        let rest = &source[pos..];
        if rest.starts_with("$${") {
            text.push_str("${");
            pos += 3;
        } else if rest.starts_with("${") {
            if !text.is_empty() {
                parts.push(RawPart::Text(std::mem::take(&mut text)));
            }
            let inner_start = pos + 2;
            let end = find_segment_end(source, pos, max_depth)?;
            parts.push(RawPart::Segment {
                inner: &source[inner_start..end],
                inner_start,
                span: Span::new(pos, end + 1),
            });
            pos = end + 1;
        } else {
            let Some(ch) = rest.chars().next() else {
                break;
            };
            text.push(ch);
            pos += ch.len_utf8();
        }
    }

    if !text.is_empty() {
        parts.push(RawPart::Text(text));
    }
    Ok(parts)
}

/// Position of the `}` closing the segment that opens at `start`.
fn find_segment_end(source: &str, start: usize, max_depth: usize) -> Result<usize, ParseError> {
    let inner_start = start + 2;
    let mut open: Vec<(char, usize)> = Vec::new();
    let mut in_string = false;
    let mut escaped = false;
    let mut operators = 0;
    // Last significant character outside strings.
    let mut prev = '{';

    for (offset, ch) in source[inner_start..].char_indices() {
        let pos = inner_start + offset;

        if in_string {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
                prev = ch;
            }
            continue;
        }

        match ch {
            '"' => in_string = true,
            '[' if ends_operand(prev) => {
                operators += 1;
                open.push((ch, pos));
            }
            '(' | '[' | '{' => open.push((ch, pos)),
            ')' | ']' | '}' => match open.pop() {
                None if ch == '}' => return Ok(pos),
                Some((opener, _)) if closing_for(opener) == ch => {}
                _ => {
                    return Err(ParseError::new(
                        ParseErrorKind::MismatchedDelimiter { found: ch },
                        Span::new(pos, pos + 1),
                    ));
                }
            },
            '?' | '!' | '-' | '+' | '*' | '/' | '%' | '<' | '>' | '&' | '|' => operators += 1,
            // `==`; a lone `=` separates a map key from its value.
            '=' if prev == '=' => operators += 1,
            _ => {}
        }

        if !ch.is_whitespace() {
            prev = ch;
        }

        let depth = open.len() + operators;
        if depth > max_depth {
            return Err(ParseError::new(
                ParseErrorKind::MaxDepthExceeded { depth, max_depth },
                Span::new(pos, pos + ch.len_utf8()),
            ));
        }
    }

    let (delimiter, at) = open.last().copied().unwrap_or(('{', start));
    Err(ParseError::new(
        ParseErrorKind::UnclosedDelimiter { delimiter },
        Span::new(at, source.len()),
    ))
}

// A `[` following one of these indexes the operand before it instead of
// opening a list literal.
fn ends_operand(ch: char) -> bool {
    ch.is_alphanumeric() || matches!(ch, '_' | ')' | ']' | '}' | '"')
}

fn closing_for(opener: char) -> char {
    match opener {
        '(' => ')',
        '[' => ']',
        _ => '}',
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn segments(source: &str) -> Vec<&str> {
        split(source, 100)
            .unwrap()
            .into_iter()
            .filter_map(|part| match part {
                RawPart::Segment { inner, .. } => Some(inner),
                RawPart::Text(_) => None,
            })
            .collect()
    }

    #[test]
    fn test_plain_text() {
        assert_eq!(
            split("text", 100).unwrap(),
            vec![RawPart::Text("text".to_string())]
        );
        assert_eq!(split("", 100).unwrap(), vec![]);
    }

    #[test]
    fn test_segment_spans() {
        let parts = split("Hello ${var.world}!", 100).unwrap();
        assert_eq!(
            parts,
            vec![
                RawPart::Text("Hello ".to_string()),
                RawPart::Segment {
                    inner: "var.world",
                    inner_start: 8,
                    span: Span(6..18),
                },
                RawPart::Text("!".to_string()),
            ]
        );
    }

    #[test]
    fn test_escaped_dollar_is_text() {
        assert_eq!(
            split("$${var.x} costs $5", 100).unwrap(),
            vec![RawPart::Text("${var.x} costs $5".to_string())]
        );
    }

    #[test]
    fn test_braces_inside_literals() {
        assert_eq!(segments(r#"${var.m["}"]}"#), vec![r#"var.m["}"]"#]);
        assert_eq!(segments(r#"${{a = "}"}}x"#), vec![r#"{a = "}"}"#]);
        assert_eq!(segments(r#"${"a\"}"}"#), vec![r#""a\"}""#]);
    }

    #[test]
    fn test_multiple_segments() {
        assert_eq!(
            segments("${var.a}-${var.b}"),
            vec!["var.a", "var.b"]
        );
    }

    #[test]
    fn test_unclosed_segment() {
        let err = split("x ${var.a", 100).unwrap_err();
        assert_eq!(
            err.kind,
            ParseErrorKind::UnclosedDelimiter { delimiter: '{' }
        );
        assert_eq!(err.span, Span(2..9));

        let err = split("${f(var.a}", 100).unwrap_err();
        assert_eq!(
            err.kind,
            ParseErrorKind::MismatchedDelimiter { found: '}' }
        );
    }

    #[test]
    fn test_mismatched_delimiter() {
        let err = split("${var.a]}", 100).unwrap_err();
        assert_eq!(
            err.kind,
            ParseErrorKind::MismatchedDelimiter { found: ']' }
        );
        assert_eq!(err.span, Span(7..8));
    }

    #[test]
    fn test_depth_limit() {
        let nested = format!("${{{}1{}}}", "(".repeat(10), ")".repeat(10));
        assert!(split(&nested, 10).is_ok());

        let err = split(&nested, 9).unwrap_err();
        assert_eq!(
            err.kind,
            ParseErrorKind::MaxDepthExceeded {
                depth: 10,
                max_depth: 9
            }
        );
    }

    #[test]
    fn test_depth_counts_operators() {
        assert!(split("${a ? b : c ? d : e}", 2).is_ok());
        assert!(split("${a ? b : c ? d : e}", 1).is_err());
        assert!(split("${!!!!x}", 4).is_ok());
        assert!(split("${!!!!x}", 3).is_err());
        assert!(split("${a == b}", 1).is_ok());
        assert!(split("${a + b - c}", 1).is_err());
    }

    #[test]
    fn test_depth_counts_index_chains() {
        let chained = format!("${{var.l{}}}", "[0]".repeat(10));
        assert!(split(&chained, 11).is_ok());

        let err = split(&chained, 10).unwrap_err();
        assert_eq!(
            err.kind,
            ParseErrorKind::MaxDepthExceeded {
                depth: 11,
                max_depth: 10
            }
        );
    }

    #[test]
    fn test_long_chains_are_rejected_before_parsing() {
        let indexes = format!("${{var.a{}}}", "[0]".repeat(20_000));
        assert!(split(&indexes, 100).unwrap_err().is_depth_exceeded());

        let sums = format!("${{{}a}}", "a+".repeat(200_000));
        assert!(split(&sums, 100).unwrap_err().is_depth_exceeded());
    }

    #[test]
    fn test_list_and_map_literals_are_not_chains() {
        let list = format!("${{[{}]}}", "\"x\", ".repeat(500));
        assert!(split(&list, 10).is_ok());

        let map = format!("${{{{{}}}}}", "k = \"v\", ".repeat(500));
        assert!(split(&map, 10).is_ok());
    }
}
