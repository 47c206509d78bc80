/// String literal escaping and unescaping.
///
/// Converts between runtime strings (with an actual newline character) and
/// their quoted source form (with a backslash-n sequence). The same escapes
/// are accepted in configuration files and inside `${...}` segments.
use std::borrow::Cow;
use thiserror::Error;

/// Errors that can occur when unescaping string literals.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnescapeError {
    /// Invalid escape sequence (e.g., `\q`)
    #[error("invalid escape sequence '{seq}' at position {pos}")]
    InvalidEscape { pos: usize, seq: String },
    /// Incomplete or non-hex Unicode escape
    #[error("invalid unicode escape '{seq}' at position {pos}")]
    InvalidUnicodeEscape { pos: usize, seq: String },
    /// Invalid Unicode scalar value
    #[error("invalid unicode scalar value U+{value:04X} at position {pos}")]
    InvalidUnicodeScalar { pos: usize, value: u32 },
    /// Backslash at the very end of the literal
    #[error("unterminated escape sequence at position {pos}")]
    TrailingBackslash { pos: usize },
}

/// Escape special characters for a double-quoted literal.
///
/// - `"` → `\"`
/// - `\` → `\\`
/// - newline, carriage return, tab → `\n`, `\r`, `\t`
pub fn escape_string(s: &str) -> Cow<'_, str> {
    if !s.contains(['"', '\\', '\n', '\r', '\t']) {
        return Cow::Borrowed(s);
    }

    let mut escaped = String::with_capacity(s.len() + 2);
    for c in s.chars() {
        match c {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            c => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

/// Unescape the contents of a double-quoted literal (without the quotes).
///
/// Supported escapes: `\n`, `\r`, `\t`, `\\`, `\"` and `\uNNNN`.
pub fn unescape_string(input: &str) -> Result<Cow<'_, str>, UnescapeError> {
    // Fast path: nothing to process
    if !input.contains('\\') {
        return Ok(Cow::Borrowed(input));
    }

    let mut output = String::with_capacity(input.len());
    let mut chars = input.char_indices();

    while let Some((pos, ch)) = chars.next() {
        if ch != '\\' {
            output.push(ch);
            continue;
        }

        match chars.next() {
            Some((_, 'n')) => output.push('\n'),
            Some((_, 'r')) => output.push('\r'),
            Some((_, 't')) => output.push('\t'),
            Some((_, '\\')) => output.push('\\'),
            Some((_, '"')) => output.push('"'),
            Some((_, 'u')) => {
                let digits: String = chars.by_ref().take(4).map(|(_, c)| c).collect();
                if digits.len() != 4 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
                    return Err(UnescapeError::InvalidUnicodeEscape {
                        pos,
                        seq: format!("\\u{}", digits),
                    });
                }
                let value = u32::from_str_radix(&digits, 16).map_err(|_| {
                    UnescapeError::InvalidUnicodeEscape {
                        pos,
                        seq: format!("\\u{}", digits),
                    }
                })?;
                let c = char::from_u32(value)
                    .ok_or(UnescapeError::InvalidUnicodeScalar { pos, value })?;
                output.push(c);
            }
            Some((_, other)) => {
                return Err(UnescapeError::InvalidEscape {
                    pos,
                    seq: format!("\\{}", other),
                });
            }
            None => return Err(UnescapeError::TrailingBackslash { pos }),
        }
    }

    Ok(Cow::Owned(output))
}
