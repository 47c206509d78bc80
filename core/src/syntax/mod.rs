//! Lexical helpers shared by the configuration reader and the interpolation
//! parser.

pub mod string_literal;

pub use string_literal::{UnescapeError, escape_string, unescape_string};
