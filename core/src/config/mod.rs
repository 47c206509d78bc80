//! Parsed configuration files.
//!
//! [`File`] is the syntax tree the variable table is built from. Full
//! configuration parsing belongs to the host tool; [`read`] understands just
//! enough of the language to load variable declarations and variable value
//! files: blocks, attributes, literal values and comments.

mod ast;
mod reader;

pub use ast::{Attribute, Block, Body, File, Item, Literal, ModuleSchema};
pub use reader::{ConfigParser, ReadError, Rule, read};
