//! The variable table: declared defaults plus environment metadata.

mod error;
mod metadata;
mod table;

#[cfg(test)]
mod table_test;

pub use error::BuildError;
pub use metadata::{MetaSlot, Metadata};
pub use table::VariableTable;
