pub mod decode;
mod value;

pub use decode::{UnsupportedLiteral, decode};
pub use value::Value;

#[cfg(test)]
mod display_test;
