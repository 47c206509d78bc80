//! Lowering parsed segments into the evaluable subset.
//!
//! The parser accepts the whole expression grammar. This module decides which
//! of it can be evaluated statically and rejects the rest with a reason.

pub mod error;
mod interpolation;
mod lower;


pub use error::{AnalyzeError, AnalyzeErrorKind, UnsupportedReason};
pub use interpolation::{CheckedPart, CheckedTemplate, Condition, IndexKey, InterpolationExpr};
pub use lower::{analyze, analyze_source, is_evaluable};
