//! Run grouping transformer.
//!
//! Splits one sorted stream into maximal runs of mutually equal elements,
//! pulling exactly one element beyond each finished run.

/// The group-runs transformer implementation.
pub mod group_runs_transformer;
/// Input types for the group-runs transformer.
pub mod input;
/// Output types for the group-runs transformer.
pub mod output;
/// Transformer trait implementation for group-runs.
pub mod transformer;

pub use group_runs_transformer::*;
