//! Ordered merge transformer.
//!
//! Merges any number of individually sorted source streams into one globally
//! sorted output stream, pulling each source at most one element ahead of
//! what has been emitted.

/// Input types for the merge-sorted transformer.
pub mod input;
/// The merge-sorted transformer implementation.
pub mod merge_sorted_transformer;
/// Output types for the merge-sorted transformer.
pub mod output;
/// Transformer trait implementation for merge-sorted.
pub mod transformer;

pub use merge_sorted_transformer::*;
