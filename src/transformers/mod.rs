//! Built-in stream transformers.
//!
//! Each transformer lives in its own module with the same file split:
//! the transformer struct and builders, its `Input`/`Output` impls, and the
//! `Transformer` impl with its tests.

/// Flattens a stream of vectors into a stream of elements.
pub mod flatten;
/// Groups adjacent equal elements of a sorted stream into runs.
pub mod group_runs;
/// Merges sorted source streams into one sorted stream.
pub mod merge_sorted;

pub use flatten::FlattenTransformer;
pub use group_runs::GroupRunsTransformer;
pub use merge_sorted::{MergeSortedTransformer, SortedSource};
