//! Flatten transformer.
//!
//! Turns a stream of `Vec<T>` back into a stream of individual elements;
//! the inverse of run grouping.

/// The flatten transformer implementation.
pub mod flatten_transformer;
/// Input types for the flatten transformer.
pub mod input;
/// Output types for the flatten transformer.
pub mod output;
/// Transformer trait implementation for flatten.
pub mod transformer;

pub use flatten_transformer::*;
