//! # sortstream
//!
//! Lazy sorted-stream operators for composable async pipelines.
//!
//! The crate provides two core transformers plus a small helper:
//!
//! - [`transformers::merge_sorted::MergeSortedTransformer`] merges any number
//!   of individually sorted streams into one globally sorted stream, using a
//!   bounded min-heap of per-source head elements.
//! - [`transformers::group_runs::GroupRunsTransformer`] splits one sorted
//!   stream into maximal runs of mutually equal elements.
//! - [`transformers::flatten::FlattenTransformer`] turns the runs back into
//!   elements, so `flatten(group(s)) == s` for any sorted `s`.
//!
//! All transformers are pull-driven: work happens only when the consumer
//! polls the output stream, and a consumer that stops polling (for example
//! via `StreamExt::take`, or by dropping the stream) stops all source pulls
//! immediately. The merge transformer pulls at most one lookahead element
//! per source; the grouping transformer pulls exactly one element beyond
//! each finished run.
//!
//! ## Example
//!
//! ```rust
//! use futures::{StreamExt, stream};
//! use std::pin::Pin;
//! use futures::Stream;
//! use sortstream::Transformer;
//! use sortstream::transformers::merge_sorted::MergeSortedTransformer;
//!
//! futures::executor::block_on(async {
//!   let sources: Vec<Pin<Box<dyn Stream<Item = i32> + Send>>> = vec![
//!     Box::pin(stream::iter(vec![1, 4, 7])),
//!     Box::pin(stream::iter(vec![2, 5, 8])),
//!   ];
//!   let mut merge = MergeSortedTransformer::new(|a: &i32, b: &i32| a.cmp(b));
//!   let merged: Vec<i32> = merge
//!     .transform(Box::pin(stream::iter(sources)))
//!     .await
//!     .collect()
//!     .await;
//!   assert_eq!(merged, vec![1, 2, 4, 5, 7, 8]);
//! });
//! ```

// Documentation enforcement - treat missing docs as errors
#![deny(missing_docs)]

/// Error handling types shared by all stream components.
pub mod error;
/// Input trait for components that consume streams.
pub mod input;
/// Output trait for components that produce streams.
pub mod output;
/// Transformer trait and per-transformer configuration.
pub mod transformer;
/// Built-in stream transformers.
pub mod transformers;

pub use error::{ComponentInfo, ErrorAction, ErrorContext, ErrorStrategy, StreamError};
pub use input::Input;
pub use output::Output;
pub use transformer::{Transformer, TransformerConfig};
