//! Output trait for components that produce output streams.
//!
//! The [`Output`] trait is the downstream connection point of a pipeline
//! component: it binds the item type a component produces to the concrete
//! stream type that delivers those items to the consumer. Transformers
//! implement it together with [`crate::Input`].
//!
//! Output streams are pinned, boxed async streams. The consumer pulls them
//! on demand; a consumer that stops polling the output stream (or drops it)
//! is the rejection signal that halts the producing component.

// Import for rustdoc link
#[allow(unused_imports)]
use crate::input::Input;

use futures::Stream;

/// Trait for components that produce an output stream.
///
/// `Output::Output` is the item type pushed downstream; `OutputStream` is
/// the stream type that yields those items.
pub trait Output
where
  Self::Output: Send + 'static,
{
  /// The type of items produced on the output stream.
  type Output;
  /// The output stream type that yields items of type `Self::Output`.
  type OutputStream: Stream<Item = Self::Output> + Send + 'static;
}
