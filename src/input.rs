//! Input trait for components that consume input streams.
//!
//! The [`Input`] trait is the upstream connection point of a pipeline
//! component: it binds the item type a component accepts to the concrete
//! stream type that delivers those items. Transformers implement it together
//! with [`crate::Output`] so that pipelines can be assembled type-safely.
//!
//! Input streams are pinned, boxed async streams (`Pin<Box<dyn Stream +
//! Send>>`), which keeps component types object-friendly while allowing any
//! upstream source. Items only need to be `Send`; in particular they may
//! themselves be streams, as in the ordered-merge transformer whose input is
//! a stream of sorted streams.

use futures::Stream;
// Import for rustdoc link
#[allow(unused_imports)]
use crate::output::Output;

/// Trait for components that consume an input stream.
///
/// `Input::Input` is the item type pulled from upstream; `InputStream` is
/// the stream type that yields those items. Pulling from the input stream is
/// the only way a component observes upstream progress.
pub trait Input
where
  Self::Input: Send + 'static,
{
  /// The type of items consumed from the input stream.
  type Input;
  /// The input stream type that yields items of type `Self::Input`.
  type InputStream: Stream<Item = Self::Input> + Send + 'static;
}
