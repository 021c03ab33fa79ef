use crate::transformer::TransformerConfig;
use futures::Stream;
use std::cmp::Ordering;
use std::pin::Pin;
use std::sync::Arc;

/// A boxed, pinned source stream of `T`.
///
/// Sources are single-pass: once pulled by the merge they must not be
/// consumed anywhere else.
pub type SortedSource<T> = Pin<Box<dyn Stream<Item = T> + Send>>;

/// A transformer that merges sorted source streams into one sorted stream.
///
/// The input is a stream of sources, so the set of sources need not be known
/// in advance. Each source must, taken alone, yield elements in
/// non-decreasing order under the supplied comparator; this precondition is
/// not checked, and violating it produces a deterministic but otherwise
/// unspecified output order.
///
/// The merge keeps a min-heap with the current head element of every
/// still-active source, so auxiliary memory is bounded by the number of
/// sources and each source is read at most one element ahead. A consumer
/// that requests `m` elements and then stops causes at most `m + n` source
/// pulls for `n` sources, and no pulls at all after it stops.
///
/// When heads from two different sources compare equal, the order in which
/// they are emitted relative to each other is unspecified (it depends on
/// `BinaryHeap` internals). Elements from the same source always stay in
/// source order.
///
/// A comparator that panics poisons the merge: the panic propagates to the
/// consumer and the transformer's output stream must be discarded.
///
/// # Example
///
/// ```ignore
/// let merge = MergeSortedTransformer::new(|a: &u64, b: &u64| a.cmp(b));
/// ```
pub struct MergeSortedTransformer<T, F>
where
  T: Send + 'static,
  F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
{
  /// Configuration for the transformer.
  pub config: TransformerConfig<SortedSource<T>>,
  /// Comparator defining the merge order, shared with the heap entries.
  pub comparator: Arc<F>,
}

impl<T, F> Clone for MergeSortedTransformer<T, F>
where
  T: Send + 'static,
  F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
{
  fn clone(&self) -> Self {
    Self {
      config: self.config.clone(),
      comparator: self.comparator.clone(),
    }
  }
}

impl<T, F> MergeSortedTransformer<T, F>
where
  T: Send + 'static,
  F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
{
  /// Creates a new `MergeSortedTransformer` ordering outputs by `comparator`.
  #[must_use]
  pub fn new(comparator: F) -> Self {
    Self {
      config: TransformerConfig::default(),
      comparator: Arc::new(comparator),
    }
  }

  /// Sets the error strategy for the transformer.
  #[must_use]
  pub fn with_error_strategy(
    mut self,
    strategy: crate::error::ErrorStrategy<SortedSource<T>>,
  ) -> Self {
    self.config.error_strategy = strategy;
    self
  }

  /// Sets the name for the transformer.
  #[must_use]
  pub fn with_name(mut self, name: String) -> Self {
    self.config.name = Some(name);
    self
  }
}
