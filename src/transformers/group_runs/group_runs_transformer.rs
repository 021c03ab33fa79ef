use crate::error::ErrorStrategy;
use crate::transformer::TransformerConfig;
use std::cmp::Ordering;
use std::sync::Arc;

/// A transformer that groups adjacent equal elements of a sorted stream.
///
/// The input must be sorted under the supplied comparator, so that all
/// mutually equal elements are contiguous. Each output item is one maximal
/// run: a `Vec<T>` whose elements all compare equal to its first element,
/// in input order. Concatenating the runs reproduces the input exactly.
///
/// The transformer buffers only the currently open run. To decide that a
/// run is complete it pulls exactly one element beyond the run's last
/// member; that element seeds the next run and is never re-pulled. A
/// consumer that stops polling the output stream stops all input pulls, and
/// the open buffer is not flushed.
///
/// Empty input produces no runs. Input of all-equal elements produces a
/// single run containing every element.
pub struct GroupRunsTransformer<T, F>
where
  T: Send + 'static,
  F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
{
  /// Configuration for the transformer.
  pub config: TransformerConfig<T>,
  /// Comparator deciding which adjacent elements belong to the same run.
  pub comparator: Arc<F>,
}

impl<T, F> Clone for GroupRunsTransformer<T, F>
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

impl<T, F> GroupRunsTransformer<T, F>
where
  T: Send + 'static,
  F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
{
  /// Creates a new `GroupRunsTransformer` grouping by `comparator` equality.
  #[must_use]
  pub fn new(comparator: F) -> Self {
    Self {
      config: TransformerConfig::default(),
      comparator: Arc::new(comparator),
    }
  }

  /// Sets the error strategy for the transformer.
  #[must_use]
  pub fn with_error_strategy(mut self, strategy: ErrorStrategy<T>) -> Self {
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
