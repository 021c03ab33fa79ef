use crate::error::{ComponentInfo, ErrorAction, ErrorContext, ErrorStrategy, StreamError};
use crate::transformer::{Transformer, TransformerConfig};
use crate::transformers::merge_sorted::merge_sorted_transformer::{
  MergeSortedTransformer, SortedSource,
};
use async_trait::async_trait;
use futures::StreamExt;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::sync::Arc;
use tracing::trace;

/// The head element of one still-active source, plus the handle to keep
/// pulling that source.
///
/// Each source has at most one entry in the heap at a time, so relative
/// order of equal elements within a source is preserved.
struct HeapEntry<T, F> {
  value: T,
  source: SortedSource<T>,
  cmp: Arc<F>,
}

impl<T, F> PartialEq for HeapEntry<T, F>
where
  F: Fn(&T, &T) -> Ordering,
{
  fn eq(&self, other: &Self) -> bool {
    (*self.cmp)(&self.value, &other.value) == Ordering::Equal
  }
}

impl<T, F> Eq for HeapEntry<T, F> where F: Fn(&T, &T) -> Ordering {}

impl<T, F> PartialOrd for HeapEntry<T, F>
where
  F: Fn(&T, &T) -> Ordering,
{
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

impl<T, F> Ord for HeapEntry<T, F>
where
  F: Fn(&T, &T) -> Ordering,
{
  fn cmp(&self, other: &Self) -> Ordering {
    // BinaryHeap pops the maximum; compare reversed so it pops the minimum.
    (*self.cmp)(&other.value, &self.value)
  }
}

#[async_trait]
impl<T, F> Transformer for MergeSortedTransformer<T, F>
where
  T: Send + 'static,
  F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
{
  async fn transform(&mut self, input: Self::InputStream) -> Self::OutputStream {
    let comparator = self.comparator.clone();
    Box::pin(async_stream::stream! {
      let mut input = input;
      let mut heap: BinaryHeap<HeapEntry<T, F>> = BinaryHeap::new();

      // One head element per source; already-exhausted sources are
      // discarded silently.
      while let Some(source) = input.next().await {
        let mut source = source;
        if let Some(value) = source.next().await {
          heap.push(HeapEntry { value, source, cmp: comparator.clone() });
        }
      }

      // Pop the minimum, refill from the same source, then emit. Pulling
      // the replacement before yielding keeps every source exactly one
      // element ahead, and suspension at `yield` means a consumer that
      // stops polling causes no further pulls.
      while let Some(entry) = heap.pop() {
        let HeapEntry { value, mut source, cmp } = entry;
        match source.next().await {
          Some(next) => heap.push(HeapEntry { value: next, source, cmp }),
          None => trace!(active_sources = heap.len(), "merge source exhausted"),
        }
        yield value;
      }
    })
  }

  fn set_config_impl(&mut self, config: TransformerConfig<SortedSource<T>>) {
    self.config = config;
  }

  fn get_config_impl(&self) -> &TransformerConfig<SortedSource<T>> {
    &self.config
  }

  fn get_config_mut_impl(&mut self) -> &mut TransformerConfig<SortedSource<T>> {
    &mut self.config
  }

  fn handle_error(&self, error: &StreamError<SortedSource<T>>) -> ErrorAction {
    match self.config.error_strategy() {
      ErrorStrategy::Stop => ErrorAction::Stop,
      ErrorStrategy::Skip => ErrorAction::Skip,
      ErrorStrategy::Retry(n) if error.retries < n => ErrorAction::Retry,
      ErrorStrategy::Custom(ref handler) => handler(error),
      _ => ErrorAction::Stop,
    }
  }

  fn create_error_context(&self, item: Option<SortedSource<T>>) -> ErrorContext<SortedSource<T>> {
    ErrorContext {
      timestamp: chrono::Utc::now(),
      item,
      component_name: self
        .config
        .name()
        .clone()
        .unwrap_or_else(|| "merge_sorted_transformer".to_string()),
      component_type: std::any::type_name::<Self>().to_string(),
    }
  }

  fn component_info(&self) -> ComponentInfo {
    ComponentInfo {
      name: self
        .config
        .name()
        .clone()
        .unwrap_or_else(|| "merge_sorted_transformer".to_string()),
      type_name: std::any::type_name::<Self>().to_string(),
    }
  }
}
