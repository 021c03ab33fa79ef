use super::merge_sorted_transformer::{MergeSortedTransformer, SortedSource};
use crate::input::Input;
use futures::Stream;
use std::cmp::Ordering;
use std::pin::Pin;

impl<T, F> Input for MergeSortedTransformer<T, F>
where
  T: Send + 'static,
  F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
{
  type Input = SortedSource<T>;
  type InputStream = Pin<Box<dyn Stream<Item = SortedSource<T>> + Send>>;
}
