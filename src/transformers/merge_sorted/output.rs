use super::merge_sorted_transformer::MergeSortedTransformer;
use crate::output::Output;
use futures::Stream;
use std::cmp::Ordering;
use std::pin::Pin;

impl<T, F> Output for MergeSortedTransformer<T, F>
where
  T: Send + 'static,
  F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
{
  type Output = T;
  type OutputStream = Pin<Box<dyn Stream<Item = T> + Send>>;
}
