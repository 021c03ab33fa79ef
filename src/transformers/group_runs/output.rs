use super::group_runs_transformer::GroupRunsTransformer;
use crate::output::Output;
use futures::Stream;
use std::cmp::Ordering;
use std::pin::Pin;

impl<T, F> Output for GroupRunsTransformer<T, F>
where
  T: Send + 'static,
  F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
{
  type Output = Vec<T>;
  type OutputStream = Pin<Box<dyn Stream<Item = Vec<T>> + Send>>;
}
