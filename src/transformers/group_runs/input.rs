use super::group_runs_transformer::GroupRunsTransformer;
use crate::input::Input;
use futures::Stream;
use std::cmp::Ordering;
use std::pin::Pin;

impl<T, F> Input for GroupRunsTransformer<T, F>
where
  T: Send + 'static,
  F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
{
  type Input = T;
  type InputStream = Pin<Box<dyn Stream<Item = T> + Send>>;
}
