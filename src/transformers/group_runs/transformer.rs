use crate::error::{ComponentInfo, ErrorAction, ErrorContext, ErrorStrategy, StreamError};
use crate::transformer::{Transformer, TransformerConfig};
use crate::transformers::group_runs::group_runs_transformer::GroupRunsTransformer;
use async_trait::async_trait;
use futures::StreamExt;
use std::cmp::Ordering;
use tracing::trace;

#[async_trait]
impl<T, F> Transformer for GroupRunsTransformer<T, F>
where
  T: Send + 'static,
  F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
{
  async fn transform(&mut self, input: Self::InputStream) -> Self::OutputStream {
    let comparator = self.comparator.clone();
    Box::pin(async_stream::stream! {
      let mut input = input;
      let mut run: Vec<T> = Vec::new();

      // The first element of `run` is the representative the lookahead is
      // compared against. An unequal lookahead finishes the run and seeds
      // the next one, so it is never pulled twice. Suspension at `yield`
      // means a consumer that stops polling causes no further pulls and no
      // flush of the open run.
      while let Some(item) = input.next().await {
        if run.is_empty() || (*comparator)(&run[0], &item) == Ordering::Equal {
          run.push(item);
        } else {
          let finished = std::mem::replace(&mut run, vec![item]);
          trace!(run_len = finished.len(), "run complete");
          yield finished;
        }
      }

      if !run.is_empty() {
        yield run;
      }
    })
  }

  fn set_config_impl(&mut self, config: TransformerConfig<T>) {
    self.config = config;
  }

  fn get_config_impl(&self) -> &TransformerConfig<T> {
    &self.config
  }

  fn get_config_mut_impl(&mut self) -> &mut TransformerConfig<T> {
    &mut self.config
  }

  fn handle_error(&self, error: &StreamError<T>) -> ErrorAction {
    match self.config.error_strategy() {
      ErrorStrategy::Stop => ErrorAction::Stop,
      ErrorStrategy::Skip => ErrorAction::Skip,
      ErrorStrategy::Retry(n) if error.retries < n => ErrorAction::Retry,
      ErrorStrategy::Custom(ref handler) => handler(error),
      _ => ErrorAction::Stop,
    }
  }

  fn create_error_context(&self, item: Option<T>) -> ErrorContext<T> {
    ErrorContext {
      timestamp: chrono::Utc::now(),
      item,
      component_name: self
        .config
        .name()
        .clone()
        .unwrap_or_else(|| "group_runs_transformer".to_string()),
      component_type: std::any::type_name::<Self>().to_string(),
    }
  }

  fn component_info(&self) -> ComponentInfo {
    ComponentInfo {
      name: self
        .config
        .name()
        .clone()
        .unwrap_or_else(|| "group_runs_transformer".to_string()),
      type_name: std::any::type_name::<Self>().to_string(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use futures::stream;
  use proptest::prelude::*;
  use std::sync::Arc;
  use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};

  #[tokio::test]
  async fn test_group_runs_basic() {
    let mut transformer = GroupRunsTransformer::new(|a: &i32, b: &i32| a.cmp(b));
    let input = stream::iter(vec![1, 1, 2, 2, 3, 3, 3, 4, 4]);
    let boxed_input = Box::pin(input);

    let result: Vec<Vec<i32>> = transformer.transform(boxed_input).await.collect().await;

    assert_eq!(
      result,
      vec![vec![1, 1], vec![2, 2], vec![3, 3, 3], vec![4, 4]]
    );
  }

  #[tokio::test]
  async fn test_group_runs_stops_pulling() {
    let pulls = Arc::new(AtomicUsize::new(0));
    let pulls_clone = pulls.clone();
    let mut transformer = GroupRunsTransformer::new(|a: &i32, b: &i32| a.cmp(b));
    let input = stream::iter(vec![1, 1, 2, 2, 3, 3, 4, 4]).inspect(move |_| {
      pulls_clone.fetch_add(1, AtomicOrdering::SeqCst);
    });
    let boxed_input = Box::pin(input);

    let result: Vec<Vec<i32>> = transformer
      .transform(boxed_input)
      .await
      .take(2)
      .collect()
      .await;

    assert_eq!(result, vec![vec![1, 1], vec![2, 2]]);
    // 4 elements to fill the first two runs plus the single lookahead that
    // proves the second run ended.
    assert_eq!(pulls.load(AtomicOrdering::SeqCst), 5);
  }

  #[tokio::test]
  async fn test_group_runs_empty_input() {
    let mut transformer = GroupRunsTransformer::new(|a: &i32, b: &i32| a.cmp(b));
    let input = stream::iter(Vec::<i32>::new());
    let boxed_input = Box::pin(input);

    let result: Vec<Vec<i32>> = transformer.transform(boxed_input).await.collect().await;

    assert_eq!(result, Vec::<Vec<i32>>::new());
  }

  #[tokio::test]
  async fn test_group_runs_all_equal() {
    let mut transformer = GroupRunsTransformer::new(|a: &i32, b: &i32| a.cmp(b));
    let input = stream::iter(vec![7; 5]);
    let boxed_input = Box::pin(input);

    let result: Vec<Vec<i32>> = transformer.transform(boxed_input).await.collect().await;

    assert_eq!(result, vec![vec![7, 7, 7, 7, 7]]);
  }

  #[tokio::test]
  async fn test_group_runs_single_element() {
    let mut transformer = GroupRunsTransformer::new(|a: &i32, b: &i32| a.cmp(b));
    let input = stream::iter(vec![42]);
    let boxed_input = Box::pin(input);

    let result: Vec<Vec<i32>> = transformer.transform(boxed_input).await.collect().await;

    assert_eq!(result, vec![vec![42]]);
  }

  #[tokio::test]
  async fn test_group_runs_all_distinct() {
    let mut transformer = GroupRunsTransformer::new(|a: &i32, b: &i32| a.cmp(b));
    let input = stream::iter(vec![1, 2, 3]);
    let boxed_input = Box::pin(input);

    let result: Vec<Vec<i32>> = transformer.transform(boxed_input).await.collect().await;

    assert_eq!(result, vec![vec![1], vec![2], vec![3]]);
  }

  #[tokio::test]
  async fn test_group_runs_key_comparator() {
    // Group by the key component only; payloads within a run keep input
    // order.
    let mut transformer =
      GroupRunsTransformer::new(|a: &(i32, &str), b: &(i32, &str)| a.0.cmp(&b.0));
    let input = stream::iter(vec![(1, "a"), (1, "b"), (2, "c")]);
    let boxed_input = Box::pin(input);

    let result: Vec<Vec<(i32, &str)>> = transformer.transform(boxed_input).await.collect().await;

    assert_eq!(result, vec![vec![(1, "a"), (1, "b")], vec![(2, "c")]]);
  }

  #[tokio::test]
  async fn test_group_runs_unsorted_input_splits_at_change_points() {
    // Not an error: contiguity is all that matters, so a non-sorted input
    // still produces deterministic runs.
    let mut transformer = GroupRunsTransformer::new(|a: &i32, b: &i32| a.cmp(b));
    let input = stream::iter(vec![1, 1, 2, 1]);
    let boxed_input = Box::pin(input);

    let result: Vec<Vec<i32>> = transformer.transform(boxed_input).await.collect().await;

    assert_eq!(result, vec![vec![1, 1], vec![2], vec![1]]);
  }

  #[tokio::test]
  async fn test_group_runs_comparator_panic_propagates() {
    use futures::FutureExt;
    use std::panic::AssertUnwindSafe;

    // The sentinel is the lookahead for the second run, so the panic fires
    // after the first run was already yielded.
    let mut transformer = GroupRunsTransformer::new(|a: &i32, b: &i32| {
      if *a == 99 || *b == 99 {
        panic!("comparator failure");
      }
      a.cmp(b)
    });
    let boxed_input = Box::pin(stream::iter(vec![1, 2, 99]));

    let mut output = transformer.transform(boxed_input).await;
    assert_eq!(output.next().await, Some(vec![1]));

    let result = AssertUnwindSafe(output.next()).catch_unwind().await;
    assert!(result.is_err());
  }

  #[tokio::test]
  async fn test_error_handling_strategies() {
    let transformer = GroupRunsTransformer::new(|a: &i32, b: &i32| a.cmp(b))
      .with_error_strategy(ErrorStrategy::<i32>::Skip)
      .with_name("test_transformer".to_string());

    let config = transformer.get_config_impl();
    assert_eq!(config.error_strategy(), ErrorStrategy::<i32>::Skip);
    assert_eq!(config.name(), Some("test_transformer".to_string()));
  }

  #[test]
  fn test_group_runs_transformer_new() {
    let transformer = GroupRunsTransformer::new(|a: &i32, b: &i32| a.cmp(b));

    assert_eq!(transformer.config().name(), None);
    assert!(matches!(
      transformer.config().error_strategy(),
      ErrorStrategy::Stop
    ));
  }

  #[test]
  fn test_group_runs_transformer_with_name() {
    let transformer =
      GroupRunsTransformer::new(|a: &i32, b: &i32| a.cmp(b)).with_name("test_runs".to_string());

    assert_eq!(transformer.config().name(), Some("test_runs".to_string()));
  }

  #[test]
  fn test_group_runs_transformer_error_handling() {
    let transformer = GroupRunsTransformer::new(|a: &i32, b: &i32| a.cmp(b));

    let error = StreamError {
      source: Box::new(std::io::Error::other("test error")),
      context: ErrorContext {
        timestamp: chrono::Utc::now(),
        item: None,
        component_name: "test".to_string(),
        component_type: "GroupRunsTransformer".to_string(),
      },
      component: ComponentInfo {
        name: "test".to_string(),
        type_name: "GroupRunsTransformer".to_string(),
      },
      retries: 0,
    };

    assert!(matches!(
      transformer.handle_error(&error),
      ErrorAction::Stop
    ));

    let transformer = transformer.with_error_strategy(ErrorStrategy::Skip);
    assert!(matches!(
      transformer.handle_error(&error),
      ErrorAction::Skip
    ));

    let transformer = transformer.with_error_strategy(ErrorStrategy::Retry(3));
    assert!(matches!(
      transformer.handle_error(&error),
      ErrorAction::Retry
    ));
  }

  #[test]
  fn test_group_runs_transformer_error_context_creation() {
    let transformer =
      GroupRunsTransformer::new(|a: &i32, b: &i32| a.cmp(b)).with_name("test_runs".to_string());

    let context = transformer.create_error_context(Some(42));
    assert_eq!(context.component_name, "test_runs");
    assert_eq!(context.item, Some(42));
  }

  #[test]
  fn test_group_runs_transformer_default_name() {
    let transformer = GroupRunsTransformer::new(|a: &i32, b: &i32| a.cmp(b));

    let info = transformer.component_info();
    assert_eq!(info.name, "group_runs_transformer");
  }

  proptest! {
    #[test]
    fn test_group_runs_concat_reproduces_input(
      mut input in prop::collection::vec(-50..50i32, 0..100)
    ) {
      input.sort();
      let expected = input.clone();

      let runs = futures::executor::block_on(async {
        let mut transformer = GroupRunsTransformer::new(|a: &i32, b: &i32| a.cmp(b));
        transformer
          .transform(Box::pin(stream::iter(input)))
          .await
          .collect::<Vec<Vec<i32>>>()
          .await
      });

      // Flattening the runs reproduces the input exactly.
      let flattened: Vec<i32> = runs.iter().flatten().copied().collect();
      prop_assert_eq!(flattened, expected);

      for run in &runs {
        // No empty runs, and every element equals the representative.
        prop_assert!(!run.is_empty());
        prop_assert!(run.iter().all(|e| *e == run[0]));
      }

      // Adjacent runs never compare equal across their boundary.
      for pair in runs.windows(2) {
        prop_assert_ne!(pair[0][0], pair[1][0]);
      }
    }

    #[test]
    fn test_group_runs_lookahead_bound(
      mut input in prop::collection::vec(0..10i32, 0..50),
      limit in 0..8usize
    ) {
      input.sort();

      let pulls = Arc::new(AtomicUsize::new(0));
      let pulls_clone = pulls.clone();
      let input_len = input.len();
      let runs = futures::executor::block_on(async {
        let mut transformer = GroupRunsTransformer::new(|a: &i32, b: &i32| a.cmp(b));
        let counted = stream::iter(input).inspect(move |_| {
          pulls_clone.fetch_add(1, AtomicOrdering::SeqCst);
        });
        transformer
          .transform(Box::pin(counted))
          .await
          .take(limit)
          .collect::<Vec<Vec<i32>>>()
          .await
      });

      // At most one lookahead element beyond the emitted runs, and never a
      // pull past the end of the input.
      let emitted: usize = runs.iter().map(Vec::len).sum();
      let pulled = pulls.load(AtomicOrdering::SeqCst);
      prop_assert!(pulled <= emitted + 1);
      prop_assert!(pulled <= input_len);
    }
  }
}
