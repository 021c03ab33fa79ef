//! Transformer trait for components that transform data streams.
//!
//! A transformer consumes one stream shape and produces another, pulling
//! inputs only on downstream demand. `transform` hands the input stream to
//! the transformer and returns the output stream; no input is pulled until
//! the consumer polls that output stream, and a consumer that stops polling
//! (or drops the stream) stops all further pulls.
//!
//! Configuration is per transformer: a [`TransformerConfig`] holding the
//! error handling strategy and an optional component name used in logs and
//! error reports.

use crate::error::{ComponentInfo, ErrorAction, ErrorContext, ErrorStrategy, StreamError};
use crate::{input::Input, output::Output};
use async_trait::async_trait;

/// Configuration for transformers, including error handling strategy and
/// naming.
pub struct TransformerConfig<T> {
  /// The error handling strategy to use when errors occur.
  pub error_strategy: ErrorStrategy<T>,
  /// Optional name for identifying this transformer in logs and errors.
  pub name: Option<String>,
}

impl<T> Default for TransformerConfig<T> {
  fn default() -> Self {
    Self {
      error_strategy: ErrorStrategy::Stop,
      name: None,
    }
  }
}

impl<T> Clone for TransformerConfig<T> {
  fn clone(&self) -> Self {
    Self {
      error_strategy: self.error_strategy.clone(),
      name: self.name.clone(),
    }
  }
}

impl<T> std::fmt::Debug for TransformerConfig<T> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("TransformerConfig")
      .field("error_strategy", &self.error_strategy)
      .field("name", &self.name)
      .finish()
  }
}

impl<T> PartialEq for TransformerConfig<T> {
  fn eq(&self, other: &Self) -> bool {
    self.error_strategy == other.error_strategy && self.name == other.name
  }
}

impl<T> TransformerConfig<T> {
  /// Sets the error handling strategy for this configuration.
  pub fn with_error_strategy(mut self, strategy: ErrorStrategy<T>) -> Self {
    self.error_strategy = strategy;
    self
  }

  /// Sets the name for this configuration.
  pub fn with_name(mut self, name: String) -> Self {
    self.name = Some(name);
    self
  }

  /// Returns the current error handling strategy.
  pub fn error_strategy(&self) -> ErrorStrategy<T> {
    self.error_strategy.clone()
  }

  /// Returns the current name, if set.
  pub fn name(&self) -> Option<String> {
    self.name.clone()
  }
}

/// Trait for components that transform data streams.
///
/// Transformers process items as they flow through the pipeline. All work
/// happens inside the returned output stream when the consumer polls it;
/// transformers spawn nothing and hold no locks, so they are strictly
/// cooperative and single-threaded from the consumer's point of view.
#[async_trait]
pub trait Transformer: Input + Output {
  /// Transforms a stream of input items into a stream of output items.
  ///
  /// The returned stream is lazy: input is pulled only as far as needed to
  /// satisfy the consumer's polls.
  async fn transform(&mut self, input: Self::InputStream) -> Self::OutputStream;

  /// Creates a new transformer instance with the given configuration.
  #[must_use]
  fn with_config(&self, config: TransformerConfig<Self::Input>) -> Self
  where
    Self: Sized + Clone,
  {
    let mut this = self.clone();
    this.set_config(config);
    this
  }

  /// Sets the configuration for this transformer.
  fn set_config(&mut self, config: TransformerConfig<Self::Input>) {
    self.set_config_impl(config);
  }

  /// Returns a reference to the transformer's configuration.
  fn config(&self) -> &TransformerConfig<Self::Input> {
    self.get_config_impl()
  }

  /// Returns a mutable reference to the transformer's configuration.
  fn config_mut(&mut self) -> &mut TransformerConfig<Self::Input> {
    self.get_config_mut_impl()
  }

  /// Sets the name for this transformer.
  #[must_use]
  fn with_name(mut self, name: String) -> Self
  where
    Self: Sized,
  {
    let config = self.get_config_impl().clone();
    self.set_config(TransformerConfig {
      error_strategy: config.error_strategy,
      name: Some(name),
    });
    self
  }

  /// Handles an error that occurred during stream processing.
  ///
  /// Maps the configured [`ErrorStrategy`] to an [`ErrorAction`].
  fn handle_error(&self, error: &StreamError<Self::Input>) -> ErrorAction {
    match self.config().error_strategy() {
      ErrorStrategy::Stop => ErrorAction::Stop,
      ErrorStrategy::Skip => ErrorAction::Skip,
      ErrorStrategy::Retry(n) if error.retries < n => ErrorAction::Retry,
      ErrorStrategy::Custom(ref handler) => handler(error),
      _ => ErrorAction::Stop,
    }
  }

  /// Creates an error context for error reporting.
  fn create_error_context(&self, item: Option<Self::Input>) -> ErrorContext<Self::Input> {
    ErrorContext {
      timestamp: chrono::Utc::now(),
      item,
      component_name: self.component_info().name,
      component_type: self.component_info().type_name,
    }
  }

  /// Returns information about the component for error reporting.
  fn component_info(&self) -> ComponentInfo {
    ComponentInfo {
      name: self
        .config()
        .name()
        .unwrap_or_else(|| "transformer".to_string()),
      type_name: std::any::type_name::<Self>().to_string(),
    }
  }

  /// Stores the configuration. Implemented by each transformer.
  fn set_config_impl(&mut self, config: TransformerConfig<Self::Input>);

  /// Returns the stored configuration. Implemented by each transformer.
  fn get_config_impl(&self) -> &TransformerConfig<Self::Input>;

  /// Returns the stored configuration mutably. Implemented by each
  /// transformer.
  fn get_config_mut_impl(&mut self) -> &mut TransformerConfig<Self::Input>;
}
