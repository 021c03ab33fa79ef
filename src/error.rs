//! Error handling for stream components.
//!
//! Each transformer carries an [`ErrorStrategy`] in its configuration and
//! maps errors to an [`ErrorAction`] through
//! [`crate::Transformer::handle_error`]. Errors are reported as
//! [`StreamError`] values with a timestamped [`ErrorContext`] and
//! [`ComponentInfo`] identifying the failing component.
//!
//! The operators in this crate are synchronous and single-pass: there is no
//! retry or recovery machinery inside them. A comparator or source failure
//! propagates to the caller at the point of use, and whatever was already
//! delivered downstream stands.

use chrono;
use std::error::Error;
use std::fmt;
use std::sync::Arc;

/// Action to take when an error occurs in a pipeline component.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorAction {
  /// Stop processing immediately when an error occurs.
  ///
  /// This is the default behavior and prevents partial results after an
  /// error.
  Stop,
  /// Skip the item that caused the error and continue processing.
  Skip,
  /// Retry the operation that caused the error.
  Retry,
}

// Type alias for the custom error handler function
type CustomErrorHandler<T> = Arc<dyn Fn(&StreamError<T>) -> ErrorAction + Send + Sync>;

/// Strategy for handling errors in pipeline components.
///
/// Strategies are configured per component via
/// [`crate::TransformerConfig`]; the component maps them to an
/// [`ErrorAction`] when an error is encountered.
pub enum ErrorStrategy<T> {
  /// Stop processing immediately when an error occurs (the default).
  Stop,
  /// Skip items that cause errors and continue processing.
  Skip,
  /// Retry failed operations up to the given number of times.
  Retry(usize),
  /// Custom error handling logic.
  Custom(CustomErrorHandler<T>),
}

impl<T> Clone for ErrorStrategy<T> {
  fn clone(&self) -> Self {
    match self {
      ErrorStrategy::Stop => ErrorStrategy::Stop,
      ErrorStrategy::Skip => ErrorStrategy::Skip,
      ErrorStrategy::Retry(n) => ErrorStrategy::Retry(*n),
      ErrorStrategy::Custom(handler) => ErrorStrategy::Custom(handler.clone()),
    }
  }
}

impl<T> fmt::Debug for ErrorStrategy<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ErrorStrategy::Stop => write!(f, "ErrorStrategy::Stop"),
      ErrorStrategy::Skip => write!(f, "ErrorStrategy::Skip"),
      ErrorStrategy::Retry(n) => write!(f, "ErrorStrategy::Retry({})", n),
      ErrorStrategy::Custom(_) => write!(f, "ErrorStrategy::Custom"),
    }
  }
}

impl<T> PartialEq for ErrorStrategy<T> {
  fn eq(&self, other: &Self) -> bool {
    match (self, other) {
      (ErrorStrategy::Stop, ErrorStrategy::Stop) => true,
      (ErrorStrategy::Skip, ErrorStrategy::Skip) => true,
      (ErrorStrategy::Retry(n1), ErrorStrategy::Retry(n2)) => n1 == n2,
      (ErrorStrategy::Custom(_), ErrorStrategy::Custom(_)) => true,
      _ => false,
    }
  }
}

impl<T> ErrorStrategy<T> {
  /// Creates a custom error handling strategy with a user-defined handler
  /// function.
  pub fn new_custom<F>(f: F) -> Self
  where
    F: Fn(&StreamError<T>) -> ErrorAction + Send + Sync + 'static,
  {
    Self::Custom(Arc::new(f))
  }
}

/// Error that occurred during stream processing.
///
/// Carries the original error together with context about where and when it
/// occurred and how many times it has been retried.
#[derive(Debug)]
pub struct StreamError<T> {
  /// The original error that occurred.
  pub source: Box<dyn Error + Send + Sync>,
  /// Context about when and where the error occurred.
  pub context: ErrorContext<T>,
  /// Information about the component that encountered the error.
  pub component: ComponentInfo,
  /// Number of times this error has been retried.
  pub retries: usize,
}

impl<T: Clone> Clone for StreamError<T> {
  fn clone(&self) -> Self {
    Self {
      source: Box::new(StringError(self.source.to_string())),
      context: self.context.clone(),
      component: self.component.clone(),
      retries: self.retries,
    }
  }
}

/// A simple error type that wraps a string message.
#[derive(Debug)]
pub struct StringError(pub String);

impl fmt::Display for StringError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

impl Error for StringError {}

impl<T> StreamError<T> {
  /// Creates a new `StreamError` with `retries` set to 0.
  pub fn new(
    source: Box<dyn Error + Send + Sync>,
    context: ErrorContext<T>,
    component: ComponentInfo,
  ) -> Self {
    Self {
      source,
      context,
      component,
      retries: 0,
    }
  }
}

impl<T: fmt::Debug> fmt::Display for StreamError<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "Error in {} ({}): {}",
      self.component.name, self.component.type_name, self.source
    )
  }
}

impl<T: fmt::Debug> Error for StreamError<T> {
  fn source(&self) -> Option<&(dyn Error + 'static)> {
    Some(self.source.as_ref())
  }
}

/// Context information about when and where an error occurred.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorContext<T> {
  /// The timestamp when the error occurred.
  pub timestamp: chrono::DateTime<chrono::Utc>,
  /// The item being processed when the error occurred, if available.
  pub item: Option<T>,
  /// The name of the component that encountered the error.
  pub component_name: String,
  /// The type of the component that encountered the error.
  pub component_type: String,
}

impl<T> Default for ErrorContext<T> {
  fn default() -> Self {
    Self {
      timestamp: chrono::Utc::now(),
      item: None,
      component_name: "default".to_string(),
      component_type: "default".to_string(),
    }
  }
}

/// Information about a pipeline component.
///
/// Used for logging and error reporting.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentInfo {
  /// The name of the component.
  pub name: String,
  /// The type name of the component.
  pub type_name: String,
}

impl Default for ComponentInfo {
  fn default() -> Self {
    Self {
      name: "default".to_string(),
      type_name: "default".to_string(),
    }
  }
}

impl ComponentInfo {
  /// Creates a new `ComponentInfo` with the given name and type name.
  pub fn new(name: String, type_name: String) -> Self {
    Self { name, type_name }
  }
}
