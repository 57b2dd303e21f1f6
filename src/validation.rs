//! The outcome of running a schema or a single rule.
//!
//! This module provides [`ValidationResult`], the immutable value every rule
//! and every schema returns. A result is either a success or a failure that
//! carries exactly one human-readable message.

use std::fmt::{self, Display};

use stillwater::Validation;

/// The outcome of validating a value.
///
/// A `ValidationResult` is either valid with no error, or invalid with a
/// single error message. Results are never mutated after construction;
/// helpers like [`ValidationResult::prefixed`] return a new value.
///
/// # Example
///
/// ```rust
/// use tripwire::ValidationResult;
///
/// let ok = ValidationResult::success();
/// assert!(ok.is_valid());
/// assert_eq!(ok.error(), None);
///
/// let failed = ValidationResult::failure("String cannot be empty");
/// assert!(!failed.is_valid());
/// assert_eq!(failed.error(), Some("String cannot be empty"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    error: Option<String>,
}

impl ValidationResult {
    /// Creates a successful result.
    pub fn success() -> Self {
        Self { error: None }
    }

    /// Creates a failed result carrying `message`.
    ///
    /// The message should be non-empty so the failure can be diagnosed.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
        }
    }

    /// Returns true if validation succeeded.
    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }

    /// Returns the failure message, or `None` on success.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Returns a new result whose failure message is qualified by `field`.
    ///
    /// A failure `"msg"` becomes `"{field}: msg"`; a success is returned
    /// unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tripwire::ValidationResult;
    ///
    /// let result = ValidationResult::failure("String must be at least 2 characters")
    ///     .prefixed("Name");
    /// assert_eq!(result.error(), Some("Name: String must be at least 2 characters"));
    /// ```
    pub fn prefixed(self, field: &str) -> Self {
        match self.error {
            Some(message) => Self::failure(format!("{}: {}", field, message)),
            None => self,
        }
    }

    /// Converts this result into a standard `Result`.
    pub fn into_result(self) -> Result<(), String> {
        match self.error {
            Some(message) => Err(message),
            None => Ok(()),
        }
    }

    /// Converts this result into a stillwater `Validation`.
    pub fn into_validation(self) -> Validation<(), String> {
        match self.error {
            Some(message) => Validation::Failure(message),
            None => Validation::Success(()),
        }
    }

    /// Builds a result from a stillwater `Validation`.
    ///
    /// The success value is discarded; a failure is rendered with its
    /// `Display` implementation. This lets validators written against
    /// stillwater be used as rules.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stillwater::Validation;
    /// use tripwire::ValidationResult;
    ///
    /// let v: Validation<i64, String> = Validation::Failure("out of stock".to_string());
    /// let result = ValidationResult::from_validation(v);
    /// assert_eq!(result.error(), Some("out of stock"));
    /// ```
    pub fn from_validation<T, E: Display>(validation: Validation<T, E>) -> Self {
        match validation {
            Validation::Success(_) => Self::success(),
            Validation::Failure(error) => Self::failure(error.to_string()),
        }
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::success()
    }
}

impl Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.error {
            Some(message) => write!(f, "invalid: {}", message),
            None => write!(f, "valid"),
        }
    }
}

impl From<ValidationResult> for Result<(), String> {
    fn from(result: ValidationResult) -> Self {
        result.into_result()
    }
}

impl<E: Display> From<Result<(), E>> for ValidationResult {
    fn from(result: Result<(), E>) -> Self {
        match result {
            Ok(()) => Self::success(),
            Err(error) => Self::failure(error.to_string()),
        }
    }
}

// Results cross thread boundaries when schemas are shared (see `batch`).
const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<ValidationResult>();
    assert_sync::<ValidationResult>();
};
