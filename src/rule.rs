//! Rules: the atomic checks composed by schemas.
//!
//! A [`Rule`] inspects a value and produces a [`ValidationResult`]. Schemas
//! keep rules in an ordered list and evaluate them with [`first_failure`],
//! which stops at the first rule that fails.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::validation::ValidationResult;

/// A single check over a value of type `T`.
///
/// Rules must never panic on any input: a missing or empty value is
/// reported through a failed [`ValidationResult`] like any other violation.
///
/// # Example
///
/// ```rust
/// use tripwire::{Rule, ValidationResult};
///
/// struct Even;
///
/// impl Rule<i64> for Even {
///     fn check(&self, value: &i64) -> ValidationResult {
///         if value % 2 == 0 {
///             ValidationResult::success()
///         } else {
///             ValidationResult::failure("Number must be even")
///         }
///     }
///
///     fn code(&self) -> &'static str {
///         "even"
///     }
/// }
///
/// assert!(Even.check(&4).is_valid());
/// assert!(!Even.check(&3).is_valid());
/// ```
pub trait Rule<T: ?Sized>: Send + Sync {
    /// Checks `value` and reports the outcome.
    fn check(&self, value: &T) -> ValidationResult;

    /// A stable, machine-readable name for this rule (e.g. `min_length`).
    fn code(&self) -> &'static str {
        "custom"
    }
}

impl<T: ?Sized, R: Rule<T> + ?Sized> Rule<T> for Box<R> {
    fn check(&self, value: &T) -> ValidationResult {
        (**self).check(value)
    }

    fn code(&self) -> &'static str {
        (**self).code()
    }
}

impl<T: ?Sized, R: Rule<T> + ?Sized> Rule<T> for Arc<R> {
    fn check(&self, value: &T) -> ValidationResult {
        (**self).check(value)
    }

    fn code(&self) -> &'static str {
        (**self).code()
    }
}

/// A rule built from a boolean predicate and a fixed failure message.
///
/// # Example
///
/// ```rust
/// use tripwire::{Predicate, Rule};
///
/// let rule = Predicate::new(|s: &str| !s.contains(' '), "String cannot contain spaces");
/// assert!(rule.check("john").is_valid());
/// assert_eq!(rule.check("jo hn").error(), Some("String cannot contain spaces"));
/// ```
pub struct Predicate<T: ?Sized> {
    predicate: Arc<dyn Fn(&T) -> bool + Send + Sync>,
    message: String,
}

impl<T: ?Sized> Predicate<T> {
    /// Creates a rule that passes when `predicate` returns true.
    pub fn new<F>(predicate: F, message: impl Into<String>) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Self {
            predicate: Arc::new(predicate),
            message: message.into(),
        }
    }

    /// Returns the failure message.
    pub fn message(&self) -> &str {
        &self.message
    }

    pub(crate) fn set_message(&mut self, message: String) {
        self.message = message;
    }
}

impl<T: ?Sized> Clone for Predicate<T> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
            message: self.message.clone(),
        }
    }
}

impl<T: ?Sized> fmt::Debug for Predicate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate")
            .field("predicate", &"<function>")
            .field("message", &self.message)
            .finish()
    }
}

impl<T: ?Sized> Rule<T> for Predicate<T> {
    fn check(&self, value: &T) -> ValidationResult {
        if (self.predicate)(value) {
            ValidationResult::success()
        } else {
            ValidationResult::failure(self.message.clone())
        }
    }
}

/// A rule backed by a function that produces its own [`ValidationResult`].
///
/// Use this when the failure message depends on the value being checked.
pub struct FnRule<T: ?Sized, F> {
    check: F,
    _phantom: PhantomData<fn(&T)>,
}

impl<T: ?Sized, F> FnRule<T, F>
where
    F: Fn(&T) -> ValidationResult + Send + Sync,
{
    /// Wraps `check` as a rule.
    pub fn new(check: F) -> Self {
        Self {
            check,
            _phantom: PhantomData,
        }
    }
}

impl<T: ?Sized, F> Rule<T> for FnRule<T, F>
where
    F: Fn(&T) -> ValidationResult + Send + Sync,
{
    fn check(&self, value: &T) -> ValidationResult {
        (self.check)(value)
    }
}

/// Evaluates `rules` in order and returns the first failure.
///
/// Rules after the first failing one are not evaluated. An empty rule list
/// is vacuously valid.
pub(crate) fn first_failure<'r, T, R, I>(rules: I, value: &T) -> ValidationResult
where
    T: ?Sized,
    R: Rule<T> + ?Sized + 'r,
    I: IntoIterator<Item = &'r R>,
{
    for rule in rules {
        let result = rule.check(value);
        if !result.is_valid() {
            tracing::trace!(rule = rule.code(), error = ?result.error(), "rule failed");
            return result;
        }
    }
    ValidationResult::success()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_predicate_rule() {
        let rule = Predicate::new(|n: &i64| *n % 2 == 0, "Number must be even");
        assert!(rule.check(&2).is_valid());
        assert_eq!(rule.check(&3).error(), Some("Number must be even"));
        assert_eq!(rule.code(), "custom");
    }

    #[test]
    fn test_fn_rule_builds_message_from_value() {
        let rule = FnRule::new(|n: &i64| {
            if *n < 10 {
                ValidationResult::success()
            } else {
                ValidationResult::failure(format!("{} is too large", n))
            }
        });
        assert!(rule.check(&3).is_valid());
        assert_eq!(rule.check(&12).error(), Some("12 is too large"));
    }

    #[test]
    fn test_first_failure_empty_is_valid() {
        let rules: Vec<Box<dyn Rule<i64>>> = Vec::new();
        assert!(first_failure(&rules, &0).is_valid());
    }

    #[test]
    fn test_first_failure_stops_at_first_failing_rule() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);

        let rules: Vec<Box<dyn Rule<i64>>> = vec![
            Box::new(Predicate::new(|n: &i64| *n > 0, "first")),
            Box::new(Predicate::new(|n: &i64| *n > 100, "second")),
            Box::new(FnRule::new(move |_: &i64| {
                counter.fetch_add(1, Ordering::SeqCst);
                ValidationResult::failure("third")
            })),
        ];

        assert_eq!(first_failure(&rules, &5).error(), Some("second"));
        assert_eq!(first_failure(&rules, &-5).error(), Some("first"));
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        assert_eq!(first_failure(&rules, &500).error(), Some("third"));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_boxed_and_shared_rules_forward() {
        let boxed: Box<dyn Rule<str>> =
            Box::new(Predicate::new(|s: &str| !s.is_empty(), "empty"));
        assert_eq!(boxed.check("").error(), Some("empty"));

        let shared: Arc<dyn Rule<str>> = Arc::new(Predicate::new(|s: &str| s.len() < 3, "long"));
        assert_eq!(shared.check("abcd").error(), Some("long"));
        assert_eq!(shared.code(), "custom");
    }
}
