//! Rule-list schemas over arbitrary types.
//!
//! This module provides [`RuleSchema`], the plain ordered list of rules that
//! every other schema builds on. It is useful on its own for types that have
//! no dedicated schema.

use std::fmt;

use crate::rule::{first_failure, FnRule, Predicate, Rule};
use crate::validation::ValidationResult;

use super::traits::SchemaLike;

/// A schema made of caller-supplied rules over values of type `T`.
///
/// Rules are evaluated in the order they were added, and evaluation stops
/// at the first failing rule. A schema with no rules accepts every value.
///
/// # Example
///
/// ```rust
/// use tripwire::{Schema, SchemaLike};
///
/// struct Range {
///     start: i64,
///     end: i64,
/// }
///
/// let schema = Schema::rules::<Range>()
///     .refine(|r| r.start <= r.end, "start must not exceed end");
///
/// assert!(schema.parse(&Range { start: 1, end: 5 }).is_valid());
/// assert_eq!(
///     schema.parse(&Range { start: 9, end: 5 }).error(),
///     Some("start must not exceed end")
/// );
/// ```
pub struct RuleSchema<T: ?Sized> {
    rules: Vec<Box<dyn Rule<T>>>,
}

impl<T: ?Sized> RuleSchema<T> {
    /// Creates a schema with no rules.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Appends a rule.
    pub fn rule<R>(mut self, rule: R) -> Self
    where
        R: Rule<T> + 'static,
    {
        self.rules.push(Box::new(rule));
        self
    }

    /// Appends a rule that fails with `message` when `predicate` returns false.
    pub fn refine<F>(self, predicate: F, message: impl Into<String>) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
        T: 'static,
    {
        self.rule(Predicate::new(predicate, message))
    }

    /// Appends a rule backed by a function returning its own result.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tripwire::{Schema, SchemaLike, ValidationResult};
    ///
    /// let schema = Schema::rules::<Vec<u8>>().custom(|bytes| {
    ///     if bytes.len() <= 4 {
    ///         ValidationResult::success()
    ///     } else {
    ///         ValidationResult::failure(format!("{} bytes is too many", bytes.len()))
    ///     }
    /// });
    ///
    /// assert_eq!(schema.parse(&vec![0; 6]).error(), Some("6 bytes is too many"));
    /// ```
    pub fn custom<F>(self, check: F) -> Self
    where
        F: Fn(&T) -> ValidationResult + Send + Sync + 'static,
        T: 'static,
    {
        self.rule(FnRule::new(check))
    }

    /// Returns the number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if no rules have been added.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<T: ?Sized> Default for RuleSchema<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> fmt::Debug for RuleSchema<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let codes: Vec<_> = self.rules.iter().map(|r| r.code()).collect();
        f.debug_struct("RuleSchema").field("rules", &codes).finish()
    }
}

impl<T: ?Sized> SchemaLike<T> for RuleSchema<T> {
    fn parse(&self, value: &T) -> ValidationResult {
        first_failure(&self.rules, value)
    }
}
