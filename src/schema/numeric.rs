//! Numeric schema validation.
//!
//! This module provides [`NumberSchema`] for validating integer values with
//! rules like minimum/maximum value and sign requirements.

use std::fmt::{self, Display};
use std::ops::RangeInclusive;

use serde_json::Value;

use crate::rule::{first_failure, Predicate, Rule};
use crate::validation::ValidationResult;

use super::traits::SchemaLike;

/// A rule applied to integer values.
#[derive(Clone)]
pub enum NumberRule {
    /// Greater than or equal to `value`.
    Min { value: i64, message: Option<String> },
    /// Less than or equal to `value`.
    Max { value: i64, message: Option<String> },
    /// Greater than zero.
    Positive { message: Option<String> },
    /// Greater than or equal to zero.
    NonNegative { message: Option<String> },
    /// Less than zero.
    Negative { message: Option<String> },
    /// A caller-defined predicate.
    Custom(Predicate<i64>),
}

impl NumberRule {
    fn set_message(&mut self, message: String) {
        match self {
            NumberRule::Min { message: m, .. }
            | NumberRule::Max { message: m, .. }
            | NumberRule::Positive { message: m }
            | NumberRule::NonNegative { message: m }
            | NumberRule::Negative { message: m } => *m = Some(message),
            NumberRule::Custom(predicate) => predicate.set_message(message),
        }
    }
}

impl Rule<i64> for NumberRule {
    fn check(&self, value: &i64) -> ValidationResult {
        let value = *value;
        match self {
            NumberRule::Min { value: min, message } => outcome(value >= *min, message, || {
                format!("Number must be at least {}", min)
            }),
            NumberRule::Max { value: max, message } => outcome(value <= *max, message, || {
                format!("Number must be at most {}", max)
            }),
            NumberRule::Positive { message } => {
                outcome(value > 0, message, || "Number must be positive".to_string())
            }
            NumberRule::NonNegative { message } => outcome(value >= 0, message, || {
                "Number must be non-negative".to_string()
            }),
            NumberRule::Negative { message } => {
                outcome(value < 0, message, || "Number must be negative".to_string())
            }
            NumberRule::Custom(predicate) => predicate.check(&value),
        }
    }

    fn code(&self) -> &'static str {
        match self {
            NumberRule::Min { .. } => "min_value",
            NumberRule::Max { .. } => "max_value",
            NumberRule::Positive { .. } => "positive",
            NumberRule::NonNegative { .. } => "non_negative",
            NumberRule::Negative { .. } => "negative",
            NumberRule::Custom(_) => "custom",
        }
    }
}

impl Display for NumberRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumberRule::Min { value, .. } => write!(f, "min_value({})", value),
            NumberRule::Max { value, .. } => write!(f, "max_value({})", value),
            other => f.write_str(other.code()),
        }
    }
}

fn outcome(
    passed: bool,
    message: &Option<String>,
    default: impl FnOnce() -> String,
) -> ValidationResult {
    if passed {
        ValidationResult::success()
    } else {
        ValidationResult::failure(message.clone().unwrap_or_else(default))
    }
}

impl fmt::Debug for NumberRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(self, f)
    }
}

/// A schema for validating integer values.
///
/// Values are compared as `i64`. Rules are evaluated in the order they were
/// added and evaluation stops at the first failure.
///
/// # Example
///
/// ```rust
/// use tripwire::{Schema, SchemaLike};
///
/// let schema = Schema::number()
///     .positive()
///     .min(1)
///     .max(120);
///
/// assert!(schema.parse(&30i64).is_valid());
/// assert_eq!(schema.parse(&-5i64).error(), Some("Number must be positive"));
/// assert_eq!(schema.parse(&121i64).error(), Some("Number must be at most 120"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct NumberSchema {
    rules: Vec<NumberRule>,
}

impl NumberSchema {
    /// Creates a new number schema with no rules.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Adds a minimum value rule (inclusive).
    pub fn min(mut self, value: i64) -> Self {
        self.rules.push(NumberRule::Min {
            value,
            message: None,
        });
        self
    }

    /// Adds a maximum value rule (inclusive).
    pub fn max(mut self, value: i64) -> Self {
        self.rules.push(NumberRule::Max {
            value,
            message: None,
        });
        self
    }

    /// Adds both minimum and maximum value rules (inclusive range).
    ///
    /// This is a convenience method equivalent to calling `.min(start).max(end)`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tripwire::{Schema, SchemaLike};
    ///
    /// let schema = Schema::number().range(1..=100);
    ///
    /// assert!(schema.parse(&50i64).is_valid());
    /// assert_eq!(schema.parse(&0i64).error(), Some("Number must be at least 1"));
    /// ```
    pub fn range(self, range: RangeInclusive<i64>) -> Self {
        self.min(*range.start()).max(*range.end())
    }

    /// Adds a rule requiring the value to be greater than 0.
    pub fn positive(mut self) -> Self {
        self.rules.push(NumberRule::Positive { message: None });
        self
    }

    /// Adds a rule requiring the value to be greater than or equal to 0.
    pub fn non_negative(mut self) -> Self {
        self.rules.push(NumberRule::NonNegative { message: None });
        self
    }

    /// Adds a rule requiring the value to be less than 0.
    pub fn negative(mut self) -> Self {
        self.rules.push(NumberRule::Negative { message: None });
        self
    }

    /// Adds a rule that fails with `message` when `predicate` returns false.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tripwire::{Schema, SchemaLike};
    ///
    /// let schema = Schema::number().refine(|n| n % 2 == 0, "Number must be even");
    ///
    /// assert_eq!(schema.parse(&3i64).error(), Some("Number must be even"));
    /// ```
    pub fn refine<F>(mut self, predicate: F, message: impl Into<String>) -> Self
    where
        F: Fn(&i64) -> bool + Send + Sync + 'static,
    {
        self.rules
            .push(NumberRule::Custom(Predicate::new(predicate, message)));
        self
    }

    /// Sets a custom error message for the most recently added rule.
    ///
    /// Has no effect if no rules have been added yet.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tripwire::{Schema, SchemaLike};
    ///
    /// let schema = Schema::number()
    ///     .min(18)
    ///     .error("must be at least 18 years old");
    ///
    /// assert_eq!(schema.parse(&16i64).error(), Some("must be at least 18 years old"));
    /// ```
    pub fn error(mut self, message: impl Into<String>) -> Self {
        if let Some(last) = self.rules.last_mut() {
            last.set_message(message.into());
        }
        self
    }

    /// Returns the rules in evaluation order.
    pub fn rules(&self) -> &[NumberRule] {
        &self.rules
    }
}

impl SchemaLike<i64> for NumberSchema {
    fn parse(&self, value: &i64) -> ValidationResult {
        first_failure(&self.rules, value)
    }
}

impl SchemaLike<i32> for NumberSchema {
    fn parse(&self, value: &i32) -> ValidationResult {
        first_failure(&self.rules, &i64::from(*value))
    }
}

impl SchemaLike<u32> for NumberSchema {
    fn parse(&self, value: &u32) -> ValidationResult {
        first_failure(&self.rules, &i64::from(*value))
    }
}

impl SchemaLike<Value> for NumberSchema {
    fn parse(&self, value: &Value) -> ValidationResult {
        match value.as_i64() {
            Some(n) => first_failure(&self.rules, &n),
            None => ValidationResult::failure("Expected integer"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_number_schema_accepts_any_integer() {
        let schema = NumberSchema::new();
        assert!(schema.parse(&i64::MIN).is_valid());
        assert!(schema.parse(&0i64).is_valid());
        assert!(schema.parse(&i64::MAX).is_valid());
    }

    #[test]
    fn test_min_rule() {
        let schema = NumberSchema::new().min(5);

        assert!(schema.parse(&5i64).is_valid());
        assert!(schema.parse(&10i64).is_valid());
        assert_eq!(schema.parse(&4i64).error(), Some("Number must be at least 5"));
    }

    #[test]
    fn test_max_rule() {
        let schema = NumberSchema::new().max(10);

        assert!(schema.parse(&10i64).is_valid());
        assert_eq!(schema.parse(&11i64).error(), Some("Number must be at most 10"));
    }

    #[test]
    fn test_negative_bounds() {
        let schema = NumberSchema::new().min(-10).max(-1);

        assert!(schema.parse(&-5i64).is_valid());
        assert_eq!(schema.parse(&-11i64).error(), Some("Number must be at least -10"));
        assert_eq!(schema.parse(&0i64).error(), Some("Number must be at most -1"));
    }

    #[test]
    fn test_sign_rules() {
        let positive = NumberSchema::new().positive();
        assert!(positive.parse(&1i64).is_valid());
        assert_eq!(positive.parse(&0i64).error(), Some("Number must be positive"));

        let non_negative = NumberSchema::new().non_negative();
        assert!(non_negative.parse(&0i64).is_valid());
        assert_eq!(
            non_negative.parse(&-1i64).error(),
            Some("Number must be non-negative")
        );

        let negative = NumberSchema::new().negative();
        assert!(negative.parse(&-1i64).is_valid());
        assert_eq!(negative.parse(&0i64).error(), Some("Number must be negative"));
    }

    #[test]
    fn test_range_is_min_then_max() {
        let schema = NumberSchema::new().range(1..=100);

        let codes: Vec<_> = schema.rules().iter().map(|r| r.code()).collect();
        assert_eq!(codes, ["min_value", "max_value"]);
        assert!(schema.parse(&1i64).is_valid());
        assert!(schema.parse(&100i64).is_valid());
        assert_eq!(schema.parse(&101i64).error(), Some("Number must be at most 100"));
    }

    #[test]
    fn test_registration_order_decides_message() {
        let schema = NumberSchema::new().positive().min(1).max(120);
        assert_eq!(schema.parse(&-5i64).error(), Some("Number must be positive"));

        let schema = NumberSchema::new().min(1).positive().max(120);
        assert_eq!(schema.parse(&-5i64).error(), Some("Number must be at least 1"));
    }

    #[test]
    fn test_custom_error_message() {
        let schema = NumberSchema::new().positive().error("age must be positive");
        assert_eq!(schema.parse(&0i64).error(), Some("age must be positive"));
    }

    #[test]
    fn test_refine_rule() {
        let schema = NumberSchema::new()
            .refine(|n| n % 5 == 0, "not a multiple")
            .error("Number must be a multiple of 5");

        assert!(schema.parse(&15i64).is_valid());
        assert_eq!(
            schema.parse(&7i64).error(),
            Some("Number must be a multiple of 5")
        );
    }

    #[test]
    fn test_narrow_integer_types() {
        let schema = NumberSchema::new().positive().max(120);

        assert!(schema.parse(&30i32).is_valid());
        assert_eq!(schema.parse(&-5i32).error(), Some("Number must be positive"));
        assert_eq!(schema.parse(&500u32).error(), Some("Number must be at most 120"));
    }

    #[test]
    fn test_json_values() {
        let schema = NumberSchema::new().min(1);

        assert!(schema.parse(&json!(3)).is_valid());
        assert_eq!(schema.parse(&json!(0)).error(), Some("Number must be at least 1"));
        assert_eq!(schema.parse(&json!(1.5)).error(), Some("Expected integer"));
        assert_eq!(schema.parse(&json!("3")).error(), Some("Expected integer"));
        assert_eq!(schema.parse(&json!(null)).error(), Some("Expected integer"));
        assert_eq!(schema.parse(&json!(u64::MAX)).error(), Some("Expected integer"));
    }

    #[test]
    fn test_display() {
        let schema = NumberSchema::new().min(1).max(9).positive();
        let shown: Vec<_> = schema.rules().iter().map(|r| r.to_string()).collect();
        assert_eq!(shown, ["min_value(1)", "max_value(9)", "positive"]);
    }
}
