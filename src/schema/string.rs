//! String schema validation.
//!
//! This module provides [`StringSchema`] for validating string values with
//! rules like minimum/maximum length, emptiness, email shape and regex
//! patterns.

use std::fmt::{self, Display};

use regex::Regex;
use serde_json::Value;

use crate::error::SchemaBuildError;
use crate::rule::{first_failure, Predicate, Rule};
use crate::validation::ValidationResult;

use super::traits::SchemaLike;

/// A rule applied to string values.
///
/// Each variant carries an optional message that replaces the default
/// failure message (see [`StringSchema::error`]).
#[derive(Clone)]
pub enum StringRule {
    /// At least `min` characters.
    MinLength { min: usize, message: Option<String> },
    /// At most `max` characters.
    MaxLength { max: usize, message: Option<String> },
    /// Non-empty and contains both `@` and `.`.
    Email { message: Option<String> },
    /// At least one character.
    NotEmpty { message: Option<String> },
    /// Matches a regular expression.
    Pattern { regex: Regex, message: Option<String> },
    /// A caller-defined predicate.
    Custom(Predicate<str>),
}

impl StringRule {
    fn set_message(&mut self, message: String) {
        match self {
            StringRule::MinLength { message: m, .. }
            | StringRule::MaxLength { message: m, .. }
            | StringRule::Email { message: m }
            | StringRule::NotEmpty { message: m }
            | StringRule::Pattern { message: m, .. } => *m = Some(message),
            StringRule::Custom(predicate) => predicate.set_message(message),
        }
    }
}

impl Rule<str> for StringRule {
    fn check(&self, value: &str) -> ValidationResult {
        match self {
            StringRule::MinLength { min, message } => {
                if value.chars().count() < *min {
                    fail(message, || format!("String must be at least {} characters", min))
                } else {
                    ValidationResult::success()
                }
            }
            StringRule::MaxLength { max, message } => {
                if value.chars().count() > *max {
                    fail(message, || format!("String must be at most {} characters", max))
                } else {
                    ValidationResult::success()
                }
            }
            StringRule::Email { message } => {
                if value.is_empty() || !value.contains('@') || !value.contains('.') {
                    fail(message, || "Invalid email format".to_string())
                } else {
                    ValidationResult::success()
                }
            }
            StringRule::NotEmpty { message } => {
                if value.is_empty() {
                    fail(message, || "String cannot be empty".to_string())
                } else {
                    ValidationResult::success()
                }
            }
            StringRule::Pattern { regex, message } => {
                if regex.is_match(value) {
                    ValidationResult::success()
                } else {
                    fail(message, || {
                        format!("String must match pattern {}", regex.as_str())
                    })
                }
            }
            StringRule::Custom(predicate) => predicate.check(value),
        }
    }

    fn code(&self) -> &'static str {
        match self {
            StringRule::MinLength { .. } => "min_length",
            StringRule::MaxLength { .. } => "max_length",
            StringRule::Email { .. } => "email",
            StringRule::NotEmpty { .. } => "not_empty",
            StringRule::Pattern { .. } => "pattern",
            StringRule::Custom(_) => "custom",
        }
    }
}

impl Display for StringRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StringRule::MinLength { min, .. } => write!(f, "min_length({})", min),
            StringRule::MaxLength { max, .. } => write!(f, "max_length({})", max),
            StringRule::Pattern { regex, .. } => write!(f, "pattern({})", regex.as_str()),
            other => f.write_str(other.code()),
        }
    }
}

impl fmt::Debug for StringRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(self, f)
    }
}

fn fail(message: &Option<String>, default: impl FnOnce() -> String) -> ValidationResult {
    ValidationResult::failure(message.clone().unwrap_or_else(default))
}

/// A schema for validating string values.
///
/// Rules are evaluated in the order they were added and evaluation stops at
/// the first failure. A missing value (`None`, or JSON `null`) is checked as
/// the empty string, so it fails `min_len(n)` for `n > 0`, `not_empty` and
/// `email` with their usual messages.
///
/// # Example
///
/// ```rust
/// use tripwire::{Schema, SchemaLike};
///
/// let schema = Schema::string()
///     .not_empty()
///     .min_len(2)
///     .max_len(50);
///
/// assert!(schema.parse("John Doe").is_valid());
/// assert_eq!(
///     schema.parse("J").error(),
///     Some("String must be at least 2 characters")
/// );
/// assert_eq!(
///     schema.parse(&None::<String>).error(),
///     Some("String cannot be empty")
/// );
/// ```
#[derive(Clone, Debug, Default)]
pub struct StringSchema {
    rules: Vec<StringRule>,
}

impl StringSchema {
    /// Creates a new string schema with no rules.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Adds a minimum length rule.
    ///
    /// The string must have at least `min` characters (Unicode scalar values).
    ///
    /// # Example
    ///
    /// ```rust
    /// use tripwire::{Schema, SchemaLike};
    ///
    /// let schema = Schema::string().min_len(5);
    ///
    /// assert!(schema.parse("hello").is_valid());
    /// assert!(!schema.parse("hi").is_valid());
    /// ```
    pub fn min_len(mut self, min: usize) -> Self {
        self.rules.push(StringRule::MinLength { min, message: None });
        self
    }

    /// Adds a maximum length rule.
    ///
    /// The string must have at most `max` characters (Unicode scalar values).
    pub fn max_len(mut self, max: usize) -> Self {
        self.rules.push(StringRule::MaxLength { max, message: None });
        self
    }

    /// Adds an email shape rule.
    ///
    /// This is a permissive shape check: the string must be non-empty and
    /// contain both `@` and `.`. It does not implement RFC 5322.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tripwire::{Schema, SchemaLike};
    ///
    /// let schema = Schema::string().email();
    ///
    /// assert!(schema.parse("john@example.com").is_valid());
    /// assert_eq!(schema.parse("invalid-email").error(), Some("Invalid email format"));
    /// ```
    pub fn email(mut self) -> Self {
        self.rules.push(StringRule::Email { message: None });
        self
    }

    /// Adds a rule requiring at least one character.
    pub fn not_empty(mut self) -> Self {
        self.rules.push(StringRule::NotEmpty { message: None });
        self
    }

    /// Adds a regex pattern rule.
    ///
    /// Returns an error if the pattern does not compile.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tripwire::{Schema, SchemaLike};
    ///
    /// let schema = Schema::string().pattern(r"^\d+$").unwrap();
    ///
    /// assert!(schema.parse("12345").is_valid());
    /// assert_eq!(
    ///     schema.parse("abc").error(),
    ///     Some(r"String must match pattern ^\d+$")
    /// );
    /// ```
    pub fn pattern(mut self, pattern: &str) -> Result<Self, SchemaBuildError> {
        let regex = Regex::new(pattern)?;
        self.rules.push(StringRule::Pattern {
            regex,
            message: None,
        });
        Ok(self)
    }

    /// Adds a rule that fails with `message` when `predicate` returns false.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tripwire::{Schema, SchemaLike};
    ///
    /// let schema = Schema::string()
    ///     .refine(|s| s.chars().all(|c| c.is_ascii_lowercase()), "String must be lowercase");
    ///
    /// assert_eq!(schema.parse("Hello").error(), Some("String must be lowercase"));
    /// ```
    pub fn refine<F>(mut self, predicate: F, message: impl Into<String>) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.rules
            .push(StringRule::Custom(Predicate::new(predicate, message)));
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
    /// let schema = Schema::string()
    ///     .min_len(5)
    ///     .error("username must be at least 5 characters");
    ///
    /// assert_eq!(
    ///     schema.parse("hi").error(),
    ///     Some("username must be at least 5 characters")
    /// );
    /// ```
    pub fn error(mut self, message: impl Into<String>) -> Self {
        if let Some(last) = self.rules.last_mut() {
            last.set_message(message.into());
        }
        self
    }

    /// Returns the rules in evaluation order.
    pub fn rules(&self) -> &[StringRule] {
        &self.rules
    }

    /// Validates an optional string. `None` is checked as the empty string.
    pub fn parse_optional(&self, value: Option<&str>) -> ValidationResult {
        first_failure(&self.rules, value.unwrap_or(""))
    }
}

impl SchemaLike<str> for StringSchema {
    fn parse(&self, value: &str) -> ValidationResult {
        self.parse_optional(Some(value))
    }
}

impl SchemaLike<String> for StringSchema {
    fn parse(&self, value: &String) -> ValidationResult {
        self.parse_optional(Some(value.as_str()))
    }
}

impl<'a> SchemaLike<&'a str> for StringSchema {
    fn parse(&self, value: &&'a str) -> ValidationResult {
        self.parse_optional(Some(*value))
    }
}

impl SchemaLike<Option<String>> for StringSchema {
    fn parse(&self, value: &Option<String>) -> ValidationResult {
        self.parse_optional(value.as_deref())
    }
}

impl<'a> SchemaLike<Option<&'a str>> for StringSchema {
    fn parse(&self, value: &Option<&'a str>) -> ValidationResult {
        self.parse_optional(*value)
    }
}

impl SchemaLike<Value> for StringSchema {
    fn parse(&self, value: &Value) -> ValidationResult {
        match value {
            Value::String(s) => self.parse_optional(Some(s.as_str())),
            Value::Null => self.parse_optional(None),
            _ => ValidationResult::failure("Expected string"),
        }
    }
}
