//! Object schema validation.
//!
//! This module provides [`ObjectSchema`] for validating records field by
//! field. Each field pairs a name with an accessor and a sub-schema; a field
//! failure is reported as `"{field}: {error}"`.

use std::fmt;

use indexmap::IndexMap;

use crate::error::{check_field_name, SchemaBuildError};
use crate::rule::Rule;
use crate::validation::ValidationResult;

use super::rules::RuleSchema;
use super::traits::SchemaLike;

/// Reads one field off a candidate value, validates it and prefixes failures.
type FieldValidator<T> = Box<dyn Fn(&T) -> ValidationResult + Send + Sync>;

/// A schema for validating values of a record type `T`.
///
/// Validation runs in two phases, each stopping at its first failure:
///
/// 1. object-level rules added with [`rule`](ObjectSchema::rule),
///    [`refine`](ObjectSchema::refine) or [`custom`](ObjectSchema::custom),
///    in the order they were added;
/// 2. field schemas added with [`property`](ObjectSchema::property), in the
///    order the fields were registered.
///
/// An object-level failure is returned as is. A field failure is prefixed
/// with the field name.
///
/// # Example
///
/// ```rust
/// use tripwire::{Schema, SchemaLike};
///
/// struct Person {
///     name: String,
///     age: i64,
///     email: String,
/// }
///
/// let schema = Schema::object::<Person>()
///     .property("Name", |p| &p.name, Schema::string().not_empty().min_len(2).max_len(50))?
///     .property("Age", |p| &p.age, Schema::number().positive().min(1).max(120))?
///     .property("Email", |p| &p.email, Schema::string().email())?;
///
/// let valid = Person {
///     name: "John Doe".to_string(),
///     age: 30,
///     email: "john@example.com".to_string(),
/// };
/// assert!(schema.parse(&valid).is_valid());
///
/// let invalid = Person {
///     name: "J".to_string(),
///     age: -5,
///     email: "invalid-email".to_string(),
/// };
/// assert_eq!(
///     schema.parse(&invalid).error(),
///     Some("Name: String must be at least 2 characters")
/// );
/// # Ok::<(), tripwire::SchemaBuildError>(())
/// ```
pub struct ObjectSchema<T> {
    rules: RuleSchema<T>,
    fields: IndexMap<String, FieldValidator<T>>,
}

impl<T: 'static> ObjectSchema<T> {
    /// Creates a new object schema with no rules and no fields.
    pub fn new() -> Self {
        Self {
            rules: RuleSchema::new(),
            fields: IndexMap::new(),
        }
    }

    /// Registers a field.
    ///
    /// `name` is the label used in error messages, `accessor` reads the
    /// field from a candidate value, and `schema` validates what it reads.
    ///
    /// # Errors
    ///
    /// Returns an error if `name` is empty, is not a simple field name
    /// (letters, digits and `_`, not starting with a digit), or is already
    /// registered on this schema.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tripwire::{Schema, SchemaBuildError, SchemaLike};
    ///
    /// struct Account {
    ///     nickname: Option<String>,
    /// }
    ///
    /// let schema = Schema::object::<Account>()
    ///     .property("nickname", |a| &a.nickname, Schema::string().not_empty())?;
    ///
    /// // A missing value is validated, not dereferenced.
    /// assert_eq!(
    ///     schema.parse(&Account { nickname: None }).error(),
    ///     Some("nickname: String cannot be empty")
    /// );
    ///
    /// // Registering the same name twice is a construction error.
    /// let duplicate = schema.property("nickname", |a| &a.nickname, Schema::string());
    /// assert!(matches!(duplicate, Err(SchemaBuildError::DuplicateField(_))));
    /// # Ok::<(), SchemaBuildError>(())
    /// ```
    pub fn property<V, F, S>(
        mut self,
        name: impl Into<String>,
        accessor: F,
        schema: S,
    ) -> Result<Self, SchemaBuildError>
    where
        V: ?Sized,
        F: Fn(&T) -> &V + Send + Sync + 'static,
        S: SchemaLike<V> + 'static,
    {
        let name = name.into();
        check_field_name(&name)?;
        if self.fields.contains_key(&name) {
            return Err(SchemaBuildError::DuplicateField(name));
        }

        tracing::trace!(field = %name, "registering field");

        let field = name.clone();
        let validator: FieldValidator<T> =
            Box::new(move |value: &T| schema.parse(accessor(value)).prefixed(&field));
        self.fields.insert(name, validator);
        Ok(self)
    }

    /// Appends an object-level rule.
    pub fn rule<R>(mut self, rule: R) -> Self
    where
        R: Rule<T> + 'static,
    {
        self.rules = self.rules.rule(rule);
        self
    }

    /// Appends an object-level rule that fails with `message` when
    /// `predicate` returns false.
    ///
    /// Object-level rules run before any field is checked, which makes them
    /// the place for cross-field constraints.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tripwire::{Schema, SchemaLike};
    ///
    /// struct Booking {
    ///     nights: i64,
    ///     guests: i64,
    /// }
    ///
    /// let schema = Schema::object::<Booking>()
    ///     .refine(|b| b.guests <= b.nights * 4, "Too many guests for the stay")
    ///     .property("nights", |b| &b.nights, Schema::number().positive())?;
    ///
    /// assert_eq!(
    ///     schema.parse(&Booking { nights: 0, guests: 3 }).error(),
    ///     Some("Too many guests for the stay")
    /// );
    /// # Ok::<(), tripwire::SchemaBuildError>(())
    /// ```
    pub fn refine<F>(mut self, predicate: F, message: impl Into<String>) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.rules = self.rules.refine(predicate, message);
        self
    }

    /// Appends an object-level rule backed by a function returning its own
    /// result.
    pub fn custom<F>(mut self, check: F) -> Self
    where
        F: Fn(&T) -> ValidationResult + Send + Sync + 'static,
    {
        self.rules = self.rules.custom(check);
        self
    }
}

impl<T> ObjectSchema<T> {
    /// Returns the number of registered fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if no fields are registered.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns true if a field with this name is registered.
    pub fn contains_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }
}

impl<T: 'static> Default for ObjectSchema<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for ObjectSchema<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectSchema")
            .field("rules", &self.rules)
            .field("fields", &self.fields.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl<T> SchemaLike<T> for ObjectSchema<T> {
    fn parse(&self, value: &T) -> ValidationResult {
        let result = self.rules.parse(value);
        if !result.is_valid() {
            tracing::debug!(error = ?result.error(), "object rule failed");
            return result;
        }

        for (name, validate) in &self.fields {
            let result = validate(value);
            if !result.is_valid() {
                tracing::debug!(field = %name, error = ?result.error(), "field failed");
                return result;
            }
        }

        ValidationResult::success()
    }
}
