//! Traits for schema polymorphism.
//!
//! This module provides the [`SchemaLike`] trait that lets different schema
//! types (string, number, object, rule lists) be composed together, e.g. as
//! the field schemas of an [`ObjectSchema`](super::ObjectSchema).

use std::sync::Arc;

use crate::validation::ValidationResult;

/// A trait for schemas that validate values of type `T`.
///
/// A schema is reusable: `parse` never mutates the schema, so the same
/// instance can validate any number of values, from any number of threads.
/// The `Send + Sync` bounds allow schemas to be shared across threads and
/// stored as trait objects like `Arc<dyn SchemaLike<T>>`.
///
/// A single schema type may implement `SchemaLike` for several input types.
/// For example [`StringSchema`](super::StringSchema) accepts `str`,
/// `String`, `Option<String>` and `serde_json::Value`.
///
/// # Example
///
/// ```rust
/// use tripwire::{Schema, SchemaLike};
///
/// let schema = Schema::string().min_len(2).max_len(50);
///
/// assert!(schema.parse("John Doe").is_valid());
///
/// let (valid, result) = schema.try_parse("J");
/// assert!(!valid);
/// assert_eq!(result.error(), Some("String must be at least 2 characters"));
/// ```
pub trait SchemaLike<T: ?Sized>: Send + Sync {
    /// Validates `value`, returning the first failure or success.
    fn parse(&self, value: &T) -> ValidationResult;

    /// Validates `value` and reports the validity flag alongside the result.
    ///
    /// This is a thin wrapper over [`SchemaLike::parse`].
    fn try_parse(&self, value: &T) -> (bool, ValidationResult) {
        let result = self.parse(value);
        (result.is_valid(), result)
    }
}

impl<T: ?Sized, S: SchemaLike<T> + ?Sized> SchemaLike<T> for Box<S> {
    fn parse(&self, value: &T) -> ValidationResult {
        (**self).parse(value)
    }
}

impl<T: ?Sized, S: SchemaLike<T> + ?Sized> SchemaLike<T> for Arc<S> {
    fn parse(&self, value: &T) -> ValidationResult {
        (**self).parse(value)
    }
}

impl<T: ?Sized, S: SchemaLike<T> + ?Sized> SchemaLike<T> for &S {
    fn parse(&self, value: &T) -> ValidationResult {
        (**self).parse(value)
    }
}
