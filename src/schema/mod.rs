//! Schema definitions for validation.
//!
//! This module provides schema types for validating values. Every schema
//! evaluates its rules in the order they were added and stops at the first
//! failure, so a result carries exactly one error.
//!
//! # Example
//!
//! ```rust
//! use tripwire::{Schema, SchemaLike};
//!
//! let schema = Schema::string().min_len(1).max_len(100);
//!
//! assert!(schema.parse("hello").is_valid());
//! assert!(!schema.parse("").is_valid());
//! ```

mod numeric;
mod object;
mod rules;
mod string;
mod traits;

pub use numeric::{NumberRule, NumberSchema};
pub use object::ObjectSchema;
pub use rules::RuleSchema;
pub use string::{StringRule, StringSchema};
pub use traits::SchemaLike;

/// Entry point for creating validation schemas.
///
/// `Schema` provides factory methods for creating the different schema
/// types. Each returned schema starts empty and is configured through a
/// builder chain.
///
/// # Example
///
/// ```rust
/// use tripwire::Schema;
///
/// let name = Schema::string().not_empty().min_len(2).max_len(50);
/// let age = Schema::number().positive().min(1).max(120);
/// let email = Schema::string().email();
/// ```
pub struct Schema;

impl Schema {
    /// Creates a new string schema.
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
    pub fn string() -> StringSchema {
        StringSchema::new()
    }

    /// Creates a new number schema.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tripwire::{Schema, SchemaLike};
    ///
    /// let schema = Schema::number().min(0).max(100);
    ///
    /// assert!(schema.parse(&50i64).is_valid());
    /// assert!(!schema.parse(&-5i64).is_valid());
    /// ```
    pub fn number() -> NumberSchema {
        NumberSchema::new()
    }

    /// Creates a new object schema for values of type `T`.
    ///
    /// Use [`ObjectSchema::property`] to register fields and
    /// [`ObjectSchema::refine`] for rules over the whole object.
    pub fn object<T: 'static>() -> ObjectSchema<T> {
        ObjectSchema::new()
    }

    /// Creates an empty rule list for values of type `T`.
    pub fn rules<T: ?Sized>() -> RuleSchema<T> {
        RuleSchema::new()
    }
}
