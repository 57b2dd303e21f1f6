//! # Tripwire
//!
//! A fluent, declarative validation library. Schemas are built from chained
//! rule calls and then used to validate any number of values. Validation is
//! fail-fast: the first rule that fails trips the schema, and its message is
//! the one reported.
//!
//! ## Core Types
//!
//! - [`Schema`]: Entry point for creating schemas
//! - [`StringSchema`], [`NumberSchema`]: Rules over strings and integers
//! - [`ObjectSchema`]: Per-field schemas over a record type, with field-name prefixed errors
//! - [`RuleSchema`]: An ordered list of caller-defined rules over any type
//! - [`ValidationResult`]: Success, or failure with one message
//! - [`SchemaBuildError`]: Misuse of the builder API, reported at construction time
//!
//! ## Example
//!
//! ```rust
//! use tripwire::{Schema, SchemaLike};
//!
//! struct Person {
//!     name: String,
//!     age: i64,
//!     email: String,
//! }
//!
//! let schema = Schema::object::<Person>()
//!     .property("Name", |p| &p.name, Schema::string().not_empty().min_len(2).max_len(50))?
//!     .property("Age", |p| &p.age, Schema::number().positive().min(1).max(120))?
//!     .property("Email", |p| &p.email, Schema::string().email())?;
//!
//! let result = schema.parse(&Person {
//!     name: "J".to_string(),
//!     age: -5,
//!     email: "invalid-email".to_string(),
//! });
//!
//! assert!(!result.is_valid());
//! assert_eq!(result.error(), Some("Name: String must be at least 2 characters"));
//! # Ok::<(), tripwire::SchemaBuildError>(())
//! ```

pub mod batch;
pub mod error;
pub mod registry;
pub mod rule;
pub mod schema;
pub mod validation;

pub use error::SchemaBuildError;
pub use registry::{RegistryError, SchemaRegistry};
pub use rule::{FnRule, Predicate, Rule};
pub use schema::{
    NumberRule, NumberSchema, ObjectSchema, RuleSchema, Schema, SchemaLike, StringRule,
    StringSchema,
};
pub use validation::ValidationResult;
