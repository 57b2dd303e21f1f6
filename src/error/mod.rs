//! Error types for schema construction.
//!
//! Validation failures are never errors in this crate: they are reported as
//! [`ValidationResult`](crate::ValidationResult) values. The types here cover
//! misuse of the builder API, which is reported as soon as a schema is built.

mod build_error;

pub use build_error::SchemaBuildError;

pub(crate) use build_error::check_field_name;
