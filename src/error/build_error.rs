//! Construction-time errors.

/// Errors raised while building a schema.
///
/// These indicate a programming error in how a schema is assembled, not a
/// problem with the data being validated, so they are returned from the
/// builder call that caused them rather than surfacing during `parse`.
///
/// # Example
///
/// ```rust
/// use tripwire::{Schema, SchemaBuildError};
///
/// struct User {
///     name: String,
/// }
///
/// let result = Schema::object::<User>()
///     .property("user.name", |u: &User| &u.name, Schema::string());
///
/// assert!(matches!(result, Err(SchemaBuildError::InvalidFieldName(_))));
/// ```
#[derive(Debug, thiserror::Error)]
pub enum SchemaBuildError {
    /// A field was registered with an empty name.
    #[error("field name must not be empty")]
    EmptyFieldName,

    /// A field name is not a plain member name (e.g. it contains a path or index).
    #[error("'{0}' is not a simple field name")]
    InvalidFieldName(String),

    /// A field with the same name is already registered on the schema.
    #[error("field '{0}' already registered")]
    DuplicateField(String),

    /// A string pattern failed to compile.
    #[error("invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

impl SchemaBuildError {
    /// Returns the field name involved in this error, if any.
    pub fn field_name(&self) -> Option<&str> {
        match self {
            SchemaBuildError::InvalidFieldName(name) | SchemaBuildError::DuplicateField(name) => {
                Some(name)
            }
            SchemaBuildError::EmptyFieldName | SchemaBuildError::InvalidPattern(_) => None,
        }
    }
}

/// Checks that `name` is usable as a field name.
///
/// A field name is a single member name: an ASCII letter or underscore
/// followed by ASCII letters, digits or underscores.
pub(crate) fn check_field_name(name: &str) -> Result<(), SchemaBuildError> {
    let mut chars = name.chars();
    let first = chars.next().ok_or(SchemaBuildError::EmptyFieldName)?;

    let valid_start = first.is_ascii_alphabetic() || first == '_';
    if !valid_start || !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(SchemaBuildError::InvalidFieldName(name.to_string()));
    }
    Ok(())
}
