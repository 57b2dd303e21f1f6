//! Schema registry for named schema storage.
//!
//! This module provides the [`SchemaRegistry`] type that stores built
//! schemas under names so they can be shared and reused across threads.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::schema::SchemaLike;
use crate::validation::ValidationResult;

/// Type alias for the schema storage map.
type SchemaMap<T> = Arc<RwLock<HashMap<String, Arc<dyn SchemaLike<T>>>>>;

/// A thread-safe registry of named schemas over values of type `T`.
///
/// Schemas are registered once, after they are fully built, and then looked
/// up and used for validation from any thread.
///
/// # Thread Safety
///
/// The registry uses `Arc<RwLock<...>>` for thread-safe access:
/// - Multiple threads can validate concurrently (read-only access)
/// - Registration operations are serialized (write access)
///
/// Cloning a registry yields a handle to the same storage.
///
/// # Example
///
/// ```rust
/// use tripwire::{Schema, SchemaRegistry};
/// use serde_json::json;
///
/// let registry: SchemaRegistry = SchemaRegistry::new();
/// registry.register("Email", Schema::string().email()).unwrap();
/// registry.register("Age", Schema::number().positive()).unwrap();
///
/// let result = registry.parse("Email", &json!("john@example.com")).unwrap();
/// assert!(result.is_valid());
///
/// let result = registry.parse("Age", &json!(-5)).unwrap();
/// assert_eq!(result.error(), Some("Number must be positive"));
/// ```
pub struct SchemaRegistry<T: ?Sized = serde_json::Value> {
    schemas: SchemaMap<T>,
}

impl<T: ?Sized> SchemaRegistry<T> {
    /// Creates a new empty schema registry.
    pub fn new() -> Self {
        Self {
            schemas: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Registers a schema with the given name.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::DuplicateName` if the name is already registered.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tripwire::{Schema, SchemaRegistry};
    ///
    /// let registry: SchemaRegistry<str> = SchemaRegistry::new();
    /// registry.register("Email", Schema::string().email()).unwrap();
    ///
    /// // Duplicate registration fails
    /// assert!(registry.register("Email", Schema::string()).is_err());
    /// ```
    pub fn register<S>(&self, name: impl Into<String>, schema: S) -> Result<(), RegistryError>
    where
        S: SchemaLike<T> + 'static,
    {
        let name = name.into();
        let mut schemas = self.schemas.write();

        if schemas.contains_key(&name) {
            return Err(RegistryError::DuplicateName(name));
        }

        tracing::debug!(schema = %name, "registered schema");
        schemas.insert(name, Arc::new(schema));
        Ok(())
    }

    /// Retrieves a schema by name.
    ///
    /// Returns `None` if no schema with the given name is registered.
    pub fn get(&self, name: &str) -> Option<Arc<dyn SchemaLike<T>>> {
        self.schemas.read().get(name).cloned()
    }

    /// Returns true if a schema with the given name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.schemas.read().contains_key(name)
    }

    /// Returns the number of registered schemas.
    pub fn len(&self) -> usize {
        self.schemas.read().len()
    }

    /// Returns true if no schemas are registered.
    pub fn is_empty(&self) -> bool {
        self.schemas.read().is_empty()
    }

    /// Validates a value against a named schema.
    ///
    /// The read lock is released before validation runs, so long validations
    /// do not block registration.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::SchemaNotFound` if the schema name doesn't exist.
    pub fn parse(&self, schema_name: &str, value: &T) -> Result<ValidationResult, RegistryError> {
        let schema = self
            .get(schema_name)
            .ok_or_else(|| RegistryError::SchemaNotFound(schema_name.to_string()))?;

        Ok(schema.parse(value))
    }
}

impl<T: ?Sized> Default for SchemaRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> Clone for SchemaRegistry<T> {
    fn clone(&self) -> Self {
        Self {
            schemas: Arc::clone(&self.schemas),
        }
    }
}

impl<T: ?Sized> fmt::Debug for SchemaRegistry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let schemas = self.schemas.read();
        let mut names: Vec<_> = schemas.keys().collect();
        names.sort();
        f.debug_struct("SchemaRegistry")
            .field("schemas", &names)
            .finish()
    }
}

/// Errors that can occur during registry operations.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// Attempted to register a schema with a name that already exists.
    #[error("schema '{0}' already registered")]
    DuplicateName(String),

    /// Attempted to validate with a schema name that doesn't exist.
    #[error("schema '{0}' not found")]
    SchemaNotFound(String),
}
