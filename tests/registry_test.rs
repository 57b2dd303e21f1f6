//! Integration tests for the named schema registry.

use pretty_assertions::assert_eq;
use serde_json::json;
use tripwire::{RegistryError, Schema, SchemaLike, SchemaRegistry};

#[test]
fn test_json_registry_mixes_schema_kinds() {
    let registry: SchemaRegistry = SchemaRegistry::new();
    registry
        .register("Name", Schema::string().not_empty().min_len(2))
        .unwrap();
    registry
        .register("Age", Schema::number().positive().max(120))
        .unwrap();
    registry
        .register(
            "Person",
            Schema::object::<serde_json::Value>()
                .property("Name", |v| &v["Name"], Schema::string().min_len(2))
                .unwrap()
                .property("Age", |v| &v["Age"], Schema::number().positive())
                .unwrap(),
        )
        .unwrap();

    assert_eq!(registry.len(), 3);
    assert!(registry.parse("Name", &json!("John")).unwrap().is_valid());
    assert_eq!(
        registry.parse("Age", &json!(-5)).unwrap().error(),
        Some("Number must be positive")
    );
    assert_eq!(
        registry
            .parse("Person", &json!({"Name": "J", "Age": 30}))
            .unwrap()
            .error(),
        Some("Name: String must be at least 2 characters")
    );
}

#[test]
fn test_lookup_returns_usable_schema() {
    let registry: SchemaRegistry<i64> = SchemaRegistry::new();
    registry.register("Age", Schema::number().min(18)).unwrap();

    let schema = registry.get("Age").unwrap();
    let (valid, result) = schema.try_parse(&12);
    assert!(!valid);
    assert_eq!(result.error(), Some("Number must be at least 18"));
}

#[test]
fn test_errors() {
    let registry: SchemaRegistry<str> = SchemaRegistry::new();
    registry.register("Email", Schema::string().email()).unwrap();

    let err = registry
        .register("Email", Schema::string())
        .unwrap_err();
    assert!(matches!(err, RegistryError::DuplicateName(_)));

    let err = registry.parse("Phone", "555").unwrap_err();
    assert_eq!(err.to_string(), "schema 'Phone' not found");
}
