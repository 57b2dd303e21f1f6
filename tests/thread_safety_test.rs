//! Built schemas are shared read-only across threads.

use std::sync::Arc;
use std::thread;

use pretty_assertions::assert_eq;
use tripwire::batch::{all_valid, parse_batch};
use tripwire::{ObjectSchema, Schema, SchemaLike, SchemaRegistry};

struct Person {
    name: String,
    age: i64,
}

fn person_schema() -> ObjectSchema<Person> {
    Schema::object::<Person>()
        .property("Name", |p| &p.name, Schema::string().min_len(2))
        .unwrap()
        .property("Age", |p| &p.age, Schema::number().positive())
        .unwrap()
}

#[test]
fn test_schemas_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}

    assert_send_sync::<tripwire::StringSchema>();
    assert_send_sync::<tripwire::NumberSchema>();
    assert_send_sync::<ObjectSchema<Person>>();
    assert_send_sync::<SchemaRegistry>();
}

#[test]
fn test_shared_object_schema_across_threads() {
    let schema = Arc::new(person_schema());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let schema = Arc::clone(&schema);
            thread::spawn(move || {
                let person = Person {
                    name: if i % 2 == 0 { "Ann".into() } else { "A".into() },
                    age: 30,
                };
                schema.parse(&person)
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let result = handle.join().unwrap();
        if i % 2 == 0 {
            assert!(result.is_valid());
        } else {
            assert_eq!(
                result.error(),
                Some("Name: String must be at least 2 characters")
            );
        }
    }
}

#[test]
fn test_registry_shared_across_threads() {
    let registry: SchemaRegistry<str> = SchemaRegistry::new();
    registry.register("Email", Schema::string().email()).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let registry = registry.clone();
            thread::spawn(move || {
                registry
                    .register(format!("Min{}", i), Schema::string().min_len(i))
                    .unwrap();
                registry.parse("Email", "john@example.com").unwrap()
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap().is_valid());
    }
    assert_eq!(registry.len(), 5);
}

#[test]
fn test_parallel_batch_matches_sequential() {
    let schema = Schema::string().not_empty().min_len(2).max_len(5);
    let values: Vec<String> = (0..500).map(|i| "y".repeat(i % 8)).collect();

    let parallel = parse_batch(&schema, &values);
    let sequential: Vec<_> = values.iter().map(|v| schema.parse(v)).collect();

    assert_eq!(parallel, sequential);
    assert!(!all_valid(&schema, &values));
}
