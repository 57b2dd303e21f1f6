//! Parallel evaluation of one schema over many values.
//!
//! Schemas are immutable once built, so a single schema can validate
//! independent values on several threads at once. Each value gets its own
//! fail-fast result; nothing is aggregated across values.

use rayon::prelude::*;

use crate::schema::SchemaLike;
use crate::validation::ValidationResult;

/// Validates every value in `values` against `schema` in parallel.
///
/// Results are returned in the same order as `values`.
///
/// # Example
///
/// ```rust
/// use tripwire::batch::parse_batch;
/// use tripwire::Schema;
///
/// let schema = Schema::string().email();
/// let results = parse_batch(&schema, &["john@example.com", "invalid-email"]);
///
/// assert!(results[0].is_valid());
/// assert_eq!(results[1].error(), Some("Invalid email format"));
/// ```
pub fn parse_batch<T, S>(schema: &S, values: &[T]) -> Vec<ValidationResult>
where
    T: Sync,
    S: SchemaLike<T> + ?Sized,
{
    let results: Vec<_> = values.par_iter().map(|value| schema.parse(value)).collect();

    tracing::trace!(
        total = results.len(),
        invalid = results.iter().filter(|r| !r.is_valid()).count(),
        "batch parsed"
    );
    results
}

/// Returns true if every value in `values` passes `schema`.
///
/// Stops scheduling work once any value fails.
pub fn all_valid<T, S>(schema: &S, values: &[T]) -> bool
where
    T: Sync,
    S: SchemaLike<T> + ?Sized,
{
    values.par_iter().all(|value| schema.parse(value).is_valid())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Schema;

    #[test]
    fn test_results_keep_input_order() {
        let schema = Schema::string().min_len(2);
        let values: Vec<String> = (0..100).map(|i| "x".repeat(i % 4)).collect();

        let results = parse_batch(&schema, &values);

        assert_eq!(results.len(), values.len());
        for (value, result) in values.iter().zip(&results) {
            assert_eq!(result.is_valid(), value.len() >= 2, "value {:?}", value);
        }
    }

    #[test]
    fn test_empty_batch() {
        let schema = Schema::string().not_empty();
        let values: [&str; 0] = [];
        assert!(parse_batch(&schema, &values).is_empty());
        assert!(all_valid(&schema, &values));
    }

    #[test]
    fn test_numbers() {
        let schema = Schema::number().positive().max(120);
        let results = parse_batch(&schema, &[30i64, -5, 121]);

        assert!(results[0].is_valid());
        assert_eq!(results[1].error(), Some("Number must be positive"));
        assert_eq!(results[2].error(), Some("Number must be at most 120"));
    }

    #[test]
    fn test_all_valid() {
        let schema = Schema::string().email();
        assert!(all_valid(&schema, &["a@b.c", "john@example.com"]));
        assert!(!all_valid(&schema, &["a@b.c", "nope"]));
    }
}
