mod common;

use common::nested_composition;
use octofhir_resource_schema::*;
use pretty_assertions::assert_eq;
use std::thread;

/// Deeply nested `serde_json::Value`s recurse when dropped; give the
/// worker enough stack for the fixture itself.
fn with_big_stack<F: FnOnce() + Send + 'static>(f: F) {
    thread::Builder::new()
        .stack_size(64 * 1024 * 1024)
        .spawn(f)
        .unwrap()
        .join()
        .unwrap();
}

#[test]
fn test_three_levels_round_trip() {
    let raw = nested_composition(3);
    let composition = Composition::from_json(&raw).unwrap();
    assert_eq!(composition.section[0].depth(), 3);
    assert_eq!(
        composition.section[0].section[0].section[0].title.as_deref(),
        Some("level-3")
    );
    assert_eq!(composition.to_json().unwrap(), raw);
}

#[test]
fn test_depth_limit_is_inclusive() {
    let validator = FhirSchemaValidator::builtin();
    assert_eq!(validator.config().max_depth, DEFAULT_MAX_DEPTH);

    let at_limit = nested_composition(DEFAULT_MAX_DEPTH);
    assert!(validator.validate(&at_limit).is_valid());

    let past_limit = nested_composition(DEFAULT_MAX_DEPTH + 1);
    let result = validator.validate(&past_limit);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].kind, ValidationErrorKind::RecursionDepthExceeded);
    assert!(result.errors[0].path.ends_with("section[0]"));
    assert_eq!(
        result.errors[0].path.matches("section[0]").count(),
        DEFAULT_MAX_DEPTH + 1
    );
}

#[test]
fn test_ten_thousand_levels_fail_cleanly() {
    with_big_stack(|| {
        let raw = nested_composition(10_000);
        let err = Composition::from_json(&raw).unwrap_err();
        let result = err.validation_result().unwrap();
        assert_eq!(
            result.errors.iter().map(|e| e.kind).collect::<Vec<_>>(),
            vec![ValidationErrorKind::RecursionDepthExceeded]
        );
    });
}

#[test]
fn test_custom_depth_limit() {
    let validator = FhirSchemaValidator::new(SchemaRegistry::builtin().clone())
        .with_config(ValidatorConfig::default().with_max_depth(4));
    assert!(validator.validate(&nested_composition(4)).is_valid());
    assert!(
        validator
            .validate(&nested_composition(5))
            .has_error(ValidationErrorKind::RecursionDepthExceeded)
    );
}

#[test]
fn test_depth_counts_datatypes_too() {
    // Narrative at the deepest allowed section sits one level further down.
    let mut raw = nested_composition(3);
    raw["section"][0]["section"][0]["section"][0]["text"] =
        serde_json::json!({"status": "empty", "div": "<div>-</div>"});
    let validator = FhirSchemaValidator::new(SchemaRegistry::builtin().clone())
        .with_config(ValidatorConfig::default().with_max_depth(3));
    let result = validator.validate(&raw);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].path, "section[0].section[0].section[0].text");
}
