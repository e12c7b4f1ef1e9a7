mod common;

use common::*;
use octofhir_resource_schema::*;
use proptest::prelude::*;
use proptest::sample::subsequence;
use serde_json::{Value, json};

/// One valid value per `value[x]` alternative of Observation.
fn observation_values() -> Vec<(&'static str, Value)> {
    vec![
        ("valueQuantity", json!({"value": 5.4, "unit": "mmol/l"})),
        ("valueCodeableConcept", json!({"text": "positive"})),
        ("valueString", json!("clear")),
        ("valueBoolean", json!(true)),
        ("valueInteger", json!(3)),
        ("valueRange", json!({"low": {"value": 1}, "high": {"value": 2}})),
        ("valueRatio", json!({"numerator": {"value": 1}, "denominator": {"value": 128}})),
        (
            "valueSampledData",
            json!({"origin": {"value": 0}, "period": 10, "dimensions": 1, "data": "1 2 3"}),
        ),
        ("valueTime", json!("08:30:00")),
        ("valueDateTime", json!("2020-02-02T10:00:00Z")),
        ("valuePeriod", json!({"start": "2020-02-02"})),
    ]
}

fn observation_with(values: &[(&'static str, Value)]) -> Value {
    let mut raw = json!({
        "resourceType": "Observation",
        "status": "final",
        "code": {"text": "Glucose"}
    });
    for (key, value) in values {
        raw[*key] = value.clone();
    }
    raw
}

#[test]
fn test_each_alternative_decodes_alone() {
    for (key, value) in observation_values() {
        let raw = observation_with(&[(key, value)]);
        let observation = Observation::from_json(&raw).unwrap_or_else(|e| panic!("{key}: {e}"));
        assert!(observation.value.is_some(), "{key}");
        assert_eq!(observation.to_json().unwrap(), raw, "{key}");
    }
}

#[test]
fn test_no_alternative_is_fine() {
    let observation = Observation::from_json(&observation_with(&[])).unwrap();
    assert_eq!(observation.value, None);
}

#[test]
fn test_two_alternatives_conflict() {
    let mut raw = allergy_intolerance_json();
    raw["onsetString"] = json!("childhood");
    let result = AllergyIntolerance::validate(&raw).unwrap();
    let errors: Vec<_> = result.errors_of(ValidationErrorKind::MultipleChoiceFieldsSet).collect();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].path, "onset[x]");
    assert!(errors[0].message.contains("onsetDateTime"));
    assert!(errors[0].message.contains("onsetString"));
    assert_eq!(errors[0].expected.as_ref().unwrap().len(), 5);
}

#[test]
fn test_conflict_inside_backbone() {
    let mut raw = coverage_json();
    raw["costToBeneficiary"][0]["valueQuantity"] = json!({"value": 10});
    let result = Coverage::validate(&raw).unwrap();
    let error = result
        .errors_of(ValidationErrorKind::MultipleChoiceFieldsSet)
        .next()
        .unwrap();
    assert_eq!(error.path, "costToBeneficiary[0].value[x]");
}

#[test]
fn test_independent_groups_do_not_interfere() {
    let mut raw = eligibility_response_json();
    raw["insurance"][0]["item"][0]["benefit"][0]["usedString"] = json!("none");
    assert!(CoverageEligibilityResponse::validate(&raw).unwrap().is_valid());
}

#[test]
fn test_alternative_type_is_checked() {
    let raw = observation_with(&[("valueBoolean", json!("yes"))]);
    let result = Observation::validate(&raw).unwrap();
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].kind, ValidationErrorKind::TypeMismatch);
    assert_eq!(result.errors[0].path, "valueBoolean");
}

#[test]
fn test_bare_group_name_is_unknown() {
    let raw = observation_with(&[("value", json!(1))]);
    let result = Observation::validate(&raw).unwrap();
    assert!(result.has_error(ValidationErrorKind::UnknownField));
}

#[test]
fn test_component_shares_value_choice() {
    let mut raw = observation_json();
    raw["component"][0]["valueString"] = json!("high");
    let result = Observation::validate(&raw).unwrap();
    let error = result
        .errors_of(ValidationErrorKind::MultipleChoiceFieldsSet)
        .next()
        .unwrap();
    assert_eq!(error.path, "component[0].value[x]");
}

proptest! {
    #[test]
    fn prop_at_most_one_alternative(picked in subsequence(observation_values(), 0..=4)) {
        let raw = observation_with(&picked);
        let result = Observation::validate(&raw).unwrap();
        let conflicts: Vec<_> = result
            .errors_of(ValidationErrorKind::MultipleChoiceFieldsSet)
            .collect();

        if picked.len() <= 1 {
            prop_assert!(result.is_valid(), "{}", result);
            prop_assert!(Observation::from_json(&raw).is_ok());
        } else {
            prop_assert_eq!(result.errors.len(), 1);
            prop_assert_eq!(conflicts.len(), 1);
            prop_assert_eq!(conflicts[0].path.as_str(), "value[x]");
            for (key, _) in &picked {
                prop_assert!(conflicts[0].message.contains(key));
            }
            prop_assert!(Observation::from_json(&raw).is_err());
        }
    }
}
