// Choice group ("value[x]") exclusivity

use serde_json::{Map, Value};

use super::FhirSchema;

/// A choice group with more than one alternative populated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceConflict {
    pub group: String,
    pub populated: Vec<String>,
}

impl ChoiceConflict {
    /// Group name as written in FHIR definitions, `onset[x]`.
    pub fn display_name(&self) -> String {
        choice_display_name(&self.group)
    }
}

pub fn choice_display_name(group: &str) -> String {
    format!("{group}[x]")
}

/// Alternatives of one group present in `object`, in declaration order.
pub fn populated_alternatives<'a>(
    object: &Map<String, Value>,
    alternatives: &'a [String],
) -> Vec<&'a str> {
    alternatives
        .iter()
        .filter(|name| object.contains_key(name.as_str()))
        .map(String::as_str)
        .collect()
}

/// Check every choice group of `schema` against `object`. Zero or one
/// populated alternative is fine; anything more is a conflict.
pub fn check_choice_groups(schema: &FhirSchema, object: &Map<String, Value>) -> Vec<ChoiceConflict> {
    schema
        .choices
        .iter()
        .filter_map(|(group, alternatives)| {
            let populated = populated_alternatives(object, alternatives);
            (populated.len() > 1).then(|| ChoiceConflict {
                group: group.clone(),
                populated: populated.into_iter().map(str::to_string).collect(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FhirSchemaElement, PrimitiveType};
    use serde_json::json;

    fn schema() -> FhirSchema {
        FhirSchema::backbone("Test").with_choice(
            "onset",
            [
                ("onsetDateTime", FhirSchemaElement::primitive(PrimitiveType::DateTime)),
                ("onsetString", FhirSchemaElement::primitive(PrimitiveType::String)),
                ("onsetPeriod", FhirSchemaElement::complex("Period")),
            ],
        )
    }

    fn object(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_no_alternative_is_fine() {
        assert!(check_choice_groups(&schema(), &object(json!({}))).is_empty());
    }

    #[test]
    fn test_single_alternative_is_fine() {
        let obj = object(json!({"onsetString": "childhood"}));
        assert!(check_choice_groups(&schema(), &obj).is_empty());
    }

    #[test]
    fn test_two_alternatives_conflict() {
        let obj = object(json!({"onsetString": "childhood", "onsetDateTime": "2001"}));
        let conflicts = check_choice_groups(&schema(), &obj);
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].display_name(), "onset[x]");
        assert_eq!(conflicts[0].populated, vec!["onsetDateTime", "onsetString"]);
    }
}
