//! Lexical checks for FHIR primitive values and unknown-field suggestions.
//!
//! Patterns follow <https://www.hl7.org/fhir/datatypes.html#primitive>.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::types::{FhirSchema, PrimitiveType};

const YEAR: &str = r"([0-9]([0-9]([0-9][1-9]|[1-9]0)|[1-9]00)|[1-9]000)";
const TIME: &str = r"([01][0-9]|2[0-3]):[0-5][0-9]:([0-5][0-9]|60)(\.[0-9]{1,9})?";
const ZONE: &str = r"(Z|(\+|-)((0[0-9]|1[0-3]):[0-5][0-9]|14:00))";

/// date: YYYY, YYYY-MM, YYYY-MM-DD
static DATE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"^{YEAR}(-(0[1-9]|1[0-2])(-(0[1-9]|[1-2][0-9]|3[0-1]))?)?$"
    ))
    .expect("Invalid date regex")
});

/// dateTime: a date, or a full date-time with timezone
static DATETIME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"^{YEAR}(-(0[1-9]|1[0-2])(-(0[1-9]|[1-2][0-9]|3[0-1])(T{TIME}{ZONE})?)?)?$"
    ))
    .expect("Invalid dateTime regex")
});

/// instant: YYYY-MM-DDThh:mm:ss(.sss)+zz:zz
static INSTANT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"^{YEAR}-(0[1-9]|1[0-2])-(0[1-9]|[1-2][0-9]|3[0-1])T{TIME}{ZONE}$"
    ))
    .expect("Invalid instant regex")
});

static TIME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!("^{TIME}$")).expect("Invalid time regex"));

static ID_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9\-\.]{1,64}$").expect("Invalid id regex"));

static CODE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s]+( [^\s]+)*$").expect("Invalid code regex"));

static URI_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\S+$").expect("Invalid uri regex"));

/// Check one value against a primitive kind. The error is a human-readable
/// reason, reported by the engine as a type mismatch.
pub fn check_primitive(kind: PrimitiveType, value: &Value) -> Result<(), String> {
    match kind {
        PrimitiveType::Boolean => value
            .is_boolean()
            .then_some(())
            .ok_or_else(|| expected_json(kind, value)),
        PrimitiveType::Integer => check_integer(kind, value, i32::MIN as i64),
        PrimitiveType::PositiveInt => check_integer(kind, value, 1),
        PrimitiveType::UnsignedInt => check_integer(kind, value, 0),
        PrimitiveType::Decimal => value
            .is_number()
            .then_some(())
            .ok_or_else(|| expected_json(kind, value)),
        _ => {
            let Some(text) = value.as_str() else {
                return Err(expected_json(kind, value));
            };
            check_text(kind, text)
        }
    }
}

fn check_integer(kind: PrimitiveType, value: &Value, min: i64) -> Result<(), String> {
    let Some(number) = value.as_i64() else {
        return Err(expected_json(kind, value));
    };
    if number < min || number > i32::MAX as i64 {
        return Err(format!("{number} is out of range for {kind}"));
    }
    Ok(())
}

fn check_text(kind: PrimitiveType, text: &str) -> Result<(), String> {
    if text.is_empty() {
        return Err(format!("empty string is not a valid {kind}"));
    }
    let ok = match kind {
        PrimitiveType::String | PrimitiveType::Markdown => true,
        PrimitiveType::Code => CODE_REGEX.is_match(text),
        PrimitiveType::Id => ID_REGEX.is_match(text),
        PrimitiveType::Uri | PrimitiveType::Canonical => URI_REGEX.is_match(text),
        PrimitiveType::Url => url::Url::parse(text).is_ok(),
        PrimitiveType::Date => DATE_REGEX.is_match(text),
        PrimitiveType::DateTime => DATETIME_REGEX.is_match(text),
        PrimitiveType::Instant => INSTANT_REGEX.is_match(text),
        PrimitiveType::Time => TIME_REGEX.is_match(text),
        PrimitiveType::Xhtml => text.trim_start().starts_with("<div"),
        _ => false,
    };
    if ok {
        Ok(())
    } else {
        Err(format!("'{text}' is not a valid {kind}"))
    }
}

fn expected_json(kind: PrimitiveType, value: &Value) -> String {
    format!(
        "expected {} ({kind}), found {}",
        kind.json_type(),
        json_type_name(value)
    )
}

pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Known element names that look like `target`, best match first.
pub fn suggest_fields(schema: &FhirSchema, target: &str) -> Vec<String> {
    let target_lower = target.to_lowercase();
    let target_prefix: String = target_lower.chars().take(3).collect();

    let mut scored: Vec<(i32, &String)> = schema
        .elements
        .keys()
        .filter_map(|name| {
            let field_lower = name.to_lowercase();
            let mut score = 0;
            if field_lower == target_lower {
                score += 1000;
            }
            if field_lower.starts_with(&target_lower) || target_lower.starts_with(&field_lower) {
                score += 100;
            }
            if field_lower.contains(&target_lower) || target_lower.contains(&field_lower) {
                score += 50;
            }
            if target_prefix.chars().count() == 3 && field_lower.starts_with(&target_prefix) {
                score += 30;
            }
            (score > 0).then_some((score, name))
        })
        .collect();

    scored.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.cmp(b.1)));
    scored.into_iter().take(3).map(|(_, name)| name.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FhirSchemaElement;
    use serde_json::json;

    #[test]
    fn test_dates() {
        for ok in ["2024", "2024-02", "2024-02-29"] {
            assert!(check_primitive(PrimitiveType::Date, &json!(ok)).is_ok(), "{ok}");
        }
        for bad in ["24", "2024-13", "2024-02-29T10:00:00Z", ""] {
            assert!(check_primitive(PrimitiveType::Date, &json!(bad)).is_err(), "{bad}");
        }
    }

    #[test]
    fn test_datetime_requires_zone_with_time() {
        assert!(check_primitive(PrimitiveType::DateTime, &json!("2024-01-15T10:30:00Z")).is_ok());
        assert!(
            check_primitive(PrimitiveType::DateTime, &json!("2024-01-15T10:30:00+01:00")).is_ok()
        );
        assert!(check_primitive(PrimitiveType::DateTime, &json!("2024-01-15T10:30:00")).is_err());
        assert!(check_primitive(PrimitiveType::Instant, &json!("2024-01-15")).is_err());
        assert!(
            check_primitive(PrimitiveType::Instant, &json!("2024-01-15T10:30:00.123Z")).is_ok()
        );
    }

    #[test]
    fn test_integers() {
        assert!(check_primitive(PrimitiveType::Integer, &json!(-5)).is_ok());
        assert!(check_primitive(PrimitiveType::Integer, &json!(1.5)).is_err());
        assert!(check_primitive(PrimitiveType::Integer, &json!(3_000_000_000i64)).is_err());
        assert!(check_primitive(PrimitiveType::PositiveInt, &json!(0)).is_err());
        assert!(check_primitive(PrimitiveType::UnsignedInt, &json!(0)).is_ok());
        assert!(check_primitive(PrimitiveType::Decimal, &json!(1.5)).is_ok());
        assert!(check_primitive(PrimitiveType::Decimal, &json!("1.5")).is_err());
    }

    #[test]
    fn test_strings_and_codes() {
        assert!(check_primitive(PrimitiveType::String, &json!("")).is_err());
        assert!(check_primitive(PrimitiveType::String, &json!(12)).is_err());
        assert!(check_primitive(PrimitiveType::Code, &json!(" active")).is_err());
        assert!(check_primitive(PrimitiveType::Code, &json!("in-progress")).is_ok());
        assert!(check_primitive(PrimitiveType::Id, &json!("a/b")).is_err());
        assert!(check_primitive(PrimitiveType::Uri, &json!("http://loinc.org")).is_ok());
        assert!(check_primitive(PrimitiveType::Uri, &json!("has space")).is_err());
        assert!(check_primitive(PrimitiveType::Url, &json!("not a url")).is_err());
        assert!(check_primitive(PrimitiveType::Xhtml, &json!("<div>hi</div>")).is_ok());
    }

    #[test]
    fn test_suggestions() {
        let schema = crate::types::FhirSchema::backbone("Test")
            .with_element("status", FhirSchemaElement::primitive(PrimitiveType::Code))
            .with_element("statusReason", FhirSchemaElement::complex("CodeableConcept"));
        let suggestions = suggest_fields(&schema, "statu");
        assert_eq!(suggestions[0], "status");
        assert!(suggest_fields(&schema, "zzz").is_empty());
    }
}
