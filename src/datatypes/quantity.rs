use serde::{Deserialize, Serialize};

use super::Decimal;
use super::element as el;
use crate::types::FhirSchema;

code_enum! {
    QuantityComparator = "http://hl7.org/fhir/ValueSet/quantity-comparator" {
        LessThan => "<",
        LessOrEqual => "<=",
        GreaterOrEqual => ">=",
        GreaterThan => ">",
    }
}

/// [Quantity](<https://hl7.org/fhir/R4/datatypes.html#Quantity>)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparator: Option<QuantityComparator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl Quantity {
    /// A UCUM quantity.
    pub fn ucum(value: impl Into<Decimal>, code: impl Into<String>) -> Self {
        let code = code.into();
        Self {
            value: Some(value.into()),
            unit: Some(code.clone()),
            system: Some("http://unitsofmeasure.org".to_string()),
            code: Some(code),
            ..Default::default()
        }
    }
}

/// Quantity without a comparator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimpleQuantity {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

pub type Age = Quantity;
pub type Duration = Quantity;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Range {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub low: Option<SimpleQuantity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high: Option<SimpleQuantity>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ratio {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numerator: Option<Quantity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub denominator: Option<Quantity>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Money {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

/// A series of measurements taken by a device.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SampledData {
    pub origin: SimpleQuantity,
    pub period: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub factor: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lower_limit: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upper_limit: Option<Decimal>,
    pub dimensions: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}

fhir_type!(Quantity, SimpleQuantity, Range, Ratio, Money, SampledData);

fn quantity_schema(name: &str) -> FhirSchema {
    FhirSchema::complex_type(name)
        .with_element("value", el::decimal())
        .with_element("comparator", el::bound::<QuantityComparator>())
        .with_element("unit", el::string())
        .with_element("system", el::uri())
        .with_element("code", el::code())
}

pub(crate) fn schemas() -> Vec<FhirSchema> {
    vec![
        quantity_schema("Quantity"),
        quantity_schema("Age"),
        quantity_schema("Duration"),
        FhirSchema::complex_type("SimpleQuantity")
            .with_element("value", el::decimal())
            .with_element("unit", el::string())
            .with_element("system", el::uri())
            .with_element("code", el::code()),
        FhirSchema::complex_type("Range")
            .with_element("low", el::of("SimpleQuantity"))
            .with_element("high", el::of("SimpleQuantity")),
        FhirSchema::complex_type("Ratio")
            .with_element("numerator", el::of("Quantity"))
            .with_element("denominator", el::of("Quantity")),
        FhirSchema::complex_type("Money")
            .with_element("value", el::decimal())
            .with_element("currency", el::code()),
        FhirSchema::complex_type("SampledData")
            .with_element("origin", el::of("SimpleQuantity").required())
            .with_element("period", el::decimal().required())
            .with_element("factor", el::decimal())
            .with_element("lowerLimit", el::decimal())
            .with_element("upperLimit", el::decimal())
            .with_element("dimensions", el::positive_int().required())
            .with_element("data", el::string()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FhirType;
    use serde_json::json;

    #[test]
    fn test_decimal_representation_is_kept() {
        let raw = json!({"value": 37, "unit": "Cel"});
        let quantity = Quantity::from_json(&raw).unwrap();
        assert_eq!(quantity.to_json().unwrap(), raw);

        let raw = json!({"value": 37.25, "unit": "Cel"});
        assert_eq!(Quantity::from_json(&raw).unwrap().to_json().unwrap(), raw);
    }

    #[test]
    fn test_simple_quantity_has_no_comparator() {
        let raw = json!({"value": 1, "comparator": "<"});
        assert!(Quantity::from_json(&raw).is_ok());
        assert!(SimpleQuantity::from_json(&raw).is_err());
    }

    #[test]
    fn test_ucum_constructor() {
        let q = Quantity::ucum(5, "mg");
        assert_eq!(q.to_json().unwrap()["system"], "http://unitsofmeasure.org");
    }
}
