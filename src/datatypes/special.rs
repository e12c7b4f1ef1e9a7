use serde::{Deserialize, Serialize};

use super::element as el;
use super::{
    CodeableConcept, Coding, Decimal, FhirDate, FhirDateTime, FhirInstant, Period, Quantity,
    Reference,
};
use crate::types::FhirSchema;

code_enum! {
    NarrativeStatus = "http://hl7.org/fhir/ValueSet/narrative-status" {
        Generated => "generated",
        Extensions => "extensions",
        Additional => "additional",
        Empty => "empty",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ExtensionValue {
    #[serde(rename = "valueString")]
    String(String),
    #[serde(rename = "valueInteger")]
    Integer(i32),
    #[serde(rename = "valueBoolean")]
    Boolean(bool),
    #[serde(rename = "valueCode")]
    Code(String),
    #[serde(rename = "valueDate")]
    Date(FhirDate),
    #[serde(rename = "valueDateTime")]
    DateTime(FhirDateTime),
    #[serde(rename = "valueDecimal")]
    Decimal(Decimal),
    #[serde(rename = "valueUri")]
    Uri(String),
    #[serde(rename = "valueQuantity")]
    Quantity(Quantity),
    #[serde(rename = "valueReference")]
    Reference(Reference),
    #[serde(rename = "valueCodeableConcept")]
    CodeableConcept(CodeableConcept),
    #[serde(rename = "valueCoding")]
    Coding(Coding),
    #[serde(rename = "valuePeriod")]
    Period(Period),
}

/// [Extension](<https://hl7.org/fhir/R4/extensibility.html#Extension>)
///
/// Either carries a single `value[x]` or nested extensions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Extension {
    pub url: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,
    #[serde(flatten)]
    pub value: Option<ExtensionValue>,
}

impl Extension {
    pub fn new(url: impl Into<String>, value: ExtensionValue) -> Self {
        Self {
            url: url.into(),
            extension: Vec::new(),
            value: Some(value),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Narrative {
    pub status: NarrativeStatus,
    pub div: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<FhirInstant>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub profile: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub security: Vec<Coding>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tag: Vec<Coding>,
}

/// Occurrence schedule limited to explicit events and a named code.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Timing {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub event: Vec<FhirDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<CodeableConcept>,
}

fhir_type!(Extension, Narrative, Meta, Timing);

pub(crate) fn schemas() -> Vec<FhirSchema> {
    vec![
        FhirSchema::complex_type("Extension")
            .with_element("url", el::uri().required())
            .with_element("extension", el::of("Extension").array())
            .with_choice(
                "value",
                [
                    ("valueString", el::string()),
                    ("valueInteger", el::integer()),
                    ("valueBoolean", el::boolean()),
                    ("valueCode", el::code()),
                    ("valueDate", el::date()),
                    ("valueDateTime", el::date_time()),
                    ("valueDecimal", el::decimal()),
                    ("valueUri", el::uri()),
                    ("valueQuantity", el::of("Quantity")),
                    ("valueReference", el::reference()),
                    ("valueCodeableConcept", el::concept()),
                    ("valueCoding", el::of("Coding")),
                    ("valuePeriod", el::of("Period")),
                ],
            ),
        FhirSchema::complex_type("Narrative")
            .with_element("status", el::bound::<NarrativeStatus>().required())
            .with_element("div", el::xhtml().required()),
        FhirSchema::complex_type("Meta")
            .with_element("versionId", el::id())
            .with_element("lastUpdated", el::instant())
            .with_element("source", el::uri())
            .with_element("profile", el::canonical().array())
            .with_element("security", el::of("Coding").array())
            .with_element("tag", el::of("Coding").array()),
        FhirSchema::complex_type("Timing")
            .with_element("event", el::date_time().array())
            .with_element("code", el::concept()),
    ]
}
