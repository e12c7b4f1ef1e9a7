use serde::{Deserialize, Serialize};

use super::element as el;
use super::{FhirDateTime, Markdown};
use crate::types::FhirSchema;

code_enum! {
    /// [IdentifierUse](<https://hl7.org/fhir/R4/valueset-identifier-use.html>)
    IdentifierUse = "http://hl7.org/fhir/ValueSet/identifier-use" {
        Usual => "usual",
        Official => "official",
        Temp => "temp",
        Secondary => "secondary",
        Old => "old",
    }
}

code_enum! {
    ContactPointSystem = "http://hl7.org/fhir/ValueSet/contact-point-system" {
        Phone => "phone",
        Fax => "fax",
        Email => "email",
        Pager => "pager",
        Url => "url",
        Sms => "sms",
        Other => "other",
    }
}

code_enum! {
    ContactPointUse = "http://hl7.org/fhir/ValueSet/contact-point-use" {
        Home => "home",
        Work => "work",
        Temp => "temp",
        Old => "old",
        Mobile => "mobile",
    }
}

/// [Identifier](<https://hl7.org/fhir/R4/datatypes.html#Identifier>)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identifier {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#use: Option<IdentifierUse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<CodeableConcept>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigner: Option<Box<Reference>>,
}

impl Identifier {
    pub fn new(system: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            system: Some(system.into()),
            value: Some(value.into()),
            ..Default::default()
        }
    }
}

/// [Coding](<https://hl7.org/fhir/R4/datatypes.html#Coding>)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coding {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_selected: Option<bool>,
}

impl Coding {
    pub fn new(system: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            system: Some(system.into()),
            code: Some(code.into()),
            ..Default::default()
        }
    }
}

/// [CodeableConcept](<https://hl7.org/fhir/R4/datatypes.html#CodeableConcept>)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CodeableConcept {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub coding: Vec<Coding>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl CodeableConcept {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            coding: Vec::new(),
            text: Some(text.into()),
        }
    }

    /// True when any coding matches `system` and `code`.
    pub fn has_coding(&self, system: &str, code: &str) -> bool {
        self.coding
            .iter()
            .any(|c| c.system.as_deref() == Some(system) && c.code.as_deref() == Some(code))
    }
}

/// A weak reference; the target is never resolved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Reference {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Box<Identifier>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
}

impl Reference {
    pub fn to(reference: impl Into<String>) -> Self {
        Self {
            reference: Some(reference.into()),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Period {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<FhirDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<FhirDateTime>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AnnotationAuthor {
    #[serde(rename = "authorReference")]
    Reference(Reference),
    #[serde(rename = "authorString")]
    String(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    #[serde(flatten)]
    pub author: Option<AnnotationAuthor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<FhirDateTime>,
    pub text: Markdown,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactPoint {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<ContactPointSystem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#use: Option<ContactPointUse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,
}

fhir_type!(
    Identifier,
    Coding,
    CodeableConcept,
    Reference,
    Period,
    Annotation,
    ContactPoint
);

pub(crate) fn schemas() -> Vec<FhirSchema> {
    vec![
        FhirSchema::complex_type("Identifier")
            .with_element("use", el::bound::<IdentifierUse>())
            .with_element("type", el::concept())
            .with_element("system", el::uri())
            .with_element("value", el::string())
            .with_element("period", el::of("Period"))
            .with_element("assigner", el::reference()),
        FhirSchema::complex_type("Coding")
            .with_element("system", el::uri())
            .with_element("version", el::string())
            .with_element("code", el::code())
            .with_element("display", el::string())
            .with_element("userSelected", el::boolean()),
        FhirSchema::complex_type("CodeableConcept")
            .with_element("coding", el::of("Coding").array())
            .with_element("text", el::string()),
        FhirSchema::complex_type("Reference")
            .with_description("Weak reference to another resource")
            .with_element("reference", el::string())
            .with_element("type", el::uri())
            .with_element("identifier", el::of("Identifier"))
            .with_element("display", el::string()),
        FhirSchema::complex_type("Period")
            .with_element("start", el::date_time())
            .with_element("end", el::date_time()),
        FhirSchema::complex_type("Annotation")
            .with_choice(
                "author",
                [
                    ("authorReference", el::reference()),
                    ("authorString", el::string()),
                ],
            )
            .with_element("time", el::date_time())
            .with_element("text", el::markdown().required()),
        FhirSchema::complex_type("ContactPoint")
            .with_element("system", el::bound::<ContactPointSystem>())
            .with_element("value", el::string())
            .with_element("use", el::bound::<ContactPointUse>())
            .with_element("rank", el::positive_int())
            .with_element("period", el::of("Period")),
    ]
}
