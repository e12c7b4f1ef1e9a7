use serde::{Deserialize, Serialize};

use crate::datatypes::element as el;
use crate::datatypes::{
    BackboneElement, CodeableConcept, DomainResource, FhirDateTime, Identifier, Narrative, Period,
    Reference,
};
use crate::model::ResourceTag;
use crate::types::FhirSchema;

code_enum! {
    CompositionStatus = "http://hl7.org/fhir/ValueSet/composition-status" {
        Preliminary => "preliminary",
        Final => "final",
        Amended => "amended",
        EnteredInError => "entered-in-error",
    }
}

code_enum! {
    CompositionAttestationMode = "http://hl7.org/fhir/ValueSet/composition-attestation-mode" {
        Personal => "personal",
        Professional => "professional",
        Legal => "legal",
        Official => "official",
    }
}

code_enum! {
    DocumentRelationshipType = "http://hl7.org/fhir/ValueSet/document-relationship-type" {
        Replaces => "replaces",
        Transforms => "transforms",
        Signs => "signs",
        Appends => "appends",
    }
}

code_enum! {
    SectionMode = "http://hl7.org/fhir/ValueSet/list-mode" {
        Working => "working",
        Snapshot => "snapshot",
        Changes => "changes",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositionAttester {
    #[serde(flatten)]
    pub backbone: BackboneElement,
    pub mode: CompositionAttestationMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<FhirDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub party: Option<Reference>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CompositionRelatesToTarget {
    #[serde(rename = "targetIdentifier")]
    Identifier(Identifier),
    #[serde(rename = "targetReference")]
    Reference(Reference),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositionRelatesTo {
    #[serde(flatten)]
    pub backbone: BackboneElement,
    pub code: DocumentRelationshipType,
    #[serde(flatten)]
    pub target: Option<CompositionRelatesToTarget>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompositionEvent {
    #[serde(flatten)]
    pub backbone: BackboneElement,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub code: Vec<CodeableConcept>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub detail: Vec<Reference>,
}

/// A section of the document. Sections nest to arbitrary depth; the
/// validator's nesting limit bounds what is accepted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositionSection {
    #[serde(flatten)]
    pub backbone: BackboneElement,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<CodeableConcept>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub author: Vec<Reference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus: Option<Reference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<Narrative>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<SectionMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ordered_by: Option<CodeableConcept>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entry: Vec<Reference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_reason: Option<CodeableConcept>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub section: Vec<CompositionSection>,
}

impl CompositionSection {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    /// Levels of nested sections below and including this one.
    pub fn depth(&self) -> usize {
        1 + self.section.iter().map(Self::depth).max().unwrap_or(0)
    }
}

/// [Composition](<https://hl7.org/fhir/R4/composition.html>)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Composition {
    pub resource_type: ResourceTag<Composition>,
    #[serde(flatten)]
    pub domain: DomainResource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Identifier>,
    pub status: CompositionStatus,
    pub r#type: CodeableConcept,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub category: Vec<CodeableConcept>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<Reference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encounter: Option<Reference>,
    pub date: FhirDateTime,
    pub author: Vec<Reference>,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidentiality: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attester: Vec<CompositionAttester>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custodian: Option<Reference>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub relates_to: Vec<CompositionRelatesTo>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub event: Vec<CompositionEvent>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub section: Vec<CompositionSection>,
}

fhir_type!(
    CompositionAttester,
    CompositionRelatesTo,
    CompositionEvent,
    CompositionSection
);
fhir_resource!(Composition);

pub(crate) fn schemas() -> Vec<FhirSchema> {
    vec![
        FhirSchema::resource("Composition")
            .with_description("A set of healthcare-related information assembled into a document")
            .with_element("identifier", el::of("Identifier"))
            .with_element("status", el::bound::<CompositionStatus>().required())
            .with_element("type", el::concept().required())
            .with_element("category", el::concept().array())
            .with_element("subject", el::reference())
            .with_element("encounter", el::reference())
            .with_element("date", el::date_time().required())
            .with_element("author", el::reference().array().required())
            .with_element("title", el::string().required())
            .with_element("confidentiality", el::code())
            .with_element("attester", el::of("CompositionAttester").array())
            .with_element("custodian", el::reference())
            .with_element("relatesTo", el::of("CompositionRelatesTo").array())
            .with_element("event", el::of("CompositionEvent").array())
            .with_element("section", el::of("CompositionSection").array()),
        FhirSchema::backbone("CompositionAttester")
            .with_element("mode", el::bound::<CompositionAttestationMode>().required())
            .with_element("time", el::date_time())
            .with_element("party", el::reference()),
        FhirSchema::backbone("CompositionRelatesTo")
            .with_element("code", el::bound::<DocumentRelationshipType>().required())
            .with_choice(
                "target",
                [
                    ("targetIdentifier", el::of("Identifier")),
                    ("targetReference", el::reference()),
                ],
            ),
        FhirSchema::backbone("CompositionEvent")
            .with_element("code", el::concept().array())
            .with_element("period", el::of("Period"))
            .with_element("detail", el::reference().array()),
        FhirSchema::backbone("CompositionSection")
            .with_element("title", el::string())
            .with_element("code", el::concept())
            .with_element("author", el::reference().array())
            .with_element("focus", el::reference())
            .with_element("text", el::of("Narrative"))
            .with_element("mode", el::bound::<SectionMode>())
            .with_element("orderedBy", el::concept())
            .with_element("entry", el::reference().array())
            .with_element("emptyReason", el::concept())
            .with_element("section", el::of("CompositionSection").array()),
    ]
}
