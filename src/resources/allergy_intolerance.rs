use serde::{Deserialize, Serialize};

use crate::datatypes::element as el;
use crate::datatypes::{
    Age, Annotation, BackboneElement, CodeableConcept, DomainResource, FhirDateTime, Identifier,
    Period, Range, Reference,
};
use crate::model::ResourceTag;
use crate::types::FhirSchema;

code_enum! {
    /// [AllergyIntoleranceType](<https://hl7.org/fhir/R4/valueset-allergy-intolerance-type.html>)
    AllergyIntoleranceType = "http://hl7.org/fhir/ValueSet/allergy-intolerance-type" {
        Allergy => "allergy",
        Intolerance => "intolerance",
    }
}

code_enum! {
    AllergyIntoleranceCategory = "http://hl7.org/fhir/ValueSet/allergy-intolerance-category" {
        Food => "food",
        Medication => "medication",
        Environment => "environment",
        Biologic => "biologic",
    }
}

code_enum! {
    AllergyIntoleranceCriticality = "http://hl7.org/fhir/ValueSet/allergy-intolerance-criticality" {
        Low => "low",
        High => "high",
        UnableToAssess => "unable-to-assess",
    }
}

code_enum! {
    AllergyIntoleranceSeverity = "http://hl7.org/fhir/ValueSet/reaction-event-severity" {
        Mild => "mild",
        Moderate => "moderate",
        Severe => "severe",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AllergyIntoleranceOnset {
    #[serde(rename = "onsetDateTime")]
    DateTime(FhirDateTime),
    #[serde(rename = "onsetAge")]
    Age(Age),
    #[serde(rename = "onsetPeriod")]
    Period(Period),
    #[serde(rename = "onsetRange")]
    Range(Range),
    #[serde(rename = "onsetString")]
    String(String),
}

/// Adverse reaction event linked to exposure to the substance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllergyIntoleranceReaction {
    #[serde(flatten)]
    pub backbone: BackboneElement,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub substance: Option<CodeableConcept>,
    pub manifestation: Vec<CodeableConcept>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub onset: Option<FhirDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<AllergyIntoleranceSeverity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exposure_route: Option<CodeableConcept>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub note: Vec<Annotation>,
}

/// [AllergyIntolerance](<https://hl7.org/fhir/R4/allergyintolerance.html>)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllergyIntolerance {
    pub resource_type: ResourceTag<AllergyIntolerance>,
    #[serde(flatten)]
    pub domain: DomainResource,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub identifier: Vec<Identifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clinical_status: Option<CodeableConcept>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification_status: Option<CodeableConcept>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<AllergyIntoleranceType>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub category: Vec<AllergyIntoleranceCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub criticality: Option<AllergyIntoleranceCriticality>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<CodeableConcept>,
    pub patient: Reference,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encounter: Option<Reference>,
    #[serde(flatten)]
    pub onset: Option<AllergyIntoleranceOnset>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recorded_date: Option<FhirDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recorder: Option<Reference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asserter: Option<Reference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_occurrence: Option<FhirDateTime>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub note: Vec<Annotation>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reaction: Vec<AllergyIntoleranceReaction>,
}

impl AllergyIntolerance {
    pub fn new(patient: Reference) -> Self {
        Self {
            resource_type: ResourceTag::new(),
            domain: DomainResource::default(),
            identifier: Vec::new(),
            clinical_status: None,
            verification_status: None,
            r#type: None,
            category: Vec::new(),
            criticality: None,
            code: None,
            patient,
            encounter: None,
            onset: None,
            recorded_date: None,
            recorder: None,
            asserter: None,
            last_occurrence: None,
            note: Vec::new(),
            reaction: Vec::new(),
        }
    }
}

fhir_type!(AllergyIntoleranceReaction);
fhir_resource!(AllergyIntolerance);

pub(crate) fn schemas() -> Vec<FhirSchema> {
    vec![
        FhirSchema::resource("AllergyIntolerance")
            .with_description("Risk of harmful or undesirable physiological response to a substance")
            .with_element("identifier", el::of("Identifier").array())
            .with_element("clinicalStatus", el::concept())
            .with_element("verificationStatus", el::concept())
            .with_element("type", el::bound::<AllergyIntoleranceType>())
            .with_element("category", el::bound::<AllergyIntoleranceCategory>().array())
            .with_element("criticality", el::bound::<AllergyIntoleranceCriticality>())
            .with_element("code", el::concept())
            .with_element("patient", el::reference().required())
            .with_element("encounter", el::reference())
            .with_choice(
                "onset",
                [
                    ("onsetDateTime", el::date_time()),
                    ("onsetAge", el::of("Age")),
                    ("onsetPeriod", el::of("Period")),
                    ("onsetRange", el::of("Range")),
                    ("onsetString", el::string()),
                ],
            )
            .with_element("recordedDate", el::date_time())
            .with_element("recorder", el::reference())
            .with_element("asserter", el::reference())
            .with_element("lastOccurrence", el::date_time())
            .with_element("note", el::of("Annotation").array())
            .with_element("reaction", el::of("AllergyIntoleranceReaction").array()),
        FhirSchema::backbone("AllergyIntoleranceReaction")
            .with_element("substance", el::concept())
            .with_element("manifestation", el::concept().array().required())
            .with_element("description", el::string())
            .with_element("onset", el::date_time())
            .with_element("severity", el::bound::<AllergyIntoleranceSeverity>())
            .with_element("exposureRoute", el::concept())
            .with_element("note", el::of("Annotation").array()),
    ]
}
