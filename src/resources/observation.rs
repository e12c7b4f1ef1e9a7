use serde::{Deserialize, Serialize};

use crate::datatypes::element as el;
use crate::datatypes::{
    Annotation, BackboneElement, CodeableConcept, DomainResource, FhirDateTime, FhirInstant,
    FhirTime, Identifier, Period, Quantity, Range, Ratio, Reference, SampledData, SimpleQuantity,
    Timing,
};
use crate::model::ResourceTag;
use crate::types::FhirSchema;

code_enum! {
    /// [ObservationStatus](<https://hl7.org/fhir/R4/valueset-observation-status.html>)
    ObservationStatus = "http://hl7.org/fhir/ValueSet/observation-status" {
        Registered => "registered",
        Preliminary => "preliminary",
        Final => "final",
        Amended => "amended",
        Corrected => "corrected",
        Cancelled => "cancelled",
        EnteredInError => "entered-in-error",
        Unknown => "unknown",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ObservationEffective {
    #[serde(rename = "effectiveDateTime")]
    DateTime(FhirDateTime),
    #[serde(rename = "effectivePeriod")]
    Period(Period),
    #[serde(rename = "effectiveTiming")]
    Timing(Timing),
    #[serde(rename = "effectiveInstant")]
    Instant(FhirInstant),
}

/// Result value of an observation or one of its components.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ObservationValue {
    #[serde(rename = "valueQuantity")]
    Quantity(Quantity),
    #[serde(rename = "valueCodeableConcept")]
    CodeableConcept(CodeableConcept),
    #[serde(rename = "valueString")]
    String(String),
    #[serde(rename = "valueBoolean")]
    Boolean(bool),
    #[serde(rename = "valueInteger")]
    Integer(i32),
    #[serde(rename = "valueRange")]
    Range(Range),
    #[serde(rename = "valueRatio")]
    Ratio(Ratio),
    #[serde(rename = "valueSampledData")]
    SampledData(SampledData),
    #[serde(rename = "valueTime")]
    Time(FhirTime),
    #[serde(rename = "valueDateTime")]
    DateTime(FhirDateTime),
    #[serde(rename = "valuePeriod")]
    Period(Period),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObservationReferenceRange {
    #[serde(flatten)]
    pub backbone: BackboneElement,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub low: Option<SimpleQuantity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high: Option<SimpleQuantity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<CodeableConcept>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub applies_to: Vec<CodeableConcept>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<Range>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObservationComponent {
    #[serde(flatten)]
    pub backbone: BackboneElement,
    pub code: CodeableConcept,
    #[serde(flatten)]
    pub value: Option<ObservationValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_absent_reason: Option<CodeableConcept>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub interpretation: Vec<CodeableConcept>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reference_range: Vec<ObservationReferenceRange>,
}

/// [Observation](<https://hl7.org/fhir/R4/observation.html>)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Observation {
    pub resource_type: ResourceTag<Observation>,
    #[serde(flatten)]
    pub domain: DomainResource,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub identifier: Vec<Identifier>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub based_on: Vec<Reference>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub part_of: Vec<Reference>,
    pub status: ObservationStatus,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub category: Vec<CodeableConcept>,
    pub code: CodeableConcept,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<Reference>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub focus: Vec<Reference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encounter: Option<Reference>,
    #[serde(flatten)]
    pub effective: Option<ObservationEffective>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issued: Option<FhirInstant>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub performer: Vec<Reference>,
    #[serde(flatten)]
    pub value: Option<ObservationValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_absent_reason: Option<CodeableConcept>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub interpretation: Vec<CodeableConcept>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub note: Vec<Annotation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_site: Option<CodeableConcept>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<CodeableConcept>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specimen: Option<Reference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device: Option<Reference>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reference_range: Vec<ObservationReferenceRange>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub has_member: Vec<Reference>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub derived_from: Vec<Reference>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub component: Vec<ObservationComponent>,
}

impl Observation {
    pub fn new(status: ObservationStatus, code: CodeableConcept) -> Self {
        Self {
            resource_type: ResourceTag::new(),
            domain: DomainResource::default(),
            identifier: Vec::new(),
            based_on: Vec::new(),
            part_of: Vec::new(),
            status,
            category: Vec::new(),
            code,
            subject: None,
            focus: Vec::new(),
            encounter: None,
            effective: None,
            issued: None,
            performer: Vec::new(),
            value: None,
            data_absent_reason: None,
            interpretation: Vec::new(),
            note: Vec::new(),
            body_site: None,
            method: None,
            specimen: None,
            device: None,
            reference_range: Vec::new(),
            has_member: Vec::new(),
            derived_from: Vec::new(),
            component: Vec::new(),
        }
    }
}

fhir_type!(ObservationReferenceRange, ObservationComponent);
fhir_resource!(Observation);

fn with_value_choice(schema: FhirSchema) -> FhirSchema {
    schema.with_choice(
        "value",
        [
            ("valueQuantity", el::of("Quantity")),
            ("valueCodeableConcept", el::concept()),
            ("valueString", el::string()),
            ("valueBoolean", el::boolean()),
            ("valueInteger", el::integer()),
            ("valueRange", el::of("Range")),
            ("valueRatio", el::of("Ratio")),
            ("valueSampledData", el::of("SampledData")),
            ("valueTime", el::time()),
            ("valueDateTime", el::date_time()),
            ("valuePeriod", el::of("Period")),
        ],
    )
}

pub(crate) fn schemas() -> Vec<FhirSchema> {
    let observation = FhirSchema::resource("Observation")
        .with_description("Measurements and simple assertions about a patient or subject")
        .with_element("identifier", el::of("Identifier").array())
        .with_element("basedOn", el::reference().array())
        .with_element("partOf", el::reference().array())
        .with_element("status", el::bound::<ObservationStatus>().required())
        .with_element("category", el::concept().array())
        .with_element("code", el::concept().required())
        .with_element("subject", el::reference())
        .with_element("focus", el::reference().array())
        .with_element("encounter", el::reference())
        .with_choice(
            "effective",
            [
                ("effectiveDateTime", el::date_time()),
                ("effectivePeriod", el::of("Period")),
                ("effectiveTiming", el::of("Timing")),
                ("effectiveInstant", el::instant()),
            ],
        )
        .with_element("issued", el::instant())
        .with_element("performer", el::reference().array())
        .with_element("dataAbsentReason", el::concept())
        .with_element("interpretation", el::concept().array())
        .with_element("note", el::of("Annotation").array())
        .with_element("bodySite", el::concept())
        .with_element("method", el::concept())
        .with_element("specimen", el::reference())
        .with_element("device", el::reference())
        .with_element(
            "referenceRange",
            el::of("ObservationReferenceRange").array(),
        )
        .with_element("hasMember", el::reference().array())
        .with_element("derivedFrom", el::reference().array())
        .with_element("component", el::of("ObservationComponent").array());

    let component = FhirSchema::backbone("ObservationComponent")
        .with_element("code", el::concept().required())
        .with_element("dataAbsentReason", el::concept())
        .with_element("interpretation", el::concept().array())
        .with_element(
            "referenceRange",
            el::of("ObservationReferenceRange").array(),
        );

    vec![
        with_value_choice(observation),
        with_value_choice(component),
        FhirSchema::backbone("ObservationReferenceRange")
            .with_element("low", el::of("SimpleQuantity"))
            .with_element("high", el::of("SimpleQuantity"))
            .with_element("type", el::concept())
            .with_element("appliesTo", el::concept().array())
            .with_element("age", el::of("Range"))
            .with_element("text", el::string()),
    ]
}
