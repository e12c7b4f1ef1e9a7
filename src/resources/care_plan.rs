use serde::{Deserialize, Serialize};

use super::RequestStatus;
use crate::datatypes::element as el;
use crate::datatypes::{
    Annotation, BackboneElement, CodeableConcept, DomainResource, FhirDateTime, Identifier,
    Period, Reference, SimpleQuantity, Timing,
};
use crate::model::ResourceTag;
use crate::types::FhirSchema;

code_enum! {
    CarePlanIntent = "http://hl7.org/fhir/ValueSet/care-plan-intent" {
        Proposal => "proposal",
        Plan => "plan",
        Order => "order",
        Option => "option",
    }
}

code_enum! {
    /// Resource type a planned activity would be realised as.
    CarePlanActivityKind = "http://hl7.org/fhir/ValueSet/care-plan-activity-kind" {
        Appointment => "Appointment",
        CommunicationRequest => "CommunicationRequest",
        DeviceRequest => "DeviceRequest",
        MedicationRequest => "MedicationRequest",
        NutritionOrder => "NutritionOrder",
        Task => "Task",
        ServiceRequest => "ServiceRequest",
        VisionPrescription => "VisionPrescription",
    }
}

code_enum! {
    CarePlanActivityStatus = "http://hl7.org/fhir/ValueSet/care-plan-activity-status" {
        NotStarted => "not-started",
        Scheduled => "scheduled",
        InProgress => "in-progress",
        OnHold => "on-hold",
        Completed => "completed",
        Cancelled => "cancelled",
        Stopped => "stopped",
        Unknown => "unknown",
        EnteredInError => "entered-in-error",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CarePlanActivityScheduled {
    #[serde(rename = "scheduledTiming")]
    Timing(Timing),
    #[serde(rename = "scheduledPeriod")]
    Period(Period),
    #[serde(rename = "scheduledString")]
    String(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CarePlanActivityProduct {
    #[serde(rename = "productCodeableConcept")]
    CodeableConcept(CodeableConcept),
    #[serde(rename = "productReference")]
    Reference(Reference),
}

/// In-line definition of an activity when no referenced request exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarePlanActivityDetail {
    #[serde(flatten)]
    pub backbone: BackboneElement,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<CarePlanActivityKind>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub instantiates_canonical: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub instantiates_uri: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<CodeableConcept>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reason_code: Vec<CodeableConcept>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reason_reference: Vec<Reference>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub goal: Vec<Reference>,
    pub status: CarePlanActivityStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_reason: Option<CodeableConcept>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub do_not_perform: Option<bool>,
    #[serde(flatten)]
    pub scheduled: Option<CarePlanActivityScheduled>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Reference>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub performer: Vec<Reference>,
    #[serde(flatten)]
    pub product: Option<CarePlanActivityProduct>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_amount: Option<SimpleQuantity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<SimpleQuantity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarePlanActivity {
    #[serde(flatten)]
    pub backbone: BackboneElement,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub outcome_codeable_concept: Vec<CodeableConcept>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub outcome_reference: Vec<Reference>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub progress: Vec<Annotation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<Reference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<CarePlanActivityDetail>,
}

/// [CarePlan](<https://hl7.org/fhir/R4/careplan.html>)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarePlan {
    pub resource_type: ResourceTag<CarePlan>,
    #[serde(flatten)]
    pub domain: DomainResource,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub identifier: Vec<Identifier>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub instantiates_canonical: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub instantiates_uri: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub based_on: Vec<Reference>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub replaces: Vec<Reference>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub part_of: Vec<Reference>,
    pub status: RequestStatus,
    pub intent: CarePlanIntent,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub category: Vec<CodeableConcept>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub subject: Reference,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encounter: Option<Reference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<FhirDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<Reference>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contributor: Vec<Reference>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub care_team: Vec<Reference>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub addresses: Vec<Reference>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub supporting_info: Vec<Reference>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub goal: Vec<Reference>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub activity: Vec<CarePlanActivity>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub note: Vec<Annotation>,
}

fhir_type!(CarePlanActivity, CarePlanActivityDetail);
fhir_resource!(CarePlan);

pub(crate) fn schemas() -> Vec<FhirSchema> {
    vec![
        FhirSchema::resource("CarePlan")
            .with_description("Intended care for a patient or group")
            .with_element("identifier", el::of("Identifier").array())
            .with_element("instantiatesCanonical", el::canonical().array())
            .with_element("instantiatesUri", el::uri().array())
            .with_element("basedOn", el::reference().array())
            .with_element("replaces", el::reference().array())
            .with_element("partOf", el::reference().array())
            .with_element("status", el::bound::<RequestStatus>().required())
            .with_element("intent", el::bound::<CarePlanIntent>().required())
            .with_element("category", el::concept().array())
            .with_element("title", el::string())
            .with_element("description", el::string())
            .with_element("subject", el::reference().required())
            .with_element("encounter", el::reference())
            .with_element("period", el::of("Period"))
            .with_element("created", el::date_time())
            .with_element("author", el::reference())
            .with_element("contributor", el::reference().array())
            .with_element("careTeam", el::reference().array())
            .with_element("addresses", el::reference().array())
            .with_element("supportingInfo", el::reference().array())
            .with_element("goal", el::reference().array())
            .with_element("activity", el::of("CarePlanActivity").array())
            .with_element("note", el::of("Annotation").array()),
        FhirSchema::backbone("CarePlanActivity")
            .with_element("outcomeCodeableConcept", el::concept().array())
            .with_element("outcomeReference", el::reference().array())
            .with_element("progress", el::of("Annotation").array())
            .with_element("reference", el::reference())
            .with_element("detail", el::of("CarePlanActivityDetail")),
        FhirSchema::backbone("CarePlanActivityDetail")
            .with_element("kind", el::bound::<CarePlanActivityKind>())
            .with_element("instantiatesCanonical", el::canonical().array())
            .with_element("instantiatesUri", el::uri().array())
            .with_element("code", el::concept())
            .with_element("reasonCode", el::concept().array())
            .with_element("reasonReference", el::reference().array())
            .with_element("goal", el::reference().array())
            .with_element("status", el::bound::<CarePlanActivityStatus>().required())
            .with_element("statusReason", el::concept())
            .with_element("doNotPerform", el::boolean())
            .with_choice(
                "scheduled",
                [
                    ("scheduledTiming", el::of("Timing")),
                    ("scheduledPeriod", el::of("Period")),
                    ("scheduledString", el::string()),
                ],
            )
            .with_element("location", el::reference())
            .with_element("performer", el::reference().array())
            .with_choice(
                "product",
                [
                    ("productCodeableConcept", el::concept()),
                    ("productReference", el::reference()),
                ],
            )
            .with_element("dailyAmount", el::of("SimpleQuantity"))
            .with_element("quantity", el::of("SimpleQuantity"))
            .with_element("description", el::string()),
    ]
}
