use serde::{Deserialize, Serialize};

use crate::datatypes::element as el;
use crate::datatypes::{
    BackboneElement, CodeableConcept, Coding, DomainResource, Duration, Identifier, Period,
    Reference,
};
use crate::model::ResourceTag;
use crate::types::FhirSchema;

code_enum! {
    EncounterStatus = "http://hl7.org/fhir/ValueSet/encounter-status" {
        Planned => "planned",
        Arrived => "arrived",
        Triaged => "triaged",
        InProgress => "in-progress",
        Onleave => "onleave",
        Finished => "finished",
        Cancelled => "cancelled",
    }
}

code_enum! {
    EncounterLocationStatus = "http://hl7.org/fhir/ValueSet/encounter-location-status" {
        Planned => "planned",
        Active => "active",
        Reserved => "reserved",
        Completed => "completed",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncounterStatusHistory {
    #[serde(flatten)]
    pub backbone: BackboneElement,
    pub status: EncounterStatus,
    pub period: Period,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncounterClassHistory {
    #[serde(flatten)]
    pub backbone: BackboneElement,
    pub class: Coding,
    pub period: Period,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EncounterParticipant {
    #[serde(flatten)]
    pub backbone: BackboneElement,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub r#type: Vec<CodeableConcept>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub individual: Option<Reference>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncounterDiagnosis {
    #[serde(flatten)]
    pub backbone: BackboneElement,
    pub condition: Reference,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#use: Option<CodeableConcept>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank: Option<u32>,
}

/// Details about the admission to a healthcare service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncounterHospitalization {
    #[serde(flatten)]
    pub backbone: BackboneElement,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pre_admission_identifier: Option<Identifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<Reference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admit_source: Option<CodeableConcept>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub re_admission: Option<CodeableConcept>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub diet_preference: Vec<CodeableConcept>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub special_courtesy: Vec<CodeableConcept>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub special_arrangement: Vec<CodeableConcept>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<Reference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discharge_disposition: Option<CodeableConcept>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncounterLocation {
    #[serde(flatten)]
    pub backbone: BackboneElement,
    pub location: Reference,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<EncounterLocationStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub physical_type: Option<CodeableConcept>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,
}

/// [Encounter](<https://hl7.org/fhir/R4/encounter.html>)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Encounter {
    pub resource_type: ResourceTag<Encounter>,
    #[serde(flatten)]
    pub domain: DomainResource,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub identifier: Vec<Identifier>,
    pub status: EncounterStatus,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub status_history: Vec<EncounterStatusHistory>,
    pub class: Coding,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub class_history: Vec<EncounterClassHistory>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub r#type: Vec<CodeableConcept>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_type: Option<CodeableConcept>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<CodeableConcept>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<Reference>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub episode_of_care: Vec<Reference>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub based_on: Vec<Reference>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub participant: Vec<EncounterParticipant>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub appointment: Vec<Reference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<Duration>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reason_code: Vec<CodeableConcept>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reason_reference: Vec<Reference>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub diagnosis: Vec<EncounterDiagnosis>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub account: Vec<Reference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hospitalization: Option<EncounterHospitalization>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub location: Vec<EncounterLocation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_provider: Option<Reference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub part_of: Option<Reference>,
}

fhir_type!(
    EncounterStatusHistory,
    EncounterClassHistory,
    EncounterParticipant,
    EncounterDiagnosis,
    EncounterHospitalization,
    EncounterLocation
);
fhir_resource!(Encounter);

pub(crate) fn schemas() -> Vec<FhirSchema> {
    vec![
        FhirSchema::resource("Encounter")
            .with_description("An interaction between a patient and healthcare providers")
            .with_element("identifier", el::of("Identifier").array())
            .with_element("status", el::bound::<EncounterStatus>().required())
            .with_element("statusHistory", el::of("EncounterStatusHistory").array())
            .with_element("class", el::of("Coding").required())
            .with_element("classHistory", el::of("EncounterClassHistory").array())
            .with_element("type", el::concept().array())
            .with_element("serviceType", el::concept())
            .with_element("priority", el::concept())
            .with_element("subject", el::reference())
            .with_element("episodeOfCare", el::reference().array())
            .with_element("basedOn", el::reference().array())
            .with_element("participant", el::of("EncounterParticipant").array())
            .with_element("appointment", el::reference().array())
            .with_element("period", el::of("Period"))
            .with_element("length", el::of("Duration"))
            .with_element("reasonCode", el::concept().array())
            .with_element("reasonReference", el::reference().array())
            .with_element("diagnosis", el::of("EncounterDiagnosis").array())
            .with_element("account", el::reference().array())
            .with_element("hospitalization", el::of("EncounterHospitalization"))
            .with_element("location", el::of("EncounterLocation").array())
            .with_element("serviceProvider", el::reference())
            .with_element("partOf", el::reference()),
        FhirSchema::backbone("EncounterStatusHistory")
            .with_element("status", el::bound::<EncounterStatus>().required())
            .with_element("period", el::of("Period").required()),
        FhirSchema::backbone("EncounterClassHistory")
            .with_element("class", el::of("Coding").required())
            .with_element("period", el::of("Period").required()),
        FhirSchema::backbone("EncounterParticipant")
            .with_element("type", el::concept().array())
            .with_element("period", el::of("Period"))
            .with_element("individual", el::reference()),
        FhirSchema::backbone("EncounterDiagnosis")
            .with_element("condition", el::reference().required())
            .with_element("use", el::concept())
            .with_element("rank", el::positive_int()),
        FhirSchema::backbone("EncounterHospitalization")
            .with_element("preAdmissionIdentifier", el::of("Identifier"))
            .with_element("origin", el::reference())
            .with_element("admitSource", el::concept())
            .with_element("reAdmission", el::concept())
            .with_element("dietPreference", el::concept().array())
            .with_element("specialCourtesy", el::concept().array())
            .with_element("specialArrangement", el::concept().array())
            .with_element("destination", el::reference())
            .with_element("dischargeDisposition", el::concept()),
        FhirSchema::backbone("EncounterLocation")
            .with_element("location", el::reference().required())
            .with_element("status", el::bound::<EncounterLocationStatus>())
            .with_element("physicalType", el::concept())
            .with_element("period", el::of("Period")),
    ]
}
