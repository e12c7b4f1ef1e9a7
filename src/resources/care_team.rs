use serde::{Deserialize, Serialize};

use crate::datatypes::element as el;
use crate::datatypes::{
    Annotation, BackboneElement, CodeableConcept, ContactPoint, DomainResource, Identifier,
    Period, Reference,
};
use crate::model::ResourceTag;
use crate::types::FhirSchema;

code_enum! {
    CareTeamStatus = "http://hl7.org/fhir/ValueSet/care-team-status" {
        Proposed => "proposed",
        Active => "active",
        Suspended => "suspended",
        Inactive => "inactive",
        EnteredInError => "entered-in-error",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareTeamParticipant {
    #[serde(flatten)]
    pub backbone: BackboneElement,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub role: Vec<CodeableConcept>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member: Option<Reference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_behalf_of: Option<Reference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,
}

/// [CareTeam](<https://hl7.org/fhir/R4/careteam.html>)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareTeam {
    pub resource_type: ResourceTag<CareTeam>,
    #[serde(flatten)]
    pub domain: DomainResource,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub identifier: Vec<Identifier>,
    pub status: CareTeamStatus,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub category: Vec<CodeableConcept>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<Reference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encounter: Option<Reference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub participant: Vec<CareTeamParticipant>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reason_code: Vec<CodeableConcept>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reason_reference: Vec<Reference>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub managing_organization: Vec<Reference>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub telecom: Vec<ContactPoint>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub note: Vec<Annotation>,
}

fhir_type!(CareTeamParticipant);
fhir_resource!(CareTeam);

pub(crate) fn schemas() -> Vec<FhirSchema> {
    vec![
        FhirSchema::resource("CareTeam")
            .with_description("Practitioners and organisations participating in care")
            .with_element("identifier", el::of("Identifier").array())
            .with_element("status", el::bound::<CareTeamStatus>().required())
            .with_element("category", el::concept().array())
            .with_element("name", el::string())
            .with_element("subject", el::reference())
            .with_element("encounter", el::reference())
            .with_element("period", el::of("Period"))
            .with_element("participant", el::of("CareTeamParticipant").array())
            .with_element("reasonCode", el::concept().array())
            .with_element("reasonReference", el::reference().array())
            .with_element("managingOrganization", el::reference().array())
            .with_element("telecom", el::of("ContactPoint").array())
            .with_element("note", el::of("Annotation").array()),
        FhirSchema::backbone("CareTeamParticipant")
            .with_element("role", el::concept().array())
            .with_element("member", el::reference())
            .with_element("onBehalfOf", el::reference())
            .with_element("period", el::of("Period")),
    ]
}
