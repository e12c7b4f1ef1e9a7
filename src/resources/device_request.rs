use serde::{Deserialize, Serialize};

use super::RequestStatus;
use crate::datatypes::element as el;
use crate::datatypes::{
    Annotation, BackboneElement, CodeableConcept, DomainResource, FhirDateTime, Identifier,
    Period, Quantity, Range, Reference, Timing,
};
use crate::model::ResourceTag;
use crate::types::FhirSchema;

code_enum! {
    RequestIntent = "http://hl7.org/fhir/ValueSet/request-intent" {
        Proposal => "proposal",
        Plan => "plan",
        Directive => "directive",
        Order => "order",
        OriginalOrder => "original-order",
        ReflexOrder => "reflex-order",
        FillerOrder => "filler-order",
        InstanceOrder => "instance-order",
        Option => "option",
    }
}

code_enum! {
    RequestPriority = "http://hl7.org/fhir/ValueSet/request-priority" {
        Routine => "routine",
        Urgent => "urgent",
        Asap => "asap",
        Stat => "stat",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DeviceRequestCode {
    #[serde(rename = "codeReference")]
    Reference(Reference),
    #[serde(rename = "codeCodeableConcept")]
    CodeableConcept(CodeableConcept),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DeviceRequestParameterValue {
    #[serde(rename = "valueCodeableConcept")]
    CodeableConcept(CodeableConcept),
    #[serde(rename = "valueQuantity")]
    Quantity(Quantity),
    #[serde(rename = "valueRange")]
    Range(Range),
    #[serde(rename = "valueBoolean")]
    Boolean(bool),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DeviceRequestOccurrence {
    #[serde(rename = "occurrenceDateTime")]
    DateTime(FhirDateTime),
    #[serde(rename = "occurrencePeriod")]
    Period(Period),
    #[serde(rename = "occurrenceTiming")]
    Timing(Timing),
}

/// Device detail such as a setting or configuration value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceRequestParameter {
    #[serde(flatten)]
    pub backbone: BackboneElement,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<CodeableConcept>,
    #[serde(flatten)]
    pub value: Option<DeviceRequestParameterValue>,
}

/// [DeviceRequest](<https://hl7.org/fhir/R4/devicerequest.html>)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceRequest {
    pub resource_type: ResourceTag<DeviceRequest>,
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
    pub prior_request: Vec<Reference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_identifier: Option<Identifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<RequestStatus>,
    pub intent: RequestIntent,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<RequestPriority>,
    #[serde(flatten)]
    pub code: Option<DeviceRequestCode>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameter: Vec<DeviceRequestParameter>,
    pub subject: Reference,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encounter: Option<Reference>,
    #[serde(flatten)]
    pub occurrence: Option<DeviceRequestOccurrence>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authored_on: Option<FhirDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requester: Option<Reference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performer_type: Option<CodeableConcept>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performer: Option<Reference>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reason_code: Vec<CodeableConcept>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reason_reference: Vec<Reference>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub insurance: Vec<Reference>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub supporting_info: Vec<Reference>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub note: Vec<Annotation>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub relevant_history: Vec<Reference>,
}

fhir_type!(DeviceRequestParameter);
fhir_resource!(DeviceRequest);

pub(crate) fn schemas() -> Vec<FhirSchema> {
    vec![
        FhirSchema::resource("DeviceRequest")
            .with_description("Order or request for use of a device")
            .with_element("identifier", el::of("Identifier").array())
            .with_element("instantiatesCanonical", el::canonical().array())
            .with_element("instantiatesUri", el::uri().array())
            .with_element("basedOn", el::reference().array())
            .with_element("priorRequest", el::reference().array())
            .with_element("groupIdentifier", el::of("Identifier"))
            .with_element("status", el::bound::<RequestStatus>())
            .with_element("intent", el::bound::<RequestIntent>().required())
            .with_element("priority", el::bound::<RequestPriority>())
            .with_choice(
                "code",
                [
                    ("codeReference", el::reference()),
                    ("codeCodeableConcept", el::concept()),
                ],
            )
            .with_element("parameter", el::of("DeviceRequestParameter").array())
            .with_element("subject", el::reference().required())
            .with_element("encounter", el::reference())
            .with_choice(
                "occurrence",
                [
                    ("occurrenceDateTime", el::date_time()),
                    ("occurrencePeriod", el::of("Period")),
                    ("occurrenceTiming", el::of("Timing")),
                ],
            )
            .with_element("authoredOn", el::date_time())
            .with_element("requester", el::reference())
            .with_element("performerType", el::concept())
            .with_element("performer", el::reference())
            .with_element("reasonCode", el::concept().array())
            .with_element("reasonReference", el::reference().array())
            .with_element("insurance", el::reference().array())
            .with_element("supportingInfo", el::reference().array())
            .with_element("note", el::of("Annotation").array())
            .with_element("relevantHistory", el::reference().array()),
        FhirSchema::backbone("DeviceRequestParameter")
            .with_element("code", el::concept())
            .with_choice(
                "value",
                [
                    ("valueCodeableConcept", el::concept()),
                    ("valueQuantity", el::of("Quantity")),
                    ("valueRange", el::of("Range")),
                    ("valueBoolean", el::boolean()),
                ],
            ),
    ]
}
