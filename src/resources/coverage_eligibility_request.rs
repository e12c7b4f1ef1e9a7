use serde::{Deserialize, Serialize};

use super::{EligibilityPurpose, FinancialResourceStatus};
use crate::datatypes::element as el;
use crate::datatypes::{
    BackboneElement, CodeableConcept, DomainResource, FhirDate, FhirDateTime, Identifier, Money,
    Period, Reference, SimpleQuantity,
};
use crate::model::ResourceTag;
use crate::types::FhirSchema;

/// Date or period for which eligibility is requested or reported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EligibilityServiced {
    #[serde(rename = "servicedDate")]
    Date(FhirDate),
    #[serde(rename = "servicedPeriod")]
    Period(Period),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageEligibilityRequestSupportingInfo {
    #[serde(flatten)]
    pub backbone: BackboneElement,
    pub sequence: u32,
    pub information: Reference,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applies_to_all: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageEligibilityRequestInsurance {
    #[serde(flatten)]
    pub backbone: BackboneElement,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focal: Option<bool>,
    pub coverage: Reference,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_arrangement: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CoverageEligibilityRequestDiagnosisValue {
    #[serde(rename = "diagnosisCodeableConcept")]
    CodeableConcept(CodeableConcept),
    #[serde(rename = "diagnosisReference")]
    Reference(Reference),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageEligibilityRequestItemDiagnosis {
    #[serde(flatten)]
    pub backbone: BackboneElement,
    #[serde(flatten)]
    pub diagnosis: Option<CoverageEligibilityRequestDiagnosisValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageEligibilityRequestItem {
    #[serde(flatten)]
    pub backbone: BackboneElement,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub supporting_info_sequence: Vec<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<CodeableConcept>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_or_service: Option<CodeableConcept>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifier: Vec<CodeableConcept>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<Reference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<SimpleQuantity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facility: Option<Reference>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub diagnosis: Vec<CoverageEligibilityRequestItemDiagnosis>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub detail: Vec<Reference>,
}

/// [CoverageEligibilityRequest](<https://hl7.org/fhir/R4/coverageeligibilityrequest.html>)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageEligibilityRequest {
    pub resource_type: ResourceTag<CoverageEligibilityRequest>,
    #[serde(flatten)]
    pub domain: DomainResource,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub identifier: Vec<Identifier>,
    pub status: FinancialResourceStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<CodeableConcept>,
    pub purpose: Vec<EligibilityPurpose>,
    pub patient: Reference,
    #[serde(flatten)]
    pub serviced: Option<EligibilityServiced>,
    pub created: FhirDateTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enterer: Option<Reference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<Reference>,
    pub insurer: Reference,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facility: Option<Reference>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub supporting_info: Vec<CoverageEligibilityRequestSupportingInfo>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub insurance: Vec<CoverageEligibilityRequestInsurance>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub item: Vec<CoverageEligibilityRequestItem>,
}

fhir_type!(
    CoverageEligibilityRequestSupportingInfo,
    CoverageEligibilityRequestInsurance,
    CoverageEligibilityRequestItemDiagnosis,
    CoverageEligibilityRequestItem
);
fhir_resource!(CoverageEligibilityRequest);

pub(crate) fn schemas() -> Vec<FhirSchema> {
    vec![
        FhirSchema::resource("CoverageEligibilityRequest")
            .with_description("Request for insurance eligibility and benefit details")
            .with_element("identifier", el::of("Identifier").array())
            .with_element("status", el::bound::<FinancialResourceStatus>().required())
            .with_element("priority", el::concept())
            .with_element("purpose", el::bound::<EligibilityPurpose>().array().required())
            .with_element("patient", el::reference().required())
            .with_choice(
                "serviced",
                [
                    ("servicedDate", el::date()),
                    ("servicedPeriod", el::of("Period")),
                ],
            )
            .with_element("created", el::date_time().required())
            .with_element("enterer", el::reference())
            .with_element("provider", el::reference())
            .with_element("insurer", el::reference().required())
            .with_element("facility", el::reference())
            .with_element(
                "supportingInfo",
                el::of("CoverageEligibilityRequestSupportingInfo").array(),
            )
            .with_element(
                "insurance",
                el::of("CoverageEligibilityRequestInsurance").array(),
            )
            .with_element("item", el::of("CoverageEligibilityRequestItem").array()),
        FhirSchema::backbone("CoverageEligibilityRequestSupportingInfo")
            .with_element("sequence", el::positive_int().required())
            .with_element("information", el::reference().required())
            .with_element("appliesToAll", el::boolean()),
        FhirSchema::backbone("CoverageEligibilityRequestInsurance")
            .with_element("focal", el::boolean())
            .with_element("coverage", el::reference().required())
            .with_element("businessArrangement", el::string()),
        FhirSchema::backbone("CoverageEligibilityRequestItem")
            .with_element("supportingInfoSequence", el::positive_int().array())
            .with_element("category", el::concept())
            .with_element("productOrService", el::concept())
            .with_element("modifier", el::concept().array())
            .with_element("provider", el::reference())
            .with_element("quantity", el::of("SimpleQuantity"))
            .with_element("unitPrice", el::of("Money"))
            .with_element("facility", el::reference())
            .with_element(
                "diagnosis",
                el::of("CoverageEligibilityRequestItemDiagnosis").array(),
            )
            .with_element("detail", el::reference().array()),
        FhirSchema::backbone("CoverageEligibilityRequestItemDiagnosis").with_choice(
            "diagnosis",
            [
                ("diagnosisCodeableConcept", el::concept()),
                ("diagnosisReference", el::reference()),
            ],
        ),
    ]
}
