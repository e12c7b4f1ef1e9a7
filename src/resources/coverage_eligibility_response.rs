use serde::{Deserialize, Serialize};

use super::coverage_eligibility_request::EligibilityServiced;
use super::{EligibilityPurpose, FinancialResourceStatus};
use crate::datatypes::element as el;
use crate::datatypes::{
    BackboneElement, CodeableConcept, DomainResource, FhirDateTime, Identifier, Money, Period,
    Reference,
};
use crate::model::ResourceTag;
use crate::types::FhirSchema;

code_enum! {
    RemittanceOutcome = "http://hl7.org/fhir/ValueSet/remittance-outcome" {
        Queued => "queued",
        Complete => "complete",
        Error => "error",
        Partial => "partial",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BenefitAllowed {
    #[serde(rename = "allowedUnsignedInt")]
    UnsignedInt(u32),
    #[serde(rename = "allowedString")]
    String(String),
    #[serde(rename = "allowedMoney")]
    Money(Money),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BenefitUsed {
    #[serde(rename = "usedUnsignedInt")]
    UnsignedInt(u32),
    #[serde(rename = "usedString")]
    String(String),
    #[serde(rename = "usedMoney")]
    Money(Money),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageEligibilityResponseBenefit {
    #[serde(flatten)]
    pub backbone: BackboneElement,
    pub r#type: CodeableConcept,
    #[serde(flatten)]
    pub allowed: Option<BenefitAllowed>,
    #[serde(flatten)]
    pub used: Option<BenefitUsed>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageEligibilityResponseItem {
    #[serde(flatten)]
    pub backbone: BackboneElement,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<CodeableConcept>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_or_service: Option<CodeableConcept>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifier: Vec<CodeableConcept>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<Reference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excluded: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network: Option<CodeableConcept>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<CodeableConcept>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub term: Option<CodeableConcept>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub benefit: Vec<CoverageEligibilityResponseBenefit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization_required: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub authorization_supporting: Vec<CodeableConcept>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageEligibilityResponseInsurance {
    #[serde(flatten)]
    pub backbone: BackboneElement,
    pub coverage: Reference,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inforce: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub benefit_period: Option<Period>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub item: Vec<CoverageEligibilityResponseItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageEligibilityResponseError {
    #[serde(flatten)]
    pub backbone: BackboneElement,
    pub code: CodeableConcept,
}

/// [CoverageEligibilityResponse](<https://hl7.org/fhir/R4/coverageeligibilityresponse.html>)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageEligibilityResponse {
    pub resource_type: ResourceTag<CoverageEligibilityResponse>,
    #[serde(flatten)]
    pub domain: DomainResource,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub identifier: Vec<Identifier>,
    pub status: FinancialResourceStatus,
    pub purpose: Vec<EligibilityPurpose>,
    pub patient: Reference,
    #[serde(flatten)]
    pub serviced: Option<EligibilityServiced>,
    pub created: FhirDateTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requestor: Option<Reference>,
    pub request: Reference,
    pub outcome: RemittanceOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disposition: Option<String>,
    pub insurer: Reference,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub insurance: Vec<CoverageEligibilityResponseInsurance>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pre_auth_ref: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form: Option<CodeableConcept>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub error: Vec<CoverageEligibilityResponseError>,
}

fhir_type!(
    CoverageEligibilityResponseBenefit,
    CoverageEligibilityResponseItem,
    CoverageEligibilityResponseInsurance,
    CoverageEligibilityResponseError
);
fhir_resource!(CoverageEligibilityResponse);

pub(crate) fn schemas() -> Vec<FhirSchema> {
    vec![
        FhirSchema::resource("CoverageEligibilityResponse")
            .with_description("Insurer's answer to an eligibility request")
            .with_element("identifier", el::of("Identifier").array())
            .with_element("status", el::bound::<FinancialResourceStatus>().required())
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
            .with_element("requestor", el::reference())
            .with_element("request", el::reference().required())
            .with_element("outcome", el::bound::<RemittanceOutcome>().required())
            .with_element("disposition", el::string())
            .with_element("insurer", el::reference().required())
            .with_element(
                "insurance",
                el::of("CoverageEligibilityResponseInsurance").array(),
            )
            .with_element("preAuthRef", el::string())
            .with_element("form", el::concept())
            .with_element("error", el::of("CoverageEligibilityResponseError").array()),
        FhirSchema::backbone("CoverageEligibilityResponseInsurance")
            .with_element("coverage", el::reference().required())
            .with_element("inforce", el::boolean())
            .with_element("benefitPeriod", el::of("Period"))
            .with_element("item", el::of("CoverageEligibilityResponseItem").array()),
        FhirSchema::backbone("CoverageEligibilityResponseItem")
            .with_element("category", el::concept())
            .with_element("productOrService", el::concept())
            .with_element("modifier", el::concept().array())
            .with_element("provider", el::reference())
            .with_element("excluded", el::boolean())
            .with_element("name", el::string())
            .with_element("description", el::string())
            .with_element("network", el::concept())
            .with_element("unit", el::concept())
            .with_element("term", el::concept())
            .with_element(
                "benefit",
                el::of("CoverageEligibilityResponseBenefit").array(),
            )
            .with_element("authorizationRequired", el::boolean())
            .with_element("authorizationSupporting", el::concept().array())
            .with_element("authorizationUrl", el::uri()),
        FhirSchema::backbone("CoverageEligibilityResponseBenefit")
            .with_element("type", el::concept().required())
            .with_choice(
                "allowed",
                [
                    ("allowedUnsignedInt", el::unsigned_int()),
                    ("allowedString", el::string()),
                    ("allowedMoney", el::of("Money")),
                ],
            )
            .with_choice(
                "used",
                [
                    ("usedUnsignedInt", el::unsigned_int()),
                    ("usedString", el::string()),
                    ("usedMoney", el::of("Money")),
                ],
            ),
        FhirSchema::backbone("CoverageEligibilityResponseError")
            .with_element("code", el::concept().required()),
    ]
}
