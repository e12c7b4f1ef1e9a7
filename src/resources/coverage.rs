use serde::{Deserialize, Serialize};

use super::FinancialResourceStatus;
use crate::datatypes::element as el;
use crate::datatypes::{
    BackboneElement, CodeableConcept, DomainResource, Identifier, Money, Period, Reference,
    SimpleQuantity,
};
use crate::model::ResourceTag;
use crate::types::FhirSchema;

/// Additional plan classification such as group, plan or class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageClass {
    #[serde(flatten)]
    pub backbone: BackboneElement,
    pub r#type: CodeableConcept,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CostToBeneficiaryValue {
    #[serde(rename = "valueQuantity")]
    Quantity(SimpleQuantity),
    #[serde(rename = "valueMoney")]
    Money(Money),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageException {
    #[serde(flatten)]
    pub backbone: BackboneElement,
    pub r#type: CodeableConcept,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,
}

/// Patient cost for a category of services.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageCostToBeneficiary {
    #[serde(flatten)]
    pub backbone: BackboneElement,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<CodeableConcept>,
    #[serde(flatten)]
    pub value: Option<CostToBeneficiaryValue>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exception: Vec<CoverageException>,
}

/// [Coverage](<https://hl7.org/fhir/R4/coverage.html>)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coverage {
    pub resource_type: ResourceTag<Coverage>,
    #[serde(flatten)]
    pub domain: DomainResource,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub identifier: Vec<Identifier>,
    pub status: FinancialResourceStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<CodeableConcept>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_holder: Option<Reference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscriber: Option<Reference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscriber_id: Option<String>,
    pub beneficiary: Reference,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dependent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relationship: Option<CodeableConcept>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,
    pub payor: Vec<Reference>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub class: Vec<CoverageClass>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cost_to_beneficiary: Vec<CoverageCostToBeneficiary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subrogation: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contract: Vec<Reference>,
}

impl Coverage {
    pub fn new(status: FinancialResourceStatus, beneficiary: Reference, payor: Vec<Reference>) -> Self {
        Self {
            resource_type: ResourceTag::new(),
            domain: DomainResource::default(),
            identifier: Vec::new(),
            status,
            r#type: None,
            policy_holder: None,
            subscriber: None,
            subscriber_id: None,
            beneficiary,
            dependent: None,
            relationship: None,
            period: None,
            payor,
            class: Vec::new(),
            order: None,
            network: None,
            cost_to_beneficiary: Vec::new(),
            subrogation: None,
            contract: Vec::new(),
        }
    }
}

fhir_type!(CoverageClass, CoverageException, CoverageCostToBeneficiary);
fhir_resource!(Coverage);

pub(crate) fn schemas() -> Vec<FhirSchema> {
    vec![
        FhirSchema::resource("Coverage")
            .with_description("Insurance or medical plan, or a payment agreement")
            .with_element("identifier", el::of("Identifier").array())
            .with_element("status", el::bound::<FinancialResourceStatus>().required())
            .with_element("type", el::concept())
            .with_element("policyHolder", el::reference())
            .with_element("subscriber", el::reference())
            .with_element("subscriberId", el::string())
            .with_element("beneficiary", el::reference().required())
            .with_element("dependent", el::string())
            .with_element("relationship", el::concept())
            .with_element("period", el::of("Period"))
            .with_element("payor", el::reference().array().required())
            .with_element("class", el::of("CoverageClass").array())
            .with_element("order", el::positive_int())
            .with_element("network", el::string())
            .with_element(
                "costToBeneficiary",
                el::of("CoverageCostToBeneficiary").array(),
            )
            .with_element("subrogation", el::boolean())
            .with_element("contract", el::reference().array()),
        FhirSchema::backbone("CoverageClass")
            .with_element("type", el::concept().required())
            .with_element("value", el::string().required())
            .with_element("name", el::string()),
        FhirSchema::backbone("CoverageCostToBeneficiary")
            .with_element("type", el::concept())
            .with_choice(
                "value",
                [
                    ("valueQuantity", el::of("SimpleQuantity")),
                    ("valueMoney", el::of("Money")),
                ],
            )
            .with_element("exception", el::of("CoverageException").array()),
        FhirSchema::backbone("CoverageException")
            .with_element("type", el::concept().required())
            .with_element("period", el::of("Period")),
    ]
}
