//! Clinical and financial resources.
//!
//! Each module owns the typed record of one resource, its backbone
//! elements and value sets, plus the schemas the validator checks raw
//! input against. [`AnyResource`] dispatches on `resourceType` for
//! polymorphic slots such as `contained`.

pub mod allergy_intolerance;
pub mod care_plan;
pub mod care_team;
pub mod composition;
pub mod coverage;
pub mod coverage_eligibility_request;
pub mod coverage_eligibility_response;
pub mod device;
pub mod device_request;
pub mod encounter;
pub mod observation;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::error::{FhirSchemaError, Result};
use crate::types::FhirSchema;
use crate::validation::FhirSchemaValidator;

pub use allergy_intolerance::*;
pub use care_plan::*;
pub use care_team::*;
pub use composition::*;
pub use coverage::*;
pub use coverage_eligibility_request::*;
pub use coverage_eligibility_response::*;
pub use device::*;
pub use device_request::*;
pub use encounter::*;
pub use observation::*;

code_enum! {
    /// [RequestStatus](<https://hl7.org/fhir/R4/valueset-request-status.html>)
    RequestStatus = "http://hl7.org/fhir/ValueSet/request-status" {
        Draft => "draft",
        Active => "active",
        OnHold => "on-hold",
        Revoked => "revoked",
        Completed => "completed",
        EnteredInError => "entered-in-error",
        Unknown => "unknown",
    }
}

code_enum! {
    /// Status shared by the financial resources.
    FinancialResourceStatus = "http://hl7.org/fhir/ValueSet/fm-status" {
        Active => "active",
        Cancelled => "cancelled",
        Draft => "draft",
        EnteredInError => "entered-in-error",
    }
}

code_enum! {
    EligibilityPurpose = "http://hl7.org/fhir/ValueSet/eligibilityrequest-purpose" {
        AuthRequirements => "auth-requirements",
        Benefits => "benefits",
        Discovery => "discovery",
        Validation => "validation",
    }
}

/// Any resource, keyed by its `resourceType`.
///
/// Resource types without a typed record are kept verbatim in
/// [`AnyResource::Other`] so they round-trip unchanged.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnyResource {
    AllergyIntolerance(Box<AllergyIntolerance>),
    CarePlan(Box<CarePlan>),
    CareTeam(Box<CareTeam>),
    Composition(Box<Composition>),
    Coverage(Box<Coverage>),
    CoverageEligibilityRequest(Box<CoverageEligibilityRequest>),
    CoverageEligibilityResponse(Box<CoverageEligibilityResponse>),
    Device(Box<Device>),
    DeviceRequest(Box<DeviceRequest>),
    Encounter(Box<Encounter>),
    Observation(Box<Observation>),
    Other(Map<String, Value>),
}

impl AnyResource {
    /// Validate against the built-in registry and decode.
    ///
    /// The payload must name a registered resource type.
    pub fn from_json(raw: &Value) -> Result<Self> {
        let result = FhirSchemaValidator::builtin().validate(raw);
        if !result.is_valid() {
            return Err(FhirSchemaError::validation("Resource", result));
        }
        Ok(Self::deserialize(raw)?)
    }

    pub fn resource_type(&self) -> &str {
        match self {
            Self::AllergyIntolerance(_) => "AllergyIntolerance",
            Self::CarePlan(_) => "CarePlan",
            Self::CareTeam(_) => "CareTeam",
            Self::Composition(_) => "Composition",
            Self::Coverage(_) => "Coverage",
            Self::CoverageEligibilityRequest(_) => "CoverageEligibilityRequest",
            Self::CoverageEligibilityResponse(_) => "CoverageEligibilityResponse",
            Self::Device(_) => "Device",
            Self::DeviceRequest(_) => "DeviceRequest",
            Self::Encounter(_) => "Encounter",
            Self::Observation(_) => "Observation",
            Self::Other(map) => map
                .get("resourceType")
                .and_then(Value::as_str)
                .unwrap_or_default(),
        }
    }

    pub fn id(&self) -> Option<&str> {
        match self {
            Self::AllergyIntolerance(r) => r.domain.id.as_deref(),
            Self::CarePlan(r) => r.domain.id.as_deref(),
            Self::CareTeam(r) => r.domain.id.as_deref(),
            Self::Composition(r) => r.domain.id.as_deref(),
            Self::Coverage(r) => r.domain.id.as_deref(),
            Self::CoverageEligibilityRequest(r) => r.domain.id.as_deref(),
            Self::CoverageEligibilityResponse(r) => r.domain.id.as_deref(),
            Self::Device(r) => r.domain.id.as_deref(),
            Self::DeviceRequest(r) => r.domain.id.as_deref(),
            Self::Encounter(r) => r.domain.id.as_deref(),
            Self::Observation(r) => r.domain.id.as_deref(),
            Self::Other(map) => map.get("id").and_then(Value::as_str),
        }
    }
}

impl<'de> Deserialize<'de> for AnyResource {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let tag = value
            .get("resourceType")
            .and_then(Value::as_str)
            .ok_or_else(|| D::Error::missing_field("resourceType"))?
            .to_owned();

        macro_rules! decode {
            ($variant:ident) => {
                serde_json::from_value(value)
                    .map(|r| Self::$variant(Box::new(r)))
                    .map_err(D::Error::custom)
            };
        }

        match tag.as_str() {
            "AllergyIntolerance" => decode!(AllergyIntolerance),
            "CarePlan" => decode!(CarePlan),
            "CareTeam" => decode!(CareTeam),
            "Composition" => decode!(Composition),
            "Coverage" => decode!(Coverage),
            "CoverageEligibilityRequest" => decode!(CoverageEligibilityRequest),
            "CoverageEligibilityResponse" => decode!(CoverageEligibilityResponse),
            "Device" => decode!(Device),
            "DeviceRequest" => decode!(DeviceRequest),
            "Encounter" => decode!(Encounter),
            "Observation" => decode!(Observation),
            _ => match value {
                Value::Object(map) => Ok(Self::Other(map)),
                _ => Err(D::Error::custom("resource must be a JSON object")),
            },
        }
    }
}

/// Schemas of every resource and its backbone elements.
pub(crate) fn schemas() -> Vec<FhirSchema> {
    let mut schemas = Vec::new();
    schemas.extend(allergy_intolerance::schemas());
    schemas.extend(care_plan::schemas());
    schemas.extend(care_team::schemas());
    schemas.extend(composition::schemas());
    schemas.extend(coverage::schemas());
    schemas.extend(coverage_eligibility_request::schemas());
    schemas.extend(coverage_eligibility_response::schemas());
    schemas.extend(device::schemas());
    schemas.extend(device_request::schemas());
    schemas.extend(encounter::schemas());
    schemas.extend(observation::schemas());
    schemas
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_dispatch_on_resource_type() {
        let raw = json!({
            "resourceType": "Device",
            "id": "dev-1",
            "status": "active"
        });
        let resource: AnyResource = serde_json::from_value(raw.clone()).unwrap();
        assert!(matches!(resource, AnyResource::Device(_)));
        assert_eq!(resource.resource_type(), "Device");
        assert_eq!(resource.id(), Some("dev-1"));
        assert_eq!(serde_json::to_value(&resource).unwrap(), raw);
    }

    #[test]
    fn test_unknown_resource_kept_verbatim() {
        let raw = json!({"resourceType": "Patient", "id": "p1", "active": true});
        let resource: AnyResource = serde_json::from_value(raw.clone()).unwrap();
        assert!(matches!(resource, AnyResource::Other(_)));
        assert_eq!(resource.resource_type(), "Patient");
        assert_eq!(serde_json::to_value(&resource).unwrap(), raw);
    }

    #[test]
    fn test_missing_resource_type_rejected() {
        let err = serde_json::from_value::<AnyResource>(json!({"id": "x"})).unwrap_err();
        assert!(err.to_string().contains("resourceType"));
    }

    #[test]
    fn test_from_json_rejects_unregistered_type() {
        let err = AnyResource::from_json(&json!({"resourceType": "Patient"})).unwrap_err();
        let result = err.validation_result().unwrap();
        assert!(result.has_error(crate::validation::ValidationErrorKind::UnknownResourceType));
    }

    #[test]
    fn test_shared_value_sets() {
        use crate::model::CodeEnum;
        assert_eq!(RequestStatus::from_code("on-hold"), Some(RequestStatus::OnHold));
        assert_eq!(FinancialResourceStatus::CODES.len(), 4);
        assert_eq!(EligibilityPurpose::Benefits.to_string(), "benefits");
    }
}
