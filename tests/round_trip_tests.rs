mod common;

use common::*;
use octofhir_resource_schema::*;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

fn assert_round_trip<T: FhirType>(raw: Value) -> T {
    let decoded = T::from_json(&raw).unwrap();
    assert_eq!(decoded.to_json().unwrap(), raw);
    decoded
}

#[test]
fn test_coverage_round_trip() {
    let coverage: Coverage = assert_round_trip(coverage_json());
    assert_eq!(coverage.status, FinancialResourceStatus::Active);
    assert_eq!(coverage.class.len(), 2);
    assert_eq!(coverage.class[1].value, "B37FC");
    assert!(matches!(
        coverage.cost_to_beneficiary[0].value,
        Some(CostToBeneficiaryValue::Money(_))
    ));
    assert_eq!(coverage.id(), Some("cov-1"));
}

#[test]
fn test_observation_round_trip() {
    let observation: Observation = assert_round_trip(observation_json());
    assert_eq!(observation.status, ObservationStatus::Final);
    assert_eq!(
        observation.effective,
        Some(ObservationEffective::DateTime("2012-09-17".to_string()))
    );
    assert_eq!(observation.value, None);
    assert_eq!(observation.component.len(), 2);
    let Some(ObservationValue::Quantity(systolic)) = &observation.component[0].value else {
        panic!("expected a quantity value");
    };
    assert_eq!(systolic.unit.as_deref(), Some("mmHg"));
    assert_eq!(observation.component[1].reference_range[0].text.as_deref(), Some("normal"));
}

#[test]
fn test_allergy_intolerance_round_trip() {
    let allergy: AllergyIntolerance = assert_round_trip(allergy_intolerance_json());
    assert_eq!(allergy.category, vec![AllergyIntoleranceCategory::Food]);
    assert_eq!(allergy.criticality, Some(AllergyIntoleranceCriticality::High));
    assert_eq!(allergy.onset, Some(AllergyIntoleranceOnset::DateTime("2004".to_string())));
    assert_eq!(allergy.reaction.len(), 3);
    assert_eq!(allergy.reaction[2].manifestation.len(), 2);
}

#[test]
fn test_care_plan_round_trip() {
    let plan: CarePlan = assert_round_trip(care_plan_json());
    assert_eq!(plan.intent, CarePlanIntent::Plan);
    let detail = plan.activity[0].detail.as_ref().unwrap();
    assert_eq!(detail.status, CarePlanActivityStatus::Scheduled);
    assert_eq!(
        detail.scheduled,
        Some(CarePlanActivityScheduled::String("Every two weeks".to_string()))
    );
}

#[test]
fn test_care_team_round_trip() {
    let team: CareTeam = assert_round_trip(care_team_json());
    assert_eq!(team.status, CareTeamStatus::Active);
    assert_eq!(team.telecom[0].rank, Some(1));
}

#[test]
fn test_composition_round_trip() {
    let composition: Composition = assert_round_trip(composition_json());
    assert_eq!(composition.title, "Consultation Note");
    assert_eq!(composition.section[0].depth(), 3);
    assert_eq!(composition.relates_to[0].code, DocumentRelationshipType::Replaces);
}

#[test]
fn test_eligibility_request_round_trip() {
    let request: CoverageEligibilityRequest = assert_round_trip(eligibility_request_json());
    assert_eq!(
        request.purpose,
        vec![EligibilityPurpose::Validation, EligibilityPurpose::Benefits]
    );
    assert_eq!(request.supporting_info[0].sequence, 1);
    assert_eq!(
        request.serviced,
        Some(EligibilityServiced::Date("2014-09-17".to_string()))
    );
}

#[test]
fn test_eligibility_response_round_trip() {
    let response: CoverageEligibilityResponse = assert_round_trip(eligibility_response_json());
    assert_eq!(response.outcome, RemittanceOutcome::Complete);
    let benefits = &response.insurance[0].item[0].benefit;
    assert!(matches!(benefits[0].allowed, Some(BenefitAllowed::Money(_))));
    assert_eq!(benefits[1].allowed, Some(BenefitAllowed::UnsignedInt(20)));
    assert_eq!(benefits[1].used, Some(BenefitUsed::UnsignedInt(3)));
}

#[test]
fn test_device_round_trip() {
    let device: Device = assert_round_trip(device_json());
    assert_eq!(device.status, Some(DeviceStatus::Active));
    assert_eq!(device.udi_carrier[0].entry_type, Some(UdiEntryType::Barcode));
    assert!(device.udi_carrier[0].carrier_hrf.is_some());
    assert_eq!(device.property[0].value_quantity.len(), 2);
}

#[test]
fn test_device_request_round_trip() {
    let request: DeviceRequest = assert_round_trip(device_request_json());
    assert_eq!(request.intent, RequestIntent::OriginalOrder);
    assert!(matches!(request.code, Some(DeviceRequestCode::CodeableConcept(_))));
    assert!(matches!(request.occurrence, Some(DeviceRequestOccurrence::Period(_))));
}

#[test]
fn test_encounter_round_trip() {
    let encounter: Encounter = assert_round_trip(encounter_json());
    assert_eq!(encounter.status, EncounterStatus::Finished);
    assert_eq!(encounter.class.code.as_deref(), Some("HH"));
    assert_eq!(encounter.diagnosis[0].rank, Some(1));
}

#[test]
fn test_absent_optionals_are_omitted() {
    let coverage = Coverage::new(
        FinancialResourceStatus::Draft,
        Reference::to("Patient/1"),
        vec![Reference::to("Organization/1")],
    );
    assert_eq!(
        coverage.to_json().unwrap(),
        json!({
            "resourceType": "Coverage",
            "status": "draft",
            "beneficiary": {"reference": "Patient/1"},
            "payor": [{"reference": "Organization/1"}]
        })
    );
}

#[test]
fn test_built_record_validates() {
    let mut observation = Observation::new(ObservationStatus::Preliminary, CodeableConcept::text("Weight"));
    observation.value = Some(ObservationValue::Quantity(Quantity::ucum(72, "kg")));
    let raw = observation.to_json().unwrap();
    assert!(Observation::validate(&raw).unwrap().is_valid());
    assert_eq!(Observation::from_json(&raw).unwrap(), observation);
}

#[test]
fn test_parse_resource_dispatches() {
    let resource = parse_resource(&encounter_json()).unwrap();
    assert!(matches!(resource, AnyResource::Encounter(_)));
    assert_eq!(resource.resource_type(), "Encounter");
    assert_eq!(resource.id(), Some("home"));
    assert_eq!(serde_json::to_value(&resource).unwrap(), encounter_json());
}

#[test]
fn test_contained_resources_keep_their_type() {
    let mut raw = coverage_json();
    raw["contained"] = json!([
        {"resourceType": "Device", "id": "card-reader", "status": "active"},
        {"resourceType": "CareTeam", "id": "payers", "status": "proposed"}
    ]);
    let coverage: Coverage = assert_round_trip(raw);
    let contained = &coverage.domain.contained;
    assert!(matches!(contained[0], AnyResource::Device(_)));
    assert!(matches!(contained[1], AnyResource::CareTeam(_)));
    assert_eq!(contained[1].id(), Some("payers"));
}

#[test]
fn test_contained_resource_fields_are_validated() {
    let mut raw = coverage_json();
    raw["contained"] = json!([{"resourceType": "Device", "status": "broken"}]);
    let result = Coverage::validate(&raw).unwrap();
    let error = result.errors_of(ValidationErrorKind::InvalidEnumValue).next().unwrap();
    assert_eq!(error.path, "contained[0].status");
}

#[test]
fn test_unregistered_contained_type_is_rejected() {
    let mut raw = coverage_json();
    raw["contained"] = json!([{"resourceType": "Patient", "id": "p"}]);
    let result = Coverage::validate(&raw).unwrap();
    let error = result.errors_of(ValidationErrorKind::UnknownResourceType).next().unwrap();
    assert_eq!(error.path, "contained[0].resourceType");
}
