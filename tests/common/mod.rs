use serde_json::{Value, json};

#[allow(dead_code)]
pub fn coverage_json() -> Value {
    json!({
        "resourceType": "Coverage",
        "id": "cov-1",
        "status": "active",
        "type": {
            "coding": [{
                "system": "http://terminology.hl7.org/CodeSystem/v3-ActCode",
                "code": "EHCPOL",
                "display": "extended healthcare"
            }]
        },
        "subscriberId": "AB9876",
        "beneficiary": {"reference": "Patient/4"},
        "dependent": "1",
        "relationship": {"coding": [{"code": "self"}]},
        "period": {"start": "2011-05-23", "end": "2012-05-23"},
        "payor": [{"reference": "Organization/2"}],
        "class": [
            {
                "type": {"coding": [{"code": "group"}]},
                "value": "CB135",
                "name": "Corporate Baker's Inc. Local #35"
            },
            {
                "type": {"coding": [{"code": "plan"}]},
                "value": "B37FC"
            }
        ],
        "costToBeneficiary": [{
            "type": {"coding": [{"code": "gpvisit"}]},
            "valueMoney": {"value": 20.0, "currency": "USD"},
            "exception": [{"type": {"text": "retired"}}]
        }]
    })
}

#[allow(dead_code)]
pub fn observation_json() -> Value {
    json!({
        "resourceType": "Observation",
        "id": "blood-pressure",
        "status": "final",
        "category": [{
            "coding": [{
                "system": "http://terminology.hl7.org/CodeSystem/observation-category",
                "code": "vital-signs"
            }]
        }],
        "code": {
            "coding": [{"system": "http://loinc.org", "code": "85354-9"}],
            "text": "Blood pressure"
        },
        "subject": {"reference": "Patient/example"},
        "effectiveDateTime": "2012-09-17",
        "issued": "2012-09-17T15:12:00+02:00",
        "performer": [{"reference": "Practitioner/example"}],
        "interpretation": [{"coding": [{"code": "L"}]}],
        "bodySite": {"text": "Right arm"},
        "component": [
            {
                "code": {"coding": [{"system": "http://loinc.org", "code": "8480-6"}]},
                "valueQuantity": {
                    "value": 107,
                    "unit": "mmHg",
                    "system": "http://unitsofmeasure.org",
                    "code": "mm[Hg]"
                }
            },
            {
                "code": {"coding": [{"system": "http://loinc.org", "code": "8462-4"}]},
                "valueQuantity": {
                    "value": 60,
                    "unit": "mmHg",
                    "system": "http://unitsofmeasure.org",
                    "code": "mm[Hg]"
                },
                "referenceRange": [{
                    "low": {"value": 60, "unit": "mmHg"},
                    "high": {"value": 80, "unit": "mmHg"},
                    "text": "normal"
                }]
            }
        ]
    })
}

#[allow(dead_code)]
pub fn allergy_intolerance_json() -> Value {
    json!({
        "resourceType": "AllergyIntolerance",
        "id": "allergy-1",
        "clinicalStatus": {"coding": [{"code": "active"}]},
        "type": "allergy",
        "category": ["food"],
        "criticality": "high",
        "code": {"text": "Cashew nuts"},
        "patient": {"reference": "Patient/example"},
        "onsetDateTime": "2004",
        "recordedDate": "2014-10-09T14:58:00+11:00",
        "note": [{"authorString": "Dr. Nut", "text": "The criticality is high"}],
        "reaction": [
            {
                "manifestation": [{"text": "Anaphylactic reaction"}],
                "severity": "severe"
            },
            {
                "manifestation": [{"text": "Urticaria"}],
                "onset": "2004",
                "severity": "moderate"
            },
            {
                "manifestation": [{"text": "Hives"}, {"text": "Swelling"}],
                "severity": "mild"
            }
        ]
    })
}

#[allow(dead_code)]
pub fn care_plan_json() -> Value {
    json!({
        "resourceType": "CarePlan",
        "id": "plan-1",
        "status": "active",
        "intent": "plan",
        "title": "Weight management",
        "subject": {"reference": "Patient/example"},
        "period": {"start": "2023-01-01", "end": "2023-12-31"},
        "activity": [{
            "outcomeCodeableConcept": [{"text": "On track"}],
            "detail": {
                "kind": "ServiceRequest",
                "code": {"text": "Diet consultation"},
                "status": "scheduled",
                "doNotPerform": false,
                "scheduledString": "Every two weeks",
                "productCodeableConcept": {"text": "Meal plan"},
                "dailyAmount": {"value": 1, "unit": "session"}
            }
        }],
        "note": [{"text": "Patient motivated"}]
    })
}

#[allow(dead_code)]
pub fn care_team_json() -> Value {
    json!({
        "resourceType": "CareTeam",
        "id": "team-1",
        "status": "active",
        "name": "Peter James Charlmers Care Plan for Inpatient Encounter",
        "subject": {"reference": "Patient/example"},
        "period": {"end": "2013-01-01"},
        "participant": [{
            "role": [{"text": "responsiblePerson"}],
            "member": {"reference": "Patient/example"}
        }],
        "telecom": [{"system": "phone", "value": "555-0100", "use": "work", "rank": 1}]
    })
}

#[allow(dead_code)]
pub fn composition_json() -> Value {
    json!({
        "resourceType": "Composition",
        "id": "doc-1",
        "status": "final",
        "type": {"coding": [{"system": "http://loinc.org", "code": "11488-4"}]},
        "subject": {"reference": "Patient/xcda"},
        "date": "2012-01-04T09:10:14Z",
        "author": [{"reference": "Practitioner/xcda-author"}],
        "title": "Consultation Note",
        "confidentiality": "N",
        "attester": [{"mode": "legal", "time": "2012-01-04T09:10:14Z"}],
        "relatesTo": [{
            "code": "replaces",
            "targetReference": {"reference": "Composition/old-doc"}
        }],
        "section": [{
            "title": "History of present illness",
            "mode": "snapshot",
            "text": {"status": "generated", "div": "<div xmlns=\"http://www.w3.org/1999/xhtml\">Dizzy</div>"},
            "section": [{
                "title": "Details",
                "section": [{"title": "Remarks", "entry": [{"reference": "Observation/1"}]}]
            }]
        }]
    })
}

#[allow(dead_code)]
pub fn eligibility_request_json() -> Value {
    json!({
        "resourceType": "CoverageEligibilityRequest",
        "id": "52345",
        "status": "active",
        "purpose": ["validation", "benefits"],
        "patient": {"reference": "Patient/pat1"},
        "servicedDate": "2014-09-17",
        "created": "2014-08-16",
        "insurer": {"reference": "Organization/2"},
        "supportingInfo": [{
            "sequence": 1,
            "information": {"reference": "DocumentReference/1"},
            "appliesToAll": true
        }],
        "insurance": [{"focal": true, "coverage": {"reference": "Coverage/9876B1"}}],
        "item": [{
            "supportingInfoSequence": [1],
            "category": {"text": "dental"},
            "unitPrice": {"value": 120, "currency": "USD"},
            "diagnosis": [{"diagnosisCodeableConcept": {"text": "caries"}}]
        }]
    })
}

#[allow(dead_code)]
pub fn eligibility_response_json() -> Value {
    json!({
        "resourceType": "CoverageEligibilityResponse",
        "id": "E2500",
        "status": "active",
        "purpose": ["validation"],
        "patient": {"reference": "Patient/pat1"},
        "servicedPeriod": {"start": "2014-09-17", "end": "2014-09-30"},
        "created": "2014-08-16",
        "request": {"reference": "CoverageEligibilityRequest/52345"},
        "outcome": "complete",
        "disposition": "Policy is currently in-force.",
        "insurer": {"reference": "Organization/2"},
        "insurance": [{
            "coverage": {"reference": "Coverage/9876B1"},
            "inforce": true,
            "item": [{
                "category": {"text": "medical"},
                "network": {"text": "in"},
                "benefit": [
                    {"type": {"text": "benefit"}, "allowedMoney": {"value": 500000, "currency": "USD"}},
                    {"type": {"text": "visit"}, "allowedUnsignedInt": 20, "usedUnsignedInt": 3}
                ]
            }]
        }]
    })
}

#[allow(dead_code)]
pub fn device_json() -> Value {
    json!({
        "resourceType": "Device",
        "id": "pump",
        "udiCarrier": [{
            "deviceIdentifier": "09504000059118",
            "carrierHRF": "(01)09504000059118(17)141120(10)7654321D(21)10987654d321",
            "entryType": "barcode"
        }],
        "status": "active",
        "manufacturer": "Acme Devices, Inc",
        "expirationDate": "2025-11-20",
        "lotNumber": "7654321D",
        "deviceName": [{"name": "FlowMaster", "type": "user-friendly-name"}],
        "type": {"text": "Infusion pump"},
        "version": [{"value": "10.23-23423"}],
        "property": [{
            "type": {"text": "flow range"},
            "valueQuantity": [{"value": 0.1, "unit": "mL/h"}, {"value": 999, "unit": "mL/h"}]
        }],
        "patient": {"reference": "Patient/example"},
        "url": "http://acme.com/devices/pump"
    })
}

#[allow(dead_code)]
pub fn device_request_json() -> Value {
    json!({
        "resourceType": "DeviceRequest",
        "id": "insulinpump",
        "status": "active",
        "intent": "original-order",
        "priority": "routine",
        "codeCodeableConcept": {"text": "Insulin delivery device panel"},
        "parameter": [{"code": {"text": "rate"}, "valueQuantity": {"value": 2, "unit": "U/h"}}],
        "subject": {"reference": "Patient/dicom"},
        "occurrencePeriod": {"start": "2013-05-08T09:33:27+07:00"},
        "authoredOn": "2013-05-08T09:33:27+07:00",
        "requester": {"reference": "Practitioner/example"},
        "note": [{"text": "this is the right device brand and model"}]
    })
}

#[allow(dead_code)]
pub fn encounter_json() -> Value {
    json!({
        "resourceType": "Encounter",
        "id": "home",
        "status": "finished",
        "class": {
            "system": "http://terminology.hl7.org/CodeSystem/v3-ActCode",
            "code": "HH",
            "display": "home health"
        },
        "subject": {"reference": "Patient/example"},
        "participant": [{
            "period": {"start": "2015-01-17T16:00:00+10:00", "end": "2015-01-17T16:30:00+10:00"},
            "individual": {"reference": "Practitioner/example"}
        }],
        "period": {"start": "2015-01-17T16:00:00+10:00", "end": "2015-01-17T16:30:00+10:00"},
        "length": {"value": 30, "unit": "min", "system": "http://unitsofmeasure.org", "code": "min"},
        "diagnosis": [{"condition": {"reference": "Condition/stroke"}, "rank": 1}],
        "location": [{
            "location": {"reference": "Location/home"},
            "status": "completed",
            "period": {"start": "2015-01-17T16:00:00+10:00"}
        }]
    })
}

/// A Composition whose sections nest `depth` levels deep.
#[allow(dead_code)]
pub fn nested_composition(depth: usize) -> Value {
    let mut section = json!({"title": format!("level-{depth}")});
    for level in (1..depth).rev() {
        section = json!({"title": format!("level-{level}"), "section": [section]});
    }
    json!({
        "resourceType": "Composition",
        "status": "preliminary",
        "type": {"text": "note"},
        "date": "2024-03-01",
        "author": [{"display": "Author"}],
        "title": "Nested",
        "section": [section]
    })
}
