use serde::{Deserialize, Serialize};

use crate::datatypes::element as el;
use crate::datatypes::{
    Annotation, BackboneElement, CodeableConcept, ContactPoint, DomainResource, FhirDateTime,
    Identifier, Quantity, Reference,
};
use crate::model::ResourceTag;
use crate::types::FhirSchema;

code_enum! {
    UdiEntryType = "http://hl7.org/fhir/ValueSet/udi-entry-type" {
        Barcode => "barcode",
        Rfid => "rfid",
        Manual => "manual",
    }
}

code_enum! {
    DeviceStatus = "http://hl7.org/fhir/ValueSet/device-status" {
        Active => "active",
        Inactive => "inactive",
        EnteredInError => "entered-in-error",
        Unknown => "unknown",
    }
}

code_enum! {
    DeviceNameType = "http://hl7.org/fhir/ValueSet/device-nametype" {
        UdiLabelName => "udi-label-name",
        UserFriendlyName => "user-friendly-name",
        PatientReportedName => "patient-reported-name",
        ManufacturerName => "manufacturer-name",
        ModelName => "model-name",
        Other => "other",
    }
}

/// Unique Device Identifier (UDI) barcode or RFID string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceUdiCarrier {
    #[serde(flatten)]
    pub backbone: BackboneElement,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jurisdiction: Option<String>,
    #[serde(rename = "carrierAIDC", skip_serializing_if = "Option::is_none")]
    pub carrier_aidc: Option<String>,
    #[serde(rename = "carrierHRF", skip_serializing_if = "Option::is_none")]
    pub carrier_hrf: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry_type: Option<UdiEntryType>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceName {
    #[serde(flatten)]
    pub backbone: BackboneElement,
    pub name: String,
    pub r#type: DeviceNameType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceSpecialization {
    #[serde(flatten)]
    pub backbone: BackboneElement,
    pub system_type: CodeableConcept,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceVersion {
    #[serde(flatten)]
    pub backbone: BackboneElement,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<CodeableConcept>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component: Option<Identifier>,
    pub value: String,
}

/// Configuration or setting capability; both value lists may be present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceProperty {
    #[serde(flatten)]
    pub backbone: BackboneElement,
    pub r#type: CodeableConcept,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub value_quantity: Vec<Quantity>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub value_code: Vec<CodeableConcept>,
}

/// [Device](<https://hl7.org/fhir/R4/device.html>)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    pub resource_type: ResourceTag<Device>,
    #[serde(flatten)]
    pub domain: DomainResource,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub identifier: Vec<Identifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definition: Option<Reference>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub udi_carrier: Vec<DeviceUdiCarrier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<DeviceStatus>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub status_reason: Vec<CodeableConcept>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distinct_identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacture_date: Option<FhirDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<FhirDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lot_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub device_name: Vec<DeviceName>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub part_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<CodeableConcept>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub specialization: Vec<DeviceSpecialization>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub version: Vec<DeviceVersion>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub property: Vec<DeviceProperty>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient: Option<Reference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<Reference>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contact: Vec<ContactPoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Reference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub note: Vec<Annotation>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub safety: Vec<CodeableConcept>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<Reference>,
}

fhir_type!(
    DeviceUdiCarrier,
    DeviceName,
    DeviceSpecialization,
    DeviceVersion,
    DeviceProperty
);
fhir_resource!(Device);

pub(crate) fn schemas() -> Vec<FhirSchema> {
    vec![
        FhirSchema::resource("Device")
            .with_description("A manufactured item used in the provision of healthcare")
            .with_element("identifier", el::of("Identifier").array())
            .with_element("definition", el::reference())
            .with_element("udiCarrier", el::of("DeviceUdiCarrier").array())
            .with_element("status", el::bound::<DeviceStatus>())
            .with_element("statusReason", el::concept().array())
            .with_element("distinctIdentifier", el::string())
            .with_element("manufacturer", el::string())
            .with_element("manufactureDate", el::date_time())
            .with_element("expirationDate", el::date_time())
            .with_element("lotNumber", el::string())
            .with_element("serialNumber", el::string())
            .with_element("deviceName", el::of("DeviceName").array())
            .with_element("modelNumber", el::string())
            .with_element("partNumber", el::string())
            .with_element("type", el::concept())
            .with_element("specialization", el::of("DeviceSpecialization").array())
            .with_element("version", el::of("DeviceVersion").array())
            .with_element("property", el::of("DeviceProperty").array())
            .with_element("patient", el::reference())
            .with_element("owner", el::reference())
            .with_element("contact", el::of("ContactPoint").array())
            .with_element("location", el::reference())
            .with_element("url", el::uri())
            .with_element("note", el::of("Annotation").array())
            .with_element("safety", el::concept().array())
            .with_element("parent", el::reference()),
        FhirSchema::backbone("DeviceUdiCarrier")
            .with_element("deviceIdentifier", el::string())
            .with_element("issuer", el::uri())
            .with_element("jurisdiction", el::uri())
            .with_element("carrierAIDC", el::string())
            .with_element("carrierHRF", el::string())
            .with_element("entryType", el::bound::<UdiEntryType>()),
        FhirSchema::backbone("DeviceName")
            .with_element("name", el::string().required())
            .with_element("type", el::bound::<DeviceNameType>().required()),
        FhirSchema::backbone("DeviceSpecialization")
            .with_element("systemType", el::concept().required())
            .with_element("version", el::string()),
        FhirSchema::backbone("DeviceVersion")
            .with_element("type", el::concept())
            .with_element("component", el::of("Identifier"))
            .with_element("value", el::string().required()),
        FhirSchema::backbone("DeviceProperty")
            .with_element("type", el::concept().required())
            .with_element("valueQuantity", el::of("Quantity").array())
            .with_element("valueCode", el::concept().array()),
    ]
}
