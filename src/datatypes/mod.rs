//! Reusable FHIR datatypes shared by every resource.
//!
//! Date and time kinds stay textual so partial dates and the original
//! lexical form survive a round trip; decimals keep their JSON number.

pub mod element;
pub mod general;
pub mod quantity;
pub mod special;

use serde::{Deserialize, Serialize};

use crate::resources::AnyResource;
use crate::types::FhirSchema;

pub use general::*;
pub use quantity::*;
pub use special::*;

pub type Decimal = serde_json::Number;
pub type FhirDate = String;
pub type FhirDateTime = String;
pub type FhirInstant = String;
pub type FhirTime = String;
pub type Markdown = String;

/// Elements every resource carries. Flattened into each resource record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainResource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub implicit_rules: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<Narrative>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contained: Vec<AnyResource>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifier_extension: Vec<Extension>,
}

impl DomainResource {
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Default::default()
        }
    }
}

/// Extension slots of a backbone element. Flattened into each backbone record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackboneElement {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension: Vec<Extension>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifier_extension: Vec<Extension>,
}

/// Schemas of every shared datatype.
pub(crate) fn schemas() -> Vec<FhirSchema> {
    let mut schemas = general::schemas();
    schemas.extend(quantity::schemas());
    schemas.extend(special::schemas());
    schemas
}
