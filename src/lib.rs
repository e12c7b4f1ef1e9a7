//! # OctoFHIR Resource Schema
//!
//! Typed FHIR R4 clinical and financial resources backed by a closed,
//! schema-driven validator.
//!
//! ## Features
//!
//! - **Closed schemas**: unknown fields are rejected, with suggestions for likely typos
//! - **Choice fields**: at most one alternative of each `value[x]`-style group
//! - **Value sets**: bound `code` elements only accept their declared codes
//! - **Path reporting**: every finding carries its path, e.g. `reaction[2].manifestation[0]`
//! - **Depth guard**: self-referencing structures are bounded by a configurable depth
//! - **Open registry**: custom schemas can be registered next to the built-in ones
//!
//! ## Quick Start
//!
//! ```rust
//! use octofhir_resource_schema::{Coverage, FhirType};
//! use serde_json::json;
//!
//! let raw = json!({
//!     "resourceType": "Coverage",
//!     "status": "active",
//!     "beneficiary": {"reference": "Patient/1"},
//!     "payor": [{"reference": "Organization/2"}]
//! });
//! let coverage = Coverage::from_json(&raw)?;
//! assert_eq!(coverage.to_json()?, raw);
//! # Ok::<(), octofhir_resource_schema::FhirSchemaError>(())
//! ```

#[macro_use]
pub mod model;

pub mod core;
pub mod datatypes;
pub mod error;
pub mod resources;
pub mod types;
pub mod validation;

use serde_json::Value;

pub use crate::core::{DEFAULT_MAX_DEPTH, ValidatorConfig};
pub use datatypes::*;
pub use error::{FhirSchemaError, Result};
pub use model::{CodeEnum, FhirResource, FhirType, FhirTypeName, ResourceTag};
pub use resources::*;
pub use types::{
    ElementType, FhirSchema, FhirSchemaBinding, FhirSchemaElement, PrimitiveType, SchemaKind,
    SchemaRegistry, SchemaRegistryBuilder,
};
pub use validation::{
    FhirSchemaValidator, ResourceValidator, ValidationError, ValidationErrorKind,
    ValidationResult,
};

/// Validate and decode a resource of any registered type.
pub fn parse_resource(raw: &Value) -> Result<AnyResource> {
    AnyResource::from_json(raw)
}
