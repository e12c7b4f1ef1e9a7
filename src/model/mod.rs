//! Typed records on top of the schema engine.
//!
//! Every record is checked by [`FhirSchemaValidator`] before serde decodes
//! it, so decoding only ever sees structurally valid input and a record is
//! either produced whole or not at all.

#[macro_use]
mod macros;

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::marker::PhantomData;

use crate::datatypes::DomainResource;
use crate::error::{FhirSchemaError, Result};
use crate::validation::{FhirSchemaValidator, ValidationResult};

/// A closed set of codes bound to a `code` element.
pub trait CodeEnum: Sized + Copy + 'static {
    const VALUE_SET: &'static str;
    const CODES: &'static [&'static str];

    fn as_str(&self) -> &'static str;

    fn from_code(code: &str) -> Option<Self>;
}

pub trait FhirTypeName {
    /// Name of the schema this type is validated against.
    const TYPE_NAME: &'static str;
    const IS_RESOURCE: bool = false;
}

pub trait FhirType: FhirTypeName + Serialize + DeserializeOwned {
    /// Validate against the built-in registry, then decode.
    fn from_json(raw: &Value) -> Result<Self> {
        Self::from_json_with(FhirSchemaValidator::builtin(), raw)
    }

    fn from_json_with(validator: &FhirSchemaValidator, raw: &Value) -> Result<Self> {
        let result = Self::validate_with(validator, raw)?;
        if !result.is_valid() {
            tracing::debug!(
                type_name = Self::TYPE_NAME,
                errors = result.errors.len(),
                "Rejecting invalid input"
            );
            return Err(FhirSchemaError::validation(Self::TYPE_NAME, result));
        }
        Ok(Self::deserialize(raw)?)
    }

    fn validate(raw: &Value) -> Result<ValidationResult> {
        Self::validate_with(FhirSchemaValidator::builtin(), raw)
    }

    fn validate_with(validator: &FhirSchemaValidator, raw: &Value) -> Result<ValidationResult> {
        if Self::IS_RESOURCE {
            Ok(validator.validate_resource(raw, Self::TYPE_NAME))
        } else {
            validator.validate_type(raw, Self::TYPE_NAME)
        }
    }

    /// Serialise back to the wire shape. Absent optionals are omitted.
    fn to_json(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }
}

pub trait FhirResource: FhirType {
    fn resource_type(&self) -> &'static str {
        Self::TYPE_NAME
    }

    fn domain(&self) -> &DomainResource;

    fn domain_mut(&mut self) -> &mut DomainResource;

    fn id(&self) -> Option<&str> {
        self.domain().id.as_deref()
    }
}

/// The `resourceType` discriminant of `T`. Always serialises as
/// `T::TYPE_NAME` and refuses any other value when decoding.
pub struct ResourceTag<T>(PhantomData<fn() -> T>);

impl<T> ResourceTag<T> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T: FhirTypeName> ResourceTag<T> {
    pub fn as_str(&self) -> &'static str {
        T::TYPE_NAME
    }
}

impl<T> Default for ResourceTag<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for ResourceTag<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ResourceTag<T> {}

impl<T> PartialEq for ResourceTag<T> {
    fn eq(&self, _: &Self) -> bool {
        true
    }
}

impl<T> Eq for ResourceTag<T> {}

impl<T: FhirTypeName> fmt::Debug for ResourceTag<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ResourceTag({})", T::TYPE_NAME)
    }
}

impl<T: FhirTypeName> Serialize for ResourceTag<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(T::TYPE_NAME)
    }
}

impl<'de, T: FhirTypeName> Deserialize<'de> for ResourceTag<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        if tag == T::TYPE_NAME {
            Ok(Self::new())
        } else {
            Err(D::Error::custom(format!(
                "expected resourceType '{}', found '{tag}'",
                T::TYPE_NAME
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::Coverage;

    #[test]
    fn test_resource_tag_round_trip() {
        let tag: ResourceTag<Coverage> = serde_json::from_value(Value::from("Coverage")).unwrap();
        assert_eq!(serde_json::to_value(tag).unwrap(), Value::from("Coverage"));
        assert_eq!(tag.as_str(), "Coverage");
    }

    #[test]
    fn test_resource_tag_rejects_other_types() {
        let err = serde_json::from_value::<ResourceTag<Coverage>>(Value::from("Device"))
            .unwrap_err();
        assert!(err.to_string().contains("expected resourceType 'Coverage'"));
    }
}
