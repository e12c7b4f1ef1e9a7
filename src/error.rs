use thiserror::Error;

use crate::validation::ValidationResult;

#[derive(Error, Debug)]
pub enum FhirSchemaError {
    #[error("Validation error: {type_name} has {} error(s)", .result.errors.len())]
    Validation {
        type_name: String,
        result: ValidationResult,
    },

    #[error("Unknown resource type: {tag}")]
    UnknownResourceType { tag: String },

    #[error("Unknown schema: {name}")]
    UnknownSchema {
        name: String,
        referenced_by: Option<String>,
    },

    #[error("Schema already registered: {name}")]
    DuplicateSchema { name: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl FhirSchemaError {
    pub fn validation(type_name: impl Into<String>, result: ValidationResult) -> Self {
        Self::Validation {
            type_name: type_name.into(),
            result,
        }
    }

    pub fn unknown_resource_type(tag: impl Into<String>) -> Self {
        Self::UnknownResourceType { tag: tag.into() }
    }

    pub fn unknown_schema(name: impl Into<String>, referenced_by: Option<String>) -> Self {
        Self::UnknownSchema {
            name: name.into(),
            referenced_by,
        }
    }

    pub fn duplicate_schema(name: impl Into<String>) -> Self {
        Self::DuplicateSchema { name: name.into() }
    }

    /// The collected validation issues, when this error came from validation.
    pub fn validation_result(&self) -> Option<&ValidationResult> {
        match self {
            Self::Validation { result, .. } => Some(result),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, FhirSchemaError>;
