pub mod engine;
pub mod field_validator;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

pub use engine::{FhirSchemaValidator, ResourceValidator};
pub use field_validator::check_primitive;

/// Stable classification of a validation finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValidationErrorKind {
    MissingRequiredField,
    TypeMismatch,
    InvalidEnumValue,
    MultipleChoiceFieldsSet,
    UnknownField,
    UnknownResourceType,
    RecursionDepthExceeded,
    ResourceTypeMismatch,
    /// Only ever reported as a warning.
    PeriodOutOfOrder,
}

impl ValidationErrorKind {
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingRequiredField => "missing-required-field",
            Self::TypeMismatch => "type-mismatch",
            Self::InvalidEnumValue => "invalid-enum-value",
            Self::MultipleChoiceFieldsSet => "multiple-choice-fields-set",
            Self::UnknownField => "unknown-field",
            Self::UnknownResourceType => "unknown-resource-type",
            Self::RecursionDepthExceeded => "recursion-depth-exceeded",
            Self::ResourceTypeMismatch => "resource-type-mismatch",
            Self::PeriodOutOfOrder => "period-out-of-order",
        }
    }
}

impl fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub kind: ValidationErrorKind,

    /// Dotted path with list indices, e.g. `reaction[2].manifestation[0].text`.
    /// Empty for the root value.
    pub path: String,

    pub message: String,

    /// Accepted values, for enum and choice findings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected: Option<Vec<String>>,
}

impl ValidationError {
    pub fn new(
        kind: ValidationErrorKind,
        path: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            path: path.into(),
            message: message.into(),
            expected: None,
        }
    }

    pub fn with_expected(mut self, expected: Vec<String>) -> Self {
        self.expected = Some(expected);
        self
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "[{}] {}", self.kind, self.message)
        } else {
            write!(f, "[{}] {}: {}", self.kind, self.path, self.message)
        }
    }
}

/// Every finding of one validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationError>,
    pub valid: bool,
}

impl ValidationResult {
    pub fn success() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
            valid: true,
        }
    }

    pub fn from_findings(errors: Vec<ValidationError>, warnings: Vec<ValidationError>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
            warnings,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn has_error(&self, kind: ValidationErrorKind) -> bool {
        self.errors.iter().any(|e| e.kind == kind)
    }

    pub fn errors_of(&self, kind: ValidationErrorKind) -> impl Iterator<Item = &ValidationError> {
        self.errors.iter().filter(move |e| e.kind == kind)
    }

    pub fn errors_at<'a>(&'a self, path: &'a str) -> impl Iterator<Item = &'a ValidationError> {
        self.errors.iter().filter(move |e| e.path == path)
    }

    /// Errors grouped by the path they were reported at.
    pub fn by_path(&self) -> BTreeMap<&str, Vec<&ValidationError>> {
        let mut grouped: BTreeMap<&str, Vec<&ValidationError>> = BTreeMap::new();
        for error in &self.errors {
            grouped.entry(error.path.as_str()).or_default().push(error);
        }
        grouped
    }

    pub fn merge(&mut self, other: ValidationResult) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
        self.valid = self.errors.is_empty();
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for error in &self.errors {
            writeln!(f, "{error}")?;
        }
        Ok(())
    }
}

/// Validation context that tracks the current path and nesting depth
#[derive(Debug)]
pub struct ValidationContext {
    /// Current path in the value being validated
    pub current_path: String,

    /// Saved paths for nested validation
    path_stack: Vec<usize>,

    /// Object nesting below the root
    pub depth: usize,

    errors: Vec<ValidationError>,
    warnings: Vec<ValidationError>,
    stop_at_first: bool,
}

impl ValidationContext {
    pub fn new(stop_at_first: bool) -> Self {
        Self {
            current_path: String::new(),
            path_stack: Vec::new(),
            depth: 0,
            errors: Vec::new(),
            warnings: Vec::new(),
            stop_at_first,
        }
    }

    /// Enter a named field.
    pub fn push_field(&mut self, field: &str) {
        self.path_stack.push(self.current_path.len());
        if !self.current_path.is_empty() {
            self.current_path.push('.');
        }
        self.current_path.push_str(field);
    }

    /// Enter a list item of the current field.
    pub fn push_index(&mut self, index: usize) {
        self.path_stack.push(self.current_path.len());
        self.current_path.push('[');
        self.current_path.push_str(&index.to_string());
        self.current_path.push(']');
    }

    pub fn pop_path(&mut self) {
        if let Some(len) = self.path_stack.pop() {
            self.current_path.truncate(len);
        }
    }

    pub fn add_error(&mut self, kind: ValidationErrorKind, message: impl Into<String>) {
        self.push_error(ValidationError::new(kind, self.current_path.clone(), message));
    }

    pub fn push_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, kind: ValidationErrorKind, message: impl Into<String>) {
        self.warnings
            .push(ValidationError::new(kind, self.current_path.clone(), message));
    }

    /// True once further checks are pointless under fail-fast mode.
    pub fn should_stop(&self) -> bool {
        self.stop_at_first && !self.errors.is_empty()
    }

    pub fn into_result(self) -> ValidationResult {
        ValidationResult::from_findings(self.errors, self.warnings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_paths() {
        let mut ctx = ValidationContext::new(false);
        ctx.push_field("reaction");
        ctx.push_index(2);
        ctx.push_field("manifestation");
        ctx.push_index(0);
        ctx.push_field("text");
        assert_eq!(ctx.current_path, "reaction[2].manifestation[0].text");
        ctx.pop_path();
        ctx.pop_path();
        assert_eq!(ctx.current_path, "reaction[2].manifestation");
        ctx.pop_path();
        ctx.pop_path();
        ctx.pop_path();
        assert_eq!(ctx.current_path, "");
    }

    #[test]
    fn test_result_grouping() {
        let mut ctx = ValidationContext::new(false);
        ctx.push_field("status");
        ctx.add_error(ValidationErrorKind::InvalidEnumValue, "bad");
        ctx.add_error(ValidationErrorKind::TypeMismatch, "worse");
        ctx.pop_path();
        ctx.add_warning(ValidationErrorKind::PeriodOutOfOrder, "late");
        let result = ctx.into_result();

        assert!(!result.is_valid());
        assert_eq!(result.by_path()["status"].len(), 2);
        assert_eq!(result.warnings.len(), 1);
        assert!(result.has_error(ValidationErrorKind::TypeMismatch));
        assert_eq!(
            result.errors[0].to_string(),
            "[invalid-enum-value] status: bad"
        );
    }

    #[test]
    fn test_warnings_keep_result_valid() {
        let result = ValidationResult::from_findings(
            Vec::new(),
            vec![ValidationError::new(
                ValidationErrorKind::PeriodOutOfOrder,
                "period",
                "end before start",
            )],
        );
        assert!(result.is_valid());
    }
}
