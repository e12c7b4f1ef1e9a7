use chrono::{DateTime, FixedOffset, NaiveDate};
use once_cell::sync::Lazy;
use serde_json::{Map, Value};
use std::sync::Arc;

use super::field_validator::{check_primitive, json_type_name, suggest_fields};
use super::{ValidationContext, ValidationError, ValidationErrorKind, ValidationResult};
use crate::core::ValidatorConfig;
use crate::error::{FhirSchemaError, Result};
use crate::types::{ElementType, FhirSchema, FhirSchemaElement, SchemaRegistry, check_choice_groups};

const RESOURCE_TYPE: &str = "resourceType";

static BUILTIN_VALIDATOR: Lazy<FhirSchemaValidator> =
    Lazy::new(|| FhirSchemaValidator::new(SchemaRegistry::builtin().clone()));

/// Validates raw JSON against the schemas of a registry.
///
/// Validation never stops at the first problem unless configured to: every
/// finding of one pass lands in the returned [`ValidationResult`].
#[derive(Debug, Clone)]
pub struct FhirSchemaValidator {
    registry: Arc<SchemaRegistry>,
    config: ValidatorConfig,
}

impl FhirSchemaValidator {
    pub fn new(registry: Arc<SchemaRegistry>) -> Self {
        Self {
            registry,
            config: ValidatorConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ValidatorConfig) -> Self {
        self.config = config;
        self
    }

    /// Shared validator over the built-in registry with default settings.
    pub fn builtin() -> &'static FhirSchemaValidator {
        &BUILTIN_VALIDATOR
    }

    pub fn registry(&self) -> &SchemaRegistry {
        &self.registry
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Validate a resource of unknown type, selecting the schema by its
    /// `resourceType`.
    pub fn validate(&self, raw: &Value) -> ValidationResult {
        let mut ctx = self.context();
        if let Some(object) = self.expect_object(&mut ctx, raw) {
            if let Some(schema) = self.resource_schema(&mut ctx, object) {
                self.validate_object(&mut ctx, schema, object);
            }
        }
        self.finish(ctx, "Resource")
    }

    /// Validate `raw` as a resource of `resource_type`. A disagreeing or
    /// missing discriminant is the only reported error; fields are not
    /// examined in that case.
    pub fn validate_resource(&self, raw: &Value, resource_type: &str) -> ValidationResult {
        match self.resolve(resource_type) {
            Ok(validator) => validator.validate(raw),
            Err(_) => {
                let mut ctx = self.context();
                ctx.add_error(
                    ValidationErrorKind::UnknownResourceType,
                    format!("'{resource_type}' is not a registered resource type"),
                );
                ctx.into_result()
            }
        }
    }

    /// Validate `raw` against any registered schema: a datatype, backbone or
    /// resource. Resource names go through [`Self::resolve`], so the
    /// discriminant is checked as usual.
    pub fn validate_type(&self, raw: &Value, type_name: &str) -> Result<ValidationResult> {
        let schema = self
            .registry
            .get(type_name)
            .ok_or_else(|| FhirSchemaError::unknown_schema(type_name, None))?;
        if schema.is_resource() {
            return Ok(self.resolve(type_name)?.validate(raw));
        }
        let mut ctx = self.context();
        if let Some(object) = self.expect_object(&mut ctx, raw) {
            self.validate_object(&mut ctx, schema, object);
        }
        Ok(self.finish(ctx, type_name))
    }

    /// Bind to a single resource type's schema.
    pub fn resolve(&self, tag: &str) -> Result<ResourceValidator<'_>> {
        let schema = self.registry.resolve(tag)?;
        Ok(ResourceValidator {
            validator: self,
            schema,
        })
    }

    fn context(&self) -> ValidationContext {
        ValidationContext::new(!self.config.collect_all)
    }

    fn finish(&self, ctx: ValidationContext, type_name: &str) -> ValidationResult {
        let result = ctx.into_result();
        tracing::debug!(
            type_name,
            errors = result.errors.len(),
            warnings = result.warnings.len(),
            "Validation finished"
        );
        result
    }

    fn expect_object<'v>(
        &self,
        ctx: &mut ValidationContext,
        value: &'v Value,
    ) -> Option<&'v Map<String, Value>> {
        match value {
            Value::Object(object) => Some(object),
            other => {
                ctx.add_error(
                    ValidationErrorKind::TypeMismatch,
                    format!("expected object, found {}", json_type_name(other)),
                );
                None
            }
        }
    }

    /// Look up the schema named by an object's discriminant.
    fn resource_schema(
        &self,
        ctx: &mut ValidationContext,
        object: &Map<String, Value>,
    ) -> Option<&FhirSchema> {
        ctx.push_field(RESOURCE_TYPE);
        let schema = match object.get(RESOURCE_TYPE) {
            Some(Value::String(tag)) => match self.registry.resolve(tag) {
                Ok(schema) => Some(schema.as_ref()),
                Err(_) => {
                    ctx.add_error(
                        ValidationErrorKind::UnknownResourceType,
                        format!("'{tag}' is not a registered resource type"),
                    );
                    None
                }
            },
            Some(other) => {
                ctx.add_error(
                    ValidationErrorKind::ResourceTypeMismatch,
                    format!("resourceType must be a string, found {}", json_type_name(other)),
                );
                None
            }
            None => {
                ctx.add_error(
                    ValidationErrorKind::ResourceTypeMismatch,
                    "resourceType is missing",
                );
                None
            }
        };
        ctx.pop_path();
        schema
    }

    fn validate_object(
        &self,
        ctx: &mut ValidationContext,
        schema: &FhirSchema,
        object: &Map<String, Value>,
    ) {
        for (key, value) in object {
            if ctx.should_stop() {
                return;
            }
            if schema.is_resource() && key == RESOURCE_TYPE {
                continue;
            }
            ctx.push_field(key);
            match schema.element(key) {
                Some(element) => self.validate_element(ctx, element, value),
                None => {
                    let suggestions = suggest_fields(schema, key);
                    let message = if suggestions.is_empty() {
                        format!("unknown field '{key}' on {}", schema.name)
                    } else {
                        format!(
                            "unknown field '{key}' on {}; did you mean {}?",
                            schema.name,
                            suggestions.join(", ")
                        )
                    };
                    ctx.add_error(ValidationErrorKind::UnknownField, message);
                }
            }
            ctx.pop_path();
        }

        for (name, element) in schema.required_elements() {
            if ctx.should_stop() {
                return;
            }
            if !object.contains_key(name) {
                ctx.push_field(name);
                ctx.add_error(
                    ValidationErrorKind::MissingRequiredField,
                    format!(
                        "missing required field '{name}' on {} ({}, {})",
                        schema.name,
                        element.type_name,
                        element.cardinality()
                    ),
                );
                ctx.pop_path();
            }
        }

        for conflict in check_choice_groups(schema, object) {
            if ctx.should_stop() {
                return;
            }
            ctx.push_field(&conflict.display_name());
            let message = format!(
                "only one of {} may be set, found {}",
                conflict.display_name(),
                conflict.populated.join(", ")
            );
            let error = ValidationError::new(
                ValidationErrorKind::MultipleChoiceFieldsSet,
                ctx.current_path.clone(),
                message,
            )
            .with_expected(schema.choices.get(&conflict.group).cloned().unwrap_or_default());
            ctx.push_error(error);
            ctx.pop_path();
        }

        if self.config.check_period_order && schema.name == "Period" {
            check_period_order(ctx, object);
        }
    }

    fn validate_element(
        &self,
        ctx: &mut ValidationContext,
        element: &FhirSchemaElement,
        value: &Value,
    ) {
        match (element.array, value) {
            (_, Value::Null) => ctx.add_error(
                ValidationErrorKind::TypeMismatch,
                "null is not allowed; omit the field instead",
            ),
            (true, Value::Array(items)) if items.is_empty() => {
                if element.required {
                    ctx.add_error(
                        ValidationErrorKind::MissingRequiredField,
                        format!(
                            "required list of {} must have at least one entry",
                            element.type_name
                        ),
                    );
                } else {
                    ctx.add_error(
                        ValidationErrorKind::TypeMismatch,
                        "empty list is not allowed; omit the field instead",
                    );
                }
            }
            (true, Value::Array(items)) => {
                for (index, item) in items.iter().enumerate() {
                    if ctx.should_stop() {
                        return;
                    }
                    ctx.push_index(index);
                    self.validate_item(ctx, element, item);
                    ctx.pop_path();
                }
            }
            (true, other) => ctx.add_error(
                ValidationErrorKind::TypeMismatch,
                format!(
                    "expected list of {}, found {}",
                    element.type_name,
                    json_type_name(other)
                ),
            ),
            (false, Value::Array(_)) => ctx.add_error(
                ValidationErrorKind::TypeMismatch,
                format!("expected a single {}, found array", element.type_name),
            ),
            (false, other) => self.validate_item(ctx, element, other),
        }
    }

    fn validate_item(&self, ctx: &mut ValidationContext, element: &FhirSchemaElement, value: &Value) {
        match &element.type_name {
            ElementType::Primitive(kind) => {
                if let Err(reason) = check_primitive(*kind, value) {
                    ctx.add_error(ValidationErrorKind::TypeMismatch, reason);
                    return;
                }
                if let (Some(binding), Some(code)) = (&element.binding, value.as_str()) {
                    if !binding.allows(code) {
                        let error = ValidationError::new(
                            ValidationErrorKind::InvalidEnumValue,
                            ctx.current_path.clone(),
                            format!("'{code}' is not in value set {}", binding.value_set),
                        )
                        .with_expected(binding.codes.clone());
                        ctx.push_error(error);
                    }
                }
            }
            ElementType::Complex(name) => {
                let Some(object) = self.expect_object(ctx, value) else {
                    return;
                };
                let Some(schema) = self.registry.get(name) else {
                    tracing::warn!(type_name = %name, "No schema registered for referenced type");
                    ctx.add_error(
                        ValidationErrorKind::TypeMismatch,
                        format!("no schema registered for {name}"),
                    );
                    return;
                };
                self.descend(ctx, |this, ctx| this.validate_object(ctx, schema, object));
            }
            ElementType::Resource => {
                let Some(object) = self.expect_object(ctx, value) else {
                    return;
                };
                let Some(schema) = self.resource_schema(ctx, object) else {
                    return;
                };
                self.descend(ctx, |this, ctx| this.validate_object(ctx, schema, object));
            }
        }
    }

    /// Run `f` one nesting level deeper, refusing to go past `max_depth`.
    fn descend(
        &self,
        ctx: &mut ValidationContext,
        f: impl FnOnce(&Self, &mut ValidationContext),
    ) {
        if ctx.depth >= self.config.max_depth {
            tracing::warn!(
                path = %ctx.current_path,
                max_depth = self.config.max_depth,
                "Nesting limit reached"
            );
            ctx.add_error(
                ValidationErrorKind::RecursionDepthExceeded,
                format!("nesting exceeds {} levels", self.config.max_depth),
            );
            return;
        }
        ctx.depth += 1;
        f(self, ctx);
        ctx.depth -= 1;
    }
}

/// A validator bound to one resource type.
#[derive(Debug, Clone, Copy)]
pub struct ResourceValidator<'a> {
    validator: &'a FhirSchemaValidator,
    schema: &'a FhirSchema,
}

impl<'a> ResourceValidator<'a> {
    pub fn schema(&self) -> &'a FhirSchema {
        self.schema
    }

    pub fn validate(&self, raw: &Value) -> ValidationResult {
        let validator = self.validator;
        let mut ctx = validator.context();
        if let Some(object) = validator.expect_object(&mut ctx, raw) {
            if self.check_discriminant(&mut ctx, object) {
                validator.validate_object(&mut ctx, self.schema, object);
            }
        }
        validator.finish(ctx, &self.schema.name)
    }

    fn check_discriminant(&self, ctx: &mut ValidationContext, object: &Map<String, Value>) -> bool {
        let expected = self.schema.name.as_str();
        let found = object.get(RESOURCE_TYPE);
        if found.and_then(Value::as_str) == Some(expected) {
            return true;
        }
        let message = match found {
            Some(Value::String(tag)) => format!("expected resourceType '{expected}', found '{tag}'"),
            Some(other) => format!(
                "expected resourceType '{expected}', found {}",
                json_type_name(other)
            ),
            None => format!("resourceType is missing, expected '{expected}'"),
        };
        ctx.push_field(RESOURCE_TYPE);
        let error = ValidationError::new(
            ValidationErrorKind::ResourceTypeMismatch,
            ctx.current_path.clone(),
            message,
        )
        .with_expected(vec![expected.to_string()]);
        ctx.push_error(error);
        ctx.pop_path();
        false
    }
}

fn check_period_order(ctx: &mut ValidationContext, object: &Map<String, Value>) {
    let bound = |key: &str| object.get(key).and_then(Value::as_str).and_then(Moment::parse);
    if let (Some(start), Some(end)) = (bound("start"), bound("end")) {
        if end.is_before(&start) {
            ctx.add_warning(
                ValidationErrorKind::PeriodOutOfOrder,
                "period end is before its start",
            );
        }
    }
}

/// A period bound at its own precision. Partial dates are not compared.
#[derive(Debug, Clone, Copy)]
enum Moment {
    Date(NaiveDate),
    DateTime(DateTime<FixedOffset>),
}

impl Moment {
    fn parse(text: &str) -> Option<Self> {
        if let Ok(moment) = DateTime::parse_from_rfc3339(text) {
            return Some(Self::DateTime(moment));
        }
        NaiveDate::parse_from_str(text, "%Y-%m-%d").ok().map(Self::Date)
    }

    fn date(&self) -> NaiveDate {
        match self {
            Self::Date(date) => *date,
            Self::DateTime(moment) => moment.date_naive(),
        }
    }

    /// Mixed precision compares at the coarser one.
    fn is_before(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::DateTime(a), Self::DateTime(b)) => a < b,
            _ => self.date() < other.date(),
        }
    }
}
