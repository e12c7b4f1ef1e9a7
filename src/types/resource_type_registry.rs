use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::error::{FhirSchemaError, Result};
use crate::types::FhirSchema;

static BUILTIN: Lazy<Arc<SchemaRegistry>> = Lazy::new(|| {
    let registry = SchemaRegistry::from_schemas(builtin_schemas());
    debug!(
        resources = registry.metrics.resource_count,
        total = registry.metrics.total_types,
        "Built-in schema registry initialised"
    );
    Arc::new(registry)
});

fn builtin_schemas() -> Vec<FhirSchema> {
    let mut schemas = crate::datatypes::schemas();
    schemas.extend(crate::resources::schemas());
    schemas
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistryMetrics {
    pub total_types: usize,
    pub resource_count: usize,
    pub choice_groups: usize,
}

/// Immutable map from type name to schema. Resource schemas are also
/// addressable by their `resourceType` discriminant.
#[derive(Debug, Clone)]
pub struct SchemaRegistry {
    schemas: HashMap<String, Arc<FhirSchema>>,
    metrics: RegistryMetrics,
}

impl SchemaRegistry {
    fn from_schemas(schemas: impl IntoIterator<Item = FhirSchema>) -> Self {
        let schemas: HashMap<_, _> = schemas
            .into_iter()
            .map(|schema| (schema.name.clone(), Arc::new(schema)))
            .collect();
        let metrics = RegistryMetrics {
            total_types: schemas.len(),
            resource_count: schemas.values().filter(|s| s.is_resource()).count(),
            choice_groups: schemas.values().map(|s| s.choices.len()).sum(),
        };
        Self { schemas, metrics }
    }

    /// The process-wide registry of every built-in type. Built on first use.
    pub fn builtin() -> &'static Arc<SchemaRegistry> {
        &BUILTIN
    }

    pub fn builder() -> SchemaRegistryBuilder {
        SchemaRegistryBuilder::default()
    }

    pub fn get(&self, name: &str) -> Option<&Arc<FhirSchema>> {
        self.schemas.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.schemas.contains_key(name)
    }

    /// Select the resource schema for a `resourceType` tag.
    pub fn resolve(&self, tag: &str) -> Result<&Arc<FhirSchema>> {
        self.schemas
            .get(tag)
            .filter(|schema| schema.is_resource())
            .ok_or_else(|| FhirSchemaError::unknown_resource_type(tag))
    }

    pub fn is_resource_type(&self, name: &str) -> bool {
        self.schemas.get(name).is_some_and(|s| s.is_resource())
    }

    /// Registered resource type names, sorted.
    pub fn resource_types(&self) -> Vec<&str> {
        let mut names: Vec<_> = self
            .schemas
            .values()
            .filter(|s| s.is_resource())
            .map(|s| s.name.as_str())
            .collect();
        names.sort_unstable();
        names
    }

    pub fn metrics(&self) -> &RegistryMetrics {
        &self.metrics
    }
}

/// Assembles a new registry. Existing definitions are never replaced.
#[derive(Debug, Default)]
pub struct SchemaRegistryBuilder {
    schemas: HashMap<String, FhirSchema>,
}

impl SchemaRegistryBuilder {
    pub fn with_builtin_schemas(mut self) -> Self {
        for schema in builtin_schemas() {
            self.schemas.insert(schema.name.clone(), schema);
        }
        self
    }

    pub fn register(mut self, schema: FhirSchema) -> Result<Self> {
        if self.schemas.contains_key(&schema.name) {
            warn!(name = %schema.name, "Rejecting duplicate schema registration");
            return Err(FhirSchemaError::duplicate_schema(schema.name));
        }
        debug!(name = %schema.name, kind = ?schema.kind, "Registering schema");
        self.schemas.insert(schema.name.clone(), schema);
        Ok(self)
    }

    /// Build the registry, rejecting references to types that were never registered.
    pub fn build(self) -> Result<SchemaRegistry> {
        for schema in self.schemas.values() {
            if let Some(missing) = schema
                .referenced_types()
                .find(|name| !self.schemas.contains_key(*name))
            {
                return Err(FhirSchemaError::unknown_schema(
                    missing,
                    Some(schema.name.clone()),
                ));
            }
        }
        let registry = SchemaRegistry::from_schemas(self.schemas.into_values());
        debug!(total = registry.metrics.total_types, "Schema registry built");
        Ok(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FhirSchemaElement, PrimitiveType};

    #[test]
    fn test_builtin_resolves_every_resource() {
        let registry = SchemaRegistry::builtin();
        for tag in registry.resource_types() {
            assert!(registry.resolve(tag).is_ok());
        }
        assert_eq!(registry.metrics().resource_count, 11);
    }

    #[test]
    fn test_resolve_rejects_datatypes_and_unknown_tags() {
        let registry = SchemaRegistry::builtin();
        assert!(registry.contains("CodeableConcept"));
        assert!(matches!(
            registry.resolve("CodeableConcept"),
            Err(FhirSchemaError::UnknownResourceType { .. })
        ));
        assert!(matches!(
            registry.resolve("Spaceship"),
            Err(FhirSchemaError::UnknownResourceType { .. })
        ));
    }

    #[test]
    fn test_builtin_references_are_closed() {
        assert!(SchemaRegistry::builder().with_builtin_schemas().build().is_ok());
    }

    #[test]
    fn test_build_rejects_dangling_reference() {
        let schema = FhirSchema::complex_type("Broken")
            .with_element("part", FhirSchemaElement::complex("Nowhere"));
        let err = SchemaRegistry::builder()
            .register(schema)
            .unwrap()
            .build()
            .unwrap_err();
        assert!(matches!(err, FhirSchemaError::UnknownSchema { ref name, .. } if name == "Nowhere"));
    }

    #[test]
    fn test_duplicate_registration_fails() {
        let schema = FhirSchema::complex_type("Coding")
            .with_element("code", FhirSchemaElement::primitive(PrimitiveType::Code));
        let err = SchemaRegistry::builder()
            .with_builtin_schemas()
            .register(schema)
            .unwrap_err();
        assert!(matches!(err, FhirSchemaError::DuplicateSchema { .. }));
    }
}
