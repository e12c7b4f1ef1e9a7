pub mod choice_types;
pub mod primitive;
pub mod resource_type_registry;
pub mod schema;

pub use choice_types::{ChoiceConflict, check_choice_groups, choice_display_name};
pub use primitive::PrimitiveType;
pub use resource_type_registry::{RegistryMetrics, SchemaRegistry, SchemaRegistryBuilder};
pub use schema::{ElementType, FhirSchema, FhirSchemaBinding, FhirSchemaElement, SchemaKind};
