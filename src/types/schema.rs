use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::PrimitiveType;
use crate::model::CodeEnum;

/// What an element's values must look like.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ElementType {
    Primitive(PrimitiveType),
    /// Another schema in the registry, by name.
    Complex(String),
    /// Any registered resource, selected by its `resourceType`.
    Resource,
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive(kind) => write!(f, "{kind}"),
            Self::Complex(name) => f.write_str(name),
            Self::Resource => f.write_str("Resource"),
        }
    }
}

/// Required code binding: the value must be one of `codes`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FhirSchemaBinding {
    pub value_set: String,
    pub codes: Vec<String>,
}

impl FhirSchemaBinding {
    pub fn allows(&self, code: &str) -> bool {
        self.codes.iter().any(|c| c == code)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FhirSchemaElement {
    #[serde(rename = "type")]
    pub type_name: ElementType,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub array: bool,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub required: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub binding: Option<FhirSchemaBinding>,

    /// Name of the choice group (`value` for `value[x]`) this element belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub choice_of: Option<String>,
}

impl FhirSchemaElement {
    fn of(type_name: ElementType) -> Self {
        Self {
            type_name,
            array: false,
            required: false,
            binding: None,
            choice_of: None,
        }
    }

    pub fn primitive(kind: PrimitiveType) -> Self {
        Self::of(ElementType::Primitive(kind))
    }

    pub fn complex(name: impl Into<String>) -> Self {
        Self::of(ElementType::Complex(name.into()))
    }

    pub fn resource() -> Self {
        Self::of(ElementType::Resource)
    }

    /// A `code` element bound to the closed value set of `E`.
    pub fn code<E: CodeEnum>() -> Self {
        Self::primitive(PrimitiveType::Code).with_binding(FhirSchemaBinding {
            value_set: E::VALUE_SET.to_string(),
            codes: E::CODES.iter().map(|c| c.to_string()).collect(),
        })
    }

    pub fn with_binding(mut self, binding: FhirSchemaBinding) -> Self {
        self.binding = Some(binding);
        self
    }

    pub fn array(mut self) -> Self {
        self.array = true;
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Cardinality as written in FHIR profiles (`0..1`, `1..*`, ...).
    pub fn cardinality(&self) -> &'static str {
        match (self.required, self.array) {
            (false, false) => "0..1",
            (true, false) => "1..1",
            (false, true) => "0..*",
            (true, true) => "1..*",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SchemaKind {
    ComplexType,
    Backbone,
    Resource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FhirSchema {
    pub name: String,
    pub kind: SchemaKind,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub elements: BTreeMap<String, FhirSchemaElement>,

    /// Choice group name to its alternative element names.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub choices: BTreeMap<String, Vec<String>>,
}

impl FhirSchema {
    pub fn new(name: impl Into<String>, kind: SchemaKind) -> Self {
        Self {
            name: name.into(),
            kind,
            description: None,
            elements: BTreeMap::new(),
            choices: BTreeMap::new(),
        }
    }

    pub fn complex_type(name: impl Into<String>) -> Self {
        Self::new(name, SchemaKind::ComplexType)
    }

    /// Backbone elements always allow extensions.
    pub fn backbone(name: impl Into<String>) -> Self {
        Self::new(name, SchemaKind::Backbone).with_extensions()
    }

    /// Resource schema carrying the common domain resource elements.
    pub fn resource(name: impl Into<String>) -> Self {
        Self::new(name, SchemaKind::Resource)
            .with_element("id", FhirSchemaElement::primitive(PrimitiveType::Id))
            .with_element("meta", FhirSchemaElement::complex("Meta"))
            .with_element(
                "implicitRules",
                FhirSchemaElement::primitive(PrimitiveType::Uri),
            )
            .with_element("language", FhirSchemaElement::primitive(PrimitiveType::Code))
            .with_element("text", FhirSchemaElement::complex("Narrative"))
            .with_element("contained", FhirSchemaElement::resource().array())
            .with_extensions()
    }

    fn with_extensions(self) -> Self {
        self.with_element("extension", FhirSchemaElement::complex("Extension").array())
            .with_element(
                "modifierExtension",
                FhirSchemaElement::complex("Extension").array(),
            )
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_element(mut self, name: impl Into<String>, element: FhirSchemaElement) -> Self {
        self.elements.insert(name.into(), element);
        self
    }

    /// Declare a choice group such as `onset[x]`. Alternatives are keyed by
    /// their full wire name (`onsetDateTime`).
    pub fn with_choice<I, S>(mut self, group: &str, alternatives: I) -> Self
    where
        I: IntoIterator<Item = (S, FhirSchemaElement)>,
        S: Into<String>,
    {
        let mut names = Vec::new();
        for (name, mut element) in alternatives {
            let name = name.into();
            element.choice_of = Some(group.to_string());
            names.push(name.clone());
            self.elements.insert(name, element);
        }
        self.choices.insert(group.to_string(), names);
        self
    }

    pub fn is_resource(&self) -> bool {
        self.kind == SchemaKind::Resource
    }

    pub fn element(&self, name: &str) -> Option<&FhirSchemaElement> {
        self.elements.get(name)
    }

    pub fn required_elements(&self) -> impl Iterator<Item = (&str, &FhirSchemaElement)> {
        self.elements
            .iter()
            .filter(|(_, element)| element.required)
            .map(|(name, element)| (name.as_str(), element))
    }

    /// Names of every complex type this schema points at.
    pub fn referenced_types(&self) -> impl Iterator<Item = &str> {
        self.elements
            .values()
            .filter_map(|element| match &element.type_name {
                ElementType::Complex(name) => Some(name.as_str()),
                _ => None,
            })
    }
}

impl fmt::Display for FhirSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FhirSchema({})", self.name)?;
        if let Some(description) = &self.description {
            write!(f, " - {description}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choice_marks_alternatives() {
        let schema = FhirSchema::backbone("Test").with_choice(
            "value",
            [
                ("valueString", FhirSchemaElement::primitive(PrimitiveType::String)),
                ("valueBoolean", FhirSchemaElement::primitive(PrimitiveType::Boolean)),
            ],
        );

        assert_eq!(
            schema.choices.get("value"),
            Some(&vec!["valueString".to_string(), "valueBoolean".to_string()])
        );
        let element = schema.element("valueBoolean").unwrap();
        assert_eq!(element.choice_of.as_deref(), Some("value"));
        assert!(schema.element("extension").is_some());
    }

    #[test]
    fn test_resource_has_domain_elements() {
        let schema = FhirSchema::resource("Thing")
            .with_element("status", FhirSchemaElement::primitive(PrimitiveType::Code).required());

        for name in ["id", "meta", "text", "contained", "modifierExtension"] {
            assert!(schema.element(name).is_some(), "missing {name}");
        }
        let required: Vec<_> = schema.required_elements().map(|(n, _)| n).collect();
        assert_eq!(required, vec!["status"]);
        assert_eq!(schema.element("contained").unwrap().cardinality(), "0..*");
    }

    #[test]
    fn test_schema_json_shape() {
        let schema = FhirSchema::complex_type("Money")
            .with_element("value", FhirSchemaElement::primitive(PrimitiveType::Decimal));
        let json = serde_json::to_value(&schema).unwrap();
        assert_eq!(json["kind"], "complex-type");
        assert_eq!(json["elements"]["value"]["type"]["primitive"], "decimal");
        assert!(json["elements"]["value"].get("array").is_none());
    }
}
