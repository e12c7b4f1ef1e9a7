// Shorthand constructors for schema declarations.

use crate::model::CodeEnum;
use crate::types::{FhirSchemaElement, PrimitiveType};

pub fn boolean() -> FhirSchemaElement {
    FhirSchemaElement::primitive(PrimitiveType::Boolean)
}

pub fn integer() -> FhirSchemaElement {
    FhirSchemaElement::primitive(PrimitiveType::Integer)
}

pub fn positive_int() -> FhirSchemaElement {
    FhirSchemaElement::primitive(PrimitiveType::PositiveInt)
}

pub fn unsigned_int() -> FhirSchemaElement {
    FhirSchemaElement::primitive(PrimitiveType::UnsignedInt)
}

pub fn decimal() -> FhirSchemaElement {
    FhirSchemaElement::primitive(PrimitiveType::Decimal)
}

pub fn string() -> FhirSchemaElement {
    FhirSchemaElement::primitive(PrimitiveType::String)
}

pub fn markdown() -> FhirSchemaElement {
    FhirSchemaElement::primitive(PrimitiveType::Markdown)
}

pub fn code() -> FhirSchemaElement {
    FhirSchemaElement::primitive(PrimitiveType::Code)
}

pub fn id() -> FhirSchemaElement {
    FhirSchemaElement::primitive(PrimitiveType::Id)
}

pub fn uri() -> FhirSchemaElement {
    FhirSchemaElement::primitive(PrimitiveType::Uri)
}

pub fn canonical() -> FhirSchemaElement {
    FhirSchemaElement::primitive(PrimitiveType::Canonical)
}

pub fn date() -> FhirSchemaElement {
    FhirSchemaElement::primitive(PrimitiveType::Date)
}

pub fn date_time() -> FhirSchemaElement {
    FhirSchemaElement::primitive(PrimitiveType::DateTime)
}

pub fn instant() -> FhirSchemaElement {
    FhirSchemaElement::primitive(PrimitiveType::Instant)
}

pub fn time() -> FhirSchemaElement {
    FhirSchemaElement::primitive(PrimitiveType::Time)
}

pub fn xhtml() -> FhirSchemaElement {
    FhirSchemaElement::primitive(PrimitiveType::Xhtml)
}

pub fn bound<E: CodeEnum>() -> FhirSchemaElement {
    FhirSchemaElement::code::<E>()
}

pub fn of(type_name: &str) -> FhirSchemaElement {
    FhirSchemaElement::complex(type_name)
}

pub fn reference() -> FhirSchemaElement {
    of("Reference")
}

pub fn concept() -> FhirSchemaElement {
    of("CodeableConcept")
}
