#![deny(missing_docs)]

//! # Validation Schemas
//!
//! Tagged schema representation used by route contracts, and its conversion
//! into plain JSON Schema values. Object schemas keep field declaration order,
//! since parameter order in the generated document is a visible contract.

use crate::error::{AppError, AppResult};
use indexmap::IndexMap;
use serde_json::{json, Map, Value};
use std::fmt::Display;

/// Represents the simplified validation schema shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum Schema {
    /// A string value.
    String,
    /// An integer value.
    Integer,
    /// A floating point number.
    Number,
    /// A boolean value.
    Boolean,
    /// An array containing items of a specific schema.
    Array(Box<Schema>),
    /// An object with a fixed set of named fields.
    Object(ObjectSchema),
}

impl Schema {
    /// Shorthand for an array schema.
    pub fn array(items: Schema) -> Self {
        Schema::Array(Box::new(items))
    }

    /// Whether this schema declares named fields.
    pub fn is_object(&self) -> bool {
        matches!(self, Schema::Object(_))
    }
}

impl Display for Schema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Schema::String => write!(f, "string"),
            Schema::Integer => write!(f, "integer"),
            Schema::Number => write!(f, "number"),
            Schema::Boolean => write!(f, "boolean"),
            Schema::Array(inner) => write!(f, "array<{}>", inner),
            Schema::Object(_) => write!(f, "object"),
        }
    }
}

/// A single named field inside an object schema.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectField {
    /// The field's own schema.
    pub schema: Schema,
    /// Whether the field must be present.
    pub required: bool,
}

/// An object schema: named fields with required flags, in declaration order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ObjectSchema {
    fields: IndexMap<String, ObjectField>,
}

impl ObjectSchema {
    /// Creates an object schema with no fields.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a required field. Re-adding a name replaces its schema in place.
    pub fn field(mut self, name: impl Into<String>, schema: Schema) -> Self {
        self.fields.insert(
            name.into(),
            ObjectField {
                schema,
                required: true,
            },
        );
        self
    }

    /// Adds an optional field.
    pub fn optional_field(mut self, name: impl Into<String>, schema: Schema) -> Self {
        self.fields.insert(
            name.into(),
            ObjectField {
                schema,
                required: false,
            },
        );
        self
    }

    /// The fields, in declaration order.
    pub fn fields(&self) -> &IndexMap<String, ObjectField> {
        &self.fields
    }

    /// Names of the required fields, in declaration order.
    pub fn required_names(&self) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|(_, field)| field.required)
            .map(|(name, _)| name.as_str())
            .collect()
    }
}

/// Trait for converting validation schemas into JSON Schema values.
pub trait SchemaConverter {
    /// Converts `schema` into its JSON Schema representation.
    fn convert(&self, schema: &Schema) -> AppResult<Value>;
}

/// A standard implementation of `SchemaConverter`.
pub struct JsonSchemaConverter;

impl SchemaConverter for JsonSchemaConverter {
    fn convert(&self, schema: &Schema) -> AppResult<Value> {
        let value = match schema {
            Schema::String => json!({ "type": "string" }),
            Schema::Integer => json!({ "type": "integer" }),
            Schema::Number => json!({ "type": "number" }),
            Schema::Boolean => json!({ "type": "boolean" }),
            Schema::Array(items) => json!({ "type": "array", "items": self.convert(items)? }),
            Schema::Object(object) => {
                let mut properties = Map::new();
                for (name, field) in object.fields() {
                    properties.insert(name.clone(), self.convert(&field.schema)?);
                }

                let mut out = Map::new();
                out.insert("type".to_string(), json!("object"));
                out.insert("properties".to_string(), Value::Object(properties));
                // `required` is omitted entirely when no field carries the flag
                let required = object.required_names();
                if !required.is_empty() {
                    out.insert("required".to_string(), json!(required));
                }
                Value::Object(out)
            }
        };
        Ok(value)
    }
}
