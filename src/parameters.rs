#![deny(missing_docs)]

//! # Parameter Translation
//!
//! Converts an object schema into OpenAPI parameter descriptors for a given
//! location. One descriptor is emitted per top-level field, in declaration
//! order.

use crate::error::{AppError, AppResult};
use crate::schema::{JsonSchemaConverter, Schema, SchemaConverter};
use serde::Serialize;
use serde_json::Value;
use tracing::error;

/// Where a parameter is carried in the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterLocation {
    /// A path placeholder.
    Path,
    /// A query string entry.
    Query,
}

impl std::fmt::Display for ParameterLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Path => write!(f, "path"),
            Self::Query => write!(f, "query"),
        }
    }
}

/// One OpenAPI Parameter Object.
///
/// Serializes to `{ name, in, required, schema }`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Parameter {
    /// Parameter name (the field name on the source schema).
    pub name: String,
    /// Parameter location.
    #[serde(rename = "in")]
    pub location: ParameterLocation,
    /// Whether the parameter must be supplied.
    pub required: bool,
    /// The field's JSON Schema representation.
    pub schema: Value,
}

/// Translates an object schema into parameter descriptors using the standard
/// converter.
pub fn schema_to_parameters(
    schema: &Schema,
    location: ParameterLocation,
) -> AppResult<Vec<Parameter>> {
    schema_to_parameters_with(&JsonSchemaConverter, schema, location)
}

/// Translates an object schema into parameter descriptors.
///
/// Fails with `InvalidSchemaShape` when `schema` declares no named fields
/// (e.g. a bare string schema); nothing is partially extracted. An object
/// schema with zero fields yields an empty vector. Conversion failures are
/// logged, then re-raised unchanged.
pub fn schema_to_parameters_with(
    converter: &dyn SchemaConverter,
    schema: &Schema,
    location: ParameterLocation,
) -> AppResult<Vec<Parameter>> {
    let Schema::Object(object) = schema else {
        return Err(AppError::InvalidSchemaShape(format!(
            "{} parameters require an object schema, got {}",
            location, schema
        )));
    };

    let mut parameters = Vec::with_capacity(object.fields().len());
    for (name, field) in object.fields() {
        let value = converter.convert(&field.schema).map_err(|e| {
            error!(
                "schema conversion failed for {} parameter '{}': {}",
                location, name, e
            );
            e
        })?;
        parameters.push(Parameter {
            name: name.clone(),
            location,
            required: field.required,
            schema: value,
        });
    }

    Ok(parameters)
}
