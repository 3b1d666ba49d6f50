#![deny(missing_docs)]

//! # Document Assembly
//!
//! Builds one complete OpenAPI 3.0.0 document from the current registry
//! contents. Assembly is a pure function of the registry: no IO happens here,
//! and the document is recomputed in full on every call.

use crate::error::{AppError, AppResult};
use crate::parameters::{schema_to_parameters_with, Parameter, ParameterLocation};
use crate::registry::RouteRegistry;
use crate::route::RouteDefinition;
use crate::schema::{JsonSchemaConverter, SchemaConverter};
use serde_json::{json, Map, Value};
use tracing::error;

/// Title and version for the document `info` block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenApiInfo {
    /// The title of the API.
    pub title: String,
    /// The version of the API document.
    pub version: String,
}

impl OpenApiInfo {
    /// Creates an info block with required fields.
    pub fn new(title: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            version: version.into(),
        }
    }
}

impl Default for OpenApiInfo {
    fn default() -> Self {
        Self::new("My API", "1.0.0")
    }
}

/// Generates an OpenAPI 3.0.0 document from the registry using placeholder
/// info metadata and the standard schema converter.
pub fn generate_spec(registry: &RouteRegistry) -> AppResult<Value> {
    generate_spec_with(registry, &OpenApiInfo::default(), &JsonSchemaConverter)
}

/// Generates an OpenAPI 3.0.0 document from the registry.
///
/// Routes are processed in registration order. Two routes sharing a path
/// become sibling method keys under one paths entry; two routes sharing both
/// path and method resolve to the later registration, silently. Any failure
/// while building a route's operation is logged with the route attached and
/// re-raised, so no partial document is ever returned.
pub fn generate_spec_with(
    registry: &RouteRegistry,
    info: &OpenApiInfo,
    converter: &dyn SchemaConverter,
) -> AppResult<Value> {
    let mut paths = Map::new();

    for route in registry.iter() {
        let operation = build_operation(route, converter).map_err(|e| {
            error!("failed to build operation for route {:?}: {}", route, e);
            e
        })?;

        let entry = paths
            .entry(route.path.clone())
            .or_insert_with(|| Value::Object(Map::new()));
        if let Value::Object(path_item) = entry {
            // Last registration wins on a (path, method) collision.
            path_item.insert(route.method.as_str().to_string(), operation);
        }
    }

    let mut info_obj = Map::new();
    info_obj.insert("title".to_string(), json!(info.title));
    info_obj.insert("version".to_string(), json!(info.version));

    let mut doc = Map::new();
    doc.insert("openapi".to_string(), json!("3.0.0"));
    doc.insert("info".to_string(), Value::Object(info_obj));
    doc.insert("paths".to_string(), Value::Object(paths));

    Ok(Value::Object(doc))
}

/// Builds the Operation Object for a single route.
fn build_operation(route: &RouteDefinition, converter: &dyn SchemaConverter) -> AppResult<Value> {
    // Registration already validated the route; re-check in case the
    // description was built outside the registry.
    route.validate()?;

    let mut op = Map::new();
    if let Some(summary) = &route.summary {
        op.insert("summary".to_string(), json!(summary));
    }
    if !route.tags.is_empty() {
        op.insert("tags".to_string(), json!(route.tags));
    }

    op.insert(
        "parameters".to_string(),
        Value::Array(build_parameters(route, converter)?),
    );

    if let Some(body) = route.request.as_ref().and_then(|r| r.body.as_ref()) {
        op.insert(
            "requestBody".to_string(),
            json!({
                "content": {
                    "application/json": { "schema": converter.convert(body)? }
                }
            }),
        );
    }

    op.insert("responses".to_string(), build_responses(route, converter)?);

    Ok(Value::Object(op))
}

/// Builds the parameters list: path placeholders first, then query entries.
/// Always present on the operation, possibly empty.
fn build_parameters(
    route: &RouteDefinition,
    converter: &dyn SchemaConverter,
) -> AppResult<Vec<Value>> {
    let mut parameters: Vec<Parameter> = Vec::new();
    if let Some(request) = &route.request {
        if let Some(params) = &request.params {
            parameters.extend(schema_to_parameters_with(
                converter,
                params,
                ParameterLocation::Path,
            )?);
        }
        if let Some(query) = &request.query {
            parameters.extend(schema_to_parameters_with(
                converter,
                query,
                ParameterLocation::Query,
            )?);
        }
    }

    parameters.iter().map(parameter_value).collect()
}

fn parameter_value(parameter: &Parameter) -> AppResult<Value> {
    serde_json::to_value(parameter).map_err(|e| {
        AppError::General(format!(
            "failed to serialize parameter '{}': {}",
            parameter.name, e
        ))
    })
}

/// Builds the Responses Object: string status keys in declaration order,
/// each with an empty description and a JSON media type entry.
fn build_responses(route: &RouteDefinition, converter: &dyn SchemaConverter) -> AppResult<Value> {
    let mut responses = Map::new();
    for (status, schema) in &route.responses {
        responses.insert(
            status.to_string(),
            json!({
                "description": "",
                "content": {
                    "application/json": { "schema": converter.convert(schema)? }
                }
            }),
        );
    }
    Ok(Value::Object(responses))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::HttpMethod;
    use crate::schema::{ObjectSchema, Schema};
    use pretty_assertions::assert_eq;

    fn registry_with(routes: Vec<RouteDefinition>) -> RouteRegistry {
        let mut registry = RouteRegistry::new();
        for route in routes {
            registry.register(route).unwrap();
        }
        registry
    }

    #[test]
    fn test_empty_registry_yields_empty_paths() {
        let spec = generate_spec(&RouteRegistry::new()).unwrap();
        assert_eq!(spec["openapi"], "3.0.0");
        assert_eq!(spec["info"], json!({ "title": "My API", "version": "1.0.0" }));
        assert_eq!(spec["paths"], json!({}));
    }

    #[test]
    fn test_custom_info_block() {
        let info = OpenApiInfo::new("Billing API", "2.3.0");
        let spec =
            generate_spec_with(&RouteRegistry::new(), &info, &JsonSchemaConverter).unwrap();
        assert_eq!(
            spec["info"],
            json!({ "title": "Billing API", "version": "2.3.0" })
        );
    }

    #[test]
    fn test_summary_and_tags_are_omitted_when_absent() {
        let registry = registry_with(vec![RouteDefinition::new(HttpMethod::Get, "/bare")]);
        let spec = generate_spec(&registry).unwrap();

        let op = &spec["paths"]["/bare"]["get"];
        assert!(op.get("summary").is_none());
        assert!(op.get("tags").is_none());
        assert_eq!(op["parameters"], json!([]));
        assert!(op.get("requestBody").is_none());
        assert_eq!(op["responses"], json!({}));
    }

    #[test]
    fn test_request_body_is_wrapped_in_json_media_type() {
        let registry = registry_with(vec![RouteDefinition::new(HttpMethod::Post, "/users")
            .with_body(Schema::Object(
                ObjectSchema::new().field("name", Schema::String),
            ))]);

        let spec = generate_spec(&registry).unwrap();
        assert_eq!(
            spec["paths"]["/users"]["post"]["requestBody"],
            json!({
                "content": {
                    "application/json": {
                        "schema": {
                            "type": "object",
                            "properties": { "name": { "type": "string" } },
                            "required": ["name"]
                        }
                    }
                }
            })
        );
    }

    #[test]
    fn test_responses_use_string_status_keys() {
        let registry = registry_with(vec![RouteDefinition::new(HttpMethod::Get, "/items")
            .with_response(200, Schema::array(Schema::String))
            .with_response(400, Schema::Object(ObjectSchema::new()))]);

        let spec = generate_spec(&registry).unwrap();
        let responses = spec["paths"]["/items"]["get"]["responses"]
            .as_object()
            .unwrap();
        let keys: Vec<&String> = responses.keys().collect();
        assert_eq!(keys, vec!["200", "400"]);
        assert_eq!(responses["200"]["description"], "");
        assert_eq!(
            responses["200"]["content"]["application/json"]["schema"],
            json!({ "type": "array", "items": { "type": "string" } })
        );
    }

    #[test]
    fn test_invalid_parameter_schema_aborts_generation() {
        let registry = registry_with(vec![
            RouteDefinition::new(HttpMethod::Get, "/ok"),
            RouteDefinition::new(HttpMethod::Get, "/bad").with_params(Schema::String),
        ]);

        let result = generate_spec(&registry);
        assert!(matches!(result, Err(AppError::InvalidSchemaShape(_))));
    }
}
