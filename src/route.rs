#![deny(missing_docs)]

//! # Route Descriptions
//!
//! Structures describing one API route's contract: HTTP method, path
//! template, request schemas, and response schemas keyed by status code.

use crate::error::{AppError, AppResult};
use crate::schema::Schema;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Supported HTTP methods.
///
/// Serialized lowercase, matching the keys of an OpenAPI Path Item Object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HttpMethod {
    /// GET
    Get,
    /// POST
    Post,
    /// PUT
    Put,
    /// DELETE
    Delete,
}

impl HttpMethod {
    /// The lowercase form used as a Path Item key.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Post => "post",
            Self::Put => "put",
            Self::Delete => "delete",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<&str> for HttpMethod {
    type Error = AppError;

    fn try_from(value: &str) -> AppResult<Self> {
        match value.to_lowercase().as_str() {
            "get" => Ok(Self::Get),
            "post" => Ok(Self::Post),
            "put" => Ok(Self::Put),
            "delete" => Ok(Self::Delete),
            other => Err(AppError::General(format!("unknown HTTP method: {}", other))),
        }
    }
}

/// The request side of a route contract.
///
/// `params` and `query` must be object schemas; that shape is enforced when
/// parameters are translated, not at construction.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RequestSchemas {
    /// Schema describing path placeholders.
    pub params: Option<Schema>,
    /// Schema describing query parameters.
    pub query: Option<Schema>,
    /// Schema describing the request payload.
    pub body: Option<Schema>,
}

/// One API route's contract.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteDefinition {
    /// HTTP method.
    pub method: HttpMethod,
    /// Path template, possibly with named placeholders (e.g. `/users/:id`).
    /// Opaque to this crate except as a paths-map key.
    pub path: String,
    /// Optional human readable summary.
    pub summary: Option<String>,
    /// Tags used for grouping in documentation. Empty means untagged.
    pub tags: Vec<String>,
    /// Request contract, if the route takes any input.
    pub request: Option<RequestSchemas>,
    /// Response payload schema per HTTP status code, in declaration order.
    pub responses: IndexMap<u16, Schema>,
}

impl RouteDefinition {
    /// Creates a route description with required fields.
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            summary: None,
            tags: Vec::new(),
            request: None,
            responses: IndexMap::new(),
        }
    }

    /// Sets an optional summary.
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// Adds a documentation tag.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Replaces the tag list.
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Sets the path parameter schema.
    pub fn with_params(mut self, schema: Schema) -> Self {
        self.request.get_or_insert_with(RequestSchemas::default).params = Some(schema);
        self
    }

    /// Sets the query parameter schema.
    pub fn with_query(mut self, schema: Schema) -> Self {
        self.request.get_or_insert_with(RequestSchemas::default).query = Some(schema);
        self
    }

    /// Sets the request body schema.
    pub fn with_body(mut self, schema: Schema) -> Self {
        self.request.get_or_insert_with(RequestSchemas::default).body = Some(schema);
        self
    }

    /// Adds a response schema for a status code. Re-adding a code replaces it.
    pub fn with_response(mut self, status: u16, schema: Schema) -> Self {
        self.responses.insert(status, schema);
        self
    }

    /// Checks the route invariant: the path must be non-empty.
    ///
    /// Called at registration so a bad description fails fast, and again
    /// defensively during document assembly.
    pub fn validate(&self) -> AppResult<()> {
        if self.path.trim().is_empty() {
            return Err(AppError::MissingField("path".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ObjectSchema;

    #[test]
    fn test_http_method_as_str() {
        assert_eq!(HttpMethod::Get.as_str(), "get");
        assert_eq!(HttpMethod::Post.as_str(), "post");
        assert_eq!(HttpMethod::Put.as_str(), "put");
        assert_eq!(HttpMethod::Delete.as_str(), "delete");
    }

    #[test]
    fn test_http_method_from_str() {
        assert_eq!(HttpMethod::try_from("GET").unwrap(), HttpMethod::Get);
        assert_eq!(HttpMethod::try_from("post").unwrap(), HttpMethod::Post);
        assert_eq!(HttpMethod::try_from("Delete").unwrap(), HttpMethod::Delete);
        assert!(HttpMethod::try_from("patch").is_err());
    }

    #[test]
    fn test_http_method_serialization() {
        let serialized = serde_json::to_string(&HttpMethod::Get).unwrap();
        assert_eq!(serialized, "\"get\"");

        let method: HttpMethod = serde_json::from_str("\"delete\"").unwrap();
        assert_eq!(method, HttpMethod::Delete);
    }

    #[test]
    fn test_builder_populates_request_lazily() {
        let route = RouteDefinition::new(HttpMethod::Get, "/users");
        assert!(route.request.is_none());

        let route = route.with_query(Schema::Object(
            ObjectSchema::new().optional_field("page", Schema::Integer),
        ));
        let request = route.request.as_ref().unwrap();
        assert!(request.query.is_some());
        assert!(request.params.is_none());
        assert!(request.body.is_none());
    }

    #[test]
    fn test_response_declaration_order_is_kept() {
        let route = RouteDefinition::new(HttpMethod::Post, "/items")
            .with_response(201, Schema::Object(ObjectSchema::new()))
            .with_response(400, Schema::Object(ObjectSchema::new()))
            .with_response(200, Schema::Object(ObjectSchema::new()));

        let statuses: Vec<u16> = route.responses.keys().copied().collect();
        assert_eq!(statuses, vec![201, 400, 200]);
    }

    #[test]
    fn test_validate_rejects_empty_path() {
        let route = RouteDefinition::new(HttpMethod::Get, "");
        match route.validate() {
            Err(AppError::MissingField(field)) => assert_eq!(field, "path"),
            other => panic!("expected MissingField, got {:?}", other),
        }

        assert!(RouteDefinition::new(HttpMethod::Get, "   ").validate().is_err());
        assert!(RouteDefinition::new(HttpMethod::Get, "/ok").validate().is_ok());
    }
}
