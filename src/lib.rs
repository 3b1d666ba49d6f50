#![deny(missing_docs)]

//! # Routedoc
//!
//! Declarative route registry rendered as OpenAPI 3.0.
//!
//! Routes are described as structured values (method, path, request schemas,
//! response schemas), collected in a [`RouteRegistry`], and assembled into a
//! single OpenAPI 3.0.0 document keyed by path and HTTP method.
//!
//! ```
//! use routedoc::{
//!     generate_spec, HttpMethod, ObjectSchema, RouteDefinition, RouteRegistry, Schema,
//! };
//!
//! let mut registry = RouteRegistry::new();
//! registry
//!     .register(
//!         RouteDefinition::new(HttpMethod::Get, "/users/:id")
//!             .with_summary("Get user by ID")
//!             .with_params(Schema::Object(ObjectSchema::new().field("id", Schema::String)))
//!             .with_response(
//!                 200,
//!                 Schema::Object(
//!                     ObjectSchema::new()
//!                         .field("id", Schema::String)
//!                         .field("name", Schema::String),
//!                 ),
//!             ),
//!     )
//!     .unwrap();
//!
//! let spec = generate_spec(&registry).unwrap();
//! assert_eq!(spec["openapi"], "3.0.0");
//! ```

/// Shared error types.
pub mod error;

/// Validation schema representation and JSON Schema conversion.
pub mod schema;

/// Route description structures.
pub mod route;

/// The route registry.
pub mod registry;

/// Schema to OpenAPI parameter translation.
pub mod parameters;

/// OpenAPI document assembly.
pub mod generator;

/// Spec file persistence (JSON / YAML).
pub mod export;

pub use error::{AppError, AppResult};
pub use export::{write_spec_file, write_spec_file_with};
pub use generator::{generate_spec, generate_spec_with, OpenApiInfo};
pub use parameters::{
    schema_to_parameters, schema_to_parameters_with, Parameter, ParameterLocation,
};
pub use registry::RouteRegistry;
pub use route::{HttpMethod, RequestSchemas, RouteDefinition};
pub use schema::{JsonSchemaConverter, ObjectField, ObjectSchema, Schema, SchemaConverter};
