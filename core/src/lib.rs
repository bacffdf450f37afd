#![deny(missing_docs)]

//! # OAS CRUD Core
//!
//! Generates OpenAPI `paths`, `components.schemas` and
//! `components.requestBodies` for CRUD resources from entity descriptors.
//!
//! ```
//! use oas_crud_core::{generate_document, skeleton, DocumentInfo, Entity};
//!
//! let mut doc = skeleton(&DocumentInfo::new("Shop API", "1.0.0"));
//! let user = Entity::new("User")
//!     .with_field("id", "integer")
//!     .with_field("email", "string");
//!
//! generate_document(&mut doc, &[user]).unwrap();
//! assert!(doc["paths"]["/users/{id}"]["put"].is_object());
//! ```

/// Shared error types.
pub mod error;

/// Field type to schema mapping.
pub mod type_mapping;

/// Entity descriptors and manifest loading.
pub mod entity;

/// Response description catalogue.
pub mod messages;

/// Template strings with entity noun slots.
pub mod template;

/// The fixed CRUD route templates.
pub mod routes;

/// OpenAPI container helpers.
pub mod document;

/// Schema and request body generation.
pub mod schema_generator;

/// Path generation.
pub mod path_generator;

/// Combined generation.
pub mod generate;

pub use document::{
    check_sections, load_document, render_document, skeleton, write_document, DocumentInfo,
    Section,
};
pub use entity::{load_manifest, parse_manifest, Action, ActionSet, Entity, FieldSelection};
pub use error::{AppError, AppResult};
pub use generate::generate_document;
pub use path_generator::generate_paths;
pub use routes::{Method, Route, RouteTemplate, ROUTE_TEMPLATES};
pub use schema_generator::generate_schemas;
pub use type_mapping::{map_field_type, FieldType, JsonType, SchemaFragment};
