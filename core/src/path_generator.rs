#![deny(missing_docs)]

//! # Path Generator
//!
//! Renders the allowed route templates for each entity and merges the
//! resulting operations into `paths`.
//!
//! Operations are stored as `paths[path][method]`. Other methods already
//! present on the same path item are kept, so `/users` can hold both the
//! list and the create operation.

use crate::document::{check_sections, section_mut, Section};
use crate::entity::Entity;
use crate::error::AppResult;
use crate::routes::{render_routes, Route};
use serde_json::{Map, Value};

/// Renders the routes an entity exposes.
pub fn entity_routes(entity: &Entity) -> Vec<Route> {
    render_routes(&entity.name, |action| entity.actions.contains(action))
}

fn insert_route(paths: &mut Map<String, Value>, route: Route) {
    let entry = paths
        .entry(route.path)
        .or_insert_with(|| Value::Object(Map::new()));
    if !entry.is_object() {
        *entry = Value::Object(Map::new());
    }
    if let Value::Object(path_item) = entry {
        path_item.insert(route.method.key().to_string(), route.operation);
    }
}

/// Adds path operations for every entity.
///
/// Fails with `NotInitialized` before touching `doc` when `paths` is missing.
/// Request bodies are emitted as `$ref`s into `components.requestBodies`, so
/// schema generation should run first for the references to resolve.
pub fn generate_paths(doc: &mut Value, entities: &[Entity]) -> AppResult<()> {
    check_sections(doc, &[Section::Paths])?;
    let paths = section_mut(doc, Section::Paths)?;

    let mut operations = 0;
    for entity in entities {
        if entity.actions.is_empty() {
            tracing::warn!(entity = %entity.name, "no allowed actions, no routes generated");
            continue;
        }
        for route in entity_routes(entity) {
            tracing::debug!(
                entity = %entity.name,
                action = %route.action,
                method = %route.method,
                path = %route.path,
                "generated route"
            );
            insert_route(paths, route);
            operations += 1;
        }
    }

    tracing::info!(count = entities.len(), operations, "paths generated");
    Ok(())
}
