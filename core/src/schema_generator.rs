#![deny(missing_docs)]

//! # Schema Generator
//!
//! Expands entity field lists into `components.schemas` and
//! `components.requestBodies` entries.
//!
//! For an entity `User` this writes:
//! - `schemas.User`: an object schema with the response fields.
//! - `requestBodies.User`: either a `$ref` to `schemas.User`, or an inline
//!   object schema when the entity narrows its request fields.

use crate::document::{check_sections, section_mut, Section};
use crate::entity::{Entity, FieldSelection};
use crate::error::AppResult;
use crate::routes::{schema_ref, JSON_MEDIA_TYPE};
use crate::type_mapping::map_field_type;
use serde_json::{json, Map, Value};

/// Maps every field of the entity, in field order.
pub fn build_properties(entity: &Entity) -> Map<String, Value> {
    entity
        .fields
        .iter()
        .map(|(name, ty)| (name.clone(), map_field_type(ty, name).to_value()))
        .collect()
}

/// Keeps the properties the selection includes. Property order is preserved.
fn select(properties: &Map<String, Value>, selection: &FieldSelection) -> Map<String, Value> {
    properties
        .iter()
        .filter(|(name, _)| selection.includes(name))
        .map(|(name, schema)| (name.clone(), schema.clone()))
        .collect()
}

/// The response schema stored under `components.schemas`.
pub fn entity_schema(entity: &Entity, properties: &Map<String, Value>) -> Value {
    json!({
        "type": "object",
        "properties": select(properties, &entity.response_fields)
    })
}

/// The request body stored under `components.requestBodies`.
pub fn entity_request_body(entity: &Entity, properties: &Map<String, Value>) -> Value {
    let schema = match &entity.request_fields {
        FieldSelection::All => json!({ "$ref": schema_ref(&entity.name) }),
        selection @ FieldSelection::Only(_) => json!({
            "type": "object",
            "properties": select(properties, selection)
        }),
    };

    json!({
        "description": format!("A {} object", entity.name),
        "required": true,
        "content": {
            JSON_MEDIA_TYPE: { "schema": schema }
        }
    })
}

/// Adds a schema and a request body for every entity.
///
/// Fails with `NotInitialized` before touching `doc` when
/// `components.schemas` or `components.requestBodies` is missing.
/// Existing entries with the same entity name are overwritten.
pub fn generate_schemas(doc: &mut Value, entities: &[Entity]) -> AppResult<()> {
    check_sections(doc, &[Section::Schemas, Section::RequestBodies])?;

    for entity in entities {
        let properties = build_properties(entity);
        let schema = entity_schema(entity, &properties);
        let body = entity_request_body(entity, &properties);

        section_mut(doc, Section::Schemas)?.insert(entity.name.clone(), schema);
        section_mut(doc, Section::RequestBodies)?.insert(entity.name.clone(), body);

        tracing::debug!(
            entity = %entity.name,
            properties = properties.len(),
            "generated schema and request body"
        );
    }

    tracing::info!(count = entities.len(), "schemas generated");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{skeleton, DocumentInfo};
    use crate::error::AppError;

    fn user() -> Entity {
        Entity::new("User")
            .with_field("id", "integer")
            .with_field("email", "string")
            .with_field("password", "string")
    }

    fn doc() -> Value {
        skeleton(&DocumentInfo::new("Test API", "1.0.0"))
    }

    #[test]
    fn test_full_exposure_refs_schema() {
        let mut doc = doc();
        generate_schemas(&mut doc, &[user()]).unwrap();

        let props = doc["components"]["schemas"]["User"]["properties"]
            .as_object()
            .unwrap();
        let keys: Vec<_> = props.keys().cloned().collect();
        assert_eq!(keys, vec!["id", "email", "password"]);
        assert_eq!(
            doc["components"]["requestBodies"]["User"],
            json!({
                "description": "A User object",
                "required": true,
                "content": {
                    "application/json": { "schema": { "$ref": "#/components/schemas/User" } }
                }
            })
        );
    }

    #[test]
    fn test_response_fields_keep_property_order() {
        let mut doc = doc();
        let entity = user().with_response_fields(["email", "id"]);
        generate_schemas(&mut doc, &[entity]).unwrap();

        let props = doc["components"]["schemas"]["User"]["properties"]
            .as_object()
            .unwrap();
        let keys: Vec<_> = props.keys().cloned().collect();
        assert_eq!(keys, vec!["id", "email"]);
    }

    #[test]
    fn test_request_fields_inline_schema() {
        let mut doc = doc();
        let entity = user().with_request_fields(["email", "password", "nickname"]);
        generate_schemas(&mut doc, &[entity]).unwrap();

        assert_eq!(
            doc["components"]["requestBodies"]["User"]["content"]["application/json"]["schema"],
            json!({
                "type": "object",
                "properties": {
                    "email": { "type": "string" },
                    "password": { "type": "string", "writeOnly": true, "format": "password" }
                }
            })
        );
    }

    #[test]
    fn test_missing_request_bodies_leaves_doc_untouched() {
        let mut doc = json!({ "paths": {}, "components": { "schemas": {} } });
        let before = doc.clone();
        let err = generate_schemas(&mut doc, &[user()]).unwrap_err();
        assert!(matches!(err, AppError::NotInitialized(Section::RequestBodies)));
        assert_eq!(doc, before);
    }

    #[test]
    fn test_overwrites_existing_entry() {
        let mut doc = doc();
        doc["components"]["schemas"]["User"] = json!({ "type": "string" });
        doc["components"]["schemas"]["Other"] = json!({ "type": "object" });
        generate_schemas(&mut doc, &[user()]).unwrap();
        assert_eq!(doc["components"]["schemas"]["User"]["type"], "object");
        assert_eq!(doc["components"]["schemas"]["Other"], json!({ "type": "object" }));
    }
}
