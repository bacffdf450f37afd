#![deny(missing_docs)]

//! # Document Generation
//!
//! Runs schema generation and path generation against one container in the
//! order the `$ref`s require.

use crate::document::{check_sections, Section};
use crate::entity::Entity;
use crate::error::AppResult;
use crate::path_generator::generate_paths;
use crate::schema_generator::generate_schemas;
use serde_json::Value;

/// Generates schemas, request bodies, and paths for every entity.
///
/// All three container sections are checked before anything is written, so
/// a missing section leaves `doc` untouched.
pub fn generate_document(doc: &mut Value, entities: &[Entity]) -> AppResult<()> {
    check_sections(
        doc,
        &[Section::Paths, Section::Schemas, Section::RequestBodies],
    )?;
    generate_schemas(doc, entities)?;
    generate_paths(doc, entities)
}
