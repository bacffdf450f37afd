#![deny(missing_docs)]

//! # OpenAPI Document Container
//!
//! The generators mutate a caller-owned `serde_json::Value` in place. This
//! module names the sections they write to, checks that those sections exist,
//! and provides helpers for callers that need to build, read, or write a
//! container.

use crate::error::{AppError, AppResult};
use serde_json::{json, Map, Value};
use std::fmt::Display;
use std::fs;
use std::path::Path;

/// OpenAPI version written by [`skeleton`].
pub const OPENAPI_VERSION: &str = "3.0.0";

/// A container section the generators write to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// `paths`
    Paths,
    /// `components.schemas`
    Schemas,
    /// `components.requestBodies`
    RequestBodies,
}

impl Section {
    /// JSON pointer to the section.
    pub fn pointer(self) -> &'static str {
        match self {
            Section::Paths => "/paths",
            Section::Schemas => "/components/schemas",
            Section::RequestBodies => "/components/requestBodies",
        }
    }
}

impl Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Section::Paths => write!(f, "paths"),
            Section::Schemas => write!(f, "components.schemas"),
            Section::RequestBodies => write!(f, "components.requestBodies"),
        }
    }
}

/// Verifies that every listed section exists and is an object.
///
/// Fails with the first missing section. Never mutates `doc`.
pub fn check_sections(doc: &Value, sections: &[Section]) -> AppResult<()> {
    for section in sections {
        if !doc.pointer(section.pointer()).is_some_and(Value::is_object) {
            return Err(AppError::NotInitialized(*section));
        }
    }
    Ok(())
}

/// Mutable access to a section.
pub(crate) fn section_mut(doc: &mut Value, section: Section) -> AppResult<&mut Map<String, Value>> {
    match doc.pointer_mut(section.pointer()) {
        Some(Value::Object(map)) => Ok(map),
        _ => Err(AppError::NotInitialized(section)),
    }
}

/// Top-level metadata for a fresh container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentInfo {
    /// The title of the API.
    pub title: String,
    /// The version of the API document.
    pub version: String,
    /// Optional description for the API.
    pub description: Option<String>,
}

impl DocumentInfo {
    /// Creates a new DocumentInfo with required fields.
    pub fn new(title: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            version: version.into(),
            description: None,
        }
    }

    /// Sets an optional description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Builds an initialised container with empty `paths`, `components.schemas`
/// and `components.requestBodies`.
pub fn skeleton(info: &DocumentInfo) -> Value {
    let mut info_obj = Map::new();
    info_obj.insert("title".to_string(), json!(info.title));
    info_obj.insert("version".to_string(), json!(info.version));
    if let Some(desc) = &info.description {
        info_obj.insert("description".to_string(), json!(desc));
    }

    json!({
        "openapi": OPENAPI_VERSION,
        "info": Value::Object(info_obj),
        "paths": {},
        "components": {
            "schemas": {},
            "requestBodies": {}
        }
    })
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    )
}

/// Reads a document from a `.json`, `.yaml` or `.yml` file.
pub fn load_document(path: &Path) -> AppResult<Value> {
    let content = fs::read_to_string(path)?;
    let doc = if is_yaml(path) {
        serde_yaml::from_str(&content)?
    } else {
        serde_json::from_str(&content)?
    };
    Ok(doc)
}

/// Serializes a document, YAML for `.yaml`/`.yml` paths and pretty JSON otherwise.
pub fn render_document(doc: &Value, path: Option<&Path>) -> AppResult<String> {
    match path {
        Some(p) if is_yaml(p) => Ok(serde_yaml::to_string(doc)?),
        _ => Ok(serde_json::to_string_pretty(doc)?),
    }
}

/// Writes a document to `path`, creating parent directories as needed.
pub fn write_document(doc: &Value, path: &Path) -> AppResult<()> {
    let rendered = render_document(doc, Some(path))?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, rendered)?;
    Ok(())
}
