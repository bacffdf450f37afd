#![deny(missing_docs)]

//! # Type Mapping
//!
//! Converts primitive ORM column type tags into OpenAPI schema fragments.
//! The mapping is total: tags that are not recognised fall back to `string`.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use std::fmt::Display;

/// Field name that receives the password redaction rule.
const PASSWORD_FIELD: &str = "password";

/// Primitive column type tag of an entity field.
///
/// Tags are matched case-insensitively, so the lower-case manifest form
/// (`date`) and the upper-case ORM form (`DATE`) are the same tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldType {
    /// A timestamp column.
    Date,
    /// A text column.
    String,
    /// An integer column.
    Integer,
    /// A boolean column.
    Boolean,
    /// Any tag without a dedicated mapping. The original tag is kept.
    Other(String),
}

impl FieldType {
    /// Parses a type tag. Never fails.
    pub fn from_tag(tag: &str) -> Self {
        match tag.to_ascii_lowercase().as_str() {
            "date" => FieldType::Date,
            "string" => FieldType::String,
            "integer" => FieldType::Integer,
            "boolean" => FieldType::Boolean,
            _ => FieldType::Other(tag.to_string()),
        }
    }

    /// The canonical tag for this type.
    pub fn tag(&self) -> &str {
        match self {
            FieldType::Date => "date",
            FieldType::String => "string",
            FieldType::Integer => "integer",
            FieldType::Boolean => "boolean",
            FieldType::Other(tag) => tag,
        }
    }

    /// Whether the tag has a dedicated mapping.
    pub fn is_known(&self) -> bool {
        !matches!(self, FieldType::Other(_))
    }
}

impl From<String> for FieldType {
    fn from(tag: String) -> Self {
        FieldType::from_tag(&tag)
    }
}

impl From<&str> for FieldType {
    fn from(tag: &str) -> Self {
        FieldType::from_tag(tag)
    }
}

impl From<FieldType> for String {
    fn from(ty: FieldType) -> Self {
        ty.tag().to_string()
    }
}

/// Represents the simplified JSON types emitted for entity fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonType {
    /// A string type.
    String,
    /// An integer type.
    Integer,
    /// A boolean type.
    Boolean,
}

impl Display for JsonType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JsonType::String => write!(f, "string"),
            JsonType::Integer => write!(f, "integer"),
            JsonType::Boolean => write!(f, "boolean"),
        }
    }
}

/// Schema definition for a single mapped field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaFragment {
    /// The primary JSON type.
    pub type_: JsonType,
    /// Optional format specifier (e.g., "date-time", "password").
    pub format: Option<String>,
    /// Accepted on input but never returned.
    pub write_only: bool,
}

impl SchemaFragment {
    /// Renders the fragment as an OpenAPI schema object.
    ///
    /// Key order is `type`, `writeOnly`, `format`.
    pub fn to_value(&self) -> Value {
        let mut obj = Map::new();
        obj.insert("type".to_string(), json!(self.type_.to_string()));
        if self.write_only {
            obj.insert("writeOnly".to_string(), json!(true));
        }
        if let Some(format) = &self.format {
            obj.insert("format".to_string(), json!(format));
        }
        Value::Object(obj)
    }
}

/// Maps a field type tag and field name to its schema fragment.
///
/// A `string` field named exactly `password` (case-sensitive) is emitted as a
/// write-only password; no other name triggers the rule.
pub fn map_field_type(field_type: &FieldType, field_name: &str) -> SchemaFragment {
    match field_type {
        FieldType::Date => formatted(JsonType::String, "date-time"),
        FieldType::String if field_name == PASSWORD_FIELD => SchemaFragment {
            write_only: true,
            ..formatted(JsonType::String, "password")
        },
        FieldType::String => simple(JsonType::String),
        FieldType::Integer => simple(JsonType::Integer),
        FieldType::Boolean => simple(JsonType::Boolean),
        FieldType::Other(_) => simple(JsonType::String),
    }
}

// Helpers for cleaner construction
fn simple(t: JsonType) -> SchemaFragment {
    SchemaFragment {
        type_: t,
        format: None,
        write_only: false,
    }
}

fn formatted(t: JsonType, fmt: &str) -> SchemaFragment {
    SchemaFragment {
        type_: t,
        format: Some(fmt.to_string()),
        write_only: false,
    }
}
