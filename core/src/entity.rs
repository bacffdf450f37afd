#![deny(missing_docs)]

//! # Entity Descriptors
//!
//! Resolved descriptions of the persistent entities that get CRUD documentation.
//!
//! Optional manifest attributes (`allowedActions`, `requestFields`,
//! `responseFields`) are defaulted exactly once, when an [`Entity`] is built or
//! deserialized. The generators only ever see resolved values.

use crate::error::{AppError, AppResult};
use crate::type_mapping::FieldType;
use indexmap::IndexMap;
use serde::Deserialize;
use std::fmt::Display;
use std::fs;
use std::path::Path;

/// Abstract CRUD action an entity may expose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// `POST /{noun}s`
    Create,
    /// `GET /{noun}s`
    Read,
    /// `PUT /{noun}s/{id}`
    Update,
    /// `DELETE /{noun}s/{id}`
    Delete,
}

impl Action {
    /// All actions, in route table order.
    pub const ALL: [Action; 4] = [Action::Read, Action::Create, Action::Update, Action::Delete];

    /// Parses an action tag, ignoring case (`read`, `READ`).
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.to_ascii_lowercase().as_str() {
            "create" => Some(Action::Create),
            "read" => Some(Action::Read),
            "update" => Some(Action::Update),
            "delete" => Some(Action::Delete),
            _ => None,
        }
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Create => write!(f, "create"),
            Action::Read => write!(f, "read"),
            Action::Update => write!(f, "update"),
            Action::Delete => write!(f, "delete"),
        }
    }
}

/// An action tag as written in a manifest.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum ActionTag {
    /// A recognised action.
    Known(Action),
    /// Anything else. The original tag is kept for diagnostics.
    Unknown(String),
}

impl From<String> for ActionTag {
    fn from(tag: String) -> Self {
        match Action::from_tag(&tag) {
            Some(action) => ActionTag::Known(action),
            None => ActionTag::Unknown(tag),
        }
    }
}

/// The set of actions an entity exposes.
///
/// Only empty when a manifest lists nothing but unknown tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionSet(Vec<Action>);

impl ActionSet {
    /// Every action.
    pub fn all() -> Self {
        Self(Action::ALL.to_vec())
    }

    /// No action at all.
    pub fn none() -> Self {
        Self(Vec::new())
    }

    /// Builds a set from a list; an empty list means every action.
    pub fn from_actions(actions: impl IntoIterator<Item = Action>) -> Self {
        let mut set = Vec::new();
        for action in actions {
            if !set.contains(&action) {
                set.push(action);
            }
        }
        if set.is_empty() {
            Self::all()
        } else {
            Self(set)
        }
    }

    /// Resolves manifest tags for `entity`.
    ///
    /// Absent or empty lists mean every action. Unknown tags are logged and
    /// skipped; a list made only of unknown tags allows nothing.
    pub fn from_tags(entity: &str, tags: Option<Vec<ActionTag>>) -> Self {
        let tags = tags.unwrap_or_default();
        if tags.is_empty() {
            return Self::all();
        }

        let mut known = Vec::new();
        for tag in tags {
            match tag {
                ActionTag::Known(action) => known.push(action),
                ActionTag::Unknown(tag) => {
                    tracing::warn!(entity, tag = %tag, "unknown action tag, skipping");
                }
            }
        }
        if known.is_empty() {
            Self::none()
        } else {
            Self::from_actions(known)
        }
    }

    /// Whether `action` is allowed.
    pub fn contains(&self, action: Action) -> bool {
        self.0.contains(&action)
    }

    /// Whether no action is allowed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for ActionSet {
    fn default() -> Self {
        Self::all()
    }
}

/// Which entity fields a generated schema exposes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldSelection {
    /// Every field of the entity.
    #[default]
    All,
    /// Only the listed fields. Names the entity does not define are ignored.
    Only(Vec<String>),
}

impl FieldSelection {
    /// Whether the field called `name` is exposed.
    pub fn includes(&self, name: &str) -> bool {
        match self {
            FieldSelection::All => true,
            FieldSelection::Only(names) => names.iter().any(|n| n == name),
        }
    }

    /// Listed names the entity does not define.
    pub fn unknown_names<'a>(
        &'a self,
        fields: &'a IndexMap<String, FieldType>,
    ) -> Vec<&'a str> {
        match self {
            FieldSelection::All => Vec::new(),
            FieldSelection::Only(names) => names
                .iter()
                .filter(|n| !fields.contains_key(n.as_str()))
                .map(String::as_str)
                .collect(),
        }
    }
}

impl From<Option<Vec<String>>> for FieldSelection {
    fn from(names: Option<Vec<String>>) -> Self {
        names.map_or(FieldSelection::All, FieldSelection::Only)
    }
}

/// A resolved entity descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "EntityManifest")]
pub struct Entity {
    /// Schema name, used verbatim as the component key.
    pub name: String,
    /// Actions that get a route.
    pub actions: ActionSet,
    /// Field name to type tag. Iteration order is property order.
    pub fields: IndexMap<String, FieldType>,
    /// Fields exposed in the POST/PUT request body.
    pub request_fields: FieldSelection,
    /// Fields exposed in the response schema.
    pub response_fields: FieldSelection,
}

impl Entity {
    /// Creates an entity with no fields, all actions, and full field exposure.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            actions: ActionSet::all(),
            fields: IndexMap::new(),
            request_fields: FieldSelection::All,
            response_fields: FieldSelection::All,
        }
    }

    /// Appends a field.
    pub fn with_field(
        mut self,
        name: impl Into<String>,
        field_type: impl Into<FieldType>,
    ) -> Self {
        self.fields.insert(name.into(), field_type.into());
        self
    }

    /// Restricts the allowed actions. An empty list keeps all four.
    pub fn with_actions(mut self, actions: impl IntoIterator<Item = Action>) -> Self {
        self.actions = ActionSet::from_actions(actions);
        self
    }

    /// Restricts the request body to the listed fields.
    pub fn with_request_fields<S: Into<String>>(
        mut self,
        names: impl IntoIterator<Item = S>,
    ) -> Self {
        self.request_fields = FieldSelection::Only(names.into_iter().map(Into::into).collect());
        self
    }

    /// Restricts the response schema to the listed fields.
    pub fn with_response_fields<S: Into<String>>(
        mut self,
        names: impl IntoIterator<Item = S>,
    ) -> Self {
        self.response_fields = FieldSelection::Only(names.into_iter().map(Into::into).collect());
        self
    }
}

/// Raw manifest entry, before defaults are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityManifest {
    /// Schema name.
    pub name: String,
    /// Allowed action tags; absent or empty means all.
    #[serde(default, alias = "actions")]
    pub allowed_actions: Option<Vec<ActionTag>>,
    /// Field name to type tag.
    #[serde(default)]
    pub fields: IndexMap<String, FieldType>,
    /// Request body field subset.
    #[serde(default, alias = "postBody")]
    pub request_fields: Option<Vec<String>>,
    /// Response schema field subset.
    #[serde(default, alias = "responseBody")]
    pub response_fields: Option<Vec<String>>,
}

impl From<EntityManifest> for Entity {
    fn from(raw: EntityManifest) -> Self {
        let actions = ActionSet::from_tags(&raw.name, raw.allowed_actions);
        Self {
            name: raw.name,
            actions,
            fields: raw.fields,
            request_fields: raw.request_fields.into(),
            response_fields: raw.response_fields.into(),
        }
    }
}

/// Parses a manifest from JSON or YAML text.
///
/// The document is either a list of entities or a mapping with an
/// `entities` list. YAML is a superset of JSON, so one parser covers both.
pub fn parse_manifest(source: &str) -> AppResult<Vec<Entity>> {
    let list = match serde_yaml::from_str::<serde_yaml::Value>(source)? {
        serde_yaml::Value::Mapping(mut root) => root.remove("entities").ok_or_else(|| {
            AppError::General("Manifest mapping has no 'entities' list".to_string())
        })?,
        other => other,
    };
    let entities: Vec<Entity> = serde_yaml::from_value(list)?;

    for entity in &entities {
        if entity.name.trim().is_empty() {
            return Err(AppError::General(
                "Manifest entity is missing a name".to_string(),
            ));
        }
        for name in entity
            .request_fields
            .unknown_names(&entity.fields)
            .into_iter()
            .chain(entity.response_fields.unknown_names(&entity.fields))
        {
            tracing::warn!(entity = %entity.name, field = name, "selected field is not defined");
        }
        for (field, ty) in &entity.fields {
            if !ty.is_known() {
                tracing::warn!(
                    entity = %entity.name,
                    field = %field,
                    tag = ty.tag(),
                    "unknown type tag, falling back to string"
                );
            }
        }
    }

    Ok(entities)
}

/// Reads a manifest file (`.json`, `.yaml` or `.yml`).
pub fn load_manifest(path: &Path) -> AppResult<Vec<Entity>> {
    let content = fs::read_to_string(path)?;
    let entities = parse_manifest(&content)?;
    tracing::debug!(path = %path.display(), count = entities.len(), "loaded manifest");
    Ok(entities)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_actions_default_to_all() {
        assert_eq!(ActionSet::from_actions([]), ActionSet::all());
        let e = Entity::new("User").with_actions(Vec::new());
        for action in Action::ALL {
            assert!(e.actions.contains(action));
        }
    }

    #[test]
    fn test_action_set_dedup() {
        let set = ActionSet::from_actions([Action::Read, Action::Read, Action::Create]);
        assert_eq!(set, ActionSet::from_actions([Action::Read, Action::Create]));
        assert!(!set.contains(Action::Delete));
    }

    #[test]
    fn test_action_tags_ignore_case() {
        assert_eq!(Action::from_tag("CREATE"), Some(Action::Create));
        assert_eq!(Action::from_tag("Delete"), Some(Action::Delete));
        assert_eq!(Action::from_tag("patch"), None);
        assert_eq!(
            ActionTag::from("PATCH".to_string()),
            ActionTag::Unknown("PATCH".into())
        );
    }

    #[test]
    fn test_only_unknown_tags_allow_nothing() {
        let set = ActionSet::from_tags("User", Some(vec![ActionTag::Unknown("patch".into())]));
        assert!(set.is_empty());
        assert_eq!(ActionSet::from_tags("User", Some(Vec::new())), ActionSet::all());
        assert_eq!(ActionSet::from_tags("User", None), ActionSet::all());
    }

    #[test]
    fn test_field_selection() {
        assert!(FieldSelection::All.includes("anything"));
        let only = FieldSelection::Only(vec!["id".into()]);
        assert!(only.includes("id"));
        assert!(!only.includes("email"));
        assert_eq!(FieldSelection::from(None), FieldSelection::All);
    }

    #[test]
    fn test_builder_preserves_field_order() {
        let e = Entity::new("User")
            .with_field("id", "integer")
            .with_field("email", "string")
            .with_field("created_at", FieldType::Date);
        let names: Vec<_> = e.fields.keys().cloned().collect();
        assert_eq!(names, vec!["id", "email", "created_at"]);
    }

    #[test]
    fn test_parse_yaml_manifest() {
        let yaml = r#"
entities:
  - name: User
    allowedActions: [create, read]
    fields:
      id: INTEGER
      email: STRING
      password: STRING
    responseFields: [id, email]
  - name: Post
    fields:
      title: string
"#;
        let entities = parse_manifest(yaml).unwrap();
        assert_eq!(entities.len(), 2);

        let user = &entities[0];
        assert!(user.actions.contains(Action::Create));
        assert!(!user.actions.contains(Action::Update));
        assert_eq!(user.fields["id"], FieldType::Integer);
        assert_eq!(user.request_fields, FieldSelection::All);
        assert_eq!(
            user.response_fields,
            FieldSelection::Only(vec!["id".into(), "email".into()])
        );

        assert_eq!(entities[1].actions, ActionSet::all());
    }

    #[test]
    fn test_parse_json_list_with_aliases() {
        let json = r#"[{
            "name": "Session",
            "actions": ["delete"],
            "fields": {"token": "string", "expires": "date"},
            "postBody": ["token"]
        }]"#;
        let entities = parse_manifest(json).unwrap();
        let session = &entities[0];
        assert_eq!(session.actions, ActionSet::from_actions([Action::Delete]));
        assert_eq!(session.request_fields, FieldSelection::Only(vec!["token".into()]));
        assert_eq!(session.fields["expires"], FieldType::Date);
    }

    #[test]
    fn test_parse_upper_case_actions() {
        let yaml = "- name: User\n  actions: [CREATE, READ]\n  fields:\n    id: INTEGER\n";
        let entities = parse_manifest(yaml).unwrap();
        assert_eq!(
            entities[0].actions,
            ActionSet::from_actions([Action::Create, Action::Read])
        );
    }

    #[test]
    fn test_unknown_action_keeps_other_entities() {
        let yaml = r#"
- name: User
  actions: [read, patch]
- name: Post
  actions: [delete]
- name: Tag
  actions: [patch]
"#;
        let entities = parse_manifest(yaml).unwrap();
        assert_eq!(entities.len(), 3);
        assert_eq!(entities[0].actions, ActionSet::from_actions([Action::Read]));
        assert_eq!(entities[1].actions, ActionSet::from_actions([Action::Delete]));
        assert!(entities[2].actions.is_empty());
    }

    #[test]
    fn test_parse_error_names_real_cause() {
        let err = parse_manifest("- name: [1, 2]\n").unwrap_err();
        assert!(matches!(err, AppError::Yaml(_)));
        assert!(!err.to_string().contains("untagged"));
    }

    #[test]
    fn test_mapping_without_entities() {
        let err = parse_manifest("models: []\n").unwrap_err();
        assert!(matches!(err, AppError::General(_)));
    }

    #[test]
    fn test_parse_manifest_rejects_unnamed() {
        let err = parse_manifest("- name: ''\n").unwrap_err();
        assert!(matches!(err, AppError::General(_)));
    }

    #[test]
    fn test_load_manifest_missing_file() {
        let err = load_manifest(Path::new("/definitely/not/here.yaml")).unwrap_err();
        assert!(matches!(err, AppError::Io(_)));
    }
}
