#![deny(missing_docs)]

//! # Route Templates
//!
//! The four fixed CRUD operations, expressed as structured templates.
//!
//! Every user-visible string is a [`Text`] with noun slots, so an entity
//! name is only ever inserted where a slot is declared.

use crate::entity::Action;
use crate::messages;
use crate::template::Segment::{Lit, Lower, Original};
use crate::template::{Noun, Text};
use crate::type_mapping::JsonType;
use serde_json::{json, Map, Value};
use std::fmt::Display;

/// Media type used for every request and response body.
pub const JSON_MEDIA_TYPE: &str = "application/json";

/// HTTP methods supported by the templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// GET
    Get,
    /// POST
    Post,
    /// PUT
    Put,
    /// DELETE
    Delete,
}

impl Method {
    /// Lower-cased key used inside an OpenAPI path item.
    pub fn key(self) -> &'static str {
        match self {
            Method::Get => "get",
            Method::Post => "post",
            Method::Put => "put",
            Method::Delete => "delete",
        }
    }
}

impl Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key().to_uppercase())
    }
}

/// A path parameter declared by a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParameterTemplate {
    /// Parameter name as it appears in the path.
    pub name: &'static str,
    /// Rendered with the original-case noun.
    pub description: Text,
    /// Schema type of the parameter.
    pub schema_type: JsonType,
}

/// A status code and its description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseTemplate {
    /// HTTP status code.
    pub status: u16,
    /// Rendered with the lower-cased noun.
    pub description: Text,
}

/// Blueprint for one CRUD operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteTemplate {
    /// Action that enables this route.
    pub action: Action,
    /// HTTP method.
    pub method: Method,
    /// Path pattern, lower-cased noun.
    pub path: Text,
    /// Summary, lower-cased noun.
    pub summary: Text,
    /// Description, original-case noun.
    pub description: Text,
    /// Path parameters.
    pub parameters: &'static [ParameterTemplate],
    /// Whether the operation takes the entity request body.
    pub request_body: bool,
    /// Responses in declaration order.
    pub responses: &'static [ResponseTemplate],
}

const COLLECTION_PATH: Text = Text(&[Lit("/"), Lower, Lit("s")]);
const ITEM_PATH: Text = Text(&[Lit("/"), Lower, Lit("s/{id}")]);

/// The fixed route table, in emission order.
pub const ROUTE_TEMPLATES: [RouteTemplate; 4] = [
    RouteTemplate {
        action: Action::Read,
        method: Method::Get,
        path: COLLECTION_PATH,
        summary: Text(&[Lit("Get all "), Lower, Lit("s")]),
        description: Text(&[Lit("Retrieves a list of all "), Original, Lit("s in the system.")]),
        parameters: &[],
        request_body: false,
        responses: &[
            ResponseTemplate {
                status: 200,
                description: Text(&[Lit("A list of "), Lower, Lit("s")]),
            },
            ResponseTemplate {
                status: 500,
                description: Text(&[Lit(messages::SERVER_ERROR)]),
            },
        ],
    },
    RouteTemplate {
        action: Action::Create,
        method: Method::Post,
        path: COLLECTION_PATH,
        summary: Text(&[Lit("Create a new "), Lower]),
        description: Text(&[Lit("Creates a new "), Original, Lit(" in the system.")]),
        parameters: &[],
        request_body: true,
        responses: &[
            ResponseTemplate {
                status: 201,
                description: messages::CREATED,
            },
            ResponseTemplate {
                status: 400,
                description: Text(&[Lit(messages::INVALID_INPUT)]),
            },
        ],
    },
    RouteTemplate {
        action: Action::Update,
        method: Method::Put,
        path: ITEM_PATH,
        summary: Text(&[Lit("Update an existing "), Lower]),
        description: Text(&[Lit("Updates an existing "), Original, Lit(" in the system.")]),
        parameters: &[ParameterTemplate {
            name: "id",
            description: Text(&[Lit("ID of the "), Original, Lit(" to update")]),
            schema_type: JsonType::Integer,
        }],
        request_body: true,
        responses: &[
            ResponseTemplate {
                status: 200,
                description: messages::UPDATED,
            },
            ResponseTemplate {
                status: 400,
                description: Text(&[Lit(messages::INVALID_INPUT)]),
            },
            ResponseTemplate {
                status: 404,
                description: messages::NOT_FOUND,
            },
        ],
    },
    RouteTemplate {
        action: Action::Delete,
        method: Method::Delete,
        path: ITEM_PATH,
        summary: Text(&[Lit("Delete a "), Lower]),
        description: Text(&[Lit("Deletes a "), Original, Lit(" from the system.")]),
        parameters: &[ParameterTemplate {
            name: "id",
            description: Text(&[Lit("ID of the "), Original, Lit(" to delete")]),
            schema_type: JsonType::Integer,
        }],
        request_body: false,
        responses: &[
            ResponseTemplate {
                status: 204,
                description: messages::DELETED,
            },
            ResponseTemplate {
                status: 404,
                description: messages::NOT_FOUND,
            },
        ],
    },
];

/// `#/components/schemas/{name}`
pub fn schema_ref(name: &str) -> String {
    format!("#/components/schemas/{name}")
}

/// `#/components/requestBodies/{name}`
pub fn request_body_ref(name: &str) -> String {
    format!("#/components/requestBodies/{name}")
}

/// A template rendered for one entity.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    /// Action the route implements.
    pub action: Action,
    /// HTTP method.
    pub method: Method,
    /// Concrete path, e.g. `/users/{id}`.
    pub path: String,
    /// The OpenAPI operation object stored under `paths[path][method]`.
    pub operation: Value,
}

/// Response body schema injected for a method and status.
///
/// Only a list read with 200 and a write returning the entity (POST 201,
/// PUT 200) carry content; every other combination is description only.
fn response_schema(method: Method, status: u16, noun: &Noun) -> Option<Value> {
    match (method, status) {
        (Method::Get, 200) => Some(json!({
            "type": "array",
            "items": { "$ref": schema_ref(&noun.original) }
        })),
        (Method::Post, 201) | (Method::Put, 200) => {
            Some(json!({ "$ref": schema_ref(&noun.original) }))
        }
        _ => None,
    }
}

impl RouteTemplate {
    /// Renders the template for the entity called `noun`.
    pub fn render(&self, noun: &Noun) -> Route {
        let parameters = self
            .parameters
            .iter()
            .map(|param| {
                json!({
                    "name": param.name,
                    "in": "path",
                    "required": true,
                    "description": param.description.render(noun),
                    "schema": { "type": param.schema_type.to_string() }
                })
            })
            .collect::<Vec<_>>();

        let mut responses = Map::new();
        for response in self.responses {
            let mut obj = Map::new();
            obj.insert(
                "description".to_string(),
                json!(response.description.render(noun)),
            );
            if let Some(schema) = response_schema(self.method, response.status, noun) {
                obj.insert(
                    "content".to_string(),
                    json!({ JSON_MEDIA_TYPE: { "schema": schema } }),
                );
            }
            responses.insert(response.status.to_string(), Value::Object(obj));
        }

        let mut operation = Map::new();
        operation.insert("summary".to_string(), json!(self.summary.render(noun)));
        operation.insert(
            "description".to_string(),
            json!(self.description.render(noun)),
        );
        operation.insert("tags".to_string(), json!([noun.original]));
        operation.insert("parameters".to_string(), Value::Array(parameters));
        if self.request_body {
            operation.insert(
                "requestBody".to_string(),
                json!({ "$ref": request_body_ref(&noun.original) }),
            );
        }
        operation.insert("responses".to_string(), Value::Object(responses));

        Route {
            action: self.action,
            method: self.method,
            path: self.path.render(noun),
            operation: Value::Object(operation),
        }
    }
}

/// Renders the templates whose action is allowed, in table order.
pub fn render_routes(name: &str, allowed: impl Fn(Action) -> bool) -> Vec<Route> {
    let noun = Noun::new(name);
    ROUTE_TEMPLATES
        .iter()
        .filter(|template| allowed(template.action))
        .map(|template| template.render(&noun))
        .collect()
}
