// src/parser/model.rs

use std::collections::BTreeMap;
use std::fmt;

use serde_json::{Map, Number, Value};

use crate::valuefields::SwaggerField;

/// Named schema definitions of a document (`#/definitions/<Name>`)
pub type SchemaDefinitionSet = BTreeMap<String, SchemaModel>;

/// Vendor extensions (`x-*` keys) attached to an operation, parameter or response
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VendorExtensions(Map<String, Value>);

impl VendorExtensions {
    /// Collects every `x-*` key of a JSON object
    pub fn from_object(object: &Map<String, Value>) -> Self {
        let extensions = object
            .iter()
            .filter(|(key, _)| key.starts_with("x-"))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        VendorExtensions(extensions)
    }

    pub fn get(&self, field: SwaggerField) -> Option<&Value> {
        self.0.get(field.field())
    }

    /// `x-ignore` is only honoured when it is the boolean `true`
    pub fn is_ignored(&self) -> bool {
        self.get(SwaggerField::XIgnore).and_then(Value::as_bool).unwrap_or(false)
    }

    pub fn example(&self) -> Option<&Value> {
        self.get(SwaggerField::XExample)
    }

    pub fn reference(&self) -> Option<&str> {
        self.get(SwaggerField::XRef).and_then(Value::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A schema definition, classified once when the document is loaded
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaModel {
    /// A model with properties. Never treated as an enum, even when it also lists values.
    Object { properties: Vec<(String, Property)> },

    /// A model without properties that lists its allowed literals
    Enum { values: Vec<Value>, default: Option<Value> },

    /// Anything else (`$ref`-only, composed, array or empty models)
    Opaque,
}

/// The value kind of a property, parameter or response schema
#[derive(Debug, Clone, PartialEq)]
pub enum Property {
    Primitive(PrimitiveDescriptor),
    Ref(String),
    Array(Box<Property>),
    Object(Vec<(String, Property)>),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PrimitiveDescriptor {
    /// Raw `type`, kept as written so unknown types still synthesize a value
    pub type_name: String,
    pub format: Option<String>,
    pub minimum: Option<Number>,
    pub maximum: Option<Number>,
    pub enum_values: Vec<Value>,
    pub default: Option<Value>,
    pub example: Option<Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Put,
    Head,
    Post,
    Delete,
    Patch,
    Options,
}

impl HttpMethod {
    /// Traversal order of operations within a path item
    pub const ORDERED: [HttpMethod; 7] = [
        HttpMethod::Get,
        HttpMethod::Put,
        HttpMethod::Head,
        HttpMethod::Post,
        HttpMethod::Delete,
        HttpMethod::Patch,
        HttpMethod::Options,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Put => "PUT",
            HttpMethod::Head => "HEAD",
            HttpMethod::Post => "POST",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Options => "OPTIONS",
        }
    }

    /// The lower-case key used in a Swagger path item
    pub fn key(&self) -> String {
        self.as_str().to_lowercase()
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterLocation {
    Path,
    Query,
    Header,
    Body,
    FormData,
}

impl ParameterLocation {
    pub fn parse(location: &str) -> Option<Self> {
        match location {
            "path" => Some(ParameterLocation::Path),
            "query" => Some(ParameterLocation::Query),
            "header" => Some(ParameterLocation::Header),
            "body" => Some(ParameterLocation::Body),
            "formData" => Some(ParameterLocation::FormData),
            _ => None,
        }
    }
}

/// A parsed Swagger v2 document
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SwaggerDocument {
    pub base_path: Option<String>,

    /// Path items in document order
    pub paths: Vec<PathItem>,

    /// `None` when the document declares no `definitions` section
    pub definitions: Option<SchemaDefinitionSet>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PathItem {
    /// The path template (e.g. "/planets/{id}")
    pub path: String,

    /// Operations in [`HttpMethod::ORDERED`] order
    pub operations: Vec<Operation>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    pub method: HttpMethod,
    pub operation_id: Option<String>,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub tags: Vec<String>,
    pub parameters: Vec<Parameter>,

    /// Responses in document order, keyed by status code
    pub responses: Vec<ApiResponse>,
    pub consumes: Vec<String>,
    pub produces: Vec<String>,
    pub extensions: VendorExtensions,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: String,
    pub location: ParameterLocation,

    /// For body parameters the `schema`; otherwise built from the parameter itself
    pub property: Option<Property>,
    pub extensions: VendorExtensions,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status_code: String,
    pub headers: Vec<(String, Property)>,
    pub schema: Option<Property>,

    /// The `examples` map (media type → literal)
    pub examples: Vec<(String, Value)>,
    pub extensions: VendorExtensions,
}
