// src/parser/swagger.rs

use serde_json::{Map, Number, Value};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

use super::model::{
    ApiResponse, HttpMethod, Operation, Parameter, ParameterLocation, PathItem, PrimitiveDescriptor,
    Property, SchemaDefinitionSet, SchemaModel, SwaggerDocument, VendorExtensions,
};

#[derive(Debug, Error)]
pub enum ParserError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Unsupported Swagger version, only 2.0 documents can be converted")]
    UnsupportedVersion,

    #[error("Invalid Swagger specification: {0}")]
    InvalidSpec(String),
}

pub type Result<T> = std::result::Result<T, ParserError>;

/// Parse a Swagger specification from a file.
///
/// `.json` files are read as JSON, everything else as YAML (which also accepts JSON).
pub fn parse_swagger_file<P: AsRef<Path>>(path: P) -> Result<SwaggerDocument> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if is_json {
        parse_swagger_string(&content)
    } else {
        parse_swagger_yaml(&content)
    }
}

/// Parse a Swagger specification from a JSON string
pub fn parse_swagger_string(content: &str) -> Result<SwaggerDocument> {
    let spec: Value = serde_json::from_str(content)?;
    parse_swagger_value(&spec)
}

/// Parse a Swagger specification from a YAML string
pub fn parse_swagger_yaml(content: &str) -> Result<SwaggerDocument> {
    let yaml: serde_yaml::Value = serde_yaml::from_str(content)?;
    parse_swagger_value(&yaml_to_json(&yaml)?)
}

/// Convert a YAML tree to JSON, keeping mapping order.
///
/// Non-string keys (e.g. unquoted status codes like `200:`) are rendered as strings.
pub fn yaml_to_json(value: &serde_yaml::Value) -> Result<Value> {
    match value {
        serde_yaml::Value::Null => Ok(Value::Null),
        serde_yaml::Value::Bool(b) => Ok(Value::Bool(*b)),
        serde_yaml::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Value::Number(i.into()))
            } else if let Some(u) = n.as_u64() {
                Ok(Value::Number(u.into()))
            } else {
                n.as_f64()
                    .and_then(Number::from_f64)
                    .map(Value::Number)
                    .ok_or_else(|| ParserError::InvalidSpec(format!("unsupported number '{}'", n)))
            }
        }
        serde_yaml::Value::String(s) => Ok(Value::String(s.clone())),
        serde_yaml::Value::Sequence(items) => items.iter().map(yaml_to_json).collect::<Result<Vec<_>>>().map(Value::Array),
        serde_yaml::Value::Mapping(mapping) => {
            let mut obj = Map::new();
            for (key, item) in mapping {
                let key = match key {
                    serde_yaml::Value::String(s) => s.clone(),
                    serde_yaml::Value::Number(n) => n.to_string(),
                    serde_yaml::Value::Bool(b) => b.to_string(),
                    other => serde_yaml::to_string(other)?.trim().to_string(),
                };
                obj.insert(key, yaml_to_json(item)?);
            }
            Ok(Value::Object(obj))
        }
        serde_yaml::Value::Tagged(tagged) => yaml_to_json(&tagged.value),
    }
}

/// Build the typed document from an already parsed JSON tree
pub fn parse_swagger_value(spec: &Value) -> Result<SwaggerDocument> {
    let root = spec
        .as_object()
        .ok_or_else(|| ParserError::InvalidSpec("document root is not an object".into()))?;

    match root.get("swagger").and_then(Value::as_str) {
        Some("2.0") => {}
        _ => return Err(ParserError::UnsupportedVersion),
    }

    let base_path = root.get("basePath").and_then(Value::as_str).map(String::from);

    let definitions = match root.get("definitions") {
        Some(Value::Object(defs)) => Some(parse_definitions(defs)),
        Some(Value::Null) | None => None,
        Some(_) => return Err(ParserError::InvalidSpec("'definitions' must be an object".into())),
    };

    let mut paths = Vec::new();
    if let Some(paths_map) = root.get("paths").and_then(Value::as_object) {
        for (path, path_item) in paths_map {
            let mut api_path = PathItem {
                path: path.clone(),
                operations: Vec::new(),
            };

            if let Some(path_obj) = path_item.as_object() {
                for method in HttpMethod::ORDERED {
                    if let Some(op_obj) = path_obj.get(&method.key()).and_then(Value::as_object) {
                        api_path.operations.push(parse_operation(root, method, op_obj)?);
                    }
                }
            }

            if !api_path.operations.is_empty() {
                paths.push(api_path);
            }
        }
    }

    debug!(
        paths = paths.len(),
        definitions = definitions.as_ref().map(|d| d.len()).unwrap_or(0),
        "parsed swagger document"
    );

    Ok(SwaggerDocument {
        base_path,
        paths,
        definitions,
    })
}

fn parse_operation(root: &Map<String, Value>, method: HttpMethod, op_obj: &Map<String, Value>) -> Result<Operation> {
    let mut parameters = Vec::new();
    if let Some(params) = op_obj.get("parameters").and_then(Value::as_array) {
        for param in params {
            let param = follow_local_ref(root, param, "parameters")?;
            if let Some(param_obj) = param.as_object() {
                if let Some(parameter) = parse_parameter(param_obj) {
                    parameters.push(parameter);
                }
            }
        }
    }

    let mut responses = Vec::new();
    if let Some(resp_obj) = op_obj.get("responses").and_then(Value::as_object) {
        for (status_code, response) in resp_obj {
            let response = follow_local_ref(root, response, "responses")?;
            if let Some(response_obj) = response.as_object() {
                responses.push(parse_response(status_code, response_obj));
            }
        }
    }

    Ok(Operation {
        method,
        operation_id: string_field(op_obj, "operationId"),
        summary: string_field(op_obj, "summary"),
        description: string_field(op_obj, "description"),
        tags: string_list(op_obj, "tags"),
        parameters,
        responses,
        consumes: string_list(op_obj, "consumes"),
        produces: string_list(op_obj, "produces"),
        extensions: VendorExtensions::from_object(op_obj),
    })
}

fn parse_parameter(param_obj: &Map<String, Value>) -> Option<Parameter> {
    let location = param_obj
        .get("in")
        .and_then(Value::as_str)
        .and_then(ParameterLocation::parse)?;

    let property = match location {
        ParameterLocation::Body => param_obj.get("schema").map(parse_property),
        _ => Some(parse_property_object(param_obj)),
    };

    Some(Parameter {
        name: string_field(param_obj, "name").unwrap_or_default(),
        location,
        property,
        extensions: VendorExtensions::from_object(param_obj),
    })
}

fn parse_response(status_code: &str, response_obj: &Map<String, Value>) -> ApiResponse {
    let headers = response_obj
        .get("headers")
        .and_then(Value::as_object)
        .map(|headers| {
            headers
                .iter()
                .map(|(name, header)| (name.clone(), parse_property(header)))
                .collect()
        })
        .unwrap_or_default();

    let examples = response_obj
        .get("examples")
        .and_then(Value::as_object)
        .map(|examples| examples.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
        .unwrap_or_default();

    ApiResponse {
        status_code: status_code.to_string(),
        headers,
        schema: response_obj.get("schema").map(parse_property),
        examples,
        extensions: VendorExtensions::from_object(response_obj),
    }
}

fn parse_definitions(defs: &Map<String, Value>) -> SchemaDefinitionSet {
    defs.iter()
        .map(|(name, model)| (name.clone(), parse_model(model)))
        .collect()
}

/// Classify a definition as object, enum or opaque
pub fn parse_model(model: &Value) -> SchemaModel {
    let obj = match model.as_object() {
        Some(obj) => obj,
        None => return SchemaModel::Opaque,
    };

    if let Some(props) = obj.get("properties").and_then(Value::as_object) {
        return SchemaModel::Object {
            properties: parse_properties(props),
        };
    }

    let composed = obj.contains_key("$ref") || obj.contains_key("allOf");
    let is_array = obj.get("type").and_then(Value::as_str) == Some("array");
    let values = obj.get("enum").and_then(Value::as_array).cloned().unwrap_or_default();

    if composed || is_array || values.is_empty() {
        return SchemaModel::Opaque;
    }

    SchemaModel::Enum {
        values,
        default: obj.get("default").filter(|v| !v.is_null()).cloned(),
    }
}

/// Parse a schema, property or header object into a [`Property`]
pub fn parse_property(schema: &Value) -> Property {
    match schema.as_object() {
        Some(obj) => parse_property_object(obj),
        None => Property::Primitive(PrimitiveDescriptor::default()),
    }
}

fn parse_property_object(obj: &Map<String, Value>) -> Property {
    if let Some(reference) = obj.get("$ref").and_then(Value::as_str) {
        return Property::Ref(reference.to_string());
    }

    let type_name = obj.get("type").and_then(Value::as_str).unwrap_or("");

    if type_name == "array" {
        let items = obj
            .get("items")
            .map(parse_property)
            .unwrap_or_else(|| Property::Primitive(PrimitiveDescriptor::default()));
        return Property::Array(Box::new(items));
    }

    if let Some(props) = obj.get("properties").and_then(Value::as_object) {
        return Property::Object(parse_properties(props));
    }
    if type_name == "object" {
        return Property::Object(Vec::new());
    }

    Property::Primitive(PrimitiveDescriptor {
        type_name: type_name.to_string(),
        format: string_field(obj, "format"),
        minimum: number_field(obj, "minimum"),
        maximum: number_field(obj, "maximum"),
        enum_values: obj.get("enum").and_then(Value::as_array).cloned().unwrap_or_default(),
        default: obj.get("default").filter(|v| !v.is_null()).cloned(),
        example: obj.get("example").filter(|v| !v.is_null()).cloned(),
    })
}

fn parse_properties(props: &Map<String, Value>) -> Vec<(String, Property)> {
    props
        .iter()
        .map(|(name, prop)| (name.clone(), parse_property(prop)))
        .collect()
}

/// Replace a `#/<section>/<Name>` reference by the shared object it names
fn follow_local_ref<'a>(root: &'a Map<String, Value>, value: &'a Value, section: &str) -> Result<&'a Value> {
    let reference = match value.get("$ref").and_then(Value::as_str) {
        Some(reference) => reference,
        None => return Ok(value),
    };

    let prefix = format!("#/{}/", section);
    let name = reference
        .strip_prefix(&prefix)
        .ok_or_else(|| ParserError::InvalidSpec(format!("unsupported reference '{}'", reference)))?;

    root.get(section)
        .and_then(|shared| shared.get(name))
        .ok_or_else(|| ParserError::InvalidSpec(format!("could not resolve reference '{}'", reference)))
}

fn string_field(obj: &Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key).and_then(Value::as_str).map(String::from)
}

fn string_list(obj: &Map<String, Value>, key: &str) -> Vec<String> {
    obj.get(key)
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(Value::as_str).map(String::from).collect())
        .unwrap_or_default()
}

fn number_field(obj: &Map<String, Value>, key: &str) -> Option<Number> {
    match obj.get(key) {
        Some(Value::Number(n)) => Some(n.clone()),
        _ => None,
    }
}
