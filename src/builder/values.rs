// src/builder/values.rs

use serde_json::Value;

use super::Result;
use crate::json::normalize;
use crate::parser::{Parameter, Property, SchemaDefinitionSet, VendorExtensions};
use crate::reference::{create_resolver, property_value, ResolvedValue, ResolverContext};
use crate::valuefields::{create_default_value, ExampleValue};

/// Value of a query or header parameter.
///
/// `None` for ignored parameters and bodies without a schema.
pub fn parameter_value(parameter: &Parameter) -> Option<ExampleValue> {
    if parameter.extensions.is_ignored() {
        return None;
    }
    if let Some(example) = parameter.extensions.example() {
        return Some(ExampleValue::Literal(example.clone()));
    }
    parameter
        .property
        .as_ref()
        .map(|property| simple_value(&parameter.name, property))
}

fn simple_value(name: &str, property: &Property) -> ExampleValue {
    match property {
        Property::Primitive(primitive) => {
            if let Some(default) = &primitive.default {
                return ExampleValue::Literal(default.clone());
            }
            if let Some(first) = primitive.enum_values.first() {
                return ExampleValue::Literal(first.clone());
            }
            create_default_value(
                &primitive.type_name,
                primitive.format.as_deref(),
                Some(name),
                primitive.minimum.as_ref(),
                primitive.maximum.as_ref(),
            )
        }
        Property::Array(items) => ExampleValue::Literal(Value::Array(vec![simple_value(name, items).to_json()])),
        Property::Ref(reference) => ExampleValue::String(reference.clone()),
        Property::Object(_) => ExampleValue::Literal(Value::Object(Default::default())),
    }
}

/// Text substituted for `{name}` in a URL path: the `x-example`, or the parameter's own name
pub fn path_parameter_text(parameter: &Parameter) -> String {
    parameter
        .extensions
        .example()
        .map(|example| ExampleValue::Literal(example.clone()).to_text())
        .unwrap_or_else(|| parameter.name.clone())
}

/// Value of a declared response header
pub fn response_header_value(
    name: &str,
    property: &Property,
    definitions: Option<&SchemaDefinitionSet>,
) -> Result<Value> {
    Ok(property_value(name, property, definitions)?.to_json())
}

/// Body of a request or response.
///
/// Looks at `x-example`, then `x-ref`, then the declared `examples`, then the schema.
pub fn body_value(
    name: Option<&str>,
    extensions: &VendorExtensions,
    schema: Option<&Property>,
    examples: &[(String, Value)],
    definitions: Option<&SchemaDefinitionSet>,
    context: &ResolverContext,
) -> Result<Option<String>> {
    if let Some(example) = extensions.example() {
        return literal_text(example).map(Some);
    }

    if extensions.reference().is_none() {
        if let Some((_, example)) = examples.first() {
            return literal_text(example).map(Some);
        }
    }

    if let Some(resolver) = create_resolver(extensions, schema) {
        return Ok(Some(resolver.resolve_reference(definitions, context)?));
    }

    let schema = match schema {
        Some(schema) => schema,
        None => return Ok(None),
    };

    let resolved = property_value(name.unwrap_or_default(), schema, definitions)?;
    match resolved {
        ResolvedValue::Scalar(scalar) => Ok(Some(scalar.to_text())),
        tree => {
            let json = serde_json::to_string_pretty(&tree.to_json())?;
            Ok(Some(normalize(&json)?))
        }
    }
}

fn literal_text(literal: &Value) -> Result<String> {
    match literal {
        Value::String(s) => Ok(s.clone()),
        other => Ok(serde_json::to_string_pretty(other)?),
    }
}
