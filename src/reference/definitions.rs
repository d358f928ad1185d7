// src/reference/definitions.rs

use serde_json::Value;
use tracing::{debug, warn};

use super::value::ResolvedValue;
use super::{ReferenceResolver, ResolveError, ResolverContext, Result};
use crate::json::normalize;
use crate::parser::{PrimitiveDescriptor, Property, SchemaDefinitionSet, SchemaModel};
use crate::valuefields::{create_default_value, ExampleValue};

/// Resolves a `#/definitions/<Name>` reference against the document's definitions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefinitionsRefResolver {
    reference: String,
}

impl DefinitionsRefResolver {
    pub fn new<S: Into<String>>(reference: S) -> Self {
        DefinitionsRefResolver {
            reference: reference.into(),
        }
    }

    pub fn reference(&self) -> &str {
        &self.reference
    }
}

impl ReferenceResolver for DefinitionsRefResolver {
    /// Enum definitions resolve to their literal as-is; object definitions to
    /// normalized, pretty printed JSON.
    fn resolve_reference(
        &self,
        definitions: Option<&SchemaDefinitionSet>,
        _context: &ResolverContext,
    ) -> Result<String> {
        let resolved = resolve_definitions_ref(&self.reference, definitions)?;

        if let Some(text) = resolved.as_text() {
            return Ok(text.to_string());
        }

        let json = serde_json::to_string_pretty(&resolved.to_json())?;
        Ok(normalize(&json)?)
    }
}

/// Resolve a reference into its example value tree
pub fn resolve_definitions_ref(
    reference: &str,
    definitions: Option<&SchemaDefinitionSet>,
) -> Result<ResolvedValue> {
    Walker::new(definitions).resolve(reference)
}

/// Example value for a single property, following any `$ref` it contains
pub fn property_value(
    name: &str,
    property: &Property,
    definitions: Option<&SchemaDefinitionSet>,
) -> Result<ResolvedValue> {
    Walker::new(definitions).property_value(name, property)
}

/// One resolution call. Tracks the definitions currently being expanded so a
/// definition that contains itself fails instead of recursing forever.
struct Walker<'a> {
    definitions: Option<&'a SchemaDefinitionSet>,
    ancestry: Vec<&'a str>,
}

impl<'a> Walker<'a> {
    fn new(definitions: Option<&'a SchemaDefinitionSet>) -> Self {
        Walker {
            definitions,
            ancestry: Vec::new(),
        }
    }

    fn resolve(&mut self, reference: &str) -> Result<ResolvedValue> {
        let unresolved = || ResolveError::UnresolvedReference(reference.to_string());

        let name = reference_name(reference);
        let definitions = self.definitions.ok_or_else(unresolved)?;
        let (name, model) = definitions.get_key_value(name).ok_or_else(unresolved)?;

        debug!(reference, "resolving definition");

        match model {
            SchemaModel::Opaque => Err(unresolved()),
            SchemaModel::Enum { values, default } => {
                let literal = default.as_ref().or_else(|| values.first()).ok_or_else(unresolved)?;
                Ok(ResolvedValue::Scalar(ExampleValue::String(literal_text(literal))))
            }
            SchemaModel::Object { properties } => {
                if self.ancestry.contains(&name.as_str()) {
                    warn!(reference, chain = ?self.ancestry, "definition references itself");
                    return Err(unresolved());
                }

                self.ancestry.push(name);
                let mut fields = Vec::with_capacity(properties.len());
                for (property_name, property) in properties {
                    fields.push((property_name.clone(), self.property_value(property_name, property)?));
                }
                self.ancestry.pop();

                Ok(ResolvedValue::Object(fields))
            }
        }
    }

    fn property_value(&mut self, name: &str, property: &'a Property) -> Result<ResolvedValue> {
        match property {
            Property::Primitive(primitive) => Ok(ResolvedValue::Scalar(primitive_value(name, primitive))),
            Property::Ref(reference) => self.resolve(reference),
            Property::Array(items) => Ok(ResolvedValue::List(vec![self.property_value(name, items)?])),
            Property::Object(properties) => {
                let mut fields = Vec::with_capacity(properties.len());
                for (property_name, property) in properties {
                    fields.push((property_name.clone(), self.property_value(property_name, property)?));
                }
                Ok(ResolvedValue::Object(fields))
            }
        }
    }
}

/// A declared example wins, then the first enum literal, then a synthesized default
pub(crate) fn primitive_value(name: &str, primitive: &PrimitiveDescriptor) -> ExampleValue {
    if let Some(example) = &primitive.example {
        return ExampleValue::Literal(example.clone());
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

/// `#/definitions/Planet` → `Planet`
fn reference_name(reference: &str) -> &str {
    reference.rsplit('/').next().unwrap_or(reference)
}

fn literal_text(literal: &Value) -> String {
    match literal {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::swagger::parse_model;
    use serde_json::json;

    fn definitions(defs: Value) -> SchemaDefinitionSet {
        defs.as_object()
            .unwrap()
            .iter()
            .map(|(name, model)| (name.clone(), parse_model(model)))
            .collect()
    }

    fn solar_system() -> SchemaDefinitionSet {
        definitions(json!({
            "Planet": {
                "type": "object",
                "properties": {
                    "name": { "type": "string" },
                    "mass": { "type": "number", "format": "double", "minimum": 3.3 },
                    "moons": { "type": "integer", "format": "int64" },
                    "habitable": { "type": "boolean" },
                    "size": { "$ref": "#/definitions/Size" },
                    "neighbours": { "type": "array", "items": { "$ref": "#/definitions/Moon" } }
                }
            },
            "Moon": {
                "type": "object",
                "properties": { "name": { "type": "string", "example": "Luna" } }
            },
            "Size": { "type": "string", "enum": ["SMALL", "BIG"] },
            "Color": { "type": "string", "enum": ["RED", "BLUE"], "default": "BLUE" },
            "Count": { "type": "integer", "enum": [3, 5] },
            "Nothing": { "type": "object" },
            "Node": {
                "type": "object",
                "properties": { "next": { "$ref": "#/definitions/Node" } }
            }
        }))
    }

    #[test]
    fn resolves_object_definition() {
        let defs = solar_system();
        let value = resolve_definitions_ref("#/definitions/Planet", Some(&defs)).unwrap();

        assert_eq!(
            value.to_json(),
            json!({
                "name": "name",
                "mass": 3.3,
                "moons": 1,
                "habitable": true,
                "size": "SMALL",
                "neighbours": [ { "name": "Luna" } ]
            })
        );
    }

    #[test]
    fn enum_without_default_resolves_first_literal() {
        let defs = solar_system();
        let value = resolve_definitions_ref("#/definitions/Size", Some(&defs)).unwrap();
        assert_eq!(value.as_text(), Some("SMALL"));
    }

    #[test]
    fn enum_default_wins() {
        let defs = solar_system();
        let value = resolve_definitions_ref("#/definitions/Color", Some(&defs)).unwrap();
        assert_eq!(value.as_text(), Some("BLUE"));
    }

    #[test]
    fn numeric_enum_is_rendered_as_string() {
        let defs = solar_system();
        let value = resolve_definitions_ref("#/definitions/Count", Some(&defs)).unwrap();
        assert_eq!(value.as_text(), Some("3"));
    }

    #[test]
    fn missing_definition_fails_with_reference() {
        let defs = SchemaDefinitionSet::new();
        let err = resolve_definitions_ref("#/definitions/DoesNotExist", Some(&defs)).unwrap_err();
        assert!(matches!(&err, ResolveError::UnresolvedReference(r) if r == "#/definitions/DoesNotExist"));
        assert_eq!(err.to_string(), "Could not resolve reference '#/definitions/DoesNotExist'");
    }

    #[test]
    fn missing_definitions_map_fails() {
        let err = resolve_definitions_ref("#/definitions/Planet", None).unwrap_err();
        assert!(matches!(err, ResolveError::UnresolvedReference(_)));
    }

    #[test]
    fn model_without_properties_or_enum_fails() {
        let defs = solar_system();
        let err = resolve_definitions_ref("#/definitions/Nothing", Some(&defs)).unwrap_err();
        assert!(matches!(err, ResolveError::UnresolvedReference(r) if r == "#/definitions/Nothing"));
    }

    #[test]
    fn self_reference_fails_instead_of_overflowing() {
        let defs = solar_system();
        let err = resolve_definitions_ref("#/definitions/Node", Some(&defs)).unwrap_err();
        assert!(matches!(err, ResolveError::UnresolvedReference(r) if r == "#/definitions/Node"));
    }

    #[test]
    fn diamond_references_are_walked_twice() {
        let defs = definitions(json!({
            "Pair": {
                "type": "object",
                "properties": {
                    "left": { "$ref": "#/definitions/Leaf" },
                    "right": { "$ref": "#/definitions/Leaf" }
                }
            },
            "Leaf": { "type": "object", "properties": { "id": { "type": "integer" } } }
        }));
        let value = resolve_definitions_ref("#/definitions/Pair", Some(&defs)).unwrap();
        assert_eq!(value.to_json(), json!({ "left": { "id": 1 }, "right": { "id": 1 } }));
    }

    #[test]
    fn resolver_returns_pretty_json_for_objects() {
        let defs = solar_system();
        let json = DefinitionsRefResolver::new("#/definitions/Moon")
            .resolve_reference(Some(&defs), &ResolverContext::default())
            .unwrap();
        assert_eq!(json, "{\n  \"name\": \"Luna\"\n}");
    }

    #[test]
    fn resolver_returns_enum_text_verbatim() {
        let defs = solar_system();
        let text = DefinitionsRefResolver::new("#/definitions/Size")
            .resolve_reference(Some(&defs), &ResolverContext::default())
            .unwrap();
        assert_eq!(text, "SMALL");
    }

    #[test]
    fn enum_holding_json_is_unwrapped_when_embedded() {
        let defs = definitions(json!({
            "Envelope": {
                "type": "object",
                "properties": { "payload": { "$ref": "#/definitions/Payload" } }
            },
            "Payload": { "type": "string", "enum": ["{\"kind\":\"ping\"}"] }
        }));
        let json = DefinitionsRefResolver::new("#/definitions/Envelope")
            .resolve_reference(Some(&defs), &ResolverContext::default())
            .unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value, json!({ "payload": { "kind": "ping" } }));
    }

    #[test]
    fn property_value_of_inline_object() {
        let property = Property::Object(vec![(
            "count".to_string(),
            Property::Primitive(PrimitiveDescriptor {
                type_name: "integer".into(),
                format: Some("int32".into()),
                ..Default::default()
            }),
        )]);
        let value = property_value("wrapper", &property, None).unwrap();
        assert_eq!(value.to_json(), json!({ "count": 1 }));
    }

    #[test]
    fn property_value_with_reference_needs_definitions() {
        let property = Property::Ref("#/definitions/Planet".into());
        assert!(property_value("planet", &property, None).is_err());
    }
}
