// src/reference/json_file.rs

use std::fs;

use serde_json::Value;
use tracing::debug;

use super::definitions::DefinitionsRefResolver;
use super::{ReferenceResolver, ResolveError, ResolverContext, Result};
use crate::json::{schema_equals, JsonError, JsonSide};
use crate::parser::SchemaDefinitionSet;

/// Resolves an `x-ref` example file, relative to the Swagger file's folder.
///
/// When the body also declares a `$ref` schema, the file must have the same
/// shape as the JSON synthesized from that definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFileRefResolver {
    file: String,
    schema_reference: Option<String>,
}

impl JsonFileRefResolver {
    pub fn new<S: Into<String>>(file: S, schema_reference: Option<String>) -> Self {
        JsonFileRefResolver {
            file: file.into(),
            schema_reference,
        }
    }
}

impl ReferenceResolver for JsonFileRefResolver {
    fn resolve_reference(
        &self,
        definitions: Option<&SchemaDefinitionSet>,
        context: &ResolverContext,
    ) -> Result<String> {
        let path = context.resolve_path(&self.file);
        debug!(
            file = %pathdiff::diff_paths(&path, context.source_folder()).unwrap_or_else(|| path.clone()).display(),
            "reading example json file"
        );

        let content = fs::read_to_string(&path).map_err(|source| ResolveError::ExternalFile {
            path: path.clone(),
            source,
        })?;

        if let Some(reference) = &self.schema_reference {
            let expected = DefinitionsRefResolver::new(reference.as_str()).resolve_reference(definitions, context)?;
            if !schema_equals(Some(expected.as_str()), Some(content.as_str()))? {
                return Err(ResolveError::SchemaMismatch {
                    path,
                    reference: reference.clone(),
                });
            }
        }

        let value: Value = serde_json::from_str(&content).map_err(|source| JsonError::Parse {
            side: JsonSide::Actual,
            source,
        })?;
        Ok(serde_json::to_string_pretty(&value)?)
    }
}
