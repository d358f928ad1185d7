// Resolution of `$ref` definitions and `x-ref` JSON files into example JSON.

pub mod definitions;
pub mod json_file;
pub mod value;

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::json::JsonError;
use crate::parser::{Property, SchemaDefinitionSet, VendorExtensions};

pub use definitions::{property_value, resolve_definitions_ref, DefinitionsRefResolver};
pub use json_file::JsonFileRefResolver;
pub use value::ResolvedValue;

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("Could not resolve reference '{0}'")]
    UnresolvedReference(String),

    #[error(transparent)]
    Json(#[from] JsonError),

    #[error("Could not serialize resolved value: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Could not read JSON file '{}': {source}", .path.display())]
    ExternalFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON file '{}' does not match the Swagger definition '{reference}'", .path.display())]
    SchemaMismatch { path: PathBuf, reference: String },
}

pub type Result<T> = std::result::Result<T, ResolveError>;

/// Where relative `x-ref` files are looked up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverContext {
    source_folder: PathBuf,
}

impl ResolverContext {
    pub fn new<P: Into<PathBuf>>(source_folder: P) -> Self {
        ResolverContext {
            source_folder: source_folder.into(),
        }
    }

    /// Context for references made from inside `swagger_file`
    pub fn for_file<P: AsRef<Path>>(swagger_file: P) -> Self {
        let folder = swagger_file
            .as_ref()
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        ResolverContext::new(folder)
    }

    pub fn source_folder(&self) -> &Path {
        &self.source_folder
    }

    pub fn resolve_path(&self, file: &str) -> PathBuf {
        let path = Path::new(file);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.source_folder.join(path)
        }
    }
}

impl Default for ResolverContext {
    fn default() -> Self {
        ResolverContext::new(".")
    }
}

/// Turns a reference into example JSON text
pub trait ReferenceResolver {
    fn resolve_reference(
        &self,
        definitions: Option<&SchemaDefinitionSet>,
        context: &ResolverContext,
    ) -> Result<String>;
}

/// Pick the resolver for a body: an `x-ref` file wins over the schema's `$ref`
pub fn create_resolver(
    extensions: &VendorExtensions,
    schema: Option<&Property>,
) -> Option<Box<dyn ReferenceResolver>> {
    let schema_reference = schema.and_then(|s| match s {
        Property::Ref(reference) => Some(reference.clone()),
        _ => None,
    });

    match (extensions.reference(), schema_reference) {
        (Some(file), schema_reference) => Some(Box::new(JsonFileRefResolver::new(file, schema_reference))),
        (None, Some(reference)) => Some(Box::new(DefinitionsRefResolver::new(reference))),
        (None, None) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_for_file_uses_parent_folder() {
        let context = ResolverContext::for_file("specs/petstore.yml");
        assert_eq!(context.source_folder(), Path::new("specs"));
        assert_eq!(context.resolve_path("pet.json"), PathBuf::from("specs/pet.json"));
    }

    #[test]
    fn context_for_bare_file_uses_current_folder() {
        let context = ResolverContext::for_file("petstore.yml");
        assert_eq!(context.source_folder(), Path::new("."));
    }

    #[test]
    fn no_resolver_without_reference() {
        assert!(create_resolver(&VendorExtensions::default(), None).is_none());
    }
}
