// Converts whole Swagger documents into contracts.

use std::path::Path;

use tracing::{debug, info};

use crate::builder::{self, create_contract};
use crate::contract::Contract;
use crate::parser::{self, SwaggerDocument};
use crate::reference::ResolverContext;
use crate::Result;

/// Base trait for converters between a document format and contracts
pub trait ContractConverter {
    type Document;

    /// Checks if the given file can be converted
    fn is_accepted(&self, file: &Path) -> bool;

    /// Converts a file into contracts, dropping ignored ones
    fn convert_from(&self, file: &Path) -> Result<Vec<Contract>>;

    /// Converts contracts back into a document
    fn convert_to(&self, contracts: &[Contract]) -> Self::Document;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SwaggerContractConverter;

impl SwaggerContractConverter {
    pub fn new() -> Self {
        SwaggerContractConverter
    }

    /// Converts every operation of a parsed document, ignored ones included.
    ///
    /// Priorities start at 1 and follow path order, then operation order.
    /// The first failing operation aborts the conversion.
    pub fn convert_document(
        &self,
        document: &SwaggerDocument,
        context: &ResolverContext,
    ) -> builder::Result<Vec<Contract>> {
        let mut contracts = Vec::new();
        let mut priority = 1;

        for path_item in &document.paths {
            for operation in &path_item.operations {
                contracts.push(create_contract(document, &path_item.path, operation, priority, context)?);
                priority += 1;
            }
        }

        Ok(contracts)
    }
}

impl ContractConverter for SwaggerContractConverter {
    type Document = SwaggerDocument;

    fn is_accepted(&self, file: &Path) -> bool {
        match parser::parse_swagger_file(file) {
            Ok(_) => true,
            Err(err) => {
                debug!(file = %file.display(), error = %err, "not a swagger file");
                false
            }
        }
    }

    fn convert_from(&self, file: &Path) -> Result<Vec<Contract>> {
        let document = parser::parse_swagger_file(file)?;
        let context = ResolverContext::for_file(file);

        let contracts: Vec<Contract> = self
            .convert_document(&document, &context)?
            .into_iter()
            .filter(|contract| !contract.ignored)
            .collect();

        info!(file = %file.display(), contracts = contracts.len(), "converted swagger file");
        Ok(contracts)
    }

    /// Not supported, always the empty document
    fn convert_to(&self, _contracts: &[Contract]) -> SwaggerDocument {
        SwaggerDocument::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_swagger_value;
    use serde_json::json;

    #[test]
    fn priorities_follow_traversal_order_including_ignored() {
        let doc = parse_swagger_value(&json!({
            "swagger": "2.0",
            "paths": {
                "/beta": {
                    "post": { "responses": { "200": { "description": "ok" } } },
                    "get": { "x-ignore": true, "responses": { "200": { "description": "ok" } } }
                },
                "/alpha": {
                    "get": { "responses": { "204": { "description": "ok" } } }
                }
            }
        }))
        .unwrap();

        let contracts = SwaggerContractConverter::new()
            .convert_document(&doc, &ResolverContext::default())
            .unwrap();

        let names: Vec<&str> = contracts.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["1_beta_GET", "2_beta_POST", "3_alpha_GET"]);
        assert!(contracts[0].ignored);
        assert_eq!(contracts[2].priority, 3);
    }

    #[test]
    fn broken_reference_aborts_conversion() {
        let doc = parse_swagger_value(&json!({
            "swagger": "2.0",
            "paths": {
                "/alpha": {
                    "get": { "responses": { "200": { "description": "ok", "schema": { "$ref": "#/definitions/Gone" } } } }
                }
            },
            "definitions": {}
        }))
        .unwrap();

        let result = SwaggerContractConverter::new().convert_document(&doc, &ResolverContext::default());
        assert!(matches!(
            result,
            Err(builder::BuilderError::Resolve(crate::reference::ResolveError::UnresolvedReference(r))) if r == "#/definitions/Gone"
        ));
    }

    #[test]
    fn convert_to_is_empty() {
        let document = SwaggerContractConverter::new().convert_to(&[]);
        assert_eq!(document, SwaggerDocument::default());
    }
}
