// Builds contracts from Swagger operations: names, parameter values, bodies.

pub mod contract_builder;
pub mod contract_name;
pub mod values;

use thiserror::Error;

use crate::json::JsonError;
use crate::reference::ResolveError;

pub use contract_builder::create_contract;
pub use contract_name::create_contract_name;
pub use values::{body_value, parameter_value, path_parameter_text, response_header_value};

#[derive(Debug, Error)]
pub enum BuilderError {
    #[error("Could not extract path of method from Swagger file: {0}")]
    PathExtraction(String),

    #[error("Invalid response status code: {0}")]
    InvalidStatus(String),

    #[error("Operation {0} declares no response")]
    MissingResponse(String),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Json(#[from] JsonError),

    #[error("Could not serialize example: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BuilderError>;
