pub mod builder;
pub mod cli;
pub mod contract;
pub mod converter;
pub mod json;
pub mod parser;
pub mod reference;
pub mod utils;
pub mod valuefields;

// Re-export frequently used items for easier access
pub use cli::args::OutputFormat;
pub use contract::Contract;
pub use converter::{ContractConverter, SwaggerContractConverter};
pub use json::{normalize, schema_equals};
pub use parser::{parse_swagger_file, SwaggerDocument};

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Parser error: {0}")]
    ParserError(#[from] parser::ParserError),

    #[error("Builder error: {0}")]
    BuilderError(#[from] builder::BuilderError),

    #[error("JSON error: {0}")]
    JsonError(#[from] json::JsonError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to write YAML contract: {0}")]
    YamlOutput(#[from] serde_yaml::Error),

    #[error("Failed to write JSON contract: {0}")]
    JsonOutput(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;

/// Convert a Swagger specification file into one contract file per operation
///
/// Ignored operations produce no file. Returns the written paths in priority order.
pub fn convert_swagger_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input_file: P,
    output_dir: Q,
    format: OutputFormat,
) -> Result<Vec<PathBuf>> {
    let input_file = input_file.as_ref();
    let output_dir = output_dir.as_ref();

    let contracts = SwaggerContractConverter::new().convert_from(input_file)?;

    let mut written = Vec::with_capacity(contracts.len());
    for contract in &contracts {
        let content = match format {
            OutputFormat::Yaml => serde_yaml::to_string(contract)?,
            OutputFormat::Json => serde_json::to_string_pretty(contract)?,
        };

        let file_name = utils::contract_file_name(&contract.name, format.extension());
        let path = utils::write_contract_file(output_dir, &file_name, &content)?;

        debug!(contract = %contract.name, path = %path.display(), "wrote contract");
        written.push(path);
    }

    info!(count = written.len(), output_dir = %output_dir.display(), "contracts written");
    Ok(written)
}

/// Compare the key structure of two JSON files
pub fn compare_json_files<P: AsRef<Path>, Q: AsRef<Path>>(expected: P, actual: Q) -> Result<bool> {
    let expected = fs::read_to_string(expected)?;
    let actual = fs::read_to_string(actual)?;

    Ok(json::schema_equals(Some(expected.as_str()), Some(actual.as_str()))?)
}
