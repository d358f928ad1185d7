// src/builder/contract_name.rs

use once_cell::sync::Lazy;
use regex::Regex;

use super::{BuilderError, Result};
use crate::parser::HttpMethod;

const PATH_SEP: &str = "_";

/// The path without its leading slash and without the last closing curly brace
static PATH_EXTRACT: Lazy<Regex> = Lazy::new(|| Regex::new(r"([^/].*[^}])").expect("path extraction pattern"));

/// Curly braces and slashes, each run collapsing into a single separator
static PATH_CLEANUP: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\}/\{|/\{|\}/|\}|/)").expect("path cleanup pattern"));

/// Creates the contract name `<priority>_<path>_<METHOD>[_<operationId>]`
pub fn create_contract_name(
    priority: u32,
    path: &str,
    method: HttpMethod,
    operation_id: Option<&str>,
) -> Result<String> {
    let extracted = PATH_EXTRACT
        .captures(path)
        .and_then(|captures| captures.get(1))
        .ok_or_else(|| BuilderError::PathExtraction(path.to_string()))?;

    let cleaned = PATH_CLEANUP.replace_all(extracted.as_str(), PATH_SEP);

    let mut name = format!("{}{}{}{}{}", priority, PATH_SEP, cleaned, PATH_SEP, method);
    if let Some(operation_id) = operation_id.filter(|id| !id.is_empty()) {
        name.push_str(PATH_SEP);
        name.push_str(operation_id);
    }
    Ok(name)
}
