// src/json/normalizer.rs

use serde_json::Value;

use super::{JsonError, Result};

#[cfg(windows)]
pub const LINE_SEPARATOR: &str = "\r\n";

#[cfg(not(windows))]
pub const LINE_SEPARATOR: &str = "\n";

/// Textual substitutions undoing the double escaping of JSON embedded in a string leaf.
/// Applied in order.
const REPLACEMENTS: [(&str, &str); 6] = [
    ("\\r\\n", LINE_SEPARATOR),
    ("\\n", "\n"),
    ("\\r", "\r"),
    ("\\\"", "\""),
    ("\"{", "{"),
    ("}\"", "}"),
];

/// Unescapes embedded JSON and pretty prints the result with two-space indentation
pub fn normalize(raw_json: &str) -> Result<String> {
    let cleaned = REPLACEMENTS
        .iter()
        .fold(raw_json.to_string(), |json, (from, to)| json.replace(from, to));

    let value: Value = serde_json::from_str(&cleaned).map_err(JsonError::Normalize)?;
    serde_json::to_string_pretty(&value).map_err(JsonError::Normalize)
}
