// src/json/comparator.rs

use std::collections::BTreeSet;

use serde_json::Value;
use tracing::debug;

use super::key_shape::KeyShape;
use super::{JsonError, JsonSide, Result};

/// Name of the synthetic key every projection is rooted at
pub const ROOT_KEY: &str = "root";

/// Compares two JSON documents by schema, ignoring every scalar value.
///
/// `expected` is usually the JSON synthesized from the Swagger definitions and
/// `actual` the JSON of a file or payload. Absent or unparsable inputs are
/// reported with the side they belong to.
pub fn schema_equals(expected: Option<&str>, actual: Option<&str>) -> Result<bool> {
    let expected = expected.ok_or(JsonError::NullInput(JsonSide::Expected))?;
    let actual = actual.ok_or(JsonError::NullInput(JsonSide::Actual))?;

    let expected_node: Value = serde_json::from_str(expected).map_err(|source| JsonError::Parse {
        side: JsonSide::Expected,
        source,
    })?;
    let actual_node: Value = serde_json::from_str(actual).map_err(|source| JsonError::Parse {
        side: JsonSide::Actual,
        source,
    })?;

    Ok(schema_equals_values(&expected_node, &actual_node))
}

/// Compares two parsed JSON documents by schema
pub fn schema_equals_values(expected: &Value, actual: &Value) -> bool {
    let expected_shapes = map_node(ROOT_KEY, expected);
    let actual_shapes = map_node(ROOT_KEY, actual);

    let equal = expected_shapes.is_subset(&actual_shapes) && actual_shapes.is_subset(&expected_shapes);
    debug!(
        expected = expected_shapes.len(),
        actual = actual_shapes.len(),
        equal,
        "compared json schemas"
    );
    equal
}

/// Projects a JSON node into value-erased shapes, all keyed by `name`.
///
/// Object fields contribute one shape each: a leaf for scalar values, the
/// recursive projection (keyed by the field name) otherwise. Nodes without
/// fields contribute the projection of every non-scalar element under the same
/// `name`; scalar elements contribute nothing.
pub fn map_node(name: &str, node: &Value) -> BTreeSet<KeyShape> {
    let mut elements = BTreeSet::new();

    match node {
        Value::Object(fields) if !fields.is_empty() => {
            for (key, value) in fields {
                if is_scalar(value) {
                    let leaf = [KeyShape::leaf(key.as_str())].into_iter().collect();
                    elements.insert(KeyShape::node(name, leaf));
                } else {
                    elements.insert(KeyShape::node(name, map_node(key, value)));
                }
            }
        }
        Value::Array(items) => {
            for item in items.iter().filter(|item| !is_scalar(item)) {
                elements.insert(KeyShape::node(name, map_node(name, item)));
            }
        }
        _ => {}
    }

    elements
}

fn is_scalar(value: &Value) -> bool {
    !matches!(value, Value::Object(_) | Value::Array(_))
}
