// src/valuefields/default_values.rs

use serde_json::{Number, Value};

use super::types::{SwaggerFormat, SwaggerType};

/// The default value for doubles
pub const DEFAULT_DOUBLE: f64 = 1.1;

/// The default value for floats. Shares the double literal.
pub const DEFAULT_FLOAT: f64 = DEFAULT_DOUBLE;

/// The default value for longs (int64)
pub const DEFAULT_LONG: i64 = 1;

/// The default value for integers and anything undefined
pub const DEFAULT_INT: i32 = 1;

/// The default value for booleans
pub const DEFAULT_BOOLEAN: bool = true;

/// A synthesized or declared example value for a single field
///
/// The numeric variants keep the precision the value was produced with, so a
/// float bound stays an `f32` until it is serialized.
#[derive(Debug, Clone, PartialEq)]
pub enum ExampleValue {
    String(String),
    Double(f64),
    Float(f32),
    Long(i64),
    Int(i32),
    Boolean(bool),
    /// A literal copied from the document (`example`, `default`, `enum`, `x-example`)
    Literal(Value),
}

impl ExampleValue {
    pub fn to_json(&self) -> Value {
        match self {
            ExampleValue::String(s) => Value::String(s.clone()),
            ExampleValue::Double(d) => Value::from(*d),
            ExampleValue::Float(f) => Value::from(f64::from(*f)),
            ExampleValue::Long(l) => Value::from(*l),
            ExampleValue::Int(i) => Value::from(*i),
            ExampleValue::Boolean(b) => Value::Bool(*b),
            ExampleValue::Literal(v) => v.clone(),
        }
    }

    /// Renders the value the way it appears inside a URL or a header
    pub fn to_text(&self) -> String {
        match self {
            ExampleValue::String(s) => s.clone(),
            ExampleValue::Literal(Value::String(s)) => s.clone(),
            other => other.to_json().to_string(),
        }
    }
}

impl From<ExampleValue> for Value {
    fn from(value: ExampleValue) -> Self {
        value.to_json()
    }
}

/// Creates a default value for a property or parameter.
///
/// `minimum` wins over `maximum`; without bounds each type falls back to its
/// constant. Unknown types, and integers with an unknown format, yield
/// [`DEFAULT_INT`].
pub fn create_default_value(
    type_name: &str,
    format: Option<&str>,
    name: Option<&str>,
    minimum: Option<&Number>,
    maximum: Option<&Number>,
) -> ExampleValue {
    let swagger_type = type_name.parse::<SwaggerType>().ok();
    // None: no format declared. Some(None): a format we don't know.
    let swagger_format = format.map(|f| f.parse::<SwaggerFormat>().ok());
    let bound = minimum.or(maximum);

    match (swagger_type, swagger_format) {
        (Some(SwaggerType::String), _) => match name {
            Some(name) if !name.is_empty() => ExampleValue::String(name.to_string()),
            _ => ExampleValue::String(SwaggerType::String.as_str().to_string()),
        },
        (Some(SwaggerType::Number), None | Some(Some(SwaggerFormat::Double))) => {
            ExampleValue::Double(bound.map(as_f64).unwrap_or(DEFAULT_DOUBLE))
        }
        (Some(SwaggerType::Number), Some(Some(SwaggerFormat::Float))) => match bound {
            Some(n) => ExampleValue::Float(as_f64(n) as f32),
            None => ExampleValue::Double(DEFAULT_FLOAT),
        },
        (Some(SwaggerType::Integer), Some(Some(SwaggerFormat::Int64))) => {
            ExampleValue::Long(bound.map(as_i64).unwrap_or(DEFAULT_LONG))
        }
        (Some(SwaggerType::Integer), None | Some(Some(SwaggerFormat::Int32))) => {
            ExampleValue::Int(bound.map(|n| as_i64(n) as i32).unwrap_or(DEFAULT_INT))
        }
        (Some(SwaggerType::Boolean), _) => ExampleValue::Boolean(DEFAULT_BOOLEAN),
        _ => ExampleValue::Int(DEFAULT_INT),
    }
}

fn as_f64(n: &Number) -> f64 {
    n.as_f64().unwrap_or(DEFAULT_DOUBLE)
}

// Fractional bounds are truncated towards zero.
fn as_i64(n: &Number) -> i64 {
    n.as_i64()
        .or_else(|| n.as_f64().map(|f| f as i64))
        .unwrap_or(DEFAULT_LONG)
}
