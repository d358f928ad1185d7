use serde_json::{Map, Value};

use crate::valuefields::ExampleValue;

/// The example value tree produced for a schema
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedValue {
    Scalar(ExampleValue),
    List(Vec<ResolvedValue>),
    /// Fields in declaration order
    Object(Vec<(String, ResolvedValue)>),
}

impl ResolvedValue {
    pub fn to_json(&self) -> Value {
        match self {
            ResolvedValue::Scalar(value) => value.to_json(),
            ResolvedValue::List(items) => Value::Array(items.iter().map(ResolvedValue::to_json).collect()),
            ResolvedValue::Object(fields) => {
                let map: Map<String, Value> = fields
                    .iter()
                    .map(|(name, value)| (name.clone(), value.to_json()))
                    .collect();
                Value::Object(map)
            }
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ResolvedValue::Scalar(ExampleValue::String(s)) => Some(s),
            _ => None,
        }
    }
}

impl From<ExampleValue> for ResolvedValue {
    fn from(value: ExampleValue) -> Self {
        ResolvedValue::Scalar(value)
    }
}
