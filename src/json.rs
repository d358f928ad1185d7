// Structural JSON comparison and normalization of resolved example JSON.

pub mod comparator;
pub mod key_shape;
pub mod normalizer;

use std::fmt;
use thiserror::Error;

pub use comparator::{map_node, schema_equals, schema_equals_values, ROOT_KEY};
pub use key_shape::KeyShape;
pub use normalizer::{normalize, LINE_SEPARATOR};

/// Which side of a comparison an input belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonSide {
    /// JSON produced from the Swagger definitions
    Expected,
    /// JSON read from a file or payload
    Actual,
}

impl JsonSide {
    fn null_message(&self) -> &'static str {
        match self {
            JsonSide::Expected => "JSON of Swagger definitions must not be null!",
            JsonSide::Actual => "JSON file must not be null!",
        }
    }

    fn parse_message(&self) -> &'static str {
        match self {
            JsonSide::Expected => "Could not parse JSON of Swagger definitions!",
            JsonSide::Actual => "Could not parse JSON of file!",
        }
    }
}

impl fmt::Display for JsonSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JsonSide::Expected => f.write_str("swagger definitions"),
            JsonSide::Actual => f.write_str("file"),
        }
    }
}

#[derive(Debug, Error)]
pub enum JsonError {
    #[error("{}", .0.null_message())]
    NullInput(JsonSide),

    #[error("{}", .side.parse_message())]
    Parse {
        side: JsonSide,
        #[source]
        source: serde_json::Error,
    },

    #[error("Could not parse normalized JSON: {0}")]
    Normalize(#[source] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, JsonError>;
