// src/valuefields/types.rs

use std::fmt;
use std::str::FromStr;

/// Primitive types a Swagger property or parameter can declare
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwaggerType {
    String,
    Number,
    Boolean,
    Integer,
}

impl SwaggerType {
    pub const ALL: [SwaggerType; 4] = [
        SwaggerType::String,
        SwaggerType::Number,
        SwaggerType::Boolean,
        SwaggerType::Integer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SwaggerType::String => "string",
            SwaggerType::Number => "number",
            SwaggerType::Boolean => "boolean",
            SwaggerType::Integer => "integer",
        }
    }
}

impl FromStr for SwaggerType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SwaggerType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("unknown swagger type '{}'", s))
    }
}

impl fmt::Display for SwaggerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Formats refining a primitive type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwaggerFormat {
    Double,
    Float,
    Int32,
    Int64,
    Byte,
    Binary,
    Date,
    DateTime,
    Password,
}

impl SwaggerFormat {
    pub const ALL: [SwaggerFormat; 9] = [
        SwaggerFormat::Double,
        SwaggerFormat::Float,
        SwaggerFormat::Int32,
        SwaggerFormat::Int64,
        SwaggerFormat::Byte,
        SwaggerFormat::Binary,
        SwaggerFormat::Date,
        SwaggerFormat::DateTime,
        SwaggerFormat::Password,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SwaggerFormat::Double => "double",
            SwaggerFormat::Float => "float",
            SwaggerFormat::Int32 => "int32",
            SwaggerFormat::Int64 => "int64",
            SwaggerFormat::Byte => "byte",
            SwaggerFormat::Binary => "binary",
            SwaggerFormat::Date => "date",
            SwaggerFormat::DateTime => "date-time",
            SwaggerFormat::Password => "password",
        }
    }
}

impl FromStr for SwaggerFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SwaggerFormat::ALL
            .iter()
            .copied()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| format!("unknown swagger format '{}'", s))
    }
}

impl fmt::Display for SwaggerFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Vendor extension keys understood on operations, parameters and responses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwaggerField {
    /// Simple example value
    XExample,
    /// Path of a JSON file holding the example, relative to the Swagger file
    XRef,
    /// Marks an operation or parameter as ignored
    XIgnore,
}

impl SwaggerField {
    pub fn field(&self) -> &'static str {
        match self {
            SwaggerField::XExample => "x-example",
            SwaggerField::XRef => "x-ref",
            SwaggerField::XIgnore => "x-ignore",
        }
    }
}

impl fmt::Display for SwaggerField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field())
    }
}
