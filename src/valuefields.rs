// Static registries of Swagger types, formats and vendor fields, plus the
// synthesizer that turns them into example values.

pub mod types;
pub mod default_values;

pub use types::{SwaggerField, SwaggerFormat, SwaggerType};
pub use default_values::{
    create_default_value,
    ExampleValue,
    DEFAULT_BOOLEAN,
    DEFAULT_DOUBLE,
    DEFAULT_FLOAT,
    DEFAULT_INT,
    DEFAULT_LONG,
};
