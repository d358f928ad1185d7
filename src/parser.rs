// The document source: reads a Swagger v2 file into the typed model the converter works on.

pub mod model;
pub mod swagger;

pub use model::{
    ApiResponse,
    HttpMethod,
    Operation,
    Parameter,
    ParameterLocation,
    PathItem,
    PrimitiveDescriptor,
    Property,
    SchemaDefinitionSet,
    SchemaModel,
    SwaggerDocument,
    VendorExtensions,
};

pub use swagger::{
    parse_swagger_file,
    parse_swagger_string,
    parse_swagger_value,
    parse_swagger_yaml,
    ParserError,
    Result,
};
