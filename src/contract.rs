// The contract model handed to the sink: one request/response pair per Swagger operation.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Header name used for content types
pub const CONTENT_TYPE: &str = "Content-Type";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contract {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Operation tags joined with `_`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    pub priority: u32,

    #[serde(default, skip_serializing_if = "is_false")]
    pub ignored: bool,

    pub request: Request,
    pub response: Response,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    pub method: String,
    pub url_path: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub query_parameters: Vec<QueryParameter>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub headers: Vec<Header>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub status: u16,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub headers: Vec<Header>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Header {
    pub name: String,
    pub value: Value,
}

impl Header {
    pub fn new<S: Into<String>, V: Into<Value>>(name: S, value: V) -> Self {
        Header {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn content_type<S: Into<String>>(content_type: S) -> Self {
        let value: String = content_type.into();
        Header::new(CONTENT_TYPE, value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryParameter {
    pub name: String,
    pub value: Value,
}

impl Request {
    pub fn header(&self, name: &str) -> Option<&Value> {
        find_header(&self.headers, name)
    }
}

impl Response {
    pub fn header(&self, name: &str) -> Option<&Value> {
        find_header(&self.headers, name)
    }
}

fn find_header<'a>(headers: &'a [Header], name: &str) -> Option<&'a Value> {
    headers
        .iter()
        .find(|header| header.name.eq_ignore_ascii_case(name))
        .map(|header| &header.value)
}

fn is_false(value: &bool) -> bool {
    !*value
}
