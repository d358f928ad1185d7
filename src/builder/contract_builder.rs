// src/builder/contract_builder.rs

use tracing::debug;

use super::contract_name::create_contract_name;
use super::values::{body_value, parameter_value, path_parameter_text, response_header_value};
use super::{BuilderError, Result};
use crate::contract::{Contract, Header, QueryParameter, Request, Response};
use crate::parser::{Operation, ParameterLocation, SwaggerDocument};
use crate::reference::ResolverContext;

const TAG_SEP: &str = "_";

/// Maps one Swagger operation onto a contract
pub fn create_contract(
    document: &SwaggerDocument,
    path: &str,
    operation: &Operation,
    priority: u32,
    context: &ResolverContext,
) -> Result<Contract> {
    let name = create_contract_name(priority, path, operation.method, operation.operation_id.as_deref())?;
    debug!(contract = %name, "building contract");

    let label = if operation.tags.is_empty() {
        None
    } else {
        Some(operation.tags.join(TAG_SEP))
    };

    Ok(Contract {
        request: create_request(document, path, operation, context)?,
        response: create_response(document, operation, context)?,
        name,
        description: operation.description.clone().or_else(|| operation.summary.clone()),
        label,
        priority,
        ignored: operation.extensions.is_ignored(),
    })
}

fn create_request(
    document: &SwaggerDocument,
    path: &str,
    operation: &Operation,
    context: &ResolverContext,
) -> Result<Request> {
    let mut url_path = format!("{}{}", document.base_path.as_deref().unwrap_or(""), path);
    let mut query_parameters = Vec::new();
    let mut headers = Vec::new();
    let mut body = None;

    for parameter in &operation.parameters {
        match parameter.location {
            ParameterLocation::Path => {
                url_path = url_path.replace(&format!("{{{}}}", parameter.name), &path_parameter_text(parameter));
            }
            ParameterLocation::Query => {
                if let Some(value) = parameter_value(parameter) {
                    query_parameters.push(QueryParameter {
                        name: parameter.name.clone(),
                        value: value.to_json(),
                    });
                }
            }
            ParameterLocation::Header => {
                if let Some(value) = parameter_value(parameter) {
                    if !parameter.name.is_empty() {
                        headers.push(Header::new(parameter.name.as_str(), value.to_json()));
                    }
                }
            }
            ParameterLocation::Body => {
                if parameter.extensions.is_ignored() {
                    continue;
                }
                body = body_value(
                    Some(parameter.name.as_str()),
                    &parameter.extensions,
                    parameter.property.as_ref(),
                    &[],
                    document.definitions.as_ref(),
                    context,
                )?;
            }
            // Form data has no contract counterpart
            ParameterLocation::FormData => {}
        }
    }

    for content_type in &operation.consumes {
        let value = if content_type == "*/*" { "" } else { content_type.as_str() };
        headers.push(Header::content_type(value));
    }

    Ok(Request {
        method: operation.method.to_string(),
        url_path,
        query_parameters,
        headers,
        body,
    })
}

fn create_response(document: &SwaggerDocument, operation: &Operation, context: &ResolverContext) -> Result<Response> {
    let api_response = match operation.responses.first() {
        Some(response) => response,
        None => return Err(BuilderError::MissingResponse(operation.method.to_string())),
    };

    let status = parse_status(&api_response.status_code)?;

    let mut headers = Vec::new();
    for (name, property) in &api_response.headers {
        let value = response_header_value(name, property, document.definitions.as_ref())?;
        headers.push(Header::new(name.as_str(), value));
    }
    for content_type in &operation.produces {
        headers.push(Header::content_type(content_type.as_str()));
    }

    let body = body_value(
        None,
        &api_response.extensions,
        api_response.schema.as_ref(),
        &api_response.examples,
        document.definitions.as_ref(),
        context,
    )?;

    Ok(Response { status, headers, body })
}

/// `default` responses are treated as 200
fn parse_status(status_code: &str) -> Result<u16> {
    if status_code == "default" {
        return Ok(200);
    }
    status_code
        .parse::<u16>()
        .map_err(|_| BuilderError::InvalidStatus(status_code.to_string()))
}
