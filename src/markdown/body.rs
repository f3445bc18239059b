use crate::markdown::resolver::resolve_schema_type;
use crate::markdown::{paragraphs, resolve_node};
use crate::traverser::OpenApiTraverser;
use crate::types::{Callback, Header, MediaType, RequestBody, Response, SpecNode};
use serde_json::Value;

/// One bullet per media type, with the schema type nested below it.
pub(crate) fn content_lines(content: &[(&str, MediaType<'_>)]) -> Vec<String> {
    let mut lines = Vec::new();
    for (media_type, definition) in content {
        lines.push(format!("- `{}`", media_type));
        if let Some(schema) = definition.schema() {
            lines.push(format!("  - Type: {}", resolve_schema_type(schema)));
        }
    }
    lines
}

/// One bullet per header, with its description when present.
pub(crate) fn header_lines(traverser: &OpenApiTraverser, headers: &[(&str, Header<'_>)]) -> Vec<String> {
    headers
        .iter()
        .map(|(name, header)| {
            let header = Header::new(resolve_node(traverser, header.node()));
            match header.description() {
                Some(description) => format!("- `{}`: {}", name, description),
                None => format!("- `{}`", name),
            }
        })
        .collect()
}

/// `label` followed by its list, or nothing when the list is empty.
pub(crate) fn labelled_list(label: &str, lines: Vec<String>) -> String {
    if lines.is_empty() {
        return String::new();
    }
    format!("{}\n{}", label, lines.join("\n"))
}

/// The request body block of an endpoint.
///
/// `**Required**: Yes` is printed only for required bodies; an optional body
/// prints no required line at all.
pub(crate) fn request_body(traverser: &OpenApiTraverser, body: &Value) -> String {
    let body = RequestBody::new(resolve_node(traverser, body));
    let mut parts = vec![String::from("#### Request Body")];
    parts.extend(request_body_fields(&body));
    paragraphs(parts)
}

/// Description, required flag and content types of a request body.
pub(crate) fn request_body_fields(body: &RequestBody<'_>) -> Vec<String> {
    let mut parts = Vec::new();
    if let Some(description) = body.description() {
        parts.push(description.to_string());
    }
    if body.required() {
        parts.push(String::from("**Required**: Yes"));
    }
    parts.push(labelled_list("**Content Types**:", content_lines(&body.content())));
    parts
}

/// Headers and content types of a response.
pub(crate) fn response_fields(traverser: &OpenApiTraverser, response: &Response<'_>) -> Vec<String> {
    vec![
        labelled_list("Headers:", header_lines(traverser, &response.headers())),
        labelled_list("Content Types:", content_lines(&response.content())),
    ]
}

/// The responses block of an endpoint, one entry per status code in document order.
///
/// An absent `responses` map yields nothing; an empty one yields the bare header.
pub(crate) fn responses(
    traverser: &OpenApiTraverser,
    responses: Option<&[(&str, &Value)]>,
) -> String {
    let responses = match responses {
        Some(responses) => responses,
        None => return String::new(),
    };

    let mut parts = vec![String::from("#### Responses")];
    for (status, response) in responses {
        let response = Response::new(resolve_node(traverser, response));
        parts.push(format!(
            "**{}**: {}",
            status,
            response.description().unwrap_or_default()
        ));
        parts.extend(response_fields(traverser, &response));
    }
    paragraphs(parts)
}

/// The callbacks block of an endpoint; a present but empty map yields the bare header.
pub(crate) fn callbacks(callbacks: Option<&[(&str, Callback<'_>)]>) -> String {
    let callbacks = match callbacks {
        Some(callbacks) => callbacks,
        None => return String::new(),
    };

    let mut parts = vec![String::from("#### Callbacks")];
    for (name, callback) in callbacks {
        parts.push(format!("**{}**", name));
        let mut lines = Vec::new();
        for (expression, path_item) in callback.expressions() {
            lines.push(format!("- Expression: `{}`", expression));
            for (method, operation) in path_item.operations() {
                match operation.summary() {
                    Some(summary) => lines.push(format!("  - {}: {}", method.to_uppercase(), summary)),
                    None => lines.push(format!("  - {}", method.to_uppercase())),
                }
            }
        }
        parts.push(lines.join("\n"));
    }
    paragraphs(parts)
}
