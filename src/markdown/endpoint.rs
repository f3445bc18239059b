use crate::markdown::body::{callbacks, request_body, responses};
use crate::markdown::parameters::{merge_parameters, parameters_table};
use crate::markdown::security::endpoint_security;
use crate::markdown::{SECTION_SEPARATOR, paragraphs, resolve_node};
use crate::traverser::OpenApiTraverser;
use crate::types::{Operation, PathItem};
use crate::{PATHS_FIELD, WEBHOOKS_FIELD};
use serde_json::Value;

const DEPRECATION_WARNING: &str = "> **Deprecated**: This endpoint is deprecated.";

/// Renders one operation as a self-contained block ending in one blank line.
///
/// `path` is empty for webhooks, in which case the method/path line is left out.
/// `path_parameters` are the parameters declared on the enclosing path item.
pub(crate) fn render_endpoint(
    traverser: &OpenApiTraverser,
    path: &str,
    method: &str,
    operation: &Operation<'_>,
    path_parameters: &[&Value],
) -> String {
    let heading = match operation.summary() {
        Some(summary) => summary.to_string(),
        None if path.is_empty() => method.to_string(),
        None => format!("{} {}", method, path),
    };

    let mut parts = vec![format!("### {}", heading)];
    if !path.is_empty() {
        parts.push(format!("**{}** `{}`", method, path));
    }

    let tags = operation.tags();
    if !tags.is_empty() {
        parts.push(format!("**Tags**: {}", tags.join(", ")));
    }
    if let Some(description) = operation.description() {
        parts.push(description.to_string());
    }
    if let Some(operation_id) = operation.operation_id() {
        parts.push(format!("**Operation ID**: `{}`", operation_id));
    }
    if operation.deprecated() {
        parts.push(String::from(DEPRECATION_WARNING));
    }
    if let Some(requirements) = operation.security() {
        parts.push(endpoint_security(&requirements));
    }

    let parameters = merge_parameters(traverser, path_parameters, &operation.parameters());
    parts.push(parameters_table(&parameters));

    if let Some(body) = operation.request_body() {
        parts.push(request_body(traverser, body));
    }
    parts.push(responses(traverser, operation.responses().as_deref()));
    parts.push(callbacks(operation.callbacks().as_deref()));

    let mut block = paragraphs(parts);
    block.push_str(SECTION_SEPARATOR);
    block
}

/// All operations of a path item, in document order.
fn render_path_item(traverser: &OpenApiTraverser, path: &str, path_item: &Value) -> String {
    let path_item = PathItem::new(resolve_node(traverser, path_item));
    let path_parameters = path_item.parameters();
    path_item
        .operations()
        .iter()
        .map(|(method, operation)| {
            render_endpoint(
                traverser,
                path,
                &method.to_uppercase(),
                operation,
                &path_parameters,
            )
        })
        .collect()
}

/// Drops the blank line that terminates the last block of a section.
fn strip_trailing_separator(mut section: String) -> String {
    if section.ends_with(SECTION_SEPARATOR) {
        section.truncate(section.len() - SECTION_SEPARATOR.len());
    }
    section
}

/// The `## Endpoints` section.
///
/// Absent `paths` yields nothing; a present but empty `paths` yields the bare header.
pub(crate) fn paths(traverser: &OpenApiTraverser) -> String {
    let paths = match traverser.specification().get(PATHS_FIELD) {
        Some(paths) => paths,
        None => return String::new(),
    };

    let mut section = String::from("## Endpoints");
    section.push_str(SECTION_SEPARATOR);
    for (path, path_item) in paths.as_object().into_iter().flatten() {
        section.push_str(&render_path_item(traverser, path, path_item));
    }
    strip_trailing_separator(section)
}

/// The `## Webhooks` section; webhook operations are rendered without a path.
pub(crate) fn webhooks(traverser: &OpenApiTraverser) -> String {
    let webhooks = match traverser.specification().get(WEBHOOKS_FIELD) {
        Some(webhooks) => webhooks,
        None => return String::new(),
    };

    let mut section = String::from("## Webhooks");
    section.push_str(SECTION_SEPARATOR);
    for (name, path_item) in webhooks.as_object().into_iter().flatten() {
        section.push_str(&format!("### {}", name));
        section.push_str(SECTION_SEPARATOR);
        section.push_str(&render_path_item(traverser, "", path_item));
    }
    strip_trailing_separator(section)
}
