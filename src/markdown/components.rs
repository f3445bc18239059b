use crate::markdown::body::{request_body_fields, response_fields};
use crate::markdown::resolver::resolve_type;
use crate::markdown::{paragraphs, resolve_node};
use crate::traverser::OpenApiTraverser;
use crate::types::{
    Components, Example, Header, Link, Parameter, RequestBody, Response, SecurityScheme,
};
use crate::{COMPONENTS_FIELD, REQUIRED_FIELD, SCHEMA_FIELD, TYPE_FIELD};
use serde_json::Value;

type NamedEntries<'a> = Vec<(&'a str, &'a Value)>;

fn pretty_json(value: &Value) -> String {
    let pretty = serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string());
    format!("```json\n{}\n```", pretty)
}

/// `## {title}` followed by one `### name` block per entry.
fn section<'a, F>(title: &str, entries: Option<NamedEntries<'a>>, render: F) -> Option<String>
where
    F: Fn(&'a str, &'a Value) -> Vec<String>,
{
    let entries = entries?;
    let mut parts = vec![format!("## {}", title)];
    for (name, definition) in entries {
        parts.push(format!("### {}", name));
        parts.extend(render(name, definition));
    }
    Some(paragraphs(parts))
}

/// The resolved type, only when the node declares a `schema` or `type`.
fn declared_type(node: &Value) -> Option<String> {
    if node.get(SCHEMA_FIELD).is_none() && node.get(TYPE_FIELD).is_none() {
        return None;
    }
    Some(resolve_type(node))
}

fn schema_fields(_: &str, schema: &Value) -> Vec<String> {
    vec![pretty_json(schema)]
}

fn security_scheme_fields(scheme: &SecurityScheme<'_>) -> Vec<String> {
    let mut parts = Vec::new();
    if let Some(scheme_type) = scheme.scheme_type() {
        parts.push(format!("**Type**: {}", scheme_type));
    }
    if let Some(description) = scheme.description() {
        parts.push(description.to_string());
    }
    if let Some(http_scheme) = scheme.scheme() {
        parts.push(format!("**Scheme**: {}", http_scheme));
    }
    if let Some(bearer_format) = scheme.bearer_format() {
        parts.push(format!("**Bearer Format**: {}", bearer_format));
    }
    if let Some(location) = scheme.location() {
        parts.push(format!("**In**: {}", location));
    }
    if let Some(name) = scheme.name() {
        parts.push(format!("**Name**: {}", name));
    }
    for (flow_name, flow) in scheme.flows() {
        let mut lines = Vec::new();
        if let Some(url) = flow.authorization_url() {
            lines.push(format!("- Authorization URL: {}", url));
        }
        if let Some(url) = flow.token_url() {
            lines.push(format!("- Token URL: {}", url));
        }
        if let Some(url) = flow.refresh_url() {
            lines.push(format!("- Refresh URL: {}", url));
        }
        let scopes = flow.scopes();
        if !scopes.is_empty() {
            lines.push(String::from("- Scopes:"));
            for (scope, description) in scopes {
                match description {
                    Some(description) => lines.push(format!("  - `{}`: {}", scope, description)),
                    None => lines.push(format!("  - `{}`", scope)),
                }
            }
        }
        let mut block = format!("**Flow**: {}", flow_name);
        if !lines.is_empty() {
            block.push('\n');
            block.push_str(&lines.join("\n"));
        }
        parts.push(block);
    }
    if let Some(url) = scheme.open_id_connect_url() {
        parts.push(format!("**OpenID Connect URL**: {}", url));
    }
    parts
}

fn parameter_fields(parameter: &Value) -> Vec<String> {
    let view = Parameter::new(parameter);
    let mut parts = Vec::new();
    if let Some(name) = view.name() {
        parts.push(format!("**Name**: {}", name));
    }
    if let Some(location) = view.location() {
        parts.push(format!("**In**: {}", location));
    }
    if let Some(declared) = declared_type(parameter) {
        parts.push(format!("**Type**: {}", declared));
    }
    if let Some(required) = parameter.get(REQUIRED_FIELD).and_then(Value::as_bool) {
        parts.push(format!("**Required**: {}", if required { "Yes" } else { "No" }));
    }
    if let Some(description) = view.description() {
        parts.push(description.to_string());
    }
    parts
}

fn example_fields(example: &Example<'_>) -> Vec<String> {
    let mut parts = Vec::new();
    if let Some(summary) = example.summary() {
        parts.push(format!("**Summary**: {}", summary));
    }
    if let Some(description) = example.description() {
        parts.push(description.to_string());
    }
    if let Some(value) = example.value() {
        parts.push(format!("**Value**:\n\n{}", pretty_json(value)));
    }
    if let Some(external_value) = example.external_value() {
        parts.push(format!("**External Value**: {}", external_value));
    }
    parts
}

fn header_fields(header: &Value) -> Vec<String> {
    let view = Header::new(header);
    let mut parts = Vec::new();
    if let Some(description) = view.description() {
        parts.push(description.to_string());
    }
    if let Some(declared) = declared_type(header) {
        parts.push(format!("**Type**: {}", declared));
    }
    if view.required() {
        parts.push(String::from("**Required**: Yes"));
    }
    parts
}

fn link_fields(link: &Link<'_>) -> Vec<String> {
    let mut parts = Vec::new();
    if let Some(operation_id) = link.operation_id() {
        parts.push(format!("**Operation ID**: `{}`", operation_id));
    }
    if let Some(operation_ref) = link.operation_ref() {
        parts.push(format!("**Operation Ref**: `{}`", operation_ref));
    }
    if let Some(description) = link.description() {
        parts.push(description.to_string());
    }
    let parameters: Vec<String> = link
        .parameters()
        .into_iter()
        .map(|(name, expression)| {
            let expression = expression
                .as_str()
                .map(str::to_string)
                .unwrap_or_else(|| expression.to_string());
            format!("- `{}`: `{}`", name, expression)
        })
        .collect();
    if !parameters.is_empty() {
        parts.push(format!("**Parameters**:\n{}", parameters.join("\n")));
    }
    parts
}

/// All component sections, each present only when its key exists under `components`.
pub(crate) fn components(traverser: &OpenApiTraverser) -> String {
    let components = match traverser.specification().get(COMPONENTS_FIELD) {
        Some(components) if components.is_object() => Components::new(components),
        _ => return String::new(),
    };
    let sections = [
        section("Schemas", components.schemas(), schema_fields),
        section("Security Schemes", components.security_schemes(), |_, scheme| {
            security_scheme_fields(&SecurityScheme::new(resolve_node(traverser, scheme)))
        }),
        section("Responses", components.responses(), |_, response| {
            let response = Response::new(resolve_node(traverser, response));
            let mut parts: Vec<String> =
                response.description().map(str::to_string).into_iter().collect();
            parts.extend(response_fields(traverser, &response));
            parts
        }),
        section("Parameters", components.parameters(), |_, parameter| {
            parameter_fields(resolve_node(traverser, parameter))
        }),
        section("Examples", components.examples(), |_, example| {
            example_fields(&Example::new(resolve_node(traverser, example)))
        }),
        section("Request Bodies", components.request_bodies(), |_, body| {
            request_body_fields(&RequestBody::new(resolve_node(traverser, body)))
        }),
        section("Headers", components.headers(), |_, header| {
            header_fields(resolve_node(traverser, header))
        }),
        section("Links", components.links(), |_, link| {
            link_fields(&Link::new(resolve_node(traverser, link)))
        }),
    ];

    paragraphs(sections.into_iter().flatten())
}

#[cfg(test)]
mod tests {
    use crate::markdown::components::components;
    use crate::traverser::OpenApiTraverser;
    use serde_json::json;

    fn render(spec: serde_json::Value) -> String {
        components(&OpenApiTraverser::new(spec).unwrap())
    }

    #[test]
    fn test_components_absent() {
        assert_eq!(render(json!({})), "");
        assert_eq!(render(json!({"components": {}})), "");
    }

    #[test]
    fn test_schemas_as_pretty_json() {
        let markdown = render(json!({
            "components": {
                "schemas": {
                    "Pet": {
                        "type": "object",
                        "required": ["id"],
                        "properties": {"id": {"type": "integer"}}
                    }
                }
            }
        }));
        assert_eq!(
            markdown,
            "## Schemas\n\n### Pet\n\n```json\n{\n  \"type\": \"object\",\n  \"required\": [\n    \"id\"\n  ],\n  \"properties\": {\n    \"id\": {\n      \"type\": \"integer\"\n    }\n  }\n}\n```"
        );
    }

    #[test]
    fn test_security_schemes_by_type() {
        let markdown = render(json!({
            "components": {
                "securitySchemes": {
                    "api_key": {"type": "apiKey", "in": "header", "name": "X-API-Key"},
                    "bearer": {"type": "http", "scheme": "bearer", "bearerFormat": "JWT", "description": "JWT auth"},
                    "oidc": {"type": "openIdConnect", "openIdConnectUrl": "https://example.com/.well-known/openid-configuration"}
                }
            }
        }));
        assert_eq!(
            markdown,
            "## Security Schemes\n\n\
             ### api_key\n\n**Type**: apiKey\n\n**In**: header\n\n**Name**: X-API-Key\n\n\
             ### bearer\n\n**Type**: http\n\nJWT auth\n\n**Scheme**: bearer\n\n**Bearer Format**: JWT\n\n\
             ### oidc\n\n**Type**: openIdConnect\n\n\
             **OpenID Connect URL**: https://example.com/.well-known/openid-configuration"
        );
    }

    #[test]
    fn test_security_scheme_oauth_flows() {
        let markdown = render(json!({
            "components": {
                "securitySchemes": {
                    "petstore_auth": {
                        "type": "oauth2",
                        "flows": {
                            "authorizationCode": {
                                "authorizationUrl": "https://example.com/authorize",
                                "tokenUrl": "https://example.com/token",
                                "scopes": {"read:pets": "Read pets", "write:pets": ""}
                            }
                        }
                    }
                }
            }
        }));
        assert!(markdown.ends_with(
            "**Flow**: authorizationCode\n\
             - Authorization URL: https://example.com/authorize\n\
             - Token URL: https://example.com/token\n\
             - Scopes:\n  \
             - `read:pets`: Read pets\n  \
             - `write:pets`"
        ));
    }

    #[test]
    fn test_component_sections_order_and_fields() {
        let markdown = render(json!({
            "components": {
                "links": {
                    "GetPet": {"operationId": "getPet", "parameters": {"petId": "$response.body#/id"}}
                },
                "headers": {
                    "X-Rate-Limit": {"description": "Calls per hour", "schema": {"type": "integer"}, "required": true}
                },
                "requestBodies": {
                    "PetBody": {"description": "A pet", "content": {"application/json": {"schema": {"$ref": "#/components/schemas/Pet"}}}}
                },
                "examples": {
                    "Cat": {"summary": "A cat", "value": {"name": "Tom"}}
                },
                "parameters": {
                    "Limit": {"name": "limit", "in": "query", "schema": {"type": "integer"}}
                },
                "responses": {
                    "NotFound": {"description": "Not found", "content": {"application/json": {"schema": {"$ref": "#/components/schemas/Error"}}}}
                }
            }
        }));
        assert_eq!(
            markdown,
            "## Responses\n\n### NotFound\n\nNot found\n\n\
             Content Types:\n- `application/json`\n  - Type: Error\n\n\
             ## Parameters\n\n### Limit\n\n**Name**: limit\n\n**In**: query\n\n**Type**: integer\n\n\
             ## Examples\n\n### Cat\n\n**Summary**: A cat\n\n**Value**:\n\n```json\n{\n  \"name\": \"Tom\"\n}\n```\n\n\
             ## Request Bodies\n\n### PetBody\n\nA pet\n\n\
             **Content Types**:\n- `application/json`\n  - Type: Pet\n\n\
             ## Headers\n\n### X-Rate-Limit\n\nCalls per hour\n\n**Type**: integer\n\n**Required**: Yes\n\n\
             ## Links\n\n### GetPet\n\n**Operation ID**: `getPet`\n\n\
             **Parameters**:\n- `petId`: `$response.body#/id`"
        );
    }

    #[test]
    fn test_parameter_and_header_skip_absent_type_and_required() {
        let markdown = render(json!({
            "components": {
                "parameters": {
                    "Limit": {"name": "limit", "in": "query"},
                    "Offset": {"name": "offset", "in": "query", "type": "integer", "required": false}
                },
                "headers": {"X-Trace": {"description": "Trace id"}}
            }
        }));
        assert_eq!(
            markdown,
            "## Parameters\n\n\
             ### Limit\n\n**Name**: limit\n\n**In**: query\n\n\
             ### Offset\n\n**Name**: offset\n\n**In**: query\n\n**Type**: integer\n\n**Required**: No\n\n\
             ## Headers\n\n### X-Trace\n\nTrace id"
        );
    }

    #[test]
    fn test_component_responses_and_request_bodies_follow_references() {
        let markdown = render(json!({
            "components": {
                "responses": {
                    "Missing": {"$ref": "#/components/responses/NotFound"},
                    "NotFound": {"description": "Not found"}
                },
                "requestBodies": {
                    "NewPet": {"$ref": "#/components/requestBodies/PetBody"},
                    "PetBody": {"description": "A pet", "required": true}
                }
            }
        }));
        assert_eq!(
            markdown,
            "## Responses\n\n\
             ### Missing\n\nNot found\n\n\
             ### NotFound\n\nNot found\n\n\
             ## Request Bodies\n\n\
             ### NewPet\n\nA pet\n\n**Required**: Yes\n\n\
             ### PetBody\n\nA pet\n\n**Required**: Yes"
        );
    }

    #[test]
    fn test_component_section_present_but_empty() {
        assert_eq!(render(json!({"components": {"schemas": {}}})), "## Schemas");
    }
}
