use crate::markdown::resolver::{reference_name, resolve_type};
use crate::markdown::resolve_node;
use crate::traverser::OpenApiTraverser;
use crate::types::Parameter;
use crate::REF_FIELD;
use serde_json::Value;

const TABLE_HEADER: &str = "| Name | In | Type | Required | Description |\n\
                            |------|----|------|----------|-------------|";

/// Escapes text for a single table cell.
pub(crate) fn table_cell(text: &str) -> String {
    text.replace("\r\n", " ")
        .replace(['\n', '\r'], " ")
        .replace('|', "\\|")
}

/// Path-level parameters followed by the operation's own, with an operation
/// parameter replacing a path-level one that has the same `name` and `in`.
pub(crate) fn merge_parameters<'a>(
    traverser: &'a OpenApiTraverser,
    path_level: &[&'a Value],
    operation_level: &[&'a Value],
) -> Vec<&'a Value> {
    let operation_level: Vec<&Value> = operation_level
        .iter()
        .copied()
        .map(|parameter| resolve_node(traverser, parameter))
        .filter(|parameter| parameter.is_object())
        .collect();

    let mut merged: Vec<&Value> = path_level
        .iter()
        .copied()
        .map(|parameter| resolve_node(traverser, parameter))
        .filter(|parameter| parameter.is_object())
        .filter(|shared| {
            let shared = Parameter::new(shared);
            !operation_level
                .iter()
                .any(|own| Parameter::new(own).same_target(&shared))
        })
        .collect();
    merged.extend(operation_level);
    merged
}

fn parameter_row(parameter: &Value) -> String {
    let view = Parameter::new(parameter);
    let name = view.name().or_else(|| {
        parameter
            .get(REF_FIELD)
            .and_then(Value::as_str)
            .and_then(reference_name)
    });
    let required = if view.required() { "Yes" } else { "No" };
    format!(
        "| {} | {} | {} | {} | {} |",
        table_cell(name.unwrap_or_default()),
        table_cell(view.location().unwrap_or_default()),
        table_cell(&resolve_type(parameter)),
        required,
        table_cell(view.description().unwrap_or_default()),
    )
}

/// The parameters table of an endpoint; empty when there are no parameters.
pub(crate) fn parameters_table(parameters: &[&Value]) -> String {
    if parameters.is_empty() {
        return String::new();
    }

    let rows: Vec<String> = parameters
        .iter()
        .map(|parameter| parameter_row(parameter))
        .collect();
    format!("#### Parameters\n\n{}\n{}", TABLE_HEADER, rows.join("\n"))
}

#[cfg(test)]
mod tests {
    use crate::markdown::parameters::{merge_parameters, parameters_table, table_cell};
    use crate::traverser::OpenApiTraverser;
    use serde_json::json;

    #[test]
    fn test_parameters_table_rows_in_input_order() {
        let limit = json!({
            "name": "limit",
            "in": "query",
            "required": false,
            "description": "How many items to return",
            "schema": {"type": "integer"}
        });
        let id = json!({"name": "petId", "in": "path", "required": true, "type": "string"});
        assert_eq!(
            parameters_table(&[&limit, &id]),
            "#### Parameters\n\n\
             | Name | In | Type | Required | Description |\n\
             |------|----|------|----------|-------------|\n\
             | limit | query | integer | No | How many items to return |\n\
             | petId | path | string | Yes |  |"
        );
    }

    #[test]
    fn test_parameters_table_empty() {
        assert_eq!(parameters_table(&[]), "");
    }

    #[test]
    fn test_table_cell_escapes_pipes_and_newlines() {
        assert_eq!(table_cell("a | b\nc"), "a \\| b c");
    }

    #[test]
    fn test_merge_parameters_operation_overrides_path_level() {
        let spec = OpenApiTraverser::new(json!({})).unwrap();
        let shared_id = json!({"name": "id", "in": "path", "description": "shared"});
        let shared_trace = json!({"name": "trace", "in": "header"});
        let own_id = json!({"name": "id", "in": "path", "description": "own"});
        let merged = merge_parameters(&spec, &[&shared_id, &shared_trace], &[&own_id]);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0]["name"], "trace");
        assert_eq!(merged[1]["description"], "own");
    }

    #[test]
    fn test_merge_parameters_resolves_references() {
        let spec = OpenApiTraverser::new(json!({
            "components": {
                "parameters": {
                    "Limit": {"name": "limit", "in": "query", "schema": {"type": "integer"}}
                }
            }
        }))
        .unwrap();
        let reference = json!({"$ref": "#/components/parameters/Limit"});
        let merged = merge_parameters(&spec, &[], &[&reference]);
        assert_eq!(merged[0]["name"], "limit");
    }

    #[test]
    fn test_unresolvable_reference_uses_reference_name() {
        let spec = OpenApiTraverser::new(json!({})).unwrap();
        let reference = json!({"$ref": "#/components/parameters/Missing"});
        let merged = merge_parameters(&spec, &[], &[&reference]);
        assert!(parameters_table(&merged).ends_with("| Missing |  | string | No |  |"));
    }
}
