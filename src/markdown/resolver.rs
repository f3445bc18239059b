//! Printable type names for parameters, headers and schemas.

use crate::{ITEMS_FIELD, PATH_SEPARATOR, REF_FIELD, SCHEMA_FIELD, TYPE_FIELD};
use serde_json::Value;

const ARRAY_TYPE: &str = "array";
const DEFAULT_VALUE_TYPE: &str = "string";
const DEFAULT_SCHEMA_TYPE: &str = "object";

/// Resolves the type of a parameter or header.
///
/// A `schema` wins over an inline `type`; with neither the type is `string`.
pub fn resolve_type(value: &Value) -> String {
    if let Some(schema) = value.get(SCHEMA_FIELD) {
        return resolve_schema_type(schema);
    }
    match value.get(TYPE_FIELD).and_then(Value::as_str) {
        Some(inline_type) if !inline_type.is_empty() => inline_type.to_string(),
        _ => DEFAULT_VALUE_TYPE.to_string(),
    }
}

/// Resolves the type of a schema.
///
/// * `array` with `items` → `array[<items type>]`, to any depth.
/// * any other `type` → returned as written; a 3.1 type list is joined with ` | `.
/// * `$ref` → the last path segment of the reference, `object` when empty.
/// * anything else → `object`.
pub fn resolve_schema_type(schema: &Value) -> String {
    let schema_type = schema.get(TYPE_FIELD);

    if let (Some(ARRAY_TYPE), Some(items)) =
        (schema_type.and_then(Value::as_str), schema.get(ITEMS_FIELD))
    {
        return format!("array[{}]", resolve_schema_type(items));
    }

    match schema_type {
        Some(Value::String(name)) if !name.is_empty() => return name.clone(),
        Some(Value::Array(names)) => {
            let names: Vec<&str> = names.iter().filter_map(Value::as_str).collect();
            if !names.is_empty() {
                return names.join(" | ");
            }
        }
        _ => {}
    }

    match schema.get(REF_FIELD).and_then(Value::as_str) {
        Some(reference) => reference_name(reference)
            .unwrap_or(DEFAULT_SCHEMA_TYPE)
            .to_string(),
        None => DEFAULT_SCHEMA_TYPE.to_string(),
    }
}

/// The component name a reference points at: its final `/`-separated segment.
///
/// Returns `None` when that segment is empty, e.g. for `#/components/schemas/`.
pub fn reference_name(reference: &str) -> Option<&str> {
    reference
        .rsplit(PATH_SEPARATOR)
        .next()
        .filter(|segment| !segment.is_empty())
}
