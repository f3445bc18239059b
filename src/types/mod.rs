macro_rules! spec_node {
    ($($(#[$meta:meta])* $name:ident),+ $(,)?) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy)]
            pub struct $name<'a>(&'a serde_json::Value);

            impl<'a> $name<'a> {
                pub fn new(node: &'a serde_json::Value) -> Self {
                    Self(node)
                }
            }

            impl<'a> $crate::types::SpecNode<'a> for $name<'a> {
                fn node(&self) -> &'a serde_json::Value {
                    self.0
                }
            }
        )+
    };
}

pub mod components;
pub mod info;
pub mod operation;
pub mod security;

use crate::traverser::OpenApiTraverser;
use serde_json::{Map, Value};

pub use components::{Components, Example, Header, Link};
pub use info::{Contact, ExternalDocs, Info, License, Server, ServerVariable, Tag};
pub use operation::{Callback, MediaType, Operation, Parameter, PathItem, RequestBody, Response};
pub use security::{OAuthFlow, SecurityRequirement, SecurityScheme};

/// A permissive, read-only view over one node of the specification tree.
///
/// Accessors never fail: a missing field and a field of the wrong JSON type
/// both read as absent. Empty strings read as absent too.
pub trait SpecNode<'a> {
    fn node(&self) -> &'a Value;

    fn str_field(&self, field: &str) -> Option<&'a str> {
        OpenApiTraverser::get_as_str(self.node(), field)
            .ok()
            .filter(|value| !value.is_empty())
    }

    fn bool_field(&self, field: &str) -> bool {
        OpenApiTraverser::get_as_bool(self.node(), field).unwrap_or(false)
    }

    fn object_field(&self, field: &str) -> Option<&'a Map<String, Value>> {
        OpenApiTraverser::get_as_object(self.node(), field).ok()
    }

    fn array_field(&self, field: &str) -> Option<&'a Vec<Value>> {
        OpenApiTraverser::get_as_array(self.node(), field).ok()
    }

    /// Entries of an object-valued field in document order; empty when absent.
    fn entries(&self, field: &str) -> Vec<(&'a str, &'a Value)> {
        match self.object_field(field) {
            None => Vec::new(),
            Some(map) => map.iter().map(|(key, value)| (key.as_str(), value)).collect(),
        }
    }

    /// String members of an array-valued field, skipping non-strings.
    fn strings(&self, field: &str) -> Vec<&'a str> {
        match self.array_field(field) {
            None => Vec::new(),
            Some(values) => values.iter().filter_map(Value::as_str).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::types::{Info, SpecNode};
    use serde_json::json;

    #[test]
    fn test_str_field_with_wrong_type_reads_as_absent() {
        let node = json!({"title": 42, "version": "1.0"});
        let info = Info::new(&node);
        assert_eq!(info.str_field("title"), None);
        assert_eq!(info.str_field("version"), Some("1.0"));
    }

    #[test]
    fn test_str_field_with_empty_string_reads_as_absent() {
        let node = json!({"title": ""});
        assert_eq!(Info::new(&node).str_field("title"), None);
    }

    #[test]
    fn test_entries_preserve_document_order() {
        let node = json!({"paths": {"/z": {}, "/a": {}, "/m": {}}});
        let keys: Vec<&str> = Info::new(&node)
            .entries("paths")
            .into_iter()
            .map(|(key, _)| key)
            .collect();
        assert_eq!(keys, vec!["/z", "/a", "/m"]);
    }

    #[test]
    fn test_strings_skip_non_string_members() {
        let node = json!({"tags": ["pets", 1, null, "store"]});
        assert_eq!(Info::new(&node).strings("tags"), vec!["pets", "store"]);
    }

    #[test]
    fn test_bool_field_defaults_to_false() {
        let node = json!({"deprecated": "yes"});
        let info = Info::new(&node);
        assert!(!info.bool_field("deprecated"));
        assert!(!info.bool_field("missing"));
    }
}
