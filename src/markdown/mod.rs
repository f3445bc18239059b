//! Renders a specification document as Markdown.
//!
//! The document is produced by a fixed, ordered list of section generators.
//! Each generator reads the part of the specification it is responsible for
//! and returns a Markdown fragment, or an empty string when that part is
//! absent. Empty fragments are dropped and the rest joined by a blank line.

mod body;
mod components;
mod document;
mod endpoint;
mod parameters;
pub mod resolver;
mod security;

use crate::error::ConversionError;
use crate::traverser::OpenApiTraverser;
use serde_json::Value;

pub use resolver::{reference_name, resolve_schema_type, resolve_type};

const SECTION_SEPARATOR: &str = "\n\n";

/// A pure function from the specification to one Markdown section.
type SectionGenerator = fn(&OpenApiTraverser) -> String;

const SECTIONS: [SectionGenerator; 11] = [
    document::title,
    document::description,
    document::contact,
    document::license,
    document::external_docs,
    document::servers,
    security::document_security,
    document::tags,
    endpoint::paths,
    endpoint::webhooks,
    components::components,
];

/// Converts one specification into a Markdown document.
///
/// The converter only holds the immutable specification; every call to
/// [`MarkdownConverter::convert`] builds a fresh string, so a converter can be
/// shared between threads and called concurrently.
#[derive(Debug)]
pub struct MarkdownConverter {
    traverser: OpenApiTraverser,
}

impl MarkdownConverter {
    /// Binds a parsed specification to a new converter.
    ///
    /// # Returns
    /// * `Ok(MarkdownConverter)` - when the root is a JSON object.
    /// * `Err(ConversionError::RootNotObject)` - for any other root value.
    ///
    /// # Example
    /// ```rust
    /// use oasmd::MarkdownConverter;
    ///
    /// let spec = serde_json::json!({"info": {"title": "Pet Store", "version": "1.0"}});
    /// let converter = MarkdownConverter::new(spec).unwrap();
    /// assert!(converter.convert().starts_with("# Pet Store (v1.0)"));
    /// ```
    pub fn new(specification: Value) -> Result<Self, ConversionError> {
        let traverser = OpenApiTraverser::new(specification)?;
        Ok(Self { traverser })
    }

    pub fn specification(&self) -> &Value {
        self.traverser.specification()
    }

    /// Renders the whole document.
    ///
    /// Sections always appear in this order, whatever the key order of the
    /// input: title, description, contact, license, external docs, servers,
    /// security, tags, endpoints, webhooks, components.
    pub fn convert(&self) -> String {
        let fragments: Vec<String> = SECTIONS
            .iter()
            .map(|generate| generate(&self.traverser))
            .filter(|fragment| !fragment.is_empty())
            .collect();
        fragments.join(SECTION_SEPARATOR)
    }
}

/// Joins the non-empty paragraphs of a block with blank lines.
pub(crate) fn paragraphs<I>(parts: I) -> String
where
    I: IntoIterator<Item = String>,
{
    parts
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<String>>()
        .join(SECTION_SEPARATOR)
}

/// Follows a `$ref` on the node, falling back to the node itself when the
/// reference cannot be resolved.
pub(crate) fn resolve_node<'a>(traverser: &'a OpenApiTraverser, node: &'a Value) -> &'a Value {
    match traverser.resolve_possible_ref(node) {
        Ok(resolved) => resolved,
        Err(e) => {
            log::warn!("Unable to resolve reference: {}", e);
            node
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::error::ConversionError;
    use crate::markdown::MarkdownConverter;
    use serde_json::json;

    fn convert(spec: serde_json::Value) -> String {
        MarkdownConverter::new(spec).unwrap().convert()
    }

    #[test]
    fn test_convert_with_empty_specification() {
        assert_eq!(convert(json!({})), "# API Documentation");
    }

    #[test]
    fn test_convert_with_non_object_root() {
        let result = MarkdownConverter::new(json!("openapi"));
        assert_eq!(
            result.unwrap_err(),
            ConversionError::RootNotObject("string".to_string())
        );
    }

    #[test]
    fn test_convert_pet_store_end_to_end() {
        let markdown = convert(json!({
            "info": {"title": "Pet Store", "version": "1.0"},
            "paths": {
                "/pets": {
                    "get": {
                        "summary": "List pets",
                        "responses": {"200": {"description": "OK"}}
                    }
                }
            }
        }));
        assert_eq!(
            markdown,
            "# Pet Store (v1.0)\n\n\
             ## Endpoints\n\n\
             ### List pets\n\n\
             **GET** `/pets`\n\n\
             #### Responses\n\n\
             **200**: OK"
        );
    }

    #[test]
    fn test_convert_section_order_ignores_key_order() {
        let markdown = convert(json!({
            "components": {"schemas": {"Pet": {"type": "object"}}},
            "webhooks": {},
            "paths": {},
            "tags": [{"name": "pets"}],
            "security": [{"api_key": []}],
            "servers": [{"url": "https://api.example.com"}],
            "externalDocs": {"url": "https://docs.example.com"},
            "info": {
                "license": {"name": "MIT"},
                "contact": {"name": "API Team"},
                "description": "All about pets.",
                "title": "Pets"
            }
        }));
        let headings = [
            "# Pets",
            "All about pets.",
            "## Contact",
            "## License",
            "## External Documentation",
            "## Servers",
            "## Security",
            "## Tags",
            "## Endpoints",
            "## Webhooks",
            "## Schemas",
        ];
        let positions: Vec<usize> = headings
            .iter()
            .map(|heading| markdown.find(heading).unwrap())
            .collect();
        let mut sorted = positions.clone();
        sorted.sort();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn test_convert_is_idempotent() {
        let converter = MarkdownConverter::new(json!({
            "info": {"title": "Pets", "version": "2.0"},
            "paths": {"/pets": {"post": {"requestBody": {"content": {"application/json": {}}}}}},
            "components": {"schemas": {"Pet": {"type": "object", "properties": {"id": {"type": "integer"}}}}}
        }))
        .unwrap();
        assert_eq!(converter.convert(), converter.convert());
    }

    #[test]
    fn test_convert_never_mutates_specification() {
        let spec = json!({
            "info": {"title": "Pets"},
            "paths": {"/pets": {"get": {"parameters": [{"$ref": "#/components/parameters/Limit"}]}}},
            "components": {"parameters": {"Limit": {"name": "limit", "in": "query"}}}
        });
        let converter = MarkdownConverter::new(spec.clone()).unwrap();
        converter.convert();
        assert_eq!(converter.specification(), &spec);
    }
}
