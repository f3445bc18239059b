use crate::types::{Header, SecurityRequirement, SpecNode};
use crate::{
    CALLBACKS_FIELD, CONTENT_FIELD, DEPRECATED_FIELD, DESCRIPTION_FIELD, HEADERS_FIELD, IN_FIELD,
    NAME_FIELD, OPERATION_ID_FIELD, PARAMETERS_FIELD, REQUEST_BODY_FIELD, REQUIRED_FIELD,
    RESPONSES_FIELD, SCHEMA_FIELD, SECURITY_FIELD, SUMMARY_FIELD, TAGS_FIELD,
};
use serde_json::Value;

spec_node!(
    /// A path item: HTTP methods mapped to operations, plus shared fields.
    PathItem,
    /// A single HTTP-method-specific operation.
    Operation,
    /// An operation or path-level parameter.
    Parameter,
    RequestBody,
    Response,
    /// One media type entry of a `content` map.
    MediaType,
    /// A callback: runtime expressions mapped to path items.
    Callback,
);

/// Collects `security` requirements, keeping absent and empty apart.
pub(crate) fn security_requirements(node: &Value) -> Option<Vec<SecurityRequirement<'_>>> {
    let requirements = node.get(SECURITY_FIELD)?.as_array()?;
    Some(
        requirements
            .iter()
            .filter(|requirement| requirement.is_object())
            .map(SecurityRequirement::new)
            .collect(),
    )
}

fn media_types(node: &Value) -> Vec<(&str, MediaType<'_>)> {
    match node.get(CONTENT_FIELD).and_then(Value::as_object) {
        None => Vec::new(),
        Some(content) => content
            .iter()
            .map(|(media_type, value)| (media_type.as_str(), MediaType::new(value)))
            .collect(),
    }
}

impl<'a> PathItem<'a> {
    /// The operations of this path item in document order.
    ///
    /// The path-level `parameters` entry and any entry that is not an object
    /// (`summary`, `servers`, `$ref`, ...) are not operations and are skipped.
    pub fn operations(&self) -> Vec<(&'a str, Operation<'a>)> {
        let mut operations = Vec::new();
        for (method, operation) in self.node().as_object().into_iter().flatten() {
            if method == PARAMETERS_FIELD {
                continue;
            }
            if !operation.is_object() {
                log::debug!("Skipping non-operation path item field '{}'", method);
                continue;
            }
            operations.push((method.as_str(), Operation::new(operation)));
        }
        operations
    }

    pub fn parameters(&self) -> Vec<&'a Value> {
        self.array_field(PARAMETERS_FIELD)
            .map(|parameters| parameters.iter().collect())
            .unwrap_or_default()
    }
}

impl<'a> Operation<'a> {
    pub fn summary(&self) -> Option<&'a str> {
        self.str_field(SUMMARY_FIELD)
    }

    pub fn description(&self) -> Option<&'a str> {
        self.str_field(DESCRIPTION_FIELD)
    }

    pub fn operation_id(&self) -> Option<&'a str> {
        self.str_field(OPERATION_ID_FIELD)
    }

    pub fn deprecated(&self) -> bool {
        self.bool_field(DEPRECATED_FIELD)
    }

    pub fn tags(&self) -> Vec<&'a str> {
        self.strings(TAGS_FIELD)
    }

    /// `None` when the operation does not override security, `Some(vec![])`
    /// when it explicitly opts out with `security: []`.
    pub fn security(&self) -> Option<Vec<SecurityRequirement<'a>>> {
        security_requirements(self.node())
    }

    pub fn parameters(&self) -> Vec<&'a Value> {
        self.array_field(PARAMETERS_FIELD)
            .map(|parameters| parameters.iter().collect())
            .unwrap_or_default()
    }

    pub fn request_body(&self) -> Option<&'a Value> {
        self.node().get(REQUEST_BODY_FIELD).filter(|v| v.is_object())
    }

    /// `None` when `responses` is absent, `Some(vec![])` when it is an empty map.
    pub fn responses(&self) -> Option<Vec<(&'a str, &'a Value)>> {
        self.object_field(RESPONSES_FIELD).map(|responses| {
            responses
                .iter()
                .map(|(status, response)| (status.as_str(), response))
                .collect()
        })
    }

    pub fn callbacks(&self) -> Option<Vec<(&'a str, Callback<'a>)>> {
        self.object_field(CALLBACKS_FIELD).map(|callbacks| {
            callbacks
                .iter()
                .map(|(name, callback)| (name.as_str(), Callback::new(callback)))
                .collect()
        })
    }
}

impl<'a> Parameter<'a> {
    pub fn name(&self) -> Option<&'a str> {
        self.str_field(NAME_FIELD)
    }

    pub fn location(&self) -> Option<&'a str> {
        self.str_field(IN_FIELD)
    }

    pub fn required(&self) -> bool {
        self.bool_field(REQUIRED_FIELD)
    }

    pub fn description(&self) -> Option<&'a str> {
        self.str_field(DESCRIPTION_FIELD)
    }

    /// Whether this parameter and `other` target the same (`name`, `in`) pair.
    pub fn same_target(&self, other: &Parameter<'_>) -> bool {
        self.name().is_some() && self.name() == other.name() && self.location() == other.location()
    }
}

impl<'a> RequestBody<'a> {
    pub fn description(&self) -> Option<&'a str> {
        self.str_field(DESCRIPTION_FIELD)
    }

    pub fn required(&self) -> bool {
        self.bool_field(REQUIRED_FIELD)
    }

    pub fn content(&self) -> Vec<(&'a str, MediaType<'a>)> {
        media_types(self.node())
    }
}

impl<'a> Response<'a> {
    pub fn description(&self) -> Option<&'a str> {
        self.str_field(DESCRIPTION_FIELD)
    }

    pub fn headers(&self) -> Vec<(&'a str, Header<'a>)> {
        self.entries(HEADERS_FIELD)
            .into_iter()
            .map(|(name, header)| (name, Header::new(header)))
            .collect()
    }

    pub fn content(&self) -> Vec<(&'a str, MediaType<'a>)> {
        media_types(self.node())
    }
}

impl<'a> MediaType<'a> {
    pub fn schema(&self) -> Option<&'a Value> {
        self.node().get(SCHEMA_FIELD)
    }
}

impl<'a> Callback<'a> {
    /// Runtime expressions and the path items they point at, in document order.
    pub fn expressions(&self) -> Vec<(&'a str, PathItem<'a>)> {
        self.node()
            .as_object()
            .into_iter()
            .flatten()
            .filter(|(_, path_item)| path_item.is_object())
            .map(|(expression, path_item)| (expression.as_str(), PathItem::new(path_item)))
            .collect()
    }
}
