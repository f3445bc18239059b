use crate::types::SpecNode;
use crate::{DESCRIPTION_FIELD, OPERATION_ID_FIELD, PARAMETERS_FIELD, REQUIRED_FIELD, SUMMARY_FIELD};
use serde_json::Value;

const SCHEMAS_FIELD: &str = "schemas";
const SECURITY_SCHEMES_FIELD: &str = "securitySchemes";
const RESPONSES_FIELD: &str = "responses";
const EXAMPLES_FIELD: &str = "examples";
const REQUEST_BODIES_FIELD: &str = "requestBodies";
const HEADERS_FIELD: &str = "headers";
const LINKS_FIELD: &str = "links";
const VALUE_FIELD: &str = "value";
const EXTERNAL_VALUE_FIELD: &str = "externalValue";
const OPERATION_REF_FIELD: &str = "operationRef";

type NamedEntries<'a> = Option<Vec<(&'a str, &'a Value)>>;

spec_node!(
    /// The `components` object.
    Components,
    /// A `components.examples` entry.
    Example,
    /// A `components.links` entry or a response link.
    Link,
    /// A header definition, in components or on a response.
    Header,
);

impl<'a> Components<'a> {
    /// Entries of one sub-collection; `None` when the key is absent.
    fn section(&self, field: &str) -> NamedEntries<'a> {
        self.object_field(field)
            .map(|map| map.iter().map(|(name, value)| (name.as_str(), value)).collect())
    }

    pub fn schemas(&self) -> NamedEntries<'a> {
        self.section(SCHEMAS_FIELD)
    }

    pub fn security_schemes(&self) -> NamedEntries<'a> {
        self.section(SECURITY_SCHEMES_FIELD)
    }

    pub fn responses(&self) -> NamedEntries<'a> {
        self.section(RESPONSES_FIELD)
    }

    pub fn parameters(&self) -> NamedEntries<'a> {
        self.section(PARAMETERS_FIELD)
    }

    pub fn examples(&self) -> NamedEntries<'a> {
        self.section(EXAMPLES_FIELD)
    }

    pub fn request_bodies(&self) -> NamedEntries<'a> {
        self.section(REQUEST_BODIES_FIELD)
    }

    pub fn headers(&self) -> NamedEntries<'a> {
        self.section(HEADERS_FIELD)
    }

    pub fn links(&self) -> NamedEntries<'a> {
        self.section(LINKS_FIELD)
    }
}

impl<'a> Example<'a> {
    pub fn summary(&self) -> Option<&'a str> {
        self.str_field(SUMMARY_FIELD)
    }

    pub fn description(&self) -> Option<&'a str> {
        self.str_field(DESCRIPTION_FIELD)
    }

    pub fn value(&self) -> Option<&'a Value> {
        self.node().get(VALUE_FIELD)
    }

    pub fn external_value(&self) -> Option<&'a str> {
        self.str_field(EXTERNAL_VALUE_FIELD)
    }
}

impl<'a> Link<'a> {
    pub fn operation_id(&self) -> Option<&'a str> {
        self.str_field(OPERATION_ID_FIELD)
    }

    pub fn operation_ref(&self) -> Option<&'a str> {
        self.str_field(OPERATION_REF_FIELD)
    }

    pub fn description(&self) -> Option<&'a str> {
        self.str_field(DESCRIPTION_FIELD)
    }

    pub fn parameters(&self) -> Vec<(&'a str, &'a Value)> {
        self.entries(PARAMETERS_FIELD)
    }
}

impl<'a> Header<'a> {
    pub fn description(&self) -> Option<&'a str> {
        self.str_field(DESCRIPTION_FIELD)
    }

    pub fn required(&self) -> bool {
        self.bool_field(REQUIRED_FIELD)
    }
}
