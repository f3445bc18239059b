use crate::types::SpecNode;
use crate::{
    CONTACT_FIELD, DEFAULT_FIELD, DESCRIPTION_FIELD, EMAIL_FIELD, EXTERNAL_DOCS_FIELD,
    LICENSE_FIELD, NAME_FIELD, TITLE_FIELD, URL_FIELD, VARIABLES_FIELD, VERSION_FIELD,
};

spec_node!(
    /// The `info` object of a specification.
    Info,
    /// `info.contact`.
    Contact,
    /// `info.license`.
    License,
    /// An `externalDocs` object, at document or tag level.
    ExternalDocs,
    /// One entry of the `servers` array.
    Server,
    /// One entry of a server's `variables` map.
    ServerVariable,
    /// One entry of the `tags` array.
    Tag,
);

impl<'a> Info<'a> {
    pub fn title(&self) -> Option<&'a str> {
        self.str_field(TITLE_FIELD)
    }

    pub fn version(&self) -> Option<&'a str> {
        self.str_field(VERSION_FIELD)
    }

    pub fn description(&self) -> Option<&'a str> {
        self.str_field(DESCRIPTION_FIELD)
    }

    pub fn contact(&self) -> Option<Contact<'a>> {
        self.node().get(CONTACT_FIELD).filter(|v| v.is_object()).map(Contact::new)
    }

    pub fn license(&self) -> Option<License<'a>> {
        self.node().get(LICENSE_FIELD).filter(|v| v.is_object()).map(License::new)
    }
}

impl<'a> Contact<'a> {
    pub fn name(&self) -> Option<&'a str> {
        self.str_field(NAME_FIELD)
    }

    pub fn email(&self) -> Option<&'a str> {
        self.str_field(EMAIL_FIELD)
    }

    pub fn url(&self) -> Option<&'a str> {
        self.str_field(URL_FIELD)
    }
}

impl<'a> License<'a> {
    pub fn name(&self) -> Option<&'a str> {
        self.str_field(NAME_FIELD)
    }

    pub fn url(&self) -> Option<&'a str> {
        self.str_field(URL_FIELD)
    }
}

impl<'a> ExternalDocs<'a> {
    pub fn url(&self) -> Option<&'a str> {
        self.str_field(URL_FIELD)
    }

    pub fn description(&self) -> Option<&'a str> {
        self.str_field(DESCRIPTION_FIELD)
    }
}

impl<'a> Server<'a> {
    pub fn url(&self) -> Option<&'a str> {
        self.str_field(URL_FIELD)
    }

    pub fn description(&self) -> Option<&'a str> {
        self.str_field(DESCRIPTION_FIELD)
    }

    pub fn variables(&self) -> Vec<(&'a str, ServerVariable<'a>)> {
        self.entries(VARIABLES_FIELD)
            .into_iter()
            .map(|(name, variable)| (name, ServerVariable::new(variable)))
            .collect()
    }
}

impl<'a> ServerVariable<'a> {
    /// The default value; OpenAPI requires a string, numbers are tolerated.
    pub fn default_value(&self) -> Option<String> {
        match self.node().get(DEFAULT_FIELD)? {
            serde_json::Value::String(value) => Some(value.clone()),
            serde_json::Value::Number(value) => Some(value.to_string()),
            serde_json::Value::Bool(value) => Some(value.to_string()),
            _ => None,
        }
    }

    pub fn description(&self) -> Option<&'a str> {
        self.str_field(DESCRIPTION_FIELD)
    }
}

impl<'a> Tag<'a> {
    pub fn name(&self) -> Option<&'a str> {
        self.str_field(NAME_FIELD)
    }

    pub fn description(&self) -> Option<&'a str> {
        self.str_field(DESCRIPTION_FIELD)
    }

    pub fn external_docs(&self) -> Option<ExternalDocs<'a>> {
        self.node()
            .get(EXTERNAL_DOCS_FIELD)
            .filter(|v| v.is_object())
            .map(ExternalDocs::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::types::{Info, Server};
    use serde_json::json;

    #[test]
    fn test_info_contact_with_non_object() {
        let node = json!({"contact": "support@example.com"});
        assert!(Info::new(&node).contact().is_none());
    }

    #[test]
    fn test_server_variables_in_document_order() {
        let node = json!({
            "url": "https://{region}.example.com:{port}",
            "variables": {
                "region": {"default": "eu", "description": "Deployment region"},
                "port": {"default": 8443}
            }
        });
        let variables = Server::new(&node).variables();
        assert_eq!(variables.len(), 2);
        assert_eq!(variables[0].0, "region");
        assert_eq!(variables[0].1.default_value().as_deref(), Some("eu"));
        assert_eq!(variables[1].0, "port");
        assert_eq!(variables[1].1.default_value().as_deref(), Some("8443"));
        assert_eq!(variables[1].1.description(), None);
    }
}
