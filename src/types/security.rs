use crate::types::SpecNode;
use crate::{DESCRIPTION_FIELD, IN_FIELD, NAME_FIELD, TYPE_FIELD};
use serde_json::Value;

const SCHEME_FIELD: &str = "scheme";
const BEARER_FORMAT_FIELD: &str = "bearerFormat";
const FLOWS_FIELD: &str = "flows";
const OPEN_ID_CONNECT_URL_FIELD: &str = "openIdConnectUrl";
const AUTHORIZATION_URL_FIELD: &str = "authorizationUrl";
const TOKEN_URL_FIELD: &str = "tokenUrl";
const REFRESH_URL_FIELD: &str = "refreshUrl";
const SCOPES_FIELD: &str = "scopes";

spec_node!(
    /// One security requirement: scheme names mapped to required scopes.
    SecurityRequirement,
    /// A `components.securitySchemes` entry.
    SecurityScheme,
    /// One flow of an `oauth2` security scheme.
    OAuthFlow,
);

impl<'a> SecurityRequirement<'a> {
    /// Scheme names with their scopes, in document order.
    pub fn schemes(&self) -> Vec<(&'a str, Vec<&'a str>)> {
        self.node()
            .as_object()
            .into_iter()
            .flatten()
            .map(|(name, scopes)| {
                let scopes = scopes
                    .as_array()
                    .map(|scopes| scopes.iter().filter_map(Value::as_str).collect())
                    .unwrap_or_default();
                (name.as_str(), scopes)
            })
            .collect()
    }
}

impl<'a> SecurityScheme<'a> {
    pub fn scheme_type(&self) -> Option<&'a str> {
        self.str_field(TYPE_FIELD)
    }

    pub fn description(&self) -> Option<&'a str> {
        self.str_field(DESCRIPTION_FIELD)
    }

    pub fn scheme(&self) -> Option<&'a str> {
        self.str_field(SCHEME_FIELD)
    }

    pub fn bearer_format(&self) -> Option<&'a str> {
        self.str_field(BEARER_FORMAT_FIELD)
    }

    pub fn location(&self) -> Option<&'a str> {
        self.str_field(IN_FIELD)
    }

    pub fn name(&self) -> Option<&'a str> {
        self.str_field(NAME_FIELD)
    }

    pub fn open_id_connect_url(&self) -> Option<&'a str> {
        self.str_field(OPEN_ID_CONNECT_URL_FIELD)
    }

    pub fn flows(&self) -> Vec<(&'a str, OAuthFlow<'a>)> {
        self.entries(FLOWS_FIELD)
            .into_iter()
            .filter(|(_, flow)| flow.is_object())
            .map(|(name, flow)| (name, OAuthFlow::new(flow)))
            .collect()
    }
}

impl<'a> OAuthFlow<'a> {
    pub fn authorization_url(&self) -> Option<&'a str> {
        self.str_field(AUTHORIZATION_URL_FIELD)
    }

    pub fn token_url(&self) -> Option<&'a str> {
        self.str_field(TOKEN_URL_FIELD)
    }

    pub fn refresh_url(&self) -> Option<&'a str> {
        self.str_field(REFRESH_URL_FIELD)
    }

    /// Scope names with their descriptions.
    pub fn scopes(&self) -> Vec<(&'a str, Option<&'a str>)> {
        self.entries(SCOPES_FIELD)
            .into_iter()
            .map(|(scope, description)| (scope, description.as_str().filter(|d| !d.is_empty())))
            .collect()
    }
}
