use crate::traverser::TraverserError;
use std::fmt::{Display, Formatter};

/// Failures while acquiring a specification document.
///
/// Every variant keeps the origin (file path or URL) next to the text of the
/// underlying cause so the message is useful on its own at the request boundary.
#[derive(Debug)]
pub enum LoadError {
    /// The local file could not be read.
    ReadFile { path: String, cause: String },

    /// The file or response body was not valid JSON.
    ParseJson { origin: String, cause: String },

    /// The configured URL could not be parsed or resolved against the base.
    InvalidUrl { url: String, cause: String },

    /// The request could not be sent or the body could not be read.
    Fetch { url: String, cause: String },

    /// The server answered with a non-2xx status.
    HttpStatus { url: String, status: u16 },
}

impl LoadError {
    pub(crate) fn read_file<P, C>(path: &P, cause: &C) -> Self
    where
        P: ToString + ?Sized,
        C: ToString + ?Sized,
    {
        LoadError::ReadFile {
            path: path.to_string(),
            cause: cause.to_string(),
        }
    }

    pub(crate) fn parse_json<O, C>(origin: &O, cause: &C) -> Self
    where
        O: ToString + ?Sized,
        C: ToString + ?Sized,
    {
        LoadError::ParseJson {
            origin: origin.to_string(),
            cause: cause.to_string(),
        }
    }

    pub(crate) fn invalid_url<U, C>(url: &U, cause: &C) -> Self
    where
        U: ToString + ?Sized,
        C: ToString + ?Sized,
    {
        LoadError::InvalidUrl {
            url: url.to_string(),
            cause: cause.to_string(),
        }
    }

    pub(crate) fn fetch<U, C>(url: &U, cause: &C) -> Self
    where
        U: ToString + ?Sized,
        C: ToString + ?Sized,
    {
        LoadError::Fetch {
            url: url.to_string(),
            cause: cause.to_string(),
        }
    }

    pub(crate) fn http_status<U>(url: &U, status: u16) -> Self
    where
        U: ToString + ?Sized,
    {
        LoadError::HttpStatus {
            url: url.to_string(),
            status,
        }
    }
}

impl Display for LoadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::ReadFile { path, cause } => {
                write!(f, "Failed to read specification file '{}': {}", path, cause)
            }
            LoadError::ParseJson { origin, cause } => {
                write!(f, "Failed to parse specification from '{}': {}", origin, cause)
            }
            LoadError::InvalidUrl { url, cause } => {
                write!(f, "Invalid specification URL '{}': {}", url, cause)
            }
            LoadError::Fetch { url, cause } => {
                write!(f, "Failed to fetch specification from '{}': {}", url, cause)
            }
            LoadError::HttpStatus { url, status } => {
                write!(
                    f,
                    "Failed to fetch specification from '{}': HTTP status {}",
                    url, status
                )
            }
        }
    }
}

impl std::error::Error for LoadError {}

/// Invalid handler options, reported before any I/O happens.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// A field required by the chosen source type was not set.
    MissingField { field: String, source_type: String },

    /// No specification source was provided to the builder.
    MissingSource,

    /// The configured base URL is not an absolute URL.
    InvalidBaseUrl { url: String, cause: String },
}

impl ConfigError {
    pub(crate) fn missing_field(field: impl Into<String>, source_type: impl Into<String>) -> Self {
        ConfigError::MissingField {
            field: field.into(),
            source_type: source_type.into(),
        }
    }

    pub(crate) fn invalid_base_url<U, C>(url: &U, cause: &C) -> Self
    where
        U: ToString + ?Sized,
        C: ToString + ?Sized,
    {
        ConfigError::InvalidBaseUrl {
            url: url.to_string(),
            cause: cause.to_string(),
        }
    }
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::MissingField { field, source_type } => {
                write!(
                    f,
                    "Field '{}' is required when the source type is '{}'",
                    field, source_type
                )
            }
            ConfigError::MissingSource => write!(f, "No specification source provided"),
            ConfigError::InvalidBaseUrl { url, cause } => {
                write!(f, "Invalid base URL '{}': {}", url, cause)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// The only conversion failure: a root value that is not a JSON object.
#[derive(Debug, PartialEq)]
pub enum ConversionError {
    RootNotObject(String),
}

impl From<TraverserError> for ConversionError {
    fn from(value: TraverserError) -> Self {
        match value {
            TraverserError::TypeMismatch { found, .. } => ConversionError::RootNotObject(found),
            other => ConversionError::RootNotObject(other.to_string()),
        }
    }
}

impl Display for ConversionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversionError::RootNotObject(found) => {
                write!(f, "Specification root must be an object, found {}", found)
            }
        }
    }
}

impl std::error::Error for ConversionError {}

/// Errors raised by the route registry.
#[derive(Debug, PartialEq)]
pub enum RouteError {
    /// No handler is registered for the route.
    RouteNotFound,
    /// A handler is already registered for the route.
    RouteAlreadyExists,
    /// The handler options for a new route were invalid.
    FailedToCreateHandler(ConfigError),
}

impl Display for RouteError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            RouteError::RouteNotFound => write!(f, "Route not found in collection"),
            RouteError::RouteAlreadyExists => write!(f, "Route already exists in collection"),
            RouteError::FailedToCreateHandler(err) => {
                write!(f, "Failed to create new handler: {}", err)
            }
        }
    }
}

impl std::error::Error for RouteError {}

/// Everything that can go wrong between receiving a request and producing the document.
#[derive(Debug)]
pub enum LlmsError {
    Config(ConfigError),
    Load(LoadError),
    Conversion(ConversionError),
}

impl From<ConfigError> for LlmsError {
    fn from(value: ConfigError) -> Self {
        LlmsError::Config(value)
    }
}

impl From<LoadError> for LlmsError {
    fn from(value: LoadError) -> Self {
        LlmsError::Load(value)
    }
}

impl From<ConversionError> for LlmsError {
    fn from(value: ConversionError) -> Self {
        LlmsError::Conversion(value)
    }
}

impl Display for LlmsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LlmsError::Config(err) => write!(f, "Configuration error: {}", err),
            LlmsError::Load(err) => write!(f, "Load error: {}", err),
            LlmsError::Conversion(err) => write!(f, "Conversion error: {}", err),
        }
    }
}

impl std::error::Error for LlmsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LlmsError::Config(err) => Some(err),
            LlmsError::Load(err) => Some(err),
            LlmsError::Conversion(err) => Some(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::error::{ConfigError, LlmsError, LoadError};

    #[test]
    fn test_load_error_keeps_origin_and_cause() {
        let err = LoadError::read_file("/tmp/spec.json", "No such file or directory");
        let message = err.to_string();
        assert!(message.contains("/tmp/spec.json"));
        assert!(message.contains("No such file or directory"));
    }

    #[test]
    fn test_http_status_error_message() {
        let err = LoadError::http_status("http://localhost/openapi.json", 404);
        assert_eq!(
            err.to_string(),
            "Failed to fetch specification from 'http://localhost/openapi.json': HTTP status 404"
        );
    }

    #[test]
    fn test_llms_error_wraps_config_error() {
        let err: LlmsError = ConfigError::missing_field("file", "file").into();
        assert!(matches!(err, LlmsError::Config(_)));
        assert_eq!(
            err.to_string(),
            "Configuration error: Field 'file' is required when the source type is 'file'"
        );
    }
}
