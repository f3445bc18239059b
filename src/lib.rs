pub mod error;
pub mod handler;
pub mod markdown;
pub mod options;
pub mod routes;
#[cfg(feature = "hyper")]
pub mod service;
pub mod source;
pub mod traverser;
pub mod types;

pub use error::{ConfigError, ConversionError, LlmsError, LoadError, RouteError};
pub use handler::{LlmsTxtHandler, compose_document};
pub use markdown::MarkdownConverter;
pub use options::{ContentType, LlmsOptions, LlmsOptionsBuilder, SourceKind, SourceOptions};
pub use routes::RouteCollection;
#[cfg(feature = "hyper")]
pub use service::LlmsService;
pub use source::SpecSource;

const INFO_FIELD: &str = "info";
const TITLE_FIELD: &str = "title";
const VERSION_FIELD: &str = "version";
const DESCRIPTION_FIELD: &str = "description";
const SUMMARY_FIELD: &str = "summary";
const CONTACT_FIELD: &str = "contact";
const LICENSE_FIELD: &str = "license";
const EXTERNAL_DOCS_FIELD: &str = "externalDocs";
const SERVERS_FIELD: &str = "servers";
const VARIABLES_FIELD: &str = "variables";
const DEFAULT_FIELD: &str = "default";
const SECURITY_FIELD: &str = "security";
const TAGS_FIELD: &str = "tags";
const PATHS_FIELD: &str = "paths";
const WEBHOOKS_FIELD: &str = "webhooks";
const COMPONENTS_FIELD: &str = "components";
const PARAMETERS_FIELD: &str = "parameters";
const REQUEST_BODY_FIELD: &str = "requestBody";
const RESPONSES_FIELD: &str = "responses";
const CALLBACKS_FIELD: &str = "callbacks";
const HEADERS_FIELD: &str = "headers";
const CONTENT_FIELD: &str = "content";
const SCHEMA_FIELD: &str = "schema";
const ITEMS_FIELD: &str = "items";
const TYPE_FIELD: &str = "type";
const REF_FIELD: &str = "$ref";
const NAME_FIELD: &str = "name";
const IN_FIELD: &str = "in";
const REQUIRED_FIELD: &str = "required";
const DEPRECATED_FIELD: &str = "deprecated";
const OPERATION_ID_FIELD: &str = "operationId";
const URL_FIELD: &str = "url";
const EMAIL_FIELD: &str = "email";
const PATH_SEPARATOR: &str = "/";
