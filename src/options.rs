use crate::error::ConfigError;
use crate::handler::LlmsTxtHandler;
use crate::source::SpecSource;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

const FILE_SOURCE: &str = "file";
const URL_SOURCE: &str = "url";

/// Where a specification comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    File,
    Url,
}

impl SourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::File => FILE_SOURCE,
            SourceKind::Url => URL_SOURCE,
        }
    }
}

impl Display for SourceKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The `source` block of the handler options.
///
/// Both locations are optional on the wire; the one matching `type` is
/// checked by [`SourceOptions::resolve`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceOptions {
    #[serde(rename = "type")]
    pub kind: SourceKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl SourceOptions {
    pub fn file(path: impl Into<String>) -> Self {
        Self {
            kind: SourceKind::File,
            file: Some(path.into()),
            url: None,
        }
    }

    pub fn url(url: impl Into<String>) -> Self {
        Self {
            kind: SourceKind::Url,
            file: None,
            url: Some(url.into()),
        }
    }

    /// Checks that the location required by `kind` is present.
    ///
    /// # Returns
    /// The concrete source, or `ConfigError::MissingField` naming the absent field.
    pub fn resolve(&self) -> Result<SpecSource, ConfigError> {
        match self.kind {
            SourceKind::File => match self.file.as_deref().filter(|path| !path.is_empty()) {
                Some(path) => Ok(SpecSource::File(PathBuf::from(path))),
                None => Err(ConfigError::missing_field(FILE_SOURCE, self.kind.as_str())),
            },
            SourceKind::Url => match self.url.as_deref().filter(|url| !url.is_empty()) {
                Some(url) => Ok(SpecSource::Url(url.to_string())),
                None => Err(ConfigError::missing_field(URL_SOURCE, self.kind.as_str())),
            },
        }
    }
}

/// The media type the generated document is served as.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentType {
    #[default]
    #[serde(rename = "text/markdown")]
    Markdown,
    #[serde(rename = "text/plain")]
    Plain,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Markdown => "text/markdown",
            ContentType::Plain => "text/plain",
        }
    }

    /// The full `content-type` header value, always with `charset=utf-8`.
    pub fn header_value(&self) -> &'static str {
        match self {
            ContentType::Markdown => "text/markdown; charset=utf-8",
            ContentType::Plain => "text/plain; charset=utf-8",
        }
    }
}

impl Display for ContentType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Options for one documentation route.
///
/// A relative URL source is resolved against `base_url` when one is set.
/// Without it, the origin of the incoming request (`http://{Host}`) is only
/// used when `trust_host_header` is enabled; otherwise a relative source
/// fails to load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LlmsOptions {
    pub source: SourceOptions,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<String>,
    #[serde(default)]
    pub content_type: ContentType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(default)]
    pub trust_host_header: bool,
}

impl LlmsOptions {
    pub fn new(source: SourceOptions) -> Self {
        Self {
            source,
            header: None,
            footer: None,
            content_type: ContentType::default(),
            base_url: None,
            trust_host_header: false,
        }
    }
}

/// Fluent construction of an [`LlmsTxtHandler`].
#[derive(Debug, Default)]
pub struct LlmsOptionsBuilder {
    source: Option<SourceOptions>,
    header: Option<String>,
    footer: Option<String>,
    content_type: ContentType,
    base_url: Option<String>,
    trust_host_header: bool,
}

impl LlmsOptionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_file(mut self, path: impl Into<String>) -> Self {
        self.source = Some(SourceOptions::file(path));
        self
    }

    pub fn from_url(mut self, url: impl Into<String>) -> Self {
        self.source = Some(SourceOptions::url(url));
        self
    }

    pub fn source(mut self, source: SourceOptions) -> Self {
        self.source = Some(source);
        self
    }

    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    pub fn footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    pub fn content_type(mut self, content_type: ContentType) -> Self {
        self.content_type = content_type;
        self
    }

    /// The trusted origin relative URL sources are resolved against.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Resolves relative URL sources against the request's `Host` header
    /// when no `base_url` is configured.
    pub fn trust_host_header(mut self, trust: bool) -> Self {
        self.trust_host_header = trust;
        self
    }

    pub fn options(self) -> Result<LlmsOptions, ConfigError> {
        let source = match self.source {
            None => return Err(ConfigError::MissingSource),
            Some(source) => source,
        };
        Ok(LlmsOptions {
            source,
            header: self.header,
            footer: self.footer,
            content_type: self.content_type,
            base_url: self.base_url,
            trust_host_header: self.trust_host_header,
        })
    }

    pub fn build(self) -> Result<LlmsTxtHandler, ConfigError> {
        LlmsTxtHandler::new(self.options()?)
    }
}
