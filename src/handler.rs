use crate::error::{ConfigError, LlmsError};
use crate::markdown::MarkdownConverter;
use crate::options::{ContentType, LlmsOptions, LlmsOptionsBuilder};
use crate::source::SpecSource;
use bytes::Bytes;
use http::header::CONTENT_TYPE;
use http::{HeaderValue, Response, StatusCode};
use http_body_util::Full;
use url::Url;

const DOCUMENT_SEPARATOR: &str = "\n\n";
const ERROR_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

/// Joins the optional header, the converted body and the optional footer.
///
/// Absent or empty parts are skipped, so no stray blank lines are produced.
pub fn compose_document(header: Option<&str>, body: &str, footer: Option<&str>) -> String {
    [header, Some(body), footer]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(DOCUMENT_SEPARATOR)
}

/// Serves one documentation route: load, convert, compose, respond.
///
/// Holds no specification between requests; every call re-acquires the
/// document from its source.
#[derive(Debug)]
pub struct LlmsTxtHandler {
    source: SpecSource,
    header: Option<String>,
    footer: Option<String>,
    content_type: ContentType,
    base_url: Option<String>,
    trust_host_header: bool,
    client: reqwest::Client,
}

impl LlmsTxtHandler {
    /// Validates the options and creates the handler. No I/O happens here.
    ///
    /// # Parameters
    /// * `options` - The route options; the source block and `base_url` are checked.
    ///
    /// # Returns
    /// The handler, or `ConfigError` for a missing `file`/`url` or a base URL
    /// that is not absolute.
    pub fn new(options: LlmsOptions) -> Result<Self, ConfigError> {
        let source = options.source.resolve()?;
        if let Some(base_url) = &options.base_url {
            Url::parse(base_url).map_err(|e| ConfigError::invalid_base_url(base_url, &e))?;
        }
        Ok(Self {
            source,
            header: options.header,
            footer: options.footer,
            content_type: options.content_type,
            base_url: options.base_url,
            trust_host_header: options.trust_host_header,
            client: reqwest::Client::new(),
        })
    }

    pub fn builder() -> LlmsOptionsBuilder {
        LlmsOptionsBuilder::new()
    }

    pub fn source(&self) -> &SpecSource {
        &self.source
    }

    pub fn content_type(&self) -> ContentType {
        self.content_type
    }

    /// The origin relative URL sources are resolved against.
    ///
    /// The configured base URL wins; the request origin is only used when the
    /// handler was told to trust the `Host` header.
    fn trusted_base<'a>(&'a self, request_base: Option<&'a str>) -> Option<&'a str> {
        match &self.base_url {
            Some(base_url) => Some(base_url.as_str()),
            None if self.trust_host_header => request_base,
            None => None,
        }
    }

    /// Produces the full document for a request.
    ///
    /// # Parameters
    /// * `request_base` - The origin of the request, as derived from its `Host` header.
    ///
    /// # Returns
    /// The composed document, or the first load or conversion error.
    pub async fn render(&self, request_base: Option<&str>) -> Result<String, LlmsError> {
        let base = self.trusted_base(request_base);
        let specification = self.source.load(&self.client, base).await?;
        let converter = MarkdownConverter::new(specification)?;
        let body = converter.convert();
        Ok(compose_document(
            self.header.as_deref(),
            &body,
            self.footer.as_deref(),
        ))
    }

    /// Renders the document into an HTTP response.
    ///
    /// # Parameters
    /// * `request_base` - The origin of the request, see [`LlmsTxtHandler::render`].
    ///
    /// # Returns
    /// `200` with the configured content type, or `500` with a plain-text
    /// message when loading or conversion fails.
    pub async fn respond(&self, request_base: Option<&str>) -> Response<Full<Bytes>> {
        match self.render(request_base).await {
            Ok(document) => text_response(StatusCode::OK, self.content_type.header_value(), document),
            Err(e) => {
                log::error!("Failed to generate documentation from {}: {}", self.source, e);
                text_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ERROR_CONTENT_TYPE,
                    format!("Failed to generate documentation: {}", e),
                )
            }
        }
    }
}

pub(crate) fn text_response(
    status: StatusCode,
    content_type: &'static str,
    body: impl Into<Bytes>,
) -> Response<Full<Bytes>> {
    let mut response = Response::new(Full::new(body.into()));
    *response.status_mut() = status;
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
    response
}
