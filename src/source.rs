use crate::error::LoadError;
use serde_json::Value;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use url::Url;

/// A validated location of a specification document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecSource {
    File(PathBuf),
    Url(String),
}

impl SpecSource {
    /// Reads or fetches the specification and parses it as JSON.
    ///
    /// # Parameters
    /// * `client` - The HTTP client used for URL sources.
    /// * `base` - The trusted origin a relative URL source is resolved
    ///   against. Ignored for file sources.
    ///
    /// # Returns
    /// The parsed document, or the `LoadError` of the failing step.
    pub async fn load(
        &self,
        client: &reqwest::Client,
        base: Option<&str>,
    ) -> Result<Value, LoadError> {
        log::debug!("Loading specification from {}", self);
        let specification = match self {
            SpecSource::File(path) => Self::load_file(path).await?,
            SpecSource::Url(url) => {
                let url = Self::resolve_url(url, base)?;
                Self::fetch(client, url).await?
            }
        };
        log::debug!("Loaded specification from {}", self);
        Ok(specification)
    }

    /// # Parameters
    /// * `path` - The file to read.
    ///
    /// # Returns
    /// The parsed document, `ReadFile` when the file cannot be read, or
    /// `ParseJson` when it is not JSON.
    async fn load_file(path: &Path) -> Result<Value, LoadError> {
        let content = match tokio::fs::read_to_string(path).await {
            Ok(content) => content,
            Err(e) => return Err(LoadError::read_file(&path.display(), &e)),
        };
        serde_json::from_str(&content).map_err(|e| LoadError::parse_json(&path.display(), &e))
    }

    /// Resolves a possibly relative URL against `base`.
    ///
    /// Absolute URLs are returned as they are; a relative URL without a base
    /// is an `InvalidUrl` error.
    ///
    /// # Parameters
    /// * `url` - The configured source URL.
    /// * `base` - The origin to join a relative `url` onto.
    ///
    /// # Returns
    /// The absolute URL to fetch, or `InvalidUrl`.
    pub fn resolve_url(url: &str, base: Option<&str>) -> Result<Url, LoadError> {
        match Url::parse(url) {
            Ok(absolute) => Ok(absolute),
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                let base = match base {
                    None => return Err(LoadError::invalid_url(url, "relative URL without a base")),
                    Some(base) => base,
                };
                let base = Url::parse(base).map_err(|e| LoadError::invalid_url(base, &e))?;
                base.join(url).map_err(|e| LoadError::invalid_url(url, &e))
            }
            Err(e) => Err(LoadError::invalid_url(url, &e)),
        }
    }

    /// Fetches `url` and parses the body as JSON.
    ///
    /// # Parameters
    /// * `client` - The HTTP client.
    /// * `url` - The absolute URL of the document.
    ///
    /// # Returns
    /// The parsed document, `Fetch` on transport errors, `HttpStatus` for a
    /// non-2xx response, or `ParseJson` for a malformed body.
    async fn fetch(client: &reqwest::Client, url: Url) -> Result<Value, LoadError> {
        let response = match client.get(url.clone()).send().await {
            Ok(response) => response,
            Err(e) => return Err(LoadError::fetch(url.as_str(), &e)),
        };
        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::http_status(url.as_str(), status.as_u16()));
        }
        let body = match response.bytes().await {
            Ok(body) => body,
            Err(e) => return Err(LoadError::fetch(url.as_str(), &e)),
        };
        serde_json::from_slice(&body).map_err(|e| LoadError::parse_json(url.as_str(), &e))
    }
}

impl Display for SpecSource {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SpecSource::File(path) => write!(f, "file '{}'", path.display()),
            SpecSource::Url(url) => write!(f, "url '{}'", url),
        }
    }
}
