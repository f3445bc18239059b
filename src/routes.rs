use crate::error::RouteError;
use crate::handler::{LlmsTxtHandler, text_response};
use crate::options::LlmsOptions;
use bytes::Bytes;
use dashmap::{DashMap, Entry, VacantEntry};
use http::header::{ALLOW, HOST};
use http::{HeaderValue, Method, Request, Response, StatusCode};
use http_body_util::Full;
use std::borrow::Borrow;
use std::hash::Hash;
use std::sync::Arc;

const ALLOWED_METHODS: &str = "GET, HEAD";
const PLAIN_TEXT: &str = "text/plain; charset=utf-8";

/// A concurrent registry of documentation handlers keyed by route.
pub struct RouteCollection<K> {
    routes: DashMap<K, Arc<LlmsTxtHandler>>,
}

impl<K> Default for RouteCollection<K>
where
    K: Hash + Eq,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K> RouteCollection<K>
where
    K: Hash + Eq,
{
    pub fn new() -> Self {
        RouteCollection {
            routes: DashMap::new(),
        }
    }

    /// Builds a handler from `options` and registers it under `id`.
    ///
    /// Options are only validated when the route is free.
    ///
    /// # Parameters
    /// * `id` - The route the handler answers, usually a request path.
    /// * `options` - The handler options.
    ///
    /// # Returns
    /// The registered handler, `RouteAlreadyExists` when `id` is taken, or
    /// `FailedToCreateHandler` when the options are invalid.
    pub fn insert(&self, id: K, options: LlmsOptions) -> Result<Arc<LlmsTxtHandler>, RouteError> {
        match self.routes.entry(id) {
            Entry::Occupied(_) => Err(RouteError::RouteAlreadyExists),
            Entry::Vacant(entry) => Self::create_handler(entry, options),
        }
    }

    /// Registers an already built handler under `id`.
    ///
    /// # Parameters
    /// * `id` - The route the handler answers.
    /// * `handler` - A handler built with [`LlmsTxtHandler::new`] or its builder.
    ///
    /// # Returns
    /// The shared handler, or `RouteAlreadyExists` when `id` is taken.
    pub fn insert_handler(
        &self,
        id: K,
        handler: LlmsTxtHandler,
    ) -> Result<Arc<LlmsTxtHandler>, RouteError> {
        match self.routes.entry(id) {
            Entry::Occupied(_) => Err(RouteError::RouteAlreadyExists),
            Entry::Vacant(entry) => {
                let handler = Arc::new(handler);
                entry.insert(handler.clone());
                Ok(handler)
            }
        }
    }

    /// Builds the handler and fills the vacant entry with it.
    ///
    /// # Parameters
    /// * `entry` - The reserved slot for the route.
    /// * `options` - The handler options.
    ///
    /// # Returns
    /// The shared handler, or `FailedToCreateHandler` wrapping the config error.
    fn create_handler(
        entry: VacantEntry<K, Arc<LlmsTxtHandler>>,
        options: LlmsOptions,
    ) -> Result<Arc<LlmsTxtHandler>, RouteError> {
        match LlmsTxtHandler::new(options) {
            Ok(handler) => {
                log::debug!("Registered documentation route for {}", handler.source());
                let handler = Arc::new(handler);
                entry.insert(handler.clone());
                Ok(handler)
            }
            Err(e) => Err(RouteError::FailedToCreateHandler(e)),
        }
    }

    /// Looks up the handler registered under `id`.
    ///
    /// # Parameters
    /// * `id` - The route, in any form `K` borrows as.
    ///
    /// # Returns
    /// The shared handler or `RouteNotFound`.
    pub fn get<Q>(&self, id: &Q) -> Result<Arc<LlmsTxtHandler>, RouteError>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match self.routes.get(id) {
            Some(handler) => Ok(Arc::clone(handler.value())),
            None => Err(RouteError::RouteNotFound),
        }
    }

    /// Unregisters the handler under `id`.
    ///
    /// # Parameters
    /// * `id` - The route to remove.
    ///
    /// # Returns
    /// `RouteNotFound` when nothing was registered under `id`.
    pub fn remove<Q>(&self, id: &Q) -> Result<(), RouteError>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        if self.routes.remove(id).is_none() {
            return Err(RouteError::RouteNotFound);
        }
        Ok(())
    }

    /// # Parameters
    /// * `id` - The route to check.
    ///
    /// # Returns
    /// Whether a handler is registered under `id`.
    pub fn contains<Q>(&self, id: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.routes.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn clear(&self) {
        self.routes.clear();
        log::debug!("Cleared documentation routes");
    }
}

impl<K> RouteCollection<K>
where
    K: Hash + Eq + Borrow<str>,
{
    /// Answers a request by the handler registered for its path.
    ///
    /// Unknown paths are `404`. Registered paths only accept `GET` and `HEAD`;
    /// anything else is `405` with an `allow` header. A `HEAD` response keeps
    /// the headers of the `GET` response and drops the body.
    ///
    /// # Parameters
    /// * `request` - The incoming request; only its method, path and `Host`
    ///   header are read.
    ///
    /// # Returns
    /// The response to send. Failures are reported as status codes.
    pub async fn serve<B>(&self, request: &Request<B>) -> Response<Full<Bytes>> {
        let path = request.uri().path();
        let handler = match self.get(path) {
            Ok(handler) => handler,
            Err(_) => {
                log::debug!("No documentation route for '{}'", path);
                return text_response(StatusCode::NOT_FOUND, PLAIN_TEXT, "Not Found");
            }
        };

        let method = request.method();
        if method != Method::GET && method != Method::HEAD {
            let mut response =
                text_response(StatusCode::METHOD_NOT_ALLOWED, PLAIN_TEXT, "Method Not Allowed");
            response
                .headers_mut()
                .insert(ALLOW, HeaderValue::from_static(ALLOWED_METHODS));
            return response;
        }

        let base = request_base(request);
        let response = handler.respond(base.as_deref()).await;
        if method == Method::HEAD {
            let (parts, _) = response.into_parts();
            return Response::from_parts(parts, Full::new(Bytes::new()));
        }
        response
    }
}

/// The origin of a request as seen through its `Host` header.
///
/// The handler only resolves relative sources against it when it was
/// configured to trust the header.
///
/// # Parameters
/// * `request` - The incoming request.
///
/// # Returns
/// `http://{Host}`, or `None` without a usable `Host` header.
fn request_base<B>(request: &Request<B>) -> Option<String> {
    request
        .headers()
        .get(HOST)
        .and_then(|host| host.to_str().ok())
        .filter(|host| !host.is_empty())
        .map(|host| format!("http://{}", host))
}
