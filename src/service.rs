use crate::routes::RouteCollection;
use bytes::Bytes;
use http::{Request, Response};
use http_body_util::Full;
use hyper::body::Incoming;
use hyper::service::Service;
use std::convert::Infallible;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// A `hyper` service answering documentation routes from a shared registry.
#[derive(Clone)]
pub struct LlmsService {
    routes: Arc<RouteCollection<String>>,
}

impl LlmsService {
    pub fn new(routes: Arc<RouteCollection<String>>) -> Self {
        Self { routes }
    }

    pub fn routes(&self) -> &RouteCollection<String> {
        &self.routes
    }
}

impl Service<Request<Incoming>> for LlmsService {
    type Response = Response<Full<Bytes>>;
    type Error = Infallible;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn call(&self, request: Request<Incoming>) -> Self::Future {
        let routes = self.routes.clone();
        // The body is never read.
        let (parts, _) = request.into_parts();
        let request = Request::from_parts(parts, ());
        Box::pin(async move { Ok(routes.serve(&request).await) })
    }
}
