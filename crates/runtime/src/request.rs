//! The HTTP request type mutated by generated builders and interceptors.

use crate::{body::Body, error::BuildError};
use http::{HeaderMap, Method, Uri};

/// An outgoing HTTP request under construction.
///
/// The request is exclusively owned by the pipeline assembling it; nothing
/// here is shared. Mutation happens either directly through the accessors or
/// transactionally through [`Self::augment`], which generated request
/// builders use to splice in trait-driven build steps.
#[derive(Debug, Default)]
pub struct HttpRequest {
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Body,
}

impl HttpRequest {
    /// Creates a request from its parts, parsing `uri`.
    pub fn new(method: Method, uri: impl AsRef<str>, body: Body) -> Result<Self, BuildError> {
        let uri = uri
            .as_ref()
            .parse::<Uri>()
            .map_err(|source| BuildError::invalid_uri(uri.as_ref(), source))?;
        Ok(Self { method, uri, headers: HeaderMap::new(), body })
    }

    /// Creates a GET request with an empty body.
    pub fn get(uri: impl AsRef<str>) -> Result<Self, BuildError> {
        Self::new(Method::GET, uri, Body::empty())
    }

    /// Creates a POST request carrying `body`.
    pub fn post(uri: impl AsRef<str>, body: impl Into<Body>) -> Result<Self, BuildError> {
        Self::new(Method::POST, uri, body.into())
    }

    /// The request method.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// The request URI.
    pub fn uri(&self) -> &Uri {
        &self.uri
    }

    /// The request headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Mutable access to the request headers.
    ///
    /// `HeaderMap::insert` replaces every previously held value under the
    /// inserted name, which is what gives checksum insertion its overwrite
    /// semantics.
    pub fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    /// The request body.
    pub fn body(&self) -> &Body {
        &self.body
    }

    /// Mutable access to the request body.
    pub fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    /// Consumes the request, returning its body.
    pub fn into_body(self) -> Body {
        self.body
    }

    /// Applies a fallible build step to the request.
    ///
    /// Generated builders chain one `augment` call per contributed build
    /// step; the first failing step aborts the build with its error.
    pub fn augment<F>(self, f: F) -> Result<Self, BuildError>
    where
        F: FnOnce(Self) -> Result<Self, BuildError>,
    {
        f(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_carries_the_body() {
        let request = HttpRequest::post("/PutRecord", "payload").unwrap();
        assert_eq!(request.method(), Method::POST);
        assert_eq!(request.uri().path(), "/PutRecord");
        assert_eq!(request.body().bytes(), Some(b"payload".as_slice()));
    }

    #[test]
    fn invalid_uri_is_a_typed_error() {
        let err = HttpRequest::get("not a uri").unwrap_err();
        assert!(matches!(err, BuildError::InvalidUri { .. }));
    }

    #[test]
    fn augment_threads_the_request_through() {
        let request = HttpRequest::post("/PutRecord", "payload")
            .unwrap()
            .augment(|mut req| {
                req.headers_mut().insert(
                    http::header::CONTENT_TYPE,
                    http::HeaderValue::from_static("application/octet-stream"),
                );
                Ok(req)
            })
            .unwrap();
        assert_eq!(request.headers()[http::header::CONTENT_TYPE], "application/octet-stream");
    }

    #[test]
    fn augment_propagates_build_errors() {
        let err = HttpRequest::post("/PutRecord", "payload")
            .unwrap()
            .augment(|_| Err(BuildError::unbuffered_body()))
            .unwrap_err();
        assert!(matches!(err, BuildError::UnbufferedBody));
    }
}
