//! Mandatory `Content-MD5` enforcement.
//!
//! Operations carrying the checksum-required trait get two enforcement
//! points wired in by the generator: a build step spliced into the request
//! builder and the [`HttpChecksumRequiredInterceptor`] registered in the
//! operation's runtime configuration. Both funnel into
//! [`insert_content_md5`].

use crate::{
    error::{BoxError, BuildError},
    interceptor::Interceptor,
    request::HttpRequest,
};
use base64::prelude::{Engine as _, BASE64_STANDARD};
use http::header::{HeaderName, HeaderValue};
use md5::{Digest, Md5};

/// Header carrying the base64-encoded MD5 digest of the request body.
pub const CONTENT_MD5: HeaderName = HeaderName::from_static("content-md5");

/// Computes the `content-md5` header value for `body`.
///
/// The value is the standard base64 encoding of the raw 16-byte MD5 digest
/// of the exact body bytes. Base64 output is always a valid header value;
/// if validation ever rejects it anyway the failure surfaces as a typed
/// [`BuildError`], not a panic.
pub fn content_md5(body: &[u8]) -> Result<HeaderValue, BuildError> {
    let checksum = <Md5 as Digest>::digest(body);
    let encoded = BASE64_STANDARD.encode(&checksum[..]);
    HeaderValue::from_str(&encoded)
        .map_err(|source| BuildError::invalid_header_value(CONTENT_MD5, source))
}

/// Inserts the computed `content-md5` header into `request`.
///
/// The body must be fully buffered; a streaming body yields
/// [`BuildError::UnbufferedBody`]. Any value previously held under
/// `content-md5` is replaced, leaving exactly one.
pub fn insert_content_md5(request: &mut HttpRequest) -> Result<(), BuildError> {
    let body = request.body().bytes().ok_or_else(BuildError::unbuffered_body)?;
    let checksum = content_md5(body)?;
    request.headers_mut().insert(CONTENT_MD5, checksum);
    Ok(())
}

/// Enforces the `content-md5` header on requests passing through it.
///
/// Stateless: one instance may serve any number of concurrently in-flight
/// requests. Generated `runtime_config` functions register one instance for
/// each operation carrying the checksum-required trait.
#[derive(Clone, Copy, Debug, Default)]
#[non_exhaustive]
pub struct HttpChecksumRequiredInterceptor;

impl HttpChecksumRequiredInterceptor {
    /// Creates the interceptor.
    pub fn new() -> Self {
        Self
    }
}

impl Interceptor for HttpChecksumRequiredInterceptor {
    fn name(&self) -> &'static str {
        "HttpChecksumRequiredInterceptor"
    }

    fn modify_before_transmit(&self, request: &mut HttpRequest) -> Result<(), BoxError> {
        insert_content_md5(request).map_err(BoxError::from)
    }
}
