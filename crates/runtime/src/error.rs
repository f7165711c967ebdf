//! Error types of the request pipeline.

use http::header::{HeaderName, InvalidHeaderValue};
use http::uri::InvalidUri;

/// Opaque boxed error, the failure type interceptor hooks report.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Failure to assemble an HTTP request.
///
/// Build errors are fatal to the request being assembled, never to the
/// process: the pipeline discards the request and surfaces the error.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BuildError {
    /// A fully buffered body was required but the body is streaming.
    #[error("request body is streaming where a fully buffered body is required")]
    UnbufferedBody,
    /// A computed header value was rejected by the header map.
    #[error("computed value for header `{name}` is not a valid header value")]
    InvalidHeaderValue {
        /// The header that rejected the value.
        name: HeaderName,
        source: InvalidHeaderValue,
    },
    /// The request URI failed to parse.
    #[error("invalid request uri `{uri}`")]
    InvalidUri {
        /// The rejected URI text.
        uri: String,
        source: InvalidUri,
    },
    /// Any other request-build failure.
    #[error(transparent)]
    Other(BoxError),
}

impl BuildError {
    /// A streaming body where a buffered one is required.
    pub fn unbuffered_body() -> Self {
        Self::UnbufferedBody
    }

    /// A header value rejected by the header map.
    pub fn invalid_header_value(name: HeaderName, source: InvalidHeaderValue) -> Self {
        Self::InvalidHeaderValue { name, source }
    }

    /// A URI that failed to parse.
    pub fn invalid_uri(uri: impl Into<String>, source: InvalidUri) -> Self {
        Self::InvalidUri { uri: uri.into(), source }
    }

    /// Any other request-build failure.
    pub fn other(source: impl Into<BoxError>) -> Self {
        Self::Other(source.into())
    }
}

/// An interceptor hook failed; the request is not transmitted.
#[derive(Debug, thiserror::Error)]
#[error("interceptor `{interceptor}` failed in `{hook}`")]
pub struct InterceptorError {
    interceptor: &'static str,
    hook: &'static str,
    source: BoxError,
}

impl InterceptorError {
    pub(crate) fn new(interceptor: &'static str, hook: &'static str, source: BoxError) -> Self {
        Self { interceptor, hook, source }
    }

    /// Name of the failing interceptor.
    pub fn interceptor(&self) -> &'static str {
        self.interceptor
    }

    /// Name of the failing hook.
    pub fn hook(&self) -> &'static str {
        self.hook
    }
}
