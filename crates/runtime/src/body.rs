//! Request body representation.

use crate::error::BoxError;
use bytes::Bytes;
use std::fmt;

/// One chunk yielded by a streaming body.
pub type BodyChunk = Result<Bytes, BoxError>;

/// The body of an HTTP request.
///
/// A body is either fully buffered in memory or streamed as a sequence of
/// byte chunks. Whether the full contents are available up front is an
/// explicit, checkable capability: [`Self::bytes`] returns `None` for a
/// streaming body, and consumers that need the whole payload must turn that
/// into a typed error instead of assuming buffering.
pub struct Body {
    inner: Inner,
}

enum Inner {
    Buffered(Bytes),
    Streaming(Box<dyn Iterator<Item = BodyChunk> + Send>),
}

impl Body {
    /// An empty buffered body.
    pub fn empty() -> Self {
        Self { inner: Inner::Buffered(Bytes::new()) }
    }

    /// A streaming body drawing chunks from `stream`.
    pub fn streaming<S>(stream: S) -> Self
    where
        S: Iterator<Item = BodyChunk> + Send + 'static,
    {
        Self { inner: Inner::Streaming(Box::new(stream)) }
    }

    /// The body contents, if the body is fully buffered.
    ///
    /// Returns `None` exactly when [`Self::is_streaming`] is true.
    pub fn bytes(&self) -> Option<&[u8]> {
        match &self.inner {
            Inner::Buffered(bytes) => Some(bytes),
            Inner::Streaming(_) => None,
        }
    }

    /// True if the contents are delivered incrementally.
    pub fn is_streaming(&self) -> bool {
        matches!(self.inner, Inner::Streaming(_))
    }

    /// The total body size, when known up front.
    pub fn content_length(&self) -> Option<u64> {
        match &self.inner {
            Inner::Buffered(bytes) => Some(bytes.len() as u64),
            Inner::Streaming(_) => None,
        }
    }
}

impl Default for Body {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<Bytes> for Body {
    fn from(bytes: Bytes) -> Self {
        Self { inner: Inner::Buffered(bytes) }
    }
}

impl From<Vec<u8>> for Body {
    fn from(bytes: Vec<u8>) -> Self {
        Bytes::from(bytes).into()
    }
}

impl From<String> for Body {
    fn from(s: String) -> Self {
        Bytes::from(s).into()
    }
}

impl From<&'static str> for Body {
    fn from(s: &'static str) -> Self {
        Bytes::from_static(s.as_bytes()).into()
    }
}

impl From<&'static [u8]> for Body {
    fn from(bytes: &'static [u8]) -> Self {
        Bytes::from_static(bytes).into()
    }
}

impl fmt::Debug for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner {
            Inner::Buffered(bytes) => {
                f.debug_struct("Body").field("buffered", &bytes.len()).finish()
            }
            Inner::Streaming(_) => f.debug_struct("Body").field("streaming", &"..").finish(),
        }
    }
}
