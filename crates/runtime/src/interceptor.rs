//! Pipeline hooks run against requests before transmission.

use crate::{error::BoxError, request::HttpRequest};
use std::{fmt, ops::Deref, sync::Arc};

/// A hook injected into the request pipeline immediately before
/// transmission.
///
/// Interceptors hold no per-request state: one instance may serve any
/// number of concurrently in-flight requests, and every hook receives the
/// request it operates on as an argument. Hooks default to no-ops so an
/// implementation overrides only the points it cares about.
pub trait Interceptor: fmt::Debug + Send + Sync {
    /// The name of this interceptor, used in error messages and logs.
    fn name(&self) -> &'static str;

    /// Mutates the request immediately before transmission.
    ///
    /// An error aborts the pipeline; the request is never transmitted.
    fn modify_before_transmit(&self, request: &mut HttpRequest) -> Result<(), BoxError> {
        let _ = request;
        Ok(())
    }

    /// Observes the final request immediately before transmission.
    ///
    /// Runs after every [`Self::modify_before_transmit`] hook has finished,
    /// so the request can no longer change.
    fn read_before_transmit(&self, request: &HttpRequest) -> Result<(), BoxError> {
        let _ = request;
        Ok(())
    }
}

/// A shareable, reference-counted [`Interceptor`].
#[derive(Clone, Debug)]
pub struct SharedInterceptor(Arc<dyn Interceptor>);

impl SharedInterceptor {
    /// Wraps `interceptor` for shared ownership.
    pub fn new(interceptor: impl Interceptor + 'static) -> Self {
        Self(Arc::new(interceptor))
    }
}

impl Deref for SharedInterceptor {
    type Target = dyn Interceptor;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}
