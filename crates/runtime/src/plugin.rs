//! Per-operation runtime configuration.

use crate::{
    error::InterceptorError,
    interceptor::{Interceptor, SharedInterceptor},
    request::HttpRequest,
};

/// Runtime configuration of one generated operation.
///
/// Generated `runtime_config` functions build one of these and register
/// whatever interceptors the operation's traits call for. The surrounding
/// pipeline then runs the registered hooks against each outgoing request
/// with [`Self::apply_before_transmit`].
#[derive(Clone, Debug, Default)]
pub struct OperationRuntimeConfig {
    interceptors: Vec<SharedInterceptor>,
}

impl OperationRuntimeConfig {
    /// Creates an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `interceptor` at the end of the hook order.
    ///
    /// Hooks run in registration order. Registering an interceptor twice
    /// runs it twice; callers that need deduplication do it themselves.
    pub fn register_interceptor(&mut self, interceptor: impl Interceptor + 'static) {
        self.interceptors.push(SharedInterceptor::new(interceptor));
    }

    /// The registered interceptors, in registration order.
    pub fn interceptors(&self) -> &[SharedInterceptor] {
        &self.interceptors
    }

    /// Runs every pre-transmission hook against `request`.
    ///
    /// All `modify_before_transmit` hooks run first, then all
    /// `read_before_transmit` hooks, each pass in registration order, so
    /// read hooks observe the final request. The first failing hook aborts
    /// the run and the pipeline must not transmit the request.
    pub fn apply_before_transmit(
        &self,
        request: &mut HttpRequest,
    ) -> Result<(), InterceptorError> {
        for interceptor in &self.interceptors {
            trace!(interceptor = interceptor.name(), "running modify_before_transmit");
            interceptor.modify_before_transmit(request).map_err(|source| {
                InterceptorError::new(interceptor.name(), "modify_before_transmit", source)
            })?;
        }
        for interceptor in &self.interceptors {
            trace!(interceptor = interceptor.name(), "running read_before_transmit");
            interceptor.read_before_transmit(request).map_err(|source| {
                InterceptorError::new(interceptor.name(), "read_before_transmit", source)
            })?;
        }
        Ok(())
    }
}
