//! # swage-runtime
//!
//! Client runtime referenced by generated operation modules: HTTP request
//! and body types, the pre-transmission interceptor pipeline, and the
//! `Content-MD5` enforcement interceptor.
//!
//! Generated code depends on this crate by path, so the surface here moves
//! in lockstep with what `swage-codegen` emits.

#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

#[macro_use]
extern crate tracing;

pub mod body;
pub mod checksum;
pub mod error;
pub mod interceptor;
pub mod plugin;
pub mod request;

pub use body::Body;
pub use error::{BoxError, BuildError, InterceptorError};
pub use interceptor::{Interceptor, SharedInterceptor};
pub use plugin::OperationRuntimeConfig;
pub use request::HttpRequest;
