//! # swage-codegen
//!
//! Generates per-operation client modules from a service model. Behavior
//! that depends on trait annotations is contributed by customizations:
//! independent, stateless units that are asked, section by section, what
//! code they add to an operation's generated module.

#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

#[macro_use]
extern crate tracing;

pub mod customizations;
mod customize;
mod error;
mod generator;
mod section;
mod writer;

pub use customize::OperationCustomization;
pub use error::CodegenError;
pub use generator::{ClientGenerator, GeneratedModule, OperationGenerator};
pub use section::OperationSection;
pub use writer::{CodeFragment, RustWriter};
