//! # swage-model
//!
//! In-memory service model: shape identifiers, trait annotations, and the
//! operation and structure descriptors the client generator consumes.
//!
//! The model is read-only once built. It can be assembled programmatically
//! through the shape constructors or loaded from a JSON model document with
//! [`Model::from_json`].

#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

mod model;
mod shape_id;
mod shapes;
mod traits;

pub use model::{Model, ModelError};
pub use shape_id::{InvalidShapeId, ShapeId};
pub use shapes::{MemberShape, OperationShape, StructureShape};
pub use traits::{TraitId, TraitSet};
