//! Generation-time failures.

use swage_model::ShapeId;

/// A configuration error raised while generating an operation module.
///
/// These are build-time failures: they abort generation of the offending
/// operation before any of its code is assembled, and drivers treat them as
/// fatal to the whole run.
#[derive(Debug, thiserror::Error)]
pub enum CodegenError {
    /// The checksum-required trait was combined with a streaming input.
    #[error("cannot apply checksum-required to `{operation}`: its input is a streaming shape")]
    ChecksumOnStreamingInput {
        /// The offending operation.
        operation: ShapeId,
    },
    /// An operation references a shape the model does not define.
    #[error("operation `{operation}` references undefined shape `{shape}`")]
    UnresolvedShape {
        /// The referencing operation.
        operation: ShapeId,
        /// The missing shape.
        shape: ShapeId,
    },
}
