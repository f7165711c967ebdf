use crate::{OperationShape, ShapeId, StructureShape};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An indexed, read-only store of the shapes in one service model.
///
/// Shapes are keyed by their absolute [`ShapeId`]; iteration is in id order,
/// so anything derived from a model is reproducible across runs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Model {
    operations: BTreeMap<ShapeId, OperationShape>,
    structures: BTreeMap<ShapeId, StructureShape>,
}

impl Model {
    /// Builds a model from its shapes, rejecting duplicate ids.
    ///
    /// Ids are unique across shape kinds: an operation and a structure may
    /// not share one. References are not checked; an operation input may
    /// dangle and consumers must treat that as their own error condition.
    pub fn new(
        operations: impl IntoIterator<Item = OperationShape>,
        structures: impl IntoIterator<Item = StructureShape>,
    ) -> Result<Self, ModelError> {
        let mut model = Self::default();
        for operation in operations {
            let id = operation.id.clone();
            if model.operations.insert(id.clone(), operation).is_some() {
                return Err(ModelError::DuplicateShape { id });
            }
        }
        for structure in structures {
            let id = structure.id.clone();
            if model.operations.contains_key(&id)
                || model.structures.insert(id.clone(), structure).is_some()
            {
                return Err(ModelError::DuplicateShape { id });
            }
        }
        Ok(model)
    }

    /// Loads a model from a JSON model document.
    ///
    /// The document lists operations and structures directly:
    ///
    /// ```json
    /// {
    ///     "operations": [
    ///         {
    ///             "id": "test.smoke#PutRecord",
    ///             "input": "test.smoke#PutRecordInput",
    ///             "traits": ["http_checksum_required"]
    ///         }
    ///     ],
    ///     "structures": [
    ///         {
    ///             "id": "test.smoke#PutRecordInput",
    ///             "members": [{ "name": "payload" }]
    ///         }
    ///     ]
    /// }
    /// ```
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        let document: ModelDocument = serde_json::from_str(json)?;
        Self::new(document.operations, document.structures)
    }

    /// The operations of the model, in id order.
    pub fn operations(&self) -> impl Iterator<Item = &OperationShape> {
        self.operations.values()
    }

    /// Looks up an operation by id.
    pub fn operation(&self, id: &ShapeId) -> Option<&OperationShape> {
        self.operations.get(id)
    }

    /// Looks up a structure by id.
    pub fn structure(&self, id: &ShapeId) -> Option<&StructureShape> {
        self.structures.get(id)
    }
}

/// On-disk form of a model document.
#[derive(Debug, Default, Serialize, Deserialize)]
struct ModelDocument {
    #[serde(default)]
    operations: Vec<OperationShape>,
    #[serde(default)]
    structures: Vec<StructureShape>,
}

/// Failure to build or load a model.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// The model document is not valid JSON for the documented layout.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    /// Two shapes share one id.
    #[error("duplicate shape id `{id}` in model")]
    DuplicateShape {
        /// The id defined more than once.
        id: ShapeId,
    },
}
