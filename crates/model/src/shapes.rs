use crate::{Model, ShapeId, TraitId, TraitSet};
use serde::{Deserialize, Serialize};

/// One member of a structure shape.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberShape {
    /// Member name, unique within its structure.
    pub name: String,
    /// Annotations attached to the member.
    #[serde(default, skip_serializing_if = "TraitSet::is_empty")]
    pub traits: TraitSet,
}

impl MemberShape {
    /// Creates a member without annotations.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), traits: TraitSet::new() }
    }

    /// Attaches `trait_id` to the member.
    pub fn with_trait(mut self, trait_id: TraitId) -> Self {
        self.traits.insert(trait_id);
        self
    }

    /// True if the member carries `trait_id`.
    pub fn has_trait(&self, trait_id: TraitId) -> bool {
        self.traits.contains(trait_id)
    }
}

/// An aggregate shape holding named members.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructureShape {
    /// Absolute id of the structure.
    pub id: ShapeId,
    /// Members in declaration order.
    #[serde(default)]
    pub members: Vec<MemberShape>,
}

impl StructureShape {
    /// Creates a structure without members.
    pub fn new(id: ShapeId) -> Self {
        Self { id, members: Vec::new() }
    }

    /// Appends `member` to the structure.
    pub fn with_member(mut self, member: MemberShape) -> Self {
        self.members.push(member);
        self
    }

    /// True if any member carries the streaming trait.
    pub fn has_streaming_member(&self) -> bool {
        self.members.iter().any(|member| member.has_trait(TraitId::Streaming))
    }
}

/// One callable API operation with its input shape and annotations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationShape {
    /// Absolute id of the operation.
    pub id: ShapeId,
    /// Id of the input structure. The model does not check that the target
    /// exists; consumers must handle a dangling reference.
    pub input: ShapeId,
    /// Annotations attached to the operation.
    #[serde(default, skip_serializing_if = "TraitSet::is_empty")]
    pub traits: TraitSet,
}

impl OperationShape {
    /// Creates an operation without annotations.
    pub fn new(id: ShapeId, input: ShapeId) -> Self {
        Self { id, input, traits: TraitSet::new() }
    }

    /// Attaches `trait_id` to the operation.
    pub fn with_trait(mut self, trait_id: TraitId) -> Self {
        self.traits.insert(trait_id);
        self
    }

    /// True if the operation carries `trait_id`.
    pub fn has_trait(&self, trait_id: TraitId) -> bool {
        self.traits.contains(trait_id)
    }

    /// Resolves the operation's input structure in `model`, if defined.
    pub fn input_shape<'a>(&self, model: &'a Model) -> Option<&'a StructureShape> {
        model.structure(&self.input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> ShapeId {
        s.parse().unwrap()
    }

    #[test]
    fn streaming_member_detection() {
        let plain = StructureShape::new(id("test.smoke#PutRecordInput"))
            .with_member(MemberShape::new("payload"));
        assert!(!plain.has_streaming_member());

        let streaming = StructureShape::new(id("test.smoke#UploadInput"))
            .with_member(MemberShape::new("metadata"))
            .with_member(MemberShape::new("body").with_trait(TraitId::Streaming));
        assert!(streaming.has_streaming_member());
    }

    #[test]
    fn operation_traits() {
        let op = OperationShape::new(id("test.smoke#PutRecord"), id("test.smoke#PutRecordInput"))
            .with_trait(TraitId::HttpChecksumRequired);
        assert!(op.has_trait(TraitId::HttpChecksumRequired));
        assert!(!op.has_trait(TraitId::Streaming));
    }

    #[test]
    fn empty_traits_are_omitted_from_json() {
        let op = OperationShape::new(id("test.smoke#PutRecord"), id("test.smoke#PutRecordInput"));
        let json = serde_json::to_string(&op).unwrap();
        assert!(!json.contains("traits"));
    }
}
