use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Trait annotations the generator understands.
///
/// The set is closed: a model document carrying an annotation outside it
/// fails to load.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TraitId {
    /// Requests of the annotated operation must carry a `Content-MD5` header.
    HttpChecksumRequired,
    /// The annotated member's content is delivered incrementally instead of
    /// fully buffered.
    Streaming,
}

/// The trait annotations attached to one shape or member.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TraitSet(BTreeSet<TraitId>);

impl TraitSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// True if `trait_id` is attached.
    pub fn contains(&self, trait_id: TraitId) -> bool {
        self.0.contains(&trait_id)
    }

    /// Attaches `trait_id`. Attaching an already present trait is a no-op.
    pub fn insert(&mut self, trait_id: TraitId) {
        self.0.insert(trait_id);
    }

    /// True if no traits are attached.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates the attached traits in their natural order.
    pub fn iter(&self) -> impl Iterator<Item = TraitId> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<TraitId> for TraitSet {
    fn from_iter<I: IntoIterator<Item = TraitId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<TraitId> for TraitSet {
    fn extend<I: IntoIterator<Item = TraitId>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_uses_snake_case_names() {
        let set: TraitSet = [TraitId::Streaming, TraitId::HttpChecksumRequired].into_iter().collect();
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"["http_checksum_required","streaming"]"#);
        assert_eq!(serde_json::from_str::<TraitSet>(&json).unwrap(), set);
    }

    #[test]
    fn unknown_trait_fails_to_load() {
        assert!(serde_json::from_str::<TraitSet>(r#"["md5_required"]"#).is_err());
    }

    #[test]
    fn display_matches_the_document_form() {
        assert_eq!(TraitId::HttpChecksumRequired.to_string(), "http_checksum_required");
        assert_eq!(TraitId::Streaming.to_string(), "streaming");
    }

    #[test]
    fn insert_is_idempotent() {
        let mut set = TraitSet::new();
        set.insert(TraitId::Streaming);
        set.insert(TraitId::Streaming);
        assert_eq!(set.iter().count(), 1);
        assert!(set.contains(TraitId::Streaming));
        assert!(!set.contains(TraitId::HttpChecksumRequired));
    }
}
