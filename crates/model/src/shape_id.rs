use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Absolute identifier of a shape in the model, written `namespace#Name`.
///
/// The namespace is one or more dot-separated identifiers and the name is a
/// single identifier. Identifiers start with a letter or underscore and
/// continue with letters, digits, or underscores.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ShapeId {
    namespace: String,
    name: String,
}

impl ShapeId {
    /// Creates a shape id from its namespace and name parts.
    pub fn new(
        namespace: impl Into<String>,
        name: impl Into<String>,
    ) -> Result<Self, InvalidShapeId> {
        let (namespace, name) = (namespace.into(), name.into());
        validate(&namespace, &name)?;
        Ok(Self { namespace, name })
    }

    /// The namespace part, left of the `#`.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// The name part, right of the `#`.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.namespace, self.name)
    }
}

impl FromStr for ShapeId {
    type Err = InvalidShapeId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((namespace, name)) = s.split_once('#') else {
            return Err(InvalidShapeId::new(s, "missing `#` separator"));
        };
        Self::new(namespace, name)
    }
}

impl TryFrom<String> for ShapeId {
    type Error = InvalidShapeId;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<ShapeId> for String {
    fn from(id: ShapeId) -> Self {
        id.to_string()
    }
}

fn validate(namespace: &str, name: &str) -> Result<(), InvalidShapeId> {
    let id = || format!("{namespace}#{name}");
    if namespace.is_empty() {
        return Err(InvalidShapeId::new(id(), "empty namespace"));
    }
    if !namespace.split('.').all(is_identifier) {
        return Err(InvalidShapeId::new(id(), "malformed namespace"));
    }
    if !is_identifier(name) {
        return Err(InvalidShapeId::new(id(), "malformed shape name"));
    }
    Ok(())
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// A string failed to parse as a [`ShapeId`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid shape id `{id}`: {reason}")]
pub struct InvalidShapeId {
    id: String,
    reason: &'static str,
}

impl InvalidShapeId {
    fn new(id: impl Into<String>, reason: &'static str) -> Self {
        Self { id: id.into(), reason }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> ShapeId {
        s.parse().unwrap()
    }

    #[test]
    fn parses_and_displays() {
        let id = id("com.example.store#PutRecord");
        assert_eq!(id.namespace(), "com.example.store");
        assert_eq!(id.name(), "PutRecord");
        assert_eq!(id.to_string(), "com.example.store#PutRecord");
    }

    #[test]
    fn rejects_malformed_ids() {
        for s in ["PutRecord", "#PutRecord", "com.example#", "com..example#Put", "ns#Put Record", "1ns#Put"] {
            assert!(s.parse::<ShapeId>().is_err(), "accepted {s:?}");
        }
    }

    #[test]
    fn orders_by_namespace_then_name() {
        let mut ids = vec![id("b#A"), id("a#Z"), id("a#B")];
        ids.sort();
        let rendered: Vec<_> = ids.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, ["a#B", "a#Z", "b#A"]);
    }

    #[test]
    fn serde_uses_the_string_form() {
        let id = id("test.smoke#PutRecord");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"test.smoke#PutRecord\"");
        assert_eq!(serde_json::from_str::<ShapeId>(&json).unwrap(), id);
        assert!(serde_json::from_str::<ShapeId>("\"no-separator\"").is_err());
    }
}
