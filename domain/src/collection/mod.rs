//! Document collections served by the CRUD endpoints
//!
//! The store behind them is opaque: documents are JSON objects addressed
//! by collection name and id.

use crate::core::error::DomainError;
use serde_json::{Map, Value};

/// Known collections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionName {
    Artisans,
    Assessments,
    HeritageNodes,
    MentorshipMatches,
    Products,
    StoryDrafts,
}

impl CollectionName {
    /// Collections exposed through the generic list/detail routes
    pub const ROUTED: [CollectionName; 5] = [
        CollectionName::Assessments,
        CollectionName::HeritageNodes,
        CollectionName::MentorshipMatches,
        CollectionName::Products,
        CollectionName::StoryDrafts,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CollectionName::Artisans => "artisans",
            CollectionName::Assessments => "assessments",
            CollectionName::HeritageNodes => "heritage_nodes",
            CollectionName::MentorshipMatches => "mentorship_matches",
            CollectionName::Products => "products",
            CollectionName::StoryDrafts => "story_drafts",
        }
    }

    /// Parse a name served by the generic routes (excludes `artisans`)
    pub fn parse_routed(s: &str) -> Result<Self, DomainError> {
        Self::ROUTED
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| DomainError::UnknownCollection(s.to_string()))
    }
}

impl std::fmt::Display for CollectionName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A stored document
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: String,
    pub fields: Map<String, Value>,
}

impl Document {
    pub fn new(id: impl Into<String>, fields: Map<String, Value>) -> Self {
        Self {
            id: id.into(),
            fields,
        }
    }

    /// Fields with the id merged in under `"id"`
    pub fn to_json(&self) -> Value {
        let mut object = self.fields.clone();
        object.insert("id".to_string(), Value::String(self.id.clone()));
        Value::Object(object)
    }

    /// Overwrite top-level fields present in `patch`, keeping the rest
    pub fn merge(&mut self, patch: Map<String, Value>) {
        self.fields.extend(patch);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_parse_routed() {
        assert_eq!(
            CollectionName::parse_routed("heritage_nodes").unwrap(),
            CollectionName::HeritageNodes
        );
        assert!(CollectionName::parse_routed("artisans").is_err());
        assert!(CollectionName::parse_routed("users").is_err());
    }

    #[test]
    fn test_to_json_includes_id() {
        let doc = Document::new("abc", object(json!({"name": "Meera"})));
        assert_eq!(doc.to_json(), json!({"name": "Meera", "id": "abc"}));
    }

    #[test]
    fn test_merge_overwrites_and_keeps() {
        let mut doc = Document::new("1", object(json!({"name": "Meera", "craft": "weaving"})));
        doc.merge(object(json!({"craft": "pottery", "years": 12})));
        assert_eq!(
            doc.to_json(),
            json!({"id": "1", "name": "Meera", "craft": "pottery", "years": 12})
        );
    }
}
