//! Node module - propositions, theorems and axioms

use serde::{Deserialize, Serialize};

/// A knowledge graph node
///
/// The graph summary only carries `id`, `type`, `domain` and `title`; the
/// remaining fields are present when a node's full record is loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Unique identifier
    pub id: String,

    /// Node type (axiom, theorem, proposition, ...)
    #[serde(rename = "type")]
    pub kind: String,

    /// Primary domain (philosophy, mathematics, physics, ...)
    pub domain: String,

    /// Short, human-readable title
    pub title: String,

    /// Natural language statement
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    /// Formal representation (logic, math notation, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formal: Option<String>,

    /// Tags for categorization and search
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Domain-specific metadata
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub metadata: serde_json::Value,

    /// Citations or source identifiers
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<String>,

    /// ISO 8601 creation timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,

    /// ISO 8601 last-update timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,
}

impl Node {
    /// Create a summary node with no detail fields
    pub fn new(
        id: impl Into<String>,
        kind: impl Into<String>,
        domain: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            domain: domain.into(),
            title: title.into(),
            content: None,
            formal: None,
            tags: Vec::new(),
            metadata: serde_json::Value::Null,
            sources: Vec::new(),
            created: None,
            updated: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_deserialize_summary() {
        let json = r#"{"id":"abc123","type":"proposition","domain":"philosophy","title":"Test"}"#;
        let node: Node = serde_json::from_str(json).unwrap();

        assert_eq!(node.id, "abc123");
        assert_eq!(node.kind, "proposition");
        assert_eq!(node.domain, "philosophy");
        assert_eq!(node.title, "Test");
        assert!(node.tags.is_empty());
        assert_eq!(node.metadata, serde_json::Value::Null);
    }

    #[test]
    fn test_node_deserialize_full() {
        let json = r#"{
            "id": "k7x9m2",
            "type": "proposition",
            "domain": "philosophy",
            "title": "Knowledge requires safety",
            "content": "For S to know that p, S's belief in p must be safe.",
            "formal": "∀S,p: K(S,p) → Safe(S,p)",
            "tags": ["epistemology", "knowledge"],
            "metadata": {"certainty": 0.75},
            "sources": ["pritchard2005"],
            "created": "2025-01-15T10:00:00Z",
            "updated": "2025-01-15T10:00:00Z"
        }"#;
        let node: Node = serde_json::from_str(json).unwrap();

        assert_eq!(node.formal.as_deref(), Some("∀S,p: K(S,p) → Safe(S,p)"));
        assert_eq!(node.tags, vec!["epistemology", "knowledge"]);
        assert_eq!(node.metadata["certainty"], 0.75);
        assert_eq!(node.sources, vec!["pritchard2005"]);
        assert!(node.created.is_some());
    }

    #[test]
    fn test_kind_serializes_as_type() {
        let node = Node::new("t01", "theorem", "mathematics", "Test Theorem");
        let value = serde_json::to_value(&node).unwrap();

        assert_eq!(value["type"], "theorem");
        assert!(value.get("kind").is_none());
        assert!(value.get("tags").is_none());
    }
}
