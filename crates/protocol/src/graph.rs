use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Relation tag used when the provider omits one on an edge.
pub const DEFAULT_RELATION: &str = "RELATED_TO";

/// A unit in the structural graph (file, component, service, entity).
///
/// Identity is `id`; `source` and `payload` are descriptive only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Node {
    pub id: String,
    /// Node type tag, e.g. "Component" or "Service".
    #[serde(rename = "type")]
    pub kind: String,
    /// Display name; falls back to `id` when the provider omits it.
    pub label: String,
    /// File path this node was derived from, when known.
    pub source: Option<String>,
    /// Open key/value map; shape varies by node type and is only ever
    /// probed by key presence.
    pub payload: Map<String, Value>,
}

/// A directed, typed relation between two nodes. Storage keeps the
/// direction; traversal treats either endpoint as reaching the other.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Edge {
    pub from: String,
    pub to: String,
    pub relation: String,
}

impl Edge {
    /// The endpoint opposite to `id`, if `id` is an endpoint at all.
    #[must_use]
    pub fn other_endpoint(&self, id: &str) -> Option<&str> {
        if self.from == id {
            Some(&self.to)
        } else if self.to == id {
            Some(&self.from)
        } else {
            None
        }
    }
}

/// Wire form of the graph provider response.
///
/// Deserialization is lenient: unknown fields are ignored and
/// required fields are checked entry by entry in [`RawNode::into_node`] /
/// [`RawEdge::into_edge`] so one malformed entry never fails the load.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GraphPayload {
    #[serde(default)]
    pub nodes: Vec<RawNode>,
    #[serde(default)]
    pub edges: Vec<RawEdge>,
}

/// One node entry as received from the provider, before validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawNode {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub payload: Map<String, Value>,
}

impl RawNode {
    /// Validate into a [`Node`]; `None` when the entry has no usable id.
    #[must_use]
    pub fn into_node(self) -> Option<Node> {
        let id = self.id.filter(|id| !id.is_empty())?;
        let label = self.label.unwrap_or_else(|| id.clone());
        Some(Node {
            kind: self.kind.unwrap_or_else(|| "Unknown".to_string()),
            label,
            source: self.source,
            payload: self.payload,
            id,
        })
    }
}

/// One edge entry as received from the provider, before validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawEdge {
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default)]
    pub relation: Option<String>,
}

impl RawEdge {
    /// Validate into an [`Edge`]; `None` when either endpoint is missing.
    #[must_use]
    pub fn into_edge(self) -> Option<Edge> {
        let from = self.from.filter(|id| !id.is_empty())?;
        let to = self.to.filter(|id| !id.is_empty())?;
        Some(Edge {
            from,
            to,
            relation: self
                .relation
                .unwrap_or_else(|| DEFAULT_RELATION.to_string()),
        })
    }
}
