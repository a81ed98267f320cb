use graphrag_protocol::{Edge, GraphPayload, Node};
use std::collections::HashMap;

/// One immutable, fully-built instance of the graph index.
///
/// Built once from a provider payload, then shared read-only (typically as
/// `Arc<GraphSnapshot>`). The adjacency index maps every node id that
/// appears as either endpoint of an edge to all edges touching it, so
/// traversal treats edges as undirected.
#[derive(Debug, Default)]
pub struct GraphSnapshot {
    nodes: HashMap<String, Node>,
    edges: Vec<Edge>,
    adjacency: HashMap<String, Vec<usize>>,
}

impl GraphSnapshot {
    /// Build a snapshot from a raw provider payload.
    ///
    /// Lenient by contract: entries missing required fields are skipped,
    /// duplicate node ids keep the first occurrence, and edges referencing
    /// unknown node ids are indexed anyway (they resolve to nothing at
    /// lookup time). Load never fails on individual entries.
    #[must_use]
    pub fn from_payload(payload: GraphPayload) -> Self {
        let total_nodes = payload.nodes.len();
        let total_edges = payload.edges.len();

        let mut nodes: HashMap<String, Node> = HashMap::with_capacity(total_nodes);
        for raw in payload.nodes {
            if let Some(node) = raw.into_node() {
                nodes.entry(node.id.clone()).or_insert(node);
            }
        }

        let edges: Vec<Edge> = payload
            .edges
            .into_iter()
            .filter_map(graphrag_protocol::RawEdge::into_edge)
            .collect();

        let mut adjacency: HashMap<String, Vec<usize>> = HashMap::new();
        for (idx, edge) in edges.iter().enumerate() {
            adjacency.entry(edge.from.clone()).or_default().push(idx);
            if edge.to != edge.from {
                adjacency.entry(edge.to.clone()).or_default().push(idx);
            }
        }

        let skipped_nodes = total_nodes - nodes.len();
        let skipped_edges = total_edges - edges.len();
        if skipped_nodes > 0 || skipped_edges > 0 {
            log::debug!(
                "snapshot build skipped {skipped_nodes} malformed/duplicate nodes, {skipped_edges} malformed edges"
            );
        }

        Self {
            nodes,
            edges,
            adjacency,
        }
    }

    /// Get a node by id; O(1).
    #[must_use]
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// All nodes, in no particular order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// All nodes of a given type tag.
    #[must_use]
    pub fn nodes_by_kind(&self, kind: &str) -> Vec<&Node> {
        self.nodes.values().filter(|n| n.kind == kind).collect()
    }

    /// All edges touching `id`, in payload order.
    pub fn edges_of(&self, id: &str) -> impl Iterator<Item = &Edge> {
        self.adjacency
            .get(id)
            .into_iter()
            .flatten()
            .map(|&idx| &self.edges[idx])
    }

    /// Other-endpoint nodes of all edges touching `id`, optionally
    /// restricted to edges with the given relation. Edges whose other
    /// endpoint is not a known node are skipped.
    #[must_use]
    pub fn neighbors(&self, id: &str, relation_filter: Option<&str>) -> Vec<&Node> {
        self.edges_of(id)
            .filter(|edge| relation_filter.map_or(true, |rel| edge.relation == rel))
            .filter_map(|edge| edge.other_endpoint(id))
            .filter_map(|other| self.nodes.get(other))
            .collect()
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}
