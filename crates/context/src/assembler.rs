use crate::paths;
use graphrag_graph::GraphSnapshot;
use std::collections::BTreeSet;
use std::collections::HashSet;

/// Sentinel when resolution or traversal produced nothing renderable.
pub const NO_RELATIONSHIPS_SENTINEL: &str = "No graph relationships found.";

/// Sentinel when the graph store has never loaded.
pub const GRAPH_UNAVAILABLE_SENTINEL: &str = "Graph not available.";

/// Relations rendered per node; keeps each node's entry to two short lines.
const MAX_RELATIONS_PER_NODE: usize = 3;

/// Expands a resolved seed set through the graph and renders a bounded
/// text block for the answer-generation prompt.
///
/// Truncation to `max_nodes` keeps BFS discovery order, so the closest
/// nodes survive and the output is reproducible for a given snapshot.
pub struct ContextAssembler {
    depth: usize,
    max_nodes: usize,
    relation_filters: Option<Vec<String>>,
}

impl ContextAssembler {
    #[must_use]
    pub fn new(depth: usize, max_nodes: usize) -> Self {
        Self {
            depth,
            max_nodes,
            relation_filters: None,
        }
    }

    /// Restrict traversal to the given relation types.
    #[must_use]
    pub fn with_relation_filters(mut self, filters: Option<Vec<String>>) -> Self {
        self.relation_filters = filters;
        self
    }

    /// Render the context block for a seed set against one snapshot.
    #[must_use]
    pub fn assemble(&self, snapshot: &GraphSnapshot, seeds: &BTreeSet<String>) -> String {
        if seeds.is_empty() {
            return NO_RELATIONSHIPS_SENTINEL.to_string();
        }

        let seed_ids: Vec<String> = seeds.iter().cloned().collect();
        let mut reached =
            snapshot.traverse(&seed_ids, self.depth, self.relation_filters.as_deref());
        if reached.len() > self.max_nodes {
            log::debug!(
                "truncating graph context from {} to {} node(s)",
                reached.len(),
                self.max_nodes
            );
            reached.truncate(self.max_nodes);
        }

        let retained: HashSet<&str> = reached.iter().map(String::as_str).collect();
        let mut lines: Vec<String> = Vec::new();

        for id in &reached {
            // Seeds can name ids the snapshot does not know; skip them.
            let Some(node) = snapshot.node(id) else {
                continue;
            };

            let origin = node
                .source
                .as_deref()
                .map(paths::basename)
                .filter(|base| !base.is_empty())
                .unwrap_or("unknown");
            lines.push(format!("- {}: {} (from {})", node.kind, node.label, origin));

            let mut relations: Vec<String> = Vec::new();
            for edge in snapshot.edges_of(id) {
                if relations.len() == MAX_RELATIONS_PER_NODE {
                    break;
                }
                let Some(other) = edge.other_endpoint(id) else {
                    continue;
                };
                if !retained.contains(other) {
                    continue;
                }
                let Some(other_node) = snapshot.node(other) else {
                    continue;
                };
                relations.push(format!("{}: {}", edge.relation, other_node.label));
            }
            if !relations.is_empty() {
                lines.push(format!("  Relations: {}", relations.join(", ")));
            }
        }

        if lines.is_empty() {
            NO_RELATIONSHIPS_SENTINEL.to_string()
        } else {
            lines.join("\n")
        }
    }
}
