use crate::snapshot::GraphSnapshot;
use std::collections::HashSet;

impl GraphSnapshot {
    /// Breadth-limited reachability from a set of seed node ids.
    ///
    /// Contract: seeds are always included (deduplicated, in the order
    /// given); `depth` counts additional hops beyond the seeds, so
    /// `depth == 0` returns exactly the seeds. A relation-filter list only
    /// prunes which new nodes get discovered, never whether an
    /// already-reached node counts. An edge is followed when the filter is
    /// absent or explicitly includes its relation.
    ///
    /// The result is in BFS discovery order (seeds first, then hop by hop,
    /// edges in payload order), which makes downstream truncation
    /// reproducible. The visited-set guard keeps each node processed at
    /// most once, bounding the work at O(V + E) of the reachable subgraph.
    #[must_use]
    pub fn traverse(
        &self,
        seeds: &[String],
        depth: usize,
        relation_filters: Option<&[String]>,
    ) -> Vec<String> {
        let mut visited: HashSet<&str> = HashSet::new();
        let mut order: Vec<String> = Vec::new();
        let mut frontier: Vec<&str> = Vec::new();

        for id in seeds {
            if visited.insert(id.as_str()) {
                order.push(id.clone());
                frontier.push(id.as_str());
            }
        }

        for _ in 0..depth {
            let mut next: Vec<&str> = Vec::new();
            for &id in &frontier {
                for edge in self.edges_of(id) {
                    if let Some(filters) = relation_filters {
                        if !filters.iter().any(|rel| *rel == edge.relation) {
                            continue;
                        }
                    }
                    let Some(other) = edge.other_endpoint(id) else {
                        continue;
                    };
                    if visited.insert(other) {
                        order.push(other.to_string());
                        next.push(other);
                    }
                }
            }
            frontier = next;
            if frontier.is_empty() {
                break;
            }
        }

        order
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use graphrag_protocol::{GraphPayload, RawEdge, RawNode};
    use pretty_assertions::assert_eq;

    fn chain_snapshot() -> GraphSnapshot {
        // a - b - c - d, plus a - x over a filtered-out relation
        let nodes = ["a", "b", "c", "d", "x"]
            .into_iter()
            .map(|id| RawNode {
                id: Some(id.to_string()),
                kind: Some("Component".to_string()),
                ..RawNode::default()
            })
            .collect();
        let edges = vec![
            edge("a", "b", "USES"),
            edge("b", "c", "USES"),
            edge("c", "d", "USES"),
            edge("a", "x", "SERVICED_BY"),
        ];
        GraphSnapshot::from_payload(GraphPayload { nodes, edges })
    }

    fn edge(from: &str, to: &str, relation: &str) -> RawEdge {
        RawEdge {
            from: Some(from.to_string()),
            to: Some(to.to_string()),
            relation: Some(relation.to_string()),
        }
    }

    fn ids(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn depth_zero_returns_seeds() {
        let snapshot = chain_snapshot();
        assert_eq!(snapshot.traverse(&ids(&["a", "c"]), 0, None), ids(&["a", "c"]));
    }

    #[test]
    fn seeds_are_deduplicated() {
        let snapshot = chain_snapshot();
        assert_eq!(snapshot.traverse(&ids(&["a", "a"]), 0, None), ids(&["a"]));
    }

    #[test]
    fn depth_one_reaches_direct_neighbors() {
        let snapshot = chain_snapshot();
        assert_eq!(
            snapshot.traverse(&ids(&["a"]), 1, None),
            ids(&["a", "b", "x"])
        );
    }

    #[test]
    fn traversal_is_bidirectional() {
        let snapshot = chain_snapshot();
        // d only has an incoming edge in storage; traversal still walks it.
        assert_eq!(snapshot.traverse(&ids(&["d"]), 1, None), ids(&["d", "c"]));
    }

    #[test]
    fn depth_is_monotone() {
        let snapshot = chain_snapshot();
        let seeds = ids(&["a"]);
        let mut previous: Vec<String> = Vec::new();
        for depth in 0..5 {
            let reached = snapshot.traverse(&seeds, depth, None);
            assert!(
                previous.iter().all(|id| reached.contains(id)),
                "depth {depth} lost nodes reached at depth {}",
                depth.saturating_sub(1)
            );
            previous = reached;
        }
        assert_eq!(previous, ids(&["a", "b", "x", "c", "d"]));
    }

    #[test]
    fn filter_prunes_discovery_but_not_reached_nodes() {
        let snapshot = chain_snapshot();
        // x is only reachable over SERVICED_BY; a USES-only walk keeps a
        // itself reached while never discovering x.
        let filters = ids(&["USES"]);
        assert_eq!(
            snapshot.traverse(&ids(&["a"]), 1, Some(&filters)),
            ids(&["a", "b"])
        );

        // A filter matching no edge at all still yields the seed.
        let none = ids(&["DEPLOYS"]);
        assert_eq!(
            snapshot.traverse(&ids(&["a"]), 1, Some(&none)),
            ids(&["a"])
        );
    }

    #[test]
    fn unknown_seed_is_still_reported() {
        let snapshot = chain_snapshot();
        // A seed id absent from the snapshot has no edges to expand but
        // remains part of the reached set; rendering decides what to do.
        assert_eq!(
            snapshot.traverse(&ids(&["ghost"]), 2, None),
            ids(&["ghost"])
        );
    }

    #[test]
    fn early_exit_on_empty_frontier() {
        let snapshot = chain_snapshot();
        // Depth far beyond the diameter terminates and stays stable.
        assert_eq!(
            snapshot.traverse(&ids(&["a"]), 100, None),
            ids(&["a", "b", "x", "c", "d"])
        );
    }

    #[test]
    fn discovery_order_is_deterministic() {
        let snapshot = chain_snapshot();
        let first = snapshot.traverse(&ids(&["a"]), 3, None);
        for _ in 0..10 {
            assert_eq!(snapshot.traverse(&ids(&["a"]), 3, None), first);
        }
    }
}
