use crate::error::Result;
use crate::snapshot::GraphSnapshot;
use graphrag_protocol::{GraphPayload, Node};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;

/// Owns the current [`GraphSnapshot`] and refreshes it from the graph
/// provider endpoint.
///
/// The store is the single shared graph resource across concurrent
/// question-answering requests: read-mostly, mutated only by an explicit
/// `load`/`reload`. A reload builds the next snapshot entirely off to the
/// side (no lock held across the network fetch) and publishes it with one
/// pointer swap, so readers always see exactly one snapshot, never a mix.
///
/// Fetch failures never propagate: the previous snapshot, if any, stays
/// authoritative and `load`/`reload` report `false`.
pub struct GraphStore {
    endpoint: String,
    client: reqwest::Client,
    snapshot: RwLock<Option<Arc<GraphSnapshot>>>,
}

impl GraphStore {
    /// Create a store for the given provider endpoint. Nothing is fetched
    /// until [`GraphStore::load`] runs.
    pub fn new(endpoint: impl Into<String>, fetch_timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(fetch_timeout).build()?;
        Ok(Self {
            endpoint: endpoint.into(),
            client,
            snapshot: RwLock::new(None),
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch the graph definition and publish a fresh snapshot.
    ///
    /// Returns `true` on success. On any failure (network, timeout, bad
    /// status, malformed JSON) the failure is logged, no partial data
    /// becomes visible, and a previously published snapshot remains
    /// authoritative.
    pub async fn load(&self) -> bool {
        match self.fetch_snapshot().await {
            Ok(snapshot) => {
                log::info!(
                    "graph loaded from {}: {} nodes, {} edges",
                    self.endpoint,
                    snapshot.node_count(),
                    snapshot.edge_count()
                );
                self.publish(snapshot);
                true
            }
            Err(err) => {
                log::warn!("failed to load graph from {}: {err}", self.endpoint);
                false
            }
        }
    }

    /// Build a brand-new snapshot and swap it in atomically. Same
    /// semantics as [`GraphStore::load`]; the split exists for callers
    /// that distinguish startup from refresh.
    pub async fn reload(&self) -> bool {
        self.load().await
    }

    /// Publish a fully-built snapshot via a single swap. This is the only
    /// mutation of the store; callers holding an out-of-band graph (tests,
    /// offline tooling) may use it directly.
    pub fn publish(&self, snapshot: GraphSnapshot) {
        *self.write_guard() = Some(Arc::new(snapshot));
    }

    /// The current snapshot, if one has been published. Callers grab the
    /// `Arc` once and run all lookups against it for a consistent view.
    #[must_use]
    pub fn snapshot(&self) -> Option<Arc<GraphSnapshot>> {
        self.read_guard().clone()
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.read_guard().is_some()
    }

    /// Get a node by id; `None` when absent or the store is not loaded.
    #[must_use]
    pub fn get_node(&self, id: &str) -> Option<Node> {
        self.snapshot()?.node(id).cloned()
    }

    /// Other-endpoint nodes of all edges touching `id`; empty when the
    /// store is not loaded.
    #[must_use]
    pub fn get_neighbors(&self, id: &str, relation_filter: Option<&str>) -> Vec<Node> {
        self.snapshot()
            .map(|snapshot| {
                snapshot
                    .neighbors(id, relation_filter)
                    .into_iter()
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Breadth-limited traversal against the current snapshot; empty when
    /// the store is not loaded.
    #[must_use]
    pub fn traverse(
        &self,
        seeds: &[String],
        depth: usize,
        relation_filters: Option<&[String]>,
    ) -> Vec<String> {
        self.snapshot()
            .map(|snapshot| snapshot.traverse(seeds, depth, relation_filters))
            .unwrap_or_default()
    }

    async fn fetch_snapshot(&self) -> Result<GraphSnapshot> {
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await?
            .error_for_status()?;
        let body = response.text().await?;
        let payload: GraphPayload = serde_json::from_str(&body)?;
        Ok(GraphSnapshot::from_payload(payload))
    }

    fn read_guard(&self) -> RwLockReadGuard<'_, Option<Arc<GraphSnapshot>>> {
        match self.snapshot.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn write_guard(&self) -> RwLockWriteGuard<'_, Option<Arc<GraphSnapshot>>> {
        match self.snapshot.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}
