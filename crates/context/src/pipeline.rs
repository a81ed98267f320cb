use crate::assembler::{ContextAssembler, GRAPH_UNAVAILABLE_SENTINEL, NO_RELATIONSHIPS_SENTINEL};
use crate::config::GraphRagConfig;
use crate::resolver::EntityResolver;
use async_trait::async_trait;
use graphrag_graph::GraphStore;
use graphrag_protocol::{GraphContext, RetrievedChunk};
use std::sync::Arc;

/// Narrow seam to the vector retrieval collaborator. The graph side only
/// ever needs `(source, content)` pairs, however retrieval is implemented.
#[async_trait]
pub trait ChunkRetriever: Send + Sync {
    async fn retrieve(&self, question: &str, limit: usize) -> anyhow::Result<Vec<RetrievedChunk>>;
}

/// Ties resolver, traversal and assembly together over one shared store.
///
/// An explicitly constructed service object: build one per process and
/// hand it to request handlers by reference. All failure modes degrade to
/// sentinel text; building context never aborts a question.
pub struct GraphContextBuilder {
    store: Arc<GraphStore>,
    resolver: EntityResolver,
    assembler: ContextAssembler,
}

impl GraphContextBuilder {
    #[must_use]
    pub fn new(store: Arc<GraphStore>, resolver: EntityResolver, assembler: ContextAssembler) -> Self {
        Self {
            store,
            resolver,
            assembler,
        }
    }

    /// Wire up store, resolver and assembler from one config. The store is
    /// constructed but not loaded; call [`GraphStore::load`] at startup.
    pub fn from_config(config: &GraphRagConfig) -> graphrag_graph::Result<Self> {
        let store = Arc::new(GraphStore::new(
            config.graph_endpoint.clone(),
            config.fetch_timeout(),
        )?);
        Ok(Self::new(
            store,
            EntityResolver::new(config.keyword_rules.clone()),
            ContextAssembler::new(config.graph_depth, config.graph_max_nodes)
                .with_relation_filters(config.relation_filters.clone()),
        ))
    }

    #[must_use]
    pub fn store(&self) -> &Arc<GraphStore> {
        &self.store
    }

    /// Resolve chunks to seed nodes and render the bounded context block.
    ///
    /// The whole request runs against a single snapshot grabbed up front,
    /// so a concurrent reload cannot mix generations mid-request.
    #[must_use]
    pub fn build_context(&self, chunks: &[RetrievedChunk]) -> GraphContext {
        let Some(snapshot) = self.store.snapshot() else {
            log::warn!(
                "graph context requested but store is not loaded ({})",
                self.store.endpoint()
            );
            return GraphContext {
                text: GRAPH_UNAVAILABLE_SENTINEL.to_string(),
                nodes_found: 0,
            };
        };

        let seeds = self.resolver.resolve(chunks, &snapshot);
        if seeds.is_empty() {
            return GraphContext {
                text: NO_RELATIONSHIPS_SENTINEL.to_string(),
                nodes_found: 0,
            };
        }

        let text = self.assembler.assemble(&snapshot, &seeds);
        GraphContext {
            text,
            nodes_found: seeds.len(),
        }
    }

    /// Convenience wrapper: retrieve chunks for a question, then build the
    /// graph context. Retrieval failures degrade like an empty resolution.
    pub async fn context_for_question(
        &self,
        retriever: &dyn ChunkRetriever,
        question: &str,
        limit: usize,
    ) -> GraphContext {
        match retriever.retrieve(question, limit).await {
            Ok(chunks) => self.build_context(&chunks),
            Err(err) => {
                log::warn!("chunk retrieval failed, degrading to empty context: {err}");
                GraphContext {
                    text: NO_RELATIONSHIPS_SENTINEL.to_string(),
                    nodes_found: 0,
                }
            }
        }
    }
}
