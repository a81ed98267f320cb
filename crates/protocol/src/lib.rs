//! # GraphRAG Protocol
//!
//! Shared data types for the graph-augmented context builder.
//!
//! The graph provider speaks JSON (`{"nodes": [...], "edges": [...]}`), the
//! retrieval collaborator hands over `(source, content)` chunks, and the
//! answer-generation collaborator receives a rendered [`GraphContext`].
//! Everything that crosses one of those seams is defined here.

mod chunk;
mod graph;

pub use chunk::RetrievedChunk;
pub use graph::{Edge, GraphPayload, Node, RawEdge, RawNode, DEFAULT_RELATION};

use serde::{Deserialize, Serialize};

/// Rendered graph context handed to the answer-generation collaborator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GraphContext {
    /// Bounded descriptive text block (one or two lines per node).
    pub text: String,
    /// Number of seed node ids resolved from the retrieved chunks.
    pub nodes_found: usize,
}
