//! # GraphRAG Context
//!
//! Graph-augmented context assembly: turns retrieved code chunks into a
//! bounded, LLM-readable description of the related parts of the codebase
//! graph.
//!
//! ## Pipeline
//!
//! ```text
//! RetrievedChunk[]  (from the vector retrieval collaborator)
//!     │
//!     ├──> Entity Resolver
//!     │      ├─ source-path matching (normalized, suffix-aware)
//!     │      ├─ parent-directory overlap
//!     │      └─ keyword-triggered bulk inclusion (configurable rules)
//!     │
//!     ├──> Traversal (graphrag-graph, breadth-limited)
//!     │
//!     └──> Context Assembler
//!            ├─ truncate to the node cap (discovery order)
//!            ├─ one descriptive line per node
//!            └─ capped relation lines between retained nodes
//! ```
//!
//! Every stage degrades instead of failing: an unloaded graph or an empty
//! candidate set yields a sentinel string, never an error, so the
//! question-answering flow is never aborted from here.

mod assembler;
mod config;
mod paths;
mod pipeline;
mod resolver;

pub use assembler::{ContextAssembler, GRAPH_UNAVAILABLE_SENTINEL, NO_RELATIONSHIPS_SENTINEL};
pub use config::{ConfigError, GraphRagConfig, KeywordRule};
pub use pipeline::{ChunkRetriever, GraphContextBuilder};
pub use resolver::{
    DirectoryMatcher, EntityResolver, KeywordMatcher, Matcher, SourcePathMatcher,
};
