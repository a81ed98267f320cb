use serde::{Deserialize, Serialize};

/// A retrieved unit of source text, produced by the vector retrieval
/// collaborator. Only the source path and raw content matter to the
/// graph side; scores, embeddings and ranks stay behind the seam.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RetrievedChunk {
    /// File path the chunk was cut from (relative or absolute).
    pub source: String,
    /// Raw chunk text.
    pub content: String,
}

impl RetrievedChunk {
    #[must_use]
    pub fn new(source: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            content: content.into(),
        }
    }
}
