//! # GraphRAG Graph
//!
//! In-memory structural graph over a codebase: files, components, services
//! and their relations, fetched from an external graph provider.
//!
//! ## Architecture
//!
//! ```text
//! Graph provider (HTTP, JSON)
//!     │
//!     ├──> GraphStore
//!     │      ├─ bounded-timeout fetch
//!     │      ├─ lenient payload parse (malformed entries skipped)
//!     │      └─ atomic snapshot swap on load/reload
//!     │
//!     └──> GraphSnapshot (immutable, Arc-shared)
//!            ├─ node map + bidirectional adjacency index
//!            ├─ neighbor lookup with relation filter
//!            └─ breadth-limited traversal (deterministic order)
//! ```
//!
//! Readers never block on I/O: they grab the current `Arc<GraphSnapshot>`
//! and run entirely against it, while `reload` builds the next snapshot off
//! to the side and publishes it with a single swap.

mod error;
mod snapshot;
mod store;
mod traverse;

pub use error::{GraphError, Result};
pub use snapshot::GraphSnapshot;
pub use store::GraphStore;
