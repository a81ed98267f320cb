use thiserror::Error;

pub type Result<T> = std::result::Result<T, GraphError>;

/// Failures internal to fetching and building a snapshot. These never
/// escape `load`/`reload`; the store logs them and degrades to its
/// previous state.
#[derive(Error, Debug)]
pub enum GraphError {
    #[error("graph fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("malformed graph payload: {0}")]
    Payload(#[from] serde_json::Error),
}
