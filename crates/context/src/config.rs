use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

/// One keyword-trigger rule for the entity resolver: when any term occurs
/// in a chunk's text, all nodes of `node_kind` become candidates,
/// optionally narrowed by a payload field whose value must appear in the
/// text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct KeywordRule {
    pub terms: Vec<String>,
    pub node_kind: String,
    #[serde(default)]
    pub payload_field: Option<String>,
}

/// Configuration surface consumed by the graph-context core.
///
/// Loadable from a TOML file; a handful of environment variables override
/// file values for deployment parity with the original service
/// (`GRAPH_API_URL`, `GRAPH_DEPTH`, `GRAPH_MAX_NODES`, `GRAPH_CACHE_TTL`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GraphRagConfig {
    /// Graph provider endpoint returning `{nodes, edges}` JSON.
    pub graph_endpoint: String,
    /// Bound on the provider fetch; the only blocking I/O in the core.
    pub fetch_timeout_secs: u64,
    /// Traversal hops beyond the seed nodes.
    pub graph_depth: usize,
    /// Node cap for context assembly.
    pub graph_max_nodes: usize,
    /// Relation types to follow during traversal; `None` follows all.
    pub relation_filters: Option<Vec<String>>,
    /// Reserved: parsed for compatibility but not consulted by load or
    /// reload. TODO: drive a TTL-based auto-refresh once a refresh policy
    /// is decided.
    pub cache_ttl_secs: u64,
    /// Keyword-trigger rules for the entity resolver.
    pub keyword_rules: Vec<KeywordRule>,
}

impl Default for GraphRagConfig {
    fn default() -> Self {
        Self {
            graph_endpoint: "http://localhost:5001/graph/nodes".to_string(),
            fetch_timeout_secs: 10,
            graph_depth: 2,
            graph_max_nodes: 20,
            relation_filters: None,
            cache_ttl_secs: 300,
            keyword_rules: Vec::new(),
        }
    }
}

impl GraphRagConfig {
    /// Parse a TOML config file. Missing keys fall back to defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }

    /// Load from an optional file, then apply environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env();
        Ok(config)
    }

    /// Apply environment overrides. Unparseable numeric values are logged
    /// and ignored rather than failing startup.
    pub fn apply_env(&mut self) {
        if let Ok(url) = std::env::var("GRAPH_API_URL") {
            if !url.is_empty() {
                self.graph_endpoint = url;
            }
        }
        Self::env_number("GRAPH_DEPTH", &mut self.graph_depth);
        Self::env_number("GRAPH_MAX_NODES", &mut self.graph_max_nodes);
        Self::env_number("GRAPH_CACHE_TTL", &mut self.cache_ttl_secs);
    }

    #[must_use]
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    fn env_number<T: std::str::FromStr>(name: &str, slot: &mut T) {
        let Ok(raw) = std::env::var(name) else {
            return;
        };
        match raw.parse() {
            Ok(value) => *slot = value,
            Err(_) => log::warn!("ignoring unparseable {name}={raw}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn defaults_match_service_conventions() {
        let config = GraphRagConfig::default();
        assert_eq!(config.graph_endpoint, "http://localhost:5001/graph/nodes");
        assert_eq!(config.graph_depth, 2);
        assert_eq!(config.graph_max_nodes, 20);
        assert_eq!(config.cache_ttl_secs, 300);
        assert!(config.relation_filters.is_none());
        assert!(config.keyword_rules.is_empty());
    }

    #[test]
    fn partial_toml_keeps_defaults_elsewhere() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(
            file,
            r#"
            graph_endpoint = "http://graph.internal:5001/graph/nodes"
            graph_depth = 3

            [[keyword_rules]]
            terms = ["vehicle", "car"]
            node_kind = "Vehicle"
            payload_field = "id"
            "#
        )
        .expect("write config");

        let config = GraphRagConfig::from_file(file.path()).expect("parse");
        assert_eq!(config.graph_endpoint, "http://graph.internal:5001/graph/nodes");
        assert_eq!(config.graph_depth, 3);
        // Untouched keys keep defaults.
        assert_eq!(config.graph_max_nodes, 20);
        assert_eq!(
            config.keyword_rules,
            vec![KeywordRule {
                terms: vec!["vehicle".to_string(), "car".to_string()],
                node_kind: "Vehicle".to_string(),
                payload_field: Some("id".to_string()),
            }]
        );
    }

    #[test]
    fn env_overrides_win() {
        // Process-wide env: use names no other test touches.
        std::env::set_var("GRAPH_API_URL", "http://override:5001/graph/nodes");
        std::env::set_var("GRAPH_MAX_NODES", "7");
        std::env::set_var("GRAPH_CACHE_TTL", "not-a-number");

        let mut config = GraphRagConfig::default();
        config.apply_env();

        std::env::remove_var("GRAPH_API_URL");
        std::env::remove_var("GRAPH_MAX_NODES");
        std::env::remove_var("GRAPH_CACHE_TTL");

        assert_eq!(config.graph_endpoint, "http://override:5001/graph/nodes");
        assert_eq!(config.graph_max_nodes, 7);
        // Unparseable override is ignored.
        assert_eq!(config.cache_ttl_secs, 300);
    }
}
