use crate::config::KeywordRule;
use crate::paths;
use graphrag_graph::GraphSnapshot;
use graphrag_protocol::RetrievedChunk;
use serde_json::Value;
use std::collections::BTreeSet;

/// One independent resolution strategy: maps a retrieved chunk to candidate
/// node ids against a snapshot. Strategies never see each other's results;
/// the resolver unions them.
pub trait Matcher: Send + Sync {
    fn name(&self) -> &'static str;

    fn candidates(&self, chunk: &RetrievedChunk, snapshot: &GraphSnapshot) -> BTreeSet<String>;
}

/// Maps retrieved chunks to plausible graph nodes.
///
/// Recall-oriented: false positives are bounded downstream by traversal
/// depth and the context node cap, while a false negative only degrades
/// context quality. Every matcher runs for every chunk; a hit from one
/// strategy never short-circuits the others.
pub struct EntityResolver {
    matchers: Vec<Box<dyn Matcher>>,
}

impl EntityResolver {
    /// Resolver with the standard strategy list: source-path match,
    /// directory overlap, then keyword rules.
    #[must_use]
    pub fn new(keyword_rules: Vec<KeywordRule>) -> Self {
        Self {
            matchers: vec![
                Box::new(SourcePathMatcher),
                Box::new(DirectoryMatcher),
                Box::new(KeywordMatcher::new(keyword_rules)),
            ],
        }
    }

    /// Resolver with an explicit strategy list, for toggling individual
    /// matchers on or off.
    #[must_use]
    pub fn with_matchers(matchers: Vec<Box<dyn Matcher>>) -> Self {
        Self { matchers }
    }

    /// Union of candidate ids across all chunks and all matchers, sorted
    /// by id so downstream seed order is deterministic.
    #[must_use]
    pub fn resolve(&self, chunks: &[RetrievedChunk], snapshot: &GraphSnapshot) -> BTreeSet<String> {
        let mut seeds = BTreeSet::new();
        for chunk in chunks {
            for matcher in &self.matchers {
                let found = matcher.candidates(chunk, snapshot);
                if !found.is_empty() {
                    log::debug!(
                        "matcher {} resolved {} candidate(s) for {}",
                        matcher.name(),
                        found.len(),
                        chunk.source
                    );
                }
                seeds.extend(found);
            }
        }
        log::debug!("resolved {} seed node(s) from {} chunk(s)", seeds.len(), chunks.len());
        seeds
    }
}

/// Strategy 1: normalized source-path matching. A node matches when either
/// normalized path contains the other (which covers suffix matches like
/// `src/Header.js` inside `mycarhub/src/Header.js`) or the basenames are
/// equal.
pub struct SourcePathMatcher;

impl Matcher for SourcePathMatcher {
    fn name(&self) -> &'static str {
        "source-path"
    }

    fn candidates(&self, chunk: &RetrievedChunk, snapshot: &GraphSnapshot) -> BTreeSet<String> {
        let chunk_path = paths::normalize(&chunk.source);
        if chunk_path.is_empty() {
            return BTreeSet::new();
        }
        let chunk_base = paths::basename(&chunk_path);

        snapshot
            .nodes()
            .filter(|node| {
                let Some(source) = node.source.as_deref() else {
                    return false;
                };
                let node_path = paths::normalize(source);
                if node_path.is_empty() {
                    return false;
                }
                chunk_path.contains(&node_path)
                    || node_path.contains(&chunk_path)
                    || paths::basename(&node_path) == chunk_base
            })
            .map(|node| node.id.clone())
            .collect()
    }
}

/// Strategy 2: parent-directory overlap. Recovers nodes from the same
/// logical module even when filenames differ.
pub struct DirectoryMatcher;

impl Matcher for DirectoryMatcher {
    fn name(&self) -> &'static str {
        "directory"
    }

    fn candidates(&self, chunk: &RetrievedChunk, snapshot: &GraphSnapshot) -> BTreeSet<String> {
        let chunk_path = paths::normalize(&chunk.source);
        let chunk_dir = paths::parent_dir(&chunk_path);
        if chunk_dir.is_empty() {
            return BTreeSet::new();
        }

        snapshot
            .nodes()
            .filter(|node| {
                let Some(source) = node.source.as_deref() else {
                    return false;
                };
                let node_path = paths::normalize(source);
                let node_dir = paths::parent_dir(&node_path);
                if node_dir.is_empty() {
                    return false;
                }
                node_dir.contains(chunk_dir) || chunk_dir.ends_with(paths::basename(node_dir))
            })
            .map(|node| node.id.clone())
            .collect()
    }
}

/// Strategy 3: keyword-triggered bulk inclusion. When a rule's trigger term
/// occurs in the lowercased chunk text, all nodes of the rule's type become
/// candidates; a configured payload field narrows that to nodes whose field
/// value literally appears in the text (nodes without the field pass
/// through unnarrowed).
pub struct KeywordMatcher {
    rules: Vec<KeywordRule>,
}

impl KeywordMatcher {
    #[must_use]
    pub fn new(rules: Vec<KeywordRule>) -> Self {
        Self { rules }
    }

    fn payload_text(value: &Value) -> String {
        match value {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        }
    }
}

impl Matcher for KeywordMatcher {
    fn name(&self) -> &'static str {
        "keyword"
    }

    fn candidates(&self, chunk: &RetrievedChunk, snapshot: &GraphSnapshot) -> BTreeSet<String> {
        let content = chunk.content.to_lowercase();
        let mut found = BTreeSet::new();

        for rule in &self.rules {
            let triggered = rule
                .terms
                .iter()
                .any(|term| content.contains(&term.to_lowercase()));
            if !triggered {
                continue;
            }

            for node in snapshot.nodes_by_kind(&rule.node_kind) {
                let narrowed_out = rule.payload_field.as_deref().is_some_and(|field| {
                    node.payload.get(field).is_some_and(|value| {
                        let needle = Self::payload_text(value).to_lowercase();
                        needle.is_empty() || !content.contains(&needle)
                    })
                });
                if !narrowed_out {
                    found.insert(node.id.clone());
                }
            }
        }

        found
    }
}
