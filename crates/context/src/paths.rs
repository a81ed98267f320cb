//! Lossy path normalization for heuristic matching. Everything here works
//! on strings, not `Path`, because node sources come from an arbitrary
//! provider and may use either separator convention.

/// Lowercase, forward-slash form with leading `./` and trailing `/`
/// stripped.
pub(crate) fn normalize(path: &str) -> String {
    let mut normalized = path.trim().to_lowercase().replace('\\', "/");
    while let Some(rest) = normalized.strip_prefix("./") {
        normalized = rest.to_string();
    }
    normalized.trim_end_matches('/').to_string()
}

/// Final component of a normalized path.
pub(crate) fn basename(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Everything before the final component; empty for bare filenames.
pub(crate) fn parent_dir(path: &str) -> &str {
    match path.rfind('/') {
        Some(idx) => &path[..idx],
        None => "",
    }
}
