//! Path normalization and splitting for the hierarchical namespace
//!
//! Every component works on canonical absolute paths: a leading separator,
//! no redundant separators, no trailing separator. The root is `/`.

/// Path separator for namespace paths, independent of the host platform.
pub const SEPARATOR: char = '/';

/// Normalize a raw path string into its canonical absolute form.
///
/// Redundant separators are collapsed and a trailing separator is trimmed;
/// the empty string normalizes to the root.
///
/// # Examples
///
/// ```
/// use dfs_namespace::path::normalize;
///
/// assert_eq!(normalize("usr//local/"), "/usr/local");
/// assert_eq!(normalize(""), "/");
/// ```
pub fn normalize(raw: &str) -> String {
    let mut path = String::with_capacity(raw.len() + 1);
    for segment in raw.split(SEPARATOR).filter(|s| !s.is_empty()) {
        path.push(SEPARATOR);
        path.push_str(segment);
    }
    if path.is_empty() {
        path.push(SEPARATOR);
    }
    path
}

/// Split a path into its parent path and leaf segment.
///
/// The root splits into `("/", "")`.
pub fn split(path: &str) -> (String, String) {
    let path = normalize(path);
    if path.len() == 1 {
        return (path, String::new());
    }
    let idx = path.rfind(SEPARATOR).unwrap_or(0);
    if idx == 0 {
        (SEPARATOR.to_string(), path[1..].to_string())
    } else {
        (path[..idx].to_string(), path[idx + 1..].to_string())
    }
}

/// Join a parent path with a child segment and normalize the result.
pub fn join(parent: &str, child: &str) -> String {
    let mut combined = String::with_capacity(parent.len() + child.len() + 1);
    combined.push_str(parent);
    combined.push(SEPARATOR);
    combined.push_str(child);
    normalize(&combined)
}
