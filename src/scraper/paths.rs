// paths.rs
//
// Tiny path-expression evaluator used by the field mapping table.
// Supports dotted object keys and bracketed array indices:
//   "status.published"
//   "media.images[0].url"
// A path that fails to resolve at any step yields None.

use serde_json::Value;

/// Resolve `path` against `root`, returning a reference to the value it
/// points at, or `None` if any segment is missing or of the wrong shape.
pub fn lookup<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = root;
    for segment in path.split('.') {
        let (key, indices) = split_indices(segment)?;
        if !key.is_empty() {
            current = current.as_object()?.get(key)?;
        }
        for idx in indices {
            current = current.as_array()?.get(idx)?;
        }
    }
    Some(current)
}

/// Split a segment like `images[0][2]` into its key and index parts.
/// Malformed bracket syntax resolves to nothing rather than panicking.
fn split_indices(segment: &str) -> Option<(&str, Vec<usize>)> {
    let Some(bracket) = segment.find('[') else {
        return Some((segment, Vec::new()));
    };

    let key = &segment[..bracket];
    let mut indices = Vec::new();
    let mut rest = &segment[bracket..];
    while let Some(stripped) = rest.strip_prefix('[') {
        let close = stripped.find(']')?;
        indices.push(stripped[..close].parse().ok()?);
        rest = &stripped[close + 1..];
    }
    if !rest.is_empty() {
        return None;
    }
    Some((key, indices))
}
