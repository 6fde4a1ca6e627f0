//! Optional-path lookups into loosely structured JSON documents.

use serde_json::Value;

/// Walks `path` through nested objects, returning `None` as soon as a key
/// is absent or an intermediate value is not an object.
///
/// Never fails; callers decide whether absence is acceptable.
pub fn lookup<'a>(document: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter()
        .try_fold(document, |current, key| current.as_object()?.get(*key))
}

/// Renders a lookup path the way it appears in error messages (`scores.effective`)
pub fn display_path(path: &[&str]) -> String {
    path.join(".")
}
