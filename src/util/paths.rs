//! Path normalization and matching helpers
//!
//! Report output and candidate scoring both compare paths as strings, so
//! every path is rendered the same way: forward slashes on all platforms.

use std::path::{Component, Path};

/// Renders a path with forward slashes regardless of platform.
pub fn display_path(path: &Path) -> String {
    path.display().to_string().replace('\\', "/")
}

/// Case-insensitive test for a whole path segment.
///
/// `has_segment("/v/lib/cmake", "cmake")` is true; the substring
/// `"cmake"` inside a longer segment such as `cmake-build` does not count.
pub fn has_segment(path: &Path, segment: &str) -> bool {
    path.components().any(|c| match c {
        Component::Normal(name) => name
            .to_str()
            .is_some_and(|n| n.eq_ignore_ascii_case(segment)),
        _ => false,
    })
}

/// Number of components in a path, used as a shallowness tie-break.
pub fn depth(path: &Path) -> usize {
    path.components().count()
}

/// Last `n` normal segments of a path, lower-cased, oldest first.
pub fn tail_segments(path: &Path, n: usize) -> Vec<String> {
    let segments: Vec<String> = path
        .components()
        .filter_map(|c| match c {
            Component::Normal(name) => name.to_str().map(|s| s.to_ascii_lowercase()),
            _ => None,
        })
        .collect();
    let start = segments.len().saturating_sub(n);
    segments[start..].to_vec()
}
