//! Selection of an embeddable build-subproject directory

use crate::util::paths::{depth, tail_segments};
use std::cmp::Reverse;
use std::path::{Path, PathBuf};

/// Picks the directory to recommend for `add_subdirectory()` from the
/// discovered CMake roots of one library.
///
/// Priority encodes known real-world layout variance: some libraries forbid
/// building from their own root and ship the usable build definition in a
/// nested `build/cmake` directory.
///
/// - last two segments `build/cmake`;
/// - last segment `cmake`;
/// - the library root itself;
/// - otherwise shallower paths win, as a proxy for the conventional
///   top-level entrypoint.
///
/// Full ties resolve to first-encountered order in the pre-sorted candidate
/// list. Returns `None` when no CMake root was discovered.
pub fn select_add_subdirectory(cmake_roots: &[PathBuf], library_root: &Path) -> Option<PathBuf> {
    let mut best: Option<(&PathBuf, (u8, Reverse<usize>))> = None;
    for candidate in cmake_roots {
        let score = (layout_priority(candidate, library_root), Reverse(depth(candidate)));
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((candidate, score)),
        }
    }
    best.map(|(path, _)| path.clone())
}

fn layout_priority(candidate: &Path, library_root: &Path) -> u8 {
    if tail_segments(candidate, 2) == ["build", "cmake"] {
        3
    } else if tail_segments(candidate, 1) == ["cmake"] {
        2
    } else if candidate == library_root {
        1
    } else {
        0
    }
}
