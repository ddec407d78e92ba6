//! Matching wanted packages against discovered config artifacts

use crate::discovery::scanner::ConfigHit;
use crate::discovery::scorer;
use crate::util::paths::display_path;
use std::path::{Path, PathBuf};

/// Collects plausible candidate directories for one wanted package.
///
/// Tier 1: hits whose inferred package name equals the wanted name
/// case-insensitively. Tier 2, only when Tier 1 is empty: hits where the
/// wanted name occurs as a case-insensitive substring of the inferred name
/// or of the raw filename. Vendored packages frequently expose a config
/// filename that differs from the canonical package identifier in casing,
/// hyphenation, or abbreviation; the exact tier avoids false positives and
/// the fuzzy tier recovers the rest.
pub fn candidate_dirs(hits: &[ConfigHit], wanted: &str) -> Vec<PathBuf> {
    let exact: Vec<PathBuf> = hits
        .iter()
        .filter(|hit| hit.package.eq_ignore_ascii_case(wanted))
        .filter_map(parent_dir)
        .collect();
    if !exact.is_empty() {
        return exact;
    }

    let wanted_lower = wanted.to_ascii_lowercase();
    hits.iter()
        .filter(|hit| {
            hit.package.to_ascii_lowercase().contains(&wanted_lower)
                || hit
                    .path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n.to_ascii_lowercase().contains(&wanted_lower))
        })
        .filter_map(parent_dir)
        .collect()
}

/// Selects the best config directory for one wanted package, or `None` when
/// the package is unmatched. Expects hits pre-sorted by path.
pub fn best_config_dir(hits: &[ConfigHit], wanted: &str) -> Option<PathBuf> {
    let candidates = candidate_dirs(hits, wanted);
    scorer::select_best(&candidates).cloned()
}

/// Synthesizes the configure flag that points a downstream CMake at the
/// selected config directory.
pub fn suggest_flag(package: &str, config_dir: &Path) -> String {
    format!("-D{}_DIR=\"{}\"", package, display_path(config_dir))
}

fn parent_dir(hit: &ConfigHit) -> Option<PathBuf> {
    hit.path.parent().map(Path::to_path_buf)
}
