//! Build-cache snapshot: locate, parse, and filter a prior CMakeCache.txt

use crate::util::paths::display_path;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Cache locations relative to the repository root, probed in order.
/// In-source runs leave the cache at the root; the rest are conventional
/// out-of-source build directories.
const CACHE_LOCATIONS: &[&str] = &[
    "CMakeCache.txt",
    "build/CMakeCache.txt",
    "build/app/CMakeCache.txt",
];

/// Cache variables worth surfacing in the diagnostic report
const KEPT_KEYS: &[&str] = &[
    "CMAKE_GENERATOR",
    "CMAKE_GENERATOR_PLATFORM",
    "CMAKE_CXX_COMPILER",
    "VULKAN_SDK",
    "Vulkan_INCLUDE_DIR",
    "Vulkan_LIBRARY",
    "glslang_DIR",
    "draco_DIR",
    "Ktx_DIR",
    "CURL_DIR",
    "Freetype_DIR",
];

/// Selected variables from a located build-cache file
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CacheSnapshot {
    /// Location of the cache file, forward-slash normalized
    pub path: String,
    /// Kept variables present in the cache
    pub vars: BTreeMap<String, String>,
}

/// Locates the build-cache file for a repository, if any
pub fn locate_cache(repo: &Path) -> Option<PathBuf> {
    CACHE_LOCATIONS
        .iter()
        .map(|rel| rel.split('/').fold(repo.to_path_buf(), |p, seg| p.join(seg)))
        .find(|p| p.is_file())
}

/// Parses `KEY:TYPE=VALUE` cache lines into a key/value map.
///
/// Blank lines, `//` and `#` comments, and malformed lines are skipped.
pub fn parse_cache_vars(text: &str) -> BTreeMap<String, String> {
    let mut vars = BTreeMap::new();
    for line in text.lines() {
        if line.is_empty() || line.starts_with("//") || line.starts_with('#') {
            continue;
        }
        if !line.contains(':') {
            continue;
        }
        let Some((key_type, value)) = line.split_once('=') else {
            continue;
        };
        let key = key_type
            .split_once(':')
            .map_or(key_type, |(key, _)| key)
            .trim();
        vars.insert(key.to_string(), value.trim().to_string());
    }
    vars
}

/// Reads the cache snapshot for a repository.
///
/// Absent cache file yields `None`; an unreadable file yields a snapshot
/// with no variables. Neither is an error: the cache is a diagnostic aid,
/// not an input the tool depends on.
pub fn cache_snapshot(repo: &Path) -> Option<CacheSnapshot> {
    let path = locate_cache(repo)?;
    let vars = match fs::read_to_string(&path) {
        Ok(text) => {
            let all = parse_cache_vars(&text);
            KEPT_KEYS
                .iter()
                .filter_map(|key| all.get(*key).map(|v| (key.to_string(), v.clone())))
                .collect()
        }
        Err(err) => {
            debug!(path = %path.display(), error = %err, "Cache file unreadable, treating as empty");
            BTreeMap::new()
        }
    };

    Some(CacheSnapshot {
        path: display_path(&path),
        vars,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const SAMPLE: &str = "\
// This is the CMakeCache file.
# For build in directory: /v/build

CMAKE_GENERATOR:INTERNAL=Ninja
CMAKE_CXX_COMPILER:FILEPATH=/usr/bin/c++
Ktx_DIR:PATH=/v/lib/KTX/lib/cmake
CUSTOM_FLAG:BOOL=ON
malformed line without separators
also=no-type-colon
";

    #[test]
    fn test_parse_skips_comments_and_malformed_lines() {
        let vars = parse_cache_vars(SAMPLE);
        assert_eq!(vars.get("CMAKE_GENERATOR").map(String::as_str), Some("Ninja"));
        assert_eq!(
            vars.get("Ktx_DIR").map(String::as_str),
            Some("/v/lib/KTX/lib/cmake")
        );
        assert!(!vars.contains_key("malformed line without separators"));
        assert!(!vars.contains_key("also"));
    }

    #[test]
    fn test_snapshot_filters_to_kept_keys() {
        let repo = TempDir::new().unwrap();
        fs::write(repo.path().join("CMakeCache.txt"), SAMPLE).unwrap();

        let snapshot = cache_snapshot(repo.path()).unwrap();
        assert!(snapshot.vars.contains_key("CMAKE_GENERATOR"));
        assert!(snapshot.vars.contains_key("Ktx_DIR"));
        // Present in the cache but not in the kept set
        assert!(!snapshot.vars.contains_key("CUSTOM_FLAG"));
    }

    #[test]
    fn test_locate_prefers_in_source_cache() {
        let repo = TempDir::new().unwrap();
        fs::create_dir_all(repo.path().join("build")).unwrap();
        fs::write(repo.path().join("CMakeCache.txt"), "").unwrap();
        fs::write(repo.path().join("build/CMakeCache.txt"), "").unwrap();

        assert_eq!(
            locate_cache(repo.path()),
            Some(repo.path().join("CMakeCache.txt"))
        );
    }

    #[test]
    fn test_locate_falls_back_to_build_dirs() {
        let repo = TempDir::new().unwrap();
        fs::create_dir_all(repo.path().join("build/app")).unwrap();
        fs::write(repo.path().join("build/app/CMakeCache.txt"), "").unwrap();

        assert_eq!(
            locate_cache(repo.path()),
            Some(repo.path().join("build/app/CMakeCache.txt"))
        );
    }

    #[test]
    fn test_no_cache_file() {
        let repo = TempDir::new().unwrap();
        assert_eq!(cache_snapshot(repo.path()), None);
    }
}
