//! Recursive scanner for CMake package config artifacts

use crate::discovery::patterns::{infer_package_name, is_config_artifact, is_excluded_dir};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, warn};
use walkdir::WalkDir;

/// A discovered configuration artifact
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ConfigHit {
    /// Package name inferred from the artifact filename
    pub package: String,
    /// Location of the artifact
    pub path: PathBuf,
}

/// Scanner for discovering `*Config.cmake` / `*-config.cmake` artifacts
/// under a vendor tree
pub struct ConfigScanner {
    root: PathBuf,
}

impl ConfigScanner {
    /// Creates a scanner rooted at the vendor tree's dependency folder
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Scans the tree for configuration artifacts.
    ///
    /// Version-control and build-cache directories are skipped. The result
    /// order follows directory iteration and is not guaranteed; callers sort
    /// before use. A nonexistent root yields an empty result: "dependency
    /// not yet built" is the expected case this tool surfaces, not an error.
    pub fn scan(&self) -> Vec<ConfigHit> {
        if !self.root.exists() {
            debug!(root = %self.root.display(), "Scan root does not exist, returning no hits");
            return Vec::new();
        }

        let mut hits = Vec::new();
        for entry in WalkDir::new(&self.root)
            .into_iter()
            .filter_entry(|e| e.path() == self.root || !is_excluded_dir(e.path()))
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    warn!(error = %err, "Skipping unreadable directory entry");
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            if let Some(name) = entry.file_name().to_str() {
                if is_config_artifact(name) {
                    debug!(path = %entry.path().display(), "Discovered config artifact");
                    hits.push(ConfigHit {
                        package: infer_package_name(name).to_string(),
                        path: entry.into_path(),
                    });
                }
            }
        }

        debug!(root = %self.root.display(), hits = hits.len(), "Config scan completed");
        hits
    }

    /// Scans and sorts hits by path for deterministic downstream selection
    pub fn scan_sorted(&self) -> Vec<ConfigHit> {
        let mut hits = self.scan();
        hits.sort_by(|a, b| a.path.cmp(&b.path));
        hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_vendor_tree() -> TempDir {
        let dir = TempDir::new().unwrap();
        let base = dir.path();

        fs::create_dir_all(base.join("KTX/lib/cmake")).unwrap();
        fs::write(base.join("KTX/lib/cmake/KtxConfig.cmake"), "").unwrap();

        fs::create_dir_all(base.join("curl/install")).unwrap();
        fs::write(base.join("curl/install/curl-config.cmake"), "").unwrap();

        // Noise that must be skipped
        fs::create_dir_all(base.join(".git/modules")).unwrap();
        fs::write(base.join(".git/modules/gitConfig.cmake"), "").unwrap();
        fs::create_dir_all(base.join("zlib/CMakeFiles")).unwrap();
        fs::write(base.join("zlib/CMakeFiles/zlibConfig.cmake"), "").unwrap();

        // Non-artifact files
        fs::write(base.join("KTX/lib/cmake/KtxConfigVersion.cmake"), "").unwrap();
        fs::write(base.join("curl/CMakeLists.txt"), "").unwrap();

        dir
    }

    #[test]
    fn test_scan_discovers_both_conventions() {
        let tree = create_vendor_tree();
        let hits = ConfigScanner::new(tree.path()).scan_sorted();

        let packages: Vec<&str> = hits.iter().map(|h| h.package.as_str()).collect();
        assert_eq!(packages.len(), 2);
        assert!(packages.contains(&"Ktx"));
        assert!(packages.contains(&"curl"));
    }

    #[test]
    fn test_scan_excludes_git_and_cmakefiles() {
        let tree = create_vendor_tree();
        let hits = ConfigScanner::new(tree.path()).scan();

        assert!(!hits.iter().any(|h| h.path.to_string_lossy().contains(".git")));
        assert!(!hits
            .iter()
            .any(|h| h.path.to_string_lossy().contains("CMakeFiles")));
    }

    #[test]
    fn test_scan_nonexistent_root_is_empty() {
        let scanner = ConfigScanner::new("/nonexistent/vendor/tree");
        assert!(scanner.scan().is_empty());
    }

    #[test]
    fn test_scan_is_idempotent_after_sort() {
        let tree = create_vendor_tree();
        let scanner = ConfigScanner::new(tree.path());
        assert_eq!(scanner.scan_sorted(), scanner.scan_sorted());
    }
}
