//! Bounded discovery of build-system entrypoints per vendored library

use crate::discovery::patterns::{
    is_build_marker, is_config_template, is_excluded_dir, CMAKE_LISTS, DEEP_SCAN_CAP,
    DEFAULT_SCAN_CAP,
};
use regex::Regex;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Discovered build-system marker files for one library root
#[derive(Debug, Clone, Default)]
pub struct BuildEntrypointSet {
    /// Directories containing a `CMakeLists.txt`
    pub cmake_roots: Vec<PathBuf>,
    /// Alternative build-system marker files (Meson, Autotools, Bazel, ...)
    pub build_markers: Vec<PathBuf>,
    /// Package-config template files (`*.cmake.in`, `*.pc.in`)
    pub config_templates: Vec<PathBuf>,
}

/// Conventional source-layout facts for one library root
#[derive(Debug, Clone, Default)]
pub struct SourceLayout {
    /// `include/` directory, when present at the root
    pub include_dir: Option<PathBuf>,
    /// `src/` directory, when present at the root
    pub src_dir: Option<PathBuf>,
    /// Heuristically-named entry source files
    pub entry_files: Vec<PathBuf>,
}

/// Per-library scanner with a fixed hit cap per scan.
///
/// Vendored trees can hold hundreds of thousands of files; every scan stops
/// the traversal as soon as its cap is reached, so the cap bounds work
/// performed rather than work reported.
pub struct EntrypointScanner {
    cap: usize,
    main_file: Regex,
    entry_file: Regex,
}

impl EntrypointScanner {
    /// Creates a scanner with the normal or deep hit cap
    pub fn new(deep: bool) -> Self {
        Self::with_cap(if deep { DEEP_SCAN_CAP } else { DEFAULT_SCAN_CAP })
    }

    /// Creates a scanner with a custom hit cap
    pub fn with_cap(cap: usize) -> Self {
        Self {
            cap,
            main_file: Regex::new(r"(?i)^main\.(c|cc|cpp|cxx)$").unwrap(),
            entry_file: Regex::new(r"(?i)^[a-z0-9_\-]*(init|entry)\.(c|cc|cpp|cxx)$").unwrap(),
        }
    }

    /// The configured per-scan hit cap
    pub fn cap(&self) -> usize {
        self.cap
    }

    /// Runs the three bounded marker scans over one library root
    pub fn build_entrypoints(&self, library_root: &Path) -> BuildEntrypointSet {
        let set = BuildEntrypointSet {
            cmake_roots: self.cmake_roots(library_root),
            build_markers: self.bounded_files(library_root, is_build_marker),
            config_templates: self.bounded_files(library_root, is_config_template),
        };
        debug!(
            library = %library_root.display(),
            cmake_roots = set.cmake_roots.len(),
            build_markers = set.build_markers.len(),
            config_templates = set.config_templates.len(),
            "Entrypoint discovery completed"
        );
        set
    }

    /// Directories containing a `CMakeLists.txt`, unique, capped
    pub fn cmake_roots(&self, library_root: &Path) -> Vec<PathBuf> {
        let mut roots: Vec<PathBuf> = Vec::new();
        if self.cap == 0 {
            return roots;
        }
        for entry in self.walk(library_root) {
            if entry.file_name().to_str() != Some(CMAKE_LISTS) {
                continue;
            }
            if let Some(parent) = entry.path().parent() {
                let parent = parent.to_path_buf();
                if !roots.contains(&parent) {
                    roots.push(parent);
                    if roots.len() == self.cap {
                        break;
                    }
                }
            }
        }
        roots
    }

    /// Conventional `include/`/`src/` presence plus the bounded entry-file
    /// scan for one library root
    pub fn source_layout(&self, library_root: &Path) -> SourceLayout {
        let include_dir = existing_dir(library_root.join("include"));
        let src_dir = existing_dir(library_root.join("src"));
        let entry_files = self.bounded_files(library_root, |name| {
            self.main_file.is_match(name) || self.entry_file.is_match(name)
        });

        SourceLayout {
            include_dir,
            src_dir,
            entry_files,
        }
    }

    /// Files whose name satisfies `matches`, stopping at the hit cap
    fn bounded_files(&self, root: &Path, matches: impl Fn(&str) -> bool) -> Vec<PathBuf> {
        let mut hits = Vec::new();
        if self.cap == 0 {
            return hits;
        }
        for entry in self.walk(root) {
            let matched = entry.file_name().to_str().map(&matches).unwrap_or(false);
            if matched {
                hits.push(entry.into_path());
                if hits.len() == self.cap {
                    break;
                }
            }
        }
        hits
    }

    fn walk<'a>(&self, root: &'a Path) -> impl Iterator<Item = walkdir::DirEntry> + 'a {
        WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(move |e| e.path() == root || !is_excluded_dir(e.path()))
            .filter_map(Result::ok)
            .filter(|e| e.file_type().is_file())
    }
}

fn existing_dir(path: PathBuf) -> Option<PathBuf> {
    path.is_dir().then_some(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_library() -> TempDir {
        let dir = TempDir::new().unwrap();
        let base = dir.path();

        fs::write(base.join("CMakeLists.txt"), "").unwrap();
        fs::create_dir_all(base.join("build/cmake")).unwrap();
        fs::write(base.join("build/cmake/CMakeLists.txt"), "").unwrap();
        fs::write(base.join("meson.build"), "").unwrap();
        fs::write(base.join("configure.ac"), "").unwrap();
        fs::write(base.join("KtxConfig.cmake.in"), "").unwrap();
        fs::create_dir_all(base.join("include")).unwrap();
        fs::create_dir_all(base.join("src")).unwrap();
        fs::write(base.join("src/main.cpp"), "").unwrap();
        fs::write(base.join("src/lib_init.c"), "").unwrap();
        fs::write(base.join("src/util.cpp"), "").unwrap();

        dir
    }

    #[test]
    fn test_discovers_cmake_roots_and_markers() {
        let lib = create_library();
        let set = EntrypointScanner::new(false).build_entrypoints(lib.path());

        assert!(set.cmake_roots.contains(&lib.path().to_path_buf()));
        assert!(set.cmake_roots.contains(&lib.path().join("build/cmake")));

        let marker_names: Vec<&str> = set
            .build_markers
            .iter()
            .filter_map(|p| p.file_name().and_then(|n| n.to_str()))
            .collect();
        assert!(marker_names.contains(&"meson.build"));
        assert!(marker_names.contains(&"configure.ac"));

        assert_eq!(set.config_templates.len(), 1);
    }

    #[test]
    fn test_source_layout() {
        let lib = create_library();
        let layout = EntrypointScanner::new(false).source_layout(lib.path());

        assert_eq!(layout.include_dir, Some(lib.path().join("include")));
        assert_eq!(layout.src_dir, Some(lib.path().join("src")));

        let entry_names: Vec<&str> = layout
            .entry_files
            .iter()
            .filter_map(|p| p.file_name().and_then(|n| n.to_str()))
            .collect();
        assert!(entry_names.contains(&"main.cpp"));
        assert!(entry_names.contains(&"lib_init.c"));
        assert!(!entry_names.contains(&"util.cpp"));
    }

    #[test]
    fn test_scan_stops_at_cap() {
        let dir = TempDir::new().unwrap();
        for i in 0..20 {
            let sub = dir.path().join(format!("sub{:02}", i));
            fs::create_dir(&sub).unwrap();
            fs::write(sub.join("Makefile"), "").unwrap();
        }

        let hits = EntrypointScanner::with_cap(3).bounded_files(dir.path(), is_build_marker);
        assert_eq!(hits.len(), 3);
    }

    #[test]
    fn test_deep_cap_never_decreases_results() {
        let lib = create_library();
        let normal = EntrypointScanner::new(false).build_entrypoints(lib.path());
        let deep = EntrypointScanner::new(true).build_entrypoints(lib.path());

        assert!(deep.cmake_roots.len() >= normal.cmake_roots.len());
        assert!(deep.build_markers.len() >= normal.build_markers.len());
        assert!(deep.config_templates.len() >= normal.config_templates.len());
    }

    #[test]
    fn test_cmake_roots_are_unique_and_capped() {
        let dir = TempDir::new().unwrap();
        for i in 0..10 {
            let sub = dir.path().join(format!("module{:02}", i));
            fs::create_dir(&sub).unwrap();
            fs::write(sub.join("CMakeLists.txt"), "").unwrap();
        }

        let roots = EntrypointScanner::with_cap(4).cmake_roots(dir.path());
        assert_eq!(roots.len(), 4);
        let mut deduped = roots.clone();
        deduped.dedup();
        assert_eq!(deduped.len(), roots.len());
    }

    #[test]
    fn test_nonexistent_library_root_is_empty() {
        let scanner = EntrypointScanner::new(false);
        let set = scanner.build_entrypoints(Path::new("/nonexistent/library"));
        assert!(set.cmake_roots.is_empty());
        assert!(set.build_markers.is_empty());
        assert!(set.config_templates.is_empty());
    }
}
