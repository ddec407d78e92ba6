//! Wanted-package list resolution

use std::fs;
use std::path::Path;
use tracing::debug;

/// Default wanted packages when no explicit list is supplied
pub const DEFAULT_WANTED: &[&str] = &["glslang", "Ktx", "draco", "CURL", "Freetype"];

/// Vendor directory names whose CMake package name differs from the
/// directory name. Keys are lower-cased directory names.
const DIR_NAME_EXCEPTIONS: &[(&str, &str)] = &[
    ("zlib", "ZLIB"),
    ("libpng", "PNG"),
    ("ktx", "Ktx"),
    ("vulkansdk", "Vulkan"),
];

/// Vendor directories that are not dependencies: the project's own source
/// and its direct consumer plugins. Compared case-insensitively.
const EXCLUDED_VENDOR_DIRS: &[&str] = &["lua", "vulkanscenegraph", "vsgxchange"];

/// How the wanted-package list is produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WantSpec {
    /// Caller-supplied package names
    Explicit(Vec<String>),
    /// Derive the list from the vendor tree's directory names
    AutoDerive,
}

/// Immediate subdirectory names of the vendor root, sorted
/// case-insensitively. An absent root yields an empty list.
pub fn vendor_dir_names(vendor_root: &Path) -> Vec<String> {
    let entries = match fs::read_dir(vendor_root) {
        Ok(entries) => entries,
        Err(_) => return Vec::new(),
    };

    let mut names: Vec<String> = entries
        .flatten()
        .filter(|e| e.path().is_dir())
        .filter_map(|e| e.file_name().to_str().map(str::to_string))
        .collect();
    names.sort_by_key(|n| n.to_lowercase());
    names
}

/// Resolves the wanted-package list for one invocation.
///
/// Both modes produce a list with no case-insensitive duplicates, preserving
/// first-occurrence order.
pub fn resolve_want_list(spec: &WantSpec, vendor_root: &Path) -> Vec<String> {
    let raw = match spec {
        WantSpec::Explicit(names) => names.clone(),
        WantSpec::AutoDerive => auto_want_list(&vendor_dir_names(vendor_root)),
    };
    dedupe_case_insensitive(raw)
}

/// Derives wanted package names from vendor directory names: maps known
/// directory-name exceptions to canonical package names and drops
/// non-dependency directories.
pub fn auto_want_list(dir_names: &[String]) -> Vec<String> {
    let mapped = dir_names.iter().map(|dir| {
        let key = dir.to_lowercase();
        DIR_NAME_EXCEPTIONS
            .iter()
            .find(|(from, _)| *from == key)
            .map(|(_, to)| to.to_string())
            .unwrap_or_else(|| dir.clone())
    });

    let kept: Vec<String> = mapped
        .filter(|name| {
            !EXCLUDED_VENDOR_DIRS
                .iter()
                .any(|excluded| name.eq_ignore_ascii_case(excluded))
        })
        .collect();

    debug!(derived = kept.len(), "Auto-derived want list");
    kept
}

/// Maps a single vendor directory name to its canonical package name
pub fn canonical_package_name(dir_name: &str) -> String {
    let key = dir_name.to_lowercase();
    DIR_NAME_EXCEPTIONS
        .iter()
        .find(|(from, _)| *from == key)
        .map(|(_, to)| to.to_string())
        .unwrap_or_else(|| dir_name.to_string())
}

fn dedupe_case_insensitive(names: Vec<String>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    let mut out = Vec::new();
    for name in names {
        let folded = name.to_lowercase();
        if !seen.contains(&folded) {
            seen.push(folded);
            out.push(name);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn strings(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_auto_want_applies_exception_map() {
        let out = auto_want_list(&strings(&["zlib", "libpng", "KTX", "VulkanSDK", "draco"]));
        assert_eq!(out, strings(&["ZLIB", "PNG", "Ktx", "Vulkan", "draco"]));
    }

    #[test]
    fn test_auto_want_drops_excluded_dirs_any_casing() {
        let out = auto_want_list(&strings(&["Lua", "VulkanSceneGraph", "vsgXchange", "curl"]));
        assert_eq!(out, strings(&["curl"]));
    }

    #[test]
    fn test_resolve_dedupes_case_insensitively_preserving_order() {
        let spec = WantSpec::Explicit(strings(&["KTX", "ktx", "curl", "Ktx", "CURL"]));
        let out = resolve_want_list(&spec, Path::new("/nonexistent"));
        assert_eq!(out, strings(&["KTX", "curl"]));
    }

    #[test]
    fn test_resolve_auto_from_tree() {
        let dir = TempDir::new().unwrap();
        for name in ["zlib", "curl", "lua", "KTX"] {
            fs::create_dir(dir.path().join(name)).unwrap();
        }
        // Files are not vendor directories
        fs::write(dir.path().join("README.md"), "").unwrap();

        let out = resolve_want_list(&WantSpec::AutoDerive, dir.path());
        assert_eq!(out, strings(&["curl", "Ktx", "ZLIB"]));
    }

    #[test]
    fn test_vendor_dir_names_sorted_case_insensitively() {
        let dir = TempDir::new().unwrap();
        for name in ["Zlib", "curl", "KTX"] {
            fs::create_dir(dir.path().join(name)).unwrap();
        }
        assert_eq!(
            vendor_dir_names(dir.path()),
            strings(&["curl", "KTX", "Zlib"])
        );
    }

    #[test]
    fn test_vendor_dir_names_absent_root() {
        assert!(vendor_dir_names(Path::new("/nonexistent/root")).is_empty());
    }

    #[test]
    fn test_canonical_package_name() {
        assert_eq!(canonical_package_name("KTX"), "Ktx");
        assert_eq!(canonical_package_name("freetype"), "freetype");
    }
}
