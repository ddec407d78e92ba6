//! Per-invocation diagnostic report assembly
//!
//! Pulls the discovery pipeline and the fixed-path checks together into one
//! serializable aggregate. Environment lookups are threaded in explicitly so
//! report construction is a pure function of (tree snapshot, configuration)
//! and can run against synthetic trees in tests.

use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

use crate::checks::{cache_snapshot, header_checks, sdk_report, CacheSnapshot, CheckResult, SdkReport};
use crate::discovery::entrypoints::EntrypointScanner;
use crate::discovery::matcher::{best_config_dir, suggest_flag};
use crate::discovery::scanner::{ConfigHit, ConfigScanner};
use crate::discovery::subdir::select_add_subdirectory;
use crate::discovery::wantlist::{canonical_package_name, resolve_want_list, vendor_dir_names, WantSpec};
use crate::util::paths::display_path;

/// Vendor tree location relative to the repository root
const VENDOR_DIR: &str = "lib";

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("repository root not found: {0}")]
    RepoNotFound(PathBuf),
}

/// Process-environment inputs, read once at the CLI boundary
#[derive(Debug, Clone, Default)]
pub struct Environment {
    /// Value of the platform SDK root variable, when set
    pub sdk_root: Option<PathBuf>,
    /// Base directory for the out-of-source build suggestion
    pub temp_base: PathBuf,
}

/// A wanted package resolved to its best config directory
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PackageMatch {
    /// Wanted package name, caller casing preserved
    pub package: String,
    /// Selected config directory
    pub config_dir: String,
    /// Configure flag that points a downstream build at the directory
    pub flag: String,
}

/// Per vendored-library discovery summary
#[derive(Debug, Clone, Serialize)]
pub struct LibraryReport {
    /// Vendor directory name
    pub name: String,
    /// Library root path
    pub root: String,
    /// Directories containing a CMake build description
    pub cmake_roots: Vec<String>,
    /// Alternative build-system marker files
    pub build_markers: Vec<String>,
    /// Package-config template files
    pub config_templates: Vec<String>,
    /// `include/` directory when present at the root
    pub include_dir: Option<String>,
    /// `src/` directory when present at the root
    pub src_dir: Option<String>,
    /// Heuristically-named entry source files
    pub entry_files: Vec<String>,
    /// Best config directory matched for this library's package name
    pub config_dir: Option<String>,
    /// Recommended directory to embed via `add_subdirectory()`
    pub add_subdirectory: Option<String>,
}

/// The full diagnostic report for one invocation
#[derive(Debug, Clone, Serialize)]
pub struct DiagnosticReport {
    /// Repository root, forward-slash normalized
    pub repo: String,
    /// Host platform name
    pub platform: String,
    /// Whether in-source build artifacts were detected at the root
    pub in_source_build_artifacts: bool,
    /// Suggested out-of-source configure command
    pub suggested_out_of_source: String,
    /// Immediate vendor directory names
    pub lib_dirs: Vec<String>,
    /// Platform SDK presence
    pub sdk: SdkReport,
    /// Known third-party header probes
    pub headers: Vec<CheckResult>,
    /// Discovered config artifacts grouped by inferred package name
    pub configs_found: BTreeMap<String, Vec<String>>,
    /// Resolved want-list
    pub want: Vec<String>,
    /// Wanted packages with no matched artifact
    pub missing_configs: Vec<String>,
    /// One suggested flag per matched package, in want-list order
    pub suggested_flags: Vec<PackageMatch>,
    /// Build-cache snapshot, when a cache file exists
    pub cmake_cache: Option<CacheSnapshot>,
    /// Per vendored-library discovery summaries
    pub libraries: Vec<LibraryReport>,
}

/// Builds the diagnostic report for one repository.
///
/// The only fatal condition is a nonexistent repository root; every other
/// absence folds into the report as data.
pub fn build_report(
    repo: &Path,
    env: &Environment,
    want: &WantSpec,
    deep: bool,
) -> Result<DiagnosticReport, ReportError> {
    if !repo.exists() {
        return Err(ReportError::RepoNotFound(repo.to_path_buf()));
    }

    let vendor_root = repo.join(VENDOR_DIR);
    info!(repo = %repo.display(), deep, "Building diagnostic report");

    let hits = ConfigScanner::new(&vendor_root).scan_sorted();
    let want_list = resolve_want_list(want, &vendor_root);
    debug!(hits = hits.len(), wanted = want_list.len(), "Discovery inputs resolved");

    let mut missing_configs = Vec::new();
    let mut suggested_flags = Vec::new();
    for package in &want_list {
        match best_config_dir(&hits, package) {
            Some(dir) => suggested_flags.push(PackageMatch {
                package: package.clone(),
                config_dir: display_path(&dir),
                flag: suggest_flag(package, &dir),
            }),
            None => missing_configs.push(package.clone()),
        }
    }
    missing_configs.sort_by_key(|name| name.to_lowercase());

    let lib_dirs = vendor_dir_names(&vendor_root);
    let scanner = EntrypointScanner::new(deep);
    let libraries = lib_dirs
        .iter()
        .map(|name| library_report(&scanner, &vendor_root, name, &hits))
        .collect();

    Ok(DiagnosticReport {
        repo: display_path(repo),
        platform: std::env::consts::OS.to_string(),
        in_source_build_artifacts: in_source_build_artifacts(repo),
        suggested_out_of_source: suggest_out_of_source(repo, &env.temp_base),
        lib_dirs,
        sdk: sdk_report(env.sdk_root.as_deref(), repo),
        headers: header_checks(repo),
        configs_found: group_hits(&hits),
        want: want_list,
        missing_configs,
        suggested_flags,
        cmake_cache: cache_snapshot(repo),
        libraries,
    })
}

fn library_report(
    scanner: &EntrypointScanner,
    vendor_root: &Path,
    name: &str,
    hits: &[ConfigHit],
) -> LibraryReport {
    let root = vendor_root.join(name);
    let entrypoints = scanner.build_entrypoints(&root);
    let layout = scanner.source_layout(&root);
    let add_subdirectory = select_add_subdirectory(&entrypoints.cmake_roots, &root);
    let config_dir = best_config_dir(hits, &canonical_package_name(name));

    LibraryReport {
        name: name.to_string(),
        root: display_path(&root),
        cmake_roots: display_paths(&entrypoints.cmake_roots),
        build_markers: display_paths(&entrypoints.build_markers),
        config_templates: display_paths(&entrypoints.config_templates),
        include_dir: layout.include_dir.as_deref().map(display_path),
        src_dir: layout.src_dir.as_deref().map(display_path),
        entry_files: display_paths(&layout.entry_files),
        config_dir: config_dir.as_deref().map(display_path),
        add_subdirectory: add_subdirectory.as_deref().map(display_path),
    }
}

fn group_hits(hits: &[ConfigHit]) -> BTreeMap<String, Vec<String>> {
    let mut grouped: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for hit in hits {
        grouped
            .entry(hit.package.clone())
            .or_default()
            .push(display_path(&hit.path));
    }
    grouped
}

fn in_source_build_artifacts(repo: &Path) -> bool {
    repo.join("CMakeCache.txt").exists() || repo.join("CMakeFiles").exists()
}

fn suggest_out_of_source(repo: &Path, temp_base: &Path) -> String {
    let name = repo
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("vendored");
    let build_dir = temp_base.join(format!("{}_build", name));
    format!(
        "cmake -S \"{}\" -B \"{}\"",
        display_path(repo),
        display_path(&build_dir)
    )
}

fn display_paths(paths: &[PathBuf]) -> Vec<String> {
    paths.iter().map(|p| display_path(p)).collect()
}
