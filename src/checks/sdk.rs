//! Platform SDK location and presence checks

use crate::checks::CheckResult;
use crate::util::paths::display_path;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Vendored SDK location relative to the repository root
const VENDORED_SDK_DIRS: &[&str] = &["lib", "VulkanSDK"];

/// Import-library candidates relative to the SDK root, probed in order
const IMPORT_LIB_CANDIDATES: &[&str] = &[
    "Lib/vulkan-1.lib",
    "Lib/x64/vulkan-1.lib",
    "Lib-ARM64/vulkan-1.lib",
    "Lib-ARM64/arm64/vulkan-1.lib",
];

/// SDK presence summary for the report
#[derive(Debug, Clone, Serialize)]
pub struct SdkReport {
    /// Resolved SDK root, absent when neither the environment nor the
    /// vendored tree provides one
    pub root: Option<String>,
    /// Header and import-library probes under the resolved root
    pub checks: Vec<CheckResult>,
}

/// Resolves the SDK root.
///
/// An explicitly-threaded environment value pointing at an existing path
/// wins; otherwise the vendored SDK subtree is searched and the
/// lexicographically-last version directory is taken as latest. The
/// environment value is passed in by the caller so this stays a pure
/// function of its inputs.
pub fn locate_sdk(env_sdk_root: Option<&Path>, repo: &Path) -> Option<PathBuf> {
    if let Some(root) = env_sdk_root {
        if root.exists() {
            debug!(root = %root.display(), "Using SDK root from environment");
            return Some(root.to_path_buf());
        }
    }

    let vendored = VENDORED_SDK_DIRS
        .iter()
        .fold(repo.to_path_buf(), |p, seg| p.join(seg));
    let entries = fs::read_dir(&vendored).ok()?;

    let mut versions: Vec<PathBuf> = entries
        .flatten()
        .map(|e| e.path())
        .filter(|p| p.is_dir())
        .collect();
    versions.sort();
    versions.pop()
}

/// Builds the SDK section of the report
pub fn sdk_report(env_sdk_root: Option<&Path>, repo: &Path) -> SdkReport {
    let Some(root) = locate_sdk(env_sdk_root, repo) else {
        return SdkReport {
            root: None,
            checks: Vec::new(),
        };
    };

    let header = root.join("Include").join("vulkan").join("vulkan.h");
    let mut checks = vec![CheckResult::probe("vulkan.h", &header)];

    let import_lib = IMPORT_LIB_CANDIDATES
        .iter()
        .map(|rel| rel.split('/').fold(root.clone(), |p, seg| p.join(seg)))
        .find(|p| p.exists());
    checks.push(match import_lib {
        Some(path) => CheckResult::probe("vulkan-1.lib", &path),
        None => CheckResult {
            name: "vulkan-1.lib".to_string(),
            ok: false,
            detail: display_path(&root.join("Lib").join("vulkan-1.lib")),
        },
    });

    SdkReport {
        root: Some(display_path(&root)),
        checks,
    }
}
