//! Fixed-path existence checks and build-cache inspection
//!
//! Simple collaborators around the discovery core: no decision logic, only
//! direct probes against known locations. Every absence is reportable data,
//! never an error.

pub mod cache;
pub mod headers;
pub mod sdk;

use serde::Serialize;
use std::path::Path;

use crate::util::paths::display_path;

/// Result of one fixed existence probe
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CheckResult {
    /// Human-facing check label
    pub name: String,
    /// Whether the probed path exists
    pub ok: bool,
    /// The probed path, forward-slash normalized
    pub detail: String,
}

impl CheckResult {
    /// Probes a path and records the outcome
    pub fn probe(name: impl Into<String>, path: &Path) -> Self {
        Self {
            name: name.into(),
            ok: path.exists(),
            detail: display_path(path),
        }
    }
}

pub use cache::{cache_snapshot, CacheSnapshot};
pub use headers::header_checks;
pub use sdk::{locate_sdk, sdk_report, SdkReport};
