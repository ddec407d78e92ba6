//! vendiag - vendored dependency diagnostics for CMake builds
//!
//! This library inspects a repository's vendored third-party tree and
//! reports, for each wanted package, whether a build-system-discoverable
//! configuration artifact exists, where it lives, and which configure flag
//! would make a downstream build locate it. CMake's find_package() errors
//! are noisy; vendiag summarizes what is actually in-tree versus what is
//! still missing.
//!
//! # Core Concepts
//!
//! - **Config artifact**: a `*Config.cmake` / `*-config.cmake` file a build
//!   consults to locate an already-built dependency
//! - **Want list**: the package identifiers to resolve, explicit or derived
//!   from vendor directory names
//! - **Bounded discovery**: per-library scans for build-system entrypoints
//!   that stop at a fixed hit cap, so arbitrarily large vendored trees stay
//!   cheap to inspect
//!
//! # Example Usage
//!
//! ```no_run
//! use vendiag::report::{build_report, Environment};
//! use vendiag::WantSpec;
//! use std::path::{Path, PathBuf};
//!
//! let environment = Environment {
//!     sdk_root: None,
//!     temp_base: PathBuf::from("/tmp"),
//! };
//! let want = WantSpec::Explicit(vec!["Ktx".to_string()]);
//! let report = build_report(Path::new("/path/to/repo"), &environment, &want, false)?;
//!
//! for matched in &report.suggested_flags {
//!     println!("{}", matched.flag);
//! }
//! # Ok::<(), vendiag::report::ReportError>(())
//! ```
//!
//! # Project Structure
//!
//! - [`discovery`]: artifact scanning, matching, scoring, entrypoint discovery
//! - [`checks`]: fixed-path SDK/header probes and the build-cache snapshot
//! - [`report`]: per-invocation report assembly
//! - [`cli`]: argument surface and output formatting

// Public modules
pub mod checks;
pub mod cli;
pub mod discovery;
pub mod report;
pub mod util;

// Re-export key types for convenient access
pub use checks::{CacheSnapshot, CheckResult, SdkReport};
pub use discovery::{ConfigHit, ConfigScanner, EntrypointScanner, WantSpec};
pub use report::{build_report, DiagnosticReport, Environment, LibraryReport, ReportError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
