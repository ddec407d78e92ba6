//! Dependency discovery and match scoring
//!
//! The decision core of vendiag: enumerating configuration artifacts under a
//! vendor tree, inferring package identities from artifact filenames,
//! matching wanted packages exact-then-fuzzy, ranking candidate directories,
//! and bounded discovery of build-system entrypoints per vendored library.

pub mod entrypoints;
pub mod matcher;
pub mod patterns;
pub mod scanner;
pub mod scorer;
pub mod subdir;
pub mod wantlist;

pub use entrypoints::{BuildEntrypointSet, EntrypointScanner, SourceLayout};
pub use matcher::{best_config_dir, candidate_dirs, suggest_flag};
pub use patterns::{infer_package_name, is_config_artifact};
pub use scanner::{ConfigHit, ConfigScanner};
pub use scorer::{select_best, CandidateScore};
pub use subdir::select_add_subdirectory;
pub use wantlist::{resolve_want_list, WantSpec, DEFAULT_WANTED};
