//! Known third-party header markers in the vendored tree

use crate::checks::CheckResult;
use std::path::{Path, PathBuf};

/// Header files whose presence indicates a vendored library's source tree
/// is populated. Paths are relative to the repository root.
const HEADER_MARKERS: &[(&str, &str)] = &[
    (
        "glslang header (ShaderLang.h)",
        "lib/glslang/glslang/Public/ShaderLang.h",
    ),
    (
        "draco header (encode.h)",
        "lib/draco/src/draco/compression/encode.h",
    ),
    (
        "freetype header (freetype.h)",
        "lib/freetype/include/freetype/freetype.h",
    ),
    ("KTX header (ktx.h)", "lib/KTX/include/KHR/ktx.h"),
    ("curl header (curl.h)", "lib/curl/include/curl/curl.h"),
];

/// Probes every known header marker under the repository root
pub fn header_checks(repo: &Path) -> Vec<CheckResult> {
    HEADER_MARKERS
        .iter()
        .map(|(name, rel)| CheckResult::probe(*name, &join_rel(repo, rel)))
        .collect()
}

fn join_rel(root: &Path, rel: &str) -> PathBuf {
    rel.split('/').fold(root.to_path_buf(), |p, seg| p.join(seg))
}
