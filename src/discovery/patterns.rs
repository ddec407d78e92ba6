//! Config-artifact filename patterns and scan exclusion rules

use std::path::Path;

/// Conventionally-cased CMake package config suffix (`fooConfig.cmake`)
pub const CONFIG_SUFFIX_CASED: &str = "Config.cmake";

/// All-lowercase variant of the bare config suffix (`fooconfig.cmake`)
pub const CONFIG_SUFFIX_LOWER: &str = "config.cmake";

/// Hyphenated config suffix (`foo-config.cmake`)
pub const CONFIG_SUFFIX_HYPHEN: &str = "-config.cmake";

/// Path segments excluded from every scan: version-control metadata and
/// CMake's own build cache. Matched case-insensitively per segment.
pub const EXCLUDED_SEGMENTS: &[&str] = &[".git", "CMakeFiles"];

/// Primary build-description file (CMake convention)
pub const CMAKE_LISTS: &str = "CMakeLists.txt";

/// Alternative build-system marker filenames
pub const BUILD_MARKERS: &[&str] = &[
    // Meson
    "meson.build",
    // Autotools
    "configure",
    "configure.ac",
    // Make
    "Makefile",
    // Bazel
    "WORKSPACE",
    "BUILD",
    "BUILD.bazel",
    // GN
    "BUILD.gn",
    // Premake
    "premake5.lua",
    // CMake presets
    "CMakePresets.json",
];

/// Package-config template suffixes (`fooConfig.cmake.in`, `foo.pc.in`)
pub const CONFIG_TEMPLATE_SUFFIXES: &[&str] = &[".cmake.in", ".pc.in"];

/// Per-library bounded-scan hit cap in normal mode
pub const DEFAULT_SCAN_CAP: usize = 8;

/// Per-library bounded-scan hit cap in deep mode
pub const DEEP_SCAN_CAP: usize = 64;

/// Checks if a filename is a recognized configuration artifact
///
/// Both recognized conventions (`*Config.cmake` and `*-config.cmake`) share
/// the bare `config.cmake` tail once case is folded.
pub fn is_config_artifact(file_name: &str) -> bool {
    file_name
        .to_ascii_lowercase()
        .ends_with(CONFIG_SUFFIX_LOWER)
}

/// Infers the package name from a configuration-artifact filename
///
/// Strips exactly one recognized suffix and preserves the remainder's
/// original casing. The hyphenated `-config.cmake` form is recognized first:
/// it subsumes the bare form, and stripping only the bare suffix would leave
/// a dangling hyphen. Within the bare form the conventionally-cased
/// `Config.cmake` takes priority over the all-lowercase fallback.
///
/// A filename matching neither convention is returned unchanged; the scanner
/// only forwards matching filenames.
pub fn infer_package_name(file_name: &str) -> &str {
    let lower = file_name.to_ascii_lowercase();
    if lower.ends_with(CONFIG_SUFFIX_HYPHEN) {
        return &file_name[..file_name.len() - CONFIG_SUFFIX_HYPHEN.len()];
    }
    if file_name.ends_with(CONFIG_SUFFIX_CASED) {
        return &file_name[..file_name.len() - CONFIG_SUFFIX_CASED.len()];
    }
    if lower.ends_with(CONFIG_SUFFIX_LOWER) {
        return &file_name[..file_name.len() - CONFIG_SUFFIX_LOWER.len()];
    }
    file_name
}

/// Checks if a directory entry should be excluded from scanning
pub fn is_excluded_dir(path: &Path) -> bool {
    if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
        return EXCLUDED_SEGMENTS
            .iter()
            .any(|seg| name.eq_ignore_ascii_case(seg));
    }
    false
}

/// Checks if a filename is an alternative build-system marker
pub fn is_build_marker(file_name: &str) -> bool {
    BUILD_MARKERS.contains(&file_name)
}

/// Checks if a filename is a package-config template
pub fn is_config_template(file_name: &str) -> bool {
    let lower = file_name.to_ascii_lowercase();
    CONFIG_TEMPLATE_SUFFIXES
        .iter()
        .any(|suffix| lower.ends_with(suffix))
}
