//! Output formatting for the diagnostic report
//!
//! Provides formatters for JSON, YAML, and human-readable text. The human
//! form mirrors the order a build troubleshooter reads things in: SDK and
//! headers first, then config discovery, then per-library entrypoints.

use anyhow::{Context, Result};

use crate::checks::CheckResult;
use crate::report::{DiagnosticReport, LibraryReport};

/// Output format enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable formatted text
    Human,
    /// JSON format (machine-readable)
    Json,
    /// YAML format (machine-readable, version-control friendly)
    Yaml,
}

/// Formatter for diagnostic reports
pub struct ReportFormatter {
    format: OutputFormat,
}

impl ReportFormatter {
    /// Creates a formatter with the specified format
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Formats a report according to the configured format
    pub fn format(&self, report: &DiagnosticReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_json(report),
            OutputFormat::Yaml => self.format_yaml(report),
            OutputFormat::Human => Ok(self.format_human(report)),
        }
    }

    fn format_json(&self, report: &DiagnosticReport) -> Result<String> {
        serde_json::to_string_pretty(report).context("Failed to serialize report to JSON")
    }

    fn format_yaml(&self, report: &DiagnosticReport) -> Result<String> {
        serde_yaml::to_string(report).context("Failed to serialize report to YAML")
    }

    fn format_human(&self, report: &DiagnosticReport) -> String {
        let mut out = String::new();

        out.push_str(&format!("repo: {}\n", report.repo));
        out.push_str(&format!("platform: {}\n", report.platform));

        if report.in_source_build_artifacts {
            out.push_str("note: in-source build artifacts detected in repo root\n");
            out.push_str(&format!("recommended: {}\n", report.suggested_out_of_source));
        }

        match &report.sdk.root {
            Some(root) => {
                out.push_str(&format!("\nVULKAN_SDK: {}\n", root));
                for check in &report.sdk.checks {
                    out.push_str(&format!("{}\n", check_line(check)));
                }
            }
            None => out.push_str("\nVULKAN_SDK: missing\n"),
        }

        if !report.headers.is_empty() {
            out.push_str("\nheaders:\n");
            for check in &report.headers {
                out.push_str(&format!("  {}\n", check_line(check)));
            }
        }

        if !report.lib_dirs.is_empty() {
            out.push_str("\nlib folders:\n");
            out.push_str(&format!("  {}\n", report.lib_dirs.join(", ")));
        }

        if !report.configs_found.is_empty() {
            out.push_str("\nconfigs found:\n");
            for (package, paths) in &report.configs_found {
                out.push_str(&format!("  {}:\n", package));
                for path in paths {
                    out.push_str(&format!("    - {}\n", path));
                }
            }
        }

        if !report.missing_configs.is_empty() {
            out.push_str("\nmissing Config.cmake (no config file found under repo/lib):\n");
            for package in &report.missing_configs {
                out.push_str(&format!("  - {}\n", package));
            }
        }

        if !report.suggested_flags.is_empty() {
            out.push_str("\nsuggested -D flags:\n");
            for matched in &report.suggested_flags {
                out.push_str(&format!("  {}\n", matched.flag));
            }
        }

        if let Some(cache) = &report.cmake_cache {
            out.push_str(&format!("\nCMakeCache.txt: {}\n", cache.path));
            let width = cache.vars.keys().map(String::len).max().unwrap_or(0);
            for (key, value) in &cache.vars {
                out.push_str(&format!("  {:<width$} : {}\n", key, value, width = width));
            }
        }

        if !report.libraries.is_empty() {
            out.push_str("\nvendored libraries:\n");
            for library in &report.libraries {
                out.push_str(&library_section(library));
            }
        }

        out
    }
}

fn check_line(check: &CheckResult) -> String {
    let status = if check.ok { "OK" } else { "MISSING" };
    format!("{}: {} -> {}", check.name, status, check.detail)
}

fn library_section(library: &LibraryReport) -> String {
    let mut out = String::new();
    out.push_str(&format!("\n[{}] {}\n", library.name, library.root));

    push_path_list(&mut out, "cmake roots", &library.cmake_roots);
    push_path_list(&mut out, "build markers", &library.build_markers);
    push_path_list(&mut out, "config templates", &library.config_templates);

    if let Some(include_dir) = &library.include_dir {
        out.push_str(&format!("  include: {}\n", include_dir));
    }
    if let Some(src_dir) = &library.src_dir {
        out.push_str(&format!("  src: {}\n", src_dir));
    }
    push_path_list(&mut out, "entry files", &library.entry_files);

    if let Some(config_dir) = &library.config_dir {
        out.push_str(&format!("  config dir: {}\n", config_dir));
    }
    match &library.add_subdirectory {
        Some(dir) => out.push_str(&format!("  add_subdirectory: {}\n", dir)),
        None => out.push_str("  add_subdirectory: (no CMakeLists.txt found)\n"),
    }

    out
}

fn push_path_list(out: &mut String, label: &str, paths: &[String]) {
    if paths.is_empty() {
        return;
    }
    out.push_str(&format!("  {}:\n", label));
    for path in paths {
        out.push_str(&format!("    - {}\n", path));
    }
}
