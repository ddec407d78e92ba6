//! Command handling and exit-code dispatch

use crate::cli::commands::CliArgs;
use crate::cli::output::ReportFormatter;
use crate::discovery::wantlist::{WantSpec, DEFAULT_WANTED};
use crate::report::{build_report, Environment};
use std::env;
use std::fs;
use std::path::PathBuf;
use tracing::error;

/// Runs the diagnostic and returns the process exit code.
///
/// 0 on success, 2 when the repository root does not exist, 1 when the
/// report cannot be rendered.
pub fn handle_diagnose(args: &CliArgs) -> i32 {
    // Resolve symlinks and relative segments like the rest of the report's
    // normalized paths; a missing root falls through to build_report.
    let repo = fs::canonicalize(&args.repo).unwrap_or_else(|_| args.repo.clone());
    let environment = environment_from_process();
    let want = want_spec(args);

    let report = match build_report(&repo, &environment, &want, args.deep) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("error: {}", err);
            return 2;
        }
    };

    match ReportFormatter::new(args.format.into()).format(&report) {
        Ok(rendered) => {
            println!("{}", rendered);
            0
        }
        Err(err) => {
            error!(error = %err, "Failed to render report");
            eprintln!("error: {:#}", err);
            1
        }
    }
}

fn want_spec(args: &CliArgs) -> WantSpec {
    if args.auto_want {
        return WantSpec::AutoDerive;
    }
    let names = args.want.clone().unwrap_or_else(|| {
        DEFAULT_WANTED.iter().map(|name| name.to_string()).collect()
    });
    WantSpec::Explicit(names)
}

/// Reads the process environment once; the core only ever sees these
/// explicit values.
fn environment_from_process() -> Environment {
    let sdk_root = env::var_os("VULKAN_SDK")
        .filter(|value| !value.is_empty())
        .map(PathBuf::from);

    Environment {
        sdk_root,
        temp_base: temp_base_from_env(),
    }
}

fn temp_base_from_env() -> PathBuf {
    if cfg!(windows) {
        env::var_os("TEMP")
            .or_else(|| env::var_os("TMP"))
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("C:/Temp"))
    } else {
        env::var_os("TMPDIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("/tmp"))
    }
}
