use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Vendored dependency diagnostics for CMake builds
#[derive(Parser, Debug)]
#[command(
    name = "vendiag",
    about = "Vendored dependency diagnostics for CMake builds",
    version,
    author,
    long_about = "vendiag scans a repository's vendored dependency tree for CMake package \
                  config artifacts, reports which wanted packages can be located, and \
                  suggests the -D<Pkg>_DIR flags that make a downstream configure find \
                  them. Per vendored library it also summarizes alternative build-system \
                  entrypoints and picks an add_subdirectory() candidate."
)]
pub struct CliArgs {
    #[arg(value_name = "REPO", help = "Path to the repository root")]
    pub repo: PathBuf,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormatArg,

    #[arg(
        long,
        help = "Derive the wanted package list from vendor directory names"
    )]
    pub auto_want: bool,

    #[arg(long, help = "Raise the bounded per-library scan caps")]
    pub deep: bool,

    #[arg(
        long,
        value_name = "NAME",
        num_args = 1..,
        help = "Package names to look for (<Pkg>Config.cmake)"
    )]
    pub want: Option<Vec<String>>,

    #[arg(long, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, help = "Verbose logging")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        conflicts_with = "verbose",
        help = "Quiet mode - suppress non-error logging"
    )]
    pub quiet: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormatArg {
    Human,
    Json,
    Yaml,
}

impl From<OutputFormatArg> for super::output::OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => super::output::OutputFormat::Human,
            OutputFormatArg::Json => super::output::OutputFormat::Json,
            OutputFormatArg::Yaml => super::output::OutputFormat::Yaml,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_args_verify() {
        // Verify that CLI structure is valid
        CliArgs::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let args = CliArgs::parse_from(["vendiag", "/tmp/repo"]);
        assert_eq!(args.repo, PathBuf::from("/tmp/repo"));
        assert_eq!(args.format, OutputFormatArg::Human);
        assert!(!args.auto_want);
        assert!(!args.deep);
        assert!(args.want.is_none());
        assert!(!args.verbose);
        assert!(!args.quiet);
    }

    #[test]
    fn test_repo_is_required() {
        assert!(CliArgs::try_parse_from(["vendiag"]).is_err());
    }

    #[test]
    fn test_want_list_takes_multiple_names() {
        let args = CliArgs::parse_from(["vendiag", "/tmp/repo", "--want", "ZLIB", "PNG", "nghttp2"]);
        assert_eq!(
            args.want,
            Some(vec![
                "ZLIB".to_string(),
                "PNG".to_string(),
                "nghttp2".to_string()
            ])
        );
    }

    #[test]
    fn test_flags_and_format() {
        let args = CliArgs::parse_from([
            "vendiag",
            "/tmp/repo",
            "--format",
            "json",
            "--auto-want",
            "--deep",
        ]);
        assert_eq!(args.format, OutputFormatArg::Json);
        assert!(args.auto_want);
        assert!(args.deep);
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(CliArgs::try_parse_from(["vendiag", "/tmp/repo", "-v", "-q"]).is_err());
    }

    #[test]
    fn test_log_level_flag() {
        let args = CliArgs::parse_from(["vendiag", "/tmp/repo", "--log-level", "debug"]);
        assert_eq!(args.log_level, Some("debug".to_string()));
    }
}
