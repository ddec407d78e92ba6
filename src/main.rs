use vendiag::cli::commands::CliArgs;
use vendiag::cli::handlers::handle_diagnose;
use vendiag::VERSION;

use clap::Parser;
use std::env;
use tracing::{debug, Level};
use vendiag::util::logging::{init_logging, parse_level, LoggingConfig};

fn main() {
    let args = CliArgs::parse();
    init_logging_from_args(&args);

    debug!("vendiag v{} starting", VERSION);
    debug!("Arguments: {:?}", args);

    std::process::exit(handle_diagnose(&args));
}

fn init_logging_from_args(args: &CliArgs) {
    let level = if let Some(level_str) = &args.log_level {
        parse_level(level_str)
    } else if args.verbose {
        Level::DEBUG
    } else if args.quiet {
        Level::ERROR
    } else {
        let level_str = env::var("VENDIAG_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        parse_level(&level_str)
    };

    init_logging(LoggingConfig::with_level(level));
}
