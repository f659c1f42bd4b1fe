//! themegen: build-time generator for the QML and CSS theme files.
//!
//! Reads the design token document once, renders `Theme.qml` and
//! `theme.css` from it, and overwrites both outputs.

mod cli;
mod pipeline;

use std::error::Error;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_DIRECTIVE: &str = "warn";

fn init_logging(directive: Option<&str>) {
    let filter = match directive {
        Some(directive) => EnvFilter::try_new(directive).unwrap_or_else(|e| {
            eprintln!("invalid --log-level '{directive}': {e}");
            EnvFilter::new(DEFAULT_LOG_DIRECTIVE)
        }),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_DIRECTIVE)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let args = cli::parse();
    init_logging(args.log_level.as_deref());

    match pipeline::run(&args.root, args.config.as_deref()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("theme generation failed: {e}");
            eprintln!("error: {e}");
            let mut source = e.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}
