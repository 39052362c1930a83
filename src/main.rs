use anyhow::{Context, Result};
use clap::Parser;
use classdir::{
    app::config::Config,
    cli::{self, Cli},
};
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;

fn main() {
    let cli = Cli::parse();

    let guard = match init_logging(&cli) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(cli::error::ERROR);
        }
    };

    tracing::trace!("CLI arguments: {:?}", cli);

    // Set config directory override if --config flag was used
    if let Some(ref config_dir) = cli.config {
        tracing::info!("Using config directory override: {:?}", config_dir);
        classdir::util::paths::set_config_dir_override(Some(config_dir.clone()));
    }

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            drop(guard);
            std::process::exit(cli::error::INVALID_INPUT);
        }
    };
    tracing::debug!("Config loaded: {:?}", config);

    // The handler's transaction is dropped before it returns, so exiting
    // here cannot skip a pending rollback.
    let exit_code = cli::handler::handle_command(cli.command, &config);

    drop(guard);
    std::process::exit(exit_code);
}

/// Console gets errors only unless --verbose; a log file gets INFO and up as JSON
fn init_logging(cli: &Cli) -> Result<Option<WorkerGuard>> {
    match &cli.log_file {
        Some(path) => {
            let level = if cli.verbose {
                tracing::Level::TRACE
            } else {
                tracing::Level::INFO
            };
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            let file_name = path
                .file_name()
                .with_context(|| format!("--log-file {:?} does not name a file", path))?;

            let appender = RollingFileAppender::builder()
                .rotation(Rotation::NEVER)
                .filename_prefix(file_name.to_string_lossy().into_owned())
                .build(dir)
                .with_context(|| format!("Failed to open log file {:?}", path))?;
            let (non_blocking, guard) = tracing_appender::non_blocking(appender);

            tracing_subscriber::registry()
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(non_blocking)
                        .with_ansi(false)
                        .with_filter(LevelFilter::from_level(level)),
                )
                .init();
            Ok(Some(guard))
        }
        None => {
            let filter = if cli.verbose {
                LevelFilter::TRACE
            } else {
                LevelFilter::ERROR
            };
            tracing_subscriber::registry()
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_filter(filter),
                )
                .init();
            Ok(None)
        }
    }
}
