//! Eventful - a command shell for managing participants and matches of an
//! inter-faculty sports festival.
//!
//! Reads one command per line from stdin, executes it against the roster and
//! saves after every change.

mod shell;

use std::path::Path;

use anyhow::Result;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use eventful_core::{Config, JsonStorage, Roster, Storage};

use shell::{Shell, StdoutSink};

/// Log file written next to the data file
const LOG_FILE: &str = "eventful.log";

/// Initialize the tracing subscriber for logging.
/// Logs go to a file so they never interleave with command output.
fn init_tracing(log_dir: &Path, default_level: &str) -> Result<WorkerGuard> {
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    std::fs::create_dir_all(log_dir)?;
    let appender = tracing_appender::rolling::never(log_dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .with(filter)
        .init();
    Ok(guard)
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = Config::load()?;
    let _guard = init_tracing(&config.data_dir()?, config.log_level())?;
    info!("Eventful starting");

    let storage = JsonStorage::new(config.data_file_path()?);
    let (persons, events) = match storage.load_all() {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            eprintln!("Starting with an empty list; the data file will be overwritten on the next change.");
            (Vec::new(), Vec::new())
        }
    };
    info!(path = %storage.path().display(), persons = persons.len(), events = events.len(), "Data loaded");

    let mut shell = Shell::new(Roster::new(persons, events), storage, StdoutSink);
    let stdin = std::io::stdin();
    shell.run(stdin.lock())?;

    info!("Eventful shutting down");
    Ok(())
}
