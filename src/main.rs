//! sheet2sql - turn a spreadsheet export into a standalone SQL script
//!
//! # Program Flow
//!
//! 1. Parse command-line arguments
//! 2. Read the sheet (file or stdin, optionally base64) into an in-memory table
//! 3. Infer a SQL type for every column
//! 4. Generate CREATE TABLE and INSERT statements
//! 5. Write the script to stdout or the output file
//!
//! Diagnostics go to stderr through tracing, so stdout only ever carries the script.

use std::fs;
use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use sheet2sql::cli;
use sheet2sql::config::AppConfig;
use sheet2sql::file_handler::FileHandler;

fn main() -> Result<()> {
    let args = cli::parse_args()?;
    let config = AppConfig::from_args(&args);

    init_logging(config.verbose());
    if config.verbose() {
        info!(?args, "running in verbose mode");
    }

    let table = FileHandler::new(&config)
        .load()
        .context("Failed to read input sheet")?;

    let output = sheet2sql::render(&config, &table).context("Failed to generate SQL script")?;

    match config.output() {
        Some(path) => {
            fs::write(path, format!("{output}\n"))
                .with_context(|| format!("Failed to write output file: {}", path.display()))?;
            info!(path = %path.display(), "script written");
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{output}").context("Failed to write to stdout")?;
        }
    }

    Ok(())
}

/// Install a stderr subscriber; `RUST_LOG` overrides the verbosity flag
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
