//! CLI argument parsing module for sheet2sql
//!
//! This module defines the command-line interface with clap. A run reads one
//! sheet export and writes one SQL script (or the inferred schema).

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::script::DEFAULT_TABLE_NAME;

/// Command-line arguments for sheet2sql
#[derive(Parser, Debug)]
#[clap(
    author,
    version,
    about = "Convert a spreadsheet export into a CREATE TABLE + INSERT SQL script"
)]
pub struct SheetArgs {
    /// Sheet export to convert
    ///
    /// The first record is the header row. Omit the path or pass `-` to read stdin.
    #[clap(help = "Input file (CSV/TSV export); '-' or omitted reads stdin")]
    pub file: Option<PathBuf>,

    /// Specify field separator character
    ///
    /// Default is a tab for .tsv/.tab files and a comma for everything else.
    /// Examples: -F: for colon-separated files, -F\\t for tab-separated files.
    #[clap(short = 'F', help = "Field separator character")]
    pub field_separator: Option<String>,

    /// Name of the table the script creates and fills
    #[clap(short, long, default_value = DEFAULT_TABLE_NAME, help = "Target table name")]
    pub table: String,

    /// Treat the input as a base64-encoded sheet, as uploaded to the web service
    #[clap(long, help = "Input is base64-encoded")]
    pub base64: bool,

    /// Keep empty fields as '' literals instead of NULL
    #[clap(long, help = "Keep empty fields as empty strings instead of NULL")]
    pub keep_empty: bool,

    /// Write one statement per line instead of a single line
    #[clap(long, help = "Write one statement per line", conflicts_with = "schema")]
    pub pretty: bool,

    /// Print the inferred column types as JSON instead of SQL
    #[clap(long, help = "Print the inferred schema as JSON")]
    pub schema: bool,

    /// Parse the generated script with sqlparser and fail if it is not valid SQL
    #[clap(long, help = "Validate the generated SQL")]
    pub check: bool,

    /// Write the output to a file instead of stdout
    #[clap(short, long, help = "Output file")]
    pub output: Option<PathBuf>,

    /// Enable verbose diagnostic output on stderr
    #[clap(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

/// Parse command-line arguments into the SheetArgs structure
pub fn parse_args() -> Result<SheetArgs> {
    Ok(SheetArgs::parse())
}
