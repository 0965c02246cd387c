//! Input source handling module for sheet2sql
//!
//! This module resolves where the sheet comes from and how to read it:
//! - a file path, or stdin when the path is `-` or omitted
//! - optional base64 decoding of the whole payload
//! - delimiter selection from `-F` or the file extension
//!
//! It hands the decoded bytes to `CsvHandler` and returns the resulting table.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use base64::Engine as _;
use tracing::debug;

use crate::config::AppConfig;
use crate::csv_handler::{parse_delimiter, CsvHandler, ReadOptions};
use crate::error::{SheetError, SheetResult};
use crate::table::Table;

/// Enum representing the sheet export formats sheet2sql recognizes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    /// Comma-separated values
    Csv,
    /// Tab-separated values
    Tsv,
}

impl FileFormat {
    /// Detect the format from a file extension, defaulting to CSV
    pub fn detect(path: Option<&Path>) -> Self {
        match path
            .and_then(|p| p.extension())
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("tsv") | Some("tab") => FileFormat::Tsv,
            _ => FileFormat::Csv,
        }
    }

    /// Default delimiter for this format
    pub fn delimiter(self) -> u8 {
        match self {
            FileFormat::Csv => b',',
            FileFormat::Tsv => b'\t',
        }
    }
}

/// Loads the configured input into a table
pub struct FileHandler<'a> {
    config: &'a AppConfig,
}

impl<'a> FileHandler<'a> {
    /// Create a new FileHandler for the given configuration
    pub fn new(config: &'a AppConfig) -> Self {
        FileHandler { config }
    }

    /// Read, decode and parse the configured input
    pub fn load(&self) -> SheetResult<Table> {
        let raw = self.read_source()?;
        self.load_bytes(&raw)
    }

    /// Decode and parse an already-read payload
    pub fn load_bytes(&self, raw: &[u8]) -> SheetResult<Table> {
        let bytes = if self.config.base64() {
            decode_base64(raw)?
        } else {
            raw.to_vec()
        };

        if bytes.is_empty() {
            return Err(SheetError::InvalidInput("Invalid File: input is empty".to_string()));
        }

        let options = ReadOptions {
            delimiter: self.delimiter()?,
            keep_empty: self.config.keep_empty(),
        };
        debug!(
            delimiter = %(options.delimiter as char).escape_default(),
            keep_empty = options.keep_empty,
            bytes = bytes.len(),
            "parsing sheet"
        );

        CsvHandler::new(options).load_from_bytes(&bytes)
    }

    /// Delimiter to use: `-F` if given, otherwise the one implied by the file extension
    pub fn delimiter(&self) -> SheetResult<u8> {
        match self.config.field_separator() {
            Some(separator) => parse_delimiter(separator),
            None => Ok(FileFormat::detect(self.config.input()).delimiter()),
        }
    }

    fn read_source(&self) -> SheetResult<Vec<u8>> {
        match self.config.input() {
            Some(path) if path != Path::new("-") => {
                debug!(path = %path.display(), "reading input file");
                Ok(fs::read(path)?)
            }
            _ => {
                debug!("reading input from stdin");
                let mut buf = Vec::new();
                io::stdin().lock().read_to_end(&mut buf)?;
                Ok(buf)
            }
        }
    }
}

/// Decode a base64 payload, ignoring surrounding whitespace and line wrapping
pub fn decode_base64(raw: &[u8]) -> SheetResult<Vec<u8>> {
    let compact: Vec<u8> = raw
        .iter()
        .copied()
        .filter(|b| !b.is_ascii_whitespace())
        .collect();

    base64::engine::general_purpose::STANDARD
        .decode(compact)
        .map_err(|e| SheetError::InvalidInput(format!("Invalid base64 payload: {}", e)))
}
