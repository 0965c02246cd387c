//! Sheet reading module for sheet2sql
//!
//! This module turns delimiter-separated sheet exports into an in-memory
//! `Table`. It handles:
//!
//! - Header detection (the first record names the columns)
//! - Naming blank header cells `Column1`, `Column2`, ... in order, skipping
//!   names already taken by a real header
//! - Padding short records with missing cells
//! - Mapping empty fields to missing cells, or keeping them as empty text
//!
//! The csv crate does the actual tokenizing; any delimiter can be used.

use std::collections::HashSet;
use std::io::Read;

use tracing::debug;

use crate::error::{SheetError, SheetResult};
use crate::table::{Cell, Row, Table};

/// Options controlling how a sheet export is read
#[derive(Debug, Clone, Copy)]
pub struct ReadOptions {
    /// Field delimiter byte
    pub delimiter: u8,
    /// Keep empty fields as `''` instead of turning them into `NULL`
    pub keep_empty: bool,
}

impl Default for ReadOptions {
    fn default() -> Self {
        ReadOptions {
            delimiter: b',',
            keep_empty: false,
        }
    }
}

/// Reads delimiter-separated sheet data into tables
#[derive(Debug, Clone, Default)]
pub struct CsvHandler {
    options: ReadOptions,
}

impl CsvHandler {
    /// Create a new CsvHandler with the given read options
    pub fn new(options: ReadOptions) -> Self {
        CsvHandler { options }
    }

    /// Load a sheet from any reader
    ///
    /// # Returns
    /// * `Ok(Table)` holding every data record
    /// * `Err(SheetError::CsvError)` if the data cannot be tokenized
    /// * `Err(SheetError::DuplicateColumn)` if two headers share a name
    /// * `Err(SheetError::RowLength)` if a record has more fields than the header
    ///
    /// # Example
    /// ```
    /// # use sheet2sql::csv_handler::CsvHandler;
    /// let table = CsvHandler::default()
    ///     .load_from_reader("id,name\n1,Alice\n".as_bytes())
    ///     .unwrap();
    /// assert_eq!(table.columns(), ["id", "name"]);
    /// assert_eq!(table.row_count(), 1);
    /// ```
    pub fn load_from_reader<R: Read>(&self, reader: R) -> SheetResult<Table> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .delimiter(self.options.delimiter)
            .flexible(true)
            .from_reader(reader);

        let headers = header_names(csv_reader.headers()?);

        let mut table = Table::new(headers)?;
        let column_count = table.column_count();

        for result in csv_reader.records() {
            let record = result?;

            let mut row: Row = record.iter().map(|field| self.cell(field)).collect();
            if row.len() < column_count {
                row.resize(column_count, Cell::Missing);
            }

            table.add_row(row)?;
        }

        debug!(
            columns = table.column_count(),
            rows = table.row_count(),
            "loaded sheet"
        );

        Ok(table)
    }

    /// Load a sheet from an in-memory buffer
    pub fn load_from_bytes(&self, bytes: &[u8]) -> SheetResult<Table> {
        self.load_from_reader(bytes)
    }

    fn cell(&self, field: &str) -> Cell {
        if field.is_empty() && !self.options.keep_empty {
            Cell::Missing
        } else {
            Cell::from(field)
        }
    }
}

/// Column names for a header record
///
/// Blank cells are numbered among themselves (`Column1`, `Column2`, ...),
/// skipping any generated name that a non-blank header already uses.
fn header_names(record: &csv::StringRecord) -> Vec<String> {
    let named: HashSet<&str> = record
        .iter()
        .filter(|name| !name.trim().is_empty())
        .collect();

    let mut next = 1;
    record
        .iter()
        .map(|name| {
            if !name.trim().is_empty() {
                return name.to_string();
            }
            loop {
                let candidate = format!("Column{}", next);
                next += 1;
                if !named.contains(candidate.as_str()) {
                    return candidate;
                }
            }
        })
        .collect()
}

/// Parse a user-supplied field separator into a delimiter byte
///
/// Accepts any single ASCII character, plus the two-character escape `\t`.
pub fn parse_delimiter(separator: &str) -> SheetResult<u8> {
    match separator {
        "\\t" => Ok(b'\t'),
        s if s.len() == 1 && s.is_ascii() => Ok(s.as_bytes()[0]),
        _ => Err(SheetError::InvalidInput(format!(
            "Invalid delimiter: {}. Must be a single character.",
            separator
        ))),
    }
}
