//! sheet2sql library crate
//!
//! Converts tabular spreadsheet data into a standalone SQL script that
//! recreates the table and repopulates it. The library provides:
//!
//! - An in-memory `Table` of header names and text-or-missing cells
//! - Column type inference over untyped cell text (`INT`, `DECIMAL(18,2)`,
//!   `VARCHAR(10)`, `VARCHAR(512)`)
//! - CREATE TABLE and INSERT generation with quote escaping and
//!   single-line output normalization
//! - Reading CSV/TSV sheet exports, optionally base64-encoded
//!
//! ```
//! use sheet2sql::script::ScriptGenerator;
//! use sheet2sql::table::{Cell, Table};
//!
//! let table = Table::from_rows(
//!     ["id", "name"],
//!     vec![vec![Cell::from("1"), Cell::from("O'Brien")]],
//! )
//! .unwrap();
//! let sql = ScriptGenerator::default().generate(&table).unwrap().to_single_line();
//! assert!(sql.contains("'O''Brien'"));
//! ```

pub mod cli;
pub mod config;
pub mod csv_handler;
pub mod error;
pub mod file_handler;
pub mod script;
pub mod table;
pub mod type_inference;

use config::{AppConfig, OutputMode};
use error::SheetResult;
use script::ScriptGenerator;
use table::Table;

/// Render the configured output for an already-loaded table
///
/// Produces the single-line script, the one-statement-per-line script or the
/// JSON schema depending on `config.output_mode()`. With `config.check()` the
/// script is parsed before it is returned.
pub fn render(config: &AppConfig, table: &Table) -> SheetResult<String> {
    let generator = ScriptGenerator::new(config.table_name());

    if config.output_mode() == OutputMode::Schema {
        let schema = generator.infer_schema(table)?;
        return Ok(serde_json::to_string_pretty(&schema)?);
    }

    let script = generator.generate(table)?;
    if config.check() {
        script.validate()?;
    }

    Ok(match config.output_mode() {
        OutputMode::Multiline => script.to_multiline(),
        _ => script.to_single_line(),
    })
}
