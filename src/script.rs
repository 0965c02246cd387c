//! SQL script generation for sheet2sql
//!
//! This module turns a `Table` into a script that recreates it:
//!
//! - one `CREATE TABLE` statement whose column types come from type inference
//! - one `INSERT` statement per row, in row order
//!
//! Statements are built with line breaks and indentation for readability.
//! Rendering a `SqlScript` strips every CR and LF from each statement and
//! trims it, so the joined script is a single line of text.
//!
//! Column and table names are written verbatim. They are trusted input and
//! are neither quoted nor checked against reserved words.

use serde::{Deserialize, Serialize};
use sqlparser::dialect::GenericDialect;
use sqlparser::parser::Parser;
use tracing::{debug, info};

use crate::error::{SheetError, SheetResult};
use crate::table::{Cell, Table};
use crate::type_inference::{infer_cells, ColumnType};

/// Table name used when none is configured
pub const DEFAULT_TABLE_NAME: &str = "ExcelTable";

/// Inferred definition of one column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSchema {
    /// Column name, verbatim from the header
    pub name: String,
    /// Type chosen from every value in the column
    pub sql_type: ColumnType,
}

/// A generated script: one CREATE TABLE followed by one INSERT per row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlScript {
    statements: Vec<String>,
}

impl SqlScript {
    /// Statements as built, before whitespace normalization
    pub fn statements(&self) -> &[String] {
        &self.statements
    }

    /// Number of statements in the script
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    /// Whether the script has no statements
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Statements with CR/LF removed and surrounding whitespace trimmed
    pub fn normalized(&self) -> impl Iterator<Item = String> + '_ {
        self.statements.iter().map(|s| normalize_statement(s))
    }

    /// The whole script as one line, statements separated by a single space
    pub fn to_single_line(&self) -> String {
        self.normalized().collect::<Vec<_>>().join(" ")
    }

    /// The script with one normalized statement per line
    pub fn to_multiline(&self) -> String {
        self.normalized().collect::<Vec<_>>().join("\n")
    }

    /// Check that the rendered script parses as SQL
    ///
    /// Fails for headers that are not plain identifiers (spaces, reserved
    /// words), since names are emitted without quoting.
    pub fn validate(&self) -> SheetResult<()> {
        let dialect = GenericDialect {};
        let parsed = Parser::parse_sql(&dialect, &self.to_single_line())?;
        debug!(statements = parsed.len(), "script validated");
        Ok(())
    }
}

/// Remove line breaks and trim a single statement
pub fn normalize_statement(statement: &str) -> String {
    statement.replace(['\r', '\n'], "").trim().to_string()
}

/// Render a cell as a SQL literal
///
/// Missing cells become a bare `NULL`. Everything else is single-quoted with
/// embedded quotes doubled; no other characters are escaped.
pub fn sql_literal(cell: &Cell) -> String {
    match cell {
        Cell::Missing => "NULL".to_string(),
        Cell::Text(s) => format!("'{}'", s.replace('\'', "''")),
    }
}

/// Builds CREATE TABLE and INSERT statements for a table
#[derive(Debug, Clone)]
pub struct ScriptGenerator {
    table_name: String,
}

impl Default for ScriptGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_TABLE_NAME)
    }
}

impl ScriptGenerator {
    /// Create a generator that targets `table_name`
    pub fn new(table_name: impl Into<String>) -> Self {
        ScriptGenerator {
            table_name: table_name.into(),
        }
    }

    /// Name of the table the script creates and fills
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// Generate the full script for `table`
    ///
    /// # Returns
    /// * `Ok(SqlScript)` with `1 + table.row_count()` statements
    /// * `Err(SheetError::NoColumns)` if the table has no columns
    /// * `Err(SheetError::RowLength)` if a row is not aligned to the columns
    pub fn generate(&self, table: &Table) -> SheetResult<SqlScript> {
        let schema = self.infer_schema(table)?;

        let mut statements = Vec::with_capacity(table.row_count() + 1);
        statements.push(self.create_table(&schema));
        for row in table.rows() {
            statements.push(self.insert(table.columns(), row));
        }

        info!(
            table = %self.table_name,
            columns = table.column_count(),
            rows = table.row_count(),
            "generated SQL script"
        );

        Ok(SqlScript { statements })
    }

    /// Infer the type of every column in `table`, in column order
    pub fn infer_schema(&self, table: &Table) -> SheetResult<Vec<ColumnSchema>> {
        check_shape(table)?;

        let schema = table
            .columns()
            .iter()
            .enumerate()
            .map(|(index, name)| {
                // index comes from the table's own columns, so the lookup always succeeds
                let sql_type = table
                    .column_cells(index)
                    .map(infer_cells)
                    .unwrap_or(ColumnType::Text);
                debug!(column = %name, sql_type = %sql_type, "inferred column type");
                ColumnSchema {
                    name: name.clone(),
                    sql_type,
                }
            })
            .collect();

        Ok(schema)
    }

    fn create_table(&self, schema: &[ColumnSchema]) -> String {
        let definitions = schema
            .iter()
            .map(|column| format!("    {} {}", column.name, column.sql_type))
            .collect::<Vec<_>>()
            .join(",\n");

        format!("CREATE TABLE {} (\n{});\n", self.table_name, definitions)
    }

    fn insert(&self, columns: &[String], row: &[Cell]) -> String {
        let values = row.iter().map(sql_literal).collect::<Vec<_>>();

        format!(
            "INSERT INTO {} ({}) VALUES ({});",
            self.table_name,
            columns.join(", "),
            values.join(", ")
        )
    }
}

/// Reject tables that cannot produce a well-formed script
fn check_shape(table: &Table) -> SheetResult<()> {
    if table.column_count() == 0 {
        return Err(SheetError::NoColumns);
    }

    let expected = table.column_count();
    for (i, row) in table.rows().iter().enumerate() {
        if row.len() != expected {
            return Err(SheetError::RowLength {
                row: i + 1,
                expected,
                found: row.len(),
            });
        }
    }

    Ok(())
}
