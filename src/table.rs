//! Table module for sheet2sql
//!
//! This module provides the in-memory table the conversion core works on:
//!
//! - `Cell`, a tagged cell value that is either text or the missing-data marker
//! - `Table`, ordered unique column names plus rows aligned to them
//!
//! Cells are never typed numbers. Column types are inferred later from the
//! text of every cell in a column.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{SheetError, SheetResult};

/// Represents a value in a table cell
///
/// A sheet cell either carries text or carries nothing at all. The missing
/// marker is distinct from an empty string: it renders as a bare `NULL` in
/// INSERT statements while an empty string renders as `''`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Absent value
    Missing,
    /// Raw cell text, exactly as read from the sheet
    Text(String),
}

impl Cell {
    /// Text used when checking the cell against numeric formats
    ///
    /// Missing cells check as the empty string, which never parses as a number.
    pub fn as_str(&self) -> &str {
        match self {
            Cell::Missing => "",
            Cell::Text(s) => s,
        }
    }

    /// Whether this is the missing-data marker
    pub fn is_missing(&self) -> bool {
        matches!(self, Cell::Missing)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Missing => write!(f, "NULL"),
            Cell::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Cell::Text(s)
    }
}

impl<T: Into<Cell>> From<Option<T>> for Cell {
    fn from(value: Option<T>) -> Self {
        value.map_or(Cell::Missing, Into::into)
    }
}

/// Represents a row in a table
pub type Row = Vec<Cell>;

/// Represents an in-memory sheet
///
/// The table is filled once by whoever reads the sheet and is only read
/// afterwards. `add_row` refuses rows that are not aligned to the columns,
/// so every stored row has exactly `column_count()` cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// Column names in header order
    columns: Vec<String>,

    /// Map of column names to their indices
    column_map: HashMap<String, usize>,

    /// Rows of data
    rows: Vec<Row>,
}

impl Table {
    /// Create a new empty table with the given columns
    ///
    /// # Returns
    /// * `Ok(Table)` with no rows
    /// * `Err(SheetError::DuplicateColumn)` if a column name repeats
    pub fn new(columns: Vec<String>) -> SheetResult<Self> {
        let mut column_map = HashMap::with_capacity(columns.len());
        for (i, name) in columns.iter().enumerate() {
            if column_map.insert(name.clone(), i).is_some() {
                return Err(SheetError::DuplicateColumn(name.clone()));
            }
        }

        Ok(Table {
            columns,
            column_map,
            rows: Vec::new(),
        })
    }

    /// Build a table from column names and rows in one step
    pub fn from_rows<C, R>(columns: C, rows: R) -> SheetResult<Self>
    where
        C: IntoIterator,
        C::Item: Into<String>,
        R: IntoIterator<Item = Row>,
    {
        let mut table = Table::new(columns.into_iter().map(Into::into).collect())?;
        for row in rows {
            table.add_row(row)?;
        }
        Ok(table)
    }

    /// Get the columns of the table
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Get the column count
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Get the rows of the table
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Get the row count
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Add a row to the table
    ///
    /// # Returns
    /// * `Ok(())` if the row was added
    /// * `Err(SheetError::RowLength)` if the row is not one cell per column
    pub fn add_row(&mut self, row: Row) -> SheetResult<()> {
        if row.len() != self.columns.len() {
            return Err(SheetError::RowLength {
                row: self.rows.len() + 1,
                expected: self.columns.len(),
                found: row.len(),
            });
        }

        self.rows.push(row);
        Ok(())
    }

    /// Get the index of a column by name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.column_map.get(name).copied()
    }

    /// Iterate over every cell of one column, top to bottom
    ///
    /// # Returns
    /// * `Some(iterator)` over the column's cells
    /// * `None` if `index` is not a column of this table
    pub fn column_cells(&self, index: usize) -> Option<impl Iterator<Item = &Cell> + '_> {
        if index >= self.columns.len() {
            return None;
        }
        Some(self.rows.iter().map(move |row| &row[index]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_columns_rejected() {
        let err = Table::new(vec!["id".to_string(), "id".to_string()]).unwrap_err();
        assert!(matches!(err, SheetError::DuplicateColumn(ref name) if name == "id"));
        assert!(err.is_input_shape());
    }

    #[test]
    fn test_add_row_length_mismatch() {
        let mut table = Table::new(vec!["a".to_string(), "b".to_string()]).unwrap();
        table.add_row(vec![Cell::from("1"), Cell::Missing]).unwrap();

        let err = table.add_row(vec![Cell::from("2")]).unwrap_err();
        match err {
            SheetError::RowLength { row, expected, found } => {
                assert_eq!(row, 2);
                assert_eq!(expected, 2);
                assert_eq!(found, 1);
            }
            other => panic!("Unexpected error: {:?}", other),
        }
        assert_eq!(table.row_count(), 1);
    }

    #[test]
    fn test_column_cells_and_lookup() {
        let table = Table::from_rows(
            ["id", "name"],
            vec![
                vec![Cell::from("1"), Cell::from("Alice")],
                vec![Cell::from("2"), Cell::from(None::<&str>)],
            ],
        )
        .unwrap();

        assert_eq!(table.column_index("name"), Some(1));
        assert_eq!(table.column_index("age"), None);

        let names: Vec<&Cell> = table.column_cells(1).unwrap().collect();
        assert_eq!(names, vec![&Cell::Text("Alice".to_string()), &Cell::Missing]);
        assert!(table.column_cells(2).is_none());
    }

    #[test]
    fn test_missing_is_not_empty_text() {
        assert_ne!(Cell::Missing, Cell::from(""));
        assert_eq!(Cell::Missing.as_str(), "");
        assert!(Cell::Missing.is_missing());
        assert!(!Cell::from("").is_missing());
        assert_eq!(Cell::Missing.to_string(), "NULL");
    }
}
