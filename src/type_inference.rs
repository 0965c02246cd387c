//! Column type inference for sheet2sql
//!
//! Sheet cells arrive as untyped text. This module looks at every value of a
//! column and picks one SQL type for the whole column. The checks run in a
//! fixed priority order because the categories overlap (every integer is also
//! a decimal number):
//!
//! 1. every value is an `i32` integer            -> `INT`
//! 2. every value is numeric, some contain `.`   -> `DECIMAL(18,2)`
//! 3. every value is numeric                     -> `VARCHAR(10)`
//! 4. anything else                              -> `VARCHAR(512)`
//!
//! Empty and missing values never parse as numbers, so a column with a gap
//! in it always ends up as text.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::table::Cell;

/// Base-10 integer: optional leading minus, digits only
static INTEGER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-?[0-9]+$").expect("Hard-coded regex pattern should be valid"));

/// General decimal number: optional sign, digits with at most one point, optional exponent
static NUMBER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?([0-9]+\.?[0-9]*|\.[0-9]+)([eE][+-]?[0-9]+)?$")
        .expect("Hard-coded regex pattern should be valid")
});

/// SQL type chosen for a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnType {
    /// `INT`
    #[serde(rename = "INT")]
    Integer,
    /// `DECIMAL(18,2)`
    #[serde(rename = "DECIMAL(18,2)")]
    Decimal,
    /// `VARCHAR(10)`: numbers that are neither `i32` nor written with a decimal point
    #[serde(rename = "VARCHAR(10)")]
    NumericText,
    /// `VARCHAR(512)`
    #[serde(rename = "VARCHAR(512)")]
    Text,
}

impl ColumnType {
    /// The type as written in a column definition
    pub fn sql(&self) -> &'static str {
        match self {
            ColumnType::Integer => "INT",
            ColumnType::Decimal => "DECIMAL(18,2)",
            ColumnType::NumericText => "VARCHAR(10)",
            ColumnType::Text => "VARCHAR(512)",
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.sql())
    }
}

/// Whether `value` is a base-10 integer that fits in an `i32`
///
/// The empty string is not an integer.
pub fn is_integer(value: &str) -> bool {
    INTEGER_PATTERN.is_match(value) && value.parse::<i32>().is_ok()
}

/// Whether `value` is a finite decimal number such as `3`, `-0.5`, `+12.` or `1e6`
///
/// The empty string, whitespace, thousands separators and words such as
/// `inf` or `NaN` are not numbers.
pub fn is_number(value: &str) -> bool {
    NUMBER_PATTERN.is_match(value)
}

/// Infer the SQL type of a column from all of its values
///
/// A column with no values at all is `Text`: there is no evidence for a
/// numeric type and the choice must not depend on anything but the input.
pub fn infer_type<'a, I>(values: I) -> ColumnType
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen_any = false;
    let mut all_integers = true;
    let mut all_numbers = true;
    let mut has_decimal_point = false;

    for value in values {
        seen_any = true;
        if all_integers && !is_integer(value) {
            all_integers = false;
        }
        if all_numbers && !is_number(value) {
            all_numbers = false;
        }
        if value.contains('.') {
            has_decimal_point = true;
        }
    }

    if !seen_any {
        return ColumnType::Text;
    }

    if all_integers {
        ColumnType::Integer
    } else if all_numbers && has_decimal_point {
        ColumnType::Decimal
    } else if all_numbers {
        // Reached by values like "2147483648", "+7" or "1e5". Those probably
        // deserve BIGINT or DECIMAL; kept as VARCHAR(10) to match existing output.
        ColumnType::NumericText
    } else {
        ColumnType::Text
    }
}

/// Infer the SQL type of a column of cells, treating missing cells as empty text
pub fn infer_cells<'a, I>(cells: I) -> ColumnType
where
    I: IntoIterator<Item = &'a Cell>,
{
    infer_type(cells.into_iter().map(Cell::as_str))
}
