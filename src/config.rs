//! Configuration module for sheet2sql
//!
//! This module provides a centralized configuration structure for the application.
//! It is built once from the command line and passed by reference to the
//! components that need it, rather than using global state.

use std::path::{Path, PathBuf};

use crate::cli::SheetArgs;
use crate::script::DEFAULT_TABLE_NAME;

/// What the run writes to its output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Whole script on a single line
    SingleLine,
    /// One statement per line
    Multiline,
    /// Inferred column types as JSON, no SQL
    Schema,
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Input path; `None` or `-` reads stdin
    input: Option<PathBuf>,

    /// Custom field separator
    field_separator: Option<String>,

    /// Name of the table to create
    table_name: String,

    /// Whether the input is base64-encoded
    base64: bool,

    /// Keep empty fields as empty strings instead of NULL
    keep_empty: bool,

    /// What to emit
    output_mode: OutputMode,

    /// Validate the script with the SQL parser before writing it
    check: bool,

    /// Output path; `None` writes stdout
    output: Option<PathBuf>,

    /// Whether to show verbose output
    verbose: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            input: None,
            field_separator: None,
            table_name: DEFAULT_TABLE_NAME.to_string(),
            base64: false,
            keep_empty: false,
            output_mode: OutputMode::SingleLine,
            check: false,
            output: None,
            verbose: false,
        }
    }
}

impl AppConfig {
    /// Create a configuration from parsed command-line arguments
    pub fn from_args(args: &SheetArgs) -> Self {
        let output_mode = if args.schema {
            OutputMode::Schema
        } else if args.pretty {
            OutputMode::Multiline
        } else {
            OutputMode::SingleLine
        };

        AppConfig {
            input: args.file.clone(),
            field_separator: args.field_separator.clone(),
            table_name: args.table.clone(),
            base64: args.base64,
            keep_empty: args.keep_empty,
            output_mode,
            check: args.check,
            output: args.output.clone(),
            verbose: args.verbose,
        }
    }

    /// Start from defaults and override individual settings
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder {
            config: AppConfig::default(),
        }
    }

    /// Get the input path
    pub fn input(&self) -> Option<&Path> {
        self.input.as_deref()
    }

    /// Get the field separator
    pub fn field_separator(&self) -> Option<&str> {
        self.field_separator.as_deref()
    }

    /// Get the target table name
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// Get whether the input is base64-encoded
    pub fn base64(&self) -> bool {
        self.base64
    }

    /// Get whether empty fields are kept as empty strings
    pub fn keep_empty(&self) -> bool {
        self.keep_empty
    }

    /// Get the output mode
    pub fn output_mode(&self) -> OutputMode {
        self.output_mode
    }

    /// Get whether to validate the generated script
    pub fn check(&self) -> bool {
        self.check
    }

    /// Get the output path
    pub fn output(&self) -> Option<&Path> {
        self.output.as_deref()
    }

    /// Get the verbose flag
    pub fn verbose(&self) -> bool {
        self.verbose
    }
}

/// Builder for `AppConfig`, mostly useful from library callers and tests
#[derive(Debug, Clone)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    /// Set the input path
    pub fn input(mut self, input: Option<PathBuf>) -> Self {
        self.config.input = input;
        self
    }

    /// Set the field separator
    pub fn field_separator(mut self, separator: Option<String>) -> Self {
        self.config.field_separator = separator;
        self
    }

    /// Set the target table name
    pub fn table_name(mut self, name: impl Into<String>) -> Self {
        self.config.table_name = name.into();
        self
    }

    /// Set whether the input is base64-encoded
    pub fn base64(mut self, base64: bool) -> Self {
        self.config.base64 = base64;
        self
    }

    /// Set whether empty fields are kept as empty strings
    pub fn keep_empty(mut self, keep_empty: bool) -> Self {
        self.config.keep_empty = keep_empty;
        self
    }

    /// Set the output mode
    pub fn output_mode(mut self, mode: OutputMode) -> Self {
        self.config.output_mode = mode;
        self
    }

    /// Set whether to validate the generated script
    pub fn check(mut self, check: bool) -> Self {
        self.config.check = check;
        self
    }

    /// Finish building
    pub fn build(self) -> AppConfig {
        self.config
    }
}
