//! HYSPLIT Reader Library
//!
//! A Rust library for converting HYSPLIT atmospheric model output files
//! (trajectory endpoint files and PARDUMP particle position dumps) into
//! dense numeric tables for downstream analysis.
//!
//! This library provides tools for:
//! - Parsing trajectory endpoint files with automatic detection of the
//!   extended meteorology variant (9 vs 18 output columns)
//! - Streaming extraction of particle positions from text PARDUMP files
//! - Tolerant, non-failing numeric token conversion tuned for large files
//! - Exporting parsed tables to named-column Polars DataFrames with
//!   optional datetime enrichment, CSV and Parquet output

pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod discovery;
        pub mod numeric;
        pub mod pardump_parser;
        pub mod table_writer;
        pub mod trajectory_parser;

        mod entry;
        pub use entry::{parse_pardump_file, parse_trajectory_file};
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::Table;
pub use app::services::trajectory_parser::TrajectoryVariant;
pub use app::services::{parse_pardump_file, parse_trajectory_file};

/// Result type alias for the HYSPLIT reader
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for HYSPLIT file processing operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// File does not exist or could not be opened
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Column count mismatch when combining tables
    #[error("Schema mismatch: expected {expected} columns, found {found} in {path}")]
    SchemaMismatch {
        path: String,
        expected: usize,
        found: usize,
    },

    /// DataFrame construction or output writing error
    #[error("Table export error: {message}")]
    TableExport {
        message: String,
        #[source]
        source: Option<polars::error::PolarsError>,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a schema mismatch error
    pub fn schema_mismatch(path: impl Into<String>, expected: usize, found: usize) -> Self {
        Self::SchemaMismatch {
            path: path.into(),
            expected,
            found,
        }
    }

    /// Create a table export error
    pub fn table_export(message: impl Into<String>) -> Self {
        Self::TableExport {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<polars::error::PolarsError> for Error {
    fn from(error: polars::error::PolarsError) -> Self {
        Self::TableExport {
            message: "Polars operation failed".to_string(),
            source: Some(error),
        }
    }
}
