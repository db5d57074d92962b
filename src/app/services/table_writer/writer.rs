//! CSV and Parquet output writing

use std::fs::File;
use std::path::Path;

use polars::prelude::*;
use tracing::info;

use crate::{Error, Result};

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Csv,
    Parquet,
}

impl OutputFormat {
    /// Conventional file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Parquet => "parquet",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// Write a DataFrame to `path` in the requested format.
///
/// Parquet output uses Snappy compression for a good speed/size balance on
/// numeric columns. Returns the output size in bytes.
pub fn write_dataframe(df: &mut DataFrame, path: &Path, format: OutputFormat) -> Result<u64> {
    info!(
        "Writing {} rows x {} columns to {} ({})",
        df.height(),
        df.width(),
        path.display(),
        format
    );

    let file = File::create(path)
        .map_err(|e| Error::io(format!("Failed to create {}", path.display()), e))?;

    let bytes = match format {
        OutputFormat::Csv => {
            CsvWriter::new(file).include_header(true).finish(df)?;
            std::fs::metadata(path)?.len()
        }
        OutputFormat::Parquet => ParquetWriter::new(file)
            .with_compression(ParquetCompression::Snappy)
            .finish(df)?,
    };

    Ok(bytes)
}
