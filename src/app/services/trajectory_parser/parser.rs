//! Core trajectory parser implementation
//!
//! Reads the whole file into memory, classifies it, then extracts the data
//! lines after the header into a dense table. Malformed lines are skipped
//! silently; only failure to open the file is surfaced to the caller.

use std::path::Path;

use tracing::{debug, info};

use crate::app::models::Table;
use crate::app::services::numeric::{parse_token, tokenize};
use crate::constants::MIN_TRAJECTORY_TOKENS;
use crate::{Error, Result};

use super::classify::classify_lines;
use super::stats::{ParseResult, ParseStats};

/// Two-pass parser for HYSPLIT trajectory endpoint files.
#[derive(Debug, Default)]
pub struct TrajectoryParser;

impl TrajectoryParser {
    /// Create a new parser.
    pub fn new() -> Self {
        Self
    }

    /// Parse a trajectory file into a dense table.
    ///
    /// Files with no header line yield an empty 0x0 table; a header with no
    /// qualifying data lines yields an empty table with the variant's column
    /// count. Both are valid results, not errors.
    pub fn parse_file(&self, file_path: &Path) -> Result<ParseResult> {
        info!("Parsing trajectory file: {}", file_path.display());

        // Trajectory output is ASCII in practice; decode lossily so a stray
        // byte cannot abort the whole file.
        let bytes = std::fs::read(file_path)
            .map_err(|_| Error::file_not_found(file_path.display().to_string()))?;
        let content = String::from_utf8_lossy(&bytes);

        Ok(self.parse_content(&content))
    }

    /// Parse already-loaded file content.
    pub fn parse_content(&self, content: &str) -> ParseResult {
        let lines: Vec<&str> = content.lines().collect();
        let mut stats = ParseStats {
            total_lines: lines.len(),
            ..ParseStats::new()
        };

        // Pass 1: find the header and decide the variant.
        let classification = classify_lines(lines.iter().copied());

        let Some(header_idx) = classification.header_idx else {
            debug!("No header marker found; returning empty 0x0 table");
            return ParseResult {
                table: Table::new(0),
                variant: classification.variant,
                stats,
            };
        };

        let variant = classification.variant;
        let n_cols = variant.column_count();
        debug!(
            "Header at line {}, {} variant, {} columns",
            header_idx, variant, n_cols
        );

        if header_idx + 1 >= lines.len() {
            debug!("No lines after header; returning empty table");
            return ParseResult {
                table: Table::new(n_cols),
                variant,
                stats,
            };
        }

        // Pass 2: extract fixed token positions from each line after the
        // header.
        let data_lines = &lines[header_idx + 1..];
        let mut table = Table::with_row_capacity(n_cols, data_lines.len());
        let indices = variant.token_indices();
        let mut row = Vec::with_capacity(n_cols);

        for line in data_lines {
            if line.is_empty() {
                continue;
            }
            stats.data_lines += 1;

            let tokens = tokenize(line);
            if tokens.len() < MIN_TRAJECTORY_TOKENS {
                stats.rows_skipped += 1;
                continue;
            }

            row.clear();
            let mut valid = true;
            for &idx in indices {
                match tokens.get(idx) {
                    Some(token) => row.push(parse_token(token)),
                    None => {
                        valid = false;
                        break;
                    }
                }
            }

            if !valid || row.is_empty() {
                stats.rows_skipped += 1;
                continue;
            }

            // With the fixed index lists the extracted length already equals
            // the column count; the pad guards a future schema edit.
            while row.len() < n_cols {
                row.push(0.0);
            }

            table.push_row(&row);
            stats.rows_parsed += 1;
        }

        info!(
            "Parsed {} rows ({} skipped) from {} data lines",
            stats.rows_parsed, stats.rows_skipped, stats.data_lines
        );

        ParseResult {
            table,
            variant,
            stats,
        }
    }
}

