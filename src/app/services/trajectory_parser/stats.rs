//! Parsing statistics and result structures for trajectory processing
//!
//! Row skips are silent by design: the file format gives no way to report
//! which physical line a malformed row came from once rows are dense, so
//! the stats carry counts only, for logging and summaries.

use crate::app::models::Table;

use super::schema::TrajectoryVariant;

/// Parsing result: the dense table plus counters and the detected variant.
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Row-major table of extracted values.
    pub table: Table,

    /// Variant detected during classification.
    pub variant: TrajectoryVariant,

    /// Parsing counters.
    pub stats: ParseStats,
}

/// Simple parsing statistics
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct ParseStats {
    /// Total lines in the file, header and metadata included.
    pub total_lines: usize,

    /// Candidate data lines considered after the header.
    pub data_lines: usize,

    /// Rows appended to the table.
    pub rows_parsed: usize,

    /// Candidate lines dropped for too few tokens or missing positions.
    pub rows_skipped: usize,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Fraction of candidate data lines that produced a row, as a percentage.
    pub fn success_rate(&self) -> f64 {
        if self.data_lines == 0 {
            0.0
        } else {
            (self.rows_parsed as f64 / self.data_lines as f64) * 100.0
        }
    }
}
