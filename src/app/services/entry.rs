//! Spec-level entry points returning bare tables
//!
//! These free functions are the stable two-call surface mirroring the
//! original reader API: give a path, get a dense table back. Callers that
//! want the detected variant or skip counters use the parser types
//! directly.

use std::path::Path;

use crate::app::models::Table;
use crate::Result;

use super::pardump_parser::PardumpParser;
use super::trajectory_parser::TrajectoryParser;

/// Parse a HYSPLIT trajectory endpoint file.
///
/// Returns a table of 9 columns (standard variant) or 18 columns (extended
/// meteorology), or 0x0 when the file has no header line. Fails only when
/// the file cannot be opened.
pub fn parse_trajectory_file(path: impl AsRef<Path>) -> Result<Table> {
    TrajectoryParser::new()
        .parse_file(path.as_ref())
        .map(|result| result.table)
}

/// Parse a HYSPLIT text PARDUMP particle position file.
///
/// Returns a table with four columns: particle id, latitude, longitude,
/// height. Fails only when the file cannot be opened.
pub fn parse_pardump_file(path: impl AsRef<Path>) -> Result<Table> {
    PardumpParser::new()
        .parse_file(path.as_ref())
        .map(|result| result.table)
}
