//! Core PARDUMP parser implementation

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info};

use crate::app::models::Table;
use crate::app::services::numeric::{parse_token, tokenize};
use crate::app::services::trajectory_parser::ParseStats;
use crate::constants::MIN_PARDUMP_TOKENS;
use crate::{Error, Result};

/// Parsing result for a particle dump: the table plus counters.
#[derive(Debug, Clone)]
pub struct PardumpResult {
    /// Row-major table of `(particle_id, lat, lon, height)` rows.
    pub table: Table,

    /// Parsing counters.
    pub stats: ParseStats,
}

/// Single-pass streaming parser for text PARDUMP files.
#[derive(Debug, Default)]
pub struct PardumpParser;

impl PardumpParser {
    /// Create a new parser.
    pub fn new() -> Self {
        Self
    }

    /// Parse a particle dump file into a four-column table.
    ///
    /// Lines with fewer than four tokens are skipped silently; extra tokens
    /// past the fourth are ignored. A dump with no qualifying lines yields
    /// an empty table with four declared columns.
    pub fn parse_file(&self, file_path: &Path) -> Result<PardumpResult> {
        info!("Parsing PARDUMP file: {}", file_path.display());

        let file = File::open(file_path)
            .map_err(|_| Error::file_not_found(file_path.display().to_string()))?;
        let mut reader = BufReader::new(file);

        let mut table = Table::new(MIN_PARDUMP_TOKENS);
        let mut stats = ParseStats::new();
        let mut buf = Vec::new();

        loop {
            buf.clear();
            // Raw read with lossy decoding: a stray non-UTF8 byte mangles
            // one token, not the whole file.
            let read = reader.read_until(b'\n', &mut buf)?;
            if read == 0 {
                break;
            }
            stats.total_lines += 1;

            let line = String::from_utf8_lossy(&buf);
            let line = line.trim_end_matches(['\n', '\r']);
            if line.is_empty() {
                continue;
            }
            stats.data_lines += 1;

            let tokens = tokenize(line);
            if tokens.len() < MIN_PARDUMP_TOKENS {
                stats.rows_skipped += 1;
                continue;
            }

            let row = [
                parse_token(tokens[0]),
                parse_token(tokens[1]),
                parse_token(tokens[2]),
                parse_token(tokens[3]),
            ];
            table.push_row(&row);
            stats.rows_parsed += 1;
        }

        debug!(
            "Parsed {} particle rows ({} skipped) from {} lines",
            stats.rows_parsed, stats.rows_skipped, stats.total_lines
        );

        Ok(PardumpResult { table, stats })
    }
}
