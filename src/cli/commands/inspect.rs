//! Inspect command implementation
//!
//! Parses a single file and prints its shape, detected variant, and
//! parsing counters without writing any output.

use colored::Colorize;

use crate::app::services::pardump_parser::PardumpParser;
use crate::app::services::trajectory_parser::{ParseStats, TrajectoryParser};
use crate::cli::args::{FileKind, InspectArgs};
use crate::Result;

use super::shared::setup_logging;

/// Inspect command runner.
pub fn run_inspect(args: InspectArgs) -> Result<()> {
    setup_logging(args.get_log_level())?;
    args.validate()?;

    println!("{} {}", "File:".bold(), args.input.display());

    match args.kind {
        FileKind::Trajectory => {
            let result = TrajectoryParser::new().parse_file(&args.input)?;
            let (rows, cols) = result.table.shape();

            if cols == 0 {
                println!("{}", "No header line found (empty 0x0 table)".yellow());
            } else {
                println!("{} {}", "Variant:".bold(), result.variant);
            }
            println!("{} {} rows x {} columns", "Shape:".bold(), rows, cols);
            print_stats(&result.stats);
        }
        FileKind::Pardump => {
            let result = PardumpParser::new().parse_file(&args.input)?;
            let (rows, cols) = result.table.shape();

            println!("{} {} rows x {} columns", "Shape:".bold(), rows, cols);
            print_stats(&result.stats);
        }
    }

    Ok(())
}

fn print_stats(stats: &ParseStats) {
    println!(
        "{} {} lines total, {} data lines, {} rows parsed, {} skipped",
        "Lines:".bold(),
        stats.total_lines,
        stats.data_lines,
        stats.rows_parsed,
        stats.rows_skipped
    );
    if stats.rows_skipped > 0 {
        println!(
            "{}",
            format!("Success rate: {:.1}%", stats.success_rate()).yellow()
        );
    }
}
