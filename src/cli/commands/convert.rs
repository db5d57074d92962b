//! Convert command implementation
//!
//! Parses trajectory or PARDUMP input and writes the resulting table as
//! CSV or Parquet. Directory input for trajectories is expanded to all
//! traj-* files with a progress bar; their rows are concatenated in file
//! order.

use std::time::Instant;

use colored::Colorize;
use indicatif::HumanDuration;
use tracing::info;

use crate::app::models::Table;
use crate::app::services::discovery::{parse_pardump_input, parse_trajectory_dir};
use crate::app::services::table_writer::{
    pardump_dataframe, trajectory_dataframe, write_dataframe, OutputFormat,
};
use crate::app::services::trajectory_parser::{TrajectoryParser, TrajectoryVariant};
use crate::cli::args::{ConvertArgs, FileKind};
use crate::{Error, Result};

use super::shared::{format_file_size, setup_logging};

/// Convert command runner.
pub fn run_convert(args: ConvertArgs) -> Result<()> {
    let start_time = Instant::now();

    setup_logging(args.get_log_level())?;
    args.validate()?;

    info!("Converting {} input: {}", kind_name(args.kind), args.input.display());

    let mut df = match args.kind {
        FileKind::Trajectory => {
            let (table, variant) = parse_trajectory_input(&args)?;
            trajectory_dataframe(&table, variant, !args.raw)?
        }
        FileKind::Pardump => {
            let result = parse_pardump_input(&args.input)?;
            pardump_dataframe(&result.table)?
        }
    };

    let output = args.resolved_output();
    let format: OutputFormat = args.format.into();
    let rows = df.height();
    let bytes = write_dataframe(&mut df, &output, format)?;

    if !args.quiet {
        println!(
            "{} {} rows -> {} ({}) in {}",
            "Converted".green().bold(),
            rows,
            output.display(),
            format_file_size(bytes),
            HumanDuration(start_time.elapsed())
        );
    }

    Ok(())
}

/// Parse trajectory input, expanding a directory to its traj-* files.
fn parse_trajectory_input(args: &ConvertArgs) -> Result<(Table, TrajectoryVariant)> {
    if args.input.is_file() {
        let result = TrajectoryParser::new().parse_file(&args.input)?;
        return Ok((result.table, result.variant));
    }

    let (table, variant) = parse_trajectory_dir(&args.input, args.show_progress())?;
    if table.columns() == 0 {
        return Err(Error::configuration(format!(
            "No trajectory data matching traj-* in {}",
            args.input.display()
        )));
    }

    Ok((table, variant))
}

fn kind_name(kind: FileKind) -> &'static str {
    match kind {
        FileKind::Trajectory => "trajectory",
        FileKind::Pardump => "PARDUMP",
    }
}
