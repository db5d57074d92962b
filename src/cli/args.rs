//! Command-line argument definitions for the HYSPLIT reader
//!
//! This module defines the CLI interface using the clap derive API. The
//! reader has two subcommands: `convert` for writing parsed tables to CSV
//! or Parquet, and `inspect` for printing a file summary without output.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::app::services::table_writer::OutputFormat;
use crate::{Error, Result};

/// CLI arguments for the HYSPLIT output reader
#[derive(Debug, Clone, Parser)]
#[command(
    name = "hysplit-reader",
    version,
    about = "Convert HYSPLIT trajectory and PARDUMP output files to CSV or Parquet",
    long_about = "A fast reader for HYSPLIT atmospheric model output. Parses trajectory \
                  endpoint files (with automatic detection of the extended meteorology \
                  variant) and text PARDUMP particle dumps into dense numeric tables, \
                  then writes them as CSV or Snappy-compressed Parquet for analysis."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the HYSPLIT reader
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Parse an output file or run directory and write a table
    Convert(ConvertArgs),
    /// Parse an output file and print its shape and statistics
    Inspect(InspectArgs),
}

/// Kind of HYSPLIT output file to parse
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FileKind {
    /// Trajectory endpoint file (tdump / traj-*)
    Trajectory,
    /// Text PARDUMP particle position dump
    Pardump,
}

impl std::fmt::Display for FileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trajectory => write!(f, "trajectory"),
            Self::Pardump => write!(f, "pardump"),
        }
    }
}

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Csv,
    Parquet,
}

impl std::fmt::Display for FormatArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Csv => write!(f, "csv"),
            Self::Parquet => write!(f, "parquet"),
        }
    }
}

impl From<FormatArg> for OutputFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Csv => OutputFormat::Csv,
            FormatArg::Parquet => OutputFormat::Parquet,
        }
    }
}

/// Arguments for the convert command
#[derive(Debug, Clone, Parser)]
pub struct ConvertArgs {
    /// Input path: a trajectory file, a PARDUMP file, or a run directory.
    ///
    /// For trajectory input a directory is expanded to all files matching
    /// traj-* and their rows are concatenated in file order. For PARDUMP
    /// input a directory resolves to the PARDUMP file inside it.
    #[arg(value_name = "INPUT", help = "Input file or run directory")]
    pub input: PathBuf,

    /// Output file path
    ///
    /// Defaults to the input name with the format's extension, in the
    /// current directory.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        help = "Output file path"
    )]
    pub output: Option<PathBuf>,

    /// Kind of file to parse
    #[arg(
        short = 'k',
        long = "kind",
        value_enum,
        default_value_t = FileKind::Trajectory,
        help = "Kind of HYSPLIT output to parse"
    )]
    pub kind: FileKind,

    /// Output format
    #[arg(
        short = 'f',
        long = "format",
        value_enum,
        default_value_t = FormatArg::Parquet,
        help = "Output format"
    )]
    pub format: FormatArg,

    /// Write raw parsed values without post-processing
    ///
    /// By default trajectory output gets expanded four-digit years and a
    /// derived traj_dt datetime column. This flag writes the parsed values
    /// exactly as they appear in the file.
    #[arg(long = "raw", help = "Skip year expansion and datetime derivation")]
    pub raw: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress progress output (quiet mode)
    #[arg(short = 'q', long = "quiet", help = "Only show errors")]
    pub quiet: bool,
}

impl ConvertArgs {
    /// Validate the convert command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.input.exists() {
            return Err(Error::configuration(format!(
                "Input path does not exist: {}",
                self.input.display()
            )));
        }

        if let Some(output) = &self.output {
            if let Some(parent) = output.parent() {
                if !parent.as_os_str().is_empty() && !parent.is_dir() {
                    return Err(Error::configuration(format!(
                        "Output directory does not exist: {}",
                        parent.display()
                    )));
                }
            }
        }

        Ok(())
    }

    /// Resolve the output path, defaulting beside the current directory.
    pub fn resolved_output(&self) -> PathBuf {
        match &self.output {
            Some(path) => path.clone(),
            None => {
                let stem = self
                    .input
                    .file_stem()
                    .map(|s| s.to_string_lossy().to_string())
                    .unwrap_or_else(|| "output".to_string());
                let format: OutputFormat = self.format.into();
                PathBuf::from(format!("{}.{}", stem, format.extension()))
            }
        }
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.quiet, self.verbose)
    }

    /// Check if we should show progress bars (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Arguments for the inspect command
#[derive(Debug, Clone, Parser)]
pub struct InspectArgs {
    /// Input file to inspect
    #[arg(value_name = "INPUT", help = "Input file")]
    pub input: PathBuf,

    /// Kind of file to parse
    #[arg(
        short = 'k',
        long = "kind",
        value_enum,
        default_value_t = FileKind::Trajectory,
        help = "Kind of HYSPLIT output to parse"
    )]
    pub kind: FileKind,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress non-summary output (quiet mode)
    #[arg(short = 'q', long = "quiet", help = "Only show errors")]
    pub quiet: bool,
}

impl InspectArgs {
    /// Validate the inspect command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.input.exists() {
            return Err(Error::configuration(format!(
                "Input path does not exist: {}",
                self.input.display()
            )));
        }
        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.quiet, self.verbose)
    }
}

/// Map quiet/verbose flags to a tracing level name.
fn log_level(quiet: bool, verbose: u8) -> &'static str {
    if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
