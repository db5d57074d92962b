//! Command implementations for the HYSPLIT reader CLI
//!
//! Each command lives in its own module; `shared` carries the logging
//! setup and progress bar helpers they have in common.

pub mod convert;
pub mod inspect;
pub mod shared;

use crate::cli::args::{Args, Commands};
use crate::{Error, Result};

/// Main command runner, dispatching to the subcommand handlers.
pub fn run(args: Args) -> Result<()> {
    match args.command {
        Some(Commands::Convert(convert_args)) => convert::run_convert(convert_args),
        Some(Commands::Inspect(inspect_args)) => inspect::run_inspect(inspect_args),
        None => Err(Error::configuration("No command specified".to_string())),
    }
}
