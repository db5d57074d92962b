use clap::Parser;
use hysplit_reader::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(()) => {
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("HYSPLIT Reader - Atmospheric Model Output Converter");
    println!("===================================================");
    println!();
    println!("Convert HYSPLIT trajectory endpoint files and text PARDUMP particle");
    println!("dumps into dense numeric tables with CSV or Parquet output.");
    println!();
    println!("USAGE:");
    println!("    hysplit-reader <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    convert     Parse an output file or run directory and write a table");
    println!("    inspect     Parse an output file and print its shape and statistics");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    hysplit-reader convert ./runs/tdump -f csv -o trajectory.csv");
    println!("    hysplit-reader convert ./runs --kind trajectory");
    println!("    hysplit-reader convert ./runs/PARDUMP --kind pardump");
    println!("    hysplit-reader inspect ./runs/tdump");
    println!();
    println!("For detailed help on a command: hysplit-reader <command> --help");
}
