//! meg: solve a dense linear system read from a text file.
//!
//! CLI entry point using clap for argument parsing. Exit codes:
//! 0 on success, 1 on bad arguments, 2 on input or solve failure.

mod input;
mod report;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "meg",
    version,
    about = "Gaussian elimination solver for dense square systems",
    long_about = "Solves Ax = b by Gaussian elimination with partial pivoting.\n\
                  The input file holds whitespace-separated values: the dimension n,\n\
                  then n rows of n coefficients followed by the row's right-hand side."
)]
struct Cli {
    /// Input file with the system to solve
    input: PathBuf,

    /// Print the determinant before solving (cofactor expansion, small n only)
    #[arg(long)]
    det: bool,

    /// Verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            let _ = err.print();
            return ExitCode::from(code);
        }
    };

    // Set up logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut system = input::parse_system_file(&cli.input)?;
    info!("Loaded {0}x{0} system from {1}", system.dim(), cli.input.display());

    if cli.det {
        println!("det = {:.6}", meg_core::determinant(&system));
    }

    print!("{}", system);
    println!("\n");

    let mut reporter = report::TraceReporter;
    let solution = meg_core::solve_with(&mut system, &mut reporter)?;

    report::print_solution(&solution);
    Ok(())
}
