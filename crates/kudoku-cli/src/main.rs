//! Command-line sudoku solver.
//!
//! Reads a puzzle from a file, solves it, and prints the solution and
//! the solve statistics.
//!
//! # Usage
//!
//! ```sh
//! kudoku puzzle.csv
//! ```
//!
//! Print only the statistics:
//!
//! ```sh
//! kudoku --stats-only puzzle.txt
//! ```

use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use kudoku_io::read_grid;
use kudoku_solver::solve;

#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Puzzle file: comma-separated cells (.csv) or rows of digits,
    /// with 0 or . for an empty cell.
    puzzle: PathBuf,
    /// Print only the statistics, not the grids.
    #[arg(long)]
    stats_only: bool,
}

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();

    let mut grid = match read_grid(&args.puzzle) {
        Ok(grid) => grid,
        Err(err) => {
            eprintln!("kudoku: {}: {err}", args.puzzle.display());
            return ExitCode::from(2);
        }
    };
    log::debug!("loaded puzzle from {}:\n{grid}", args.puzzle.display());

    if !args.stats_only {
        println!("{grid}");
    }

    let outcome = solve(&mut grid);
    log::info!(
        "search finished: solved={} elapsed={:?}",
        outcome.solved,
        outcome.elapsed
    );

    if outcome.solved {
        if !args.stats_only {
            println!("{}", outcome.grid);
        }
    } else {
        println!("no solution exists for this puzzle");
    }
    println!("Time: {:.2} ms", outcome.elapsed.as_secs_f64() * 1000.0);
    println!("Steps: {}", outcome.stats.steps());
    println!("Recursive calls: {}", outcome.stats.recursive_calls());
    println!("Backtracks: {}", outcome.stats.backtracks());

    if outcome.solved {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}
