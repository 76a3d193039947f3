//! Command-line sudoku solver.
//!
//! Reads a puzzle as 81 cells of text (digits fill a cell; `0`, `.`, `_`
//! leave it empty; whitespace is ignored), runs the backtracking search, and
//! prints the completed grid or reports that no solution exists.
//!
//! ```sh
//! gridnine puzzle.txt
//! cat puzzle.txt | gridnine
//! gridnine --strict puzzle.txt
//! ```

use std::{
    fs,
    io::{self, Read as _},
    path::{Path, PathBuf},
    process::ExitCode,
    time::Instant,
};

use clap::Parser;
use gridnine_solver::{BacktrackSolver, Solution};

use crate::input::ParseMode;

mod input;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// File containing the puzzle; reads standard input when omitted.
    puzzle: Option<PathBuf>,

    /// Reject input containing anything other than digits, the empty-cell
    /// markers `0`, `.`, `_`, and whitespace. Without this flag, unrecognized
    /// characters are treated as empty cells.
    #[arg(long)]
    strict: bool,
}

fn read_puzzle_text(path: Option<&Path>) -> io::Result<String> {
    match path {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();

    let text = match read_puzzle_text(args.puzzle.as_deref()) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("error: failed to read puzzle: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mode = if args.strict {
        ParseMode::Strict
    } else {
        ParseMode::Lenient
    };
    let grid = match input::parse_grid(&text, mode) {
        Ok(grid) => grid,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };
    log::info!("parsed puzzle with {} clues", grid.filled_count());

    let started = Instant::now();
    let solution = BacktrackSolver::new().solve(&grid);
    log::info!("search finished in {:.2?}", started.elapsed());

    match solution {
        Solution::Solved(solved) => {
            print!("{solved}");
            ExitCode::SUCCESS
        }
        Solution::Unsolvable => {
            eprintln!("no solution exists");
            ExitCode::FAILURE
        }
    }
}
