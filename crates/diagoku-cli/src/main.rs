//! Command-line adapter for the Diagoku solver.
//!
//! Parses a grid string, solves it, and prints the result as a 9×9 grid.
//! With `--replay`, every intermediate board recorded during solving is
//! printed first, oldest to newest, so the solving process can be followed
//! step by step.

use std::process::ExitCode;

use clap::Parser;
use diagoku_solver::{AssignmentLog, Solver};

use crate::render::render;

mod render;

/// Solve a diagonal Sudoku grid.
///
/// The grid is 81 characters, row by row: digits 1-9 for givens and `.` for
/// blanks. Both main diagonals must contain 1-9 exactly once in a solution.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// The 81-character grid to solve.
    grid: String,

    /// Print every intermediate board recorded while solving.
    #[arg(long)]
    replay: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let solver = Solver::with_all_strategies();
    let mut log = AssignmentLog::new();
    log::debug!("solving with {} strategies", solver.strategies().len());
    match solver.solve(&args.grid, &mut log) {
        Ok(board) => {
            if args.replay {
                for (step, snapshot) in log.iter().enumerate() {
                    println!("step {}:", step + 1);
                    println!("{}", render(snapshot));
                }
                println!("solution:");
            }
            println!("{}", render(&board));
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
