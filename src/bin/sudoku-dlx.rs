use std::io::{self, Read};
use std::process::ExitCode;

use clap::Parser;
use log::error;
use sudoku_dlx::{format_grid, parse_grid, Solver};

/// Solve a Sudoku puzzle via Dancing Links (Algorithm X).
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Puzzle string (`.`/`0` for empty, `1-9`/`a-z` for digits), or `-` to
    /// read it from stdin.
    puzzle: String,
}

fn read_puzzle(arg: &str) -> io::Result<String> {
    if arg == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        Ok(buf.trim().to_owned())
    } else {
        Ok(arg.to_owned())
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let puzzle = match read_puzzle(&args.puzzle) {
        Ok(s) => s,
        Err(e) => {
            error!("failed to read puzzle: {e}");
            return ExitCode::FAILURE;
        }
    };

    let grid = match parse_grid(&puzzle) {
        Ok(grid) => grid,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let mut solver = match Solver::new(grid) {
        Ok(solver) => solver,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    if solver.solve() {
        if let Some(solution) = solver.solution() {
            println!("{}", format_grid(solution));
        }
        ExitCode::SUCCESS
    } else {
        eprintln!("no solution");
        ExitCode::FAILURE
    }
}
