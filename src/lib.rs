//! A Sudoku solver built on Knuth's Dancing Links (Algorithm X).
//!
//! Sudoku is reduced to an *exact cover* problem — choose a set of candidate
//! placements whose constraints partition the board exactly once — and
//! solved by covering and uncovering columns in a toroidal doubly-linked
//! matrix. See [`dlx`] for the general exact-cover machinery and [`sudoku`]
//! for the Sudoku-specific encoding; [`Solver`] ties the two together behind
//! a small, validated API.
//!
//! # Examples
//!
//! ```
//! use sudoku_dlx::{parse_grid, Solver};
//!
//! let puzzle = "3.542.81.4879.15.6.29.5637485.793.416132.8957.74.6528.2413.9.655.867.192.965124.8";
//! let grid = parse_grid(puzzle)?;
//! let mut solver = Solver::new(grid)?;
//! assert!(solver.solve());
//! assert!(solver.solution().is_some());
//! # Ok::<(), sudoku_dlx::SudokuError>(())
//! ```
//!
//! Puzzles with no solution are reported, not panicked on:
//!
//! ```
//! use sudoku_dlx::{parse_grid, Solver};
//!
//! let unsatisfiable = "9..1....4.14.3.8....3....9....7.8..18....3..........3..21....7...9.4.5..5...16..3";
//! let mut solver = Solver::new(parse_grid(unsatisfiable)?)?;
//! assert!(!solver.solve());
//! # Ok::<(), sudoku_dlx::SudokuError>(())
//! ```

pub mod dlx;
mod error;
mod grid;
mod solver;
pub mod sudoku;

pub use dlx::{DancingLinks, ExactCover, SeedConflict};
pub use error::SudokuError;
pub use grid::{format_grid, parse_grid, Grid};
pub use solver::Solver;
