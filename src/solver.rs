//! The public `Solver` entry point: validates a grid, seeds its clues, and
//! runs Algorithm X over the rest.

use log::{info, warn};

use crate::dlx::DancingLinks;
use crate::error::SudokuError;
use crate::grid::{validate_grid, Grid};
use crate::sudoku::{Candidate, SudokuBoard};

/// Solves one Sudoku puzzle via Dancing Links.
///
/// Construction validates the grid and seeds its clues (§4.C of the design);
/// [`solve`](Solver::solve) runs the search exactly once and is idempotent on
/// repeated calls.
pub struct Solver {
    n: usize,
    original: Grid,
    dl: DancingLinks<Candidate>,
    inconsistency: Option<SudokuError>,
    attempted: bool,
    found: bool,
    solution: Option<Grid>,
}

impl Solver {
    /// Validates `grid` (see [`crate::error::SudokuError`] for the ways this
    /// can fail) and seeds its non-zero clues into the constraint matrix.
    ///
    /// A collision between two clues on the same constraint is *not* a
    /// construction error — per the solver's contract the puzzle is merely
    /// unsolvable, so [`solve`](Solver::solve) will return `false`. Use
    /// [`inconsistency`](Solver::inconsistency) if the distinction matters
    /// to the caller.
    pub fn new(grid: Grid) -> Result<Solver, SudokuError> {
        let n = validate_grid(&grid)?;
        let board = SudokuBoard::new(n);
        let mut dl = DancingLinks::new(board);

        let mut inconsistency = None;
        'seed: for (r, row) in grid.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                if value == 0 {
                    continue;
                }
                let candidate = Candidate {
                    digit: value,
                    row: (r + 1) as u32,
                    col: (c + 1) as u32,
                };
                if dl.seed(candidate).is_err() {
                    warn!("solver: clue at ({r}, {c}) collides with an earlier clue");
                    inconsistency = Some(SudokuError::InconsistentClue { row: r, col: c });
                    break 'seed;
                }
            }
        }

        Ok(Solver {
            n,
            original: grid,
            dl,
            inconsistency,
            attempted: false,
            found: false,
            solution: None,
        })
    }

    /// The grid size this solver was built for.
    pub fn size(&self) -> usize {
        self.n
    }

    /// The [`SudokuError::InconsistentClue`] detected during construction, if
    /// any. `solve()` still returns `false` in this case without needing this
    /// accessor; it exists for callers that want to distinguish "no solution
    /// after search" from "clues conflict outright".
    pub fn inconsistency(&self) -> Option<SudokuError> {
        self.inconsistency
    }

    /// Runs the search. Returns whether a solution exists. Calling this more
    /// than once is a no-op after the first call: the cached result is
    /// returned and the search is not re-run.
    pub fn solve(&mut self) -> bool {
        if self.attempted {
            return self.found;
        }
        self.attempted = true;

        if self.inconsistency.is_some() {
            info!("solver: no solution (inconsistent clues)");
            return false;
        }

        info!(
            "solver: searching {}x{} puzzle ({} candidate rows, {} columns)",
            self.n,
            self.n,
            self.dl.num_rows(),
            self.dl.num_cols(),
        );

        match self.dl.search() {
            Some(chosen) => {
                let mut grid = self.original.clone();
                for candidate in self.dl.clue_labels().into_iter().chain(chosen) {
                    grid[candidate.row as usize - 1][candidate.col as usize - 1] = candidate.digit;
                }
                self.solution = Some(grid);
                self.found = true;
                info!("solver: found a solution");
                true
            }
            None => {
                info!("solver: no solution");
                false
            }
        }
    }

    /// The solved grid, if [`solve`](Solver::solve) has returned `true`.
    pub fn solution(&self) -> Option<&Grid> {
        self.solution.as_ref()
    }
}
