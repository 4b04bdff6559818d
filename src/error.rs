//! Error taxonomy for grid validation, clue seeding, and puzzle parsing.

/// Errors that can occur while constructing a [`Solver`](crate::Solver) or
/// parsing a puzzle string.
///
/// No variant here is recoverable within the solver itself: every one of them
/// is detected once, at the boundary that produced it, and handed back to the
/// caller untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SudokuError {
    /// `N` is not a perfect square, or is smaller than 4.
    #[display("unsupported grid size {n}: N must be a perfect square >= 4")]
    UnsupportedSize {
        /// The offending size.
        n: usize,
    },

    /// The input is not an `N`×`N` grid.
    #[display("malformed grid: expected {expected}x{expected}, found a row of length {found}")]
    MalformedGrid {
        /// The size the grid was expected to have.
        expected: usize,
        /// The length actually observed.
        found: usize,
    },

    /// A cell holds a value outside `[0, N]`.
    #[display("invalid cell value {value} at row {row}, column {col}: must be in [0, {n}]")]
    InvalidCell {
        /// The out-of-range value.
        value: u32,
        /// Zero-based row of the offending cell.
        row: usize,
        /// Zero-based column of the offending cell.
        col: usize,
        /// The grid size the value was checked against.
        n: usize,
    },

    /// Two clues in the input grid collide on one of the four exact-cover
    /// constraints (same row+digit, same column+digit, or same region+digit).
    #[display("inconsistent clues: row {row}, column {col} collides with an earlier clue")]
    InconsistentClue {
        /// Zero-based row of the clue that could not be seeded.
        row: usize,
        /// Zero-based column of the clue that could not be seeded.
        col: usize,
    },

    /// A puzzle string contained a character outside `.0-9a-zA-Z`.
    #[display("invalid character {ch:?} at position {pos} in puzzle string")]
    InvalidChar {
        /// The offending character.
        ch: char,
        /// Its byte offset in the input string.
        pos: usize,
    },
}
