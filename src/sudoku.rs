//! The Sudoku-as-exact-cover encoding: one candidate row per `(digit, row,
//! column)` triple, four constraint columns per row.

use crate::dlx::ExactCover;

/// A candidate placement of `digit` at `(row, col)`. `row` and `col` are
/// 1-based, matching the node identifier triple `(candidate, row, column)`
/// used elsewhere in this crate so solution-mapping needs no translation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Candidate {
    /// The digit `1..=n`.
    pub digit: u32,
    /// 1-based row.
    pub row: u32,
    /// 1-based column.
    pub col: u32,
}

/// The exact-cover formulation of an empty `n`×`n` Sudoku board. Columns are
/// partitioned into four bands of `n^2` columns each: cell, row-digit,
/// column-digit, region-digit, in that order. Rows are ordered with digit
/// fastest, then column, then row.
pub struct SudokuBoard {
    n: usize,
    region_side: usize,
}

impl SudokuBoard {
    /// `n` must already be validated as a perfect square `>= 4`.
    pub fn new(n: usize) -> SudokuBoard {
        let region_side = (n as f64).sqrt().round() as usize;
        SudokuBoard { n, region_side }
    }

    fn region_of(&self, r: usize, c: usize) -> usize {
        (r / self.region_side) * self.region_side + c / self.region_side
    }

    fn columns_for(&self, r: usize, c: usize, d: usize) -> [usize; 4] {
        let n = self.n;
        let region = self.region_of(r, c);
        [
            r * n + c,
            n * n + r * n + (d - 1),
            2 * n * n + c * n + (d - 1),
            3 * n * n + region * n + (d - 1),
        ]
    }
}

impl ExactCover for SudokuBoard {
    type Label = Candidate;

    fn exact_cover_rows<'a>(&'a self) -> Box<dyn Iterator<Item = (Candidate, Vec<usize>)> + 'a> {
        let n = self.n;
        Box::new((0..n).flat_map(move |r| {
            (0..n).flat_map(move |c| {
                (1..=n).map(move |d| {
                    let candidate = Candidate {
                        digit: d as u32,
                        row: (r + 1) as u32,
                        col: (c + 1) as u32,
                    };
                    (candidate, self.columns_for(r, c, d).to_vec())
                })
            })
        }))
    }

    fn exact_cover_num_cols(&self) -> usize {
        4 * self.n * self.n
    }
}
