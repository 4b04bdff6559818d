//! The toroidal doubly-linked matrix and Algorithm X search.
//!
//! Nodes live in a single flat arena (`Vec<Node>`) addressed by index rather
//! than behind real pointers: index 0 is the root sentinel, indices
//! `1..=num_cols` are the column headers, and everything after that is a
//! matrix entry. This sidesteps the aliasing a real quadruply-linked pointer
//! mesh would need and makes bulk teardown free — the arena is just dropped.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use log::{debug, trace};

/// A source of exact-cover rows: one entry per candidate placement, each
/// naming the (unordered) set of columns it satisfies.
pub trait ExactCover {
    /// Caller-facing identity of a row, carried through to the solution.
    type Label: Copy + Debug + Eq + Hash;

    /// All candidate rows, each paired with the columns it covers.
    fn exact_cover_rows<'a>(&'a self) -> Box<dyn Iterator<Item = (Self::Label, Vec<usize>)> + 'a>;

    /// Total number of columns in the matrix.
    fn exact_cover_num_cols(&self) -> usize;
}

/// One element of the arena: a column header or a matrix entry, depending on
/// whether its index falls in the header range.
///
/// `head` is a column header index for every node (a header is its own
/// `head`). `data` is dual-purpose: for a header it is the live row count
/// (`size` in the spec); for an entry it is the index into `row_labels`.
#[derive(Default, Clone, Copy, Debug)]
struct Node {
    l: usize,
    r: usize,
    u: usize,
    d: usize,
    head: usize,
    data: usize,
}

const ROOT: usize = 0;

/// The toroidal quadruply-linked matrix plus the bookkeeping needed to seed
/// clues and run the search.
pub struct DancingLinks<L: Copy + Debug + Eq + Hash> {
    node_list: Vec<Node>,
    num_cols: usize,
    row_labels: Vec<L>,
    /// Arena index of one (the first) node in each row, keyed by row number.
    row_start: Vec<usize>,
    /// Row number for a given label, used by clue seeding.
    row_by_label: HashMap<L, usize>,
    /// Rows covered by [`DancingLinks::seed`], kept covered for the rest of
    /// the structure's life and never popped by search.
    clue_rows: Vec<usize>,
}

/// Returned by [`DancingLinks::seed`] when a clue collides with one already
/// seeded: one of its four columns was already covered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedConflict;

impl<L: Copy + Debug + Eq + Hash> DancingLinks<L> {
    /// Builds the full toroidal matrix from `ec`. Every row `ec` yields
    /// becomes a live candidate row; nothing is pre-filtered.
    pub fn new<EC>(ec: EC) -> DancingLinks<L>
    where
        EC: ExactCover<Label = L>,
    {
        let num_cols = ec.exact_cover_num_cols();
        let mut dl = DancingLinks {
            node_list: Vec::new(),
            num_cols,
            row_labels: Vec::new(),
            row_start: Vec::new(),
            row_by_label: HashMap::new(),
            clue_rows: Vec::new(),
        };

        dl.setup_headers();
        for row in ec.exact_cover_rows() {
            dl.add_row(row);
        }

        debug!(
            "dlx: built {} columns, {} candidate rows, {} entry nodes",
            dl.num_cols,
            dl.row_labels.len(),
            dl.node_list.len() - 1 - dl.num_cols,
        );

        dl
    }

    /// Number of columns in the matrix (`4N^2` for Sudoku).
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Number of candidate rows in the matrix (`N^3` for Sudoku).
    pub fn num_rows(&self) -> usize {
        self.row_labels.len()
    }

    /// Current live size of column `col` (0-based).
    pub fn column_size(&self, col: usize) -> usize {
        self.node_list[self.header_index(col)].data
    }

    /// Labels of the rows covered by [`DancingLinks::seed`] so far.
    pub fn clue_labels(&self) -> Vec<L> {
        self.clue_rows.iter().map(|&r| self.row_labels[r]).collect()
    }

    fn setup_headers(&mut self) {
        let root = Node {
            head: ROOT,
            data: 0,
            l: self.num_cols,
            r: 1,
            u: 0,
            d: 0,
        };
        self.node_list.push(root);
        let num_cols = self.num_cols;
        self.node_list.extend((0..num_cols).map(|i| Node {
            l: i,
            r: (i + 2) % (num_cols + 1),
            u: i + 1,
            d: i + 1,
            head: i + 1,
            data: 0,
        }));
    }

    fn header_index(&self, col: usize) -> usize {
        col + 1
    }

    fn add_row(&mut self, (label, row): (L, Vec<usize>)) {
        let row_num = self.row_labels.len();
        self.row_labels.push(label);
        self.row_by_label.insert(label, row_num);

        let mut idx = self.node_list.len();
        let row_start = idx;
        self.row_start.push(row_start);

        for (i, col) in row.iter().copied().enumerate() {
            let header = self.header_index(col);
            let new_node = Node {
                l: (i + row.len() - 1) % row.len() + row_start,
                r: (i + row.len() + 1) % row.len() + row_start,
                u: self.node_list[header].u,
                d: header,
                head: header,
                data: row_num,
            };
            self.node_list[new_node.u].d = idx;
            self.node_list[header].u = idx;
            self.node_list[header].data += 1;

            self.node_list.push(new_node);
            idx += 1;
        }
    }

    fn header_live(&self, header: usize) -> bool {
        let node = self.node_list[header];
        self.node_list[node.l].r == header && self.node_list[node.r].l == header
    }

    fn cover_col(&mut self, header_idx: usize) {
        let header_node = self.node_list[header_idx];
        self.node_list[header_node.l].r = header_node.r;
        self.node_list[header_node.r].l = header_node.l;

        let mut i = header_node.d;
        while i != header_idx {
            let mut j = self.node_list[i].r;
            while j != i {
                let node = self.node_list[j];
                self.node_list[node.d].u = node.u;
                self.node_list[node.u].d = node.d;
                self.node_list[node.head].data -= 1;
                j = node.r;
            }
            i = self.node_list[i].d;
        }
    }

    fn uncover_col(&mut self, header_idx: usize) {
        let header_node = self.node_list[header_idx];

        let mut i = header_node.u;
        while i != header_idx {
            let mut j = self.node_list[i].l;
            while j != i {
                let node = self.node_list[j];
                self.node_list[node.head].data += 1;
                self.node_list[node.u].d = j;
                self.node_list[node.d].u = j;
                j = node.l;
            }
            i = self.node_list[i].u;
        }

        self.node_list[header_node.l].r = header_idx;
        self.node_list[header_node.r].l = header_idx;
    }

    /// Seeds a pre-filled clue by covering its row's own column and the
    /// three columns of its row-mates — structurally identical to the
    /// solver "choosing" that row during search. Fails if any of the four
    /// columns is already covered by an earlier clue.
    pub fn seed(&mut self, label: L) -> Result<(), SeedConflict> {
        let row_num = *self.row_by_label.get(&label).expect("label not in matrix");
        let start = self.row_start[row_num];

        let mut nodes = vec![start];
        let mut j = self.node_list[start].r;
        while j != start {
            nodes.push(j);
            j = self.node_list[j].r;
        }

        for &node in &nodes {
            let head = self.node_list[node].head;
            if !self.header_live(head) {
                return Err(SeedConflict);
            }
        }

        for &node in &nodes {
            trace!("dlx: seeding clue, covering column {}", self.node_list[node].head - 1);
            self.cover_col(self.node_list[node].head);
        }
        self.clue_rows.push(row_num);
        Ok(())
    }

    /// Runs Algorithm X to completion and returns the labels of the rows
    /// chosen by the search (not including seeded clues), or `None` if no
    /// solution exists.
    pub fn search(&mut self) -> Option<Vec<L>> {
        let mut partial = Vec::new();
        if self.search_rec(&mut partial) {
            Some(partial.iter().map(|&idx| self.row_labels[self.node_list[idx].data]).collect())
        } else {
            None
        }
    }

    fn search_rec(&mut self, partial_soln: &mut Vec<usize>) -> bool {
        if self.node_list[ROOT].r == ROOT {
            return true;
        }

        let col = self.choose_col();
        self.cover_col(col);

        let mut r = self.node_list[col].d;
        while r != col {
            partial_soln.push(r);

            let mut j = self.node_list[r].r;
            while j != r {
                self.cover_col(self.node_list[j].head);
                j = self.node_list[j].r;
            }

            if self.search_rec(partial_soln) {
                return true;
            }

            j = self.node_list[r].l;
            while j != r {
                self.uncover_col(self.node_list[j].head);
                j = self.node_list[j].l;
            }
            partial_soln.pop();

            r = self.node_list[r].d;
        }

        self.uncover_col(col);
        false
    }

    /// The live column header with minimum size, breaking ties by taking the
    /// left-most candidate in the live horizontal list.
    fn choose_col(&self) -> usize {
        let mut best = self.node_list[ROOT].r;
        let mut c = self.node_list[best].r;
        while c != ROOT {
            if self.node_list[c].data < self.node_list[best].data {
                best = c;
            }
            c = self.node_list[c].r;
        }
        best
    }

    #[cfg(test)]
    fn check_link_symmetry(&self) {
        for (idx, node) in self.node_list.iter().enumerate() {
            assert_eq!(self.node_list[node.u].d, idx);
            assert_eq!(self.node_list[node.d].u, idx);
            assert_eq!(self.node_list[node.l].r, idx);
            assert_eq!(self.node_list[node.r].l, idx);
        }
    }

    #[cfg(test)]
    fn check_size_consistency(&self) {
        let mut h = self.node_list[ROOT].r;
        while h != ROOT {
            let mut count = 0;
            let mut n = self.node_list[h].d;
            while n != h {
                count += 1;
                n = self.node_list[n].d;
            }
            assert_eq!(count, self.node_list[h].data, "column {h} size mismatch");
            h = self.node_list[h].r;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestEC {
        num_cols: usize,
        data: Vec<Vec<usize>>,
    }

    impl ExactCover for TestEC {
        type Label = usize;

        fn exact_cover_num_cols(&self) -> usize {
            self.num_cols
        }

        fn exact_cover_rows<'a>(&'a self) -> Box<dyn Iterator<Item = (usize, Vec<usize>)> + 'a> {
            Box::new(self.data.iter().cloned().enumerate())
        }
    }

    /// Knuth's own toy example from "Dancing Links": six rows over six
    /// columns with a single exact cover, {A, D} in his lettering, rows 0
    /// and 3 here.
    fn knuth_example() -> TestEC {
        TestEC {
            num_cols: 7,
            data: vec![
                vec![2, 4, 5],
                vec![0, 3, 6],
                vec![1, 2, 5],
                vec![0, 3],
                vec![1, 6],
                vec![3, 4, 6],
            ],
        }
    }

    #[test]
    fn finds_the_known_exact_cover() {
        let mut dl = DancingLinks::new(knuth_example());
        let solution = dl.search().expect("this instance has a solution");
        let mut rows: Vec<usize> = solution;
        rows.sort_unstable();
        assert_eq!(rows, vec![0, 3, 4]);
    }

    #[test]
    fn structural_sizes_after_build() {
        let dl = DancingLinks::new(knuth_example());
        assert_eq!(dl.num_cols(), 7);
        assert_eq!(dl.num_rows(), 6);
    }

    #[test]
    fn no_solution_when_matrix_is_unsatisfiable() {
        let ec = TestEC {
            num_cols: 2,
            data: vec![vec![0]],
        };
        let mut dl = DancingLinks::new(ec);
        assert!(dl.search().is_none());
    }

    #[test]
    fn link_symmetry_holds_after_construction() {
        let dl = DancingLinks::new(knuth_example());
        dl.check_link_symmetry();
    }

    #[test]
    fn cover_uncover_is_an_exact_inverse() {
        let mut dl = DancingLinks::new(knuth_example());
        let before = dl.node_list.clone();
        for col in 1..=dl.num_cols {
            dl.cover_col(col);
            dl.uncover_col(col);
            for (idx, node) in dl.node_list.iter().enumerate() {
                assert_eq!(node.l, before[idx].l, "col {col} left link changed");
                assert_eq!(node.r, before[idx].r, "col {col} right link changed");
                assert_eq!(node.u, before[idx].u, "col {col} up link changed");
                assert_eq!(node.d, before[idx].d, "col {col} down link changed");
            }
        }
    }

    #[test]
    fn size_consistency_holds_after_construction() {
        let dl = DancingLinks::new(knuth_example());
        dl.check_size_consistency();
    }

    #[test]
    fn seed_then_search_matches_direct_search() {
        // Seeding row 3 ({0, 3}) up front should leave exactly rows {0, 4}
        // to be found by search to complete the same cover as the unseeded
        // case ({0, 3, 4}).
        let mut dl = DancingLinks::new(knuth_example());
        dl.seed(3).unwrap();
        let mut solution = dl.search().unwrap();
        solution.sort_unstable();
        assert_eq!(solution, vec![0, 4]);
    }

    #[test]
    fn seed_conflict_is_detected() {
        let mut dl = DancingLinks::new(knuth_example());
        dl.seed(3).unwrap(); // covers columns 0, 3, 6
        // row 1 also covers column 0 and 6 -- must conflict.
        assert_eq!(dl.seed(1), Err(SeedConflict));
    }
}
