//! Dense (m+1)×(n+1) scoring grid and the row-major fill pass.
//!
//! Row `i` corresponds to the first `i` symbols of `seq1`, column `j` to the
//! first `j` symbols of `seq2`. The recurrence over the three neighbouring
//! cells lives in [`ScoringGrid::candidates`] and is shared verbatim by the
//! fill pass and by [`crate::traceback`], so both always agree on which move
//! produced a given cell.

use crate::scoring::{Score, ScoringModel};
use crate::traits::DpMode;

/// Grid coordinate `(i, j)`.
pub type Cell = (usize, usize);

/// Row-major score grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoringGrid {
    rows: usize,
    cols: usize,
    cells: Vec<Score>,
}

/// The three values an interior cell can be derived from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Candidates {
    /// `grid[i-1][j-1]` plus the substitution score of `seq1[i-1]`, `seq2[j-1]`.
    pub diagonal: Score,
    /// `grid[i-1][j]` plus the gap penalty: `seq1[i-1]` faces a gap.
    pub gap_in_seq2: Score,
    /// `grid[i][j-1]` plus the gap penalty: `seq2[j-1]` faces a gap.
    pub gap_in_seq1: Score,
}

/// A single backward move through the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Diagonal,
    GapInSeq2,
    GapInSeq1,
}

impl Candidates {
    #[inline]
    pub fn best(&self) -> Score {
        self.diagonal.max(self.gap_in_seq2).max(self.gap_in_seq1)
    }

    /// Move that explains a cell holding `value`.
    ///
    /// Priority is diagonal, then gap in `seq2`, and otherwise gap in `seq1`.
    /// The last branch is not re-checked: every interior cell equals at least
    /// one of its candidates, so reaching it means `gap_in_seq1` matched.
    #[inline]
    pub fn step_to(&self, value: Score) -> Step {
        if value == self.diagonal {
            Step::Diagonal
        } else if value == self.gap_in_seq2 {
            Step::GapInSeq2
        } else {
            Step::GapInSeq1
        }
    }
}

impl ScoringGrid {
    /// All-zero grid with the given dimensions.
    pub fn zeroed(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![0; rows * cols],
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Value at `(i, j)`.
    ///
    /// # Panics
    /// Panics if the coordinate lies outside the grid.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> Score {
        assert!(i < self.rows && j < self.cols, "cell ({i},{j}) out of range");
        self.cells[i * self.cols + j]
    }

    /// Row `i` as a slice of `cols()` values.
    ///
    /// # Panics
    /// Panics if `i >= rows()`.
    pub fn row(&self, i: usize) -> &[Score] {
        assert!(i < self.rows, "row {i} out of range");
        &self.cells[i * self.cols..(i + 1) * self.cols]
    }

    #[inline]
    fn set(&mut self, i: usize, j: usize, value: Score) {
        self.cells[i * self.cols + j] = value;
    }

    /// Candidate values for interior cell `(i, j)`, `i >= 1`, `j >= 1`.
    #[inline]
    pub fn candidates(
        &self,
        seq1: &[u8],
        seq2: &[u8],
        scoring: &ScoringModel,
        i: usize,
        j: usize,
    ) -> Candidates {
        let gap = scoring.gap();
        Candidates {
            diagonal: self.get(i - 1, j - 1) + scoring.substitution(seq1[i - 1], seq2[j - 1]),
            gap_in_seq2: self.get(i - 1, j) + gap,
            gap_in_seq1: self.get(i, j - 1) + gap,
        }
    }
}

/// A fully populated grid together with the cell the traceback starts from.
#[derive(Clone, Debug)]
pub struct FilledGrid {
    pub grid: ScoringGrid,
    pub start: Cell,
}

impl FilledGrid {
    /// Alignment score: the value held by the start cell.
    #[inline]
    pub fn score(&self) -> Score {
        self.grid.get(self.start.0, self.start.1)
    }
}

/// Fill the grid for `seq1` × `seq2` under regime `M`.
///
/// Cells are visited row-major (outer loop over `seq1`, inner over `seq2`).
/// For regimes that track a maximum, the running best is replaced only on a
/// strictly greater value, so the first cell reaching the maximum wins. It
/// starts at `(0, 0)` with value 0, which yields an empty alignment when no
/// cell is positive.
pub fn fill<M: DpMode>(seq1: &[u8], seq2: &[u8], scoring: &ScoringModel) -> FilledGrid {
    let m = seq1.len();
    let n = seq2.len();

    #[cfg(feature = "tracing")]
    let span = tracing::trace_span!("fill_grid", mode = %M::KIND, rows = m + 1, cols = n + 1);
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let mut grid = ScoringGrid::zeroed(m + 1, n + 1);
    for i in 1..=m {
        grid.set(i, 0, M::border_score(i, scoring));
    }
    for j in 1..=n {
        grid.set(0, j, M::border_score(j, scoring));
    }

    let mut best_value = 0;
    let mut best_cell = (0, 0);

    for i in 1..=m {
        for j in 1..=n {
            let value = M::cell_score(&grid.candidates(seq1, seq2, scoring, i, j));
            grid.set(i, j, value);
            if M::TRACKS_MAXIMUM && value > best_value {
                best_value = value;
                best_cell = (i, j);
            }
        }
    }

    let start = if M::TRACKS_MAXIMUM { best_cell } else { (m, n) };
    FilledGrid { grid, start }
}
