//! Backward walk over a filled grid.
//!
//! At every interior cell the walk asks
//! [`Candidates::step_to`](crate::grid::Candidates::step_to) which
//! neighbour produced the cell's value and follows it, emitting one alignment
//! column per move. Columns are collected end-first and reversed once at the
//! end. The grid is only read, never modified.

use crate::grid::{Cell, ScoringGrid, Step};
use crate::pair::{AlignedPair, GAP};
use crate::scoring::ScoringModel;
use crate::traits::DpMode;

/// Recover the aligned pair ending at `start` under regime `M`.
///
/// Global regimes walk while both indices are positive and then drain the
/// remaining prefix of whichever sequence is left, so the rows always cover
/// both inputs completely. Local regimes additionally stop at the first
/// zero-valued cell and never drain.
pub fn walk<M: DpMode>(
    grid: &ScoringGrid,
    seq1: &[u8],
    seq2: &[u8],
    scoring: &ScoringModel,
    start: Cell,
) -> AlignedPair {
    #[cfg(feature = "tracing")]
    let span = tracing::trace_span!(
        "traceback",
        mode = %M::KIND,
        start_i = start.0,
        start_j = start.1
    );
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let (mut i, mut j) = start;
    let mut top = Vec::with_capacity(i + j);
    let mut bottom = Vec::with_capacity(i + j);

    while i > 0 && j > 0 && M::continues_from(grid.get(i, j)) {
        let value = grid.get(i, j);
        match grid.candidates(seq1, seq2, scoring, i, j).step_to(value) {
            Step::Diagonal => {
                top.push(seq1[i - 1]);
                bottom.push(seq2[j - 1]);
                i -= 1;
                j -= 1;
            }
            Step::GapInSeq2 => {
                top.push(seq1[i - 1]);
                bottom.push(GAP);
                i -= 1;
            }
            Step::GapInSeq1 => {
                top.push(GAP);
                bottom.push(seq2[j - 1]);
                j -= 1;
            }
        }
    }

    if M::DRAINS_BORDER {
        while i > 0 {
            top.push(seq1[i - 1]);
            bottom.push(GAP);
            i -= 1;
        }
        while j > 0 {
            top.push(GAP);
            bottom.push(seq2[j - 1]);
            j -= 1;
        }
    }

    top.reverse();
    bottom.reverse();
    AlignedPair::from_traceback(top, bottom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::fill;
    use crate::traits::{Global, Local};

    fn run<M: DpMode>(s: &[u8], t: &[u8], scoring: ScoringModel) -> AlignedPair {
        let filled = fill::<M>(s, t, &scoring);
        walk::<M>(&filled.grid, s, t, &scoring, filled.start)
    }

    #[test]
    fn global_tie_break_follows_priority() {
        let pair = run::<Global>(b"GATTACA", b"GCATGCU", ScoringModel::unit());
        assert_eq!(pair.top(), b"G-ATTACA");
        assert_eq!(pair.bottom(), b"GCA-TGCU");
    }

    #[test]
    fn global_drains_remaining_prefix() {
        let pair = run::<Global>(b"ACGT", b"", ScoringModel::default());
        assert_eq!(pair.top(), b"ACGT");
        assert_eq!(pair.bottom(), b"----");

        let pair = run::<Global>(b"", b"ACGT", ScoringModel::default());
        assert_eq!(pair.top(), b"----");
        assert_eq!(pair.bottom(), b"ACGT");
    }

    #[test]
    fn global_prefers_gap_in_seq2_over_gap_in_seq1() {
        let pair = run::<Global>(b"ACGT", b"AGT", ScoringModel::unit());
        assert_eq!(pair.top(), b"ACGT");
        assert_eq!(pair.bottom(), b"A-GT");
    }

    #[test]
    fn positive_gap_penalty_is_accepted() {
        let pair = run::<Global>(b"AC", b"AC", ScoringModel::new(2, -1, 2));
        assert_eq!(pair.top(), b"--AC");
        assert_eq!(pair.bottom(), b"AC--");
    }

    #[test]
    fn local_stops_at_zero_without_draining() {
        let pair = run::<Local>(b"ACACACTA", b"AGCACACA", ScoringModel::default());
        assert_eq!(pair.top(), b"A-CACACTA");
        assert_eq!(pair.bottom(), b"AGCACAC-A");

        let pair = run::<Local>(b"GATTACA", b"GCATGCU", ScoringModel::unit());
        assert_eq!(pair.top(), b"AT");
        assert_eq!(pair.bottom(), b"AT");
    }

    #[test]
    fn local_with_no_positive_cell_is_empty() {
        let pair = run::<Local>(b"AAAA", b"CCC", ScoringModel::default());
        assert!(pair.is_empty());
    }

    #[test]
    fn walk_leaves_grid_untouched() {
        let scoring = ScoringModel::default();
        let filled = fill::<Global>(b"ACGTT", b"AGT", &scoring);
        let before = filled.grid.clone();
        let _ = walk::<Global>(&filled.grid, b"ACGTT", b"AGT", &scoring, filled.start);
        assert_eq!(before, filled.grid);
    }
}
