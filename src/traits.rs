//! The seam between the shared dynamic program and its two boundary regimes.
//!
//! Global and local alignment fill the same grid with the same three-way
//! recurrence and walk it back with the same priority order. They differ only
//! in a handful of decisions, which [`DpMode`] captures:
//! - how the first row and column are initialised,
//! - whether a cell value is floored at zero,
//! - whether the fill pass records a running maximum as the traceback start,
//! - when the backward walk stops, and whether it then drains the borders.
//!
//! [`Global`] and [`Local`] are zero-sized markers; the generic driver in
//! [`crate::grid`] and [`crate::traceback`] is monomorphised for each.

use crate::aligner::AlignmentMode;
use crate::grid::Candidates;
use crate::scoring::{Score, ScoringModel};

/// Boundary behaviour of one alignment regime.
pub trait DpMode {
    /// Runtime tag for this regime.
    const KIND: AlignmentMode;

    /// Whether the fill pass tracks the maximum cell as the traceback start.
    ///
    /// When `false` the walk starts at the bottom-right corner `(m, n)`.
    const TRACKS_MAXIMUM: bool;

    /// Whether the walk, once it hits row 0 or column 0, keeps emitting
    /// symbol-vs-gap columns until both indices reach 0.
    const DRAINS_BORDER: bool;

    /// Value of border cell `(index, 0)` or `(0, index)`.
    fn border_score(index: usize, scoring: &ScoringModel) -> Score;

    /// Value of an interior cell given its three candidates.
    fn cell_score(candidates: &Candidates) -> Score;

    /// Whether the backward walk may continue from an interior cell holding
    /// `value`.
    fn continues_from(value: Score) -> bool;
}

/// End-to-end (Needleman-Wunsch) alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Global;

/// Best-segment (Smith-Waterman) alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Local;

impl DpMode for Global {
    const KIND: AlignmentMode = AlignmentMode::Global;
    const TRACKS_MAXIMUM: bool = false;
    const DRAINS_BORDER: bool = true;

    #[inline]
    fn border_score(index: usize, scoring: &ScoringModel) -> Score {
        scoring.gap_run(index)
    }

    #[inline]
    fn cell_score(candidates: &Candidates) -> Score {
        candidates.best()
    }

    #[inline]
    fn continues_from(_value: Score) -> bool {
        true
    }
}

impl DpMode for Local {
    const KIND: AlignmentMode = AlignmentMode::Local;
    const TRACKS_MAXIMUM: bool = true;
    const DRAINS_BORDER: bool = false;

    #[inline]
    fn border_score(_index: usize, _scoring: &ScoringModel) -> Score {
        0
    }

    #[inline]
    fn cell_score(candidates: &Candidates) -> Score {
        candidates.best().max(0)
    }

    #[inline]
    fn continues_from(value: Score) -> bool {
        value > 0
    }
}
