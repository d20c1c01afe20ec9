//! Linear scoring scheme: one score for identical symbols, one for differing
//! symbols, and a constant per-column gap penalty.
//!
//! A `ScoringModel` is a plain `Copy` value. Callers build one per
//! configuration and pass it into each alignment call, so concurrent callers
//! can use different parameter sets without sharing anything.

/// Grid cell and alignment score type.
///
/// Parameters are `i32`; every grid value is a sum of at most `m + n`
/// parameters, so widening to `i64` keeps the arithmetic exact for any grid
/// that fits in memory.
pub type Score = i64;

/// Match/mismatch/gap parameters for a single alignment call.
///
/// No constraints are enforced: a positive gap penalty or a positive mismatch
/// score is accepted and simply changes which paths are optimal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScoringModel {
    match_score: i32,
    mismatch_score: i32,
    gap_penalty: i32,
}

impl ScoringModel {
    pub const DEFAULT_MATCH: i32 = 2;
    pub const DEFAULT_MISMATCH: i32 = -1;
    pub const DEFAULT_GAP: i32 = -1;

    pub const fn new(match_score: i32, mismatch_score: i32, gap_penalty: i32) -> Self {
        Self {
            match_score,
            mismatch_score,
            gap_penalty,
        }
    }

    /// +1 / -1 / -1, the textbook unit scheme.
    pub const fn unit() -> Self {
        Self::new(1, -1, -1)
    }

    #[inline]
    pub fn match_score(&self) -> i32 {
        self.match_score
    }

    #[inline]
    pub fn mismatch_score(&self) -> i32 {
        self.mismatch_score
    }

    #[inline]
    pub fn gap_penalty(&self) -> i32 {
        self.gap_penalty
    }

    /// Score for placing `a` and `b` in the same column.
    #[inline]
    pub fn substitution(&self, a: u8, b: u8) -> Score {
        if a == b {
            Score::from(self.match_score)
        } else {
            Score::from(self.mismatch_score)
        }
    }

    /// Score of one gap column.
    #[inline]
    pub fn gap(&self) -> Score {
        Score::from(self.gap_penalty)
    }

    /// Cost of a run of `len` gap columns along a grid border.
    #[inline]
    pub fn gap_run(&self, len: usize) -> Score {
        len as Score * self.gap()
    }
}

impl Default for ScoringModel {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_MATCH,
            Self::DEFAULT_MISMATCH,
            Self::DEFAULT_GAP,
        )
    }
}
