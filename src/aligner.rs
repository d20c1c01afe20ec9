//! Alignment drivers: fill, locate the start cell, walk back, score identity.
//!
//! [`Aligner`] is generic over the regime and is usually named through one of
//! its aliases, [`GlobalAligner`] or [`LocalAligner`]. [`PairAligner`] picks
//! the regime at runtime from an [`AlignmentMode`].
//!
//! ```
//! use pairalign::{GlobalAligner, ScoringModel};
//!
//! let aligner = GlobalAligner::new(ScoringModel::new(2, -1, -1));
//! let result = aligner.align(b"AGCT", b"AGCT");
//! assert_eq!(result.score, 8);
//! assert_eq!(result.aligned_seq1, b"AGCT");
//! assert_eq!(result.similarity_percentage, 100.0);
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use crate::error::AlignError;
use crate::grid::{self, FilledGrid};
use crate::pair::AlignedPair;
use crate::scoring::{Score, ScoringModel};
use crate::similarity;
use crate::traceback;
use crate::traits::{DpMode, Global, Local};

/// Runtime selector between the two regimes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum AlignmentMode {
    #[default]
    Global,
    Local,
}

impl AlignmentMode {
    /// Human-readable label used in rendered reports.
    pub fn label(&self) -> &'static str {
        match self {
            AlignmentMode::Global => "Global Alignment",
            AlignmentMode::Local => "Local Alignment",
        }
    }
}

impl fmt::Display for AlignmentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AlignmentMode::Global => "global",
            AlignmentMode::Local => "local",
        })
    }
}

impl FromStr for AlignmentMode {
    type Err = AlignError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "global" | "nw" => Ok(AlignmentMode::Global),
            "local" | "sw" => Ok(AlignmentMode::Local),
            _ => Err(AlignError::UnknownMode(value.to_string())),
        }
    }
}

/// Outcome of one alignment call.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignmentResult {
    pub mode: AlignmentMode,
    pub score: Score,
    pub aligned_seq1: Vec<u8>,
    pub aligned_seq2: Vec<u8>,
    /// Percent identity over all alignment columns, in `[0, 100]`.
    pub similarity_percentage: f64,
}

impl AlignmentResult {
    fn from_pair(mode: AlignmentMode, score: Score, pair: AlignedPair) -> Self {
        let similarity_percentage = pair.similarity_percentage();
        let (aligned_seq1, aligned_seq2) = pair.into_rows();
        Self {
            mode,
            score,
            aligned_seq1,
            aligned_seq2,
            similarity_percentage,
        }
    }

    /// Number of alignment columns.
    pub fn len(&self) -> usize {
        self.aligned_seq1.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aligned_seq1.is_empty()
    }

    pub fn identity_columns(&self) -> usize {
        similarity::identity_columns(&self.aligned_seq1, &self.aligned_seq2)
    }

    pub fn gap_columns(&self) -> usize {
        similarity::gap_columns(&self.aligned_seq1, &self.aligned_seq2)
    }
}

impl fmt::Display for AlignmentResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Alignment Type: {}", self.mode.label())?;
        writeln!(f, "Alignment Score: {}", self.score)?;
        writeln!(f, "Similarity: {:.2}%", self.similarity_percentage)?;
        writeln!(f)?;
        writeln!(
            f,
            "Aligned Sequence 1: {}",
            String::from_utf8_lossy(&self.aligned_seq1)
        )?;
        write!(
            f,
            "Aligned Sequence 2: {}",
            String::from_utf8_lossy(&self.aligned_seq2)
        )
    }
}

/// Stateless alignment pipeline for regime `M`.
pub struct Aligner<M: DpMode> {
    scoring: ScoringModel,
    _mode: PhantomData<M>,
}

/// Needleman-Wunsch: both sequences consumed end to end.
pub type GlobalAligner = Aligner<Global>;

/// Smith-Waterman: best-scoring contiguous segment pair.
pub type LocalAligner = Aligner<Local>;

impl<M: DpMode> Aligner<M> {
    pub fn new(scoring: ScoringModel) -> Self {
        Self {
            scoring,
            _mode: PhantomData,
        }
    }

    pub fn scoring(&self) -> &ScoringModel {
        &self.scoring
    }

    /// Fill the grid and locate the traceback start without walking back.
    pub fn fill(&self, seq1: &[u8], seq2: &[u8]) -> FilledGrid {
        grid::fill::<M>(seq1, seq2, &self.scoring)
    }

    /// Align `seq1` against `seq2`.
    ///
    /// Either sequence may be empty. The grid is allocated for this call only
    /// and dropped before returning.
    pub fn align(&self, seq1: &[u8], seq2: &[u8]) -> AlignmentResult {
        let filled = self.fill(seq1, seq2);
        #[cfg(feature = "tracing")]
        tracing::debug!(
            mode = %M::KIND,
            start_i = filled.start.0,
            start_j = filled.start.1,
            score = filled.score(),
            "traceback start located"
        );
        let pair = traceback::walk::<M>(&filled.grid, seq1, seq2, &self.scoring, filled.start);
        AlignmentResult::from_pair(M::KIND, filled.score(), pair)
    }
}

impl<M: DpMode> Default for Aligner<M> {
    fn default() -> Self {
        Self::new(ScoringModel::default())
    }
}

impl<M: DpMode> Clone for Aligner<M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M: DpMode> Copy for Aligner<M> {}

impl<M: DpMode> fmt::Debug for Aligner<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Aligner")
            .field("mode", &M::KIND)
            .field("scoring", &self.scoring)
            .finish()
    }
}

/// Aligner whose regime is chosen at runtime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PairAligner {
    mode: AlignmentMode,
    scoring: ScoringModel,
}

impl PairAligner {
    pub fn new(mode: AlignmentMode, scoring: ScoringModel) -> Self {
        Self { mode, scoring }
    }

    pub fn mode(&self) -> AlignmentMode {
        self.mode
    }

    pub fn scoring(&self) -> &ScoringModel {
        &self.scoring
    }

    pub fn align(&self, seq1: &[u8], seq2: &[u8]) -> AlignmentResult {
        align(self.mode, seq1, seq2, &self.scoring)
    }
}

/// One-shot alignment under `mode`.
pub fn align(
    mode: AlignmentMode,
    seq1: &[u8],
    seq2: &[u8],
    scoring: &ScoringModel,
) -> AlignmentResult {
    match mode {
        AlignmentMode::Global => GlobalAligner::new(*scoring).align(seq1, seq2),
        AlignmentMode::Local => LocalAligner::new(*scoring).align(seq1, seq2),
    }
}
