//! Pairwise sequence alignment by dynamic programming.
//!
//! This crate computes optimal global (Needleman-Wunsch) and local
//! (Smith-Waterman) alignments of two byte sequences under a linear scoring
//! scheme: a match score, a mismatch score and a per-column gap penalty.
//!
//! ## Core idea
//! 1. Fill an (m+1)×(n+1) grid row by row from the three-way recurrence
//!    (diagonal, gap in `seq2`, gap in `seq1`).
//! 2. Pick the traceback start: the bottom-right corner for global alignment,
//!    the first maximal cell for local alignment.
//! 3. Walk back through the grid, preferring diagonal moves, then gaps in
//!    `seq2`, then gaps in `seq1`, and emit the two gapped rows.
//! 4. Report the score, the rows, and percent identity over the alignment.
//!
//! Both regimes share one recurrence and one traceback; they differ only in
//! the [`DpMode`] they are instantiated with.
//!
//! ## Quick start
//! ```
//! use pairalign::{align, AlignmentMode, ScoringModel};
//!
//! let result = align(
//!     AlignmentMode::Global,
//!     b"GATTACA",
//!     b"GCATGCU",
//!     &ScoringModel::new(1, -1, -1),
//! );
//! assert_eq!(result.score, 0);
//! assert_eq!(result.aligned_seq1.len(), result.aligned_seq2.len());
//! println!("{result}");
//! ```
//!
//! Time and space are O(m·n) per call. Calls share no state, so independent
//! pairs may be aligned from many threads at once; see [`batch`].

pub mod aligner;
pub mod batch;
pub mod builder;
pub mod error;
pub mod grid;
pub mod pair;
pub mod scoring;
pub mod similarity;
pub mod traceback;
pub mod traits;

pub use crate::aligner::{
    align, Aligner, AlignmentMode, AlignmentResult, GlobalAligner, LocalAligner, PairAligner,
};
pub use crate::builder::AlignerBuilder;
pub use crate::error::AlignError;
pub use crate::pair::{AlignedPair, GAP};
pub use crate::scoring::{Score, ScoringModel};
pub use crate::traits::{DpMode, Global, Local};
