use crate::aligner::{AlignmentMode, PairAligner};
use crate::scoring::ScoringModel;

/// Incremental configuration for a [`PairAligner`].
///
/// Parameters left unset fall back to [`ScoringModel::default`] and
/// [`AlignmentMode::Global`].
#[derive(Debug, Clone, Default)]
pub struct AlignerBuilder {
    mode: Option<AlignmentMode>,
    base: Option<ScoringModel>,
    match_score: Option<i32>,
    mismatch_score: Option<i32>,
    gap_penalty: Option<i32>,
}

impl AlignerBuilder {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn mode(mut self, mode: AlignmentMode) -> Self {
        self.mode = Some(mode);
        self
    }
    /// Start from an existing model; individual setters still override it.
    pub fn scoring(mut self, scoring: ScoringModel) -> Self {
        self.base = Some(scoring);
        self
    }
    pub fn match_score(mut self, value: i32) -> Self {
        self.match_score = Some(value);
        self
    }
    pub fn mismatch_score(mut self, value: i32) -> Self {
        self.mismatch_score = Some(value);
        self
    }
    pub fn gap_penalty(mut self, value: i32) -> Self {
        self.gap_penalty = Some(value);
        self
    }
    pub fn build(self) -> PairAligner {
        let base = self.base.unwrap_or_default();
        let scoring = ScoringModel::new(
            self.match_score.unwrap_or(base.match_score()),
            self.mismatch_score.unwrap_or(base.mismatch_score()),
            self.gap_penalty.unwrap_or(base.gap_penalty()),
        );
        PairAligner::new(self.mode.unwrap_or_default(), scoring)
    }
}
