//! Aligning many independent sequence pairs.
//!
//! Cells within one grid depend on their left, upper and upper-left
//! neighbours, so a single fill is run sequentially. Separate pairs share
//! nothing, and with the `parallel` feature they are spread over the rayon
//! thread pool. Every call allocates its own grid.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::aligner::{AlignmentResult, PairAligner};

/// Align each `(seq1, seq2)` pair with `aligner`; results keep input order.
pub fn align_pairs<S>(aligner: &PairAligner, pairs: &[(S, S)]) -> Vec<AlignmentResult>
where
    S: AsRef<[u8]> + Sync,
{
    #[cfg(feature = "tracing")]
    let span = tracing::trace_span!("align_pairs", mode = %aligner.mode(), pairs = pairs.len());
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    #[cfg(feature = "parallel")]
    let iter = pairs.par_iter();
    #[cfg(not(feature = "parallel"))]
    let iter = pairs.iter();

    iter.map(|(s, t)| aligner.align(s.as_ref(), t.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aligner::AlignmentMode;
    use crate::scoring::ScoringModel;

    #[test]
    fn preserves_input_order() {
        let aligner = PairAligner::new(AlignmentMode::Global, ScoringModel::default());
        let pairs = vec![
            (b"AGCT".to_vec(), b"AGCT".to_vec()),
            (Vec::new(), b"ACGT".to_vec()),
            (b"GATTACA".to_vec(), b"GCATGCU".to_vec()),
        ];
        let results = align_pairs(&aligner, &pairs);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].score, 8);
        assert_eq!(results[1].score, -4);
        for ((s, t), r) in pairs.iter().zip(&results) {
            assert_eq!(*r, aligner.align(s, t));
        }
    }

    #[test]
    fn empty_batch() {
        let pairs: Vec<(&[u8], &[u8])> = Vec::new();
        assert!(align_pairs(&PairAligner::default(), &pairs).is_empty());
    }
}
