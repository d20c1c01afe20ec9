#![cfg(feature = "parallel")]

use pairalign::{batch::align_pairs, AlignerBuilder, AlignmentMode, ScoringModel};
use proptest::prelude::*;

proptest! {
    #[test]
    fn batch_matches_one_by_one(
        pairs in proptest::collection::vec(("[ACGT]{0,16}", "[ACGT]{0,16}"), 0..24),
        local in any::<bool>(),
    ) {
        let mode = if local { AlignmentMode::Local } else { AlignmentMode::Global };
        let aligner = AlignerBuilder::new()
            .mode(mode)
            .scoring(ScoringModel::new(2, -1, -2))
            .build();
        let batched = align_pairs(&aligner, &pairs);
        prop_assert_eq!(batched.len(), pairs.len());
        for ((s, t), r) in pairs.iter().zip(&batched) {
            prop_assert_eq!(r, &aligner.align(s.as_bytes(), t.as_bytes()));
        }
    }
}

#[test]
fn many_threads_many_scoring_models() {
    let pairs: Vec<(String, String)> = (0..64)
        .map(|k| ("ACGT".repeat(k % 7 + 1), "AGT".repeat(k % 5 + 1)))
        .collect();
    for gap in [-3, -1, 0] {
        let aligner = AlignerBuilder::new().gap_penalty(gap).build();
        let batched = align_pairs(&aligner, &pairs);
        for ((s, t), r) in pairs.iter().zip(&batched) {
            assert_eq!(*r, aligner.align(s.as_bytes(), t.as_bytes()));
        }
    }
}
