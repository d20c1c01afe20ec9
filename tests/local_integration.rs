use pairalign::{AlignerBuilder, AlignmentMode, LocalAligner, ScoringModel};

#[test]
fn acacacta_segment() {
    let result = LocalAligner::new(ScoringModel::new(2, -1, -1)).align(b"ACACACTA", b"AGCACACA");
    assert_eq!(result.score, 12);
    assert_eq!(result.aligned_seq1, b"A-CACACTA");
    assert_eq!(result.aligned_seq2, b"AGCACAC-A");
    assert!((result.similarity_percentage - 700.0 / 9.0).abs() < 1e-9);
}

#[test]
fn no_shared_symbol_gives_empty_alignment() {
    let result = LocalAligner::new(ScoringModel::new(2, -1, -1)).align(b"AAAA", b"CCCGGG");
    assert_eq!(result.score, 0);
    assert!(result.aligned_seq1.is_empty());
    assert!(result.aligned_seq2.is_empty());
    assert_eq!(result.similarity_percentage, 0.0);
}

#[test]
fn empty_input_gives_empty_alignment() {
    let aligner = LocalAligner::default();
    for (s, t) in [(&b""[..], &b"ACGT"[..]), (&b"ACGT"[..], &b""[..])] {
        let result = aligner.align(s, t);
        assert_eq!(result.score, 0);
        assert!(result.is_empty());
        assert_eq!(result.similarity_percentage, 0.0);
    }
}

#[test]
fn huge_match_score_does_not_overflow() {
    let result = LocalAligner::new(ScoringModel::new(1_000_000_000, -1, -1)).align(b"AAA", b"AAA");
    assert_eq!(result.score, 3_000_000_000);
    assert_eq!(result.aligned_seq1, b"AAA");

    let result = LocalAligner::new(ScoringModel::new(i32::MAX, i32::MIN, i32::MIN))
        .align(b"ACGTACGT", b"ACGTACGT");
    assert_eq!(result.score, 8 * i64::from(i32::MAX));
}

#[test]
fn segment_is_not_drained_to_full_length() {
    let result = LocalAligner::new(ScoringModel::unit()).align(b"GATTACA", b"GCATGCU");
    assert_eq!(result.score, 2);
    assert_eq!(result.aligned_seq1, b"AT");
    assert_eq!(result.aligned_seq2, b"AT");
}

#[test]
fn first_maximal_cell_is_reported() {
    // "AC" occurs twice in seq2; the earlier occurrence is reached first in
    // row-major order and wins the tie.
    let aligner = AlignerBuilder::new()
        .mode(AlignmentMode::Local)
        .match_score(3)
        .mismatch_score(-3)
        .gap_penalty(-3)
        .build();
    let result = aligner.align(b"AC", b"ACTTAC");
    assert_eq!(result.score, 6);
    assert_eq!(result.aligned_seq1, b"AC");
    let filled = LocalAligner::new(*aligner.scoring()).fill(b"AC", b"ACTTAC");
    assert_eq!(filled.start, (2, 2));
}
