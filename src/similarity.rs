//! Percent identity over an aligned pair.
//!
//! The denominator is the full alignment length, gap columns included, so a
//! gap-heavy alignment scores lower here even though gaps never count as
//! mismatches in the alignment score.

use crate::pair::GAP;

/// Columns where both rows hold the same non-gap symbol.
pub fn identity_columns(top: &[u8], bottom: &[u8]) -> usize {
    top.iter()
        .zip(bottom)
        .filter(|(&a, &b)| a == b && a != GAP)
        .count()
}

/// Columns with a gap in either row.
pub fn gap_columns(top: &[u8], bottom: &[u8]) -> usize {
    top.iter()
        .zip(bottom)
        .filter(|(&a, &b)| a == GAP || b == GAP)
        .count()
}

/// `100 * identity_columns / len`, or `0.0` for an empty alignment.
///
/// Both rows are expected to have the same length; the length of `top` is
/// used as the denominator.
pub fn similarity_percentage(top: &[u8], bottom: &[u8]) -> f64 {
    let len = top.len();
    if len == 0 {
        return 0.0;
    }
    100.0 * identity_columns(top, bottom) as f64 / len as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_rows_are_fully_similar() {
        assert_eq!(similarity_percentage(b"AGCT", b"AGCT"), 100.0);
    }

    #[test]
    fn gap_columns_count_against_identity() {
        // 7 identities over 9 columns.
        let p = similarity_percentage(b"A-CACACTA", b"AGCACAC-A");
        assert!((p - 700.0 / 9.0).abs() < 1e-9);
    }

    #[test]
    fn matching_gaps_are_not_identities() {
        assert_eq!(identity_columns(b"A-", b"A-"), 1);
    }

    #[test]
    fn empty_alignment_is_zero() {
        assert_eq!(similarity_percentage(b"", b""), 0.0);
        assert_eq!(similarity_percentage(b"----", b"ACGT"), 0.0);
    }
}
