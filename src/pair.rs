//! Two gapped rows of equal length.

use std::borrow::Cow;

use crate::error::AlignError;
use crate::similarity;

/// Gap marker placed opposite a consumed symbol.
pub const GAP: u8 = b'-';

/// Aligned rows for `seq1` (top) and `seq2` (bottom).
///
/// Invariants: both rows have the same length and no column holds a gap in
/// both rows.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct AlignedPair {
    top: Vec<u8>,
    bottom: Vec<u8>,
}

impl AlignedPair {
    /// Validate and wrap two rows.
    pub fn new(top: Vec<u8>, bottom: Vec<u8>) -> Result<Self, AlignError> {
        if top.len() != bottom.len() {
            return Err(AlignError::LengthMismatch {
                left: top.len(),
                right: bottom.len(),
            });
        }
        if let Some(column) = top
            .iter()
            .zip(&bottom)
            .position(|(&a, &b)| a == GAP && b == GAP)
        {
            return Err(AlignError::GapColumn { column });
        }
        Ok(Self { top, bottom })
    }

    /// Wrap rows produced by the traceback, which upholds the invariants.
    pub(crate) fn from_traceback(top: Vec<u8>, bottom: Vec<u8>) -> Self {
        debug_assert_eq!(top.len(), bottom.len());
        Self { top, bottom }
    }

    #[inline]
    pub fn top(&self) -> &[u8] {
        &self.top
    }

    #[inline]
    pub fn bottom(&self) -> &[u8] {
        &self.bottom
    }

    /// Number of alignment columns.
    #[inline]
    pub fn len(&self) -> usize {
        self.top.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.top.is_empty()
    }

    /// Non-gap symbol counts of the top and bottom rows.
    pub fn residues(&self) -> (usize, usize) {
        let count = |row: &[u8]| row.iter().filter(|&&c| c != GAP).count();
        (count(&self.top), count(&self.bottom))
    }

    /// Columns holding the same non-gap symbol in both rows.
    pub fn identity_columns(&self) -> usize {
        similarity::identity_columns(&self.top, &self.bottom)
    }

    /// Columns with a gap in either row.
    pub fn gap_columns(&self) -> usize {
        similarity::gap_columns(&self.top, &self.bottom)
    }

    /// Percent identity over all columns, gap columns included.
    pub fn similarity_percentage(&self) -> f64 {
        similarity::similarity_percentage(&self.top, &self.bottom)
    }

    /// Rows rendered as text; non-UTF-8 bytes are replaced.
    pub fn to_strings(&self) -> (Cow<'_, str>, Cow<'_, str>) {
        (
            String::from_utf8_lossy(&self.top),
            String::from_utf8_lossy(&self.bottom),
        )
    }

    pub fn into_rows(self) -> (Vec<u8>, Vec<u8>) {
        (self.top, self.bottom)
    }
}
