//! Error type shared by the public API and the command-line front end.
//!
//! The alignment algorithms themselves never fail on byte-slice input; errors
//! only arise when validating caller-supplied aligned pairs or parsing
//! configuration values.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlignError {
    #[error("unknown alignment mode '{0}' (expected 'global' or 'local')")]
    UnknownMode(String),
    #[error("aligned rows differ in length: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },
    #[error("column {column} pairs a gap with a gap")]
    GapColumn { column: usize },
    #[error("{0} is empty")]
    EmptySequence(&'static str),
}

#[cfg(test)]
mod tests {
    use super::AlignError;

    #[test]
    fn messages_name_the_offending_value() {
        let err = AlignError::UnknownMode("semi".into());
        assert!(err.to_string().contains("'semi'"));
        let err = AlignError::LengthMismatch { left: 3, right: 4 };
        assert_eq!(err.to_string(), "aligned rows differ in length: 3 vs 4");
        assert_eq!(
            AlignError::EmptySequence("sequence 1").to_string(),
            "sequence 1 is empty"
        );
    }
}
