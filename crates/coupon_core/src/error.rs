use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CombineError {
    #[error("Invalid combine method: {0} (expected one of simple, simple-random, simple-max, only-max)")]
    InvalidMethod(String),

    #[error("Malformed input: outcome {row} has {found} values, expected {expected}")]
    MalformedInput {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Coverage mismatch: {missing} outcomes missing, {fabricated} outcomes fabricated")]
    CoverageMismatch { missing: usize, fabricated: usize },
}

pub type Result<T> = std::result::Result<T, CombineError>;
