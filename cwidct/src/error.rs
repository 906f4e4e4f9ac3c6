use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("block must hold {expected} samples, got {got}")]
    BlockLength { expected: usize, got: usize },

    #[error("packed block must hold {expected} words per half, got {got}")]
    WordCount { expected: usize, got: usize },

    #[error("line {line}: invalid sample {token:?}")]
    InvalidSample { line: usize, token: String },

    #[error("line {line}: sample {value} does not fit in 16 bits")]
    SampleOutOfRange { line: usize, value: i64 },

    #[error("input ends with an incomplete block of {got} samples")]
    IncompleteBlock { got: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
