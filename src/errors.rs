use thiserror::Error;

/// Error type for benchdiff operations.
#[derive(Debug, Error)]
pub enum BenchDiffError {
    #[error("file not found: {0}")]
    NotFound(String),
    #[error("io error: {0}")]
    IoError(String),
    #[error("parse error: {0}")]
    ParseError(String),
}

impl BenchDiffError {
    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        BenchDiffError::NotFound(msg.into())
    }

    pub fn io<T: Into<String>>(msg: T) -> Self {
        BenchDiffError::IoError(msg.into())
    }

    pub fn parse<T: Into<String>>(msg: T) -> Self {
        BenchDiffError::ParseError(msg.into())
    }
}
