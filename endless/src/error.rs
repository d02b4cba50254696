//! Error types for endless buffer operations.

use std::io;

use thiserror::Error;

/// Errors returned by [`Endless`](crate::Endless) and [`Reader`](crate::Reader).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EndlessError {
    /// The reader position has been overwritten by the writer.
    ///
    /// Reading again from the same position fails identically; the caller
    /// has to [`resync`](crate::Reader::resync) or drop the reader.
    #[error("endless: reader fell behind (position {position}, buffer start {start})")]
    ReaderFellBehind { position: u64, start: u64 },

    /// A buffer was requested with a capacity of zero.
    #[error("endless: invalid capacity {0}, must be greater than 0")]
    InvalidCapacity(usize),
}

/// Result type for endless buffer operations.
pub type Result<T> = std::result::Result<T, EndlessError>;

impl From<EndlessError> for io::Error {
    fn from(err: EndlessError) -> Self {
        match err {
            EndlessError::InvalidCapacity(_) => io::Error::new(io::ErrorKind::InvalidInput, err),
            EndlessError::ReaderFellBehind { .. } => io::Error::other(err),
        }
    }
}
