use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CageError {
    /// Failed to create or write a report file.
    #[error("io error writing {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Failed to write a report to standard output.
    #[error("io error writing to stdout: {0}")]
    Stdout(#[source] std::io::Error),
    /// Parts that do not form a descending sequence of positive integers.
    #[error("invalid partition {0:?}: parts must be positive and non-increasing")]
    InvalidPartition(Vec<u32>),
}

pub type Result<T> = std::result::Result<T, CageError>;
