//! Error types for unwrap-images operations.

use thiserror::Error;

/// Errors raised around the unwrap pass: reading input and picking a format.
///
/// The pass itself cannot fail.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

pub type Result<T> = std::result::Result<T, Error>;
