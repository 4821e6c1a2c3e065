//! Error types for I/O operations.
//!
//! Provides unified error handling for stack file operations.

use std::io;
use thiserror::Error;

/// I/O operation error.
#[derive(Debug, Error)]
pub enum IoError {
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Unsupported format.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Invalid or corrupted file.
    #[error("invalid file: {0}")]
    InvalidFile(String),

    /// Encoding error.
    #[error("encode error: {0}")]
    EncodeError(String),

    /// The file declares an element type restack cannot hold.
    #[error("unsupported dtype: {0}")]
    UnsupportedDtype(String),

    /// The file declares an unsupported npy format version.
    #[error("unsupported npy version: {major}.{minor}")]
    UnsupportedVersion {
        /// Major version byte.
        major: u8,
        /// Minor version byte.
        minor: u8,
    },

    /// The file stores Fortran-ordered data, which axis-0 slicing cannot use.
    #[error("fortran-ordered npy files are not supported")]
    FortranOrder,

    /// The data block does not hold the number of bytes the header promises.
    #[error("data length mismatch: header promises {expected} bytes, file holds {got}")]
    DataLength {
        /// Bytes the header requires.
        expected: usize,
        /// Bytes actually present.
        got: usize,
    },
}

/// Result type for I/O operations.
pub type IoResult<T> = Result<T, IoError>;
