//! Error types for restack-core operations.
//!
//! Construction of a [`Stack`](crate::Stack) is the only fallible surface in
//! this crate; everything else operates on an already-validated container.

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when constructing a stack.
#[derive(Debug, Error)]
pub enum Error {
    /// Element count does not match the product of the shape.
    #[error("shape {shape:?} requires {expected} elements, got {got}")]
    LengthMismatch {
        /// Requested shape.
        shape: Vec<usize>,
        /// Elements the shape requires.
        expected: usize,
        /// Elements actually provided.
        got: usize,
    },

    /// The shape is empty, so there is no leading axis to slice along.
    #[error("stack shape must have at least one axis")]
    ScalarStack,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_mismatch_message() {
        let err = Error::LengthMismatch {
            shape: vec![2, 3],
            expected: 6,
            got: 5,
        };
        let msg = err.to_string();
        assert!(msg.contains("[2, 3]"));
        assert!(msg.contains('6'));
        assert!(msg.contains('5'));
    }
}
