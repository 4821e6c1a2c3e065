//! Error types for stack operations.

use restack_core::Dtype;
use thiserror::Error;

/// Error type for stack operations.
#[derive(Error, Debug)]
pub enum OpsError {
    /// Invalid parameter value (zero channel or substack count).
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Inputs hold different element types.
    #[error("inputs must have the same dtype, but are {a} and {b}")]
    DtypeMismatch {
        /// Dtype of the first input.
        a: Dtype,
        /// Dtype of the second input.
        b: Dtype,
    },

    /// Inputs have a different number of axes.
    #[error("inputs must have the same dimensionality, but are {a:?} and {b:?}")]
    RankMismatch {
        /// Shape of the first input.
        a: Vec<usize>,
        /// Shape of the second input.
        b: Vec<usize>,
    },

    /// Inputs differ on an axis other than the first.
    #[error("inputs must have the same shape except the first axis, but are {a:?} and {b:?}")]
    ShapeMismatch {
        /// Shape of the first input.
        a: Vec<usize>,
        /// Shape of the second input.
        b: Vec<usize>,
    },

    /// Inputs hold a different number of frames.
    #[error("inputs must have the same number of frames, but have {a} and {b}")]
    FrameCountMismatch {
        /// Frame count of the first input.
        a: usize,
        /// Frame count of the second input.
        b: usize,
    },

    /// The frame count is not divisible by the requested part count.
    #[error("{requested} must be a divisor of the frame count {frames}")]
    NotDivisible {
        /// Frames in the input stack.
        frames: usize,
        /// Requested number of parts.
        requested: usize,
    },
}

/// Result type for stack operations.
pub type OpsResult<T> = Result<T, OpsError>;
