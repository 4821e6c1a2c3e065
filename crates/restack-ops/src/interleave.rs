//! Pairwise frame interleaving.
//!
//! The inverse of two-channel deinterleaving: frames of the two inputs are
//! woven together along axis 0, first input on even positions, second on odd.

use restack_core::Stack;
use tracing::{debug, trace};

use crate::{OpsError, OpsResult};

/// Merges two stacks by alternating their frames along axis 0.
///
/// The output holds `a.frames() + b.frames()` frames: even positions take
/// frames of `a` in order, odd positions take frames of `b` in order. The
/// result is named `"Interleaved <a> and <b>"`.
///
/// Preconditions are checked in order, each failing with its own error:
///
/// 1. element types match — [`OpsError::DtypeMismatch`];
/// 2. dimensionality matches — [`OpsError::RankMismatch`];
/// 3. all axes but the first match — [`OpsError::ShapeMismatch`];
/// 4. frame counts match — [`OpsError::FrameCountMismatch`]. Alternating
///    assignment is only well-defined when both inputs contribute the same
///    number of frames.
///
/// # Example
///
/// ```rust
/// use restack_core::Stack;
/// use restack_ops::interleave;
///
/// let a = Stack::from_u8("even", vec![2, 1], vec![0, 2])?;
/// let b = Stack::from_u8("odd", vec![2, 1], vec![1, 3])?;
///
/// let merged = interleave(&a, &b)?;
/// assert_eq!(merged.name(), "Interleaved even and odd");
/// assert_eq!(merged.shape(), &[4, 1]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn interleave(a: &Stack, b: &Stack) -> OpsResult<Stack> {
    if a.dtype() != b.dtype() {
        return Err(OpsError::DtypeMismatch {
            a: a.dtype(),
            b: b.dtype(),
        });
    }

    if a.ndim() != b.ndim() {
        return Err(OpsError::RankMismatch {
            a: a.shape().to_vec(),
            b: b.shape().to_vec(),
        });
    }

    if a.trailing_shape() != b.trailing_shape() {
        return Err(OpsError::ShapeMismatch {
            a: a.shape().to_vec(),
            b: b.shape().to_vec(),
        });
    }

    if a.frames() != b.frames() {
        return Err(OpsError::FrameCountMismatch {
            a: a.frames(),
            b: b.frames(),
        });
    }

    trace!(frames = a.frames(), frame_len = a.frame_len(), "interleave");
    debug!(a = a.name(), b = b.name(), "Interleaving stacks");

    let samples = a
        .samples()
        .interleave_frames(b.samples(), a.frame_len())
        .ok_or(OpsError::DtypeMismatch {
            a: a.dtype(),
            b: b.dtype(),
        })?;

    let mut shape = a.shape().to_vec();
    shape[0] = a.frames() + b.frames();
    let name = format!("Interleaved {} and {}", a.name(), b.name());

    Stack::new(name, shape, samples).map_err(|e| OpsError::InvalidParameter(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use restack_core::Samples;

    fn filled(name: &str, shape: Vec<usize>, offset: usize) -> Stack {
        let n: usize = shape.iter().product();
        Stack::from_f32(name, shape, (0..n).map(|v| (v + offset) as f32).collect()).unwrap()
    }

    #[test]
    fn test_interleave_alternates_frames() {
        // Two (3, 4, 4) stacks -> (6, 4, 4), rows A0 B0 A1 B1 A2 B2
        let a = filled("a", vec![3, 4, 4], 0);
        let b = filled("b", vec![3, 4, 4], 1000);
        let merged = interleave(&a, &b).unwrap();

        assert_eq!(merged.shape(), &[6, 4, 4]);
        let expected: Vec<f32> = (0..3)
            .flat_map(|f| {
                let a_frame = (f * 16..(f + 1) * 16).map(|v| v as f32);
                let b_frame = (f * 16..(f + 1) * 16).map(|v| (v + 1000) as f32);
                a_frame.chain(b_frame).collect::<Vec<f32>>()
            })
            .collect();
        assert_eq!(merged.samples(), &Samples::F32(expected));
    }

    #[test]
    fn test_interleave_label() {
        let a = filled("left", vec![2, 2], 0);
        let b = filled("right", vec![2, 2], 0);
        let merged = interleave(&a, &b).unwrap();
        assert_eq!(merged.name(), "Interleaved left and right");
    }

    #[test]
    fn test_interleave_dtype_mismatch() {
        let a = Stack::from_f32("a", vec![2, 2], vec![0.0; 4]).unwrap();
        let b = Stack::from_u8("b", vec![2, 2], vec![0; 4]).unwrap();
        let err = interleave(&a, &b).unwrap_err();
        assert!(matches!(err, OpsError::DtypeMismatch { .. }));
        assert!(err.to_string().contains("f32"));
        assert!(err.to_string().contains("u8"));
    }

    #[test]
    fn test_interleave_rank_mismatch() {
        let a = filled("a", vec![2, 2], 0);
        let b = filled("b", vec![2, 2, 1], 0);
        assert!(matches!(
            interleave(&a, &b),
            Err(OpsError::RankMismatch { .. })
        ));
    }

    #[test]
    fn test_interleave_shape_mismatch() {
        let a = filled("a", vec![2, 4], 0);
        let b = filled("b", vec![2, 3], 0);
        let err = interleave(&a, &b).unwrap_err();
        assert!(matches!(err, OpsError::ShapeMismatch { .. }));
        assert!(err.to_string().contains("[2, 4]"));
        assert!(err.to_string().contains("[2, 3]"));
    }

    #[test]
    fn test_interleave_frame_count_mismatch() {
        let a = filled("a", vec![3, 2], 0);
        let b = filled("b", vec![2, 2], 0);
        assert!(matches!(
            interleave(&a, &b),
            Err(OpsError::FrameCountMismatch { a: 3, b: 2 })
        ));
    }

    #[test]
    fn test_interleave_zero_sized_trailing_axis() {
        // (3, 0) stacks hold no elements but are valid; the merge is the
        // empty (6, 0) stack, not a crash.
        let a = Stack::from_f32("a", vec![3, 0], Vec::new()).unwrap();
        let b = Stack::from_f32("b", vec![3, 0], Vec::new()).unwrap();
        let merged = interleave(&a, &b).unwrap();
        assert_eq!(merged.shape(), &[6, 0]);
        assert!(merged.samples().is_empty());
    }

    #[test]
    fn test_interleave_one_dimensional() {
        let a = Stack::from_u16("a", vec![2], vec![0, 2]).unwrap();
        let b = Stack::from_u16("b", vec![2], vec![1, 3]).unwrap();
        let merged = interleave(&a, &b).unwrap();
        assert_eq!(merged.samples(), &Samples::U16(vec![0, 1, 2, 3]));
    }
}
