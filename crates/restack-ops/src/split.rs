//! Contiguous substack partitioning.
//!
//! Splits a stack into equal-length runs of consecutive frames, e.g. a
//! 90-frame time series into 3 substacks of 30 frames each.

use restack_core::Stack;
use tracing::{debug, trace};

use crate::{OpsError, OpsResult};

/// Partitions a stack into `num_substacks` equal contiguous substacks along
/// axis 0.
///
/// Substack `i` covers frames `[i * seg, (i + 1) * seg)` where
/// `seg = frames / num_substacks`, so the substacks tile the original frame
/// range exactly once, in order. Substack `i` is named `"<name> Sub<i>"`.
///
/// Segment boundaries use exact integer division; divisibility is checked
/// first, so no frame is ever dropped or duplicated at a boundary.
///
/// # Errors
///
/// - [`OpsError::InvalidParameter`] if `num_substacks` is zero.
/// - [`OpsError::NotDivisible`] if the frame count is not a multiple of
///   `num_substacks`.
///
/// # Example
///
/// ```rust
/// use restack_core::Stack;
/// use restack_ops::split;
///
/// let stack = Stack::from_u8("series", vec![6, 1], vec![0, 1, 2, 3, 4, 5])?;
/// let parts = split(&stack, 3)?;
///
/// assert_eq!(parts.len(), 3);
/// assert_eq!(parts[1].name(), "series Sub1");
/// assert_eq!(parts[1].shape(), &[2, 1]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn split(stack: &Stack, num_substacks: usize) -> OpsResult<Vec<Stack>> {
    if num_substacks == 0 {
        return Err(OpsError::InvalidParameter(
            "number of substacks must be positive".into(),
        ));
    }

    let frames = stack.frames();
    if frames % num_substacks != 0 {
        return Err(OpsError::NotDivisible {
            frames,
            requested: num_substacks,
        });
    }

    let seg = frames / num_substacks;
    trace!(frames, num_substacks, seg, "split");
    debug!(name = stack.name(), num_substacks, "Splitting stack");

    let mut substacks = Vec::with_capacity(num_substacks);
    for i in 0..num_substacks {
        let label = format!("{} Sub{}", stack.name(), i);
        substacks.push(stack.frame_range(i * seg, (i + 1) * seg).with_name(label));
    }

    Ok(substacks)
}
