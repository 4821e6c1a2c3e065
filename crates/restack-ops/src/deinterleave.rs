//! Round-robin frame distribution.
//!
//! Deinterleaving undoes channel-interleaved acquisition: a stack recorded as
//! `C0 C1 C0 C1 ...` along axis 0 becomes one contiguous stack per channel.
//! This matches the classic ImageJ "Deinterleave" behavior applied to the
//! leading axis.

use restack_core::Stack;
use tracing::{debug, trace};

use crate::{OpsError, OpsResult};

/// Splits a stack into `num_channels` stacks by frame position modulo
/// `num_channels`.
///
/// Output `c` holds frames `c, c + num_channels, c + 2 * num_channels, ...`
/// in their original order, with trailing axes unchanged, and is named
/// `"<name> C<c>"`. Outputs are returned in channel order.
///
/// # Errors
///
/// - [`OpsError::InvalidParameter`] if `num_channels` is zero.
/// - [`OpsError::NotDivisible`] if the frame count is not a multiple of
///   `num_channels`. A ragged split would silently drop frames from some
///   channels, so it is rejected outright.
///
/// # Example
///
/// ```rust
/// use restack_core::Stack;
/// use restack_ops::deinterleave;
///
/// let stack = Stack::from_u8("raw", vec![6, 1], vec![0, 1, 2, 3, 4, 5])?;
/// let channels = deinterleave(&stack, 2)?;
///
/// assert_eq!(channels[0].name(), "raw C0");
/// assert_eq!(channels[0].shape(), &[3, 1]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn deinterleave(stack: &Stack, num_channels: usize) -> OpsResult<Vec<Stack>> {
    if num_channels == 0 {
        return Err(OpsError::InvalidParameter(
            "number of channels must be positive".into(),
        ));
    }

    let frames = stack.frames();
    if frames % num_channels != 0 {
        return Err(OpsError::NotDivisible {
            frames,
            requested: num_channels,
        });
    }

    trace!(frames, num_channels, "deinterleave");
    debug!(name = stack.name(), num_channels, "Deinterleaving stack");

    let mut channels = Vec::with_capacity(num_channels);
    for channel in 0..num_channels {
        let indices: Vec<usize> = (channel..frames).step_by(num_channels).collect();
        let label = format!("{} C{}", stack.name(), channel);
        channels.push(stack.take_frames(&indices).with_name(label));
    }

    Ok(channels)
}
