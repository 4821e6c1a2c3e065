//! # restack-ops
//!
//! Stack rearrangement operations.
//!
//! This crate provides the three leading-axis operations restack is built
//! around. All of them are pure functions from borrowed stacks to freshly
//! allocated stacks; inputs are never mutated and there is no shared state.
//!
//! # Modules
//!
//! - [`deinterleave`] - Split one stack into N by frame position modulo N
//! - [`interleave`] - Merge two stacks by alternating frames
//! - [`split`] - Partition one stack into N equal contiguous substacks
//!
//! # Example
//!
//! ```rust
//! use restack_core::Stack;
//! use restack_ops::{deinterleave, interleave};
//!
//! let stack = Stack::from_f32("scan", vec![6, 2], (0..12).map(|v| v as f32).collect())?;
//!
//! // Split interleaved channels apart...
//! let channels = deinterleave(&stack, 2)?;
//! assert_eq!(channels.len(), 2);
//! assert_eq!(channels[0].name(), "scan C0");
//!
//! // ...and weave them back together.
//! let rebuilt = interleave(&channels[0], &channels[1])?;
//! assert_eq!(rebuilt.samples(), stack.samples());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Error Handling
//!
//! Every precondition failure is a distinct [`OpsError`] variant, so callers
//! can tell a dtype mismatch from a shape mismatch from a non-divisible frame
//! count without parsing messages. No operation returns a partial result.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod deinterleave;
pub mod interleave;
pub mod split;

pub use deinterleave::deinterleave;
pub use error::{OpsError, OpsResult};
pub use interleave::interleave;
pub use split::split;
