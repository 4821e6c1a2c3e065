//! # restack-core
//!
//! Core types for image stack processing.
//!
//! This crate provides the foundational types used throughout restack:
//!
//! - [`Stack`] - Named n-dimensional numeric array, sliced along its leading axis
//! - [`Samples`] - Typed element storage, one variant per supported dtype
//! - [`Dtype`] - Element type descriptor
//!
//! ## Design Philosophy
//!
//! A [`Stack`] is a flat, C-ordered buffer plus a shape. Axis 0 is the *frame
//! axis* (time points, channels, z-slices); everything after it is the frame
//! payload. All stack rearrangement reduces to copying whole frames, so the
//! frame helpers ([`Stack::take_frames`], [`Stack::frame_range`]) are the only
//! slicing primitives the rest of the workspace needs.
//!
//! Element types are tracked at runtime via [`Dtype`] rather than through
//! generics: stacks arrive from files whose dtype is only known at runtime,
//! and operations must be able to report a dtype mismatch as a value, not a
//! compile error.
//!
//! ## Crate Structure
//!
//! This crate is the foundation of restack and has no internal dependencies.
//! All other restack crates depend on `restack-core`:
//!
//! ```text
//! restack-core (this crate)
//!    ^
//!    |
//!    +-- restack-ops (deinterleave, interleave, split)
//!    +-- restack-io (.npy reading/writing)
//!    +-- restack-cli (command-line tool)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod dtype;
pub mod error;
pub mod samples;
pub mod stack;

// Re-exports for convenience
pub use dtype::Dtype;
pub use error::{Error, Result};
pub use samples::Samples;
pub use stack::Stack;
