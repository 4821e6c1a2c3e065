//! The named image stack container.
//!
//! A [`Stack`] pairs a name, a shape, and a flat [`Samples`] buffer. The name
//! travels through every operation: the hosting layer (a viewer, a pipeline,
//! a directory of files) identifies stacks by label, so derived stacks carry
//! labels derived from their source ("raw C0", "raw Sub2", ...).
//!
//! # Memory Layout
//!
//! Elements are stored flat in C (row-major) order. For shape `(6, 4, 4)`:
//!
//! ```text
//! [frame 0: 16 elements][frame 1: 16 elements]...[frame 5: 16 elements]
//! ```
//!
//! Axis 0 is the frame axis; a frame is `frame_len()` consecutive elements.
//!
//! # Usage
//!
//! ```rust
//! use restack_core::Stack;
//!
//! let stack = Stack::from_f32("scan", vec![3, 2, 2], vec![0.0; 12]).unwrap();
//! assert_eq!(stack.frames(), 3);
//! assert_eq!(stack.frame_len(), 4);
//!
//! // Frames 0 and 2, as a new 2-frame stack
//! let picked = stack.take_frames(&[0, 2]);
//! assert_eq!(picked.shape(), &[2, 2, 2]);
//! ```

use crate::{Dtype, Error, Result, Samples};
use half::f16;

/// Named n-dimensional numeric array, sliced along its leading axis.
///
/// Invariants (upheld by construction):
/// - the shape has at least one axis;
/// - the buffer holds exactly `shape.iter().product()` elements.
///
/// Inputs are never mutated by stack operations; every derived stack owns a
/// freshly allocated buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct Stack {
    /// Display label, carried through operations.
    name: String,
    /// Ordered dimensions; axis 0 is the frame axis.
    shape: Vec<usize>,
    /// Flat element buffer, C-ordered.
    samples: Samples,
}

impl Stack {
    /// Creates a stack from a shape and an element buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ScalarStack`] if `shape` is empty, or
    /// [`Error::LengthMismatch`] if the buffer length does not equal the
    /// product of the shape.
    pub fn new(name: impl Into<String>, shape: Vec<usize>, samples: Samples) -> Result<Self> {
        if shape.is_empty() {
            return Err(Error::ScalarStack);
        }
        let expected: usize = shape.iter().product();
        if samples.len() != expected {
            return Err(Error::LengthMismatch {
                shape,
                expected,
                got: samples.len(),
            });
        }
        Ok(Self {
            name: name.into(),
            shape,
            samples,
        })
    }

    /// Creates a stack from u8 elements.
    pub fn from_u8(name: impl Into<String>, shape: Vec<usize>, data: Vec<u8>) -> Result<Self> {
        Self::new(name, shape, Samples::U8(data))
    }

    /// Creates a stack from u16 elements.
    pub fn from_u16(name: impl Into<String>, shape: Vec<usize>, data: Vec<u16>) -> Result<Self> {
        Self::new(name, shape, Samples::U16(data))
    }

    /// Creates a stack from f16 elements.
    pub fn from_f16(name: impl Into<String>, shape: Vec<usize>, data: Vec<f16>) -> Result<Self> {
        Self::new(name, shape, Samples::F16(data))
    }

    /// Creates a stack from f32 elements.
    pub fn from_f32(name: impl Into<String>, shape: Vec<usize>, data: Vec<f32>) -> Result<Self> {
        Self::new(name, shape, Samples::F32(data))
    }

    /// Creates a stack from f64 elements.
    pub fn from_f64(name: impl Into<String>, shape: Vec<usize>, data: Vec<f64>) -> Result<Self> {
        Self::new(name, shape, Samples::F64(data))
    }

    /// Returns the display label.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the full shape.
    #[inline]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Returns the number of axes.
    #[inline]
    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    /// Returns the element type.
    #[inline]
    pub fn dtype(&self) -> Dtype {
        self.samples.dtype()
    }

    /// Returns the axis-0 length (number of frames).
    #[inline]
    pub fn frames(&self) -> usize {
        self.shape[0]
    }

    /// Returns the number of elements in one frame (product of the trailing
    /// axes; 1 for a one-dimensional stack).
    #[inline]
    pub fn frame_len(&self) -> usize {
        self.shape[1..].iter().product()
    }

    /// Returns the shape of a single frame (all axes but the first).
    #[inline]
    pub fn trailing_shape(&self) -> &[usize] {
        &self.shape[1..]
    }

    /// Returns the element buffer.
    #[inline]
    pub fn samples(&self) -> &Samples {
        &self.samples
    }

    /// Consumes the stack, returning the element buffer.
    #[inline]
    pub fn into_samples(self) -> Samples {
        self.samples
    }

    /// Returns this stack under a different name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Copies the listed frames, in order, into a new stack with the same
    /// name and trailing shape.
    ///
    /// # Panics
    ///
    /// Panics if any index is out of range.
    pub fn take_frames(&self, indices: &[usize]) -> Self {
        debug_assert!(
            indices.iter().all(|&i| i < self.frames()),
            "frame index out of range"
        );
        let mut shape = self.shape.clone();
        shape[0] = indices.len();
        Self {
            name: self.name.clone(),
            shape,
            samples: self.samples.gather_frames(indices, self.frame_len()),
        }
    }

    /// Copies the contiguous frame range `[start, end)` into a new stack
    /// with the same name and trailing shape.
    ///
    /// # Panics
    ///
    /// Panics if `start > end` or `end > frames()`.
    pub fn frame_range(&self, start: usize, end: usize) -> Self {
        debug_assert!(start <= end && end <= self.frames(), "frame range out of range");
        let mut shape = self.shape.clone();
        shape[0] = end - start;
        Self {
            name: self.name.clone(),
            shape,
            samples: self.samples.frame_range(start, end, self.frame_len()),
        }
    }
}
