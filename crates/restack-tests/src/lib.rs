//! Shared helpers for restack integration tests.
//!
//! The integration tests exercise properties that span crates (operation
//! round-trips, file-level pipelines), so the builders live here instead of
//! being repeated per test file.

use restack_core::{Samples, Stack};

/// Builds an f32 stack of sequential values 0, 1, 2, ... for the given shape.
pub fn sequential_f32(name: &str, shape: Vec<usize>) -> Stack {
    let n: usize = shape.iter().product();
    Stack::from_f32(name, shape, (0..n).map(|v| v as f32).collect())
        .expect("sequential stack shape")
}

/// Builds a u16 stack of sequential values with an offset, so two stacks
/// built with different offsets are distinguishable frame by frame.
pub fn sequential_u16(name: &str, shape: Vec<usize>, offset: u16) -> Stack {
    let n: usize = shape.iter().product();
    Stack::from_u16(name, shape, (0..n as u16).map(|v| v + offset).collect())
        .expect("sequential stack shape")
}

/// Returns the f32 elements of a stack.
///
/// # Panics
///
/// Panics if the stack is not f32; test data here always is.
pub fn f32_elements(stack: &Stack) -> Vec<f32> {
    match stack.samples() {
        Samples::F32(data) => data.clone(),
        other => panic!("expected f32 samples, got {}", other.dtype()),
    }
}
