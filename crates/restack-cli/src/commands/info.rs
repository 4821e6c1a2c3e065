//! Info command: print stack shape and dtype.

use crate::InfoArgs;
use anyhow::Result;

use super::{format_shape, load_stack};

/// Runs info: print name, shape, dtype and frame count for each input.
pub fn run(args: InfoArgs, verbose: bool) -> Result<()> {
    for path in &args.input {
        let stack = load_stack(path)?;
        println!(
            "{}: {} {} ({} frames)",
            path.display(),
            format_shape(stack.shape()),
            stack.dtype(),
            stack.frames()
        );
        if verbose {
            println!(
                "  name: {}, frame length: {} elements, {} bytes per element",
                stack.name(),
                stack.frame_len(),
                stack.dtype().size()
            );
        }
    }
    Ok(())
}
