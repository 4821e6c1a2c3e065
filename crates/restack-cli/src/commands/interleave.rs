//! Interleave command: merge two stacks into one output file.

use crate::InterleaveArgs;
use anyhow::Result;

use super::{format_shape, load_stack, save_stack};

/// Runs interleave: alternate frames of the two inputs into one stack.
pub fn run(args: InterleaveArgs, verbose: bool) -> Result<()> {
    let a = load_stack(&args.a)?;
    let b = load_stack(&args.b)?;

    if verbose {
        println!(
            "Interleaving {} ({}) with {} ({})",
            args.a.display(),
            format_shape(a.shape()),
            args.b.display(),
            format_shape(b.shape())
        );
    }

    let merged = restack_ops::interleave(&a, &b)?;

    save_stack(&args.output, &merged)?;
    if verbose {
        println!(
            "Saved '{}' ({}) to {}",
            merged.name(),
            format_shape(merged.shape()),
            args.output.display()
        );
    }

    Ok(())
}
