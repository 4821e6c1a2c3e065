//! Deinterleave command: one output file per channel.

use crate::DeinterleaveArgs;
use anyhow::Result;

use super::{derived_path, load_stack, save_stack};

/// Runs deinterleave: split the input into N channel files.
///
/// Channel `c` is written to `<stem>_C<c>.npy` in the output directory
/// (or next to the input).
pub fn run(args: DeinterleaveArgs, verbose: bool) -> Result<()> {
    let input = load_stack(&args.input)?;

    if verbose {
        println!(
            "Deinterleaving {} ({} frames) into {} channels",
            args.input.display(),
            input.frames(),
            args.channels
        );
    }

    let channels = restack_ops::deinterleave(&input, args.channels)?;

    for (c, channel) in channels.iter().enumerate() {
        let path = derived_path(args.output_dir.as_deref(), &args.input, &format!("C{}", c));
        save_stack(&path, channel)?;
        if verbose {
            println!("Saved '{}' to {}", channel.name(), path.display());
        }
    }

    Ok(())
}
