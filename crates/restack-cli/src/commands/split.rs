//! Split command: one output file per substack.

use crate::SplitArgs;
use anyhow::Result;

use super::{derived_path, load_stack, save_stack};

/// Runs split: partition the input into N contiguous substack files.
///
/// Substack `i` is written to `<stem>_Sub<i>.npy` in the output directory
/// (or next to the input).
pub fn run(args: SplitArgs, verbose: bool) -> Result<()> {
    let input = load_stack(&args.input)?;

    if verbose {
        println!(
            "Splitting {} ({} frames) into {} substacks",
            args.input.display(),
            input.frames(),
            args.substacks
        );
    }

    let substacks = restack_ops::split(&input, args.substacks)?;

    for (i, substack) in substacks.iter().enumerate() {
        let path = derived_path(
            args.output_dir.as_deref(),
            &args.input,
            &format!("Sub{}", i),
        );
        save_stack(&path, substack)?;
        if verbose {
            println!("Saved '{}' to {}", substack.name(), path.display());
        }
    }

    Ok(())
}
