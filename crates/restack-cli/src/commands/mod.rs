//! CLI command implementations

pub mod deinterleave;
pub mod info;
pub mod interleave;
pub mod split;

use anyhow::{Context, Result};
use restack_core::Stack;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Load a stack from a path
pub fn load_stack(path: &Path) -> Result<Stack> {
    let stack =
        restack_io::read(path).with_context(|| format!("Failed to load: {}", path.display()))?;
    debug!(path = %path.display(), shape = ?stack.shape(), dtype = %stack.dtype(), "Loaded stack");
    Ok(stack)
}

/// Save a stack to a path
pub fn save_stack(path: &Path, stack: &Stack) -> Result<()> {
    restack_io::write(path, stack).with_context(|| format!("Failed to save: {}", path.display()))?;
    debug!(path = %path.display(), name = stack.name(), "Saved stack");
    Ok(())
}

/// Builds `<dir>/<stem>_<suffix>.npy` for a derived stack.
///
/// When no directory is given the file lands next to the input.
pub fn derived_path(dir: Option<&Path>, input: &Path, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("stack");
    let parent = dir
        .map(Path::to_path_buf)
        .unwrap_or_else(|| input.parent().unwrap_or(Path::new(".")).to_path_buf());
    parent.join(format!("{}_{}.npy", stem, suffix))
}

/// Formats a shape for display: "6 x 4 x 4".
pub fn format_shape(shape: &[usize]) -> String {
    let dims: Vec<String> = shape.iter().map(|d| d.to_string()).collect();
    dims.join(" x ")
}
