//! # restack-io
//!
//! Stack I/O for restack.
//!
//! The hosting ecosystem this tool grew out of exchanges image stacks as
//! NumPy arrays, so the on-disk interchange format is `.npy`:
//!
//! - **NPY** - one n-dimensional array per file, dtype and shape in the header
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use restack_io::{read, write};
//!
//! // Read a stack (format detected from the extension)
//! let stack = read("scan.npy")?;
//! println!("{:?} {}", stack.shape(), stack.dtype());
//!
//! // Write it back out
//! write("copy.npy", &stack)?;
//! ```
//!
//! # Supported dtypes
//!
//! | descr | dtype |
//! |-------|-------|
//! | `\|u1` | u8 |
//! | `<u2` | u16 |
//! | `<f2` | f16 |
//! | `<f4` | f32 |
//! | `<f8` | f64 |
//!
//! Fortran-ordered and big-endian files are rejected with explicit errors.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod npy;

pub use error::{IoError, IoResult};

use restack_core::Stack;
use std::path::Path;

/// Stack file format, detected from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// NumPy `.npy`.
    Npy,
    /// Anything else.
    Unknown,
}

impl Format {
    /// Detects the format from a path's extension.
    pub fn from_extension(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("npy") => Self::Npy,
            _ => Self::Unknown,
        }
    }
}

/// Reads a stack from a file, detecting the format from the extension.
///
/// # Errors
///
/// Returns an error if the file cannot be opened, the extension is not
/// recognized, or the file is malformed.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<Stack> {
    let path = path.as_ref();
    match Format::from_extension(path) {
        Format::Npy => npy::read(path),
        Format::Unknown => Err(unsupported(path)),
    }
}

/// Writes a stack to a file, detecting the format from the extension.
///
/// # Errors
///
/// Returns an error if the file cannot be created or the extension is not
/// recognized.
pub fn write<P: AsRef<Path>>(path: P, stack: &Stack) -> IoResult<()> {
    let path = path.as_ref();
    match Format::from_extension(path) {
        Format::Npy => npy::write(path, stack),
        Format::Unknown => Err(unsupported(path)),
    }
}

fn unsupported(path: &Path) -> IoError {
    IoError::UnsupportedFormat(
        path.extension()
            .and_then(|e| e.to_str())
            .unwrap_or("unknown")
            .to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_detection() {
        assert_eq!(Format::from_extension(Path::new("a.npy")), Format::Npy);
        assert_eq!(Format::from_extension(Path::new("a.NPY")), Format::Npy);
        assert_eq!(Format::from_extension(Path::new("a.tif")), Format::Unknown);
        assert_eq!(Format::from_extension(Path::new("npy")), Format::Unknown);
    }

    #[test]
    fn test_read_unknown_extension() {
        let result = read("stack.bin");
        assert!(matches!(result, Err(IoError::UnsupportedFormat(ext)) if ext == "bin"));
    }
}
