//! Element type descriptors.
//!
//! [`Dtype`] names the scalar type of a stack's elements. It exists as a
//! runtime value (rather than a generic parameter) because stacks are loaded
//! from files whose element type is only known at runtime, and operations
//! need to compare and report element types in error messages.

use std::fmt;

/// Scalar element type of a [`Stack`](crate::Stack).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dtype {
    /// 8-bit unsigned integer.
    U8,
    /// 16-bit unsigned integer.
    U16,
    /// 16-bit IEEE float ([`half::f16`]).
    F16,
    /// 32-bit IEEE float.
    F32,
    /// 64-bit IEEE float.
    F64,
}

impl Dtype {
    /// Returns the size of one element in bytes.
    #[inline]
    pub const fn size(&self) -> usize {
        match self {
            Self::U8 => 1,
            Self::U16 | Self::F16 => 2,
            Self::F32 => 4,
            Self::F64 => 8,
        }
    }

    /// Returns `true` if this is a floating-point type.
    #[inline]
    pub const fn is_float(&self) -> bool {
        matches!(self, Self::F16 | Self::F32 | Self::F64)
    }

    /// Returns the canonical lowercase name ("u8", "f32", ...).
    pub const fn name(&self) -> &'static str {
        match self {
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::F16 => "f16",
            Self::F32 => "f32",
            Self::F64 => "f64",
        }
    }
}

impl fmt::Display for Dtype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size() {
        assert_eq!(Dtype::U8.size(), 1);
        assert_eq!(Dtype::U16.size(), 2);
        assert_eq!(Dtype::F16.size(), 2);
        assert_eq!(Dtype::F32.size(), 4);
        assert_eq!(Dtype::F64.size(), 8);
    }

    #[test]
    fn test_is_float() {
        assert!(!Dtype::U8.is_float());
        assert!(!Dtype::U16.is_float());
        assert!(Dtype::F16.is_float());
        assert!(Dtype::F32.is_float());
        assert!(Dtype::F64.is_float());
    }

    #[test]
    fn test_display() {
        assert_eq!(Dtype::F32.to_string(), "f32");
        assert_eq!(Dtype::U16.to_string(), "u16");
    }
}
