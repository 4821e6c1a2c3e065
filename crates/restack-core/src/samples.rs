//! Typed element storage.
//!
//! [`Samples`] holds the flat element buffer of a stack, with one variant per
//! supported [`Dtype`]. Frame-granular copies (gather, contiguous range,
//! pairwise interleave) are implemented here once, generically over the
//! element type, so the operation crates never match on dtype themselves.

use crate::Dtype;
use half::f16;

/// Flat element buffer, C-ordered, one variant per supported dtype.
#[derive(Debug, Clone, PartialEq)]
pub enum Samples {
    /// 8-bit unsigned data.
    U8(Vec<u8>),
    /// 16-bit unsigned data.
    U16(Vec<u16>),
    /// 16-bit float data.
    F16(Vec<f16>),
    /// 32-bit float data.
    F32(Vec<f32>),
    /// 64-bit float data.
    F64(Vec<f64>),
}

/// Applies `$body` to the inner vector of each variant, rewrapping the result
/// in the same variant.
macro_rules! per_dtype {
    ($samples:expr, $data:ident => $body:expr) => {
        match $samples {
            Samples::U8($data) => Samples::U8($body),
            Samples::U16($data) => Samples::U16($body),
            Samples::F16($data) => Samples::F16($body),
            Samples::F32($data) => Samples::F32($body),
            Samples::F64($data) => Samples::F64($body),
        }
    };
}

impl Samples {
    /// Returns the element type of this buffer.
    #[inline]
    pub fn dtype(&self) -> Dtype {
        match self {
            Self::U8(_) => Dtype::U8,
            Self::U16(_) => Dtype::U16,
            Self::F16(_) => Dtype::F16,
            Self::F32(_) => Dtype::F32,
            Self::F64(_) => Dtype::F64,
        }
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            Self::U8(data) => data.len(),
            Self::U16(data) => data.len(),
            Self::F16(data) => data.len(),
            Self::F32(data) => data.len(),
            Self::F64(data) => data.len(),
        }
    }

    /// Returns `true` if the buffer holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copies the listed frames, in order, into a new buffer.
    ///
    /// Frame `i` covers elements `[i * frame_len, (i + 1) * frame_len)`.
    ///
    /// # Panics
    ///
    /// Panics if any index addresses elements past the end of the buffer.
    pub fn gather_frames(&self, indices: &[usize], frame_len: usize) -> Samples {
        per_dtype!(self, data => gather(data, indices, frame_len))
    }

    /// Copies the contiguous frame range `[start, end)` into a new buffer.
    ///
    /// # Panics
    ///
    /// Panics if the range addresses elements past the end of the buffer.
    pub fn frame_range(&self, start: usize, end: usize, frame_len: usize) -> Samples {
        per_dtype!(self, data => data[start * frame_len..end * frame_len].to_vec())
    }

    /// Merges two buffers frame by frame: frame 0 of `self`, frame 0 of
    /// `other`, frame 1 of `self`, and so on.
    ///
    /// Both buffers must hold the same dtype and the same number of frames;
    /// returns `None` on a dtype mismatch. Trailing frames of the longer
    /// input are not silently dropped by callers: the operation layer
    /// validates frame counts before calling this.
    ///
    /// A `frame_len` of zero (a zero-sized trailing axis) yields an empty
    /// buffer of the shared dtype, like [`gather_frames`](Self::gather_frames)
    /// and [`frame_range`](Self::frame_range) do.
    pub fn interleave_frames(&self, other: &Samples, frame_len: usize) -> Option<Samples> {
        match (self, other) {
            (Self::U8(a), Self::U8(b)) => Some(Self::U8(interleave(a, b, frame_len))),
            (Self::U16(a), Self::U16(b)) => Some(Self::U16(interleave(a, b, frame_len))),
            (Self::F16(a), Self::F16(b)) => Some(Self::F16(interleave(a, b, frame_len))),
            (Self::F32(a), Self::F32(b)) => Some(Self::F32(interleave(a, b, frame_len))),
            (Self::F64(a), Self::F64(b)) => Some(Self::F64(interleave(a, b, frame_len))),
            _ => None,
        }
    }
}

fn gather<T: Copy>(data: &[T], indices: &[usize], frame_len: usize) -> Vec<T> {
    let mut out = Vec::with_capacity(indices.len() * frame_len);
    for &i in indices {
        out.extend_from_slice(&data[i * frame_len..(i + 1) * frame_len]);
    }
    out
}

fn interleave<T: Copy>(a: &[T], b: &[T], frame_len: usize) -> Vec<T> {
    // chunks_exact rejects a chunk size of zero; zero-length frames have
    // nothing to copy anyway.
    if frame_len == 0 {
        return Vec::new();
    }
    let mut out = Vec::with_capacity(a.len() + b.len());
    for (fa, fb) in a.chunks_exact(frame_len).zip(b.chunks_exact(frame_len)) {
        out.extend_from_slice(fa);
        out.extend_from_slice(fb);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dtype_and_len() {
        let s = Samples::F32(vec![0.0; 12]);
        assert_eq!(s.dtype(), Dtype::F32);
        assert_eq!(s.len(), 12);
        assert!(!s.is_empty());
    }

    #[test]
    fn test_gather_frames() {
        // 4 frames of 2 elements each
        let s = Samples::U8(vec![0, 1, 10, 11, 20, 21, 30, 31]);
        let picked = s.gather_frames(&[0, 2], 2);
        assert_eq!(picked, Samples::U8(vec![0, 1, 20, 21]));
    }

    #[test]
    fn test_frame_range() {
        let s = Samples::U16(vec![0, 1, 10, 11, 20, 21]);
        let mid = s.frame_range(1, 3, 2);
        assert_eq!(mid, Samples::U16(vec![10, 11, 20, 21]));
    }

    #[test]
    fn test_interleave_frames() {
        let a = Samples::F32(vec![0.0, 1.0, 2.0, 3.0]);
        let b = Samples::F32(vec![10.0, 11.0, 12.0, 13.0]);
        let merged = a.interleave_frames(&b, 2).unwrap();
        assert_eq!(
            merged,
            Samples::F32(vec![0.0, 1.0, 10.0, 11.0, 2.0, 3.0, 12.0, 13.0])
        );
    }

    #[test]
    fn test_interleave_frames_dtype_mismatch() {
        let a = Samples::F32(vec![0.0, 1.0]);
        let b = Samples::U8(vec![0, 1]);
        assert!(a.interleave_frames(&b, 2).is_none());
    }

    #[test]
    fn test_interleave_frames_zero_frame_len() {
        let a = Samples::F32(Vec::new());
        let b = Samples::F32(Vec::new());
        let merged = a.interleave_frames(&b, 0).unwrap();
        assert!(merged.is_empty());
        assert_eq!(merged.dtype(), Dtype::F32);
    }

    #[test]
    fn test_gather_empty_indices() {
        let s = Samples::F64(vec![1.0, 2.0]);
        let none = s.gather_frames(&[], 1);
        assert!(none.is_empty());
        assert_eq!(none.dtype(), Dtype::F64);
    }
}
