//! NumPy `.npy` format support.
//!
//! Reads version 1.0 and 2.0 files, writes version 1.0. Only C-ordered,
//! little-endian data is accepted: the whole point of a stack is slicing
//! along axis 0, which requires frames to be contiguous in memory.
//!
//! Format reference: a 6-byte magic, two version bytes, a little-endian
//! header length (u16 for 1.0, u32 for 2.0), then a Python dict literal
//! naming `descr`, `fortran_order` and `shape`, space-padded so the data
//! block starts on a 64-byte boundary and terminated by a newline. The raw
//! element bytes follow immediately after.

use crate::{IoError, IoResult};
use half::f16;
use restack_core::{Dtype, Samples, Stack};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

const NPY_MAGIC: &[u8; 6] = b"\x93NUMPY";

/// Reads an `.npy` file into a stack.
///
/// The stack is named after the file stem ("scan" for `scan.npy`).
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<Stack> {
    let path = path.as_ref();
    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("stack")
        .to_string();

    let file = File::open(path)?;
    let mut reader = BufReader::new(file);

    let header = read_header(&mut reader)?;
    let dtype = parse_descr(&header.descr)?;
    if header.fortran_order {
        return Err(IoError::FortranOrder);
    }

    let count: usize = header.shape.iter().product();
    let expected = count * dtype.size();

    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    if bytes.len() != expected {
        return Err(IoError::DataLength {
            expected,
            got: bytes.len(),
        });
    }

    let samples = decode_samples(&bytes, dtype);
    Stack::new(name, header.shape, samples).map_err(|e| IoError::InvalidFile(e.to_string()))
}

/// Writes a stack as an `.npy` version 1.0 file.
///
/// The stack name is not stored; `.npy` carries no label, so the name lives
/// in the file name chosen by the caller.
pub fn write<P: AsRef<Path>>(path: P, stack: &Stack) -> IoResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    let dict = format!(
        "{{'descr': '{}', 'fortran_order': False, 'shape': {}, }}",
        descr_for(stack.dtype()),
        shape_tuple(stack.shape())
    );

    // Pad so the data block starts on a 64-byte boundary; the padding is
    // part of the header and ends with a newline.
    let mut header = dict.into_bytes();
    let unpadded = NPY_MAGIC.len() + 4 + header.len() + 1;
    let pad = (64 - unpadded % 64) % 64;
    header.extend(std::iter::repeat_n(b' ', pad));
    header.push(b'\n');

    if header.len() > u16::MAX as usize {
        return Err(IoError::EncodeError(format!(
            "npy header of {} bytes exceeds the version 1.0 limit",
            header.len()
        )));
    }

    writer.write_all(NPY_MAGIC)?;
    writer.write_all(&[1, 0])?;
    writer.write_all(&(header.len() as u16).to_le_bytes())?;
    writer.write_all(&header)?;
    write_samples(&mut writer, stack.samples())?;
    writer.flush()?;
    Ok(())
}

struct Header {
    descr: String,
    fortran_order: bool,
    shape: Vec<usize>,
}

fn read_header<R: Read>(reader: &mut R) -> IoResult<Header> {
    let mut magic = [0u8; 6];
    reader.read_exact(&mut magic)?;
    if &magic != NPY_MAGIC {
        return Err(IoError::InvalidFile("npy magic not found".into()));
    }

    let mut version = [0u8; 2];
    reader.read_exact(&mut version)?;
    let header_len = match version[0] {
        1 => {
            let mut len = [0u8; 2];
            reader.read_exact(&mut len)?;
            u16::from_le_bytes(len) as usize
        }
        2 => {
            let mut len = [0u8; 4];
            reader.read_exact(&mut len)?;
            u32::from_le_bytes(len) as usize
        }
        _ => {
            return Err(IoError::UnsupportedVersion {
                major: version[0],
                minor: version[1],
            });
        }
    };

    let mut header = vec![0u8; header_len];
    reader.read_exact(&mut header)?;
    let header = std::str::from_utf8(&header)
        .map_err(|_| IoError::InvalidFile("npy header is not valid UTF-8".into()))?;

    Ok(Header {
        descr: string_field(header, "descr")?,
        fortran_order: bool_field(header, "fortran_order")?,
        shape: shape_field(header)?,
    })
}

/// Returns the text following `'key':` in the header dict.
fn after_key<'a>(header: &'a str, key: &str) -> IoResult<&'a str> {
    let token = format!("'{}'", key);
    let pos = header
        .find(&token)
        .ok_or_else(|| IoError::InvalidFile(format!("npy header is missing '{}'", key)))?;
    let rest = header[pos + token.len()..].trim_start();
    rest.strip_prefix(':')
        .map(str::trim_start)
        .ok_or_else(|| IoError::InvalidFile(format!("npy header field '{}' has no value", key)))
}

fn string_field(header: &str, key: &str) -> IoResult<String> {
    let rest = after_key(header, key)?;
    let rest = rest.strip_prefix('\'').ok_or_else(|| {
        IoError::InvalidFile(format!("npy header field '{}' is not a string", key))
    })?;
    let end = rest.find('\'').ok_or_else(|| {
        IoError::InvalidFile(format!("npy header field '{}' is unterminated", key))
    })?;
    Ok(rest[..end].to_string())
}

fn bool_field(header: &str, key: &str) -> IoResult<bool> {
    let rest = after_key(header, key)?;
    if rest.starts_with("True") {
        Ok(true)
    } else if rest.starts_with("False") {
        Ok(false)
    } else {
        Err(IoError::InvalidFile(format!(
            "npy header field '{}' is not a boolean",
            key
        )))
    }
}

fn shape_field(header: &str) -> IoResult<Vec<usize>> {
    let rest = after_key(header, "shape")?;
    let rest = rest
        .strip_prefix('(')
        .ok_or_else(|| IoError::InvalidFile("npy shape is not a tuple".into()))?;
    let end = rest
        .find(')')
        .ok_or_else(|| IoError::InvalidFile("npy shape tuple is unterminated".into()))?;

    let mut shape = Vec::new();
    for part in rest[..end].split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        let dim = part
            .parse::<usize>()
            .map_err(|_| IoError::InvalidFile(format!("bad npy shape dimension '{}'", part)))?;
        shape.push(dim);
    }
    Ok(shape)
}

/// Maps an npy descr string to a dtype.
///
/// `<` (little-endian), `=` (native, assumed little-endian) and `|`
/// (byte-order irrelevant) prefixes are accepted; big-endian data is not.
fn parse_descr(descr: &str) -> IoResult<Dtype> {
    if descr.starts_with('>') {
        return Err(IoError::UnsupportedDtype(descr.to_string()));
    }
    let kind = descr.trim_start_matches(['<', '=', '|']);
    match kind {
        "u1" => Ok(Dtype::U8),
        "u2" => Ok(Dtype::U16),
        "f2" => Ok(Dtype::F16),
        "f4" => Ok(Dtype::F32),
        "f8" => Ok(Dtype::F64),
        _ => Err(IoError::UnsupportedDtype(descr.to_string())),
    }
}

fn descr_for(dtype: Dtype) -> &'static str {
    match dtype {
        Dtype::U8 => "|u1",
        Dtype::U16 => "<u2",
        Dtype::F16 => "<f2",
        Dtype::F32 => "<f4",
        Dtype::F64 => "<f8",
    }
}

/// Formats a shape as a Python tuple literal: `(6,)`, `(6, 4, 4)`.
fn shape_tuple(shape: &[usize]) -> String {
    match shape {
        [single] => format!("({},)", single),
        dims => {
            let inner: Vec<String> = dims.iter().map(|d| d.to_string()).collect();
            format!("({})", inner.join(", "))
        }
    }
}

fn decode_samples(bytes: &[u8], dtype: Dtype) -> Samples {
    match dtype {
        Dtype::U8 => Samples::U8(bytes.to_vec()),
        Dtype::U16 => Samples::U16(
            bytes
                .chunks_exact(2)
                .map(|c| u16::from_le_bytes([c[0], c[1]]))
                .collect(),
        ),
        Dtype::F16 => Samples::F16(
            bytes
                .chunks_exact(2)
                .map(|c| f16::from_le_bytes([c[0], c[1]]))
                .collect(),
        ),
        Dtype::F32 => Samples::F32(
            bytes
                .chunks_exact(4)
                .map(|c| f32::from_le_bytes([c[0], c[1], c[2], c[3]]))
                .collect(),
        ),
        Dtype::F64 => Samples::F64(
            bytes
                .chunks_exact(8)
                .map(|c| f64::from_le_bytes([c[0], c[1], c[2], c[3], c[4], c[5], c[6], c[7]]))
                .collect(),
        ),
    }
}

fn write_samples<W: Write>(writer: &mut W, samples: &Samples) -> IoResult<()> {
    match samples {
        Samples::U8(data) => writer.write_all(data)?,
        Samples::U16(data) => {
            for v in data {
                writer.write_all(&v.to_le_bytes())?;
            }
        }
        Samples::F16(data) => {
            for v in data {
                writer.write_all(&v.to_le_bytes())?;
            }
        }
        Samples::F32(data) => {
            for v in data {
                writer.write_all(&v.to_le_bytes())?;
            }
        }
        Samples::F64(data) => {
            for v in data {
                writer.write_all(&v.to_le_bytes())?;
            }
        }
    }
    Ok(())
}
