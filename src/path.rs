//! Hierarchical path records.
//!
//! Wire layout, all integers big-endian:
//!
//! ```text
//! segmentCount[2] · { reserved[2] · segLen[1] · segment[segLen] } × segmentCount
//! ```
//!
//! The segment count equals the number of `/`-separated components, and the
//! peer checks it, so an empty path still encodes as a single zero-length
//! segment — no special-casing.  A segment over 255 bytes does not fit the
//! 1-byte length field and is a [`WireError::SegmentTooLong`] error; it is
//! never truncated.

use byteorder::{BigEndian, ReadBytesExt};
use std::io::Read;

use crate::error::{Result, WireError};

/// Separator the protocol splits paths on, independent of the host OS.
pub const PATH_SEPARATOR: char = '/';

/// Encode a path into its length-prefixed segment sequence.
pub fn encode_path(path: &str) -> Result<Vec<u8>> {
    let segments: Vec<&str> = path.split(PATH_SEPARATOR).collect();

    let mut out = Vec::with_capacity(2 + path.len() + segments.len() * 3);
    out.extend_from_slice(&(segments.len() as u16).to_be_bytes());

    for segment in segments {
        let bytes = segment.as_bytes();
        if bytes.len() > u8::MAX as usize {
            return Err(WireError::SegmentTooLong { len: bytes.len() });
        }
        out.extend_from_slice(&[0, 0]);
        out.push(bytes.len() as u8);
        out.extend_from_slice(bytes);
    }

    Ok(out)
}

/// Decode the segment sequence produced by [`encode_path`].
///
/// Returns the segments in wire order.  A buffer that ends before the
/// declared segment count is satisfied is an
/// [`WireError::InsufficientData`] error.
pub fn decode_path(buf: &[u8]) -> Result<Vec<String>> {
    let mut cursor = std::io::Cursor::new(buf);

    let count = cursor
        .read_u16::<BigEndian>()
        .map_err(|_| WireError::InsufficientData { needed: 2, got: buf.len() })?;

    let mut segments = Vec::with_capacity(count as usize);
    for _ in 0..count {
        let mut prefix = [0u8; 3]; // reserved[2] + segLen[1]
        cursor
            .read_exact(&mut prefix)
            .map_err(|_| truncated(&cursor, buf, 3))?;

        let seg_len = prefix[2] as usize;
        let mut segment = vec![0u8; seg_len];
        cursor
            .read_exact(&mut segment)
            .map_err(|_| truncated(&cursor, buf, seg_len))?;

        segments.push(String::from_utf8_lossy(&segment).into_owned());
    }

    Ok(segments)
}

fn truncated(cursor: &std::io::Cursor<&[u8]>, buf: &[u8], wanted: usize) -> WireError {
    WireError::InsufficientData {
        needed: cursor.position() as usize + wanted,
        got:    buf.len(),
    }
}
