//! Shared error type for record encoding and decoding.
//!
//! Three failure classes, kept distinct so callers can tell bad network
//! data from bad local disk state:
//!   - [`WireError::Io`]: filesystem enumeration or metadata failure,
//!     propagated unchanged and never retried here.
//!   - [`WireError::InsufficientData`]: a decode buffer is shorter than a
//!     record's fixed prefix.
//!   - [`WireError::SegmentTooLong`]: a path component exceeds the 1-byte
//!     length field.  Reported, never truncated — a silently shortened
//!     segment would produce a record the peer misreads.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WireError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Insufficient data: need {needed} bytes, got {got}")]
    InsufficientData { needed: usize, got: usize },
    #[error("Path segment of {len} bytes exceeds the 255-byte wire limit")]
    SegmentTooLong { len: usize },
}

pub type Result<T> = std::result::Result<T, WireError>;
