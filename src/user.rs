//! User presence records.
//!
//! Encoded layout, all integers big-endian:
//!
//! ```text
//! id[2] · icon[2] · flags[2] · nameLen[2] · name[nameLen]
//! ```
//!
//! always exactly `8 + name.len()` bytes.
//!
//! Decoding is deliberately lenient: the name-length prefix at bytes 6..8
//! is present on the wire but is NOT checked against the remaining buffer —
//! everything from offset 8 on is the name.  Deployed clients rely on that
//! slack, so it is reproduced here rather than tightened.

use byteorder::{BigEndian, ByteOrder};

use crate::error::{Result, WireError};

// ── Flag bits ────────────────────────────────────────────────────────────────
//
// The flags field is a 2-byte bitmap; bit 0 is the least significant.

pub const FLAG_AWAY:         u16 = 1 << 0;
pub const FLAG_ADMIN:        u16 = 1 << 1;
pub const FLAG_REFUSE_PM:    u16 = 1 << 2;
pub const FLAG_REFUSE_CHAT:  u16 = 1 << 3;

/// Fixed header length before the name bytes.
pub const USER_RECORD_HEADER_LEN: usize = 8;

/// Take the trailing two bytes of a 2- or 4-byte field as a u16.
///
/// Some client versions pad the icon and flags fields to 4 bytes; the low
/// half is the value.  Produces a new fixed-width value and leaves the
/// caller's buffer untouched.
pub fn trailing_u16(raw: &[u8]) -> Result<u16> {
    if raw.len() < 2 {
        return Err(WireError::InsufficientData { needed: 2, got: raw.len() });
    }
    Ok(BigEndian::read_u16(&raw[raw.len() - 2..]))
}

// ── UserRecord ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub id:    u16,
    pub icon:  u16,
    pub flags: u16,
    pub name:  String,
}

impl UserRecord {
    /// Build a record from raw wire field bytes, normalizing over-wide
    /// icon/flags fields via [`trailing_u16`].
    pub fn from_fields(id: &[u8], icon: &[u8], flags: &[u8], name: String) -> Result<Self> {
        Ok(Self {
            id:    trailing_u16(id)?,
            icon:  trailing_u16(icon)?,
            flags: trailing_u16(flags)?,
            name,
        })
    }

    pub fn is_away(&self) -> bool {
        self.flags & FLAG_AWAY != 0
    }

    pub fn is_admin(&self) -> bool {
        self.flags & FLAG_ADMIN != 0
    }

    pub fn refuses_private_messages(&self) -> bool {
        self.flags & FLAG_REFUSE_PM != 0
    }

    pub fn refuses_private_chat(&self) -> bool {
        self.flags & FLAG_REFUSE_CHAT != 0
    }

    /// Encode to the wire layout.  The name length is a u16 cast; names
    /// this long never occur in practice.
    pub fn encode(&self) -> Vec<u8> {
        let name = self.name.as_bytes();
        let mut out = Vec::with_capacity(USER_RECORD_HEADER_LEN + name.len());
        out.extend_from_slice(&self.id.to_be_bytes());
        out.extend_from_slice(&self.icon.to_be_bytes());
        out.extend_from_slice(&self.flags.to_be_bytes());
        out.extend_from_slice(&(name.len() as u16).to_be_bytes());
        out.extend_from_slice(name);
        out
    }

    /// Decode from the wire layout.
    ///
    /// Fixed fields are read from offsets 0–6; bytes 6..8 (the name-length
    /// prefix) are skipped unvalidated and the name is everything from
    /// offset 8.  A buffer shorter than 8 bytes is a malformed-input error.
    pub fn decode(buf: &[u8]) -> Result<Self> {
        if buf.len() < USER_RECORD_HEADER_LEN {
            return Err(WireError::InsufficientData {
                needed: USER_RECORD_HEADER_LEN,
                got:    buf.len(),
            });
        }
        Ok(Self {
            id:    BigEndian::read_u16(&buf[0..2]),
            icon:  BigEndian::read_u16(&buf[2..4]),
            flags: BigEndian::read_u16(&buf[4..6]),
            name:  String::from_utf8_lossy(&buf[USER_RECORD_HEADER_LEN..]).into_owned(),
        })
    }
}
