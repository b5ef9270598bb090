//! Generic field envelope: frozen numeric tags + opaque payload.
//!
//! # Identity rules
//! Every payload handed to the transaction layer travels inside a [`Field`]
//! tagged with a [`FieldId`].  The numeric values are dictated by the
//! Hotline protocol and are permanent; an ID is NEVER reused or renumbered.
//! Unknown IDs are carried through verbatim — this layer tags, it does not
//! validate semantics.
//!
//! # Endianness
//! The flattened form is `id (u16 BE) · dataLen (u16 BE) · data`.  Framing
//! beyond a single field (transaction headers, field counts) belongs to the
//! transport layer, not here.

// ── Frozen field IDs ─────────────────────────────────────────────────────────
//
// Values are from the wire protocol and are non-negotiable.

pub const FIELD_USER_NAME:           FieldId = FieldId(102);
pub const FIELD_USER_ID:             FieldId = FieldId(103);
pub const FIELD_USER_ICON_ID:        FieldId = FieldId(104);
pub const FIELD_USER_LOGIN:          FieldId = FieldId(105);
pub const FIELD_USER_PASSWORD:       FieldId = FieldId(106);
pub const FIELD_TRANSFER_SIZE:       FieldId = FieldId(108);
pub const FIELD_USER_FLAGS:          FieldId = FieldId(112);
pub const FIELD_FILE_NAME_WITH_INFO: FieldId = FieldId(200);
pub const FIELD_FILE_NAME:           FieldId = FieldId(201);
pub const FIELD_FILE_PATH:           FieldId = FieldId(202);
pub const FIELD_FILE_TYPE_STRING:    FieldId = FieldId(205);
pub const FIELD_FILE_CREATOR_STRING: FieldId = FieldId(206);
pub const FIELD_FILE_SIZE:           FieldId = FieldId(207);
pub const FIELD_FILE_COMMENT:        FieldId = FieldId(210);
pub const FIELD_USER_NAME_WITH_INFO: FieldId = FieldId(300);

// ── FieldId ──────────────────────────────────────────────────────────────────

/// Numeric tag identifying a field's semantic kind on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldId(pub u16);

impl FieldId {
    /// Human-readable name (for diagnostics only — never parsed).
    pub fn name(self) -> &'static str {
        match self {
            FIELD_USER_NAME           => "user-name",
            FIELD_USER_ID             => "user-id",
            FIELD_USER_ICON_ID        => "user-icon-id",
            FIELD_USER_LOGIN          => "user-login",
            FIELD_USER_PASSWORD       => "user-password",
            FIELD_TRANSFER_SIZE       => "transfer-size",
            FIELD_USER_FLAGS          => "user-flags",
            FIELD_FILE_NAME_WITH_INFO => "file-name-with-info",
            FIELD_FILE_NAME           => "file-name",
            FIELD_FILE_PATH           => "file-path",
            FIELD_FILE_TYPE_STRING    => "file-type-string",
            FIELD_FILE_CREATOR_STRING => "file-creator-string",
            FIELD_FILE_SIZE           => "file-size",
            FIELD_FILE_COMMENT        => "file-comment",
            FIELD_USER_NAME_WITH_INFO => "user-name-with-info",
            _                         => "unknown",
        }
    }
}

// ── Field ────────────────────────────────────────────────────────────────────

/// A tagged payload: the envelope every other record is wrapped in before
/// being handed to the transaction layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub id:   FieldId,
    pub data: Vec<u8>,
}

impl Field {
    pub fn new(id: FieldId, data: Vec<u8>) -> Self {
        Self { id, data }
    }

    /// Flatten to `id[2] · dataLen[2] · data`.
    ///
    /// The length field is a u16; payloads produced by this crate are far
    /// below that bound, and an oversized payload's length wraps rather
    /// than erroring, as legacy peers expect.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(4 + self.data.len());
        out.extend_from_slice(&self.id.0.to_be_bytes());
        out.extend_from_slice(&(self.data.len() as u16).to_be_bytes());
        out.extend_from_slice(&self.data);
        out
    }
}
