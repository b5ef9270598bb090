//! Directory-entry records and subtree summaries.
//!
//! # Listing
//! [`file_name_list`] emits one self-describing [`FileNameWithInfo`] record
//! per *immediate* entry of a directory, each wrapped in a [`Field`] tagged
//! `file-name-with-info`.  Files carry their extension-derived type/creator
//! pair and byte length; subdirectories carry the `fldr` sentinel, a zeroed
//! creator, and their immediate child count in the size slot.  The child
//! count costs a second directory read per subdirectory — accepted, since
//! listings are small.  Entry order is whatever the directory enumeration
//! yields; nothing here sorts.
//!
//! # Summaries
//! [`total_size`] and [`total_item_count`] walk a whole subtree.  Both wrap
//! silently on overflow (u32/u16 arithmetic, as the protocol has always
//! behaved on very large trees) and [`total_item_count`] excludes the root
//! directory itself from the count.
//!
//! Any enumeration or metadata failure fails the whole operation; partial
//! results are never returned.

use byteorder::{BigEndian, ByteOrder};
use std::fs;
use std::path::Path;

use crate::error::{Result, WireError};
use crate::field::{Field, FIELD_FILE_NAME_WITH_INFO};
use crate::filetype::{FileTypeInfo, DIR_TYPE_CODE};

// ── FileNameWithInfo ─────────────────────────────────────────────────────────

/// Fixed header length before the name bytes.
pub const FILE_NAME_WITH_INFO_HEADER_LEN: usize = 14;

/// One directory entry on the wire:
///
/// ```text
/// type[4] · creator[4] · fileSize[4] · nameSize[2] · name[nameSize]
/// ```
///
/// `name` is the entry's base name, never a path, and `nameSize` always
/// equals its byte length.  For a directory, `file_size` holds the count of
/// immediate children rather than a byte size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileNameWithInfo {
    pub type_code:    [u8; 4],
    pub creator_code: [u8; 4],
    pub file_size:    u32,
    pub name:         Vec<u8>,
}

impl FileNameWithInfo {
    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(FILE_NAME_WITH_INFO_HEADER_LEN + self.name.len());
        out.extend_from_slice(&self.type_code);
        out.extend_from_slice(&self.creator_code);
        out.extend_from_slice(&self.file_size.to_be_bytes());
        out.extend_from_slice(&(self.name.len() as u16).to_be_bytes());
        out.extend_from_slice(&self.name);
        out
    }

    pub fn decode(buf: &[u8]) -> Result<Self> {
        if buf.len() < FILE_NAME_WITH_INFO_HEADER_LEN {
            return Err(WireError::InsufficientData {
                needed: FILE_NAME_WITH_INFO_HEADER_LEN,
                got:    buf.len(),
            });
        }
        let name_size = BigEndian::read_u16(&buf[12..14]) as usize;
        let name_end = FILE_NAME_WITH_INFO_HEADER_LEN + name_size;
        if buf.len() < name_end {
            return Err(WireError::InsufficientData { needed: name_end, got: buf.len() });
        }

        let mut type_code = [0u8; 4];
        let mut creator_code = [0u8; 4];
        type_code.copy_from_slice(&buf[0..4]);
        creator_code.copy_from_slice(&buf[4..8]);

        Ok(Self {
            type_code,
            creator_code,
            file_size: BigEndian::read_u32(&buf[8..12]),
            name:      buf[FILE_NAME_WITH_INFO_HEADER_LEN..name_end].to_vec(),
        })
    }
}

// ── Listing ──────────────────────────────────────────────────────────────────

/// Encode one record per immediate entry of `path`, non-recursive.
pub fn file_name_list(path: impl AsRef<Path>) -> Result<Vec<Field>> {
    let mut fields = Vec::new();

    for entry in fs::read_dir(path.as_ref())? {
        let entry = entry?;
        let metadata = entry.metadata()?;
        let name = entry.file_name().to_string_lossy().into_owned().into_bytes();

        let record = if metadata.is_dir() {
            FileNameWithInfo {
                type_code:    DIR_TYPE_CODE,
                creator_code: [0u8; 4],
                file_size:    count_children(&entry.path())?,
                name,
            }
        } else {
            let info = FileTypeInfo::for_filename(&entry.file_name().to_string_lossy());
            FileNameWithInfo {
                type_code:    info.type_code,
                creator_code: info.creator_code,
                file_size:    metadata.len() as u32,
                name,
            }
        };

        fields.push(Field::new(FIELD_FILE_NAME_WITH_INFO, record.encode()));
    }

    Ok(fields)
}

/// Immediate child count of a directory (the `fileSize` slot for `fldr`
/// entries).  An unreadable subdirectory fails the whole listing.
fn count_children(path: &Path) -> Result<u32> {
    let mut count: u32 = 0;
    for child in fs::read_dir(path)? {
        child?;
        count += 1;
    }
    Ok(count)
}

// ── Subtree summaries ────────────────────────────────────────────────────────

/// Sum of every regular file's byte size under `path`, directories
/// contributing 0.  Wraps at u32, and each file's length truncates to u32,
/// exactly as the wire field does.
pub fn total_size(path: impl AsRef<Path>) -> Result<u32> {
    let mut total: u32 = 0;
    walk(path.as_ref(), &mut |metadata| {
        if !metadata.is_dir() {
            total = total.wrapping_add(metadata.len() as u32);
        }
    })?;
    Ok(total)
}

/// Count of every entry under `path`, minus one to exclude the root
/// directory itself.  Wraps at u16.
pub fn total_item_count(path: impl AsRef<Path>) -> Result<u16> {
    let mut count: u16 = 0;
    walk(path.as_ref(), &mut |_| {
        count = count.wrapping_add(1);
    })?;
    Ok(count.wrapping_sub(1))
}

/// Depth-first walk visiting the root and every descendant, surfacing the
/// first filesystem error unchanged.
fn walk<F: FnMut(&fs::Metadata)>(path: &Path, visit: &mut F) -> Result<()> {
    let metadata = fs::metadata(path)?;
    visit(&metadata);

    if metadata.is_dir() {
        for entry in fs::read_dir(path)? {
            walk(&entry?.path(), visit)?;
        }
    }
    Ok(())
}
