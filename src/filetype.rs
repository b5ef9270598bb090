//! Extension → type/creator code registry.
//!
//! Four-character type and creator codes are a Mac OS inheritance the wire
//! format carries verbatim.  The table is fixed at compile time and is the
//! same for every caller; there is no runtime registration.  Unknown
//! extensions (and filenames with no extension at all) fall back to plain
//! text, `TEXT`/`TTXT`.
//!
//! Two reserved pairs sit outside the extension table:
//!   - `fldr` with a zeroed creator marks a directory entry.
//!   - `HTft`/`HTLC` marks a partially-completed upload.  It is a sentinel
//!     occupying the same field slots as a real type/creator pair, not a
//!     file type in its own right.

/// Default pair for unknown extensions.
pub const DEFAULT_TYPE_CODE:    [u8; 4] = *b"TEXT";
pub const DEFAULT_CREATOR_CODE: [u8; 4] = *b"TTXT";

/// Type code for a directory entry.  Directories carry no creator code.
pub const DIR_TYPE_CODE: [u8; 4] = *b"fldr";

/// Sentinel pair marking an in-progress upload.
pub const INCOMPLETE_TYPE_CODE:    [u8; 4] = *b"HTft";
pub const INCOMPLETE_CREATOR_CODE: [u8; 4] = *b"HTLC";

/// Type/creator codes plus the display strings used in get-info replies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileTypeInfo {
    pub type_code:        [u8; 4],
    pub creator_code:     [u8; 4],
    pub creator_string:   &'static str,
    pub file_type_string: &'static str,
}

const fn ft(
    type_code: &[u8; 4],
    creator_code: &[u8; 4],
    creator_string: &'static str,
    file_type_string: &'static str,
) -> FileTypeInfo {
    FileTypeInfo {
        type_code:        *type_code,
        creator_code:     *creator_code,
        creator_string,
        file_type_string,
    }
}

pub const DEFAULT_FILE_TYPE: FileTypeInfo =
    ft(&DEFAULT_TYPE_CODE, &DEFAULT_CREATOR_CODE, "SimpleText", "Text File");

impl FileTypeInfo {
    /// Look up the pair for a filename extension (without the dot).
    ///
    /// Extensions are matched case-sensitively; anything unrecognised gets
    /// the default pair.
    pub fn lookup(extension: &str) -> FileTypeInfo {
        match extension {
            "sit" => ft(b"SIT!", b"SIT!", "StuffIt", "StuffIt Archive"),
            "pdf" => ft(b"PDF ", b"CARO", "Adobe Acrobat", "Adobe PDF"),
            "gif" => ft(b"GIFf", b"ogle", "PictureViewer", "GIF Image"),
            "txt" => ft(b"TEXT", b"ttxt", "SimpleText", "Text File"),
            "zip" => ft(b"ZIP ", b"SITx", "StuffIt Expander", "Zip Archive"),
            "tgz" => ft(b"Gzip", b"SITx", "StuffIt Expander", "Gzip Archive"),
            "hqx" => ft(b"TEXT", b"SITx", "StuffIt Expander", "BinHex File"),
            "jpg" => ft(b"JPEG", b"ogle", "PictureViewer", "JPEG Image"),
            "img" => ft(b"rohd", b"ddsk", "Disk Copy", "Disk Image"),
            "sea" => ft(b"APPL", b"aust", "Self-Extracting Archive", "Application"),
            "mov" => ft(b"MooV", b"TVOD", "QuickTime Player", "QuickTime Movie"),
            _     => DEFAULT_FILE_TYPE,
        }
    }

    /// Look up the pair for a full filename.
    ///
    /// The extension is everything after the last `.`; a name with no dot
    /// has no recognised extension and maps to the default pair.
    pub fn for_filename(filename: &str) -> FileTypeInfo {
        match filename.rsplit_once('.') {
            Some((_, ext)) => Self::lookup(ext),
            None           => DEFAULT_FILE_TYPE,
        }
    }

    /// Sentinel descriptor for a partially-completed upload.
    pub fn incomplete_upload() -> FileTypeInfo {
        ft(&INCOMPLETE_TYPE_CODE, &INCOMPLETE_CREATOR_CODE, "", "Incomplete Upload")
    }
}
