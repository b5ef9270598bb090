//! Credential string obfuscation: byte-wise 255-complement.
//!
//! Legacy clients send logins and passwords through this transform, e.g.
//! `98 8a 9a 8c 8b` → `"guest"`.  It is its own inverse, so one function
//! serves both directions.  Deterministic, stateless, keyless — this is
//! wire-format compatibility, not cryptography.  Not secure, but hey, it
//! was the 90s.

/// Complement every byte: `t(b) = 255 - b`.
#[inline]
pub fn obfuscate(clear: &[u8]) -> Vec<u8> {
    clear.iter().map(|&b| 255 - b).collect()
}

/// Inverse of [`obfuscate`] — the same transform.
#[inline]
pub fn deobfuscate(obfuscated: &[u8]) -> Vec<u8> {
    obfuscate(obfuscated)
}

/// Deobfuscate and interpret the result as text.
///
/// Each complemented byte is read as a Latin-1 code point.  Always total;
/// no byte sequence is rejected.
pub fn deobfuscate_string(obfuscated: &[u8]) -> String {
    obfuscated.iter().map(|&b| (255 - b) as char).collect()
}
