//! UTF-8 encoding of icon font codepoints.
//!
//! The panel renders icons by embedding a single codepoint of the icon font in
//! an ordinary text string. [`Glyph`] holds that encoded codepoint inline so
//! resolving an icon never touches the heap.

use core::fmt;
use core::ops::Deref;

use thiserror_no_std::Error;

/// Maximum number of bytes in one UTF-8 encoded codepoint.
pub const UTF8_MAX_LEN: usize = 4;

/// Largest valid Unicode scalar value.
pub const MAX_CODEPOINT: u32 = 0x10FFFF;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlyphError {
    #[error("codepoint U+{0:X} is above U+10FFFF")]
    OutOfRange(u32),
    #[error("codepoint U+{0:X} is a UTF-16 surrogate")]
    Surrogate(u32),
}

/// Encode a codepoint using the standard 1-4 byte UTF-8 ranges.
///
/// Returns the byte buffer and the number of bytes used. No validation is
/// done: values above `U+10FFFF` take the 4-byte branch and yield
/// deterministic but non-conformant bytes, and surrogates are encoded as
/// three bytes. Use [`Glyph::from_codepoint`] for checked encoding.
pub const fn encode_utf8(codepoint: u32) -> ([u8; UTF8_MAX_LEN], usize) {
    let mut buf = [0u8; UTF8_MAX_LEN];

    if codepoint <= 0x7F {
        buf[0] = codepoint as u8;
        (buf, 1)
    } else if codepoint <= 0x7FF {
        buf[0] = (0xC0 | (codepoint >> 6)) as u8;
        buf[1] = (0x80 | (codepoint & 0x3F)) as u8;
        (buf, 2)
    } else if codepoint <= 0xFFFF {
        buf[0] = (0xE0 | (codepoint >> 12)) as u8;
        buf[1] = (0x80 | ((codepoint >> 6) & 0x3F)) as u8;
        buf[2] = (0x80 | (codepoint & 0x3F)) as u8;
        (buf, 3)
    } else {
        // High bits above U+1FFFFF are truncated away by the cast.
        buf[0] = (0xF0 | (codepoint >> 18)) as u8;
        buf[1] = (0x80 | ((codepoint >> 12) & 0x3F)) as u8;
        buf[2] = (0x80 | ((codepoint >> 6) & 0x3F)) as u8;
        buf[3] = (0x80 | (codepoint & 0x3F)) as u8;
        (buf, 4)
    }
}

/// One icon font glyph, stored as its UTF-8 bytes.
///
/// Dereferences to `str` so it can be pushed straight into display text.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Glyph {
    ch: char,
    bytes: [u8; UTF8_MAX_LEN],
    len: u8,
}

impl Glyph {
    /// Encode a `char`. Always succeeds.
    pub const fn from_char(ch: char) -> Self {
        let (bytes, len) = encode_utf8(ch as u32);
        Self {
            ch,
            bytes,
            len: len as u8,
        }
    }

    /// Encode a raw codepoint, rejecting values that are not Unicode scalar values.
    pub const fn from_codepoint(codepoint: u32) -> Result<Self, GlyphError> {
        if codepoint > MAX_CODEPOINT {
            return Err(GlyphError::OutOfRange(codepoint));
        }
        match char::from_u32(codepoint) {
            Some(ch) => Ok(Self::from_char(ch)),
            None => Err(GlyphError::Surrogate(codepoint)),
        }
    }

    pub const fn codepoint(&self) -> u32 {
        self.ch as u32
    }

    pub const fn to_char(&self) -> char {
        self.ch
    }

    /// Number of encoded bytes (1-4).
    #[allow(clippy::len_without_is_empty)]
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len()]
    }

    pub fn as_str(&self) -> &str {
        // The bytes are always the encoding of `self.ch`.
        core::str::from_utf8(self.as_bytes()).unwrap_or("\u{FFFD}")
    }
}

impl Deref for Glyph {
    type Target = str;

    fn deref(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<str> for Glyph {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<[u8]> for Glyph {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<char> for Glyph {
    fn from(ch: char) -> Self {
        Self::from_char(ch)
    }
}

impl TryFrom<u32> for Glyph {
    type Error = GlyphError;

    fn try_from(codepoint: u32) -> Result<Self, Self::Error> {
        Self::from_codepoint(codepoint)
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Glyph(U+{:04X})", self.codepoint())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    fn encoded(codepoint: u32) -> alloc::vec::Vec<u8> {
        let (buf, len) = encode_utf8(codepoint);
        buf[..len].to_vec()
    }

    #[test]
    fn test_encode_length_classes() {
        assert_eq!(encoded(0x41), [0x41]);
        assert_eq!(encoded(0x7F), [0x7F]);
        assert_eq!(encoded(0x80), [0xC2, 0x80]);
        assert_eq!(encoded(0xF6), [0xC3, 0xB6]);
        assert_eq!(encoded(0x7FF), [0xDF, 0xBF]);
        assert_eq!(encoded(0x800), [0xE0, 0xA0, 0x80]);
        assert_eq!(encoded(0xFFFF), [0xEF, 0xBF, 0xBF]);
        assert_eq!(encoded(0x10000), [0xF0, 0x90, 0x80, 0x80]);
        assert_eq!(encoded(0xF017E), [0xF3, 0xB0, 0x85, 0xBE]);
        assert_eq!(encoded(0x10FFFF), [0xF4, 0x8F, 0xBF, 0xBF]);
    }

    #[test]
    fn test_encode_matches_core() {
        for ch in ['A', '\u{F6}', '€', '\u{F1802}', '\u{10FFFF}'] {
            let mut expected = [0u8; 4];
            assert_eq!(encoded(ch as u32), ch.encode_utf8(&mut expected).as_bytes());
        }
    }

    #[test]
    fn test_round_trip() {
        for codepoint in [0x41, 0x00F6, 0xF017E, 0x10FFFF] {
            let glyph = Glyph::from_codepoint(codepoint).unwrap();
            let decoded = core::str::from_utf8(glyph.as_bytes()).unwrap();
            let mut chars = decoded.chars();
            assert_eq!(chars.next().map(|c| c as u32), Some(codepoint));
            assert_eq!(chars.next(), None);
        }
    }

    #[test]
    fn test_encode_above_range_is_permissive() {
        assert_eq!(encoded(0x110000), [0xF4, 0x90, 0x80, 0x80]);
        assert_eq!(encoded(u32::MAX).len(), 4);
        assert!(core::str::from_utf8(&encoded(0x110000)).is_err());
    }

    #[test]
    fn test_checked_rejects_invalid() {
        assert_eq!(
            Glyph::from_codepoint(0x110000),
            Err(GlyphError::OutOfRange(0x110000))
        );
        assert_eq!(
            Glyph::from_codepoint(0xD800),
            Err(GlyphError::Surrogate(0xD800))
        );
        assert_eq!(
            Glyph::try_from(0xDFFF_u32),
            Err(GlyphError::Surrogate(0xDFFF))
        );
    }

    #[test]
    fn test_glyph_accessors() {
        let glyph = Glyph::from_char('\u{F1802}');
        assert_eq!(glyph.codepoint(), 0xF1802);
        assert_eq!(glyph.len(), 4);
        assert_eq!(&*glyph, "\u{F1802}");
        assert_eq!(format!("{}", glyph), "\u{F1802}");
        assert_eq!(format!("{:?}", glyph), "Glyph(U+F1802)");
        assert_eq!(format!("{:?}", Glyph::from('a')), "Glyph(U+0061)");
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            format!("{}", GlyphError::OutOfRange(0x110000)),
            "codepoint U+110000 is above U+10FFFF"
        );
    }
}
