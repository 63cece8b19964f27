//! Self-describing envelope for stored values.
//!
//! An encrypted value is framed as
//!
//! ```text
//!   0x00 <scheme name, utf-8> '$' <ciphertext>
//! ```
//!
//! Values that do not begin with the marker byte are legacy (unencrypted) values.
//! The format is persisted by applications and must not change.
//!
//! Ciphertext is arbitrary binary, so a value that was never produced by an
//! EncryptionManager may still happen to match this framing. There's no way
//! to distinguish that case from a real envelope.

use bytes::{BufMut, Bytes, BytesMut};

/// First byte of every envelope
pub const MARKER: u8 = 0x00;
/// Separates the scheme name from the ciphertext
pub const SEPARATOR: u8 = b'$';

/// Borrowed view of a framed value
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Envelope<'v> {
    /// raw scheme name. Not guaranteed to be utf-8 for values read from storage.
    pub scheme: &'v [u8],
    /// scheme-specific ciphertext
    pub ciphertext: &'v [u8],
}

impl<'v> Envelope<'v> {
    /// Parse a stored value. Returns None for anything that isn't a well-formed envelope:
    /// a missing marker byte, no separator, or an empty scheme name.
    pub fn parse(value: &'v [u8]) -> Option<Self> {
        let (first, rest) = value.split_first()?;
        if *first != MARKER {
            return None;
        }
        let pos = rest.iter().position(|b| *b == SEPARATOR)?;
        let (scheme, ciphertext) = (&rest[..pos], &rest[pos + 1..]);
        if scheme.is_empty() {
            return None;
        }
        Some(Envelope { scheme, ciphertext })
    }

    /// Scheme name as text, replacing invalid utf-8 sequences
    pub fn scheme_name(&self) -> String {
        String::from_utf8_lossy(self.scheme).into_owned()
    }

    /// Serialize the envelope
    pub fn to_bytes(&self) -> Bytes {
        seal(self.scheme, self.ciphertext)
    }
}

/// Frame ciphertext with the scheme name that produced it
pub fn seal(scheme: &[u8], ciphertext: &[u8]) -> Bytes {
    let mut buf = BytesMut::with_capacity(2 + scheme.len() + ciphertext.len());
    buf.put_u8(MARKER);
    buf.put_slice(scheme);
    buf.put_u8(SEPARATOR);
    buf.put_slice(ciphertext);
    buf.freeze()
}

/// Returns true if the value carries the envelope marker byte.
/// A marked value may still be malformed; see [`Envelope::parse`].
pub fn is_marked(value: &[u8]) -> bool {
    value.first() == Some(&MARKER)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_framed() {
        let env = Envelope::parse(b"\x00aes$ct").expect("envelope");
        assert_eq!(env.scheme, b"aes");
        assert_eq!(env.ciphertext, b"ct");
        assert_eq!(env.scheme_name(), "aes");
    }

    #[test]
    fn split_on_first_separator() {
        // ciphertext may itself contain '$'
        let env = Envelope::parse(b"\x00fernet$a$b$").expect("envelope");
        assert_eq!(env.scheme, b"fernet");
        assert_eq!(env.ciphertext, b"a$b$");
    }

    #[test]
    fn empty_ciphertext() {
        let env = Envelope::parse(b"\x00aes$").expect("envelope");
        assert_eq!(env.ciphertext, b"");
    }

    #[test]
    fn not_envelopes() {
        assert_eq!(Envelope::parse(b""), None, "empty");
        assert_eq!(Envelope::parse(b"\x00"), None, "marker only");
        assert_eq!(Envelope::parse(b"\x00aes"), None, "no separator");
        assert_eq!(Envelope::parse(b"\x00$ct"), None, "empty scheme name");
        assert_eq!(Envelope::parse(b"aes$ct"), None, "no marker");
        assert_eq!(Envelope::parse(b"\x01aes$ct"), None, "wrong marker");
    }

    #[test]
    fn seal_layout() {
        let framed = seal(b"xchacha20", &[0, 1, 2]);
        assert_eq!(framed.as_ref(), b"\x00xchacha20$\x00\x01\x02");
        assert!(is_marked(&framed));
        assert!(!is_marked(b"plain"));
        assert!(!is_marked(b""));

        let env = Envelope::parse(&framed).expect("reparse");
        assert_eq!(env.to_bytes(), framed);
    }

    #[test]
    fn lossy_name() {
        let env = Envelope::parse(b"\x00\xffx$ct").expect("envelope");
        assert_eq!(env.scheme_name(), "\u{fffd}x");
    }
}
