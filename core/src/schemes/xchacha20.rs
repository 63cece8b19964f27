//! # xchacha20 scheme
//!
//! XChaCha20-Poly1305 encryption scheme.
//! The 24-byte nonce is long enough to be generated randomly for every value.
//!

use bytes::{BufMut, Bytes, BytesMut};
use chacha20poly1305::aead::{Aead, KeyInit, Nonce};
use chacha20poly1305::XChaCha20Poly1305;

pub use crate::keys::KEYBYTES;
/// Number of bytes in nonce
pub const NONCEBYTES: usize = 24;
/// Number of bytes in auth integrity tag
pub const TAGBYTES: usize = 16;

/// XChaCha20-Poly1305 scheme
/// Encryption algorithm is a pure rust implementation by
/// [RustCrypto AEAD](https://github.com/RustCrypto/AEADs/tree/master/chacha20poly1305)
pub struct XChaCha20Scheme {
    aead: XChaCha20Poly1305,
}

aead_scheme!(XChaCha20Scheme, XChaCha20Poly1305, NONCEBYTES, TAGBYTES);
