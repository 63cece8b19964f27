//! # AES-GCM scheme
//!
//! AES-GCM (Galois/Counter Mode) with 256-bit keys,
//! with optional architecture-specific hardware acceleration.
//! Encryption implemented by [RustCrypto](https://github.com/RustCrypto/AEADs)
//!
//! When targeting modern x86/x86_64 CPUs, use the following `RUSTFLAGS` to
//! take advantage of AES-NI and CLMUL CPU intrinsics:
//! `RUSTFLAGS="-Ctarget-cpu=sandybridge -Ctarget-feature=+aes,+sse2,+sse4.1,+ssse3"`

use aes_gcm::Aes256Gcm;
use bytes::{BufMut, Bytes, BytesMut};
use chacha20poly1305::aead::{Aead, KeyInit, Nonce};

pub use crate::keys::KEYBYTES;
/// Number of bytes in nonce (96 bits = 12 bytes)
pub const NONCEBYTES: usize = 12;
/// Number of bytes in auth integrity tag
pub const TAGBYTES: usize = 16;

/// AES-GCM-256 scheme.
/// Ciphertext is `nonce (12) || encrypted data || tag (16)`, with a random nonce per value.
pub struct AesGcm256Scheme {
    aead: Aes256Gcm,
}

aead_scheme!(AesGcm256Scheme, Aes256Gcm, NONCEBYTES, TAGBYTES);
