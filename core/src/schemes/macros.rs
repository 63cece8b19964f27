//! Macros to assist with Scheme implementations
//!

/// Implements `Debug`, a keyed constructor, and [`Scheme`](super::Scheme)
/// for a struct wrapping a RustCrypto AEAD in a field named `aead`.
///
/// Each encryption draws a fresh random nonce, and the output is laid out as
/// `nonce || ciphertext || tag`. The invoking module must have
/// `Aead`, `KeyInit`, `Nonce`, `BufMut`, `Bytes` and `BytesMut` in scope.
///
/// `aead_scheme!(AesGcm256Scheme, Aes256Gcm, NONCEBYTES, TAGBYTES)`
macro_rules! aead_scheme {
    ($scheme: ident,
     $aead: ty,
     $noncelen: expr,
     $taglen: expr) => {
        /// Implementation of Debug that doesn't print key to prevent accidental leaks via logging
        impl std::fmt::Debug for $scheme {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_struct(stringify!($scheme)).finish_non_exhaustive()
            }
        }

        impl $scheme {
            /// Initialize the scheme with a key.
            /// Key length must be exactly `KEYBYTES`.
            pub fn new(key: &$crate::keys::SchemeKey) -> Result<Self, $crate::error::Error> {
                let aead = <$aead as KeyInit>::new_from_slice(key.as_bytes()).map_err(|_| {
                    $crate::error::Error::InvalidParameter(format!(
                        "{} requires a {}-byte key, got {} bytes",
                        stringify!($scheme),
                        $crate::keys::KEYBYTES,
                        key.len()
                    ))
                })?;
                Ok(Self { aead })
            }

            /// Initialize the scheme with a newly generated key.
            /// Mostly useful for tests, since the key can't be recovered.
            pub fn generate() -> Result<Self, $crate::error::Error> {
                Self::new(&$crate::keys::SchemeKey::generate()?)
            }
        }

        impl $crate::schemes::Scheme for $scheme {
            fn encrypt(&self, plaintext: &[u8]) -> Result<Bytes, $crate::error::Error> {
                let mut nonce = [0u8; $noncelen];
                $crate::rand::fill_buf(&mut nonce)?;
                let sealed = self
                    .aead
                    .encrypt(Nonce::<$aead>::from_slice(&nonce), plaintext)?;
                let mut buf = BytesMut::with_capacity($noncelen + sealed.len());
                buf.put_slice(&nonce);
                buf.put_slice(&sealed);
                Ok(buf.freeze())
            }

            fn decrypt(&self, ciphertext: &[u8]) -> Result<Bytes, $crate::error::Error> {
                if ciphertext.len() < $noncelen + $taglen {
                    return Err($crate::error::Error::DecryptionError(format!(
                        "{}: ciphertext too short ({} bytes)",
                        stringify!($scheme),
                        ciphertext.len()
                    )));
                }
                let (nonce, sealed) = ciphertext.split_at($noncelen);
                Ok(Bytes::from(
                    self.aead.decrypt(Nonce::<$aead>::from_slice(nonce), sealed)?,
                ))
            }
        }
    };
}
