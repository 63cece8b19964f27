use crate::{
    error::{Error, Result},
    keys::SchemeKey,
    schemes::{AesGcm256Scheme, IdentityScheme, XChaCha20Scheme},
};
use bytes::Bytes;
use std::{fmt, sync::Arc};
use strum_macros::{Display, EnumString};

/// An encryption scheme that can be registered, by name, with an EncryptionManager.
///
/// Implementations are synchronous and must be safe to call from any number
/// of threads at once. `decrypt` must invert `encrypt`.
/// Errors are returned to the caller of the manager unchanged.
pub trait Scheme: fmt::Debug + Send + Sync {
    /// Encrypt plaintext, returning scheme-specific ciphertext
    fn encrypt(&self, plaintext: &[u8]) -> Result<Bytes, Error>;

    /// Decrypt ciphertext previously produced by `encrypt`
    fn decrypt(&self, ciphertext: &[u8]) -> Result<Bytes, Error>;
}

impl<S: Scheme + ?Sized> Scheme for Arc<S> {
    fn encrypt(&self, plaintext: &[u8]) -> Result<Bytes, Error> {
        (**self).encrypt(plaintext)
    }

    fn decrypt(&self, ciphertext: &[u8]) -> Result<Bytes, Error> {
        (**self).decrypt(ciphertext)
    }
}

/// Built-in scheme implementations, as named in settings.
/// Parsing is case-insensitive and accepts several aliases.
#[derive(Clone, Copy, Debug, Display, EnumString, PartialEq, Eq, Hash)]
#[strum(ascii_case_insensitive)]
pub enum SchemeKind {
    /// AES-GCM with 256-bit key
    #[strum(
        to_string = "aes-gcm-256",
        serialize = "aesgcm256",
        serialize = "aesgcm",
        serialize = "aes"
    )]
    AesGcm256,

    /// XChaCha20-Poly1305
    #[strum(
        to_string = "xchacha20-poly1305",
        serialize = "xchacha20poly1305",
        serialize = "xchacha20"
    )]
    XChaCha20Poly1305,

    /// No encryption
    #[strum(to_string = "identity", serialize = "plain", serialize = "none")]
    Identity,
}

impl SchemeKind {
    /// Returns true if this kind of scheme must be constructed with a key
    pub fn needs_key(&self) -> bool {
        !matches!(self, SchemeKind::Identity)
    }

    /// Construct the scheme.
    /// `key` is required for keyed schemes and must be None for `identity`.
    pub fn build(&self, key: Option<&SchemeKey>) -> Result<Box<dyn Scheme>, Error> {
        let scheme: Box<dyn Scheme> = match (self, key) {
            (SchemeKind::AesGcm256, Some(key)) => Box::new(AesGcm256Scheme::new(key)?),
            (SchemeKind::XChaCha20Poly1305, Some(key)) => Box::new(XChaCha20Scheme::new(key)?),
            (SchemeKind::Identity, None) => Box::new(IdentityScheme),
            (SchemeKind::Identity, Some(_)) => {
                return Err(Error::InvalidParameter(format!(
                    "{} scheme does not take a key",
                    self
                )))
            }
            (_, None) => {
                return Err(Error::InvalidParameter(format!(
                    "{} scheme requires a key",
                    self
                )))
            }
        };
        Ok(scheme)
    }
}
