//! Encryption schemes
//!
//! A [`Scheme`] is the unit registered with an
//! [`EncryptionManager`](../manager/struct.EncryptionManager.html).
//! Applications can implement the trait for any algorithm; this module provides
//! AES-GCM-256, XChaCha20-Poly1305, and a pass-through identity scheme.

#[macro_use]
mod macros;

mod scheme;
pub use scheme::{Scheme, SchemeKind};

pub mod aesgcm;
pub use aesgcm::AesGcm256Scheme;

pub mod xchacha20;
pub use xchacha20::XChaCha20Scheme;

mod identity;
pub use identity::IdentityScheme;
