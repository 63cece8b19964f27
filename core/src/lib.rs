//! # value-crypt
//!
//! Self-describing encryption for stored values.
//!
//! An [`EncryptionManager`](manager/struct.EncryptionManager.html) holds an ordered
//! registry of named [`Scheme`](schemes/trait.Scheme.html)s. New values are always
//! encrypted with the first (default) scheme, and tagged with its name in a small
//! [envelope](envelope/index.html). Reads look the name back up, so a database
//! column can hold values written by several schemes, plus legacy plaintext
//! values from before encryption was enabled, and all of them stay readable.
//!
//! Built-in schemes:
//! - AES-GCM (256-bit)
//! - XChaCha20-Poly1305 with AEAD
//! - identity (no encryption)
//!
//! Any other algorithm can be plugged in by implementing `Scheme`.
//!
//! Schemes are usually configured from [settings](settings/index.html), whose keys are
//! loaded from [key uris](keys/index.html). Key management and rotation are left to
//! the application: to retire a scheme, register a new default ahead of it, and
//! keep the old one registered for as long as values written with it exist.
//!
//! ## Implementation notes
//!
//! Crypto algorithms used are implemented by other packages, notably
//! [RustCrypto](https://github.com/rustcrypto/), a pure-rust implemenation.
//!
//! The manager logs through [`tracing`](https://docs.rs/tracing). It never logs values or keys.
//!

pub mod envelope;
pub mod error;
pub mod keys;
pub mod manager;
pub mod rand;
pub mod schemes;
pub mod settings;
pub mod util;

pub use envelope::Envelope;
pub use manager::EncryptionManager;
pub use schemes::{Scheme, SchemeKind};
pub use settings::{EncryptionSettings, SchemeSetting};
