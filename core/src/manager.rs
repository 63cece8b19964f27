//! EncryptionManager - registry of named schemes
//!
//! The manager is built once, at startup, from an ordered list of
//! `(name, scheme)` pairs. The first pair names the default scheme, which is
//! used for every call to `encrypt`. `decrypt` reads the scheme name back out
//! of the value's [envelope](../envelope/index.html), so values written by any
//! registered scheme stay readable after the default changes.
//!
//! Values that are not envelopes are returned unchanged by `decrypt`, which
//! lets encryption be enabled over existing plaintext data. This includes
//! values that start with the marker byte but are otherwise malformed
//! (no separator, or an empty scheme name). Only a well-formed envelope naming an
//! unregistered scheme is an error.
//!
//! If no schemes are registered, both operations pass values through unchanged,
//! and stored values are assumed to have never been encrypted.

use crate::{
    envelope::{self, Envelope},
    error::{Error, Result},
    schemes::Scheme,
    settings::EncryptionSettings,
};
use bytes::Bytes;
use std::fmt;
use tracing::{debug, warn};

/// Registry of named encryption schemes.
///
/// Immutable after construction; share it between threads with `Arc`.
///
/// ```
/// use value_crypt::{schemes::XChaCha20Scheme, EncryptionManager, Scheme};
///
/// let scheme: Box<dyn Scheme> = Box::new(XChaCha20Scheme::generate().unwrap());
/// let manager = EncryptionManager::new(vec![("xc", scheme)]).unwrap();
///
/// let stored = manager.encrypt("secret").unwrap();
/// assert!(stored.starts_with(b"\x00xc$"));
/// assert_eq!(manager.decrypt(&stored).unwrap(), "secret");
///
/// // values stored before encryption was enabled are read as-is
/// assert_eq!(manager.decrypt("legacy").unwrap(), "legacy");
/// ```
pub struct EncryptionManager {
    // insertion order is preserved. Lookups are linear; registries hold a handful of schemes.
    schemes: Vec<(String, Box<dyn Scheme>)>,
    default_scheme: Option<String>,
}

impl fmt::Debug for EncryptionManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncryptionManager")
            .field("schemes", &self.scheme_names().collect::<Vec<_>>())
            .field("default_scheme", &self.default_scheme)
            .finish()
    }
}

impl Default for EncryptionManager {
    fn default() -> Self {
        Self::disabled()
    }
}

impl EncryptionManager {
    /// Build a registry from ordered `(name, scheme)` pairs.
    ///
    /// The first name becomes the default scheme. If a name appears more than once,
    /// the last scheme registered under it wins, but it keeps the position of the
    /// first occurrence. That's easy to do by accident in settings, so it is logged.
    ///
    /// Names must be non-empty and must not contain `$` or a nul byte,
    /// otherwise they couldn't be read back out of an envelope. This is stricter
    /// than the stored format itself, which would accept such a name on write
    /// and then read the value back as plaintext or route it to the wrong scheme.
    pub fn new<I, N>(schemes: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (N, Box<dyn Scheme>)>,
        N: Into<String>,
    {
        let mut registry: Vec<(String, Box<dyn Scheme>)> = Vec::new();
        let mut default_scheme = None;
        for (name, scheme) in schemes {
            let name = name.into();
            validate_name(&name, &*scheme)?;
            if default_scheme.is_none() {
                default_scheme = Some(name.clone());
            }
            match registry.iter_mut().find(|(n, _)| *n == name) {
                Some(entry) => {
                    warn!(scheme = %name, "duplicate encryption scheme name, replacing earlier entry");
                    entry.1 = scheme;
                }
                None => registry.push((name, scheme)),
            }
        }
        let names: Vec<&str> = registry.iter().map(|(n, _)| n.as_str()).collect();
        debug!(schemes = ?names, default = ?default_scheme, "encryption manager initialized");
        Ok(EncryptionManager {
            schemes: registry,
            default_scheme,
        })
    }

    /// Registry with no schemes: encrypt and decrypt pass values through unchanged
    pub fn disabled() -> Self {
        EncryptionManager {
            schemes: Vec::new(),
            default_scheme: None,
        }
    }

    /// Build a registry from settings, constructing each scheme in order.
    pub fn from_settings(settings: &EncryptionSettings) -> Result<Self, Error> {
        let mut schemes = Vec::with_capacity(settings.schemes.len());
        for setting in &settings.schemes {
            schemes.push((setting.name.clone(), setting.build()?));
        }
        Self::new(schemes)
    }

    /// Name of the scheme used for new encryptions, if any
    pub fn default_scheme(&self) -> Option<&str> {
        self.default_scheme.as_deref()
    }

    /// Registered scheme names, in registration order
    pub fn scheme_names(&self) -> impl Iterator<Item = &str> {
        self.schemes.iter().map(|(n, _)| n.as_str())
    }

    /// Number of registered schemes, after duplicates are merged
    pub fn len(&self) -> usize {
        self.schemes.len()
    }

    /// Returns true if no schemes are registered
    pub fn is_empty(&self) -> bool {
        self.schemes.is_empty()
    }

    /// Look up a scheme by name, as raw bytes from an envelope
    pub fn get(&self, name: &[u8]) -> Option<&dyn Scheme> {
        self.schemes
            .iter()
            .find(|(n, _)| n.as_bytes() == name)
            .map(|(_, s)| &**s)
    }

    /// Encrypt with the default scheme and frame the result in an envelope.
    /// With no schemes registered, returns the value unchanged.
    /// Errors from the scheme are returned as-is.
    pub fn encrypt<V: AsRef<[u8]>>(&self, value: V) -> Result<Bytes, Error> {
        let value = value.as_ref();
        let name = match &self.default_scheme {
            Some(name) => name,
            None => return Ok(Bytes::copy_from_slice(value)),
        };
        let scheme = self.get(name.as_bytes()).ok_or_else(|| {
            // registry entries are never removed, so the default is always present
            Error::UnknownScheme(name.clone())
        })?;
        let ciphertext = scheme.encrypt(value)?;
        Ok(envelope::seal(name.as_bytes(), &ciphertext))
    }

    /// Encrypt a json value. Only strings are accepted; they are encrypted as utf-8.
    pub fn encrypt_value(&self, value: &serde_json::Value) -> Result<Bytes, Error> {
        match value {
            serde_json::Value::String(s) => self.encrypt(s),
            other => Err(Error::InputType(format!(
                "expected text or bytes, got json {}",
                json_type(other)
            ))),
        }
    }

    /// Decrypt a stored value.
    ///
    /// Legacy and malformed values are returned unchanged. A value framed with
    /// an unregistered scheme name fails with `Error::UnknownScheme`.
    pub fn decrypt<V: AsRef<[u8]>>(&self, value: V) -> Result<Bytes, Error> {
        let value = value.as_ref();
        if self.schemes.is_empty() {
            return Ok(Bytes::copy_from_slice(value));
        }
        let envelope = match Envelope::parse(value) {
            Some(envelope) => envelope,
            None => {
                if envelope::is_marked(value) {
                    debug!(len = value.len(), "malformed envelope, treating value as plaintext");
                } else {
                    debug!(len = value.len(), "value not encrypted, returning unchanged");
                }
                return Ok(Bytes::copy_from_slice(value));
            }
        };
        match self.get(envelope.scheme) {
            Some(scheme) => scheme.decrypt(envelope.ciphertext),
            None => {
                let name = envelope.scheme_name();
                warn!(scheme = %name, "value encrypted with unregistered scheme");
                Err(Error::UnknownScheme(name))
            }
        }
    }
}

fn validate_name(name: &str, scheme: &dyn Scheme) -> Result<(), Error> {
    let problem = if name.is_empty() {
        "must not be empty"
    } else if name.as_bytes().contains(&envelope::SEPARATOR) {
        "must not contain '$'"
    } else if name.as_bytes().contains(&envelope::MARKER) {
        "must not contain a nul byte"
    } else {
        return Ok(());
    };
    Err(Error::Configuration(format!(
        "Encryption scheme name {:?} {}. Scheme was: {:?}",
        name, problem, scheme
    )))
}

fn json_type(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
