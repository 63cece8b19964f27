//! Scheme keys and the sources they are loaded from.
//!
//! Built-in schemes are configured with a key uri:
//!
//! - `env:` - passphrase in the environment variable `VALUE_CRYPT_PASSWORD`
//! - `env:VARNAME` - passphrase in the environment variable `VARNAME`
//! - `env://VARNAME` - alternate syntax
//! - `hex:<64 hex digits>` - literal 32-byte key
//! - `bech32:sk1...` - literal 32-byte key, bech32-encoded (see `valcrypt genkey`)
//!
//! Passphrases are stretched into keys with PBKDF2, salted with the scheme name,
//! so the same passphrase yields a different key for each scheme.
//! Generating, storing and rotating keys is left to the application.

pub mod kdf;

use crate::{
    error::{Error, Result},
    rand,
    util::{getenv, FromBech32, ToBech32},
};
use std::fmt;
use url::Url;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Number of bytes in keys for the built-in schemes
pub const KEYBYTES: usize = 32;
/// Default variable name to be used if var not specified in the key uri
pub const ENV_VAR_NAME: &str = "VALUE_CRYPT_PASSWORD";

/// Raw key material. Cleared from memory on drop.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SchemeKey(Vec<u8>);

/// Implementation of Debug that doesn't print key to prevent accidental leaks via logging
impl fmt::Debug for SchemeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SchemeKey({} bytes)", self.0.len())
    }
}

impl SchemeKey {
    /// Copy key material from the slice
    pub fn from_slice(key: &[u8]) -> Self {
        SchemeKey(key.to_vec())
    }

    /// Generate new random key using the platform CSRNG
    pub fn generate() -> Result<Self, Error> {
        let mut key = vec![0u8; KEYBYTES];
        rand::fill_buf(&mut key)?;
        Ok(SchemeKey(key))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Render the key as a `bech32:` key uri, suitable for settings
    pub fn to_uri(&self) -> Result<String, Error> {
        Ok(format!("{}:{}", BECH32_SCHEME, self.0.to_bech32()?))
    }
}

impl From<Vec<u8>> for SchemeKey {
    fn from(key: Vec<u8>) -> Self {
        SchemeKey(key)
    }
}

const ENV_SCHEME: &str = "env";
const HEX_SCHEME: &str = "hex";
const BECH32_SCHEME: &str = "bech32";

/// Where a scheme's key comes from
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeySource {
    /// Passphrase held in the named environment variable
    Env(String),
    /// Key given directly in settings
    Literal(SchemeKey),
}

impl KeySource {
    /// Parse a key uri. Literal keys are decoded immediately;
    /// environment variables are not read until [`resolve`](#method.resolve).
    pub fn parse(uri: &str) -> Result<Self, Error> {
        let url = Url::parse(uri).map_err(|e| {
            Error::InvalidParameter(format!(
                "Invalid key uri. Should be 'env:VAR', 'hex:KEY' or 'bech32:KEY': {}",
                e
            ))
        })?;
        match url.scheme() {
            ENV_SCHEME => Ok(KeySource::Env(env_varname(&url))),
            HEX_SCHEME => literal(hex::decode(url.path())?),
            BECH32_SCHEME => literal(url.path().from_bech32()?),
            other => Err(Error::InvalidParameter(format!(
                "Unsupported key uri scheme '{}'",
                other
            ))),
        }
    }

    /// Produce the key. `salt` distinguishes keys derived from the same passphrase,
    /// and is ignored for literal keys.
    pub fn resolve(&self, salt: &str) -> Result<SchemeKey, Error> {
        match self {
            KeySource::Env(varname) => {
                let passphrase = getenv(varname)?;
                Ok(kdf::key_from_pass(&passphrase, salt.as_bytes()))
            }
            KeySource::Literal(key) => Ok(key.clone()),
        }
    }
}

fn literal(key: Vec<u8>) -> Result<KeySource, Error> {
    if key.len() != KEYBYTES {
        return Err(Error::InvalidParameter(format!(
            "Literal key must be {} bytes, got {}",
            KEYBYTES,
            key.len()
        )));
    }
    Ok(KeySource::Literal(SchemeKey::from(key)))
}

/// lookup environment variable name from the uri
fn env_varname(url: &Url) -> String {
    match url.host_str() {
        // "env://foo" -> (host:Some("foo"), path: "")
        // "env://foo/bar" -> (host:Some("foo"), path:"/bar")
        Some(host) => host,
        None => {
            if !url.path().is_empty() {
                // (alt syntax) "env:foo" -> (host:None, path:"foo")
                url.path()
            } else {
                // "env:" - use default variable name
                ENV_VAR_NAME
            }
        }
    }
    .to_string()
}
