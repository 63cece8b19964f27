//! Scheme settings, as loaded by the application at startup.
//!
//! Settings are an ordered list; the first scheme listed becomes the default
//! used for all new encryptions.
//!
//! ```json
//! { "schemes": [
//!     { "name": "xc1", "kind": "xchacha20", "key": "env:XC1_PASSWORD" },
//!     { "name": "aes", "kind": "aes", "key": "hex:000102...1f" }
//! ] }
//! ```
//!
//! A bare list (`[ {...}, {...} ]`) is accepted too.

use crate::{
    error::{Error, Result},
    keys::KeySource,
    schemes::{Scheme, SchemeKind},
    util::getenv_opt,
};
use serde::Deserialize;
use std::{fmt, path::Path};

/// Environment variable holding settings json, read by [`EncryptionSettings::from_env`]
pub const SCHEMES_VAR: &str = "VALUE_CRYPT_SCHEMES";

/// Ordered scheme settings
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct EncryptionSettings {
    #[serde(default)]
    pub schemes: Vec<SchemeSetting>,
}

/// Settings for one named scheme
#[derive(Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SchemeSetting {
    /// Name recorded in every value encrypted by this scheme
    pub name: String,
    /// Scheme kind, as accepted by [`SchemeKind`]'s `FromStr`.
    /// Checked when the scheme is built, so errors can name the setting.
    pub kind: String,
    /// Key uri, see [`keys`](../keys/index.html). Required unless kind is `identity`.
    #[serde(default)]
    pub key: Option<String>,
}

/// Literal keys may appear in the key uri, so it is never printed.
impl fmt::Debug for SchemeSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchemeSetting")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("key", &self.key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SettingsRepr {
    List(Vec<SchemeSetting>),
    Full(EncryptionSettings),
}

impl EncryptionSettings {
    /// Parse settings from json
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(match serde_json::from_str::<SettingsRepr>(json)? {
            SettingsRepr::List(schemes) => EncryptionSettings { schemes },
            SettingsRepr::Full(settings) => settings,
        })
    }

    /// Load settings from a json file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load settings from json in the environment variable `VALUE_CRYPT_SCHEMES`.
    /// If the variable is undefined or blank, no schemes are configured.
    pub fn from_env() -> Result<Self, Error> {
        match getenv_opt(SCHEMES_VAR) {
            Some(json) => Self::from_json(&json),
            None => Ok(EncryptionSettings::default()),
        }
    }
}

impl SchemeSetting {
    pub fn new(name: &str, kind: SchemeKind, key: Option<&str>) -> Self {
        SchemeSetting {
            name: name.to_string(),
            kind: kind.to_string(),
            key: key.map(String::from),
        }
    }

    /// Parse the kind name
    pub fn kind(&self) -> Result<SchemeKind, Error> {
        self.kind
            .parse::<SchemeKind>()
            .map_err(|_| self.config_error(format!("unknown scheme kind {:?}", self.kind)))
    }

    /// Resolve the key (if any) and construct the scheme.
    /// Any failure is reported as a configuration error naming this scheme.
    pub fn build(&self) -> Result<Box<dyn Scheme>, Error> {
        let kind = self.kind()?;
        let key = match (&self.key, kind.needs_key()) {
            (Some(uri), true) => Some(
                KeySource::parse(uri)
                    .and_then(|src| src.resolve(&self.name))
                    .map_err(|e| self.config_error(e))?,
            ),
            (None, true) => {
                return Err(self.config_error(format!("{} scheme requires a key", kind)))
            }
            (Some(_), false) => {
                return Err(self.config_error(format!("{} scheme does not take a key", kind)))
            }
            (None, false) => None,
        };
        kind.build(key.as_ref())
            .map_err(|e| self.config_error(e))
    }

    fn config_error<E: fmt::Display>(&self, e: E) -> Error {
        Error::Configuration(format!("scheme {:?} ({}): {}", self.name, self.kind, e))
    }
}
