//! Crate error handling

use chacha20poly1305::aead;

pub use std::result::Result;
use thiserror::Error as ThisError;

/// Error enum that rolls-up all error messages in this crate
#[derive(Debug, ThisError)]
pub enum Error {
    #[error("IO error: {0}")]
    IOError(std::io::Error),

    /// Registry or scheme settings are invalid. Raised while building an
    /// EncryptionManager, and expected to halt startup.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A tagged value names a scheme that is not registered
    #[error("Unknown encryption scheme: {0:?}")]
    UnknownScheme(String),

    /// Value can't be coerced into plaintext bytes
    #[error("Unsupported input type: {0}")]
    InputType(String),

    #[error("Encryption error: {0}")]
    EncryptionError(String),

    #[error("Decryption error: {0}")]
    DecryptionError(String),

    #[error("Missing environment setting: {0}")]
    MissingEnv(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Invalid key string: {0}")]
    KeyEncodingError(#[from] bech32::Error),

    #[error("Invalid hex string: {0}")]
    HexError(#[from] hex::FromHexError),

    #[error("Random generation error: {0}")]
    Random(String),

    #[error("(De)Serialization error {0}")]
    SerializationError(String),

    #[error("AEAD crypto error {0}")]
    AeadError(aead::Error),

    #[error("Invalid enum value {0}")]
    ParseError(#[from] strum::ParseError),
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::IOError(e)
    }
}

impl From<aead::Error> for Error {
    fn from(e: aead::Error) -> Error {
        Error::AeadError(e)
    }
}

impl From<getrandom::Error> for Error {
    fn from(_: getrandom::Error) -> Error {
        Error::Random(String::from("out of entropy"))
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::SerializationError(e.to_string())
    }
}
