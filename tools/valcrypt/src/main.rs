//!
//! Value encryption using value-crypt schemes
//!
//! # Syntax:
//!
//! ```text
//!  # Encrypt file
//!  $ valcrypt [ -c SETTINGS ] enc -o OUT FILE
//!
//!  # Decrypt file
//!  $ valcrypt [ -c SETTINGS ] dec -o OUT FILE
//!
//!  # Show which scheme encrypted a file
//!  $ valcrypt [ -c SETTINGS ] inspect FILE
//!
//!  # Generate a key uri
//!  $ valcrypt genkey
//! ```
//!
//! # Settings
//!
//! Schemes are read from the json file given with `-c`, or from the
//! `VALUE_CRYPT_SCHEMES` environment variable:
//!
//! ```text
//! [ { "name": "xc1", "kind": "xchacha20", "key": "env:XC1_PASSWORD" },
//!   { "name": "aes", "kind": "aes", "key": "bech32:sk1..." } ]
//! ```
//!
//! The first scheme is used for encryption. Any listed scheme can decrypt.
//! With no schemes, files are copied unchanged.
//!
//! Log verbosity is set with `-v` (repeatable), or with `RUST_LOG`.
//!

use clap::Parser;
mod options;
use options::{
    Command::{Decrypt, Encrypt, GenKey, Inspect},
    DecryptOptions, EncryptOptions, InspectOptions, Main,
};
use std::{fs, path::Path};
use thiserror::Error as ThisError;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;
use value_crypt::{envelope, keys::SchemeKey, EncryptionManager, EncryptionSettings, Envelope};

fn main() {
    let args = Main::parse();
    init_logging(args.verbose);
    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    // ignore failure; only happens if a subscriber is already installed
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(args: &Main) -> Result<(), Error> {
    let config = args.config.as_deref();
    match &args.command {
        Encrypt(opt) => encrypt_file(&load_manager(config)?, opt),
        Decrypt(opt) => decrypt_file(&load_manager(config)?, opt),
        Inspect(opt) => {
            println!("{}", inspect_file(&load_manager(config)?, opt)?);
            Ok(())
        }
        GenKey => {
            println!("{}", SchemeKey::generate()?.to_uri()?);
            Ok(())
        }
    }
}

#[derive(Debug, ThisError)]
pub(crate) enum Error {
    #[error("{0}")]
    IOError(std::io::Error),

    #[error("{0}")]
    LibError(#[from] value_crypt::error::Error),
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::IOError(e)
    }
}

/// Build the registry from the settings file, or from the environment
pub(crate) fn load_manager(config: Option<&Path>) -> Result<EncryptionManager, Error> {
    let settings = match config {
        Some(path) => {
            debug!(path = %path.display(), "loading settings");
            EncryptionSettings::from_file(path)?
        }
        None => EncryptionSettings::from_env()?,
    };
    let manager = EncryptionManager::from_settings(&settings)?;
    if manager.is_empty() {
        warn!("no encryption schemes configured, data will not be encrypted");
    }
    Ok(manager)
}

/// Encrypt file.
pub(crate) fn encrypt_file(manager: &EncryptionManager, opt: &EncryptOptions) -> Result<(), Error> {
    let data = fs::read(&opt.file)?;
    let sealed = manager.encrypt(&data)?;
    fs::write(&opt.output, &sealed)?;
    info!(
        scheme = manager.default_scheme().unwrap_or("<none>"),
        bytes = sealed.len(),
        "encrypted {}",
        opt.file.display()
    );
    Ok(())
}

/// Decrypt file
pub(crate) fn decrypt_file(manager: &EncryptionManager, opt: &DecryptOptions) -> Result<(), Error> {
    let data = fs::read(&opt.file)?;
    let plain = manager.decrypt(&data)?;
    fs::write(&opt.output, &plain)?;
    info!(bytes = plain.len(), "decrypted {}", opt.file.display());
    Ok(())
}

/// Describe the file's envelope, without decrypting it
pub(crate) fn inspect_file(manager: &EncryptionManager, opt: &InspectOptions) -> Result<String, Error> {
    let data = fs::read(&opt.file)?;
    Ok(match Envelope::parse(&data) {
        Some(env) => format!(
            "encrypted with scheme {:?}{}, {} bytes of ciphertext",
            env.scheme_name(),
            if manager.get(env.scheme).is_some() {
                ""
            } else {
                " (not registered)"
            },
            env.ciphertext.len()
        ),
        None if envelope::is_marked(&data) => {
            format!("malformed envelope, read as plaintext ({} bytes)", data.len())
        }
        None => format!("not encrypted ({} bytes)", data.len()),
    })
}

#[cfg(test)]
mod test;
