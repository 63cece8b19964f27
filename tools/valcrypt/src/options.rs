use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Clone, Debug)]
#[command(name = "valcrypt", version)]
// derive version from Cargo.toml
pub struct Main {
    /// Verbose mode (-v, -vv, -vvv, etc.)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Scheme settings file (json). If not given, settings are read
    /// from the VALUE_CRYPT_SCHEMES environment variable.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Clone, Debug)]
pub enum Command {
    /// Encrypt file contents with the default scheme
    #[command(name = "enc")]
    Encrypt(EncryptOptions),

    /// Decrypt file contents. Unencrypted (legacy) files are copied unchanged
    #[command(name = "dec")]
    Decrypt(DecryptOptions),

    /// Show which scheme, if any, encrypted a file
    #[command(name = "inspect")]
    Inspect(InspectOptions),

    /// Generate a random key, printed as a key uri for settings
    #[command(name = "genkey")]
    GenKey,
}

#[derive(Args, Clone, Debug)]
pub struct EncryptOptions {
    /// Output file
    #[arg(short, long)]
    pub output: PathBuf,

    /// File to encrypt
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

#[derive(Args, Clone, Debug)]
pub struct DecryptOptions {
    /// Output file
    #[arg(short, long)]
    pub output: PathBuf,

    /// File to decrypt
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

#[derive(Args, Clone, Debug)]
pub struct InspectOptions {
    /// Encrypted file
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}
