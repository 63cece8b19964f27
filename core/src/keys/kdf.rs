//! Key derivation for passphrase-based key sources

use crate::keys::{SchemeKey, KEYBYTES};
use sha2::Sha256;
use zeroize::Zeroize;

/// Number of rounds for key generation.
/// More rounds takes longer for an attacker to brute-force guess any password.
/// ROUNDS may not change after deployment, or previously stored values
/// become unreadable.
const ROUNDS: u32 = 20000;

/// This randomly-generated context is unique to this application,
/// and must remain constant for the same reason as ROUNDS.
const CONTEXT: &str = "Qv]4z#t^L8n!cW@e0%Hk;R7p{m+Yd~2s&Fj)Ux9B:aG<5h";

/// Derive a key from a passphrase.
/// Uses PBKDF2+HMAC+SHA256 (from [RustCrypto](https://github.com/RustCrypto/password-hashes)).
/// The salt can be any length; key sources use the scheme name.
pub fn key_from_pass(passphrase: &str, salt: &[u8]) -> SchemeKey {
    let mut derived = vec![0u8; KEYBYTES];
    let mut pass = String::from(CONTEXT);
    pass.push_str(passphrase);
    pbkdf2::pbkdf2_hmac::<Sha256>(pass.as_bytes(), salt, ROUNDS, &mut derived);
    pass.zeroize();
    SchemeKey::from(derived)
}
