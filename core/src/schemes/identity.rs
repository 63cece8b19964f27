use crate::{
    error::{Error, Result},
    schemes::Scheme,
};
use bytes::Bytes;

/// Scheme that stores values unchanged, but still framed in an envelope.
/// Useful for tests, and for staging a rollout before keys are provisioned.
#[derive(Clone, Copy, Debug, Default)]
pub struct IdentityScheme;

impl Scheme for IdentityScheme {
    fn encrypt(&self, plaintext: &[u8]) -> Result<Bytes, Error> {
        Ok(Bytes::copy_from_slice(plaintext))
    }

    fn decrypt(&self, ciphertext: &[u8]) -> Result<Bytes, Error> {
        Ok(Bytes::copy_from_slice(ciphertext))
    }
}
