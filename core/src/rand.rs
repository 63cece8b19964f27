//! CSRNG based on platform (OS) CSRNG.
//!
//! Used for per-value nonce generation in the built-in schemes,
//! and for generating fresh scheme keys.
//!
use crate::error::{Error, Result};

/// Fill the buffer with random bytes
/// Currently implemented using `getrandom` crate, which uses
/// native OS/platform implementations.
pub fn fill_buf(buf: &mut [u8]) -> Result<(), Error> {
    getrandom::getrandom(buf)?;
    Ok(())
}
