//! Platform CSPRNG syscall backend.
//!
//! Uses `getrandom`, which maps to `getrandom(2)` on Linux, `getentropy` on
//! macOS and the BSDs, and `BCryptGenRandom` on Windows.

use rand::rngs::{OsRng, StdRng};
use rand::{Rng, SeedableRng};

use super::{zeroed_buffer, EntropyProvider, NativeRange};
use crate::error::{RandomError, Result};

/// The operating system's CSPRNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemProvider;

impl EntropyProvider for SystemProvider {
    fn name(&self) -> &str {
        "system"
    }

    fn is_available(&self) -> bool {
        true
    }

    fn try_get_bytes(&self, len: usize) -> Result<Vec<u8>> {
        let mut buf = zeroed_buffer(len)?;
        getrandom::getrandom(&mut buf)
            .map_err(|e| RandomError::EntropyUnavailable(format!("getrandom failed: {e}")))?;
        Ok(buf)
    }

    /// Uniform draw from `[0, bound]`.
    ///
    /// A `StdRng` is seeded from `OsRng` for each call and sampled once, so
    /// a failing OS source surfaces as an error rather than a panic.
    fn native_range(&self, bound: u64) -> Option<Result<NativeRange>> {
        let drawn = StdRng::from_rng(OsRng)
            .map(|mut rng| NativeRange::Inclusive(rng.gen_range(0..=bound)))
            .map_err(|e| RandomError::EntropyUnavailable(format!("OS generator failed: {e}")));
        Some(drawn)
    }
}
