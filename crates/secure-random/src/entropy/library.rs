//! Library CSPRNG backend.
//!
//! Backed by `rand::thread_rng()`, a ChaCha-based generator seeded from and
//! periodically reseeded by the OS.

use rand::{Rng, RngCore};

use super::{zeroed_buffer, EntropyProvider, NativeRange};
use crate::error::{RandomError, Result};

/// The `rand` crate's thread-local CSPRNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct LibraryProvider;

impl EntropyProvider for LibraryProvider {
    fn name(&self) -> &str {
        "library"
    }

    fn is_available(&self) -> bool {
        true
    }

    fn try_get_bytes(&self, len: usize) -> Result<Vec<u8>> {
        let mut buf = zeroed_buffer(len)?;
        rand::thread_rng()
            .try_fill_bytes(&mut buf)
            .map_err(|e| RandomError::EntropyUnavailable(format!("thread rng failed: {e}")))?;
        Ok(buf)
    }

    /// Uniform draw from `[0, bound)`.
    fn native_range(&self, bound: u64) -> Option<Result<NativeRange>> {
        if bound == 0 {
            return Some(Err(RandomError::InvalidBound(0)));
        }
        Some(Ok(NativeRange::Exclusive(
            rand::thread_rng().gen_range(0..bound),
        )))
    }
}
