//! ChaCha20 DRBG backend.
//!
//! A fresh `ChaCha20Rng` is keyed from OS entropy on every call and dropped
//! afterwards, so no generator state outlives a draw.

use rand::rngs::OsRng;
use rand_chacha::ChaCha20Rng;
use rand_core::{RngCore, SeedableRng};

use super::{zeroed_buffer, EntropyProvider};
use crate::error::{RandomError, Result};

/// ChaCha20 keyed per call from the OS.
#[derive(Debug, Default, Clone, Copy)]
pub struct ChachaProvider;

impl EntropyProvider for ChachaProvider {
    fn name(&self) -> &str {
        "chacha"
    }

    fn is_available(&self) -> bool {
        true
    }

    fn try_get_bytes(&self, len: usize) -> Result<Vec<u8>> {
        let mut buf = zeroed_buffer(len)?;
        let mut rng = ChaCha20Rng::from_rng(OsRng)
            .map_err(|e| RandomError::EntropyUnavailable(format!("chacha seeding failed: {e}")))?;
        rng.try_fill_bytes(&mut buf)
            .map_err(|e| RandomError::EntropyUnavailable(format!("chacha failed: {e}")))?;
        Ok(buf)
    }
}
