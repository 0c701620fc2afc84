//! Entropy device node backend.
//!
//! Reads straight from a character device such as `/dev/urandom`.
//! `std::fs::File` does no userspace buffering, so every read goes to the
//! kernel and no entropy is left behind in a buffer between calls.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use super::{reserve_buffer, EntropyProvider};
use crate::error::{RandomError, Result};

/// Default entropy device.
pub const DEFAULT_DEVICE: &str = "/dev/urandom";

/// Reads random bytes from a device node.
#[derive(Debug, Clone)]
pub struct DeviceProvider {
    path: PathBuf,
}

impl DeviceProvider {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for DeviceProvider {
    fn default() -> Self {
        Self::new(DEFAULT_DEVICE)
    }
}

impl EntropyProvider for DeviceProvider {
    fn name(&self) -> &str {
        "device"
    }

    fn is_available(&self) -> bool {
        self.path.exists()
    }

    /// A single bounded read; a short device yields a short buffer.
    fn try_get_bytes(&self, len: usize) -> Result<Vec<u8>> {
        let mut buf = reserve_buffer(len)?;
        let file = File::open(&self.path).map_err(|e| {
            RandomError::EntropyUnavailable(format!("{}: {e}", self.path.display()))
        })?;

        file.take(len as u64)
            .read_to_end(&mut buf)
            .map_err(|e| {
                RandomError::EntropyUnavailable(format!("{}: {e}", self.path.display()))
            })?;
        Ok(buf)
    }
}
