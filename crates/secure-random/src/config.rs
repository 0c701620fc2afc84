//! Configuration for the entropy chain.
//!
//! Configs are plain JSON documents, e.g.
//!
//! ```json
//! { "backends": ["system", "device"], "device_path": "/dev/urandom", "native_range": true }
//! ```
//!
//! Missing fields take their defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::entropy::device::DEFAULT_DEVICE;
use crate::entropy::{Backend, EntropyChain};
use crate::error::{RandomError, Result};

/// Settings for a [`SecureRandom`](crate::SecureRandom) instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RandomConfig {
    /// Backends in fallback order.
    pub backends: Vec<Backend>,
    /// Entropy device read by [`Backend::Device`].
    pub device_path: PathBuf,
    /// Let `number()` use the backends' native bounded-integer primitives.
    pub native_range: bool,
}

impl Default for RandomConfig {
    fn default() -> Self {
        Self {
            backends: Backend::DEFAULT_ORDER.to_vec(),
            device_path: PathBuf::from(DEFAULT_DEVICE),
            native_range: true,
        }
    }
}

impl RandomConfig {
    /// Parse a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| RandomError::Config(format!("invalid config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a JSON config file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| RandomError::Config(format!("serialize config: {e}")))
    }

    /// Only duplicate backends are rejected. An empty chain is valid and
    /// fails every draw with `EntropyUnavailable`.
    pub fn validate(&self) -> Result<()> {
        for (i, backend) in self.backends.iter().enumerate() {
            if self.backends[..i].contains(backend) {
                return Err(RandomError::Config(format!(
                    "backend '{backend}' listed more than once"
                )));
            }
        }
        Ok(())
    }

    /// Instantiate the configured chain.
    pub fn build_chain(&self) -> EntropyChain {
        EntropyChain::new(
            self.backends
                .iter()
                .map(|b| b.provider(&self.device_path))
                .collect(),
        )
    }
}
