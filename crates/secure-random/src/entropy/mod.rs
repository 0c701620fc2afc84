//! Entropy sources and the ordered fallback chain.
//!
//! This module provides:
//! - The `EntropyProvider` capability trait implemented by every backend
//! - The four built-in backends: OS syscall, library CSPRNG, ChaCha20 DRBG
//!   and the entropy device node
//! - `EntropyChain`, which picks the first available backend on every call
//!
//! Availability is probed per call in chain order. No selection is cached,
//! so a backend that becomes usable later is picked up transparently. Once a
//! backend is chosen and fails, the call fails; the chain never cascades to
//! the next backend mid-call.

pub mod chacha;
pub mod device;
pub mod library;
pub mod system;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{RandomError, Result};

pub use chacha::ChachaProvider;
pub use device::DeviceProvider;
pub use library::LibraryProvider;
pub use system::SystemProvider;

/// Largest number of bytes a single draw may request (16 MiB).
pub const MAX_LEN: usize = 1 << 24;

/// Reject lengths above [`MAX_LEN`].
pub fn check_len(len: usize) -> Result<()> {
    if len > MAX_LEN {
        return Err(RandomError::LengthTooLarge {
            requested: len,
            max: MAX_LEN,
        });
    }
    Ok(())
}

/// Empty buffer with room for `len` bytes.
///
/// Allocation failure is returned as an error instead of aborting.
pub fn reserve_buffer(len: usize) -> Result<Vec<u8>> {
    check_len(len)?;
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|_| RandomError::LengthTooLarge {
            requested: len,
            max: MAX_LEN,
        })?;
    Ok(buf)
}

/// Zero-filled buffer of exactly `len` bytes, allocated fallibly.
pub fn zeroed_buffer(len: usize) -> Result<Vec<u8>> {
    let mut buf = reserve_buffer(len)?;
    buf.resize(len, 0);
    Ok(buf)
}

/// A value produced by a backend's native bounded-integer primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NativeRange {
    /// Drawn uniformly from `[0, bound]`.
    Inclusive(u64),
    /// Drawn uniformly from `[0, bound)`.
    Exclusive(u64),
}

/// A source of cryptographically secure random bytes.
///
/// Implementations must be safe to call from several threads at once.
pub trait EntropyProvider: Send + Sync {
    /// Short backend name used in log output and error messages.
    fn name(&self) -> &str;

    /// Cheap capability probe. Called before every draw.
    fn is_available(&self) -> bool;

    /// Draw `len` bytes. Returning fewer bytes than requested is reported
    /// by the chain as a partial read.
    fn try_get_bytes(&self, len: usize) -> Result<Vec<u8>>;

    /// Draw a uniform integer with the backend's own range primitive.
    ///
    /// `None` means the backend has no such primitive and the caller must
    /// fall back to rejection sampling over raw bytes.
    fn native_range(&self, _bound: u64) -> Option<Result<NativeRange>> {
        None
    }
}

/// Built-in backend kinds, in their default fallback order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Backend {
    /// The platform CSPRNG syscall (`getrandom(2)`, `BCryptGenRandom`, ...).
    System,
    /// The `rand` thread-local CSPRNG.
    Library,
    /// A ChaCha20 generator keyed from the OS on every call.
    Chacha,
    /// The entropy device node, read directly.
    Device,
}

impl Backend {
    /// The default fallback order.
    pub const DEFAULT_ORDER: [Backend; 4] = [
        Backend::System,
        Backend::Library,
        Backend::Chacha,
        Backend::Device,
    ];

    /// Instantiate the provider for this backend.
    pub fn provider(self, device_path: &Path) -> Box<dyn EntropyProvider> {
        match self {
            Backend::System => Box::new(SystemProvider),
            Backend::Library => Box::new(LibraryProvider),
            Backend::Chacha => Box::new(ChachaProvider),
            Backend::Device => Box::new(DeviceProvider::new(device_path)),
        }
    }

    /// Stable lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Backend::System => "system",
            Backend::Library => "library",
            Backend::Chacha => "chacha",
            Backend::Device => "device",
        }
    }
}

impl std::fmt::Display for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Backend {
    type Err = RandomError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "system" => Ok(Backend::System),
            "library" => Ok(Backend::Library),
            "chacha" => Ok(Backend::Chacha),
            "device" => Ok(Backend::Device),
            other => Err(RandomError::Config(format!("unknown backend: {other}"))),
        }
    }
}

/// Ordered list of entropy providers.
pub struct EntropyChain {
    providers: Vec<Box<dyn EntropyProvider>>,
}

impl EntropyChain {
    /// Build a chain from providers in priority order.
    pub fn new(providers: Vec<Box<dyn EntropyProvider>>) -> Self {
        Self { providers }
    }

    /// Number of configured providers.
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Whether the chain has no providers at all.
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Names of the configured providers, in order.
    pub fn names(&self) -> Vec<String> {
        self.providers.iter().map(|p| p.name().to_string()).collect()
    }

    /// Probe the chain and return the first available provider.
    pub fn select(&self) -> Result<&dyn EntropyProvider> {
        for provider in &self.providers {
            if provider.is_available() {
                return Ok(provider.as_ref());
            }
            log::warn!("entropy backend '{}' unavailable, skipping", provider.name());
        }
        Err(RandomError::EntropyUnavailable(
            "No random device available".to_string(),
        ))
    }

    /// Draw exactly `len` bytes from the first available provider.
    pub fn bytes(&self, len: usize) -> Result<Vec<u8>> {
        check_len(len)?;
        let provider = self.select()?;
        log::debug!("drawing {len} bytes from '{}' backend", provider.name());

        let buf = provider.try_get_bytes(len)?;
        if buf.len() != len {
            return Err(RandomError::PartialRead {
                expected: len,
                actual: buf.len(),
            });
        }
        Ok(buf)
    }

    /// Ask the available providers, in order, for a native bounded draw.
    ///
    /// Returns `None` when no available provider offers one.
    pub fn native_range(&self, bound: u64) -> Option<Result<NativeRange>> {
        self.providers
            .iter()
            .filter(|p| p.is_available())
            .find_map(|p| {
                let drawn = p.native_range(bound)?;
                log::debug!("bounded draw from '{}' native primitive", p.name());
                Some(drawn)
            })
    }
}

impl std::fmt::Debug for EntropyChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntropyChain")
            .field("providers", &self.names())
            .finish()
    }
}
