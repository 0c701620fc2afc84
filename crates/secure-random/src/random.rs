//! The `SecureRandom` generator.
//!
//! Every operation draws fresh bytes from the entropy chain. Nothing is
//! cached between calls, so one instance can be shared freely across
//! threads.

use zeroize::Zeroize;

use crate::bounded;
use crate::config::RandomConfig;
use crate::encoding::{self, Alphabet};
use crate::entropy::{EntropyChain, EntropyProvider, NativeRange};
use crate::error::{RandomError, Result};
use crate::uuid::{self, UUID_BYTES};

/// Length used when a caller asks for zero bytes.
pub const DEFAULT_LEN: usize = 16;

/// Map a signed length request to the byte count actually drawn.
///
/// Zero and negative requests become [`DEFAULT_LEN`]. Lengths above
/// [`MAX_LEN`](crate::entropy::MAX_LEN) are passed through and rejected by
/// the operation itself.
pub fn effective_len(requested: i64) -> usize {
    if requested <= 0 {
        DEFAULT_LEN
    } else {
        usize::try_from(requested).unwrap_or(usize::MAX)
    }
}

fn or_default(len: usize) -> usize {
    if len == 0 {
        DEFAULT_LEN
    } else {
        len
    }
}

/// Secure random value generator.
///
/// ```no_run
/// use secure_random::SecureRandom;
///
/// let random = SecureRandom::new();
/// let token = random.base62(24)?;
/// let id = random.uuid()?;
/// let pin = random.number(9999)?;
/// # Ok::<(), secure_random::RandomError>(())
/// ```
#[derive(Debug)]
pub struct SecureRandom {
    chain: EntropyChain,
    native_range: bool,
}

impl SecureRandom {
    /// Generator over the default backend chain.
    pub fn new() -> Self {
        Self::with_config(&RandomConfig::default())
    }

    /// Generator over the backends named in `config`.
    pub fn with_config(config: &RandomConfig) -> Self {
        Self {
            chain: config.build_chain(),
            native_range: config.native_range,
        }
    }

    /// Generator over caller-supplied providers, in priority order.
    ///
    /// Native bounded-integer primitives are used when a provider offers one.
    pub fn with_providers(providers: Vec<Box<dyn EntropyProvider>>) -> Self {
        Self {
            chain: EntropyChain::new(providers),
            native_range: true,
        }
    }

    /// Disable or enable native bounded-integer primitives.
    pub fn native_range(mut self, enabled: bool) -> Self {
        self.native_range = enabled;
        self
    }

    /// The underlying backend chain.
    pub fn chain(&self) -> &EntropyChain {
        &self.chain
    }

    /// Random binary string of exactly `len` bytes (16 when `len` is 0).
    pub fn bytes(&self, len: usize) -> Result<Vec<u8>> {
        self.chain.bytes(or_default(len))
    }

    /// Random lowercase hex string, two characters per byte.
    pub fn hex(&self, len: usize) -> Result<String> {
        let mut raw = self.bytes(len)?;
        let out = encoding::to_hex(&raw);
        raw.zeroize();
        Ok(out)
    }

    /// Random standard base64 string over `len` bytes.
    pub fn base64(&self, len: usize) -> Result<String> {
        let mut raw = self.bytes(len)?;
        let out = encoding::to_base64(&raw);
        raw.zeroize();
        Ok(out)
    }

    /// Random URL-safe base64 string.
    ///
    /// The standard base64 text of `len` bytes is itself base64-encoded and
    /// then rewritten with `-` and `_` in place of `+` and `/`, so `len = 16`
    /// gives 32 characters. Trailing `=` is kept only when `padding` is set.
    pub fn base64_safe(&self, len: usize, padding: bool) -> Result<String> {
        let mut inner = self.base64(len)?;
        let mut encoded = encoding::to_base64(inner.as_bytes());
        let out = encoding::to_url_safe(&encoded, padding);
        inner.zeroize();
        encoded.zeroize();
        Ok(out)
    }

    /// Random base58 string of `len` symbols.
    pub fn base58(&self, len: usize) -> Result<String> {
        self.encode_alphabet(&Alphabet::base58(), len)
    }

    /// Random base62 string of `len` symbols.
    pub fn base62(&self, len: usize) -> Result<String> {
        self.encode_alphabet(&Alphabet::base62(), len)
    }

    /// Random string of `len` symbols over the first `base` symbols of
    /// `alphabet`.
    pub fn base(&self, alphabet: &str, base: usize, len: usize) -> Result<String> {
        self.encode_alphabet(&Alphabet::new(alphabet, base)?, len)
    }

    fn encode_alphabet(&self, alphabet: &Alphabet, len: usize) -> Result<String> {
        let mut raw = self.bytes(len)?;
        let out = alphabet.encode(&raw, |bound| self.number(bound as i64));
        raw.zeroize();
        out
    }

    /// Random integer `v` with `0 <= v <= upper_bound`.
    ///
    /// Fails with [`RandomError::InvalidBound`] before drawing anything if
    /// `upper_bound <= 0`. A backend primitive that samples `[0, bound)` is
    /// shifted up by one, giving `[1, bound]` on that path.
    pub fn number(&self, upper_bound: i64) -> Result<u64> {
        if upper_bound <= 0 {
            return Err(RandomError::InvalidBound(upper_bound));
        }
        let bound = upper_bound as u64;

        if self.native_range {
            if let Some(drawn) = self.chain.native_range(bound) {
                return Ok(match drawn? {
                    NativeRange::Inclusive(v) => v,
                    NativeRange::Exclusive(v) => v + 1,
                });
            }
        }

        bounded::sample(bound, |n| self.chain.bytes(n))
    }

    /// Random version 4 UUID.
    pub fn uuid(&self) -> Result<String> {
        let mut raw = self.chain.bytes(UUID_BYTES)?;
        let mut fields = [0u8; UUID_BYTES];
        fields.copy_from_slice(&raw);
        let out = uuid::format_v4(&fields);
        raw.zeroize();
        fields.zeroize();
        Ok(out)
    }
}

impl Default for SecureRandom {
    fn default() -> Self {
        Self::new()
    }
}
