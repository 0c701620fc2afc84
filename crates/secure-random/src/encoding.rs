//! Text encodings for random byte strings.
//!
//! Hex and base64 go through the `hex` and `base64` codecs. The alphabet
//! encoder maps each byte to one symbol; digits that land outside the
//! alphabet are replaced by an unbiased bounded draw supplied by the caller.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::entropy::{check_len, MAX_LEN};
use crate::error::{RandomError, Result};

/// Bitcoin-style base58 alphabet. Excludes `0`, `O`, `I` and `l`.
pub const BASE58_ALPHABET: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Alphanumeric base62 alphabet.
pub const BASE62_ALPHABET: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Every raw byte is reduced modulo this value before the range check,
/// independent of the alphabet's base.
pub const DIGIT_MODULUS: u8 = 64;

/// Lowercase hex, two digits per byte.
pub fn to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Standard padded base64.
pub fn to_base64(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Rewrite standard base64 into the URL-safe form.
///
/// The steps run in a fixed order: transliterate `+` to `-` and `/` to `_`,
/// drop anything outside `[A-Za-z0-9_=-]`, then trim trailing `=` unless
/// `padding` is set.
pub fn to_url_safe(encoded: &str, padding: bool) -> String {
    let stripped: String = encoded
        .chars()
        .map(|c| match c {
            '+' => '-',
            '/' => '_',
            other => other,
        })
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '=' | '-'))
        .collect();

    if padding {
        stripped
    } else {
        stripped.trim_end_matches('=').to_string()
    }
}

/// An ordered set of digit symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
    base: usize,
}

impl Alphabet {
    /// Use the first `base` symbols of `alphabet` as digits `0..base`.
    ///
    /// Symbol uniqueness is the caller's responsibility. `base` must be at
    /// least 2 and no larger than the number of symbols.
    pub fn new(alphabet: &str, base: usize) -> Result<Self> {
        let symbols: Vec<char> = alphabet.chars().collect();
        if base < 2 {
            return Err(RandomError::InvalidAlphabet(format!(
                "base must be at least 2, got {base}"
            )));
        }
        if base > symbols.len() {
            return Err(RandomError::InvalidAlphabet(format!(
                "base {base} exceeds alphabet of {} symbols",
                symbols.len()
            )));
        }
        Ok(Self { symbols, base })
    }

    /// The base58 alphabet.
    pub fn base58() -> Self {
        Self {
            symbols: BASE58_ALPHABET.chars().collect(),
            base: 58,
        }
    }

    /// The base62 alphabet.
    pub fn base62() -> Self {
        Self {
            symbols: BASE62_ALPHABET.chars().collect(),
            base: 62,
        }
    }

    pub fn base(&self) -> usize {
        self.base
    }

    /// Whether `c` is one of the digit symbols.
    pub fn contains(&self, c: char) -> bool {
        self.symbols[..self.base].contains(&c)
    }

    /// Encode one symbol per input byte.
    ///
    /// Each byte is reduced modulo [`DIGIT_MODULUS`]. When the result is not
    /// a valid digit, `fallback(base - 1)` supplies the index instead.
    pub fn encode<F>(&self, bytes: &[u8], mut fallback: F) -> Result<String>
    where
        F: FnMut(u64) -> Result<u64>,
    {
        check_len(bytes.len())?;
        let mut out = String::new();
        out.try_reserve_exact(bytes.len())
            .map_err(|_| RandomError::LengthTooLarge {
                requested: bytes.len(),
                max: MAX_LEN,
            })?;
        for &byte in bytes {
            let mut idx = usize::from(byte % DIGIT_MODULUS);
            if idx >= self.base {
                idx = fallback((self.base - 1) as u64)? as usize;
            }
            let symbol = self.symbols.get(idx).copied().ok_or_else(|| {
                RandomError::InvalidAlphabet(format!("digit {idx} outside alphabet"))
            })?;
            out.push(symbol);
        }
        Ok(out)
    }
}
