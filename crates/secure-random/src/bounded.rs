//! Unbiased bounded integers by byte-mask rejection sampling.
//!
//! A candidate is drawn with the same byte length as the bound. Its first
//! byte is masked down to the bound's highest set bit, and the candidate is
//! accepted only if it does not exceed the bound when both are compared as
//! big-endian byte strings. Masking keeps the acceptance probability above
//! one half, so the expected number of draws stays below two for any bound.

use zeroize::Zeroize;

use crate::error::{RandomError, Result};

/// Minimal big-endian byte representation of `bound`.
///
/// Matches the hex-then-pack encoding: an odd number of hex digits is padded
/// with one leading zero digit, so the result is always whole bytes.
/// `0` encodes as a single zero byte.
pub fn bound_bytes(bound: u64) -> Vec<u8> {
    let raw = bound.to_be_bytes();
    let first = raw.iter().position(|&b| b != 0).unwrap_or(raw.len() - 1);
    raw[first..].to_vec()
}

/// Smear the highest set bit of `msb` into every lower position.
pub fn smear_mask(msb: u8) -> u8 {
    let mut mask = msb;
    mask |= mask >> 1;
    mask |= mask >> 2;
    mask |= mask >> 4;
    mask
}

/// Decode a big-endian byte string of at most eight bytes.
pub fn decode_be(bytes: &[u8]) -> u64 {
    bytes.iter().fold(0u64, |acc, &b| (acc << 8) | u64::from(b))
}

/// Draw a uniform integer in `[0, bound]`.
///
/// `draw(n)` must return exactly `n` fresh random bytes; any error it
/// returns aborts sampling and is propagated unchanged.
pub fn sample<F>(bound: u64, mut draw: F) -> Result<u64>
where
    F: FnMut(usize) -> Result<Vec<u8>>,
{
    let bin_bound = bound_bytes(bound);
    let mask = smear_mask(bin_bound[0]);
    let mut rejected = 0u32;

    loop {
        let mut candidate = draw(bin_bound.len())?;
        if candidate.len() != bin_bound.len() {
            return Err(RandomError::PartialRead {
                expected: bin_bound.len(),
                actual: candidate.len(),
            });
        }
        candidate[0] &= mask;

        if candidate.as_slice() <= bin_bound.as_slice() {
            let value = decode_be(&candidate);
            candidate.zeroize();
            if rejected > 0 {
                log::trace!("bounded draw accepted after {rejected} rejections");
            }
            return Ok(value);
        }

        rejected += 1;
        log::trace!("bounded draw rejected candidate #{rejected} for bound {bound}");
        candidate.zeroize();
    }
}
