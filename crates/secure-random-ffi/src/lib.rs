//! SecureRandom C FFI bindings.
//!
//! Provides a C-compatible API for every SecureRandom operation: raw bytes,
//! hex, base64, URL-safe base64, base58, base62, custom alphabets, bounded
//! integers and UUIDs. Each call uses the default backend chain.
//!
//! # Memory contract
//!
//! - All `*mut c_char` output strings are heap-allocated via [`CString`] and
//!   **must** be freed by the caller using [`sr_free_string`].
//! - [`sr_bytes`] writes into a caller-owned buffer; nothing is allocated.
//! - The static string returned by [`sr_version`] must **not** be freed.
//!
//! # Error codes
//!
//! | Constant                  | Value | Meaning                              |
//! |---------------------------|-------|--------------------------------------|
//! | `SR_OK`                   | 0     | Success                              |
//! | `SR_ERR_NULL_PTR`         | -1    | A required pointer was null          |
//! | `SR_ERR_ENTROPY`          | -2    | No entropy backend available         |
//! | `SR_ERR_PARTIAL_READ`     | -3    | Backend returned too few bytes       |
//! | `SR_ERR_INVALID_BOUND`    | -4    | Bound passed to `sr_number` was <= 0 |
//! | `SR_ERR_INVALID_ARGUMENT` | -5    | Bad alphabet, UTF-8 or buffer size   |
//! | `SR_ERR_LENGTH`           | -6    | Length above the 16 MiB draw limit   |
//!
//! Length arguments are signed; zero and negative lengths mean 16.

use std::ffi::{CStr, CString};
use std::os::raw::c_char;

use secure_random::{effective_len, RandomError, SecureRandom};

// ── Error codes ───────────────────────────────────────────────────────────────

/// Success.
pub const SR_OK: i32 = 0;
/// A required pointer argument was null.
pub const SR_ERR_NULL_PTR: i32 = -1;
/// No entropy backend could be used.
pub const SR_ERR_ENTROPY: i32 = -2;
/// The entropy backend returned fewer bytes than requested.
pub const SR_ERR_PARTIAL_READ: i32 = -3;
/// `sr_number` was given a bound <= 0.
pub const SR_ERR_INVALID_BOUND: i32 = -4;
/// An argument was malformed (alphabet, UTF-8, buffer capacity).
pub const SR_ERR_INVALID_ARGUMENT: i32 = -5;
/// The requested length exceeds the per-draw limit.
pub const SR_ERR_LENGTH: i32 = -6;

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Map a [`RandomError`] to one of the `SR_ERR_*` constants.
fn map_error(e: &RandomError) -> i32 {
    match e {
        RandomError::EntropyUnavailable(_) | RandomError::Io(_) => SR_ERR_ENTROPY,
        RandomError::PartialRead { .. } => SR_ERR_PARTIAL_READ,
        RandomError::InvalidBound(_) => SR_ERR_INVALID_BOUND,
        RandomError::LengthTooLarge { .. } => SR_ERR_LENGTH,
        RandomError::InvalidAlphabet(_) | RandomError::Config(_) => SR_ERR_INVALID_ARGUMENT,
    }
}

/// Allocate a `CString` and write it into `*out`.
///
/// # Safety
///
/// `out` must be non-null.
unsafe fn write_string_out(s: String, out: *mut *mut c_char) -> i32 {
    match CString::new(s) {
        Ok(cs) => {
            *out = cs.into_raw();
            SR_OK
        }
        Err(_) => SR_ERR_INVALID_ARGUMENT,
    }
}

/// Run a string-producing operation and hand the result to C.
///
/// # Safety
///
/// `out` must be null (rejected) or valid for a pointer write.
unsafe fn string_call<F>(out: *mut *mut c_char, generate: F) -> i32
where
    F: FnOnce(&SecureRandom) -> secure_random::Result<String>,
{
    if out.is_null() {
        return SR_ERR_NULL_PTR;
    }
    match generate(&SecureRandom::new()) {
        Ok(s) => write_string_out(s, out),
        Err(e) => map_error(&e),
    }
}

// ── Version ───────────────────────────────────────────────────────────────────

/// Return the library version string as a null-terminated C string.
///
/// The caller **must not** free this pointer.
#[no_mangle]
pub extern "C" fn sr_version() -> *const c_char {
    // SAFETY: the literal contains no interior nul bytes and has static lifetime.
    static VERSION: &[u8] = b"0.1.0\0";
    VERSION.as_ptr() as *const c_char
}

// ── Raw bytes ─────────────────────────────────────────────────────────────────

/// Fill `buf` with random bytes.
///
/// # Parameters
///
/// - `len`    : bytes requested; `<= 0` means 16.
/// - `buf`    : caller-owned output buffer.
/// - `cap`    : capacity of `buf` in bytes.
/// - `len_out`: on success, receives the number of bytes written.
///
/// # Returns
///
/// `SR_OK` on success; `SR_ERR_INVALID_ARGUMENT` if `cap` is smaller than
/// the effective length; another `SR_ERR_*` on failure.
///
/// # Safety
///
/// `buf` must be valid for `cap` bytes of writes; `len_out` must be non-null.
#[no_mangle]
pub unsafe extern "C" fn sr_bytes(len: i64, buf: *mut u8, cap: usize, len_out: *mut usize) -> i32 {
    if buf.is_null() || len_out.is_null() {
        return SR_ERR_NULL_PTR;
    }
    let len = effective_len(len);
    if cap < len {
        return SR_ERR_INVALID_ARGUMENT;
    }

    match SecureRandom::new().bytes(len) {
        Ok(bytes) => {
            std::ptr::copy_nonoverlapping(bytes.as_ptr(), buf, bytes.len());
            *len_out = bytes.len();
            SR_OK
        }
        Err(e) => map_error(&e),
    }
}

// ── Encoded strings ───────────────────────────────────────────────────────────

/// Random lowercase hex string of `2 * len` characters.
///
/// # Safety
///
/// `out` must be non-null; free the result with [`sr_free_string`].
#[no_mangle]
pub unsafe extern "C" fn sr_hex(len: i64, out: *mut *mut c_char) -> i32 {
    string_call(out, |r| r.hex(effective_len(len)))
}

/// Random standard base64 string over `len` bytes.
///
/// # Safety
///
/// `out` must be non-null; free the result with [`sr_free_string`].
#[no_mangle]
pub unsafe extern "C" fn sr_base64(len: i64, out: *mut *mut c_char) -> i32 {
    string_call(out, |r| r.base64(effective_len(len)))
}

/// Random URL-safe base64 string; non-zero `padding` keeps trailing `=`.
///
/// # Safety
///
/// `out` must be non-null; free the result with [`sr_free_string`].
#[no_mangle]
pub unsafe extern "C" fn sr_base64_safe(
    len: i64,
    padding: libc::c_int,
    out: *mut *mut c_char,
) -> i32 {
    string_call(out, |r| r.base64_safe(effective_len(len), padding != 0))
}

/// Random base58 string of `len` symbols.
///
/// # Safety
///
/// `out` must be non-null; free the result with [`sr_free_string`].
#[no_mangle]
pub unsafe extern "C" fn sr_base58(len: i64, out: *mut *mut c_char) -> i32 {
    string_call(out, |r| r.base58(effective_len(len)))
}

/// Random base62 string of `len` symbols.
///
/// # Safety
///
/// `out` must be non-null; free the result with [`sr_free_string`].
#[no_mangle]
pub unsafe extern "C" fn sr_base62(len: i64, out: *mut *mut c_char) -> i32 {
    string_call(out, |r| r.base62(effective_len(len)))
}

/// Random string of `len` symbols over the first `base` symbols of
/// `alphabet` (UTF-8).
///
/// # Safety
///
/// `alphabet` must be a valid C string; `out` must be non-null.
#[no_mangle]
pub unsafe extern "C" fn sr_base(
    alphabet: *const c_char,
    base: usize,
    len: i64,
    out: *mut *mut c_char,
) -> i32 {
    if alphabet.is_null() {
        return SR_ERR_NULL_PTR;
    }
    let alphabet = match CStr::from_ptr(alphabet).to_str() {
        Ok(s) => s,
        Err(_) => return SR_ERR_INVALID_ARGUMENT,
    };
    string_call(out, |r| r.base(alphabet, base, effective_len(len)))
}

/// Random version 4 UUID string.
///
/// # Safety
///
/// `out` must be non-null; free the result with [`sr_free_string`].
#[no_mangle]
pub unsafe extern "C" fn sr_uuid(out: *mut *mut c_char) -> i32 {
    string_call(out, |r| r.uuid())
}

// ── Bounded integers ──────────────────────────────────────────────────────────

/// Random integer between 0 and `bound` inclusive.
///
/// # Safety
///
/// `out` must be non-null.
#[no_mangle]
pub unsafe extern "C" fn sr_number(bound: i64, out: *mut u64) -> i32 {
    if out.is_null() {
        return SR_ERR_NULL_PTR;
    }
    match SecureRandom::new().number(bound) {
        Ok(v) => {
            *out = v;
            SR_OK
        }
        Err(e) => map_error(&e),
    }
}

// ── Memory management ─────────────────────────────────────────────────────────

/// Free a string previously returned by this library.
///
/// Passing `NULL` is a no-op.
///
/// # Safety
///
/// `s` must be null or a pointer returned by an `sr_*` function that has not
/// already been freed.
#[no_mangle]
pub unsafe extern "C" fn sr_free_string(s: *mut c_char) {
    if !s.is_null() {
        drop(CString::from_raw(s));
    }
}
