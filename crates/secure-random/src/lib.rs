//! SecureRandom: secure random values for keys, tokens and identifiers.
//!
//! Provides unbiased random output in several encodings (raw bytes, hex,
//! base64, URL-safe base64, base58, base62, bounded integers, UUIDv4) on
//! top of an ordered chain of OS and library CSPRNG backends.

pub mod bounded;
pub mod config;
pub mod encoding;
pub mod entropy;
pub mod error;
pub mod random;
pub mod uuid;

// Re-export primary types
pub use config::RandomConfig;
pub use encoding::{Alphabet, BASE58_ALPHABET, BASE62_ALPHABET};
pub use entropy::{Backend, EntropyChain, EntropyProvider, NativeRange, MAX_LEN};
pub use error::{RandomError, Result};
pub use random::{effective_len, SecureRandom, DEFAULT_LEN};
