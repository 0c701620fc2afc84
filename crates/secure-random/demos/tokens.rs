//! Tokens: generate every kind of value SecureRandom offers.
//!
//! Run with:
//!   cargo run --example tokens -p secure-random

use secure_random::{RandomConfig, SecureRandom};

fn main() -> secure_random::Result<()> {
    // ── 1. Default backend chain ────────────────────────────────────────────
    //
    // The first available backend in the chain serves each call. The chain
    // is probed again on every call.
    let random = SecureRandom::new();
    println!("Backends:    {:?}", random.chain().names());
    println!();

    // ── 2. Encodings ────────────────────────────────────────────────────────
    println!("bytes(16):   {:?}", random.bytes(16)?);
    println!("hex(10):     {}", random.hex(10)?);
    println!("base64(12):  {}", random.base64(12)?);
    println!("base64Safe:  {}", random.base64_safe(16, false)?);
    println!("  padded:    {}", random.base64_safe(16, true)?);
    println!("base58(24):  {}", random.base58(24)?);
    println!("base62(16):  {}", random.base62(16)?);
    println!("base(hex):   {}", random.base("0123456789abcdef", 16, 8)?);
    println!();

    // ── 3. Bounded integers and identifiers ─────────────────────────────────
    println!("number(100): {}", random.number(100)?);
    println!("uuid():      {}", random.uuid()?);
    println!();

    // ── 4. Device-only chain ────────────────────────────────────────────────
    //
    // Restricting the chain to the entropy device forces the raw-read path
    // and, with native ranges off, the rejection-sampling path for number().
    let config = RandomConfig::from_json_str(r#"{ "backends": ["device"], "native_range": false }"#)?;
    let device_only = SecureRandom::with_config(&config);
    match device_only.number(1_000_000) {
        Ok(n) => println!("device number(1000000): {n}"),
        Err(e) => println!("device backend failed: {e}"),
    }

    Ok(())
}
