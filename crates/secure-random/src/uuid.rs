//! Version 4 UUID assembly.
//!
//! The 16 random bytes are read as six big-endian fields of 32, 16, 16, 16,
//! 16 and 32 bits. The version nibble is forced to `4` and the top two bits
//! of the clock-seq field to `10` (RFC 4122 variant).

/// Number of random bytes behind one UUID.
pub const UUID_BYTES: usize = 16;

/// Format 16 random bytes as `xxxxxxxx-xxxx-4xxx-yxxx-xxxxxxxxxxxx`.
pub fn format_v4(bytes: &[u8; UUID_BYTES]) -> String {
    let a = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    let b = u16::from_be_bytes([bytes[4], bytes[5]]);
    let c = u16::from_be_bytes([bytes[6], bytes[7]]);
    let d = u16::from_be_bytes([bytes[8], bytes[9]]);
    let e = u16::from_be_bytes([bytes[10], bytes[11]]);
    let f = u32::from_be_bytes([bytes[12], bytes[13], bytes[14], bytes[15]]);

    let c = (c & 0x0fff) | 0x4000;
    let d = (d & 0x3fff) | 0x8000;

    format!("{a:08x}-{b:04x}-{c:04x}-{d:04x}-{e:04x}{f:08x}")
}
