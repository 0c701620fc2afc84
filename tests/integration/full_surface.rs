//! Integration tests: every public operation through the default chain.

use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use base64::Engine;
use secure_random::{
    effective_len, RandomError, SecureRandom, BASE58_ALPHABET, BASE62_ALPHABET,
};

fn is_uuid_v4(s: &str) -> bool {
    let groups: Vec<&str> = s.split('-').collect();
    if groups.len() != 5 {
        return false;
    }
    let lens = [8, 4, 4, 4, 12];
    for (group, &len) in groups.iter().zip(lens.iter()) {
        if group.len() != len || !group.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')) {
            return false;
        }
    }
    groups[2].starts_with('4') && matches!(groups[3].chars().next(), Some('8' | '9' | 'a' | 'b'))
}

#[test]
fn bytes_length_is_exact() {
    let random = SecureRandom::new();
    for len in 1..=64 {
        assert_eq!(random.bytes(len).unwrap().len(), len);
    }
}

#[test]
fn non_positive_lengths_become_default() {
    let random = SecureRandom::new();
    assert_eq!(random.bytes(effective_len(0)).unwrap().len(), 16);
    assert_eq!(random.bytes(effective_len(-1)).unwrap().len(), 16);
    assert_eq!(random.bytes(0).unwrap().len(), 16);
    assert_eq!(random.hex(0).unwrap().len(), 32);
}

#[test]
fn hex_is_lowercase_and_decodes() {
    let random = SecureRandom::new();
    let out = random.hex(10).unwrap();
    assert_eq!(out.len(), 20);
    assert!(out.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')));
    assert_eq!(hex::decode(&out).unwrap().len(), 10);

    for n in [1, 7, 16, 33] {
        assert_eq!(hex::decode(random.hex(n).unwrap()).unwrap().len(), n);
    }
}

#[test]
fn base64_lengths() {
    let random = SecureRandom::new();
    assert_eq!(random.base64(12).unwrap().len(), 16);
    assert_eq!(random.base64(16).unwrap().len(), 24);
    assert_eq!(random.base64(0).unwrap().len(), 24);
    for n in [1, 2, 3, 10, 31] {
        let out = random.base64(n).unwrap();
        assert_eq!(out.len(), n.div_ceil(3) * 4);
        assert_eq!(STANDARD.decode(&out).unwrap().len(), n);
    }
}

#[test]
fn base64_safe_without_padding() {
    let random = SecureRandom::new();
    for _ in 0..200 {
        let out = random.base64_safe(12, false).unwrap();
        assert!(!out.contains('+') && !out.contains('/') && !out.ends_with('='));
        assert_eq!(out.len(), 22);

        // The URL-safe text wraps the standard base64 text of the bytes.
        let inner = URL_SAFE_NO_PAD.decode(&out).unwrap();
        assert_eq!(inner.len(), 16);
        assert_eq!(STANDARD.decode(&inner).unwrap().len(), 12);

        let unpadded = random.base64_safe(16, false).unwrap();
        assert!(!unpadded.ends_with('='));
        assert_eq!(unpadded.len(), 32);
    }
}

#[test]
fn base64_safe_with_padding_keeps_equals() {
    let random = SecureRandom::new();
    let out = random.base64_safe(12, true).unwrap();
    assert_eq!(out.len(), 24);
    assert!(out.ends_with("=="));
    assert!(out
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '=')));

    // 16 bytes encode to 24 characters, whose own encoding needs no padding.
    assert_eq!(random.base64_safe(16, true).unwrap().len(), 32);
}

#[test]
fn base58_and_base62_alphabets() {
    let random = SecureRandom::new();
    for _ in 0..200 {
        let b58 = random.base58(16).unwrap();
        assert_eq!(b58.chars().count(), 16);
        assert!(b58.chars().all(|c| BASE58_ALPHABET.contains(c)));
        assert!(!b58.contains(['0', 'O', 'I', 'l']));
        bs58::decode(&b58).into_vec().expect("valid base58 text");

        let b62 = random.base62(16).unwrap();
        assert_eq!(b62.chars().count(), 16);
        assert!(b62.chars().all(|c| BASE62_ALPHABET.contains(c)));
    }
    assert_eq!(random.base58(24).unwrap().len(), 24);
    assert_eq!(random.base58(0).unwrap().len(), 16);
}

#[test]
fn number_bounds() {
    let random = SecureRandom::new();
    let sampling = SecureRandom::new().native_range(false);
    for bound in [1i64, 15, 100, 256, 300, 1 << 33, i64::MAX] {
        for _ in 0..50 {
            assert!(random.number(bound).unwrap() <= bound as u64);
            assert!(sampling.number(bound).unwrap() <= bound as u64);
        }
    }
}

#[test]
fn number_rejects_non_positive() {
    let random = SecureRandom::new();
    assert!(matches!(random.number(0), Err(RandomError::InvalidBound(0))));
    assert!(matches!(random.number(-5), Err(RandomError::InvalidBound(-5))));
}

#[test]
fn uuid_shape() {
    let random = SecureRandom::new();
    let mut seen = std::collections::HashSet::new();
    for _ in 0..1000 {
        let id = random.uuid().unwrap();
        assert!(is_uuid_v4(&id), "bad uuid: {id}");
        assert!(seen.insert(id));
    }
}

#[test]
fn custom_alphabet() {
    let random = SecureRandom::new();
    let out = random.base("01", 2, 64).unwrap();
    assert_eq!(out.len(), 64);
    assert!(out.chars().all(|c| c == '0' || c == '1'));
}
