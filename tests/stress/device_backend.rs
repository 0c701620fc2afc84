//! Edge cases for the entropy device backend: missing nodes, short reads
//! and fallback order.

use std::io::Write;
use std::path::PathBuf;

use secure_random::{Backend, RandomConfig, RandomError, SecureRandom};

fn device_only(path: PathBuf) -> SecureRandom {
    SecureRandom::with_config(&RandomConfig {
        backends: vec![Backend::Device],
        device_path: path,
        native_range: false,
    })
}

#[test]
fn edge_missing_device_is_unavailable() {
    let random = device_only(PathBuf::from("/nonexistent/urandom"));
    assert!(matches!(
        random.bytes(16),
        Err(RandomError::EntropyUnavailable(_))
    ));
    assert!(matches!(random.uuid(), Err(RandomError::EntropyUnavailable(_))));
}

#[test]
fn edge_short_device_is_partial_read() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&[0xab; 10]).unwrap();

    let random = device_only(file.path().to_path_buf());
    match random.bytes(16) {
        Err(RandomError::PartialRead { expected, actual }) => {
            assert_eq!(expected, 16);
            assert_eq!(actual, 10);
        }
        other => panic!("expected partial read, got {other:?}"),
    }
    assert!(matches!(random.uuid(), Err(RandomError::PartialRead { .. })));
}

#[test]
fn edge_file_backed_device_is_deterministic() {
    // Each call reopens the device, so a regular file replays from offset 0.
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&[0xff; 32]).unwrap();

    let random = device_only(file.path().to_path_buf());
    assert_eq!(random.hex(4).unwrap(), "ffffffff");
    assert_eq!(random.uuid().unwrap(), "ffffffff-ffff-4fff-bfff-ffffffffffff");
    // A file of 0xff bytes always yields the bound itself.
    assert_eq!(random.number(255).unwrap(), 255);
}

#[test]
fn edge_missing_device_falls_back_to_next_backend() {
    let random = SecureRandom::with_config(&RandomConfig {
        backends: vec![Backend::Device, Backend::Chacha],
        device_path: PathBuf::from("/nonexistent/urandom"),
        native_range: false,
    });
    assert_eq!(random.bytes(32).unwrap().len(), 32);
}

#[test]
fn edge_device_appears_later() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("urandom");
    let random = SecureRandom::with_config(&RandomConfig {
        backends: vec![Backend::Device],
        device_path: path.clone(),
        native_range: false,
    });

    assert!(random.bytes(4).is_err());
    std::fs::write(&path, [1u8, 2, 3, 4]).unwrap();
    assert_eq!(random.bytes(4).unwrap(), vec![1, 2, 3, 4]);
}

#[cfg(unix)]
#[test]
fn edge_real_urandom() {
    let random = device_only(PathBuf::from("/dev/urandom"));
    if random.chain().select().is_ok() {
        assert_eq!(random.bytes(64).unwrap().len(), 64);
        assert!(random.number(1_000_000).unwrap() <= 1_000_000);
    }
}
