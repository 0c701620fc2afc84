//! Stress test: one shared generator used from many threads at once.

use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use secure_random::{Backend, RandomConfig, SecureRandom};

const THREADS: usize = 8;
const PER_THREAD: usize = 500;

#[test]
fn stress_concurrent_uuids_unique() {
    let random = Arc::new(SecureRandom::new());

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let random = Arc::clone(&random);
            thread::spawn(move || {
                (0..PER_THREAD)
                    .map(|_| random.uuid().expect("uuid should succeed"))
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut seen = HashSet::new();
    for handle in handles {
        for id in handle.join().expect("thread panicked") {
            assert!(seen.insert(id.clone()), "duplicate uuid {id}");
        }
    }
    assert_eq!(seen.len(), THREADS * PER_THREAD);
}

#[test]
fn stress_concurrent_every_backend() {
    for backend in Backend::DEFAULT_ORDER {
        let config = RandomConfig {
            backends: vec![backend],
            native_range: false,
            ..RandomConfig::default()
        };
        let random = Arc::new(SecureRandom::with_config(&config));
        if random.chain().select().is_err() {
            continue;
        }

        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                let random = Arc::clone(&random);
                thread::spawn(move || {
                    for _ in 0..PER_THREAD / 5 {
                        assert_eq!(random.bytes(24).unwrap().len(), 24);
                        assert!(random.number(1000).unwrap() <= 1000);
                        assert_eq!(random.base58(16).unwrap().len(), 16);
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().expect("thread panicked");
        }
    }
}

#[test]
fn stress_concurrent_tokens_unique() {
    let random = Arc::new(SecureRandom::new());

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let random = Arc::clone(&random);
            thread::spawn(move || {
                (0..PER_THREAD)
                    .map(|_| random.base64_safe(32, false).unwrap())
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut seen = HashSet::new();
    for handle in handles {
        for token in handle.join().unwrap() {
            assert!(seen.insert(token));
        }
    }
}
