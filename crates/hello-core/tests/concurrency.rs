//! Concurrent use of all three operations
//!
//! Each thread owns its storage, so results must match the single-threaded
//! answers exactly.

use hello_core::{greet_to, square, write_constant_into, Name, ANSWER};
use std::thread;

const THREADS: usize = 16;
const ITERATIONS: usize = 1_000;

#[test]
fn test_concurrent_calls_do_not_interfere() {
    let results: Vec<(Vec<u8>, f64, i32)> = thread::scope(|scope| {
        let handles: Vec<_> = (0..THREADS)
            .map(|i| {
                scope.spawn(move || {
                    let name = format!("thread-{}", i);
                    let mut out = Vec::new();
                    let mut slot = -(i as i32);
                    let mut squared = 0.0;

                    for _ in 0..ITERATIONS {
                        out.clear();
                        greet_to(&mut out, &Name::new(&name)).unwrap();
                        squared = square(i as f64);
                        slot = -(i as i32);
                        write_constant_into(&mut slot);
                    }

                    (out, squared, slot)
                })
            })
            .collect();

        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for (i, (out, squared, slot)) in results.into_iter().enumerate() {
        assert_eq!(out, format!("Hello, thread-{}!\n", i).into_bytes());
        assert_eq!(squared, (i * i) as f64);
        assert_eq!(slot, ANSWER);
    }
}
