//! Throughput Comparison — sort strategies head to head
//!
//! Declares a small suite with a shared setup routine and three cases,
//! then runs it in throughput-rate mode. The report lists each case's
//! iterations per second and a comparison table sorted fastest first.
//!
//! Run with: cargo run --example sorting -p benchable --release

use benchable::prelude::*;
use std::hint::black_box;
use std::time::Duration;

fn scrambled(len: usize) -> Vec<u64> {
    // Deterministic pseudo-shuffle, cheap enough to run per iteration.
    (0..len as u64).map(|i| i.wrapping_mul(2654435761) % 1000).collect()
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("benchable=info")
        .init();

    let mut suite = Suite::new("Sorting");

    suite.setup(|| {
        // One-time fixture work would go here; it runs before any case.
        black_box(scrambled(1));
    });

    suite.bench("standard sort", || {
        let mut data = scrambled(512);
        data.sort();
        black_box(data);
    });

    suite.bench("unstable sort", || {
        let mut data = scrambled(512);
        data.sort_unstable();
        black_box(data);
    });

    suite.bench("binary heap drain", || {
        let heap: std::collections::BinaryHeap<u64> = scrambled(512).into_iter().collect();
        black_box(heap.into_sorted_vec());
    });

    let options = RunOptions {
        warmup_time: Some(Duration::from_millis(200)),
        measure_time: Some(Duration::from_millis(800)),
        ..Default::default()
    };

    Runner::new(&mut suite, Mode::ThroughputRate, options).run();
}
