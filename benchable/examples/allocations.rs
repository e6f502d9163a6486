//! Memory Allocation — measure heap usage per case
//!
//! Installs `TrackingAllocator` as the global allocator and runs a suite
//! in memory-allocation mode. Each case reports the bytes and allocation
//! count its body incurred; `track_retained` adds bytes not yet freed.
//!
//! Run with: cargo run --example allocations -p benchable --release

use benchable::prelude::*;
use benchable::TrackingAllocator;
use std::hint::black_box;

// Install the tracking allocator for the entire process.
#[global_allocator]
static GLOBAL: TrackingAllocator = TrackingAllocator;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("benchable=info")
        .init();

    let mut suite = Suite::new("Strings");

    suite.bench("push without capacity", || {
        let mut s = String::new();
        for i in 0u32..100 {
            s.push_str(&i.to_string());
        }
        black_box(s);
    });

    suite.bench("push with capacity", || {
        let mut s = String::with_capacity(512);
        for i in 0u32..100 {
            s.push_str(&i.to_string());
        }
        black_box(s);
    });

    suite.bench("join", || {
        let parts: Vec<String> = (0u32..100).map(|i| i.to_string()).collect();
        black_box(parts.join(""));
    });

    let options = RunOptions {
        track_retained: true,
        ..Default::default()
    };

    Runner::new(&mut suite, Mode::MemoryAllocation, options).run();
}
