#![warn(missing_docs)]
//! Benchable Backends - Measurement Engines
//!
//! One backend per measurement mode, plus the instruments they share:
//! - `SimpleTiming` - each case body runs once under the stopwatch
//! - `RehearsedTiming` - a warm-up execution precedes the measured one
//! - `ThroughputRate` - warmup-calibrated iterations-per-second sampling
//! - `MemoryAllocation` - heap bytes and allocation counts per case
//! - `Stopwatch` - wall-clock plus CPU-cycle timing (RDTSCP / CNTVCT_EL0)
//! - `TrackingAllocator` - global allocator interceptor for memory runs
//!
//! All four implement the uniform [`Backend`] report-registration
//! contract; their constructors are deliberately asymmetric (width-only,
//! construct-then-configure, options-wholesale) because the engines need
//! different configuration, and the dispatcher in the `benchable` facade
//! preserves that asymmetry exactly.

mod allocator;
mod measure;
mod memory;
mod throughput;
mod timing;

pub use allocator::{
    current_allocation, reset_allocation_counter, retained_allocation, TrackingAllocator,
};
pub use measure::{Elapsed, Stopwatch, HAS_CYCLE_COUNTER};
pub use memory::MemoryAllocation;
pub use throughput::{ThroughputRate, DEFAULT_MEASURE_TIME, DEFAULT_WARMUP_TIME};
pub use timing::{RehearsedTiming, SimpleTiming};

use benchable_report::RunReport;

/// The uniform report-registration contract every backend exposes.
///
/// The dispatcher calls [`report`](Backend::report) once per discovered
/// case, in discovery order, then [`finish`](Backend::finish) exactly once.
/// A backend executes each registered body itself (possibly many times, to
/// measure) and yields one report entry per registration. Panics from a
/// body are never caught here; they unwind to the dispatcher's caller.
pub trait Backend {
    /// Register one case: execute `body` under this backend's measurement
    /// regime and record an entry labelled `label`.
    fn report(&mut self, label: &str, body: &mut dyn FnMut());

    /// Consume the backend and produce the collected report.
    fn finish(self: Box<Self>) -> RunReport;
}
