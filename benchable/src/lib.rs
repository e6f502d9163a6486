#![warn(missing_docs)]
//! # Benchable
//!
//! Declarative benchmark suites with interchangeable measurement backends.
//!
//! A suite is a blueprint: one optional setup routine plus an ordered set
//! of named cases. Binding the blueprint to a measurement mode and options
//! produces a run instance; running it executes setup once, then hands
//! every case to the mode's backend, which measures and reports.
//!
//! Four modes are supported:
//! - `simple-timing` - each case runs once under the stopwatch
//! - `rehearsed-timing` - a warm-up execution precedes the measured one
//! - `throughput-rate` - calibrated iterations-per-second sampling with a
//!   fastest-first comparison table
//! - `memory-allocation` - heap bytes and allocation counts per case
//!   (requires [`TrackingAllocator`] as the global allocator)
//!
//! ## Quick Start
//!
//! ```no_run
//! use benchable::prelude::*;
//!
//! let mut suite = Suite::new("Sorting");
//! suite.setup(|| {
//!     // runs once, before any case
//! });
//! suite.bench("standard sort", || {
//!     let mut data: Vec<u64> = (0..1000).rev().collect();
//!     data.sort();
//!     std::hint::black_box(data);
//! });
//! suite.bench("unstable sort", || {
//!     let mut data: Vec<u64> = (0..1000).rev().collect();
//!     data.sort_unstable();
//!     std::hint::black_box(data);
//! });
//!
//! let report = Runner::new(&mut suite, Mode::ThroughputRate, RunOptions::default()).run();
//! assert_eq!(report.entries.len(), 2);
//! ```
//!
//! Case names are free-form text; they normalize to `case_`-prefixed
//! identifiers (lowercased, spaces to underscores), and reports show a
//! label derived back from the identifier. The normalization is lossy:
//! names differing only in case collide on one identifier, and the later
//! declaration silently replaces the earlier body. See
//! [`case_identifier`] for the exact rule.
//!
//! ## Selecting a mode from text
//!
//! When the mode arrives as a string (from an environment variable, say),
//! validate it eagerly with [`Runner::with_mode_name`]:
//!
//! ```
//! use benchable::prelude::*;
//!
//! let mut suite = Suite::new("empty");
//! assert!(Runner::with_mode_name(&mut suite, "simple-timing", RunOptions::default()).is_ok());
//! assert!(Runner::with_mode_name(&mut suite, "warp-speed", RunOptions::default()).is_err());
//! ```

mod runner;

pub use runner::{Invocation, Runner};

// Re-export the suite model
pub use benchable_core::{
    case_identifier, case_label, CaseBody, InvalidModeError, Mode, RunOptions, Suite, CASE_PREFIX,
    DEFAULT_WIDTH,
};

// Re-export the report model
pub use benchable_report::{
    format_bytes, format_count, format_duration, render, to_json, CaseReport, Measurement,
    ReportMeta, RunReport,
};

// Re-export the backends and their instruments
pub use benchable_backends::{
    current_allocation, reset_allocation_counter, retained_allocation, Backend, Elapsed,
    MemoryAllocation, RehearsedTiming, SimpleTiming, Stopwatch, ThroughputRate, TrackingAllocator,
    HAS_CYCLE_COUNTER,
};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Mode, RunOptions, Runner, Suite};
}
