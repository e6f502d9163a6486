//! Memory Backend
//!
//! Counts heap allocations per case: reset the process-wide counters, run
//! the body once, read back bytes and allocation count (and, when
//! requested, bytes not yet freed). Requires `TrackingAllocator` to be
//! installed as the global allocator in the running binary; without it the
//! counters stay at zero and a warning is logged at finish.
//!
//! Unlike the timing backends this engine is constructed from the whole
//! `RunOptions`, not a width - it reads whichever fields it understands
//! and ignores the rest.

use crate::allocator::{current_allocation, reset_allocation_counter, retained_allocation};
use crate::Backend;
use benchable_core::{Mode, RunOptions};
use benchable_report::{CaseReport, Measurement, ReportMeta, RunReport};
use tracing::{debug, warn};

/// Heap allocation counting backend.
pub struct MemoryAllocation {
    options: RunOptions,
    entries: Vec<CaseReport>,
}

impl MemoryAllocation {
    /// Create a backend from the full run options.
    pub fn new(options: RunOptions) -> Self {
        Self {
            options,
            entries: Vec::new(),
        }
    }
}

impl Backend for MemoryAllocation {
    fn report(&mut self, label: &str, body: &mut dyn FnMut()) {
        reset_allocation_counter();
        body();
        let (bytes, count) = current_allocation();
        let retained_bytes = self
            .options
            .track_retained
            .then(retained_allocation);
        debug!(label, bytes, count, "profiled case");

        self.entries.push(CaseReport {
            label: label.to_string(),
            measurement: Measurement::Allocation {
                bytes,
                count,
                retained_bytes,
            },
        });
    }

    fn finish(self: Box<Self>) -> RunReport {
        let nothing_counted = !self.entries.is_empty()
            && self.entries.iter().all(|entry| {
                matches!(
                    entry.measurement,
                    Measurement::Allocation {
                        bytes: 0,
                        count: 0,
                        ..
                    }
                )
            });
        if nothing_counted {
            warn!(
                "allocation tracking reported zero bytes for every case; \
                 ensure TrackingAllocator is installed as #[global_allocator]"
            );
        }

        let mut report = RunReport::new(ReportMeta::new(
            Mode::MemoryAllocation,
            self.options.resolved_width(),
        ));
        report.entries = self.entries;
        report
    }
}
