//! Report Data Structures

use benchable_core::Mode;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Everything one `run()` produced: metadata plus one entry per case, in
/// discovery order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// Run metadata.
    pub meta: ReportMeta,
    /// Per-case measurements, in the order the cases were reported.
    pub entries: Vec<CaseReport>,
}

/// Run metadata captured when the backend finishes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMeta {
    /// Display name of the suite that ran. Filled in by the dispatcher.
    pub suite: String,
    /// The measurement mode this run was bound to.
    pub mode: Mode,
    /// When the backend finished.
    pub timestamp: DateTime<Utc>,
    /// Harness version that produced the report.
    pub harness_version: String,
    /// Label column width the run resolved to.
    pub width: usize,
}

impl ReportMeta {
    /// Metadata for a finishing backend; the dispatcher fills `suite` in.
    pub fn new(mode: Mode, width: usize) -> Self {
        Self {
            suite: String::new(),
            mode,
            timestamp: Utc::now(),
            harness_version: env!("CARGO_PKG_VERSION").to_string(),
            width,
        }
    }
}

/// One case's measurement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseReport {
    /// Human-readable label derived from the case identifier.
    pub label: String,
    /// What the backend measured.
    pub measurement: Measurement,
}

/// Backend measurement, tagged by kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Measurement {
    /// Wall-clock timing of one execution.
    Timing {
        /// Elapsed wall-clock nanoseconds of the measured execution.
        elapsed_ns: u64,
        /// CPU cycles consumed, when the platform exposes a counter
        /// (zero otherwise).
        cpu_cycles: u64,
        /// Elapsed nanoseconds of the rehearsal execution, for the
        /// rehearsed-timing mode.
        rehearsal_ns: Option<u64>,
    },
    /// Iterations-per-second sampling.
    Throughput {
        /// Mean iterations per second across measurement batches.
        ips: f64,
        /// Standard deviation of the per-batch rates.
        stddev_ips: f64,
        /// Total iterations performed during measurement.
        iterations: u64,
        /// Total measured wall-clock nanoseconds.
        elapsed_ns: u64,
    },
    /// Heap allocation counting of one execution.
    Allocation {
        /// Bytes allocated while the body ran.
        bytes: u64,
        /// Number of allocations while the body ran.
        count: u64,
        /// Bytes still reachable after the body returned, when retained
        /// tracking was requested.
        retained_bytes: Option<u64>,
    },
}

impl RunReport {
    /// An empty report for a finishing backend.
    pub fn new(meta: ReportMeta) -> Self {
        Self {
            meta,
            entries: Vec::new(),
        }
    }

    /// Summed elapsed time across timing entries, if this is a timing run.
    pub fn total_elapsed_ns(&self) -> Option<u64> {
        let mut total = None;
        for entry in &self.entries {
            if let Measurement::Timing { elapsed_ns, .. } = entry.measurement {
                *total.get_or_insert(0) += elapsed_ns;
            }
        }
        total
    }

    /// Summed `(bytes, count)` across allocation entries, if this is a
    /// memory run.
    pub fn total_allocation(&self) -> Option<(u64, u64)> {
        let mut total = None;
        for entry in &self.entries {
            if let Measurement::Allocation { bytes, count, .. } = entry.measurement {
                let (b, c) = total.get_or_insert((0, 0));
                *b += bytes;
                *c += count;
            }
        }
        total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timing_entry(label: &str, elapsed_ns: u64) -> CaseReport {
        CaseReport {
            label: label.to_string(),
            measurement: Measurement::Timing {
                elapsed_ns,
                cpu_cycles: 0,
                rehearsal_ns: None,
            },
        }
    }

    #[test]
    fn totals_sum_timing_entries() {
        let mut report = RunReport::new(ReportMeta::new(Mode::SimpleTiming, 20));
        report.entries.push(timing_entry("A", 100));
        report.entries.push(timing_entry("B", 250));

        assert_eq!(report.total_elapsed_ns(), Some(350));
        assert_eq!(report.total_allocation(), None);
    }

    #[test]
    fn empty_report_has_no_totals() {
        let report = RunReport::new(ReportMeta::new(Mode::MemoryAllocation, 20));
        assert_eq!(report.total_elapsed_ns(), None);
        assert_eq!(report.total_allocation(), None);
    }

    #[test]
    fn allocation_totals() {
        let mut report = RunReport::new(ReportMeta::new(Mode::MemoryAllocation, 20));
        report.entries.push(CaseReport {
            label: "A".to_string(),
            measurement: Measurement::Allocation {
                bytes: 1024,
                count: 3,
                retained_bytes: None,
            },
        });
        report.entries.push(CaseReport {
            label: "B".to_string(),
            measurement: Measurement::Allocation {
                bytes: 512,
                count: 1,
                retained_bytes: Some(64),
            },
        });

        assert_eq!(report.total_allocation(), Some((1536, 4)));
    }
}
