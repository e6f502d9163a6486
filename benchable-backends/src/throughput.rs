//! Throughput Backend
//!
//! Iterations-per-second sampling, in two phases per case (the same shape
//! as a warmup-calibrated benchmark loop):
//!
//! 1. Warmup: run the body repeatedly for the warmup budget, estimating
//!    the per-iteration cost.
//! 2. Measurement: batch iterations so each batch lands near 100 ms, then
//!    sample batches until the measurement budget lapses. Each batch
//!    yields one iterations-per-second sample; the case reports the mean
//!    and standard deviation across samples.
//!
//! At least one batch always runs, so a case reports a finite rate even
//! under a zero time budget. Configuration consumes the whole
//! `RunOptions` - width included - via `configure`.

use crate::measure::Stopwatch;
use crate::Backend;
use benchable_core::{Mode, RunOptions};
use benchable_report::{CaseReport, Measurement, ReportMeta, RunReport};
use std::time::{Duration, Instant};
use tracing::debug;

/// Warmup budget applied when the options leave it unset.
pub const DEFAULT_WARMUP_TIME: Duration = Duration::from_secs(2);

/// Measurement budget applied when the options leave it unset.
pub const DEFAULT_MEASURE_TIME: Duration = Duration::from_secs(5);

/// Target wall-clock size of one measurement batch.
const TARGET_BATCH_NS: u64 = 100_000_000;

/// Iterations-per-second sampling backend.
pub struct ThroughputRate {
    width: usize,
    warmup_ns: u64,
    measure_ns: u64,
    entries: Vec<CaseReport>,
}

impl ThroughputRate {
    /// Create a backend with default warmup/measurement budgets and width.
    pub fn new() -> Self {
        Self {
            width: benchable_core::DEFAULT_WIDTH,
            warmup_ns: DEFAULT_WARMUP_TIME.as_nanos() as u64,
            measure_ns: DEFAULT_MEASURE_TIME.as_nanos() as u64,
            entries: Vec::new(),
        }
    }

    /// Apply the run options as this backend's configuration step.
    ///
    /// Consumes everything the options carry that this engine understands:
    /// warmup budget, measurement budget, and the label column width.
    pub fn configure(&mut self, options: &RunOptions) {
        if let Some(warmup) = options.warmup_time {
            self.warmup_ns = warmup.as_nanos() as u64;
        }
        if let Some(measure) = options.measure_time {
            self.measure_ns = measure.as_nanos() as u64;
        }
        self.width = options.resolved_width();
    }

    /// Warm the body up and estimate its per-iteration cost in nanoseconds.
    fn warm_up(&self, body: &mut dyn FnMut()) -> Option<u64> {
        let start = Instant::now();
        let mut iterations = 0u64;
        while (start.elapsed().as_nanos() as u64) < self.warmup_ns {
            body();
            iterations += 1;
        }
        if iterations == 0 {
            return None;
        }
        Some(((start.elapsed().as_nanos() as u64) / iterations).max(1))
    }
}

impl Default for ThroughputRate {
    fn default() -> Self {
        Self::new()
    }
}

impl Backend for ThroughputRate {
    fn report(&mut self, label: &str, body: &mut dyn FnMut()) {
        let batch_size = match self.warm_up(body) {
            Some(per_iter_ns) => (TARGET_BATCH_NS / per_iter_ns).max(1),
            None => 1,
        };
        debug!(label, batch_size, "calibrated throughput batch");

        let mut samples: Vec<f64> = Vec::new();
        let mut iterations = 0u64;
        let mut measured_ns = 0u64;
        let measure_start = Instant::now();

        // At least one batch, then keep sampling until the budget lapses.
        loop {
            let sw = Stopwatch::start();
            for _ in 0..batch_size {
                body();
            }
            let elapsed = sw.elapsed();

            iterations += batch_size;
            measured_ns += elapsed.nanos;
            let batch_ns = elapsed.nanos.max(1);
            samples.push(batch_size as f64 * 1e9 / batch_ns as f64);

            if (measure_start.elapsed().as_nanos() as u64) >= self.measure_ns {
                break;
            }
        }

        let mean = samples.iter().sum::<f64>() / samples.len() as f64;
        let stddev = if samples.len() < 2 {
            0.0
        } else {
            let variance = samples.iter().map(|s| (s - mean).powi(2)).sum::<f64>()
                / (samples.len() - 1) as f64;
            variance.sqrt()
        };
        debug!(label, ips = mean, samples = samples.len(), "measured case");

        self.entries.push(CaseReport {
            label: label.to_string(),
            measurement: Measurement::Throughput {
                ips: mean,
                stddev_ips: stddev,
                iterations,
                elapsed_ns: measured_ns,
            },
        });
    }

    fn finish(self: Box<Self>) -> RunReport {
        let mut report = RunReport::new(ReportMeta::new(Mode::ThroughputRate, self.width));
        report.entries = self.entries;
        report
    }
}
