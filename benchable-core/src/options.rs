//! Run Options
//!
//! Per-run configuration. The dispatcher resolves which of these fields a
//! backend actually receives: the timing backends get only the resolved
//! width, the throughput backend consumes the whole struct as its
//! configuration step, and the memory backend receives the struct
//! wholesale. Options never change for the lifetime of a run instance.

use std::time::Duration;

/// Report label column width applied when none is requested.
pub const DEFAULT_WIDTH: usize = 20;

/// Configuration for one run of a suite.
///
/// Fields the selected backend does not understand are ignored by it; the
/// core never interprets the mode-specific knobs itself.
#[derive(Debug, Clone, PartialEq)]
pub struct RunOptions {
    /// Label column width for report alignment. `None` resolves to
    /// [`DEFAULT_WIDTH`].
    pub width: Option<usize>,
    /// Throughput mode: how long to warm up before sampling. `None` leaves
    /// the backend default (2 s) in place.
    pub warmup_time: Option<Duration>,
    /// Throughput mode: how long to sample for. `None` leaves the backend
    /// default (5 s) in place.
    pub measure_time: Option<Duration>,
    /// Memory mode: also report bytes still reachable after each case body
    /// returns.
    pub track_retained: bool,
}

impl RunOptions {
    /// The label column width, defaulted when unset.
    pub fn resolved_width(&self) -> usize {
        self.width.unwrap_or(DEFAULT_WIDTH)
    }
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            width: None,
            warmup_time: None,
            measure_time: None,
            track_retained: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_defaults_to_twenty() {
        assert_eq!(RunOptions::default().resolved_width(), DEFAULT_WIDTH);
        assert_eq!(DEFAULT_WIDTH, 20);
    }

    #[test]
    fn explicit_width_wins() {
        let options = RunOptions {
            width: Some(32),
            ..Default::default()
        };
        assert_eq!(options.resolved_width(), 32);
    }
}
