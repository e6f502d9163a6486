//! Measurement Modes
//!
//! The closed set of measurement strategies a run instance can be bound to.
//! A `Mode` value is always valid; textual selection goes through `FromStr`,
//! which is the one place an out-of-set value can appear and is rejected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Measurement strategy for one run of a suite.
///
/// Fixed when the run instance is constructed; never changes afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    /// Plain timing: each case body runs once under the stopwatch.
    SimpleTiming,
    /// Rehearsed timing: a warm-up execution precedes the measured one,
    /// trading run time for steadier numbers.
    RehearsedTiming,
    /// Throughput sampling: iterations-per-second with a comparison table.
    ThroughputRate,
    /// Heap profiling: allocation bytes and counts per case.
    MemoryAllocation,
}

impl Mode {
    /// Every recognized mode, in declaration order.
    pub const ALL: [Mode; 4] = [
        Mode::SimpleTiming,
        Mode::RehearsedTiming,
        Mode::ThroughputRate,
        Mode::MemoryAllocation,
    ];

    /// The exact textual name of this mode.
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::SimpleTiming => "simple-timing",
            Mode::RehearsedTiming => "rehearsed-timing",
            Mode::ThroughputRate => "throughput-rate",
            Mode::MemoryAllocation => "memory-allocation",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error raised when a textual mode is not one of the four recognized names.
///
/// Carries the offending value for diagnostics. The name set is exact: no
/// aliasing and no case folding is performed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid benchmark mode '{0}'")]
pub struct InvalidModeError(pub String);

impl FromStr for Mode {
    type Err = InvalidModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "simple-timing" => Ok(Mode::SimpleTiming),
            "rehearsed-timing" => Ok(Mode::RehearsedTiming),
            "throughput-rate" => Ok(Mode::ThroughputRate),
            "memory-allocation" => Ok(Mode::MemoryAllocation),
            other => Err(InvalidModeError(other.to_string())),
        }
    }
}

impl TryFrom<&str> for Mode {
    type Error = InvalidModeError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_recognized_names_parse() {
        for mode in Mode::ALL {
            assert_eq!(mode.as_str().parse::<Mode>().unwrap(), mode);
        }
    }

    #[test]
    fn unknown_name_is_rejected_with_value() {
        let err = "bmbm".parse::<Mode>().unwrap_err();
        assert_eq!(err, InvalidModeError("bmbm".to_string()));
        assert_eq!(err.to_string(), "invalid benchmark mode 'bmbm'");
    }

    #[test]
    fn no_case_folding_or_aliasing() {
        assert!("Simple-Timing".parse::<Mode>().is_err());
        assert!("simple_timing".parse::<Mode>().is_err());
        assert!("ips".parse::<Mode>().is_err());
        assert!("".parse::<Mode>().is_err());
    }

    #[test]
    fn serde_uses_kebab_case() {
        let json = serde_json::to_string(&Mode::ThroughputRate).unwrap();
        assert_eq!(json, "\"throughput-rate\"");
        let back: Mode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Mode::ThroughputRate);
    }
}
