#![warn(missing_docs)]
//! Benchable Report - Measurement Results and Rendering
//!
//! Data model for what a run produced, plus the two output paths the
//! harness owns:
//! - human-readable terminal rendering (aligned columns, per-mode layout)
//! - JSON (machine-readable, serde-based)
//!
//! The harness never persists reports or compares them across runs; both
//! of those belong to surrounding tooling consuming the JSON form.

mod human;
mod json;
mod report;

pub use human::{format_bytes, format_count, format_duration, render};
pub use json::to_json;
pub use report::{CaseReport, Measurement, ReportMeta, RunReport};
