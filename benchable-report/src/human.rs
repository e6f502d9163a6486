//! Terminal Rendering
//!
//! Human-readable output for a finished run. Layout is per-mode: aligned
//! per-case lines for the timing modes (with a rehearsal section when one
//! was run), a rate listing plus fastest-first comparison for throughput,
//! and allocation lines for memory runs.

use crate::report::{Measurement, RunReport};
use benchable_core::Mode;

/// Format a nanosecond quantity with an adaptive unit.
pub fn format_duration(ns: f64) -> String {
    if ns < 1_000.0 {
        format!("{:.2} ns", ns)
    } else if ns < 1_000_000.0 {
        format!("{:.2} \u{b5}s", ns / 1_000.0)
    } else if ns < 1_000_000_000.0 {
        format!("{:.2} ms", ns / 1_000_000.0)
    } else {
        format!("{:.2} s", ns / 1_000_000_000.0)
    }
}

/// Format a count with an adaptive thousands suffix (`12.34k`, `1.23M`).
pub fn format_count(n: f64) -> String {
    if n >= 1_000_000_000.0 {
        format!("{:.2}B", n / 1_000_000_000.0)
    } else if n >= 1_000_000.0 {
        format!("{:.2}M", n / 1_000_000.0)
    } else if n >= 1_000.0 {
        format!("{:.2}k", n / 1_000.0)
    } else {
        format!("{:.2}", n)
    }
}

/// Format a byte quantity with an adaptive unit.
pub fn format_bytes(bytes: u64) -> String {
    let b = bytes as f64;
    if b < 1_024.0 {
        format!("{} B", bytes)
    } else if b < 1_048_576.0 {
        format!("{:.2} KB", b / 1_024.0)
    } else if b < 1_073_741_824.0 {
        format!("{:.2} MB", b / 1_048_576.0)
    } else {
        format!("{:.2} GB", b / 1_073_741_824.0)
    }
}

/// Render a report for terminal display.
pub fn render(report: &RunReport) -> String {
    let mut output = String::new();

    output.push('\n');
    output.push_str(&format!("{} ({})\n", report.meta.suite, report.meta.mode));
    output.push_str(&"=".repeat(60));
    output.push('\n');

    match report.meta.mode {
        Mode::SimpleTiming | Mode::RehearsedTiming => render_timing(report, &mut output),
        Mode::ThroughputRate => render_throughput(report, &mut output),
        Mode::MemoryAllocation => render_memory(report, &mut output),
    }

    output
}

fn render_timing(report: &RunReport, output: &mut String) {
    let width = report.meta.width;

    let rehearsed = report.entries.iter().any(|entry| {
        matches!(
            entry.measurement,
            Measurement::Timing {
                rehearsal_ns: Some(_),
                ..
            }
        )
    });

    if rehearsed {
        let banner = format!("Rehearsal {}", "-".repeat(width + 4));
        output.push_str(&banner);
        output.push('\n');
        for entry in &report.entries {
            if let Measurement::Timing {
                rehearsal_ns: Some(ns),
                ..
            } = entry.measurement
            {
                output.push_str(&format!(
                    "{:<width$} {:>12}\n",
                    entry.label,
                    format_duration(ns as f64),
                ));
            }
        }
        output.push_str(&"-".repeat(width + 14));
        output.push('\n');
    }

    for entry in &report.entries {
        if let Measurement::Timing {
            elapsed_ns,
            cpu_cycles,
            ..
        } = entry.measurement
        {
            let cycles = if cpu_cycles > 0 {
                format!("  ({} cycles)", cpu_cycles)
            } else {
                String::new()
            };
            output.push_str(&format!(
                "{:<width$} {:>12}{}\n",
                entry.label,
                format_duration(elapsed_ns as f64),
                cycles,
            ));
        }
    }

    if let Some(total) = report.total_elapsed_ns() {
        output.push_str(&format!(
            "{:<width$} {:>12}\n",
            ">total:",
            format_duration(total as f64),
        ));
    }
}

fn render_throughput(report: &RunReport, output: &mut String) {
    let width = report.meta.width;

    let mut rates: Vec<(&str, f64)> = Vec::with_capacity(report.entries.len());

    for entry in &report.entries {
        if let Measurement::Throughput {
            ips,
            stddev_ips,
            iterations,
            ..
        } = entry.measurement
        {
            let spread = if ips > 0.0 {
                (stddev_ips / ips) * 100.0
            } else {
                0.0
            };
            output.push_str(&format!(
                "{:<width$} {:>12} i/s (\u{b1}{:.2}%)  {} iterations\n",
                entry.label,
                format_count(ips),
                spread,
                iterations,
            ));
            rates.push((entry.label.as_str(), ips));
        }
    }

    // Comparison table only makes sense with something to compare against.
    if rates.len() < 2 {
        return;
    }

    rates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    output.push_str("\nComparison (fastest first)\n");
    output.push_str(&"-".repeat(60));
    output.push('\n');

    let fastest = rates[0].1;
    for (index, (label, ips)) in rates.iter().enumerate() {
        let suffix = if index == 0 {
            String::new()
        } else if *ips > 0.0 {
            format!("  - {:.2}x slower", fastest / ips)
        } else {
            "  - n/a".to_string()
        };
        output.push_str(&format!(
            "{:<width$} {:>12} i/s{}\n",
            label,
            format_count(*ips),
            suffix,
        ));
    }
}

fn render_memory(report: &RunReport, output: &mut String) {
    let width = report.meta.width;

    for entry in &report.entries {
        if let Measurement::Allocation {
            bytes,
            count,
            retained_bytes,
        } = entry.measurement
        {
            let retained = match retained_bytes {
                Some(r) => format!(", {} retained", format_bytes(r)),
                None => String::new(),
            };
            output.push_str(&format!(
                "{:<width$} {:>12} allocated ({} allocs){}\n",
                entry.label,
                format_bytes(bytes),
                count,
                retained,
            ));
        }
    }

    if let Some((bytes, count)) = report.total_allocation() {
        output.push_str(&format!(
            "{:<width$} {:>12} ({} allocs)\n",
            ">total:",
            format_bytes(bytes),
            count,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{CaseReport, ReportMeta};

    fn report_with(mode: Mode, entries: Vec<CaseReport>) -> RunReport {
        let mut report = RunReport::new(ReportMeta::new(mode, 20));
        report.meta.suite = "Demo".to_string();
        report.entries = entries;
        report
    }

    #[test]
    fn duration_units_scale() {
        assert_eq!(format_duration(512.0), "512.00 ns");
        assert_eq!(format_duration(1_500.0), "1.50 \u{b5}s");
        assert_eq!(format_duration(2_000_000.0), "2.00 ms");
        assert_eq!(format_duration(3_200_000_000.0), "3.20 s");
    }

    #[test]
    fn count_units_scale() {
        assert_eq!(format_count(999.0), "999.00");
        assert_eq!(format_count(12_340.0), "12.34k");
        assert_eq!(format_count(1_230_000.0), "1.23M");
    }

    #[test]
    fn byte_units_scale() {
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(2_048), "2.00 KB");
        assert_eq!(format_bytes(3 * 1_048_576), "3.00 MB");
    }

    #[test]
    fn timing_render_aligns_labels_and_totals() {
        let report = report_with(
            Mode::SimpleTiming,
            vec![
                CaseReport {
                    label: "Quick sort".to_string(),
                    measurement: Measurement::Timing {
                        elapsed_ns: 1_500_000,
                        cpu_cycles: 0,
                        rehearsal_ns: None,
                    },
                },
                CaseReport {
                    label: "Bubble sort".to_string(),
                    measurement: Measurement::Timing {
                        elapsed_ns: 4_500_000,
                        cpu_cycles: 0,
                        rehearsal_ns: None,
                    },
                },
            ],
        );

        let rendered = render(&report);
        assert!(rendered.contains("Demo (simple-timing)"));
        assert!(rendered.contains("Quick sort          "));
        assert!(rendered.contains(">total:"));
        assert!(rendered.contains("6.00 ms"));
        assert!(!rendered.contains("Rehearsal"));
    }

    #[test]
    fn rehearsed_render_shows_both_passes() {
        let report = report_with(
            Mode::RehearsedTiming,
            vec![CaseReport {
                label: "Parse".to_string(),
                measurement: Measurement::Timing {
                    elapsed_ns: 900_000,
                    cpu_cycles: 0,
                    rehearsal_ns: Some(1_200_000),
                },
            }],
        );

        let rendered = render(&report);
        assert!(rendered.contains("Rehearsal"));
        assert!(rendered.contains("1.20 ms"));
        assert!(rendered.contains("900.00 \u{b5}s"));
    }

    #[test]
    fn throughput_comparison_is_sorted_fastest_first() {
        let entry = |label: &str, ips: f64| CaseReport {
            label: label.to_string(),
            measurement: Measurement::Throughput {
                ips,
                stddev_ips: 0.0,
                iterations: 1000,
                elapsed_ns: 1_000_000,
            },
        };
        let report = report_with(
            Mode::ThroughputRate,
            vec![entry("Slow", 100.0), entry("Fast", 400.0)],
        );

        let rendered = render(&report);
        let comparison = rendered.split("Comparison").nth(1).unwrap();
        let fast_at = comparison.find("Fast").unwrap();
        let slow_at = comparison.find("Slow").unwrap();
        assert!(fast_at < slow_at);
        assert!(comparison.contains("4.00x slower"));
    }

    #[test]
    fn single_throughput_entry_has_no_comparison() {
        let report = report_with(
            Mode::ThroughputRate,
            vec![CaseReport {
                label: "Only".to_string(),
                measurement: Measurement::Throughput {
                    ips: 10.0,
                    stddev_ips: 1.0,
                    iterations: 10,
                    elapsed_ns: 1_000_000_000,
                },
            }],
        );

        assert!(!render(&report).contains("Comparison"));
    }

    #[test]
    fn memory_render_includes_retained_when_tracked() {
        let report = report_with(
            Mode::MemoryAllocation,
            vec![CaseReport {
                label: "Buffers".to_string(),
                measurement: Measurement::Allocation {
                    bytes: 4_096,
                    count: 4,
                    retained_bytes: Some(1_024),
                },
            }],
        );

        let rendered = render(&report);
        assert!(rendered.contains("4.00 KB"));
        assert!(rendered.contains("(4 allocs)"));
        assert!(rendered.contains("1.00 KB retained"));
    }
}
