//! JSON Output

use crate::report::RunReport;

/// Generate a prettified JSON rendition of a run report.
///
/// This is the machine-readable form surrounding tooling should consume;
/// the harness itself never persists or diffs reports.
pub fn to_json(report: &RunReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{CaseReport, Measurement, ReportMeta};
    use benchable_core::Mode;

    #[test]
    fn report_round_trips_through_json() {
        let mut report = RunReport::new(ReportMeta::new(Mode::ThroughputRate, 24));
        report.meta.suite = "Codec".to_string();
        report.entries.push(CaseReport {
            label: "Encode".to_string(),
            measurement: Measurement::Throughput {
                ips: 1234.5,
                stddev_ips: 12.3,
                iterations: 5000,
                elapsed_ns: 4_050_000_000,
            },
        });

        let json = to_json(&report).unwrap();
        assert!(json.contains("\"throughput-rate\""));

        let back: RunReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back.meta.suite, "Codec");
        assert_eq!(back.meta.width, 24);
        assert_eq!(back.entries.len(), 1);
        match back.entries[0].measurement {
            Measurement::Throughput { iterations, .. } => assert_eq!(iterations, 5000),
            ref other => panic!("unexpected measurement: {:?}", other),
        }
    }
}
