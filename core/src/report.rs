//! Human-readable and JSON rendering of baselines and comparisons.

use std::fmt;

use serde::Serialize;

use crate::application::CompareOutcome;
use crate::domain::{format_timestamp, ComparisonResult, ScanResult, Snapshot};

const RULE_WIDTH: usize = 40;

/// Report for one compare run.
///
/// `Display` renders the sectioned console report; `Serialize` produces the
/// machine-readable form.
#[derive(Debug, Serialize)]
pub struct ComparisonReport<'a> {
    pub target: &'a str,
    pub baseline_timestamp: String,
    pub current_timestamp: String,
    #[serde(flatten)]
    pub comparison: &'a ComparisonResult,
    pub changed: bool,
}

impl<'a> ComparisonReport<'a> {
    pub fn new(target: &'a str, outcome: &'a CompareOutcome) -> Self {
        Self {
            target,
            baseline_timestamp: format_timestamp(&outcome.baseline.timestamp()),
            current_timestamp: format_timestamp(&outcome.scanned_at),
            comparison: &outcome.comparison,
            changed: outcome.has_changes(),
        }
    }
}

impl fmt::Display for ComparisonReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[+] Network Baseline Comparison")?;
        writeln!(f, "{}", "-".repeat(RULE_WIDTH))?;
        writeln!(f, "Target: {}", self.target)?;
        writeln!(f, "Baseline timestamp: {}", self.baseline_timestamp)?;
        writeln!(f, "Current timestamp:  {}", self.current_timestamp)?;
        writeln!(f)?;

        write_section(f, "New Open Ports", &self.comparison.added)?;
        write_section(f, "Closed Ports", &self.comparison.removed)?;
        write_section(f, "Unchanged Ports", &self.comparison.unchanged)?;

        if !self.comparison.relabeled.is_empty() {
            writeln!(f, "Service Changes:")?;
            for (port, change) in &self.comparison.relabeled {
                writeln!(f, "  - Port {}: {} -> {}", port, change.old, change.new)?;
            }
            writeln!(f)?;
        }

        if self.changed {
            write!(f, "Status: ⚠ Network state has changed")
        } else {
            write!(f, "Status: No changes detected")
        }
    }
}

fn write_section(f: &mut fmt::Formatter<'_>, title: &str, ports: &ScanResult) -> fmt::Result {
    writeln!(f, "{}:", title)?;
    if ports.is_empty() {
        writeln!(f, "  - None")?;
    } else {
        for entry in ports.entries() {
            writeln!(f, "  - {}", entry)?;
        }
    }
    writeln!(f)
}

/// Confirmation printed after a baseline was written.
pub struct BaselineSummary<'a> {
    pub file: &'a std::path::Path,
    pub snapshot: &'a Snapshot,
}

impl fmt::Display for BaselineSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[+] Baseline created successfully: {}", self.file.display())?;
        write!(f, "[+] Open ports saved: {}", self.snapshot.open_ports().len())
    }
}
