//! Baseline creation and comparison service.

use chrono::NaiveDateTime;
use tracing::{debug, warn};

use crate::adapters::scanner::parse_scan_output;
use crate::config::ScanSettings;
use crate::domain::{compare, now_timestamp, ComparisonResult, ScanResult, Snapshot};
use crate::error::Result;
use crate::ports::{ScanExecutor, SnapshotRepository};

/// Everything produced by one compare run.
#[derive(Debug, Clone)]
pub struct CompareOutcome {
    /// Snapshot loaded from the repository.
    pub baseline: Snapshot,
    /// Open ports found by the fresh scan.
    pub current: ScanResult,
    /// When the fresh scan finished.
    pub scanned_at: NaiveDateTime,
    /// Differences between baseline and fresh scan.
    pub comparison: ComparisonResult,
}

impl CompareOutcome {
    pub fn has_changes(&self) -> bool {
        self.comparison.has_changes()
    }
}

/// Application service for the baseline and compare workflows.
///
/// The scanner and the snapshot storage are injected through the
/// `ScanExecutor` and `SnapshotRepository` traits, so tests can run the
/// whole workflow against canned scanner output.
pub struct BaselineService<E: ScanExecutor, R: SnapshotRepository> {
    executor: E,
    repository: R,
}

impl<E: ScanExecutor, R: SnapshotRepository> BaselineService<E, R> {
    /// Create a new service with the given executor and repository.
    pub fn new(executor: E, repository: R) -> Self {
        Self {
            executor,
            repository,
        }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Run the scanner once and parse its output.
    pub async fn scan(&self, target: &str, ports: &str) -> Result<ScanResult> {
        let output = self.executor.scan(target, ports).await?;
        let result = parse_scan_output(&output);
        debug!(host = target, ports, open = result.len(), "Scan finished");
        Ok(result)
    }

    /// Scan the configured target and store the result as the new baseline.
    pub async fn create_baseline(&self, settings: &ScanSettings) -> Result<Snapshot> {
        settings.validate()?;

        let result = self.scan(&settings.target, &settings.ports).await?;
        let snapshot = Snapshot::new(settings.target.as_str(), settings.ports.as_str(), result);
        self.repository.save(&snapshot).await?;

        Ok(snapshot)
    }

    /// Load the stored baseline, scan again and diff the two.
    ///
    /// The baseline is loaded before scanning so a missing file fails fast.
    pub async fn compare(&self, settings: &ScanSettings) -> Result<CompareOutcome> {
        settings.validate()?;

        let baseline = self.repository.load().await?;
        if baseline.target() != settings.target || baseline.ports_scanned() != settings.ports {
            warn!(
                baseline_host = baseline.target(),
                baseline_ports = baseline.ports_scanned(),
                host = %settings.target,
                ports = %settings.ports,
                "Baseline was recorded with different scan settings"
            );
        }

        let current = self.scan(&settings.target, &settings.ports).await?;
        let scanned_at = now_timestamp();
        let comparison = compare(baseline.open_ports(), &current);

        Ok(CompareOutcome {
            baseline,
            current,
            scanned_at,
            comparison,
        })
    }
}
