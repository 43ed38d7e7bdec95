//! Compare command - re-scan and diff against the saved baseline.

use anyhow::Result;
use netbaseline_core::{
    BaselineService, ComparisonReport, JsonSnapshotStore, NmapExecutor, ScanSettings,
    ScannerSettings,
};
use tracing::info;

pub async fn run(settings: ScanSettings, scanner: &ScannerSettings, json: bool) -> Result<()> {
    info!(
        host = %settings.target,
        ports = %settings.ports,
        file = %settings.file.display(),
        "Comparing against baseline"
    );

    let service = BaselineService::new(
        NmapExecutor::from_settings(scanner),
        JsonSnapshotStore::new(&settings.file),
    );
    let outcome = service.compare(&settings).await?;
    let report = ComparisonReport::new(&settings.target, &outcome);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("\n{}", report);
    Ok(())
}
