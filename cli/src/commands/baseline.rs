//! Baseline command - scan and save the open ports.

use anyhow::Result;
use netbaseline_core::{
    BaselineService, BaselineSummary, JsonSnapshotStore, NmapExecutor, ScanSettings,
    ScannerSettings,
};
use tracing::info;

pub async fn run(settings: ScanSettings, scanner: &ScannerSettings, json: bool) -> Result<()> {
    info!(host = %settings.target, ports = %settings.ports, "Creating baseline");

    let service = BaselineService::new(
        NmapExecutor::from_settings(scanner),
        JsonSnapshotStore::new(&settings.file),
    );
    let snapshot = service.create_baseline(&settings).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    println!(
        "\n{}",
        BaselineSummary {
            file: &settings.file,
            snapshot: &snapshot,
        }
    );
    Ok(())
}
