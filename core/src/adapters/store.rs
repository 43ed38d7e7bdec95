//! JSON file snapshot store.
//!
//! One snapshot per file, pretty-printed with two-space indentation.

use std::path::{Path, PathBuf};

use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::info;

use crate::domain::Snapshot;
use crate::error::{Error, Result};
use crate::ports::SnapshotRepository;

/// Snapshot store backed by a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonSnapshotStore {
    path: PathBuf,
}

impl JsonSnapshotStore {
    /// Creates a store for the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the snapshot file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns true if a snapshot file exists.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}

impl SnapshotRepository for JsonSnapshotStore {
    async fn save(&self, snapshot: &Snapshot) -> Result<()> {
        let content = serde_json::to_string_pretty(snapshot)?;

        // Write to a sibling temp file first, then rename over the target
        let mut temp_name = self.path.as_os_str().to_owned();
        temp_name.push(".tmp");
        let temp_path = PathBuf::from(temp_name);

        let written = async {
            let mut file = fs::File::create(&temp_path).await?;
            file.write_all(content.as_bytes()).await?;
            file.write_all(b"\n").await?;
            file.sync_all().await?;
            drop(file);
            fs::rename(&temp_path, &self.path).await
        }
        .await;

        if let Err(e) = written {
            let _ = fs::remove_file(&temp_path).await;
            return Err(Error::Io(e));
        }

        info!(
            path = %self.path.display(),
            open_ports = snapshot.open_ports().len(),
            "Saved baseline"
        );
        Ok(())
    }

    async fn load(&self) -> Result<Snapshot> {
        let content = match fs::read(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(Error::NotFound(self.path.clone()));
            }
            Err(e) => return Err(Error::Io(e)),
        };

        let snapshot: Snapshot = serde_json::from_slice(&content)
            .map_err(|e| Error::ParseError(format!("{}: {}", self.path.display(), e)))?;

        info!(
            path = %self.path.display(),
            timestamp = %snapshot.timestamp(),
            "Loaded baseline"
        );
        Ok(snapshot)
    }
}
