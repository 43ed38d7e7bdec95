//! Snapshot repository port (interface).

use crate::domain::Snapshot;
use crate::error::Result;

/// Port for baseline persistence.
///
/// One snapshot per repository; saving replaces whatever was stored before.
pub trait SnapshotRepository: Send + Sync {
    /// Persist the snapshot, overwriting any previous one.
    fn save(&self, snapshot: &Snapshot) -> impl std::future::Future<Output = Result<()>> + Send;

    /// Load the stored snapshot.
    ///
    /// Fails with `Error::NotFound` when nothing has been saved and
    /// `Error::ParseError` when the stored content is not a snapshot.
    fn load(&self) -> impl std::future::Future<Output = Result<Snapshot>> + Send;
}
