//! Scan executor port (interface).

use crate::error::Result;

/// Port for running an external port scan.
///
/// Implementations invoke a scanner against `target` restricted to the
/// `ports` range expression and hand back its raw standard output.
/// Parsing that text is not the executor's job.
pub trait ScanExecutor: Send + Sync {
    /// Run one scan and return the scanner's textual output.
    fn scan(
        &self,
        target: &str,
        ports: &str,
    ) -> impl std::future::Future<Output = Result<String>> + Send;
}
