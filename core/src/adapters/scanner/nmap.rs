//! Scan executor backed by the nmap command-line tool.

use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;
use tokio::time::timeout;
use tracing::{debug, warn};

use crate::config::ScannerSettings;
use crate::error::{Error, Result};
use crate::ports::ScanExecutor;

use super::utils::{find_executable, find_in_path};

/// Name of the nmap binary on `PATH`.
#[cfg(windows)]
const NMAP_BINARY: &str = "nmap.exe";
#[cfg(not(windows))]
const NMAP_BINARY: &str = "nmap";

/// Install locations checked when nmap is not on `PATH`.
const NMAP_PATHS: &[&str] = &[
    "/usr/bin/nmap",            // Distro package
    "/usr/local/bin/nmap",      // Intel Mac / source install
    "/opt/homebrew/bin/nmap",   // Apple Silicon
    "/snap/bin/nmap",           // Snap
];

/// TCP connect scan with service detection, no host discovery, open ports only.
const SCAN_FLAGS: &[&str] = &["-sT", "-sV", "-Pn", "--open"];

/// Runs `nmap` as a child process and returns its standard output.
#[derive(Debug, Clone)]
pub struct NmapExecutor {
    nmap_path: Option<PathBuf>,
    timeout: Option<Duration>,
}

impl NmapExecutor {
    /// Creates an executor, searching `PATH` and the usual install locations.
    pub fn new() -> Self {
        Self {
            nmap_path: locate_nmap(),
            timeout: None,
        }
    }

    /// Creates an executor with an explicit (or explicitly absent) binary path.
    pub fn with_path(nmap_path: Option<PathBuf>) -> Self {
        Self {
            nmap_path,
            timeout: None,
        }
    }

    /// Creates an executor from settings; an unset path falls back to searching.
    pub fn from_settings(settings: &ScannerSettings) -> Self {
        Self {
            nmap_path: settings.nmap_path.clone().or_else(locate_nmap),
            timeout: settings.timeout,
        }
    }

    /// Bounds each scan; the child is killed when the limit is hit.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the nmap path if found.
    pub fn nmap_path(&self) -> Option<&PathBuf> {
        self.nmap_path.as_ref()
    }

    /// Returns true if nmap is available.
    pub fn is_available(&self) -> bool {
        self.nmap_path.is_some()
    }

    /// Command-line arguments for scanning `ports` on `target`.
    pub fn scan_args(target: &str, ports: &str) -> Vec<String> {
        SCAN_FLAGS
            .iter()
            .map(|flag| flag.to_string())
            .chain(["-p".to_string(), ports.to_string(), target.to_string()])
            .collect()
    }

    fn require_nmap(&self) -> Result<&PathBuf> {
        self.nmap_path.as_ref().ok_or_else(missing_nmap)
    }
}

impl Default for NmapExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl ScanExecutor for NmapExecutor {
    async fn scan(&self, target: &str, ports: &str) -> Result<String> {
        let nmap = self.require_nmap()?;
        let args = Self::scan_args(target, ports);
        debug!(path = %nmap.display(), ?args, "Running nmap");

        let mut command = Command::new(nmap);
        command
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let result = match self.timeout {
            Some(limit) => timeout(limit, command.output())
                .await
                .map_err(|_| Error::Timeout(limit))?,
            None => command.output().await,
        };

        let output = result.map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => missing_nmap(),
            _ => Error::CommandFailed(format!("Failed to run nmap: {}", e)),
        })?;

        let stderr = String::from_utf8_lossy(&output.stderr);
        if !output.status.success() {
            return Err(Error::CommandFailed(format!(
                "nmap exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }
        if !stderr.trim().is_empty() {
            warn!(stderr = %stderr.trim(), "nmap wrote to stderr");
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

fn locate_nmap() -> Option<PathBuf> {
    find_in_path(NMAP_BINARY).or_else(|| find_executable(NMAP_PATHS))
}

fn missing_nmap() -> Error {
    Error::MissingDependency {
        program: "nmap".to_string(),
        hint: install_hint().to_string(),
    }
}

/// Platform-specific install instruction shown when nmap is missing.
pub fn install_hint() -> &'static str {
    if cfg!(target_os = "macos") {
        "brew install nmap"
    } else if cfg!(target_os = "linux") {
        "sudo apt install nmap"
    } else {
        "the installer from https://nmap.org/download.html"
    }
}
