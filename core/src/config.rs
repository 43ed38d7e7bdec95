//! Invocation settings.
//!
//! Target, port range and baseline file are passed explicitly to every
//! operation; nothing here is process-global.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default scan target (loopback).
pub const DEFAULT_TARGET: &str = "127.0.0.1";

/// Default port-range expression handed to the scanner.
pub const DEFAULT_PORTS: &str = "1-1024";

/// Default baseline file, relative to the working directory.
pub const DEFAULT_BASELINE_FILE: &str = "baseline.json";

/// What to scan and where the baseline lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanSettings {
    /// Host name or address to scan.
    #[serde(default = "default_target")]
    pub target: String,

    /// Port-range expression, e.g. `1-1024` or `22,80,443`.
    #[serde(default = "default_ports")]
    pub ports: String,

    /// Snapshot file path.
    #[serde(default = "default_file")]
    pub file: PathBuf,
}

fn default_target() -> String {
    DEFAULT_TARGET.to_string()
}

fn default_ports() -> String {
    DEFAULT_PORTS.to_string()
}

fn default_file() -> PathBuf {
    PathBuf::from(DEFAULT_BASELINE_FILE)
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            target: default_target(),
            ports: default_ports(),
            file: default_file(),
        }
    }
}

impl ScanSettings {
    /// Create settings for the given target and port range, keeping the default file.
    pub fn new(target: impl Into<String>, ports: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            ports: ports.into(),
            ..Self::default()
        }
    }

    /// Replace the snapshot file path.
    pub fn with_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.file = file.into();
        self
    }

    /// Reject settings that would hand the scanner an empty argument.
    pub fn validate(&self) -> Result<()> {
        if self.target.trim().is_empty() {
            return Err(Error::Config("target must not be empty".to_string()));
        }
        if self.ports.trim().is_empty() {
            return Err(Error::Config("port range must not be empty".to_string()));
        }
        Ok(())
    }
}

/// How the external scanner is located and supervised.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScannerSettings {
    /// Explicit path to the nmap binary; searched for when `None`.
    pub nmap_path: Option<PathBuf>,

    /// Upper bound on a single scan. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}
