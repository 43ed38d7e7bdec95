//! Baseline snapshot model.

use chrono::{Local, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use super::ScanResult;

/// Tool identifier written into every snapshot file.
pub const TOOL_NAME: &str = "Network Baseline Tool";

/// Attribution written into every snapshot file.
pub const TOOL_AUTHOR: &str = "Netbaseline Contributors";

/// On-disk timestamp layout, second precision.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Current local time truncated to whole seconds.
pub fn now_timestamp() -> NaiveDateTime {
    let now = Local::now().naive_local();
    now.with_nanosecond(0).unwrap_or(now)
}

/// Render a timestamp in the snapshot layout.
pub fn format_timestamp(ts: &NaiveDateTime) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

/// Saved record of which ports were open on a target at one point in time.
///
/// A snapshot is built once per baseline run and never modified afterwards;
/// all fields are read through accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default = "default_tool")]
    tool: String,
    #[serde(default = "default_author")]
    author: String,
    target: String,
    ports_scanned: String,
    #[serde(with = "timestamp_format")]
    timestamp: NaiveDateTime,
    open_ports: ScanResult,
}

fn default_tool() -> String {
    TOOL_NAME.to_string()
}

fn default_author() -> String {
    TOOL_AUTHOR.to_string()
}

impl Snapshot {
    /// Capture a snapshot stamped with the current local time.
    pub fn new(target: impl Into<String>, ports_scanned: impl Into<String>, open_ports: ScanResult) -> Self {
        Self::at(target, ports_scanned, now_timestamp(), open_ports)
    }

    /// Capture a snapshot with an explicit timestamp.
    pub fn at(
        target: impl Into<String>,
        ports_scanned: impl Into<String>,
        timestamp: NaiveDateTime,
        open_ports: ScanResult,
    ) -> Self {
        Self {
            tool: default_tool(),
            author: default_author(),
            target: target.into(),
            ports_scanned: ports_scanned.into(),
            timestamp,
            open_ports,
        }
    }

    pub fn tool(&self) -> &str {
        &self.tool
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// Port-range expression the baseline scan was run with.
    pub fn ports_scanned(&self) -> &str {
        &self.ports_scanned
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    pub fn open_ports(&self) -> &ScanResult {
        &self.open_ports
    }
}

mod timestamp_format {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::TIMESTAMP_FORMAT;

    pub fn serialize<S>(ts: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&ts.format(TIMESTAMP_FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, TIMESTAMP_FORMAT).map_err(serde::de::Error::custom)
    }
}
