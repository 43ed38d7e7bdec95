//! Open-port scan result models.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// ============================================================================
// PortEntry
// ============================================================================

/// One open port together with the service the scanner guessed for it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PortEntry {
    /// TCP port number.
    pub port: u16,
    /// Service name as reported by the scanner (free text).
    pub service: String,
}

impl PortEntry {
    pub fn new(port: u16, service: impl Into<String>) -> Self {
        Self {
            port,
            service: service.into(),
        }
    }
}

impl std::fmt::Display for PortEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Port {} ({})", self.port, self.service)
    }
}

// ============================================================================
// ScanResult
// ============================================================================

/// Open ports discovered by one scan, keyed by port number.
///
/// Each port appears at most once; inserting a port again replaces its
/// service. Serializes as a JSON object of `"port": "service"` pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScanResult {
    ports: BTreeMap<u16, String>,
}

impl ScanResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an open port. Returns the previous service label, if any.
    pub fn insert(&mut self, port: u16, service: impl Into<String>) -> Option<String> {
        self.ports.insert(port, service.into())
    }

    /// Service label for `port`, if it is open.
    pub fn get(&self, port: u16) -> Option<&str> {
        self.ports.get(&port).map(String::as_str)
    }

    pub fn contains(&self, port: u16) -> bool {
        self.ports.contains_key(&port)
    }

    pub fn len(&self) -> usize {
        self.ports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ports.is_empty()
    }

    /// Iterate `(port, service)` pairs in ascending port order.
    pub fn iter(&self) -> impl Iterator<Item = (u16, &str)> + '_ {
        self.ports.iter().map(|(p, s)| (*p, s.as_str()))
    }

    /// Port numbers in ascending order.
    pub fn ports(&self) -> impl Iterator<Item = u16> + '_ {
        self.ports.keys().copied()
    }

    /// Owned entries in ascending port order.
    pub fn entries(&self) -> Vec<PortEntry> {
        self.iter()
            .map(|(port, service)| PortEntry::new(port, service))
            .collect()
    }
}

impl From<BTreeMap<u16, String>> for ScanResult {
    fn from(ports: BTreeMap<u16, String>) -> Self {
        Self { ports }
    }
}

impl<S: Into<String>> FromIterator<(u16, S)> for ScanResult {
    fn from_iter<I: IntoIterator<Item = (u16, S)>>(iter: I) -> Self {
        Self {
            ports: iter.into_iter().map(|(p, s)| (p, s.into())).collect(),
        }
    }
}

impl Extend<PortEntry> for ScanResult {
    fn extend<I: IntoIterator<Item = PortEntry>>(&mut self, iter: I) {
        for entry in iter {
            self.ports.insert(entry.port, entry.service);
        }
    }
}
