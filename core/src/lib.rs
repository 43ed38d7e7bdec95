//! Netbaseline Core Library
//!
//! Snapshots the open TCP ports of a host and reports what changed since.
//! Provides functionality to:
//! - Run an nmap scan and parse its open-ports table
//! - Persist a scan as a JSON baseline snapshot
//! - Compare a fresh scan against the baseline
//! - Render the comparison for the console or as JSON
//!
//! # Architecture
//! This library follows hexagonal architecture (ports & adapters):
//! - `domain`: Pure business logic and data models
//! - `ports`: Trait definitions (interfaces)
//! - `adapters`: External system implementations
//! - `application`: Use case services

// Hexagonal architecture layers
pub mod adapters;
pub mod application;
pub mod domain;
pub mod ports;

pub mod config;
pub mod error;
pub mod report;

// Re-export domain types (primary API)
pub use domain::{compare, ComparisonResult, PortEntry, ScanResult, ServiceChange, Snapshot};

// Re-export other commonly used types
pub use adapters::scanner::parse_scan_output;
pub use adapters::{JsonSnapshotStore, NmapExecutor};
pub use application::{BaselineService, CompareOutcome};
pub use config::{ScanSettings, ScannerSettings};
pub use error::{Error, Result};
pub use ports::{ScanExecutor, SnapshotRepository};
pub use report::{BaselineSummary, ComparisonReport};
