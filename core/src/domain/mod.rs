//! Domain layer - Pure business logic and data models.
//!
//! This module contains domain entities that represent core business concepts.
//! These types have no I/O dependencies and can be tested in isolation.

mod comparison;
mod scan;
mod snapshot;

// Re-export all domain types
pub use comparison::{compare, ComparisonResult, ServiceChange};
pub use scan::{PortEntry, ScanResult};
pub use snapshot::{
    format_timestamp, now_timestamp, Snapshot, TIMESTAMP_FORMAT, TOOL_AUTHOR, TOOL_NAME,
};
