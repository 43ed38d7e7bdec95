//! Ports layer - Trait definitions (interfaces).
//!
//! This module defines the interfaces that the application layer uses
//! to interact with external systems. Implementations live in `adapters`.

mod scanner;
mod store;

pub use scanner::ScanExecutor;
pub use store::SnapshotRepository;
