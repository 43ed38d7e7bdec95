//! Application layer - Use case services.
//!
//! Services are thin orchestrators that:
//! - Accept domain types and settings as inputs
//! - Use ports (traits) for external dependencies
//! - Return domain types as outputs

mod baseline_service;

pub use baseline_service::{BaselineService, CompareOutcome};
