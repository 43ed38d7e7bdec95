//! Scan executor adapters.
//!
//! `NmapExecutor` runs the external scanner; `parser` turns its output
//! into a `ScanResult`.

mod nmap;
pub mod parser;
mod utils;

pub use nmap::{install_hint, NmapExecutor};
pub use parser::{parse_port_line, parse_scan_output};
