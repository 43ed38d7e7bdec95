//! Parser for nmap's open-ports table.
//!
//! Only the table between the `PORT STATE SERVICE ...` header and the first
//! blank line (or the `Nmap done` trailer) is read. Rows that are not in
//! the `open` state, or whose port column is not a number, are skipped.

use tracing::{debug, trace};

use crate::domain::{PortEntry, ScanResult};

/// First token of the results table header.
const TABLE_HEADER: &str = "PORT";

/// Trailer nmap prints once the run has finished.
const END_MARKER: &str = "Nmap done";

/// State column value for ports accepting connections.
const OPEN_STATE: &str = "open";

/// Extract open ports from nmap's normal (human-readable) output.
///
/// Never fails: missing header yields an empty result, malformed rows are
/// ignored, and a port listed twice keeps the last service seen.
pub fn parse_scan_output(output: &str) -> ScanResult {
    let mut result = ScanResult::new();
    let mut in_table = false;
    let mut skipped = 0usize;

    for line in output.lines() {
        if !in_table {
            in_table = line.split_whitespace().next() == Some(TABLE_HEADER);
            continue;
        }

        if line.trim().is_empty() || line.starts_with(END_MARKER) {
            break;
        }

        match parse_port_line(line) {
            Some(entry) => {
                result.insert(entry.port, entry.service);
            }
            None => {
                trace!(line, "Skipping non-open or malformed row");
                skipped += 1;
            }
        }
    }

    debug!(open = result.len(), skipped, "Parsed scan output");
    result
}

/// Parse a single table row such as `22/tcp open ssh OpenSSH 9.6`.
pub fn parse_port_line(line: &str) -> Option<PortEntry> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < 3 || fields[1] != OPEN_STATE {
        return None;
    }

    let port = fields[0].split('/').next()?.parse::<u16>().ok()?;
    Some(PortEntry::new(port, fields[2]))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Starting Nmap 7.94SVN ( https://nmap.org ) at 2024-03-09 14:05 UTC
Nmap scan report for localhost (127.0.0.1)
Host is up (0.000052s latency).
Not shown: 1021 closed tcp ports (conn-refused)
PORT     STATE SERVICE  VERSION
22/tcp   open  ssh      OpenSSH 9.6p1 Ubuntu 3ubuntu13 (Ubuntu Linux; protocol 2.0)
80/tcp   open  http     nginx 1.24.0 (Ubuntu)
631/tcp  open  ipp      CUPS 2.4
Service Info: OS: Linux; CPE: cpe:/o:linux:linux_kernel

Service detection performed. Please report any incorrect results at https://nmap.org/submit/ .
Nmap done: 1 IP address (1 host up) scanned in 6.52 seconds
";

    #[test]
    fn test_parse_full_report() {
        let result = parse_scan_output(SAMPLE);
        assert_eq!(result.len(), 3);
        assert_eq!(result.get(22), Some("ssh"));
        assert_eq!(result.get(80), Some("http"));
        assert_eq!(result.get(631), Some("ipp"));
    }

    #[test]
    fn test_filtered_rows_are_skipped() {
        let output = "PORT      STATE SERVICE\n22/tcp    open  ssh\n80/tcp    filtered http\n";
        let result = parse_scan_output(output);
        let expected: ScanResult = [(22, "ssh")].into_iter().collect();
        assert_eq!(result, expected);
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_scan_output("").is_empty());
    }

    #[test]
    fn test_rows_before_header_ignored() {
        let output = "22/tcp open ssh\nPORT STATE SERVICE\n443/tcp open https\n";
        let result = parse_scan_output(output);
        assert!(!result.contains(22));
        assert_eq!(result.get(443), Some("https"));
    }

    #[test]
    fn test_stops_at_done_marker() {
        let output = "PORT STATE SERVICE\n22/tcp open ssh\nNmap done: 1 IP address\n80/tcp open http\n";
        let result = parse_scan_output(output);
        assert_eq!(result.len(), 1);
        assert!(!result.contains(80));
    }

    #[test]
    fn test_duplicate_port_last_wins() {
        let output = "PORT STATE SERVICE\n8080/tcp open http-proxy\n8080/tcp open http\n";
        let result = parse_scan_output(output);
        assert_eq!(result.get(8080), Some("http"));
    }

    #[test]
    fn test_crlf_output() {
        let output = "PORT STATE SERVICE\r\n3306/tcp open mysql\r\n\r\n5432/tcp open postgresql\r\n";
        let result = parse_scan_output(output);
        assert_eq!(result.len(), 1);
        assert_eq!(result.get(3306), Some("mysql"));
    }

    #[test]
    fn test_parse_port_line() {
        assert_eq!(
            parse_port_line("5432/tcp open  postgresql PostgreSQL DB 14.1"),
            Some(PortEntry::new(5432, "postgresql"))
        );
        assert_eq!(parse_port_line("22/tcp closed ssh"), None);
        assert_eq!(parse_port_line("22/tcp open"), None);
        assert_eq!(parse_port_line("abc/tcp open ssh"), None);
        assert_eq!(parse_port_line("70000/tcp open ssh"), None);
    }
}
