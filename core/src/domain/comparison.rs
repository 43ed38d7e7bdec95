//! Baseline comparison.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::ScanResult;

/// Service label drift on a port that is open in both scans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceChange {
    /// Label recorded in the baseline.
    pub old: String,
    /// Label reported by the current scan.
    pub new: String,
}

/// Differences between a baseline scan and a current scan.
///
/// `added`, `removed` and `unchanged` partition the union of both port
/// sets. A port open in both scans is `unchanged` even when its service
/// label differs; such ports are additionally listed in `relabeled`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// Open now, not open in the baseline. Labels from the current scan.
    pub added: ScanResult,
    /// Open in the baseline, not open now. Labels from the baseline.
    pub removed: ScanResult,
    /// Open in both. Labels from the current scan.
    pub unchanged: ScanResult,
    /// Subset of `unchanged` whose service label differs between scans.
    pub relabeled: BTreeMap<u16, ServiceChange>,
}

impl ComparisonResult {
    /// True when any port opened or closed. Label drift alone does not count.
    pub fn has_changes(&self) -> bool {
        !self.added.is_empty() || !self.removed.is_empty()
    }
}

/// Compare two scan results by port identity.
pub fn compare(old: &ScanResult, new: &ScanResult) -> ComparisonResult {
    let mut result = ComparisonResult::default();

    for (port, service) in new.iter() {
        match old.get(port) {
            None => {
                result.added.insert(port, service);
            }
            Some(previous) => {
                result.unchanged.insert(port, service);
                if previous != service {
                    result.relabeled.insert(
                        port,
                        ServiceChange {
                            old: previous.to_string(),
                            new: service.to_string(),
                        },
                    );
                }
            }
        }
    }

    for (port, service) in old.iter() {
        if !new.contains(port) {
            result.removed.insert(port, service);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn scan(entries: &[(u16, &str)]) -> ScanResult {
        entries.iter().map(|(p, s)| (*p, *s)).collect()
    }

    fn keys(result: &ScanResult) -> BTreeSet<u16> {
        result.ports().collect()
    }

    #[test]
    fn test_added_removed_unchanged() {
        let old = scan(&[(22, "ssh"), (80, "http")]);
        let new = scan(&[(22, "ssh"), (443, "https")]);

        let diff = compare(&old, &new);
        assert_eq!(diff.added, scan(&[(443, "https")]));
        assert_eq!(diff.removed, scan(&[(80, "http")]));
        assert_eq!(diff.unchanged, scan(&[(22, "ssh")]));
        assert!(diff.relabeled.is_empty());
        assert!(diff.has_changes());
    }

    #[test]
    fn test_identical_scans_have_no_changes() {
        let old = scan(&[(22, "ssh"), (80, "http")]);

        let diff = compare(&old, &old);
        assert!(diff.added.is_empty());
        assert!(diff.removed.is_empty());
        assert_eq!(diff.unchanged, old);
        assert!(!diff.has_changes());
    }

    #[test]
    fn test_empty_inputs() {
        let diff = compare(&ScanResult::new(), &ScanResult::new());
        assert_eq!(diff, ComparisonResult::default());
        assert!(!diff.has_changes());

        let new = scan(&[(3306, "mysql")]);
        let diff = compare(&ScanResult::new(), &new);
        assert_eq!(diff.added, new);
        assert!(diff.has_changes());
    }

    #[test]
    fn test_relabel_stays_unchanged() {
        let old = scan(&[(8080, "http-proxy")]);
        let new = scan(&[(8080, "http")]);

        let diff = compare(&old, &new);
        assert_eq!(diff.unchanged.get(8080), Some("http"));
        assert!(diff.added.is_empty());
        assert!(diff.removed.is_empty());
        assert!(!diff.has_changes());
        assert_eq!(
            diff.relabeled.get(&8080),
            Some(&ServiceChange {
                old: "http-proxy".to_string(),
                new: "http".to_string(),
            })
        );
    }

    #[test]
    fn test_buckets_partition_union() {
        let old = scan(&[(21, "ftp"), (22, "ssh"), (80, "http"), (139, "netbios-ssn")]);
        let new = scan(&[(22, "ssh"), (80, "nginx"), (443, "https"), (5432, "postgresql")]);

        let diff = compare(&old, &new);
        let added = keys(&diff.added);
        let removed = keys(&diff.removed);
        let unchanged = keys(&diff.unchanged);

        assert!(added.is_disjoint(&removed));
        assert!(added.is_disjoint(&unchanged));
        assert!(removed.is_disjoint(&unchanged));

        let union: BTreeSet<u16> = keys(&old).union(&keys(&new)).copied().collect();
        let covered: BTreeSet<u16> = added
            .iter()
            .chain(removed.iter())
            .chain(unchanged.iter())
            .copied()
            .collect();
        assert_eq!(covered, union);
        assert_eq!(added.len() + removed.len() + unchanged.len(), union.len());
    }

    #[test]
    fn test_symmetry() {
        let a = scan(&[(22, "ssh"), (25, "smtp"), (80, "http")]);
        let b = scan(&[(22, "ssh"), (443, "https")]);

        let forward = compare(&a, &b);
        let backward = compare(&b, &a);
        assert_eq!(keys(&forward.added), keys(&backward.removed));
        assert_eq!(keys(&forward.removed), keys(&backward.added));
        assert_eq!(keys(&forward.unchanged), keys(&backward.unchanged));
    }
}
