//! Audit service for ledger entry batches.

use std::collections::HashMap;

use tracing::debug;

use super::entry::LedgerEntry;
use super::types::VerificationReport;
use super::validation::verify_entry;

/// Audit service for batch compliance checks.
///
/// Stateless; every call works only on its own input.
pub struct AuditService;

impl AuditService {
    /// Verifies every entry in the batch, in input order.
    ///
    /// Each failing entry contributes exactly one issue. An empty batch
    /// passes with zero verified entries.
    #[must_use]
    pub fn verify_entries(entries: &[LedgerEntry]) -> VerificationReport {
        let mut issues = Vec::new();
        let mut verified = 0;

        for entry in entries {
            match verify_entry(entry) {
                Ok(()) => verified += 1,
                Err(issue) => issues.push(issue.to_string()),
            }
        }

        debug!(
            total = entries.len(),
            verified,
            issues = issues.len(),
            "verified ledger entries"
        );

        VerificationReport {
            passed: issues.is_empty(),
            issues,
            verified,
        }
    }

    /// Reports every repeat of a `timestamp-account-amount` key.
    ///
    /// The first occurrence of a key is never reported. Messages follow the
    /// input order of the repeats, not grouped by key. Entries that differ
    /// only in id, description, or other fields still count as duplicates.
    #[must_use]
    pub fn detect_duplicates(entries: &[LedgerEntry]) -> Vec<String> {
        let mut seen: HashMap<String, usize> = HashMap::with_capacity(entries.len());
        let mut duplicates = Vec::new();

        for entry in entries {
            let key = Self::duplicate_key(entry);
            let count = seen.entry(key.clone()).or_insert(0);
            if *count > 0 {
                duplicates.push(format!("Duplicate entry: {} ({key})", entry.id));
            }
            *count += 1;
        }

        debug!(
            total = entries.len(),
            duplicates = duplicates.len(),
            "scanned ledger entries for duplicates"
        );

        duplicates
    }

    /// Composite key used for duplicate detection.
    #[must_use]
    pub fn duplicate_key(entry: &LedgerEntry) -> String {
        format!("{}-{}-{}", entry.timestamp, entry.account, entry.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, timestamp: &str, account: &str, amount: &str) -> LedgerEntry {
        LedgerEntry {
            id: id.into(),
            timestamp: timestamp.into(),
            account: account.into(),
            description: "Test entry".into(),
            amount: amount.into(),
            currency: Some("USD".into()),
            ..LedgerEntry::default()
        }
    }

    #[test]
    fn test_verify_empty_batch() {
        let report = AuditService::verify_entries(&[]);
        assert_eq!(
            report,
            VerificationReport {
                passed: true,
                issues: vec![],
                verified: 0,
            }
        );
    }

    #[test]
    fn test_verify_mixed_batch() {
        let entries = vec![
            entry("e1", "t1", "cash", "10.00"),
            LedgerEntry {
                account: String::new(),
                ..entry("e2", "t1", "cash", "5")
            },
            entry("e3", "t2", "cash", "oops"),
            LedgerEntry {
                currency: Some("EURO".into()),
                ..entry("e4", "t3", "bank", "1")
            },
            entry("e5", "t4", "bank", "0"),
        ];

        let report = AuditService::verify_entries(&entries);
        assert!(!report.passed);
        assert_eq!(report.verified, 2);
        assert_eq!(
            report.issues,
            vec![
                "Entry e2 missing required fields",
                "Entry e3 has invalid amount: oops",
                "Entry e4 has invalid currency code: EURO",
            ]
        );
    }

    #[test]
    fn test_verify_is_idempotent() {
        let entries = vec![
            entry("e1", "t1", "cash", "10"),
            entry("", "t1", "cash", "10"),
        ];
        assert_eq!(
            AuditService::verify_entries(&entries),
            AuditService::verify_entries(&entries)
        );
    }

    #[test]
    fn test_first_occurrence_not_flagged() {
        let entries = vec![entry("e1", "t1", "A", "10"), entry("e2", "t1", "A", "10")];
        assert_eq!(
            AuditService::detect_duplicates(&entries),
            vec!["Duplicate entry: e2 (t1-A-10)"]
        );
    }

    #[test]
    fn test_duplicates_in_input_order() {
        let entries = vec![
            entry("a1", "t1", "A", "10"),
            entry("b1", "t2", "B", "20"),
            entry("b2", "t2", "B", "20"),
            entry("a2", "t1", "A", "10"),
            entry("a3", "t1", "A", "10"),
            entry("c1", "t1", "A", "10.0"),
        ];
        assert_eq!(
            AuditService::detect_duplicates(&entries),
            vec![
                "Duplicate entry: b2 (t2-B-20)",
                "Duplicate entry: a2 (t1-A-10)",
                "Duplicate entry: a3 (t1-A-10)",
            ]
        );
    }

    #[test]
    fn test_no_duplicates() {
        let entries = vec![entry("e1", "t1", "A", "10"), entry("e2", "t2", "A", "10")];
        assert!(AuditService::detect_duplicates(&entries).is_empty());
        assert!(AuditService::detect_duplicates(&[]).is_empty());
    }

    #[test]
    fn test_audit_batch_scenario() {
        // 2 entries with missing fields, 1 repeat of a clean entry, 2 clean.
        let entries = vec![
            entry("e1", "2024-01-01", "cash", "100"),
            LedgerEntry {
                description: String::new(),
                ..entry("e2", "2024-01-02", "cash", "50")
            },
            entry("e3", "2024-01-03", "bank", "75"),
            entry("", "2024-01-04", "bank", "20"),
            entry("e5", "2024-01-01", "cash", "100"),
        ];

        let report = AuditService::verify_entries(&entries);
        assert!(!report.passed);
        assert_eq!(report.issues.len(), 2);
        assert_eq!(report.verified, 3);

        let duplicates = AuditService::detect_duplicates(&entries);
        assert_eq!(
            duplicates,
            vec!["Duplicate entry: e5 (2024-01-01-cash-100)"]
        );
    }
}
