//! Property-based tests for ledger audit rules.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::entry::LedgerEntry;
use super::service::AuditService;

/// Strategy to generate a non-negative amount rendered as text.
fn valid_amount() -> impl Strategy<Value = String> {
    (0i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2).to_string())
}

/// Strategy to generate a negative amount rendered as text.
fn negative_amount() -> impl Strategy<Value = String> {
    (1i64..100_000_000i64).prop_map(|cents| Decimal::new(-cents, 2).to_string())
}

/// Strategy to generate a non-empty identifier.
fn ident() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9]{0,8}"
}

/// Strategy to generate a currency code of the wrong length.
fn bad_currency() -> impl Strategy<Value = String> {
    prop_oneof!["[A-Z]{1,2}", "[A-Z]{4,6}"]
}

fn make_entry(id: String, account: String, amount: String) -> LedgerEntry {
    LedgerEntry {
        id,
        timestamp: "2024-01-01T00:00:00Z".into(),
        account,
        description: "generated".into(),
        amount,
        currency: Some("USD".into()),
        ..LedgerEntry::default()
    }
}

/// Strategy to generate an entry that passes every check.
fn valid_entry() -> impl Strategy<Value = LedgerEntry> {
    (ident(), ident(), valid_amount()).prop_map(|(id, account, amount)| make_entry(id, account, amount))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Any entry with an empty required field yields exactly one
    /// "missing required fields" issue and is not verified.
    #[test]
    fn prop_missing_field_single_issue(
        entry in valid_entry(),
        field in 0usize..3,
    ) {
        let mut entry = entry;
        match field {
            0 => entry.id.clear(),
            1 => entry.account.clear(),
            _ => entry.description.clear(),
        }

        let report = AuditService::verify_entries(&[entry]);
        prop_assert_eq!(report.issues.len(), 1);
        prop_assert!(report.issues[0].contains("missing required fields"));
        prop_assert_eq!(report.verified, 0);
        prop_assert!(!report.passed);
    }

    /// Any negative amount yields exactly one "invalid amount" issue.
    #[test]
    fn prop_negative_amount_single_issue(
        id in ident(),
        account in ident(),
        amount in negative_amount(),
    ) {
        let report = AuditService::verify_entries(&[make_entry(id, account, amount)]);
        prop_assert_eq!(report.issues.len(), 1);
        prop_assert!(report.issues[0].contains("invalid amount"));
        prop_assert_eq!(report.verified, 0);
    }

    /// Any non-numeric amount yields exactly one "invalid amount" issue.
    #[test]
    fn prop_non_numeric_amount_single_issue(
        id in ident(),
        account in ident(),
        amount in "[g-z]{1,6}",
    ) {
        let report = AuditService::verify_entries(&[make_entry(id, account, amount)]);
        prop_assert_eq!(report.issues.len(), 1);
        prop_assert!(report.issues[0].contains("invalid amount"));
    }

    /// Any present currency with length other than 3 yields exactly one
    /// "invalid currency code" issue.
    #[test]
    fn prop_bad_currency_single_issue(
        entry in valid_entry(),
        currency in bad_currency(),
    ) {
        let mut entry = entry;
        entry.currency = Some(currency);

        let report = AuditService::verify_entries(&[entry]);
        prop_assert_eq!(report.issues.len(), 1);
        prop_assert!(report.issues[0].contains("invalid currency code"));
    }

    /// `verified + issues == batch size` and `passed` tracks `issues`.
    #[test]
    fn prop_every_entry_accounted_for(
        valid in prop::collection::vec(valid_entry(), 0..10),
        broken in 0usize..5,
    ) {
        let mut entries = valid.clone();
        for i in 0..broken {
            entries.push(make_entry(String::new(), format!("acct{i}"), "1".into()));
        }

        let report = AuditService::verify_entries(&entries);
        prop_assert_eq!(report.verified, valid.len());
        prop_assert_eq!(report.issues.len(), broken);
        prop_assert_eq!(report.passed, broken == 0);
        prop_assert_eq!(report.clone(), AuditService::verify_entries(&entries));
    }

    /// Repeating a batch reports each entry of the copy exactly once,
    /// provided the input batch has unique keys.
    #[test]
    fn prop_repeated_batch_flags_every_copy(
        entries in prop::collection::vec(valid_entry(), 1..10),
    ) {
        let mut unique = entries;
        unique.sort_by(|a, b| a.account.cmp(&b.account).then(a.amount.cmp(&b.amount)));
        unique.dedup_by(|a, b| a.account == b.account && a.amount == b.amount);
        prop_assert!(AuditService::detect_duplicates(&unique).is_empty());

        let mut doubled = unique.clone();
        doubled.extend(unique.iter().cloned());
        let duplicates = AuditService::detect_duplicates(&doubled);
        prop_assert_eq!(duplicates.len(), unique.len());
    }
}
