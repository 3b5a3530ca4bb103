//! File input and console output adapters.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Lines};
use std::path::Path;

use finpack_core::alerts::{AlertError, SpendEvent, SpendStream};
use finpack_core::forecast::TimeSeriesPoint;
use finpack_core::ledger::LedgerEntry;
use finpack_core::notify::{Notifier, NotifyError};
use finpack_shared::AppError;
use serde_json::Value;
use tracing::warn;

/// Reads a whole file, mapping a missing file to `NotFound`.
pub fn read_file(path: &Path) -> Result<String, AppError> {
    std::fs::read_to_string(path).map_err(|err| io_error(path, &err))
}

fn io_error(path: &Path, err: &io::Error) -> AppError {
    match err.kind() {
        io::ErrorKind::NotFound => AppError::NotFound(path.display().to_string()),
        _ => AppError::Internal(format!("{}: {err}", path.display())),
    }
}

/// Parses a JSON array of ledger entries.
///
/// Only a document that is not a JSON array is rejected. Individual rows are
/// read leniently so that malformed records reach the verifier as issues:
/// null text fields become empty, other scalars become their text form, an
/// unknown entry type falls back to debit, and a row that is not an object
/// becomes an empty entry.
pub fn parse_ledger(text: &str) -> Result<Vec<LedgerEntry>, AppError> {
    let rows: Vec<Value> = serde_json::from_str(text).map_err(invalid_json)?;
    Ok(rows
        .into_iter()
        .enumerate()
        .map(|(index, row)| ledger_row(index, row))
        .collect())
}

const TEXT_FIELDS: [&str; 5] = ["id", "timestamp", "account", "description", "amount"];
const OPTIONAL_TEXT_FIELDS: [&str; 2] = ["currency", "category"];
const ENTRY_TYPE_FIELDS: [&str; 2] = ["entryType", "entry_type"];

fn ledger_row(index: usize, mut row: Value) -> LedgerEntry {
    let Value::Object(fields) = &mut row else {
        warn!(row = index, "ledger row is not an object");
        return LedgerEntry::default();
    };

    for field in TEXT_FIELDS {
        if let Some(slot) = fields.get_mut(field) {
            *slot = Value::String(text_of(slot));
        }
    }
    for field in OPTIONAL_TEXT_FIELDS {
        if let Some(slot) = fields.get_mut(field)
            && !slot.is_null()
        {
            *slot = Value::String(text_of(slot));
        }
    }
    for field in ENTRY_TYPE_FIELDS {
        if let Some(slot) = fields.get(field)
            && !matches!(slot.as_str(), Some("debit" | "credit"))
        {
            warn!(row = index, value = %slot, "unknown entry type, using debit");
            fields.remove(field);
        }
    }
    match fields.get_mut("tags") {
        Some(Value::Array(tags)) => {
            for tag in tags.iter_mut() {
                *tag = Value::String(text_of(tag));
            }
        }
        Some(Value::Null) | None => {}
        Some(_) => {
            fields.remove("tags");
        }
    }
    match fields.get_mut("metadata") {
        Some(Value::Object(metadata)) => {
            for value in metadata.values_mut() {
                *value = Value::String(text_of(value));
            }
        }
        Some(Value::Null) | None => {}
        Some(_) => {
            fields.remove("metadata");
        }
    }

    let id = fields.get("id").map(text_of).unwrap_or_default();
    serde_json::from_value(row).unwrap_or_else(|err| {
        warn!(row = index, error = %err, "unreadable ledger row");
        LedgerEntry {
            id,
            ..LedgerEntry::default()
        }
    })
}

/// Text form of a JSON value: strings as-is, null as empty, anything else
/// as its JSON encoding.
fn text_of(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Parses a JSON array of time series points.
///
/// Numeric values are accepted alongside string values.
pub fn parse_series(text: &str) -> Result<Vec<TimeSeriesPoint>, AppError> {
    let rows: Vec<Value> = serde_json::from_str(text).map_err(invalid_json)?;
    rows.into_iter()
        .map(|mut row| {
            stringify_field(&mut row, "value");
            serde_json::from_value(row).map_err(invalid_json)
        })
        .collect()
}

fn stringify_field(row: &mut Value, field: &str) {
    if let Some(slot) = row.get_mut(field)
        && let Value::Number(number) = slot
    {
        let text = number.to_string();
        *slot = Value::String(text);
    }
}

#[allow(clippy::needless_pass_by_value)]
fn invalid_json(err: serde_json::Error) -> AppError {
    AppError::Validation(format!("invalid JSON input: {err}"))
}

/// Spend events read lazily from a JSON-lines file. Blank lines are skipped.
pub struct JsonLinesStream {
    lines: Lines<BufReader<File>>,
    line_no: usize,
}

impl JsonLinesStream {
    /// Opens `path` for streaming.
    pub fn open(path: &Path) -> Result<Self, AppError> {
        let file = File::open(path).map_err(|err| io_error(path, &err))?;
        Ok(Self {
            lines: BufReader::new(file).lines(),
            line_no: 0,
        })
    }
}

impl SpendStream for JsonLinesStream {
    fn next_event(&mut self) -> Result<Option<SpendEvent>, AlertError> {
        for line in self.lines.by_ref() {
            self.line_no += 1;
            let line = line.map_err(|err| AlertError::Stream(err.to_string()))?;
            if line.trim().is_empty() {
                continue;
            }
            let event = serde_json::from_str(&line)
                .map_err(|err| AlertError::Stream(format!("line {}: {err}", self.line_no)))?;
            return Ok(Some(event));
        }
        Ok(None)
    }
}

/// Prints each message to stdout, prefixed with its channel.
pub struct StdoutNotifier;

impl Notifier for StdoutNotifier {
    fn post_message(&self, channel: &str, message: &str) -> Result<(), NotifyError> {
        println!("{channel} {message}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use finpack_core::ledger::{AuditService, EntryType};
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_ledger_accepts_numeric_amounts() {
        let entries = parse_ledger(
            r#"[{"id":"e1","timestamp":"2024-01-01","account":"cash",
                 "description":"x","amount":100.5,"entryType":"credit"},
                {"id":"e2","timestamp":"2024-01-02","account":"cash",
                 "description":"y","amount":"7"}]"#,
        )
        .unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].amount, "100.5");
        assert_eq!(entries[0].parsed_amount(), Some(dec!(100.5)));
        assert_eq!(entries[0].entry_type, EntryType::Credit);
        assert_eq!(entries[1].amount, "7");
    }

    #[test]
    fn test_parse_ledger_keeps_malformed_rows() {
        let entries = parse_ledger(
            r#"[{"id":"e1","timestamp":"2024-01-01","account":"cash",
                 "description":"ok","amount":"10","currency":"USD"},
                {"id":"e2","timestamp":"2024-01-01","account":"cash",
                 "description":null,"amount":"10"},
                {"id":7,"timestamp":"2024-01-02","account":"bank",
                 "description":"numeric id","amount":"5","entryType":"transfer"},
                "not an entry"]"#,
        )
        .unwrap();

        assert_eq!(entries.len(), 4);
        assert_eq!(entries[1].description, "");
        assert_eq!(entries[2].id, "7");
        assert_eq!(entries[2].entry_type, EntryType::Debit);
        assert_eq!(entries[3], LedgerEntry::default());

        let report = AuditService::verify_entries(&entries);
        assert!(!report.passed);
        assert_eq!(report.verified, 2);
        assert_eq!(
            report.issues,
            vec![
                "Entry e2 missing required fields",
                "Entry unknown missing required fields",
            ]
        );
    }

    #[test]
    fn test_parse_ledger_stringifies_optional_fields() {
        let entries = parse_ledger(
            r#"[{"id":"e1","timestamp":"t","account":"a","description":"d",
                 "amount":1,"currency":840,"tags":["x",2],"metadata":{"n":1,"z":null}}]"#,
        )
        .unwrap();

        assert_eq!(entries[0].currency.as_deref(), Some("840"));
        assert_eq!(entries[0].tags, Some(vec!["x".to_string(), "2".to_string()]));
        let metadata = entries[0].metadata.as_ref().unwrap();
        assert_eq!(metadata["n"], "1");
        assert_eq!(metadata["z"], "");
    }

    #[test]
    fn test_parse_series_accepts_numeric_values() {
        let points =
            parse_series(r#"[{"timestamp":"t1","value":10},{"timestamp":"t2","value":"12.5"}]"#)
                .unwrap();
        assert_eq!(points[0].value, "10");
        assert_eq!(points[1].value, "12.5");
    }

    #[test]
    fn test_parse_rejects_non_array() {
        assert!(matches!(
            parse_series(r#"{"value":1}"#),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let result = read_file(Path::new("/definitely/not/here.json"));
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
