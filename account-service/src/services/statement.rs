//! Pure statement computations: balance folding and day filtering.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::LedgerError;
use crate::models::StatementEntry;

/// Accepted format for the `date` query parameter.
pub const STATEMENT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Fold the full statement into a signed balance: credits add, debits subtract.
/// Fails instead of panicking if the running total leaves the `Decimal` range.
pub fn balance(entries: &[StatementEntry]) -> Result<Decimal, LedgerError> {
    entries.iter().try_fold(Decimal::ZERO, |acc, entry| {
        acc.checked_add(entry.signed_amount())
            .ok_or_else(balance_overflow)
    })
}

/// Error for a balance that cannot be represented.
pub fn balance_overflow() -> LedgerError {
    LedgerError::InvalidArgument("balance exceeds the supported range".to_string())
}

/// Entries created on `date` (UTC calendar day), in original order.
pub fn filter_by_date(entries: &[StatementEntry], date: NaiveDate) -> Vec<StatementEntry> {
    entries
        .iter()
        .filter(|entry| entry.created_at.date_naive() == date)
        .cloned()
        .collect()
}

/// Parse a `YYYY-MM-DD` day.
pub fn parse_statement_date(raw: &str) -> Result<NaiveDate, LedgerError> {
    NaiveDate::parse_from_str(raw.trim(), STATEMENT_DATE_FORMAT).map_err(|e| {
        LedgerError::InvalidArgument(format!(
            "Invalid date '{}', expected YYYY-MM-DD: {}",
            raw, e
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EntryType;
    use chrono::{TimeZone, Utc};

    fn entry(entry_type: EntryType, amount: i64, y: i32, m: u32, d: u32, h: u32) -> StatementEntry {
        StatementEntry {
            entry_type,
            amount: Decimal::from(amount),
            description: None,
            created_at: Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap(),
        }
    }

    #[test]
    fn empty_statement_has_zero_balance() {
        assert_eq!(balance(&[]), Ok(Decimal::ZERO));
    }

    #[test]
    fn balance_is_credits_minus_debits() {
        let entries = vec![
            entry(EntryType::Credit, 100, 2024, 1, 1, 9),
            entry(EntryType::Credit, 50, 2024, 1, 1, 10),
            entry(EntryType::Debit, 30, 2024, 1, 2, 11),
            entry(EntryType::Credit, 5, 2024, 1, 3, 12),
            entry(EntryType::Debit, 25, 2024, 1, 3, 13),
        ];

        let credits: Decimal = entries
            .iter()
            .filter(|e| e.entry_type == EntryType::Credit)
            .map(|e| e.amount)
            .sum();
        let debits: Decimal = entries
            .iter()
            .filter(|e| e.entry_type == EntryType::Debit)
            .map(|e| e.amount)
            .sum();

        assert_eq!(balance(&entries), Ok(credits - debits));
        assert_eq!(balance(&entries), Ok(Decimal::from(100)));
    }

    #[test]
    fn balance_can_go_negative_when_folding_debits_only() {
        let entries = vec![entry(EntryType::Debit, 10, 2024, 1, 1, 0)];
        assert_eq!(balance(&entries), Ok(Decimal::from(-10)));
    }

    #[test]
    fn overflowing_fold_is_an_error() {
        let mut entries = vec![
            entry(EntryType::Credit, 0, 2024, 1, 1, 0),
            entry(EntryType::Credit, 0, 2024, 1, 1, 1),
        ];
        entries[0].amount = Decimal::MAX;
        entries[1].amount = Decimal::ONE;

        assert!(matches!(
            balance(&entries),
            Err(LedgerError::InvalidArgument(_))
        ));
    }

    #[test]
    fn filter_keeps_same_day_entries_regardless_of_time() {
        let entries = vec![
            entry(EntryType::Credit, 1, 2024, 3, 10, 0),
            entry(EntryType::Credit, 2, 2024, 3, 11, 0),
            entry(EntryType::Debit, 3, 2024, 3, 10, 23),
            entry(EntryType::Credit, 4, 2024, 3, 9, 23),
        ];

        let day = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let filtered = filter_by_date(&entries, day);

        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].amount, Decimal::from(1));
        assert_eq!(filtered[1].amount, Decimal::from(3));
    }

    #[test]
    fn filter_returns_empty_when_no_entry_matches() {
        let entries = vec![entry(EntryType::Credit, 1, 2024, 3, 10, 12)];
        let day = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        assert!(filter_by_date(&entries, day).is_empty());
    }

    #[test]
    fn parses_iso_day() {
        assert_eq!(
            parse_statement_date("2024-02-29").unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
    }

    #[test]
    fn rejects_malformed_day() {
        for raw in ["", "2024-13-01", "10/03/2024", "2023-02-29", "yesterday"] {
            assert!(matches!(
                parse_statement_date(raw),
                Err(LedgerError::InvalidArgument(_))
            ));
        }
    }
}
