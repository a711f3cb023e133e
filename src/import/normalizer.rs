//! Transaction normalization
//!
//! Maps decoded rows into validated transactions. Bad rows are rejected one
//! at a time and counted; they never abort the batch.

use std::fmt;

use chrono::NaiveDate;

use crate::models::period::format_calendar_date;
use crate::models::{Money, NewTransaction, TransactionKind, FALLBACK_CATEGORY};

use super::decoder::RawRow;

/// Category names a row's category is matched against
#[derive(Debug, Clone, Copy)]
pub struct CategoryNames<'a> {
    pub expense: &'a [String],
    pub income: &'a [String],
}

impl<'a> CategoryNames<'a> {
    pub fn new(expense: &'a [String], income: &'a [String]) -> Self {
        Self { expense, income }
    }

    fn for_kind(&self, kind: TransactionKind) -> &'a [String] {
        match kind {
            TransactionKind::Income => self.income,
            TransactionKind::Expense => self.expense,
        }
    }
}

/// Why a row was dropped
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    InvalidType(String),
    InvalidAmount(String),
    NegativeAmount(String),
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidType(t) => write!(f, "Invalid transaction type \"{}\"", t),
            Self::InvalidAmount(a) => write!(f, "Invalid amount \"{}\"", a),
            Self::NegativeAmount(a) => write!(f, "Negative amount \"{}\"", a),
        }
    }
}

/// A rejected row and the reason it was dropped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowRejection {
    pub line: u64,
    pub reason: RejectReason,
}

impl fmt::Display for RowRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row {}: {}", self.line, self.reason)
    }
}

/// Result of normalizing a batch of rows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedBatch {
    pub accepted: Vec<NewTransaction>,
    pub rejections: Vec<RowRejection>,
}

impl NormalizedBatch {
    pub fn rejected_count(&self) -> usize {
        self.rejections.len()
    }
}

/// Resolve a category against known names
///
/// A blank value becomes "Other". A case-insensitive match yields the stored
/// spelling; anything else is kept as typed (trimmed).
pub fn resolve_category(raw: &str, known: &[String]) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return FALLBACK_CATEGORY.to_string();
    }

    let lowered = trimmed.to_lowercase();
    known
        .iter()
        .find(|name| name.to_lowercase() == lowered)
        .cloned()
        .unwrap_or_else(|| trimmed.to_string())
}

/// Normalize a single row
pub fn normalize_row(
    row: &RawRow,
    names: CategoryNames<'_>,
    today: NaiveDate,
) -> Result<NewTransaction, RejectReason> {
    let raw_type = row.get("type").unwrap_or_default();
    let kind: TransactionKind = raw_type
        .parse()
        .map_err(|_| RejectReason::InvalidType(raw_type.to_string()))?;

    let raw_amount = row.get("amount").unwrap_or_default();
    let amount =
        Money::parse(raw_amount).map_err(|_| RejectReason::InvalidAmount(raw_amount.to_string()))?;
    if amount.is_negative() {
        return Err(RejectReason::NegativeAmount(raw_amount.to_string()));
    }

    let category = resolve_category(row.get("category").unwrap_or_default(), names.for_kind(kind));

    let date = match row.get("date").map(str::trim) {
        Some(d) if !d.is_empty() => d.to_string(),
        _ => format_calendar_date(today),
    };

    let description = row.get("description").unwrap_or_default().trim().to_string();

    Ok(NewTransaction {
        kind,
        description,
        amount,
        category,
        date,
        tags: None,
    })
}

/// Normalize every row, accumulating accepted transactions and rejections
pub fn normalize(rows: &[RawRow], names: CategoryNames<'_>, today: NaiveDate) -> NormalizedBatch {
    rows.iter().fold(NormalizedBatch::default(), |mut batch, row| {
        match normalize_row(row, names, today) {
            Ok(txn) => batch.accepted.push(txn),
            Err(reason) => {
                log::warn!("Skipping row {}: {}", row.line, reason);
                batch.rejections.push(RowRejection {
                    line: row.line,
                    reason,
                });
            }
        }
        batch
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::import::decoder::decode;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn names() -> (Vec<String>, Vec<String>) {
        (
            vec!["Food".to_string(), "Transport".to_string(), "Other".to_string()],
            vec!["Salary".to_string(), "Freelance".to_string(), "Other".to_string()],
        )
    }

    fn row(pairs: &[(&str, &str)]) -> RawRow {
        RawRow::from_pairs(2, pairs.iter().copied())
    }

    #[test]
    fn test_valid_row() {
        let (expense, income) = names();
        let txn = normalize_row(
            &row(&[
                ("type", "Expense"),
                ("description", "  Groceries "),
                ("amount", "42.10"),
                ("category", "food"),
                ("date", "2024-06-01"),
            ]),
            CategoryNames::new(&expense, &income),
            today(),
        )
        .unwrap();

        assert_eq!(txn.kind, TransactionKind::Expense);
        assert_eq!(txn.description, "Groceries");
        assert_eq!(txn.amount, Money::from_cents(4210));
        assert_eq!(txn.category, "Food");
        assert_eq!(txn.date, "2024-06-01");
    }

    #[test]
    fn test_category_matched_against_kind() {
        let (expense, income) = names();
        let names = CategoryNames::new(&expense, &income);

        // "salary" is only an income category
        assert_eq!(resolve_category("salary", names.for_kind(TransactionKind::Income)), "Salary");
        assert_eq!(resolve_category("salary", names.for_kind(TransactionKind::Expense)), "salary");
    }

    #[test]
    fn test_unknown_and_blank_categories() {
        let (expense, _) = names();
        assert_eq!(resolve_category("  Gym ", &expense), "Gym");
        assert_eq!(resolve_category("   ", &expense), "Other");
        assert_eq!(resolve_category("", &[]), "Other");
    }

    #[test]
    fn test_missing_date_defaults_to_today() {
        let (expense, income) = names();
        let names = CategoryNames::new(&expense, &income);
        let txn = normalize_row(
            &row(&[("type", "Income"), ("amount", "10"), ("date", "")]),
            names,
            today(),
        )
        .unwrap();
        assert_eq!(txn.date, "2024-06-15");
        assert_eq!(txn.description, "");
        assert_eq!(txn.category, "Other");

        let txn = normalize_row(&row(&[("type", "Income"), ("amount", "10")]), names, today())
            .unwrap();
        assert_eq!(txn.date, "2024-06-15");
    }

    #[test]
    fn test_rejections() {
        let (expense, income) = names();
        let names = CategoryNames::new(&expense, &income);

        assert_eq!(
            normalize_row(&row(&[("type", "expense"), ("amount", "1")]), names, today()),
            Err(RejectReason::InvalidType("expense".into()))
        );
        assert_eq!(
            normalize_row(&row(&[("type", "Expense"), ("amount", "abc")]), names, today()),
            Err(RejectReason::InvalidAmount("abc".into()))
        );
        assert_eq!(
            normalize_row(&row(&[("type", "Expense"), ("amount", "")]), names, today()),
            Err(RejectReason::InvalidAmount("".into()))
        );
        assert_eq!(
            normalize_row(&row(&[("type", "Expense"), ("amount", "-5")]), names, today()),
            Err(RejectReason::NegativeAmount("-5".into()))
        );
    }

    #[test]
    fn test_partial_failure_batch() {
        let text = "type,description,amount,category,date\n\
                    Expense,A,1,Food,2024-06-01\n\
                    Income,B,2,Salary,2024-06-02\n\
                    Transfer,C,3,Food,2024-06-03\n\
                    Expense,D,4,Food,2024-06-04\n\
                    Expense,E,5,Food,2024-06-05\n\
                    refund,F,6,Food,2024-06-06\n\
                    Income,G,7,Freelance,2024-06-07\n";
        let doc = decode(text).unwrap();
        let (expense, income) = names();
        let batch = normalize(&doc.rows, CategoryNames::new(&expense, &income), today());

        assert_eq!(batch.accepted.len(), 5);
        assert_eq!(batch.rejected_count(), 2);
        assert_eq!(batch.rejections[0].line, 4);
        assert_eq!(batch.rejections[1].line, 7);

        let descriptions: Vec<_> = batch.accepted.iter().map(|t| t.description.as_str()).collect();
        assert_eq!(descriptions, vec!["A", "B", "D", "E", "G"]);
    }

    #[test]
    fn test_exponent_amounts_accepted() {
        let text = "type,description,amount,category,date\n\
                    Expense,TV,1e3,Food,2024-06-01\n\
                    Expense,Bus,2.5E1,Transport,2024-06-02\n\
                    Expense,Bad,1e,Food,2024-06-03\n";
        let doc = decode(text).unwrap();
        let (expense, income) = names();
        let batch = normalize(&doc.rows, CategoryNames::new(&expense, &income), today());

        assert_eq!(batch.accepted.len(), 2);
        assert_eq!(batch.accepted[0].amount, Money::from_dollars(1000));
        assert_eq!(batch.accepted[1].amount, Money::from_dollars(25));
        assert_eq!(batch.rejections[0].reason, RejectReason::InvalidAmount("1e".into()));
    }
}
