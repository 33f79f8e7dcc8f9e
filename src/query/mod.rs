//! Read-only derived views over a loaded transaction collection
//!
//! Pure functions: nothing here touches the ledger file. Grouping keys use
//! the stored casing exactly as written; matching and deduplication are
//! case-insensitive. Null amounts count as zero in sums, and rows or keys
//! that are entirely null drop out of groupings.

use std::collections::{BTreeMap, HashSet};

use rust_decimal::Decimal;

use crate::error::{BudgetError, BudgetResult};
use crate::models::{Field, Transaction};

/// All transactions sorted ascending by date, blank rows dropped
///
/// Rows with no date sort after dated ones; ties break on id. Returns
/// `EmptyCollection` when nothing remains.
pub fn list_all(transactions: &[Transaction]) -> BudgetResult<Vec<Transaction>> {
    let mut rows: Vec<Transaction> = transactions
        .iter()
        .filter(|t| !t.is_blank())
        .cloned()
        .collect();

    rows.sort_by(|a, b| match (a.date, b.date) {
        (Some(x), Some(y)) => x.cmp(&y).then(a.id.cmp(&b.id)),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => a.id.cmp(&b.id),
    });

    if rows.is_empty() {
        return Err(BudgetError::EmptyCollection);
    }
    Ok(rows)
}

/// Distinct values of a filterable field, for building filter menus
///
/// Only Type and Category are filterable. Nulls are excluded; duplicates
/// are collapsed case-insensitively, keeping the casing of the first
/// occurrence; the result is sorted with a case-insensitive key.
pub fn distinct_values(transactions: &[Transaction], field: Field) -> BudgetResult<Vec<String>> {
    ensure_filterable(field)?;

    let mut seen = HashSet::new();
    let mut values = Vec::new();
    for txn in transactions {
        if let Some(value) = text_key(txn, field) {
            if seen.insert(value.to_lowercase()) {
                values.push(value.to_string());
            }
        }
    }

    values.sort_by_key(|v| v.to_lowercase());
    Ok(values)
}

/// All transactions whose field case-insensitively equals `value`
///
/// An empty result is a valid result, not an error.
pub fn filter_by_field(
    transactions: &[Transaction],
    field: Field,
    value: &str,
) -> BudgetResult<Vec<Transaction>> {
    ensure_filterable(field)?;

    Ok(transactions
        .iter()
        .filter(|t| matches!(text_key(t, field), Some(v) if v.eq_ignore_ascii_case(value)))
        .cloned()
        .collect())
}

/// Total amount per transaction type, sorted descending by total
///
/// Rows with no type are dropped from the grouping; null amounts sum as
/// zero. Ties sort by type name.
pub fn sum_by_type(transactions: &[Transaction]) -> Vec<(String, Decimal)> {
    group_sum(
        transactions
            .iter()
            .map(|t| (t.kind.as_deref(), t.amount)),
    )
}

/// Total amount per category over the expense subset, sorted descending
pub fn sum_by_category(transactions: &[Transaction]) -> Vec<(String, Decimal)> {
    group_sum(
        transactions
            .iter()
            .filter(|t| t.is_expense())
            .map(|t| (t.category.as_deref(), t.amount)),
    )
}

/// Net balance: income minus expenses
///
/// Income is the sum over rows whose type case-insensitively equals
/// "income"; everything else is an expense. Null amounts count as zero.
pub fn net_total(transactions: &[Transaction]) -> Decimal {
    let mut income = Decimal::ZERO;
    let mut expenses = Decimal::ZERO;
    for txn in transactions {
        let amount = txn.amount.unwrap_or(Decimal::ZERO);
        if txn.is_expense() {
            expenses += amount;
        } else {
            income += amount;
        }
    }
    income - expenses
}

/// Chart-ready dataset: expense totals per description, sorted descending
pub fn expense_chart_data(transactions: &[Transaction]) -> Vec<(String, Decimal)> {
    group_sum(
        transactions
            .iter()
            .filter(|t| t.is_expense())
            .map(|t| (t.description.as_deref(), t.amount)),
    )
}

fn ensure_filterable(field: Field) -> BudgetResult<()> {
    match field {
        Field::Type | Field::Category => Ok(()),
        other => Err(BudgetError::UnsupportedField(other.to_string())),
    }
}

fn text_key(txn: &Transaction, field: Field) -> Option<&str> {
    match field {
        Field::Type => txn.kind.as_deref(),
        Field::Category => txn.category.as_deref(),
        _ => None,
    }
}

/// Sum amounts grouped by key, dropping null keys, sorted descending by
/// total with the key as tie-break
fn group_sum<'a, I>(pairs: I) -> Vec<(String, Decimal)>
where
    I: Iterator<Item = (Option<&'a str>, Option<Decimal>)>,
{
    let mut totals: BTreeMap<String, Decimal> = BTreeMap::new();
    for (key, amount) in pairs {
        if let Some(key) = key {
            *totals.entry(key.to_string()).or_insert(Decimal::ZERO) +=
                amount.unwrap_or(Decimal::ZERO);
        }
    }

    let mut grouped: Vec<(String, Decimal)> = totals.into_iter().collect();
    grouped.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    grouped
}
