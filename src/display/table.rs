//! Transaction table formatting
//!
//! Provides utilities for formatting transactions and summary totals for
//! terminal display. Columns follow the ledger schema order; null fields
//! render as "-".

use rust_decimal::Decimal;

use crate::models::{Transaction, DATE_FORMAT};

/// Format a single transaction as a table row
pub fn format_row(txn: &Transaction) -> String {
    let date = txn
        .date
        .map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_else(|| "-".to_string());
    let amount = txn
        .amount
        .map(|a| a.to_string())
        .unwrap_or_else(|| "-".to_string());

    format!(
        "{:>4} {:19} {:10} {:>10} {:14} {}",
        txn.id,
        date,
        text_or_dash(txn.kind.as_deref()),
        amount,
        truncate(text_or_dash(txn.category.as_deref()), 14),
        text_or_dash(txn.description.as_deref()),
    )
}

/// Format a list of transactions as a table
pub fn format_table(transactions: &[Transaction]) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:>4} {:19} {:10} {:>10} {:14} {}\n",
        "ID", "Date", "Type", "Amount", "Category", "Description"
    ));
    output.push_str(&"-".repeat(78));
    output.push('\n');

    for txn in transactions {
        output.push_str(&format_row(txn));
        output.push('\n');
    }

    output
}

/// Format the budget summary: totals by type, expense totals by category,
/// and the net balance
pub fn format_summary(
    by_type: &[(String, Decimal)],
    by_category: &[(String, Decimal)],
    net: Decimal,
) -> String {
    let mut output = String::new();

    output.push_str("Totals by Type\n");
    output.push_str(&format_totals(by_type));

    output.push_str("\nTotals by Category (expenses)\n");
    output.push_str(&format_totals(by_category));

    output.push_str(&format!("\nNet: {:.2}\n", net));
    output
}

fn format_totals(totals: &[(String, Decimal)]) -> String {
    if totals.is_empty() {
        return "  (none)\n".to_string();
    }

    let mut output = String::new();
    for (name, total) in totals {
        output.push_str(&format!("  {:20} {:>10.2}\n", truncate(name, 20), total));
    }
    output
}

fn text_or_dash(value: Option<&str>) -> &str {
    value.unwrap_or("-")
}

/// Truncate a string to a maximum length
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}
