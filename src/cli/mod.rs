//! CLI command handlers
//!
//! Thin glue between the parsed command line and the core: handlers call
//! the store for mutations, the query engine for reads, and hand results
//! to the display layer. The "no transactions" condition is a message
//! here, not a failure exit.

use std::str::FromStr;

use crate::config::BudgetPaths;
use crate::display::{chart, table};
use crate::error::BudgetResult;
use crate::models::{Field, NewTransaction};
use crate::query;
use crate::storage::LedgerStore;

/// Handle `budget init`
pub fn handle_init(store: &LedgerStore) -> BudgetResult<()> {
    store.initialize()?;
    println!("Ledger ready at {}", store.path().display());
    Ok(())
}

/// Handle `budget add`
pub fn handle_add(
    store: &LedgerStore,
    kind: String,
    amount: String,
    category: String,
    description: String,
) -> BudgetResult<()> {
    let id = store.add(NewTransaction {
        kind,
        amount,
        category,
        description,
    })?;
    println!("Transaction {} added successfully!", id);
    Ok(())
}

/// Handle `budget delete`
pub fn handle_delete(store: &LedgerStore, id: u64) -> BudgetResult<()> {
    store.delete(id)?;
    println!("Transaction {} deleted successfully!", id);
    Ok(())
}

/// Handle `budget edit`
pub fn handle_edit(store: &LedgerStore, id: u64, field: &str, value: &str) -> BudgetResult<()> {
    let field = Field::from_str(field)?;
    let updated = store.edit(id, field, value)?;
    println!("Transaction updated successfully!");
    print!("{}", table::format_table(&[updated]));
    Ok(())
}

/// Handle `budget list`
///
/// With no filter, prints every transaction sorted by date. With `--by`
/// but no `--value`, prints the distinct values of that field so the user
/// can re-run with a choice.
pub fn handle_list(
    store: &LedgerStore,
    by: Option<String>,
    value: Option<String>,
) -> BudgetResult<()> {
    let transactions = store.load()?;

    let Some(field_name) = by else {
        match query::list_all(&transactions) {
            Ok(rows) => print!("{}", table::format_table(&rows)),
            Err(err) if err.is_empty_collection() => println!("No transactions found."),
            Err(err) => return Err(err),
        }
        return Ok(());
    };

    let field = Field::from_str(&field_name)?;
    match value {
        None => {
            let values = query::distinct_values(&transactions, field)?;
            if values.is_empty() {
                println!("No {} values recorded yet.", field);
            } else {
                println!("Available {} values:", field);
                for value in &values {
                    println!("  {}", value);
                }
                println!();
                println!("Re-run with --value <VALUE> to filter.");
            }
        }
        Some(value) => {
            let rows = query::filter_by_field(&transactions, field, &value)?;
            if rows.is_empty() {
                println!("No transactions with {} '{}'.", field, value);
            } else {
                print!("{}", table::format_table(&rows));
            }
        }
    }
    Ok(())
}

/// Handle `budget summary`
///
/// Prints totals by type, expense totals by category and the net balance,
/// then writes the expense chart. An empty store is a message and no
/// chart write.
pub fn handle_summary(store: &LedgerStore, paths: &BudgetPaths) -> BudgetResult<()> {
    let transactions = store.load()?;

    let rows = match query::list_all(&transactions) {
        Ok(rows) => rows,
        Err(err) if err.is_empty_collection() => {
            println!("No transactions found.");
            return Ok(());
        }
        Err(err) => return Err(err),
    };

    let by_type = query::sum_by_type(&rows);
    let by_category = query::sum_by_category(&rows);
    let net = query::net_total(&rows);
    print!("{}", table::format_summary(&by_type, &by_category, net));

    let data = query::expense_chart_data(&rows);
    if !data.is_empty() {
        let chart_path = paths.expense_chart_file();
        chart::render_expense_chart(&data, &chart_path)?;
        println!();
        println!("Expense chart saved to {}", chart_path.display());
    }

    Ok(())
}

/// Handle `budget config`
pub fn handle_config(store: &LedgerStore, paths: &BudgetPaths) -> BudgetResult<()> {
    println!("Budget Tracker Configuration");
    println!("============================");
    println!("Data directory: {}", paths.base_dir().display());
    println!("Ledger file:    {}", store.path().display());
    println!("Charts:         {}", paths.charts_dir().display());
    Ok(())
}
