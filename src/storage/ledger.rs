//! Ledger store for the CSV backing file
//!
//! Owns the durable transaction collection: load, initialize, add, edit,
//! delete. Single-process, single-writer; every mutation performs its own
//! full load first, so the state an operation sees is whatever was last
//! durably written. Inserts append one row; edits and deletes rewrite the
//! whole file atomically.

use std::path::{Path, PathBuf};

use chrono::Local;
use rust_decimal::Decimal;

use crate::config::BudgetPaths;
use crate::error::{BudgetError, BudgetResult};
use crate::models::{Field, NewTransaction, RawRecord, Transaction, DATE_FORMAT};

use super::file_io::{append_csv_record, write_csv_atomic, HEADER};

/// Store backed by a flat CSV ledger file
pub struct LedgerStore {
    path: PathBuf,
}

impl LedgerStore {
    /// Create a store for the configured ledger location
    pub fn new(paths: &BudgetPaths) -> Self {
        Self {
            path: paths.ledger_file(),
        }
    }

    /// Create a store for an explicit file path (useful for testing)
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// The ledger file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load and normalize every transaction in the ledger
    ///
    /// A missing or zero-length file is an empty store, never an error.
    /// A file that does not match the expected schema is a `ParseFailure`.
    pub fn load(&self) -> BudgetResult<Vec<Transaction>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let len = std::fs::metadata(&self.path)
            .map_err(|e| {
                BudgetError::Storage(format!("Failed to stat {}: {}", self.path.display(), e))
            })?
            .len();
        if len == 0 {
            return Ok(Vec::new());
        }

        let mut reader = csv::Reader::from_path(&self.path).map_err(|e| {
            BudgetError::Storage(format!("Failed to open {}: {}", self.path.display(), e))
        })?;

        let headers = reader
            .headers()
            .map_err(|e| BudgetError::ParseFailure(format!("Unreadable header: {}", e)))?;
        if !headers.iter().eq(HEADER.iter().copied()) {
            return Err(BudgetError::ParseFailure(format!(
                "Expected columns {:?}, found {:?}",
                HEADER.join(","),
                headers.iter().collect::<Vec<_>>().join(",")
            )));
        }

        let mut transactions = Vec::new();
        for result in reader.deserialize::<RawRecord>() {
            let raw = result.map_err(|e| BudgetError::ParseFailure(e.to_string()))?;
            transactions.push(Transaction::normalize(raw));
        }

        Ok(transactions)
    }

    /// Create a header-only ledger file if it does not already exist
    ///
    /// Idempotent: a no-op when the file is already present.
    pub fn initialize(&self) -> BudgetResult<()> {
        if self.path.exists() {
            return Ok(());
        }
        write_csv_atomic(&self.path, &[])
    }

    /// Add a new transaction, returning its assigned id
    ///
    /// All four fields are required; the amount must parse as a decimal.
    /// The id is one more than the highest id ever assigned, so deleted
    /// ids are never reused. Appends a single row without rewriting
    /// existing ones.
    pub fn add(&self, new: NewTransaction) -> BudgetResult<u64> {
        let kind = required_text("Type", &new.kind)?;
        let category = required_text("Category", &new.category)?;
        let description = required_text("Description", &new.description)?;
        let amount = new
            .amount
            .trim()
            .parse::<Decimal>()
            .map_err(|_| BudgetError::invalid_value("Amount", new.amount.trim()))?;

        let transactions = self.load()?;
        let id = next_id(&transactions);

        let raw = RawRecord {
            id,
            date: Some(Local::now().format(DATE_FORMAT).to_string()),
            kind: Some(kind),
            amount: Some(amount.to_string()),
            category: Some(category),
            description: Some(description),
        };

        append_csv_record(&self.path, &raw)?;
        Ok(id)
    }

    /// Set one field of an existing transaction and rewrite the ledger
    ///
    /// Coercion failures abort before anything is written, so the file is
    /// untouched on error. Returns the updated transaction.
    pub fn edit(&self, id: u64, field: Field, value: &str) -> BudgetResult<Transaction> {
        let mut transactions = self.load()?;

        let transaction = transactions
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| BudgetError::not_found(id))?;

        transaction.set_field(field, value)?;
        let updated = transaction.clone();

        self.rewrite(&transactions)?;
        Ok(updated)
    }

    /// Remove a transaction by id and rewrite the ledger
    ///
    /// `NotFound` leaves the file byte-for-byte unchanged.
    pub fn delete(&self, id: u64) -> BudgetResult<()> {
        let mut transactions = self.load()?;

        let before = transactions.len();
        transactions.retain(|t| t.id != id);
        if transactions.len() == before {
            return Err(BudgetError::not_found(id));
        }

        self.rewrite(&transactions)
    }

    fn rewrite(&self, transactions: &[Transaction]) -> BudgetResult<()> {
        let raws: Vec<RawRecord> = transactions.iter().map(Transaction::to_raw).collect();
        write_csv_atomic(&self.path, &raws)
    }
}

/// Next id: one past the highest assigned so far
fn next_id(transactions: &[Transaction]) -> u64 {
    transactions.iter().map(|t| t.id).max().unwrap_or(0) + 1
}

fn required_text(field: &str, value: &str) -> BudgetResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(BudgetError::invalid_value(field, value));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, LedgerStore) {
        let temp_dir = TempDir::new().unwrap();
        let store = LedgerStore::with_path(temp_dir.path().join("budget.csv"));
        (temp_dir, store)
    }

    fn sample(kind: &str, amount: &str, category: &str, description: &str) -> NewTransaction {
        NewTransaction {
            kind: kind.to_string(),
            amount: amount.to_string(),
            category: category.to_string(),
            description: description.to_string(),
        }
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let (_temp_dir, store) = create_test_store();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_load_empty_file_is_empty() {
        let (_temp_dir, store) = create_test_store();
        fs::write(store.path(), "").unwrap();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_load_wrong_header_fails() {
        let (_temp_dir, store) = create_test_store();
        fs::write(store.path(), "Date,Type,Amount,Category,Description\n").unwrap();

        let err = store.load().unwrap_err();
        assert!(matches!(err, BudgetError::ParseFailure(_)));
    }

    #[test]
    fn test_initialize_is_idempotent() {
        let (_temp_dir, store) = create_test_store();

        store.initialize().unwrap();
        let first = fs::read_to_string(store.path()).unwrap();

        store.initialize().unwrap();
        let second = fs::read_to_string(store.path()).unwrap();

        assert_eq!(first, "ID,Date,Type,Amount,Category,Description\n");
        assert_eq!(first, second);
    }

    #[test]
    fn test_initialize_keeps_existing_data() {
        let (_temp_dir, store) = create_test_store();
        store.add(sample("Expense", "5", "Food", "Lunch")).unwrap();

        store.initialize().unwrap();
        assert_eq!(store.load().unwrap().len(), 1);
    }

    #[test]
    fn test_add_then_load_round_trips() {
        let (_temp_dir, store) = create_test_store();

        let id = store
            .add(sample(" Expense ", "42.50", " Groceries ", "Weekly shop"))
            .unwrap();
        assert_eq!(id, 1);

        let transactions = store.load().unwrap();
        assert_eq!(transactions.len(), 1);
        let txn = &transactions[0];
        assert_eq!(txn.id, 1);
        assert!(txn.date.is_some());
        assert_eq!(txn.kind.as_deref(), Some("Expense"));
        assert_eq!(txn.amount.unwrap().to_string(), "42.50");
        assert_eq!(txn.category.as_deref(), Some("Groceries"));
        assert_eq!(txn.description.as_deref(), Some("Weekly shop"));
    }

    #[test]
    fn test_add_rejects_bad_amount() {
        let (_temp_dir, store) = create_test_store();
        let err = store
            .add(sample("Expense", "lots", "Food", "Lunch"))
            .unwrap_err();
        assert!(matches!(err, BudgetError::InvalidValue { .. }));
        assert!(!store.path().exists());
    }

    #[test]
    fn test_add_rejects_missing_field() {
        let (_temp_dir, store) = create_test_store();
        let err = store.add(sample("Expense", "5", "  ", "Lunch")).unwrap_err();
        assert!(matches!(err, BudgetError::InvalidValue { .. }));
    }

    #[test]
    fn test_ids_are_not_reused_after_delete() {
        let (_temp_dir, store) = create_test_store();

        store.add(sample("Income", "100", "Salary", "Paycheck")).unwrap();
        let second = store.add(sample("Expense", "40", "Food", "Dinner")).unwrap();
        assert_eq!(second, 2);

        store.delete(1).unwrap();
        let third = store.add(sample("Expense", "10", "Food", "Snack")).unwrap();
        assert_eq!(third, 3);
    }

    #[test]
    fn test_edit_changes_exactly_one_field() {
        let (_temp_dir, store) = create_test_store();
        store.add(sample("Income", "100", "Salary", "Paycheck")).unwrap();
        store.add(sample("Expense", "40", "Food", "Dinner")).unwrap();

        let before = store.load().unwrap();
        let updated = store.edit(2, Field::Amount, "55.25").unwrap();
        assert_eq!(updated.amount.unwrap().to_string(), "55.25");

        let after = store.load().unwrap();
        assert_eq!(after[0], before[0]);
        assert_eq!(after[1].amount.unwrap().to_string(), "55.25");
        assert_eq!(after[1].kind, before[1].kind);
        assert_eq!(after[1].date, before[1].date);
        assert_eq!(after[1].category, before[1].category);
        assert_eq!(after[1].description, before[1].description);
    }

    #[test]
    fn test_edit_bad_amount_leaves_file_untouched() {
        let (_temp_dir, store) = create_test_store();
        store.add(sample("Expense", "40", "Food", "Dinner")).unwrap();
        let before = fs::read_to_string(store.path()).unwrap();

        let err = store.edit(1, Field::Amount, "lots").unwrap_err();
        assert!(matches!(err, BudgetError::InvalidValue { .. }));

        let after = fs::read_to_string(store.path()).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn test_edit_unknown_id_is_not_found() {
        let (_temp_dir, store) = create_test_store();
        store.add(sample("Expense", "40", "Food", "Dinner")).unwrap();

        let err = store.edit(99, Field::Category, "Rent").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_delete_removes_exactly_one_row() {
        let (_temp_dir, store) = create_test_store();
        store.add(sample("Income", "100", "Salary", "Paycheck")).unwrap();
        store.add(sample("Expense", "40", "Food", "Dinner")).unwrap();

        store.delete(1).unwrap();

        let transactions = store.load().unwrap();
        assert_eq!(transactions.len(), 1);
        assert_eq!(transactions[0].id, 2);
    }

    #[test]
    fn test_delete_unknown_id_leaves_file_unchanged() {
        let (_temp_dir, store) = create_test_store();
        store.add(sample("Expense", "40", "Food", "Dinner")).unwrap();
        let before = fs::read_to_string(store.path()).unwrap();

        let err = store.delete(99).unwrap_err();
        assert!(err.is_not_found());

        let after = fs::read_to_string(store.path()).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn test_rewrite_leaves_no_temp_file() {
        let (temp_dir, store) = create_test_store();
        store.add(sample("Expense", "40", "Food", "Dinner")).unwrap();
        store.edit(1, Field::Category, "Groceries").unwrap();

        assert!(!temp_dir.path().join("budget.csv.tmp").exists());
    }
}
