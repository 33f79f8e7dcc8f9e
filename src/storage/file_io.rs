//! CSV file I/O utilities with atomic rewrites
//!
//! Provides safe file operations that won't corrupt the ledger on failure.

use std::fs::{self, File, OpenOptions};
use std::path::Path;

use crate::error::BudgetError;
use crate::models::RawRecord;

/// The canonical ledger header, in schema order
pub const HEADER: [&str; 6] = ["ID", "Date", "Type", "Amount", "Category", "Description"];

/// Rewrite the entire ledger atomically (write to temp, then rename)
///
/// This ensures that the file is either completely written or not modified
/// at all, preventing truncation on crashes or power failures. An empty
/// record slice produces a header-only file.
pub fn write_csv_atomic(path: &Path, records: &[RawRecord]) -> Result<(), BudgetError> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            BudgetError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Create temp file in same directory (important for atomic rename)
    let temp_path = path.with_extension("csv.tmp");

    let file = File::create(&temp_path)
        .map_err(|e| BudgetError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);

    writer
        .write_record(HEADER)
        .map_err(|e| BudgetError::Storage(format!("Failed to write header: {}", e)))?;

    for record in records {
        writer
            .serialize(record)
            .map_err(|e| BudgetError::Storage(format!("Failed to write record: {}", e)))?;
    }

    writer
        .flush()
        .map_err(|e| BudgetError::Storage(format!("Failed to flush data: {}", e)))?;

    // Sync to disk before rename
    let file = writer
        .into_inner()
        .map_err(|e| BudgetError::Storage(format!("Failed to finish write: {}", e)))?;
    file.sync_all()
        .map_err(|e| BudgetError::Storage(format!("Failed to sync data: {}", e)))?;

    // Atomic rename
    fs::rename(&temp_path, path).map_err(|e| {
        // Try to clean up temp file if rename fails
        let _ = fs::remove_file(&temp_path);
        BudgetError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

/// Append a single record, writing the header first iff the file is
/// missing or empty
pub fn append_csv_record(path: &Path, record: &RawRecord) -> Result<(), BudgetError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            BudgetError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    let needs_header = match fs::metadata(path) {
        Ok(meta) => meta.len() == 0,
        Err(_) => true,
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| BudgetError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);

    if needs_header {
        writer
            .write_record(HEADER)
            .map_err(|e| BudgetError::Storage(format!("Failed to write header: {}", e)))?;
    }

    writer
        .serialize(record)
        .map_err(|e| BudgetError::Storage(format!("Failed to write record: {}", e)))?;

    writer
        .flush()
        .map_err(|e| BudgetError::Storage(format!("Failed to flush data: {}", e)))?;

    Ok(())
}
