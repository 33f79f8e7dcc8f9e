//! CSV file storage layer

pub mod file_io;
pub mod ledger;

pub use ledger::LedgerStore;
