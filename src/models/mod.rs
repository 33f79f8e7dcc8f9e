//! Core data models

pub mod transaction;

pub use transaction::{Field, NewTransaction, RawRecord, Transaction, DATE_FORMAT};
