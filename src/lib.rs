//! Personal budget tracker backed by a flat CSV ledger
//!
//! This library provides the core functionality for the budget tracker
//! CLI: a single-user transaction ledger stored as a local CSV file, with
//! filtering, aggregation, and simple expense charting on top.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Transaction schema and field normalization
//! - `storage`: CSV ledger store with atomic rewrites
//! - `query`: Read-only filtering and aggregation
//! - `display`: Table and chart rendering
//! - `cli`: Command handlers for the binary
//!
//! # Example
//!
//! ```rust,ignore
//! use budget::config::BudgetPaths;
//! use budget::storage::LedgerStore;
//!
//! let paths = BudgetPaths::new()?;
//! let store = LedgerStore::new(&paths);
//! let transactions = store.load()?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod query;
pub mod storage;

pub use error::BudgetError;
