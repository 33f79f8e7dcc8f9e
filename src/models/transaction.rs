//! Transaction model and field-level normalization
//!
//! Defines the canonical ledger schema (id, date, type, amount, category,
//! description) and the normalization rules applied whenever raw rows are
//! loaded. Unparseable values become `None` rather than errors, so every
//! downstream query can assume clean types.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{BudgetError, BudgetResult};

/// Date format used in the ledger file (24-hour, local time)
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One ledger row as stored on disk, before any coercion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawRecord {
    #[serde(rename = "ID")]
    pub id: u64,
    #[serde(rename = "Date")]
    pub date: Option<String>,
    #[serde(rename = "Type")]
    pub kind: Option<String>,
    #[serde(rename = "Amount")]
    pub amount: Option<String>,
    #[serde(rename = "Category")]
    pub category: Option<String>,
    #[serde(rename = "Description")]
    pub description: Option<String>,
}

/// An editable or filterable column of the ledger
///
/// The id column is deliberately not addressable here; it is assigned by
/// the store and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Date,
    Type,
    Amount,
    Category,
    Description,
}

impl FromStr for Field {
    type Err = BudgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "date" => Ok(Self::Date),
            "type" => Ok(Self::Type),
            "amount" => Ok(Self::Amount),
            "category" => Ok(Self::Category),
            "description" => Ok(Self::Description),
            other => Err(BudgetError::UnsupportedField(other.to_string())),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Date => write!(f, "Date"),
            Self::Type => write!(f, "Type"),
            Self::Amount => write!(f, "Amount"),
            Self::Category => write!(f, "Category"),
            Self::Description => write!(f, "Description"),
        }
    }
}

/// Caller-supplied fields of a new transaction
///
/// The store assigns the id and timestamp; the amount is carried as raw
/// text so coercion failures surface as `InvalidValue` at the store
/// boundary.
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub kind: String,
    pub amount: String,
    pub category: String,
    pub description: String,
}

/// A single income or expense entry
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    /// Unique identifier, positive, stable once assigned
    pub id: u64,

    /// Transaction timestamp; `None` if the stored value was unparseable
    pub date: Option<NaiveDateTime>,

    /// Transaction type ("Income" / "Expense" by convention, free text accepted)
    pub kind: Option<String>,

    /// Amount; `None` values are excluded from numeric aggregation
    pub amount: Option<Decimal>,

    /// Category label
    pub category: Option<String>,

    /// Free-text description
    pub description: Option<String>,
}

impl Transaction {
    /// Normalize a raw ledger row into a typed transaction
    ///
    /// Never fails: unparseable amounts and dates become `None`, text
    /// fields are trimmed, and empty text becomes `None`. Idempotent with
    /// respect to re-normalizing an already-clean row.
    pub fn normalize(raw: RawRecord) -> Self {
        Self {
            id: raw.id,
            date: raw.date.as_deref().and_then(parse_date),
            kind: normalize_text(raw.kind),
            amount: raw
                .amount
                .as_deref()
                .and_then(|s| s.trim().parse::<Decimal>().ok()),
            category: normalize_text(raw.category),
            description: normalize_text(raw.description),
        }
    }

    /// Convert back to the on-disk representation
    pub fn to_raw(&self) -> RawRecord {
        RawRecord {
            id: self.id,
            date: self.date.map(|d| d.format(DATE_FORMAT).to_string()),
            kind: self.kind.clone(),
            amount: self.amount.map(|a| a.to_string()),
            category: self.category.clone(),
            description: self.description.clone(),
        }
    }

    /// True unless the type case-insensitively equals "income"
    ///
    /// Rows with no type at all are treated as expenses.
    pub fn is_expense(&self) -> bool {
        !matches!(&self.kind, Some(k) if k.eq_ignore_ascii_case("income"))
    }

    /// True if every field other than the id is null
    pub fn is_blank(&self) -> bool {
        self.date.is_none()
            && self.kind.is_none()
            && self.amount.is_none()
            && self.category.is_none()
            && self.description.is_none()
    }

    /// Set a single field from raw text
    ///
    /// Amount must coerce to a decimal and Date to a known timestamp
    /// format; either failure is `InvalidValue` and the transaction is
    /// left untouched. Text fields are trimmed, with empty input clearing
    /// the field.
    pub fn set_field(&mut self, field: Field, value: &str) -> BudgetResult<()> {
        match field {
            Field::Date => {
                let parsed = parse_date(value)
                    .ok_or_else(|| BudgetError::invalid_value(field.to_string(), value))?;
                self.date = Some(parsed);
            }
            Field::Amount => {
                let parsed = value
                    .trim()
                    .parse::<Decimal>()
                    .map_err(|_| BudgetError::invalid_value(field.to_string(), value))?;
                self.amount = Some(parsed);
            }
            Field::Type => self.kind = normalize_text(Some(value.to_string())),
            Field::Category => self.category = normalize_text(Some(value.to_string())),
            Field::Description => self.description = normalize_text(Some(value.to_string())),
        }
        Ok(())
    }
}

/// Trim a text field, mapping empty or missing input to `None`
fn normalize_text(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Parse a timestamp, accepting a bare date as midnight
fn parse_date(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, DATE_FORMAT) {
        return Some(dt);
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}
