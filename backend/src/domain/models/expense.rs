//! Domain model for an expense record.
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Store-assigned, monotonically increasing; never reused after deletion
    pub id: u64,
    pub title: String,
    pub amount: f64,
    pub category: String,
    /// Captured when the record is created, immutable afterwards
    pub created_at: DateTime<FixedOffset>,
}
