//! Domain-level command types.
//!
//! These structs are used by the expense store inside the domain layer and
//! are **not** exposed over the public API. The REST layer is responsible
//! for mapping the public DTOs defined in the `shared` crate to these
//! internal types.

use chrono::{DateTime, FixedOffset};

/// Input for adding a new expense.
///
/// Title, amount and category carry the raw text collected from the caller;
/// the store trims and parses them during validation.
#[derive(Debug, Clone)]
pub struct AddExpenseCommand {
    pub title: String,
    pub amount: String,
    pub category: String,
    /// Optional creation-time override - the store captures the current
    /// time when this is `None`. Tests use it to pin a fixed instant.
    pub date: Option<DateTime<FixedOffset>>,
}

impl AddExpenseCommand {
    pub fn new(title: &str, amount: &str, category: &str) -> Self {
        Self {
            title: title.to_string(),
            amount: amount.to_string(),
            category: category.to_string(),
            date: None,
        }
    }
}
