//! Typed failures for expense store operations.
use thiserror::Error;

/// Everything here is recoverable from the caller's point of view: the
/// store performs no partial mutation before signalling failure and stays
/// usable after any rejected operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ExpenseError {
    /// Title missing or empty after trimming.
    #[error("title is required")]
    InvalidTitle,
    /// Amount missing, not a number, or not strictly positive.
    #[error("amount must be a positive number")]
    InvalidAmount,
    /// Category missing or empty after trimming.
    #[error("category is required")]
    InvalidCategory,
    /// No expense with this id is currently in the store.
    #[error("no expense found with id {0}")]
    NotFound(u64),
}
