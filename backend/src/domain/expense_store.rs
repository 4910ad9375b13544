//! Expense store domain logic.
//!
//! The store is the single owner of all current expense records: it assigns
//! identity, enforces the validation rules, and computes the running total.
//! Callers only ever receive snapshots, never handles into the internal
//! sequence, and every operation runs to completion synchronously.

use chrono::Local;
use tracing::info;

use crate::domain::commands::AddExpenseCommand;
use crate::domain::errors::ExpenseError;
use crate::domain::models::expense::Expense;

/// Amounts strictly above this are flagged for emphasis when rendered.
const HIGHLIGHT_THRESHOLD: f64 = 5000.0;

#[derive(Debug)]
pub struct ExpenseStore {
    expenses: Vec<Expense>,
    next_id: u64,
}

impl ExpenseStore {
    pub fn new() -> Self {
        Self {
            expenses: Vec::new(),
            next_id: 1,
        }
    }

    /// Validate and append a new expense, assigning the next id.
    ///
    /// Checks run in order (title, amount, category) and the first failure
    /// wins. A rejected command mutates nothing; on success the id counter
    /// advances permanently, so ids are never reused even after deletion.
    pub fn add(&mut self, command: AddExpenseCommand) -> Result<Expense, ExpenseError> {
        let title = command.title.trim();
        if title.is_empty() {
            return Err(ExpenseError::InvalidTitle);
        }

        let amount = command
            .amount
            .trim()
            .parse::<f64>()
            .map_err(|_| ExpenseError::InvalidAmount)?;
        if !amount.is_finite() || amount <= 0.0 {
            return Err(ExpenseError::InvalidAmount);
        }

        let category = command.category.trim();
        if category.is_empty() {
            return Err(ExpenseError::InvalidCategory);
        }

        let expense = Expense {
            id: self.next_id,
            title: title.to_string(),
            amount,
            category: category.to_string(),
            created_at: command
                .date
                .unwrap_or_else(|| Local::now().fixed_offset()),
        };
        self.next_id += 1;
        self.expenses.push(expense.clone());

        info!("Added expense {} ({}): {}", expense.id, expense.title, expense.amount);
        Ok(expense)
    }

    /// Remove the expense with the matching id, preserving the order of the
    /// remaining records, and return its snapshot.
    pub fn remove(&mut self, id: u64) -> Result<Expense, ExpenseError> {
        let idx = self
            .expenses
            .iter()
            .position(|e| e.id == id)
            .ok_or(ExpenseError::NotFound(id))?;
        let removed = self.expenses.remove(idx);

        info!("Removed expense {} ({})", removed.id, removed.title);
        Ok(removed)
    }

    /// Snapshot of the current expenses in insertion order. Mutating the
    /// returned vector never affects store state.
    pub fn list(&self) -> Vec<Expense> {
        self.expenses.clone()
    }

    /// Sum of all current amounts, recomputed from membership on every call.
    pub fn total(&self) -> f64 {
        self.expenses.iter().map(|e| e.amount).sum()
    }

    /// Pure classification against the fixed threshold; amounts exactly at
    /// the threshold are not highlighted.
    pub fn is_highlighted(&self, expense: &Expense) -> bool {
        expense.amount > HIGHLIGHT_THRESHOLD
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }
}

impl Default for ExpenseStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, FixedOffset};

    fn fixed_date() -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339("2025-06-13T09:00:00+05:30").unwrap()
    }

    fn add_command(title: &str, amount: &str, category: &str) -> AddExpenseCommand {
        AddExpenseCommand {
            date: Some(fixed_date()),
            ..AddExpenseCommand::new(title, amount, category)
        }
    }

    #[test]
    fn test_add_valid_expense() {
        let mut store = ExpenseStore::new();

        let expense = store
            .add(add_command("Laptop", "4500", "Shopping"))
            .unwrap();

        assert_eq!(expense.id, 1);
        assert_eq!(expense.title, "Laptop");
        assert_eq!(expense.amount, 4500.0);
        assert_eq!(expense.category, "Shopping");
        assert_eq!(expense.created_at, fixed_date());
        assert!(!store.is_highlighted(&expense));
        assert_eq!(store.total(), 4500.0);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_add_highlighted_expense_accumulates_total() {
        let mut store = ExpenseStore::new();
        store.add(add_command("Laptop", "4500", "Shopping")).unwrap();

        let surgery = store
            .add(add_command("Surgery", "7500.50", "Health"))
            .unwrap();

        assert!(store.is_highlighted(&surgery));
        assert_eq!(store.total(), 12000.50);
    }

    #[test]
    fn test_add_trims_title_and_category() {
        let mut store = ExpenseStore::new();

        let expense = store
            .add(add_command("  Groceries  ", " 250.75 ", "  Food  "))
            .unwrap();

        assert_eq!(expense.title, "Groceries");
        assert_eq!(expense.category, "Food");
        assert_eq!(expense.amount, 250.75);
    }

    #[test]
    fn test_add_rejects_empty_title() {
        let mut store = ExpenseStore::new();

        let err = store.add(add_command("", "100", "Food")).unwrap_err();

        assert_eq!(err, ExpenseError::InvalidTitle);
        assert!(store.is_empty());
        assert_eq!(store.total(), 0.0);
    }

    #[test]
    fn test_add_rejects_blank_title_before_checking_amount() {
        let mut store = ExpenseStore::new();

        // Title is checked first, so a bad amount is not the reported error.
        let err = store.add(add_command("   ", "abc", "Food")).unwrap_err();

        assert_eq!(err, ExpenseError::InvalidTitle);
    }

    #[test]
    fn test_add_rejects_bad_amounts() {
        let mut store = ExpenseStore::new();

        for amount in ["-20", "0", "abc", "", "NaN", "inf"] {
            let err = store.add(add_command("Gift", amount, "Other")).unwrap_err();
            assert_eq!(err, ExpenseError::InvalidAmount, "amount {:?}", amount);
        }
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_rejects_empty_category() {
        let mut store = ExpenseStore::new();

        let err = store.add(add_command("Lunch", "12.50", "  ")).unwrap_err();

        assert_eq!(err, ExpenseError::InvalidCategory);
        assert!(store.is_empty());
    }

    #[test]
    fn test_rejected_add_does_not_consume_an_id() {
        let mut store = ExpenseStore::new();

        store.add(add_command("", "100", "Food")).unwrap_err();
        let expense = store.add(add_command("Lunch", "100", "Food")).unwrap();

        assert_eq!(expense.id, 1);
    }

    #[test]
    fn test_ids_are_monotonic_and_never_reused() {
        let mut store = ExpenseStore::new();

        let first = store.add(add_command("Coffee", "5", "Food")).unwrap();
        assert_eq!(first.id, 1);

        store.remove(first.id).unwrap();
        let second = store.add(add_command("Tea", "4", "Food")).unwrap();

        assert_eq!(second.id, 2);
    }

    #[test]
    fn test_remove_returns_snapshot_and_preserves_order() {
        let mut store = ExpenseStore::new();
        store.add(add_command("One", "10", "A")).unwrap();
        store.add(add_command("Two", "20", "B")).unwrap();
        store.add(add_command("Three", "30", "C")).unwrap();

        let removed = store.remove(2).unwrap();

        assert_eq!(removed.title, "Two");
        let remaining: Vec<u64> = store.list().iter().map(|e| e.id).collect();
        assert_eq!(remaining, vec![1, 3]);
        assert_eq!(store.total(), 40.0);
    }

    #[test]
    fn test_remove_unknown_id_fails_without_mutation() {
        let mut store = ExpenseStore::new();
        store.add(add_command("Laptop", "4500", "Shopping")).unwrap();

        let err = store.remove(999).unwrap_err();

        assert_eq!(err, ExpenseError::NotFound(999));
        assert_eq!(store.len(), 1);
        assert_eq!(store.total(), 4500.0);
    }

    #[test]
    fn test_second_remove_of_same_id_fails() {
        let mut store = ExpenseStore::new();
        let expense = store.add(add_command("Laptop", "4500", "Shopping")).unwrap();

        store.remove(expense.id).unwrap();
        let err = store.remove(expense.id).unwrap_err();

        assert_eq!(err, ExpenseError::NotFound(expense.id));
    }

    #[test]
    fn test_total_matches_listed_amounts_through_mutations() {
        let mut store = ExpenseStore::new();
        store.add(add_command("One", "10.25", "A")).unwrap();
        store.add(add_command("Two", "20.50", "B")).unwrap();
        store.add(add_command("Three", "30", "C")).unwrap();
        store.remove(1).unwrap();

        let listed: f64 = store.list().iter().map(|e| e.amount).sum();
        assert_eq!(store.total(), listed);

        store.remove(2).unwrap();
        store.remove(3).unwrap();
        assert_eq!(store.total(), 0.0);
        assert!(store.is_empty());
    }

    #[test]
    fn test_list_returns_defensive_copy() {
        let mut store = ExpenseStore::new();
        store.add(add_command("Laptop", "4500", "Shopping")).unwrap();

        let mut snapshot = store.list();
        snapshot.clear();

        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_highlight_boundary_is_exclusive() {
        let mut store = ExpenseStore::new();
        let at = store.add(add_command("At", "5000", "Other")).unwrap();
        let above = store.add(add_command("Above", "5000.01", "Other")).unwrap();

        assert!(!store.is_highlighted(&at));
        assert!(store.is_highlighted(&above));
    }

    #[test]
    fn test_category_is_free_form() {
        let mut store = ExpenseStore::new();

        // Not restricted to the categories the form UI happens to offer.
        let expense = store
            .add(add_command("Vet", "300", "Pet care"))
            .unwrap();

        assert_eq!(expense.category, "Pet care");
    }

    #[test]
    fn test_add_without_date_uses_current_time() {
        let mut store = ExpenseStore::new();
        let before = Local::now().fixed_offset();

        let expense = store
            .add(AddExpenseCommand::new("Lunch", "12", "Food"))
            .unwrap();

        let after = Local::now().fixed_offset();
        assert!(expense.created_at >= before && expense.created_at <= after);
    }
}
