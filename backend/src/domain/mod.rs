//! Domain layer: the expense store plus the display-formatting policy.

pub mod commands;
pub mod errors;
pub mod expense_store;
pub mod expense_table;
pub mod models;

pub use commands::AddExpenseCommand;
pub use errors::ExpenseError;
pub use expense_store::ExpenseStore;
pub use expense_table::{ExpenseTableConfig, ExpenseTableService};
