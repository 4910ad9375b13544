use serde::{Deserialize, Serialize};

/// One expense record as it travels over the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Store-assigned identifier, unique for the lifetime of the store
    pub id: u64,
    /// Title of the expense (trimmed, non-empty)
    pub title: String,
    /// Amount spent (always positive)
    pub amount: f64,
    /// Free-form category (trimmed, non-empty)
    pub category: String,
    /// Creation timestamp (RFC 3339)
    pub date: String,
    /// Whether the amount exceeds the highlight threshold
    pub highlighted: bool,
}

/// Request body for creating an expense. Fields carry the raw text the user
/// typed; the backend trims and parses them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateExpenseRequest {
    pub title: String,
    /// Amount as entered, e.g. "4500" or "7500.50"
    pub amount: String,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseListResponse {
    pub expenses: Vec<FormattedExpense>,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TotalResponse {
    pub total: f64,
    /// Total rendered by the display policy, e.g. "₹12,000.50"
    pub formatted: String,
    pub count: usize,
}

/// Represents a formatted expense for display purposes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattedExpense {
    pub id: u64,
    pub title: String,
    pub category: String,
    pub formatted_date: String,
    pub formatted_amount: String,
    pub highlighted: bool,
    pub raw_amount: f64,
}

/// Machine-readable failure kind so clients branch on the code rather than
/// parsing message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    InvalidTitle,
    InvalidAmount,
    InvalidCategory,
    NotFound,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: ErrorCode,
    pub message: String,
}
