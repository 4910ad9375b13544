//! Expense table display logic.
//!
//! Converts raw expense records into formatted, user-friendly rows: currency
//! rendering with configurable symbol, precision and digit grouping, plus
//! date formatting. Pure presentation logic independent of any specific UI
//! framework; the configuration is injected so tests pin a fixed policy
//! instead of depending on the host locale.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use shared::FormattedExpense;

use crate::domain::expense_store::ExpenseStore;
use crate::domain::models::expense::Expense;

/// Configuration for expense table display
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExpenseTableConfig {
    pub currency_symbol: String,
    pub decimal_places: u8,
    pub digit_grouping: DigitGrouping,
    pub date_format: DateFormat,
}

/// Thousands-grouping styles for the integer part of an amount
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub enum DigitGrouping {
    /// 12,34,567.00 (lakh/crore grouping)
    Indian,
    /// 1,234,567.00
    Western,
    /// 1234567.00
    None,
}

/// Date formatting options
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub enum DateFormat {
    /// "13 Jun 2025"
    DayMonthYear,
    /// "13/06/2025"
    ShortDate,
    /// "2025-06-13"
    Iso,
}

/// Expense table service that handles all display formatting
#[derive(Debug, Clone)]
pub struct ExpenseTableService {
    config: ExpenseTableConfig,
}

impl ExpenseTableService {
    /// Create a service with the default configuration (rupee symbol,
    /// two decimal places, Indian grouping, day/month-abbreviation/year).
    pub fn new() -> Self {
        Self {
            config: ExpenseTableConfig::default(),
        }
    }

    pub fn with_config(config: ExpenseTableConfig) -> Self {
        Self { config }
    }

    /// Format a list of expenses for table display, flagging the ones the
    /// store classifies as highlighted.
    pub fn format_expenses_for_table(
        &self,
        expenses: &[Expense],
        store: &ExpenseStore,
    ) -> Vec<FormattedExpense> {
        expenses
            .iter()
            .map(|e| self.format_expense(e, store.is_highlighted(e)))
            .collect()
    }

    /// Format a single expense for display
    pub fn format_expense(&self, expense: &Expense, highlighted: bool) -> FormattedExpense {
        FormattedExpense {
            id: expense.id,
            title: expense.title.clone(),
            category: expense.category.clone(),
            formatted_date: self.format_date(&expense.created_at),
            formatted_amount: self.format_amount(expense.amount),
            highlighted,
            raw_amount: expense.amount,
        }
    }

    /// Format an amount with the configured symbol, precision and grouping
    pub fn format_amount(&self, amount: f64) -> String {
        let rendered = format!("{:.*}", self.config.decimal_places as usize, amount);
        let (int_part, frac_part) = match rendered.split_once('.') {
            Some((int_part, frac_part)) => (int_part, Some(frac_part)),
            None => (rendered.as_str(), None),
        };

        let (sign, int_digits) = match int_part.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", int_part),
        };
        let grouped = match self.config.digit_grouping {
            DigitGrouping::Indian => group_indian(int_digits),
            DigitGrouping::Western => group_western(int_digits),
            DigitGrouping::None => int_digits.to_string(),
        };
        let grouped = format!("{}{}", sign, grouped);

        match frac_part {
            Some(frac) => format!("{}{}.{}", self.config.currency_symbol, grouped, frac),
            None => format!("{}{}", self.config.currency_symbol, grouped),
        }
    }

    /// Format a date for display based on configuration
    pub fn format_date(&self, date: &DateTime<FixedOffset>) -> String {
        match self.config.date_format {
            DateFormat::DayMonthYear => date.format("%d %b %Y").to_string(),
            DateFormat::ShortDate => date.format("%d/%m/%Y").to_string(),
            DateFormat::Iso => date.format("%Y-%m-%d").to_string(),
        }
    }
}

impl Default for ExpenseTableService {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for ExpenseTableConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "₹".to_string(),
            decimal_places: 2,
            digit_grouping: DigitGrouping::Indian,
            date_format: DateFormat::DayMonthYear,
        }
    }
}

fn group_western(digits: &str) -> String {
    let mut out = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Last three digits form one group, the rest pair up (12,34,567).
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut out = String::new();
    for (i, ch) in head.chars().enumerate() {
        if i > 0 && (head.len() - i) % 2 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.push(',');
    out.push_str(tail);
    out
}
