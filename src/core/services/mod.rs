//! Validated mutation operations and derived-view computation over
//! [`AppState`](crate::model::AppState).

pub mod budget_service;
pub mod goal_service;
pub mod investment_service;
pub mod report_service;
pub mod summary_service;
pub mod transaction_service;
pub mod user_service;

pub use budget_service::{BudgetLine, BudgetService};
pub use goal_service::GoalService;
pub use investment_service::InvestmentService;
pub use report_service::{DateWindow, IncomeExpenseReport, NetWorthReport, ReportService};
pub use summary_service::{Overview, SummaryService};
pub use transaction_service::{TransactionInput, TransactionService};
pub use user_service::UserService;

use chrono::NaiveDate;

use crate::errors::{FinanceError, Result};

/// Distinguishes whether an upsert created a new record or replaced an
/// existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Inserted,
    Replaced,
}

/// Parses a `YYYY-MM-DD` calendar date, reporting malformed input as a
/// validation failure.
pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    raw.trim()
        .parse::<NaiveDate>()
        .map_err(|_| FinanceError::Validation(format!("invalid date `{}`, expected YYYY-MM-DD", raw)))
}

pub(crate) fn require_text(field: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FinanceError::Validation(format!("{} must not be empty", field)));
    }
    Ok(trimmed.to_string())
}

pub(crate) fn require_finite(field: &str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(FinanceError::Validation(format!("{} must be a number", field)));
    }
    Ok(value)
}

pub(crate) fn require_non_negative(field: &str, value: f64) -> Result<f64> {
    let value = require_finite(field, value)?;
    if value < 0.0 {
        return Err(FinanceError::Validation(format!(
            "{} must not be negative (got {})",
            field, value
        )));
    }
    Ok(value)
}

pub(crate) fn require_positive(field: &str, value: f64) -> Result<f64> {
    let value = require_finite(field, value)?;
    if value <= 0.0 {
        return Err(FinanceError::Validation(format!(
            "{} must be greater than zero (got {})",
            field, value
        )));
    }
    Ok(value)
}
