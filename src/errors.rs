use thiserror::Error;

/// Unified error type for model, service, and storage layers.
///
/// Every variant is recoverable: the failed operation is rejected and the
/// application state is left unchanged.
#[derive(Debug, Error)]
pub enum FinanceError {
    #[error("Transaction not found: {0}")]
    TransactionNotFound(u64),
    #[error("Budget not found: {0}")]
    BudgetNotFound(String),
    #[error("Investment not found: {0}")]
    InvestmentNotFound(String),
    #[error("Goal not found: {0}")]
    GoalNotFound(String),
    #[error("Invalid input: {0}")]
    Validation(String),
    #[error("Malformed snapshot: {0}")]
    MalformedSnapshot(String),
    #[error("Persistence error: {0}")]
    Storage(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, FinanceError>;

impl From<std::io::Error> for FinanceError {
    fn from(err: std::io::Error) -> Self {
        FinanceError::Storage(err.to_string())
    }
}
