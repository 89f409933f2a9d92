use std::result::Result as StdResult;

use thiserror::Error;

/// Unified error type for domain and storage layers.
///
/// Every variant is recoverable at the call site: the rejected operation
/// leaves the in-memory budget unchanged and the caller decides how to
/// inform the user.
#[derive(Error, Debug)]
pub enum BudgetError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Folder name cannot be empty")]
    EmptyName,
    #[error("Folder `{0}` already exists")]
    DuplicateName(String),
    #[error("Folder not found: {0}")]
    NotFound(String),
    #[error("Persistence error: {0}")]
    PersistenceError(String),
}

pub type Result<T> = StdResult<T, BudgetError>;

impl From<std::io::Error> for BudgetError {
    fn from(err: std::io::Error) -> Self {
        BudgetError::PersistenceError(err.to_string())
    }
}

impl From<serde_json::Error> for BudgetError {
    fn from(err: serde_json::Error) -> Self {
        BudgetError::PersistenceError(err.to_string())
    }
}
