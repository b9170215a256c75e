use std::result::Result as StdResult;

use thiserror::Error;

use crate::domain::ValidationErrors;
use crate::storage::StoreError;

/// Unified error type for domain, storage, and configuration failures.
#[derive(Error, Debug)]
pub enum FinanceError {
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),
    #[error("Duplicate id: {0}")]
    DuplicateId(String),
    #[error("Persistence error: {0}")]
    StorageError(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

pub type Result<T> = StdResult<T, FinanceError>;

impl FinanceError {
    /// Field errors carried by a rejected mutation, if any.
    pub fn validation(&self) -> Option<&ValidationErrors> {
        match self {
            FinanceError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

impl From<ValidationErrors> for FinanceError {
    fn from(errors: ValidationErrors) -> Self {
        FinanceError::Validation(errors)
    }
}

impl From<StoreError> for FinanceError {
    fn from(err: StoreError) -> Self {
        FinanceError::StorageError(err.to_string())
    }
}

impl From<std::io::Error> for FinanceError {
    fn from(err: std::io::Error) -> Self {
        FinanceError::StorageError(err.to_string())
    }
}

impl From<serde_json::Error> for FinanceError {
    fn from(err: serde_json::Error) -> Self {
        FinanceError::StorageError(err.to_string())
    }
}
