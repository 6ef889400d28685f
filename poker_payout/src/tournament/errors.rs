//! Payout error types.

use thiserror::Error;

/// Errors raised by the payout calculator and the weight set
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PayoutError {
    /// Non-positive player count, negative or non-finite money, empty weights
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Weight must be a positive integer
    #[error("Invalid weight: {0} (weights must be positive)")]
    InvalidWeight(i64),

    /// Operation would break a weight set invariant
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
}

impl PayoutError {
    /// Short message suitable for showing to the person operating the tool
    pub fn user_message(&self) -> String {
        match self {
            PayoutError::InvalidWeight(_) => {
                "Please enter valid positive integers separated by commas.".to_string()
            }
            _ => self.to_string(),
        }
    }
}

/// Result type for payout operations
pub type PayoutResult<T> = Result<T, PayoutError>;
