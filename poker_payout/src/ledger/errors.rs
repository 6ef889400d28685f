//! Ledger error types.

use thiserror::Error;

/// Ledger errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// No record at this position
    #[error("Player {} not found ({count} players)", .index + 1)]
    PlayerNotFound { index: usize, count: usize },
}

/// Result type for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
