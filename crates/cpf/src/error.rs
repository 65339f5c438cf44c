//! Error types for the toolkit.

use cpf_core::{CoreError, ValidationError};
use thiserror::Error;

/// Errors that can occur during toolkit operations.
#[derive(Debug, Error)]
pub enum CpfError {
    /// Input was not a valid CPF.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Digit construction error.
    #[error("digit error: {0}")]
    Core(#[from] CoreError),

    /// Requested batch exceeds the configured limit.
    #[error("batch of {requested} exceeds limit of {limit}")]
    BatchTooLarge { requested: usize, limit: usize },
}

/// Result type for toolkit operations.
pub type Result<T> = std::result::Result<T, CpfError>;
