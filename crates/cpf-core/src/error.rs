//! Error types for the CPF core.

use thiserror::Error;

use crate::types::CheckDigits;

/// Errors raised when building digit types from untrusted parts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("digit out of range: {0} (expected 0-9)")]
    DigitOutOfRange(u8),

    #[error("invalid length: expected {expected} digits, got {got}")]
    InvalidLength { expected: usize, got: usize },

    #[error("non-digit character: {0:?}")]
    NonDigit(char),
}

/// Reasons an input string is not a valid CPF.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid format")]
    InvalidFormat,

    #[error("check digit mismatch: expected {expected}, found {found}")]
    CheckDigitMismatch {
        expected: CheckDigits,
        found: CheckDigits,
    },
}
