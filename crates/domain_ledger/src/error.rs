//! Ledger domain errors

use rust_decimal::Decimal;
use thiserror::Error;

use core_kernel::MoneyError;

/// Errors that can occur when mutating the ledger
///
/// All variants are input-validation failures. A rejected operation leaves
/// the ledger unchanged.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    /// Payer or share participant not previously registered
    #[error("Unknown participant: {0}")]
    UnknownParticipant(String),

    /// Equal split with no participants
    #[error("No participants provided for equal split")]
    EmptyParticipantSet,

    /// Exact split with no shares
    #[error("No shares provided for exact split")]
    EmptyShareSet,

    /// Exact-split shares do not sum to the stated amount within tolerance
    #[error("Share sum mismatch: expected {expected}, got {actual}")]
    ShareSumMismatch { expected: Decimal, actual: Decimal },

    /// Negative amount or share supplied
    #[error("Invalid amount: {0}")]
    InvalidAmount(Decimal),

    /// Money error
    #[error("Money error: {0}")]
    Money(#[from] MoneyError),
}
