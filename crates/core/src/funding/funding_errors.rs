//! Pre-flight validation failures for funding submissions.

use thiserror::Error;

/// A funding form failed validation before anything was sent.
///
/// Checks run in a fixed order and the first failure wins, so exactly one
/// of these is produced per `build` call. The order is: source account,
/// linked bank account (deposit/withdrawal), transfer destination,
/// distinct accounts (internal transfer), PIN, amount.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FundingError {
    #[error("Select a source account")]
    MissingAccount,

    #[error("Transaction PIN must be exactly 4 digits")]
    InvalidPin,

    #[error("Enter an amount greater than zero")]
    InvalidAmount,

    #[error("Select a destination for the transfer")]
    MissingDestination,

    #[error("Source and destination accounts must differ")]
    SameAccount,

    #[error("Select a linked bank account")]
    MissingBankAccount,
}
