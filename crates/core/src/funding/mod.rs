//! Funding module - request validation, assembly, and reply classification.

mod funding_builder;
mod funding_constants;
mod funding_errors;
mod funding_model;
mod funding_outcome;


#[cfg(test)]
mod funding_outcome_tests;

// Re-export the public interface
pub use funding_builder::build;
pub use funding_constants::*;
pub use funding_errors::FundingError;
pub use funding_model::{
    BankFundingPayload, ExternalTransferPayload, FundingForm, FundingKind, FundingRequest,
    TransferMode, TransferPayload,
};
pub use funding_outcome::{classify, Outcome, GENERIC_REJECTION_MESSAGE};
