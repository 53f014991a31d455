//! Funding module - the submission workflow against the funding
//! endpoints.

mod funding_service;

#[cfg(test)]
mod funding_service_tests;

// Re-export the public interface
pub use funding_service::{
    FundingService, SubmissionOutcome, SubmissionReport, SubmissionState,
    POST_SUCCESS_REFRESH_DELAY_SECS,
};
