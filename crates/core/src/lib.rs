//! Aluma Core - Domain entities, calculators, and validation.
//!
//! This crate contains the client-side business logic for the Aluma
//! banking product: the tiered investment return calculator, the funding
//! request builder, and the account snapshot model the funding screens
//! read. It performs no I/O of its own; transports and session storage
//! are implemented by the `aluma-connect` crate.

pub mod accounts;
pub mod constants;
pub mod errors;
pub mod funding;
pub mod plans;
pub mod utils;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
