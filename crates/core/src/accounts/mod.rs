//! Accounts module - read-only projections of backend account lists.

mod accounts_model;
mod accounts_snapshot;

#[cfg(test)]
mod accounts_model_tests;

// Re-export the public interface
pub use accounts_model::{AccountsSnapshot, BankAccountRef, UserAccountRef};
pub use accounts_snapshot::SnapshotStore;
