//! Accounts module - fetching account lists and keeping the shared
//! snapshot fresh.

mod accounts_refresh;
mod accounts_source;


// Re-export the public interface
pub use accounts_refresh::{SnapshotRefresher, ACCOUNTS_REFRESH_INTERVAL_SECS};
pub use accounts_source::{AccountSource, ApiAccountSource, ENDPOINT_ACCOUNTS, ENDPOINT_BANK_ACCOUNTS};
