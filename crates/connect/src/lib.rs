//! Aluma Connect - backend connectivity for the Aluma banking client.
//!
//! This crate implements the external collaborators the domain core
//! depends on: the HTTP transport, the session credential store, and the
//! account/funding services that drive them against the Aluma backend
//! API.

pub mod accounts;
pub mod auth;
pub mod client;
pub mod funding;
pub mod session;
pub mod transport;

// Re-export commonly used types
pub use accounts::{AccountSource, ApiAccountSource, SnapshotRefresher, ACCOUNTS_REFRESH_INTERVAL_SECS};
pub use auth::{AuthService, LoginRequest, RegisterRequest, UserProfile};
pub use client::ApiClient;
pub use funding::{FundingService, SubmissionOutcome, SubmissionReport, SubmissionState};
pub use session::{
    clear_session, MemorySessionStore, SessionStore, ACCESS_TOKEN_KEY, DEVICE_ID_KEY,
    REFRESH_TOKEN_KEY, USER_KEY,
};
pub use transport::{Method, Transport, TransportReply};
