//! Auth module - login, registration, and session credential handling.

mod auth_model;
mod auth_service;


// Re-export the public interface
pub use auth_model::{AuthTokens, LoginRequest, RegisterRequest, UserProfile};
pub use auth_service::{AuthService, ENDPOINT_LOGIN, ENDPOINT_REGISTER};
