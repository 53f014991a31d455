//! Login, registration, and logout against the backend.

use std::sync::Arc;

use log::{info, warn};
use uuid::Uuid;

use aluma_core::funding::{classify, Outcome};
use aluma_core::Result;

use crate::session::{
    self, clear_session, SessionStore, ACCESS_TOKEN_KEY, DEVICE_ID_KEY, REFRESH_TOKEN_KEY,
    USER_KEY,
};
use crate::transport::{Method, Transport};

use super::auth_model::{LoginData, LoginRequest, RegisterRequest, UserProfile};

pub const ENDPOINT_LOGIN: &str = "auth/login";
pub const ENDPOINT_REGISTER: &str = "auth/register";

/// Message shown when login credentials are refused.
const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password";

/// Drives the auth endpoints and keeps the session store in sync.
pub struct AuthService {
    transport: Arc<dyn Transport>,
    session: Arc<dyn SessionStore>,
}

impl AuthService {
    pub fn new(transport: Arc<dyn Transport>, session: Arc<dyn SessionStore>) -> Self {
        Self { transport, session }
    }

    /// The stored device identifier, generated and cached on first use.
    pub fn ensure_device_id(&self) -> String {
        if let Some(id) = self.session.get(DEVICE_ID_KEY) {
            return id;
        }
        let id = format!("device_{}", Uuid::new_v4().simple());
        self.session.set(DEVICE_ID_KEY, &id);
        id
    }

    /// Attempts a login; on success the token pair and user profile are
    /// written to the session store.
    pub async fn login(&self, email: &str, password: &str, device_name: &str) -> Result<Outcome> {
        let request = LoginRequest {
            email: email.trim().to_string(),
            password: password.to_string(),
            device_id: self.ensure_device_id(),
            device_name: device_name.to_string(),
        };

        let outcome = self.post(ENDPOINT_LOGIN, serde_json::to_value(&request)?).await;

        // On login, a 401 means refused credentials, not an expired
        // session; there is nothing to tear down yet.
        let outcome = match outcome {
            Outcome::AuthExpired => Outcome::Rejected(INVALID_CREDENTIALS_MESSAGE.to_string()),
            other => other,
        };

        if let Outcome::Success(data) = &outcome {
            match serde_json::from_value::<LoginData>(data.clone()) {
                Ok(login) => {
                    self.session.set(ACCESS_TOKEN_KEY, &login.tokens.access_token);
                    self.session.set(REFRESH_TOKEN_KEY, &login.tokens.refresh_token);
                    self.session
                        .set(USER_KEY, &serde_json::to_string(&login.user)?);
                    info!("[Auth] Logged in as {}", login.user.display_name());
                }
                Err(err) => {
                    warn!("[Auth] Login succeeded but payload was unreadable: {}", err);
                }
            }
        }

        Ok(outcome)
    }

    /// Submits a registration. Nothing is persisted; the user signs in
    /// afterwards.
    pub async fn register(&self, request: &RegisterRequest) -> Result<Outcome> {
        Ok(self.post(ENDPOINT_REGISTER, serde_json::to_value(request)?).await)
    }

    /// Drops the stored credentials.
    pub fn logout(&self) {
        clear_session(self.session.as_ref());
        info!("[Auth] Session cleared");
    }

    /// Whether a bearer token is currently stored.
    pub fn is_authenticated(&self) -> bool {
        session::access_token(self.session.as_ref()).is_some()
    }

    /// The cached user profile from the last successful login.
    pub fn current_user(&self) -> Option<UserProfile> {
        let raw = self.session.get(USER_KEY)?;
        serde_json::from_str(&raw).ok()
    }

    async fn post(&self, path: &str, body: serde_json::Value) -> Outcome {
        match self.transport.send(Method::Post, path, Some(body)).await {
            Ok(reply) => classify(reply.status, &reply.body),
            Err(err) => Outcome::transport_failure(err.to_string()),
        }
    }
}
