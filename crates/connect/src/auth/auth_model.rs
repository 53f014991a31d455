//! Auth request and response models.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body for `auth/login`. The backend expects camelCase here.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    pub device_id: String,
    pub device_name: String,
}

/// Body for `auth/register`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
    /// Optional on the form; sent empty rather than omitted.
    pub phone: String,
    pub secret_question: String,
    pub secret_answer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bitcoin_wallet: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ethereum_wallet: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub litecoin_wallet: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usdt_wallet: Option<String>,
}

/// Token pair returned by a successful login.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthTokens {
    pub access_token: String,
    pub refresh_token: String,
}

/// The authenticated user, as the backend reports it (snake_case).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// The backend is inconsistent here: sometimes a role name, sometimes
    /// a numeric flag. Kept raw and interpreted by [`Self::is_admin`].
    pub role: Option<Value>,
}

impl UserProfile {
    /// Name shown in the dashboard header.
    pub fn display_name(&self) -> &str {
        self.first_name
            .as_deref()
            .or(self.username.as_deref())
            .unwrap_or("User")
    }

    pub fn is_admin(&self) -> bool {
        match &self.role {
            Some(Value::String(role)) => role == "admin" || role == "super_admin" || role == "1",
            Some(Value::Number(role)) => role.as_i64() == Some(1),
            _ => false,
        }
    }
}

/// `data` payload of a successful login envelope.
#[derive(Debug, Clone, Deserialize)]
pub(super) struct LoginData {
    pub tokens: AuthTokens,
    pub user: UserProfile,
}
