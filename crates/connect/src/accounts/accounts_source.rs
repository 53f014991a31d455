//! Account list fetching.

use std::sync::Arc;

use async_trait::async_trait;
use log::warn;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;

use aluma_core::accounts::{BankAccountRef, UserAccountRef};
use aluma_core::errors::{Error, Result};
use aluma_core::funding::{classify, Outcome};

use crate::transport::{Method, Transport};

pub const ENDPOINT_ACCOUNTS: &str = "accounts";
pub const ENDPOINT_BANK_ACCOUNTS: &str = "funding/bank-accounts";

/// Read access to the account lists backing the funding dropdowns.
#[async_trait]
pub trait AccountSource: Send + Sync {
    async fn list_accounts(&self) -> Result<Vec<UserAccountRef>>;
    async fn list_bank_accounts(&self) -> Result<Vec<BankAccountRef>>;
}

// ─────────────────────────────────────────────────────────────────────────────
// API Response Types (internal, for parsing backend responses)
// ─────────────────────────────────────────────────────────────────────────────

/// The backend answers in snake_case and has shipped both a bare array
/// and an object wrapper for the same list; parsing stays tolerant of
/// both, and of `balance` standing in for `cash_balance`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ApiAccount {
    id: String,
    name: Option<String>,
    account_number: Option<String>,
    currency: Option<String>,
    cash_balance: Option<Decimal>,
    balance: Option<Decimal>,
    is_active: Option<bool>,
}

impl From<ApiAccount> for UserAccountRef {
    fn from(api: ApiAccount) -> Self {
        let name = api.name.unwrap_or_else(|| api.id.clone());
        UserAccountRef {
            id: api.id,
            name,
            account_number: api.account_number,
            currency: api.currency.unwrap_or_else(|| "USD".to_string()),
            cash_balance: api.cash_balance.or(api.balance).unwrap_or(Decimal::ZERO),
            is_active: api.is_active.unwrap_or(true),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ApiBankAccount {
    id: String,
    bank_name: Option<String>,
    label: Option<String>,
    account_number_masked: Option<String>,
    is_verified: Option<bool>,
}

impl From<ApiBankAccount> for BankAccountRef {
    fn from(api: ApiBankAccount) -> Self {
        BankAccountRef {
            id: api.id,
            bank_name: api.bank_name.unwrap_or_default(),
            label: api.label.unwrap_or_default(),
            account_number_masked: api.account_number_masked,
            is_verified: api.is_verified.unwrap_or(true),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// ApiAccountSource
// ─────────────────────────────────────────────────────────────────────────────

/// [`AccountSource`] backed by the REST API.
pub struct ApiAccountSource {
    transport: Arc<dyn Transport>,
}

impl ApiAccountSource {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    async fn fetch_list(&self, path: &str, wrapper_key: &str) -> Result<Vec<Value>> {
        let reply = self.transport.send(Method::Get, path, None).await?;
        match classify(reply.status, &reply.body) {
            Outcome::Success(data) => Ok(unwrap_list(data, wrapper_key)),
            Outcome::AuthExpired => Err(Error::Session("session expired".to_string())),
            Outcome::Rejected(message) => Err(Error::Unexpected(format!(
                "Failed to fetch {}: {}",
                path, message
            ))),
            Outcome::TransportFailure(message) => Err(Error::Transport(message)),
        }
    }
}

#[async_trait]
impl AccountSource for ApiAccountSource {
    async fn list_accounts(&self) -> Result<Vec<UserAccountRef>> {
        let items = self.fetch_list(ENDPOINT_ACCOUNTS, "accounts").await?;
        Ok(parse_items::<ApiAccount, UserAccountRef>(items, ENDPOINT_ACCOUNTS))
    }

    async fn list_bank_accounts(&self) -> Result<Vec<BankAccountRef>> {
        let items = self
            .fetch_list(ENDPOINT_BANK_ACCOUNTS, "bank_accounts")
            .await?;
        Ok(parse_items::<ApiBankAccount, BankAccountRef>(
            items,
            ENDPOINT_BANK_ACCOUNTS,
        ))
    }
}

/// Accepts either `[…]` or `{"<wrapper_key>": […]}`.
fn unwrap_list(data: Value, wrapper_key: &str) -> Vec<Value> {
    match data {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove(wrapper_key) {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    }
}

fn parse_items<A, T>(items: Vec<Value>, context: &str) -> Vec<T>
where
    A: serde::de::DeserializeOwned,
    T: From<A>,
{
    items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<A>(item) {
            Ok(parsed) => Some(T::from(parsed)),
            Err(err) => {
                warn!("[Accounts] Skipping malformed entry from {}: {}", context, err);
                None
            }
        })
        .collect()
}
