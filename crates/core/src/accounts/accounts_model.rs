//! Account reference models.
//!
//! These are projections of externally-fetched lists, used to populate
//! selection dropdowns and to tell internal destinations from external
//! ones. They are never created or mutated here; the backend owns them.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One of the user's own accounts, as listed by the backend.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserAccountRef {
    pub id: String,
    pub name: String,
    pub account_number: Option<String>,
    pub currency: String,
    pub cash_balance: Decimal,
    pub is_active: bool,
}

/// A linked external bank account available for deposits and withdrawals.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BankAccountRef {
    pub id: String,
    pub bank_name: String,
    pub label: String,
    pub account_number_masked: Option<String>,
    pub is_verified: bool,
}

/// Immutable snapshot of both account lists taken at one fetch.
///
/// A refresh builds a whole new snapshot and swaps it in via
/// [`super::SnapshotStore::replace`]; nothing ever edits a snapshot in
/// place.
#[derive(Debug, Clone, Default)]
pub struct AccountsSnapshot {
    pub user_accounts: Vec<UserAccountRef>,
    pub bank_accounts: Vec<BankAccountRef>,
    pub fetched_at: Option<DateTime<Utc>>,
}

impl AccountsSnapshot {
    pub fn new(user_accounts: Vec<UserAccountRef>, bank_accounts: Vec<BankAccountRef>) -> Self {
        Self {
            user_accounts,
            bank_accounts,
            fetched_at: Some(Utc::now()),
        }
    }

    pub fn find_account(&self, account_id: &str) -> Option<&UserAccountRef> {
        self.user_accounts.iter().find(|a| a.id == account_id)
    }

    /// Whether `account_id` names one of the user's own accounts, i.e. a
    /// valid internal transfer destination.
    pub fn is_internal(&self, account_id: &str) -> bool {
        self.find_account(account_id).is_some()
    }

    /// Accounts offered as funding sources.
    pub fn active_accounts(&self) -> Vec<&UserAccountRef> {
        self.user_accounts.iter().filter(|a| a.is_active).collect()
    }

    /// Bank accounts offered for deposits and withdrawals.
    pub fn verified_bank_accounts(&self) -> Vec<&BankAccountRef> {
        self.bank_accounts.iter().filter(|b| b.is_verified).collect()
    }

    /// Sum of all account balances, as shown on the dashboard header.
    pub fn total_cash_balance(&self) -> Decimal {
        self.user_accounts.iter().map(|a| a.cash_balance).sum()
    }
}
