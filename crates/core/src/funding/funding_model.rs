//! Funding request domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::funding_constants::{
    ENDPOINT_DEPOSITS, ENDPOINT_TRANSFERS, ENDPOINT_TRANSFERS_EXTERNAL, ENDPOINT_WITHDRAWALS,
};

/// The funding operations a user can initiate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FundingKind {
    Transfer,
    Deposit,
    Withdrawal,
}

impl FundingKind {
    /// Whether this operation demands a transaction PIN.
    ///
    /// Kept per-kind rather than global: earlier product revisions
    /// confirmed deposits without a PIN, and this flag is what a
    /// rollback would toggle.
    pub fn requires_pin(&self) -> bool {
        match self {
            FundingKind::Transfer | FundingKind::Deposit | FundingKind::Withdrawal => true,
        }
    }
}

/// Routing flag for transfers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransferMode {
    /// Between two accounts owned by the authenticated user.
    #[default]
    Internal,
    /// To an account identified only by its number, owned by an
    /// unverified counterparty.
    External,
}

/// Raw form fields as read from the funding dialog, prior to validation.
///
/// All fields are plain strings; empty means "not filled in". The amount
/// stays textual until [`build`](super::build) parses it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FundingForm {
    /// Source account id.
    pub account_id: String,
    pub transfer_mode: TransferMode,
    /// Destination account id, internal transfers only.
    pub destination_account_id: String,
    /// Destination account number, external transfers only.
    pub destination_account_number: String,
    /// Linked bank account id, deposits and withdrawals only.
    pub bank_account_id: String,
    pub amount: String,
    pub notes: String,
    pub pin: String,
}

/// A validated funding request, ready to serialize as a request body.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FundingRequest {
    Transfer(TransferPayload),
    ExternalTransfer(ExternalTransferPayload),
    Deposit(BankFundingPayload),
    Withdrawal(BankFundingPayload),
}

impl FundingRequest {
    /// Relative endpoint (under the versioned API root) this request
    /// posts to.
    pub fn endpoint(&self) -> &'static str {
        match self {
            FundingRequest::Transfer(_) => ENDPOINT_TRANSFERS,
            FundingRequest::ExternalTransfer(_) => ENDPOINT_TRANSFERS_EXTERNAL,
            FundingRequest::Deposit(_) => ENDPOINT_DEPOSITS,
            FundingRequest::Withdrawal(_) => ENDPOINT_WITHDRAWALS,
        }
    }

    pub fn amount(&self) -> Decimal {
        match self {
            FundingRequest::Transfer(p) => p.amount,
            FundingRequest::ExternalTransfer(p) => p.amount,
            FundingRequest::Deposit(p) | FundingRequest::Withdrawal(p) => p.amount,
        }
    }
}

/// Body for an internal transfer between two of the user's accounts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransferPayload {
    pub from_account_id: String,
    pub to_account_id: String,
    pub amount: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pin: Option<String>,
}

/// Body for a transfer to an external account number.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExternalTransferPayload {
    pub from_account_id: String,
    pub to_account_number: String,
    pub amount: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pin: Option<String>,
}

/// Body shared by deposits and withdrawals against a linked bank account.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BankFundingPayload {
    pub account_id: String,
    pub bank_account_id: String,
    pub amount: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pin: Option<String>,
}
