//! Validation and assembly of funding requests.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::utils::is_valid_pin;

use super::funding_errors::FundingError;
use super::funding_model::{
    BankFundingPayload, ExternalTransferPayload, FundingForm, FundingKind, FundingRequest,
    TransferMode, TransferPayload,
};

/// Validates the form and assembles the request body for `kind`.
///
/// Checks run in a fixed order and the first failure wins: source
/// account, linked bank account (deposit/withdrawal), transfer
/// destination, distinct accounts (internal transfer), PIN, amount.
/// A failed form is never sent to the network.
pub fn build(kind: FundingKind, form: &FundingForm) -> Result<FundingRequest, FundingError> {
    let account_id = form.account_id.trim();
    if account_id.is_empty() {
        return Err(FundingError::MissingAccount);
    }

    match kind {
        FundingKind::Deposit | FundingKind::Withdrawal => {
            if form.bank_account_id.trim().is_empty() {
                return Err(FundingError::MissingBankAccount);
            }
        }
        FundingKind::Transfer => match form.transfer_mode {
            TransferMode::Internal => {
                let destination = form.destination_account_id.trim();
                if destination.is_empty() {
                    return Err(FundingError::MissingDestination);
                }
                if destination == account_id {
                    return Err(FundingError::SameAccount);
                }
            }
            TransferMode::External => {
                if form.destination_account_number.trim().is_empty() {
                    return Err(FundingError::MissingDestination);
                }
            }
        },
    }

    let pin = if kind.requires_pin() {
        if !is_valid_pin(&form.pin) {
            return Err(FundingError::InvalidPin);
        }
        Some(form.pin.clone())
    } else {
        None
    };

    let amount = parse_positive_amount(&form.amount)?;
    let notes = normalize_notes(&form.notes);

    let request = match kind {
        FundingKind::Transfer => match form.transfer_mode {
            TransferMode::Internal => FundingRequest::Transfer(TransferPayload {
                from_account_id: account_id.to_string(),
                to_account_id: form.destination_account_id.trim().to_string(),
                amount,
                notes,
                pin,
            }),
            TransferMode::External => FundingRequest::ExternalTransfer(ExternalTransferPayload {
                from_account_id: account_id.to_string(),
                to_account_number: form.destination_account_number.trim().to_string(),
                amount,
                notes,
                pin,
            }),
        },
        FundingKind::Deposit => FundingRequest::Deposit(bank_payload(account_id, form, amount, notes, pin)),
        FundingKind::Withdrawal => {
            FundingRequest::Withdrawal(bank_payload(account_id, form, amount, notes, pin))
        }
    };

    Ok(request)
}

fn bank_payload(
    account_id: &str,
    form: &FundingForm,
    amount: Decimal,
    notes: Option<String>,
    pin: Option<String>,
) -> BankFundingPayload {
    BankFundingPayload {
        account_id: account_id.to_string(),
        bank_account_id: form.bank_account_id.trim().to_string(),
        amount,
        notes,
        pin,
    }
}

fn parse_positive_amount(raw: &str) -> Result<Decimal, FundingError> {
    let amount = Decimal::from_str(raw.trim()).map_err(|_| FundingError::InvalidAmount)?;
    if amount <= Decimal::ZERO {
        return Err(FundingError::InvalidAmount);
    }
    Ok(amount)
}

fn normalize_notes(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
