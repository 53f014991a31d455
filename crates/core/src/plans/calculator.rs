//! Tiered return calculator.

use std::str::FromStr;

use log::warn;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::errors::{Error, Result};

use super::plan_model::Calculation;
use super::plan_tables::find_plan;

const PERCENT_DIVISOR: Decimal = dec!(100);

/// Prices `amount` against the tier table of the plan identified by
/// `plan_code`.
///
/// The scan is first-match-wins over the table order: the selected tier
/// is the first whose bound is `>= amount`, so an amount exactly on a
/// boundary lands in the lower tier. Amounts below the plan minimum
/// produce [`Calculation::BelowMinimum`] with the plan's message; amounts
/// above every bound produce [`Calculation::OutOfRange`].
///
/// Pure function of its inputs; calling it twice with the same arguments
/// yields identical results.
pub fn compute(plan_code: &str, amount: Decimal) -> Result<Calculation> {
    let plan = find_plan(plan_code).ok_or_else(|| Error::UnknownPlan(plan_code.to_string()))?;

    if amount < plan.minimum {
        return Ok(Calculation::BelowMinimum {
            message: plan.minimum_message,
        });
    }

    for tier in plan.tiers {
        if amount <= tier.bound {
            let total_return = amount * Decimal::from(tier.rate) / PERCENT_DIVISOR;
            let net_profit = (total_return - amount).round_dp(DISPLAY_DECIMAL_PRECISION);
            return Ok(Calculation::Quote {
                rate_percent: tier.rate,
                total_return,
                net_profit,
            });
        }
    }

    Ok(Calculation::OutOfRange)
}

/// Variant of [`compute`] for raw form input.
///
/// The amount field arrives as free text on every keystroke; anything
/// that does not parse as a decimal is treated as zero so an empty or
/// half-typed field reads as "below minimum" rather than an error.
pub fn compute_from_input(plan_code: &str, raw_amount: &str) -> Result<Calculation> {
    compute(plan_code, parse_amount_tolerant(raw_amount))
}

/// Parses a user-typed amount, falling back to zero when it is empty or
/// unparseable.
pub fn parse_amount_tolerant(raw: &str) -> Decimal {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Decimal::ZERO;
    }
    match Decimal::from_str(trimmed) {
        Ok(value) => value,
        Err(err) => {
            warn!(
                "Failed to parse amount '{}': {}. Falling back to zero.",
                trimmed, err
            );
            Decimal::ZERO
        }
    }
}
