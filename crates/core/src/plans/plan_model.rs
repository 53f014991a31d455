//! Investment plan domain models.

use rust_decimal::Decimal;
use serde::Serialize;

/// One step of a plan's piecewise rate function.
///
/// A tier matches when `amount <= bound`. Tables are scanned in order and
/// the first match wins; there is no interpolation between tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tier {
    /// Upper bound of the tier, inclusive.
    pub bound: Decimal,
    /// Whole-number percentage applied to the full amount.
    pub rate: u32,
}

/// A fixed investment plan: a minimum investable amount and the ordered
/// tier table that prices everything at or above it.
#[derive(Debug, Clone, Copy)]
pub struct Plan {
    /// The plan selector code as it appears in the plan dropdown.
    pub code: &'static str,
    /// Amounts strictly below this produce [`Calculation::BelowMinimum`].
    pub minimum: Decimal,
    /// Shown verbatim when the amount is below `minimum`.
    pub minimum_message: &'static str,
    pub tiers: &'static [Tier],
}

/// Result of pricing an amount against a plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum Calculation {
    /// A tier matched and the return could be quoted.
    #[serde(rename_all = "camelCase")]
    Quote {
        rate_percent: u32,
        /// `amount * rate / 100`, kept at full precision.
        total_return: Decimal,
        /// `total_return - amount`, rounded for display.
        net_profit: Decimal,
    },
    /// The amount is below the plan's minimum investable amount.
    #[serde(rename_all = "camelCase")]
    BelowMinimum { message: &'static str },
    /// The amount exceeds every tier bound defined for the plan.
    OutOfRange,
}

impl Calculation {
    /// The matched rate, when a tier matched.
    pub fn rate_percent(&self) -> Option<u32> {
        match self {
            Calculation::Quote { rate_percent, .. } => Some(*rate_percent),
            _ => None,
        }
    }
}
