//! Fixed tier tables for the nine investment plans.
//!
//! Transcribed from the product's commission schedule. Tables are scanned
//! in order with first-match-wins semantics, so entry order is load
//! bearing. Plan 9 carries two trailing entries (`<= 5000` and a second
//! `<= 25000`) whose bounds fall at or below earlier bounds; they can
//! never match and are kept as published pending a product decision.
//! Plan 9's minimum message also names 2000 while its threshold is 1000;
//! both values are preserved as published.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::plan_model::{Plan, Tier};

/// Minimum shared by the fractional-range plans (1-4).
const FRACTIONAL_MINIMUM: Decimal = dec!(0.002);
const FRACTIONAL_MINIMUM_MESSAGE: &str = "Enter the Min 0.002";

/// All plans, indexed by their selector code.
pub static PLANS: [Plan; 9] = [
    Plan {
        code: "1",
        minimum: FRACTIONAL_MINIMUM,
        minimum_message: FRACTIONAL_MINIMUM_MESSAGE,
        tiers: &[
            Tier { bound: dec!(0.019), rate: 104 },
            Tier { bound: dec!(0.049), rate: 105 },
            Tier { bound: dec!(0.149), rate: 106 },
            Tier { bound: dec!(0.499), rate: 108 },
            Tier { bound: dec!(0.999), rate: 115 },
            Tier { bound: dec!(14.999), rate: 130 },
            Tier { bound: dec!(50.000), rate: 150 },
        ],
    },
    Plan {
        code: "2",
        minimum: FRACTIONAL_MINIMUM,
        minimum_message: FRACTIONAL_MINIMUM_MESSAGE,
        tiers: &[
            Tier { bound: dec!(0.019), rate: 113 },
            Tier { bound: dec!(0.049), rate: 116 },
            Tier { bound: dec!(0.149), rate: 119 },
            Tier { bound: dec!(0.499), rate: 125 },
            Tier { bound: dec!(0.999), rate: 150 },
            Tier { bound: dec!(14.999), rate: 210 },
            Tier { bound: dec!(50.000), rate: 300 },
        ],
    },
    Plan {
        code: "3",
        minimum: FRACTIONAL_MINIMUM,
        minimum_message: FRACTIONAL_MINIMUM_MESSAGE,
        tiers: &[
            Tier { bound: dec!(0.019), rate: 200 },
            Tier { bound: dec!(0.049), rate: 300 },
            Tier { bound: dec!(0.149), rate: 500 },
            Tier { bound: dec!(0.499), rate: 750 },
            Tier { bound: dec!(0.999), rate: 1000 },
            Tier { bound: dec!(14.999), rate: 1500 },
            Tier { bound: dec!(50.000), rate: 2000 },
        ],
    },
    // Plan 4 is the historical high-multiplier variant; most of its
    // original tiers were retired and only three remain active.
    Plan {
        code: "4",
        minimum: FRACTIONAL_MINIMUM,
        minimum_message: FRACTIONAL_MINIMUM_MESSAGE,
        tiers: &[
            Tier { bound: dec!(0.049), rate: 1000 },
            Tier { bound: dec!(0.099), rate: 5000 },
            Tier { bound: dec!(50.000), rate: 10000 },
        ],
    },
    Plan {
        code: "5",
        minimum: dec!(500),
        minimum_message: "Min 500",
        tiers: &[Tier { bound: dec!(1000), rate: 800 }],
    },
    Plan {
        code: "6",
        minimum: dec!(1000),
        minimum_message: "Min 1000",
        tiers: &[Tier { bound: dec!(10000), rate: 600 }],
    },
    Plan {
        code: "7",
        minimum: dec!(501),
        minimum_message: "Min 501",
        tiers: &[Tier { bound: dec!(5000), rate: 200 }],
    },
    Plan {
        code: "8",
        minimum: dec!(751),
        minimum_message: "Min 751",
        tiers: &[Tier { bound: dec!(5000), rate: 250 }],
    },
    Plan {
        code: "9",
        minimum: dec!(1000),
        minimum_message: "Min 2000",
        tiers: &[
            Tier { bound: dec!(25000), rate: 2000 },
            Tier { bound: dec!(50000), rate: 4800 },
            Tier { bound: dec!(250000), rate: 6600 },
            // Unreachable: bounds at or below earlier entries.
            Tier { bound: dec!(5000), rate: 1800 },
            Tier { bound: dec!(25000), rate: 2251 },
        ],
    },
];

/// Looks up a plan by its selector code.
pub fn find_plan(code: &str) -> Option<&'static Plan> {
    PLANS.iter().find(|plan| plan.code == code)
}
