//! Shared helpers.

mod money_utils;
mod pin_utils;

pub use money_utils::format_currency;
pub use pin_utils::{is_valid_pin, sanitize_pin, PIN_LENGTH};
