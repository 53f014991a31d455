//! Currency display helpers.

use rust_decimal::Decimal;

use crate::constants::DISPLAY_DECIMAL_PRECISION;

/// Formats an amount the way the dashboard renders balances:
/// `$1,234.56`, with a leading minus for negative values.
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp(DISPLAY_DECIMAL_PRECISION);
    let negative = rounded.is_sign_negative();
    let text = rounded.abs().to_string();

    let (whole, fraction) = match text.split_once('.') {
        Some((whole, fraction)) => (whole.to_string(), format!("{fraction:0<2}")),
        None => (text, "00".to_string()),
    };

    let mut grouped = String::new();
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}${grouped}.{fraction}")
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::format_currency;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(dec!(0)), "$0.00");
        assert_eq!(format_currency(dec!(12.5)), "$12.50");
        assert_eq!(format_currency(dec!(1234.56)), "$1,234.56");
        assert_eq!(format_currency(dec!(1000000)), "$1,000,000.00");
        assert_eq!(format_currency(dec!(-98765.432)), "-$98,765.43");
    }
}
