//! Transaction PIN helpers.

/// Required length of the transaction confirmation PIN.
pub const PIN_LENGTH: usize = 4;

/// Strips everything but digits and truncates to [`PIN_LENGTH`].
///
/// Mirrors the PIN field's keystroke filter, so a value sanitized here
/// equals what the form would have let the user type.
pub fn sanitize_pin(input: &str) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(PIN_LENGTH)
        .collect()
}

/// A PIN is valid when it is exactly [`PIN_LENGTH`] ASCII digits.
pub fn is_valid_pin(pin: &str) -> bool {
    pin.len() == PIN_LENGTH && pin.chars().all(|c| c.is_ascii_digit())
}
