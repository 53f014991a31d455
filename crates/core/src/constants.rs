/// Versioned API root the client targets when no override is supplied.
pub const DEFAULT_API_BASE_URL: &str = "https://aluma-banking-backend.onrender.com/api/v1";

/// Decimal precision for displayed currency amounts.
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;
