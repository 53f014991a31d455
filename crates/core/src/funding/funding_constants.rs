/// Funding endpoints, relative to the versioned API root.
pub const ENDPOINT_TRANSFERS: &str = "funding/transfers";

/// Transfers to an account outside the user's own, addressed by number.
pub const ENDPOINT_TRANSFERS_EXTERNAL: &str = "funding/transfers/external";

pub const ENDPOINT_DEPOSITS: &str = "funding/deposits";

pub const ENDPOINT_WITHDRAWALS: &str = "funding/withdrawals";
