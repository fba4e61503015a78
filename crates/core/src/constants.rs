/// Decimal precision for display (total value, holding value, percentages)
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Longest user identifier accepted by the holdings resolver
pub const MAX_USER_ID_LEN: usize = 128;

/// Asset types recognized when no explicit set is supplied with the reference data
pub const DEFAULT_ASSET_TYPES: [&str; 6] = ["stock", "bonds", "crypto", "nft", "defi", "real_estate"];
