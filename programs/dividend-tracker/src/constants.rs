pub const TRACKER_SEED: &[u8] = b"tracker";
pub const HOLDER_SEED: &[u8] = b"holder";

/// Implied decimals of tracked token balances
pub const DECIMALS: u8 = 18;

/// One whole token in base units
pub const ONE_TOKEN: u128 = 1_000_000_000_000_000_000;

/// Holders below 10k whole tokens earn no new dividends
pub const MIN_BALANCE_FOR_DIVIDENDS: u128 = 10_000 * ONE_TOKEN;

/// Time constants
pub const SECONDS_PER_HOUR: i64 = 3_600;
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Auto-claim cooldown bounds
pub const DEFAULT_CLAIM_WAIT: i64 = SECONDS_PER_HOUR;
pub const MIN_CLAIM_WAIT: i64 = SECONDS_PER_HOUR;
pub const MAX_CLAIM_WAIT: i64 = SECONDS_PER_DAY;

/// Capacity of the holder registry
pub const MAX_HOLDERS: usize = 4_096;

/// Compute units reserved for visiting one holder in `process`
pub const DEFAULT_COST_PER_ITERATION: u64 = 10_000;

/// log2 of the fixed-point magnitude applied to dividend-per-share
pub const MAGNITUDE_BITS: usize = 128;
