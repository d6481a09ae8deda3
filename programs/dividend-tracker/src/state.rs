use anchor_lang::prelude::*;

use crate::constants::MAX_HOLDERS;

/// Global ledger and processing configuration for one tracked mint.
/// The account also holds the undistributed dividend lamports.
#[account]
#[derive(Default)]
pub struct DividendTracker {
    /// Signer allowed to report balances and change settings
    pub authority: Pubkey,

    /// Token whose holders earn dividends
    pub mint: Pubkey,

    /// Zero-copy holder registry bound at `initialize`
    pub registry: Pubkey,

    /// Sum of all share-bearing holder balances
    pub total_shares: u128,

    /// Cumulative dividends per share, scaled by 2^128 (little-endian U256 limbs)
    pub magnified_dividend_per_share: [u64; 4],

    /// Lamports ever deposited through `distribute_dividends`
    pub total_distributed: u64,

    /// Lamports ever paid out to holders
    pub total_withdrawn: u64,

    /// Minimum seconds between automatic payouts to one holder
    pub claim_wait: i64,

    /// Compute units charged per holder visited by `process`
    pub cost_per_iteration: u64,

    /// Registry position visited last by `process`
    pub last_processed_index: u32,

    /// Bump for PDA derivation
    pub bump: u8,
}

impl DividendTracker {
    pub const LEN: usize = 8 + // discriminator
        32 + // authority
        32 + // mint
        32 + // registry
        16 + // total_shares
        32 + // magnified_dividend_per_share
        8 +  // total_distributed
        8 +  // total_withdrawn
        8 +  // claim_wait
        8 +  // cost_per_iteration
        4 +  // last_processed_index
        1;   // bump
}

/// Per-wallet dividend record. Never closed, so a wallet that leaves and
/// later rejoins keeps consistent accounting.
#[account]
#[derive(Default)]
pub struct HolderAccount {
    /// Tracker this record belongs to
    pub tracker: Pubkey,

    /// Holder wallet receiving payouts
    pub wallet: Pubkey,

    /// Share-bearing balance (zero below the eligibility threshold)
    pub balance: u128,

    /// Signed correction in two's complement (little-endian U256 limbs)
    pub magnified_correction: [u64; 4],

    /// Lamports already withdrawn
    pub withdrawn: u64,

    /// Unix timestamp of the last payout, 0 if never paid
    pub last_claim_time: i64,

    /// Permanently opted out of dividends
    pub excluded: bool,

    /// Position in the holder registry
    pub registry_index: Option<u32>,

    /// Bump for PDA derivation
    pub bump: u8,
}

impl HolderAccount {
    pub const LEN: usize = 8 + // discriminator
        32 + // tracker
        32 + // wallet
        16 + // balance
        32 + // magnified_correction
        8 +  // withdrawn
        8 +  // last_claim_time
        1 +  // excluded
        5 +  // registry_index
        1;   // bump

    /// Fill identity fields on a freshly created account
    pub fn open(&mut self, tracker: Pubkey, wallet: Pubkey, bump: u8) {
        if self.tracker == Pubkey::default() {
            self.tracker = tracker;
            self.wallet = wallet;
            self.bump = bump;
        }
    }
}

/// Iterable set of share-bearing holders. Index -> wallet lives here,
/// wallet -> index lives in `HolderAccount::registry_index`.
///
/// Zero-copy with a fixed capacity so every instruction touches only the
/// slots it needs. Slots at or past `len` are unused.
#[account(zero_copy)]
pub struct HolderRegistry {
    pub tracker: Pubkey,
    pub len: u32,
    _padding: [u8; 4],
    pub holders: [Pubkey; MAX_HOLDERS],
}

impl HolderRegistry {
    pub const LEN: usize = 8 + std::mem::size_of::<HolderRegistry>();
}

/// Result of one `process` call
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProcessOutcome {
    pub iterations: u32,
    pub claims: u32,
    pub last_processed_index: u32,
}

/// Read-only view of a holder's dividend position
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct HolderSnapshot {
    pub wallet: Pubkey,
    /// Registry position, -1 when not registered
    pub index: i64,
    /// Visits before `process` reaches this holder, -1 when not registered
    pub iterations_until_processed: i64,
    pub withdrawable_dividends: u64,
    pub total_dividends: u64,
    pub last_claim_time: i64,
    pub next_claim_time: i64,
    pub seconds_until_auto_claim_available: i64,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct TrackerStats {
    pub number_of_holders: u32,
    pub last_processed_index: u32,
    pub total_shares: u128,
    pub total_distributed: u64,
    pub total_withdrawn: u64,
    pub claim_wait: i64,
    pub cost_per_iteration: u64,
}
