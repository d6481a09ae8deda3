use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod instructions;
pub mod ledger;
pub mod payout;
pub mod policy;
pub mod processor;
pub mod registry;
pub mod state;

use instructions::*;
use state::{HolderSnapshot, ProcessOutcome, TrackerStats};

declare_id!("Gym1aiYxMNTbNgr3on4GxaEE5EGYW6phSThL8vbj34F2");

#[program]
pub mod dividend_tracker {
    use super::*;

    /// Create the tracker and an empty holder registry for a token mint
    pub fn initialize(
        ctx: Context<Initialize>,
        claim_wait: Option<i64>,
        cost_per_iteration: Option<u64>,
    ) -> Result<()> {
        instructions::initialize::handler(ctx, claim_wait, cost_per_iteration)
    }

    /// Record a holder's new token balance - authority only
    pub fn set_balance(ctx: Context<SetBalance>, new_balance: u128) -> Result<()> {
        instructions::set_balance::handler(ctx, new_balance)
    }

    /// Deposit dividends pro rata to current shares - permissionless
    pub fn distribute_dividends(ctx: Context<DistributeDividends>, amount: u64) -> Result<()> {
        instructions::distribute::handler(ctx, amount)
    }

    /// Pay eligible holders from the cursor onward within a compute budget - permissionless
    pub fn process<'info>(
        ctx: Context<'_, '_, 'info, 'info, Process<'info>>,
        compute_budget: u64,
    ) -> Result<ProcessOutcome> {
        instructions::process::handler(ctx, compute_budget)
    }

    /// Holder pulls their own withdrawable dividend
    pub fn withdraw_dividend(ctx: Context<WithdrawDividend>) -> Result<u64> {
        instructions::withdraw::handler(ctx)
    }

    /// Pay one holder now, ignoring the claim wait - authority only
    pub fn process_holder(ctx: Context<ProcessHolder>, automatic: bool) -> Result<bool> {
        instructions::process_holder::handler(ctx, automatic)
    }

    pub fn exclude_from_dividends(ctx: Context<ExcludeFromDividends>) -> Result<()> {
        instructions::exclude::handler(ctx)
    }

    pub fn update_claim_wait(ctx: Context<UpdateConfig>, claim_wait: i64) -> Result<()> {
        instructions::update_config::claim_wait_handler(ctx, claim_wait)
    }

    pub fn update_cost_per_iteration(
        ctx: Context<UpdateConfig>,
        cost_per_iteration: u64,
    ) -> Result<()> {
        instructions::update_config::cost_per_iteration_handler(ctx, cost_per_iteration)
    }

    pub fn get_holder(ctx: Context<GetHolder>) -> Result<HolderSnapshot> {
        instructions::views::holder_handler(ctx)
    }

    pub fn get_holder_at_index(ctx: Context<GetHolder>, index: u32) -> Result<HolderSnapshot> {
        instructions::views::holder_at_index_handler(ctx, index)
    }

    pub fn get_tracker_stats(ctx: Context<GetTrackerStats>) -> Result<TrackerStats> {
        instructions::views::stats_handler(ctx)
    }
}
