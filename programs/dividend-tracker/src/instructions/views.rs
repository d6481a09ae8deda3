use anchor_lang::prelude::*;
use crate::{constants::*, errors::DividendTrackerError, state::*};

/// Read-only holder lookup, by wallet or by registry position
#[derive(Accounts)]
pub struct GetHolder<'info> {
    #[account(
        seeds = [TRACKER_SEED, tracker.mint.as_ref()],
        bump = tracker.bump,
        has_one = registry,
    )]
    pub tracker: Account<'info, DividendTracker>,

    pub registry: AccountLoader<'info, HolderRegistry>,

    #[account(
        seeds = [HOLDER_SEED, tracker.key().as_ref(), holder.wallet.as_ref()],
        bump = holder.bump,
        has_one = tracker,
    )]
    pub holder: Account<'info, HolderAccount>,
}

#[derive(Accounts)]
pub struct GetTrackerStats<'info> {
    #[account(
        seeds = [TRACKER_SEED, tracker.mint.as_ref()],
        bump = tracker.bump,
        has_one = registry,
    )]
    pub tracker: Account<'info, DividendTracker>,

    pub registry: AccountLoader<'info, HolderRegistry>,
}

pub fn holder_handler(ctx: Context<GetHolder>) -> Result<HolderSnapshot> {
    let now = Clock::get()?.unix_timestamp;
    let registry = ctx.accounts.registry.load()?;
    ctx.accounts
        .tracker
        .holder_snapshot(&registry, &ctx.accounts.holder, now)
}

pub fn holder_at_index_handler(ctx: Context<GetHolder>, index: u32) -> Result<HolderSnapshot> {
    let wallet = ctx.accounts.registry.load()?.get(index)?;
    require_keys_eq!(
        wallet,
        ctx.accounts.holder.wallet,
        DividendTrackerError::InvalidHolderAccount
    );
    holder_handler(ctx)
}

pub fn stats_handler(ctx: Context<GetTrackerStats>) -> Result<TrackerStats> {
    let registry = ctx.accounts.registry.load()?;
    Ok(ctx.accounts.tracker.stats(&registry))
}
