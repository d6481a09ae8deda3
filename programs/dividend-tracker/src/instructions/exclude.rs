use anchor_lang::prelude::*;
use crate::{constants::*, errors::DividendTrackerError, state::*};

use super::set_balance::check_last_holder;

/// Permanently exclude a wallet (pools, program accounts) from dividends
#[derive(Accounts)]
pub struct ExcludeFromDividends<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [TRACKER_SEED, tracker.mint.as_ref()],
        bump = tracker.bump,
        has_one = authority @ DividendTrackerError::Unauthorized,
        has_one = registry,
    )]
    pub tracker: Account<'info, DividendTracker>,

    #[account(mut)]
    pub registry: AccountLoader<'info, HolderRegistry>,

    /// CHECK: Used only as a seed and identity
    pub wallet: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = authority,
        space = HolderAccount::LEN,
        seeds = [HOLDER_SEED, tracker.key().as_ref(), wallet.key().as_ref()],
        bump
    )]
    pub holder: Account<'info, HolderAccount>,

    /// Registry tail, see `SetBalance::last_holder`
    #[account(mut)]
    pub last_holder: Option<Account<'info, HolderAccount>>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<ExcludeFromDividends>) -> Result<()> {
    let tracker_key = ctx.accounts.tracker.key();
    let ExcludeFromDividends {
        tracker,
        registry,
        wallet,
        holder,
        last_holder,
        ..
    } = ctx.accounts;

    holder.open(tracker_key, wallet.key(), ctx.bumps.holder);
    check_last_holder(last_holder, holder, tracker_key)?;

    let mut registry = registry.load_mut()?;
    tracker.exclude_holder(&mut registry, holder, last_holder.as_deref_mut())?;

    emit!(HolderExcluded {
        wallet: holder.wallet,
    });

    Ok(())
}

#[event]
pub struct HolderExcluded {
    pub wallet: Pubkey,
}
