use anchor_lang::prelude::*;
use crate::{constants::*, errors::DividendTrackerError, payout::LamportPayer, state::*};

use super::process::Claim;

/// Pay a single holder immediately, bypassing the cooldown - authority only
#[derive(Accounts)]
pub struct ProcessHolder<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [TRACKER_SEED, tracker.mint.as_ref()],
        bump = tracker.bump,
        has_one = authority @ DividendTrackerError::Unauthorized,
    )]
    pub tracker: Account<'info, DividendTracker>,

    #[account(
        mut,
        seeds = [HOLDER_SEED, tracker.key().as_ref(), wallet.key().as_ref()],
        bump = holder.bump,
        has_one = tracker,
        has_one = wallet,
    )]
    pub holder: Account<'info, HolderAccount>,

    /// CHECK: Payout destination, must match the holder record
    #[account(mut)]
    pub wallet: UncheckedAccount<'info>,
}

/// Returns whether a payout happened; a refused payout is not an error
pub fn handler(ctx: Context<ProcessHolder>, automatic: bool) -> Result<bool> {
    let clock = Clock::get()?;
    let now = clock.unix_timestamp;

    let vault = ctx.accounts.tracker.to_account_info();
    let recipient = ctx.accounts.wallet.to_account_info();
    let tracker = &mut ctx.accounts.tracker;
    let holder = &mut ctx.accounts.holder;

    let mut payer = LamportPayer::new(&vault, std::slice::from_ref(&recipient), Rent::get()?);
    let Some(amount) = tracker.claim(holder, now, &mut payer)? else {
        return Ok(false);
    };

    emit!(Claim {
        wallet: holder.wallet,
        amount,
        automatic,
    });

    Ok(true)
}
