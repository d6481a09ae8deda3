use anchor_lang::prelude::*;
use crate::{
    constants::*, errors::DividendTrackerError, payout::LamportPayer, processor::DividendPayer,
    state::*,
};

use super::process::Claim;

/// Manually claim all withdrawable dividends, ignoring the auto-claim cooldown
#[derive(Accounts)]
pub struct WithdrawDividend<'info> {
    #[account(mut)]
    pub wallet: Signer<'info>,

    #[account(
        mut,
        seeds = [TRACKER_SEED, tracker.mint.as_ref()],
        bump = tracker.bump,
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
}

pub fn handler(ctx: Context<WithdrawDividend>) -> Result<u64> {
    let clock = Clock::get()?;
    let now = clock.unix_timestamp;

    let vault = ctx.accounts.tracker.to_account_info();
    let recipient = ctx.accounts.wallet.to_account_info();
    let tracker = &mut ctx.accounts.tracker;
    let holder = &mut ctx.accounts.holder;

    // mark as withdrawn before any lamports leave the vault
    let amount = tracker.withdraw(holder)?;
    let mut payer = LamportPayer::new(&vault, std::slice::from_ref(&recipient), Rent::get()?);
    payer
        .pay(&holder.wallet, amount)
        .map_err(|_| DividendTrackerError::PayoutRejected)?;
    holder.last_claim_time = now;

    emit!(DividendWithdrawn {
        wallet: holder.wallet,
        amount,
    });
    emit!(Claim {
        wallet: holder.wallet,
        amount,
        automatic: false,
    });

    Ok(amount)
}

#[event]
pub struct DividendWithdrawn {
    pub wallet: Pubkey,
    pub amount: u64,
}
