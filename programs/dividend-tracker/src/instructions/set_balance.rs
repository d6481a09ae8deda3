use anchor_lang::prelude::*;
use crate::{constants::*, errors::DividendTrackerError, state::*};

/// Report a holder's token balance - authority only
#[derive(Accounts)]
pub struct SetBalance<'info> {
    /// Tracker authority, pays for new holder records
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

    /// Holder wallet whose balance changed
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

    /// Record of the wallet currently last in the registry.
    /// Required when `holder` leaves the registry from any other slot.
    #[account(mut)]
    pub last_holder: Option<Account<'info, HolderAccount>>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<SetBalance>, new_balance: u128) -> Result<()> {
    let tracker_key = ctx.accounts.tracker.key();
    let SetBalance {
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
    let registered =
        tracker.apply_balance(&mut registry, holder, last_holder.as_deref_mut(), new_balance)?;

    emit!(HolderBalanceUpdated {
        wallet: holder.wallet,
        balance: new_balance,
        shares: holder.balance,
        registered,
    });

    Ok(())
}

/// The swap partner must be a different record of the same tracker; the
/// same account twice would be written back from a stale copy on exit.
pub(crate) fn check_last_holder(
    last_holder: &Option<Account<HolderAccount>>,
    holder: &Account<HolderAccount>,
    tracker: Pubkey,
) -> Result<()> {
    if let Some(last_holder) = last_holder {
        require_keys_neq!(
            last_holder.key(),
            holder.key(),
            DividendTrackerError::InvalidHolderAccount
        );
        require_keys_eq!(
            last_holder.tracker,
            tracker,
            DividendTrackerError::InvalidHolderAccount
        );
    }
    Ok(())
}

#[event]
pub struct HolderBalanceUpdated {
    pub wallet: Pubkey,
    pub balance: u128,
    pub shares: u128,
    pub registered: bool,
}
