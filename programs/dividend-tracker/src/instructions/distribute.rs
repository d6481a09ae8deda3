use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};
use crate::{constants::*, state::*};

/// Deposit native SOL dividends for all current holders - permissionless
#[derive(Accounts)]
pub struct DistributeDividends<'info> {
    /// Fee collector or anyone funding the pool
    #[account(mut)]
    pub funder: Signer<'info>,

    /// Dividend tracker, receives the lamports
    #[account(
        mut,
        seeds = [TRACKER_SEED, tracker.mint.as_ref()],
        bump = tracker.bump,
    )]
    pub tracker: Account<'info, DividendTracker>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<DistributeDividends>, amount: u64) -> Result<()> {
    // Ledger first: with no shares outstanding this fails before any lamports move
    ctx.accounts.tracker.distribute(amount)?;
    if amount == 0 {
        return Ok(());
    }

    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            Transfer {
                from: ctx.accounts.funder.to_account_info(),
                to: ctx.accounts.tracker.to_account_info(),
            },
        ),
        amount,
    )?;

    emit!(DividendsDistributed {
        from: ctx.accounts.funder.key(),
        amount,
        total_distributed: ctx.accounts.tracker.total_distributed,
    });

    Ok(())
}

#[event]
pub struct DividendsDistributed {
    pub from: Pubkey,
    pub amount: u64,
    pub total_distributed: u64,
}
