use anchor_lang::prelude::*;
use crate::{constants::*, errors::DividendTrackerError, state::*};

/// Change a processing setting - authority only
#[derive(Accounts)]
pub struct UpdateConfig<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [TRACKER_SEED, tracker.mint.as_ref()],
        bump = tracker.bump,
        has_one = authority @ DividendTrackerError::Unauthorized,
    )]
    pub tracker: Account<'info, DividendTracker>,
}

pub fn claim_wait_handler(ctx: Context<UpdateConfig>, claim_wait: i64) -> Result<()> {
    let old_value = ctx.accounts.tracker.update_claim_wait(claim_wait)?;

    emit!(ClaimWaitUpdated {
        new_value: claim_wait,
        old_value,
    });

    Ok(())
}

pub fn cost_per_iteration_handler(
    ctx: Context<UpdateConfig>,
    cost_per_iteration: u64,
) -> Result<()> {
    let old_value = ctx
        .accounts
        .tracker
        .update_cost_per_iteration(cost_per_iteration)?;

    emit!(CostPerIterationUpdated {
        new_value: cost_per_iteration,
        old_value,
    });

    Ok(())
}

#[event]
pub struct ClaimWaitUpdated {
    pub new_value: i64,
    pub old_value: i64,
}

#[event]
pub struct CostPerIterationUpdated {
    pub new_value: u64,
    pub old_value: u64,
}
