use anchor_lang::prelude::*;
use anchor_spl::token::Mint;
use crate::{constants::*, errors::DividendTrackerError, policy, state::*};

/// Initialize the dividend tracker and its holder registry for a token mint
#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    /// Token whose holders earn dividends
    pub mint: Account<'info, Mint>,

    /// Dividend tracker PDA, also the lamport vault
    #[account(
        init,
        payer = authority,
        space = DividendTracker::LEN,
        seeds = [TRACKER_SEED, mint.key().as_ref()],
        bump
    )]
    pub tracker: Account<'info, DividendTracker>,

    /// Holder registry, created by the client with `HolderRegistry::LEN`
    /// bytes and owned by this program
    #[account(
        zero,
        constraint = registry.to_account_info().data_len() >= HolderRegistry::LEN
            @ DividendTrackerError::InvalidRegistryAccount,
    )]
    pub registry: AccountLoader<'info, HolderRegistry>,

    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<Initialize>,
    claim_wait: Option<i64>,
    cost_per_iteration: Option<u64>,
) -> Result<()> {
    let claim_wait = claim_wait.unwrap_or(DEFAULT_CLAIM_WAIT);
    let cost_per_iteration = cost_per_iteration.unwrap_or(DEFAULT_COST_PER_ITERATION);
    policy::check_claim_wait(claim_wait)?;
    policy::check_cost_per_iteration(cost_per_iteration)?;

    // Initialize tracker
    let tracker = &mut ctx.accounts.tracker;
    tracker.authority = ctx.accounts.authority.key();
    tracker.mint = ctx.accounts.mint.key();
    tracker.registry = ctx.accounts.registry.key();
    tracker.total_shares = 0;
    tracker.magnified_dividend_per_share = [0; 4];
    tracker.total_distributed = 0;
    tracker.total_withdrawn = 0;
    tracker.claim_wait = claim_wait;
    tracker.cost_per_iteration = cost_per_iteration;
    tracker.last_processed_index = 0;
    tracker.bump = ctx.bumps.tracker;

    // Initialize registry
    let mut registry = ctx.accounts.registry.load_init()?;
    registry.tracker = tracker.key();
    registry.len = 0;

    emit!(DividendTrackerInitialized {
        tracker: tracker.key(),
        authority: tracker.authority,
        mint: tracker.mint,
        registry: tracker.registry,
        claim_wait,
        cost_per_iteration,
    });

    Ok(())
}

#[event]
pub struct DividendTrackerInitialized {
    pub tracker: Pubkey,
    pub authority: Pubkey,
    pub mint: Pubkey,
    pub registry: Pubkey,
    pub claim_wait: i64,
    pub cost_per_iteration: u64,
}
