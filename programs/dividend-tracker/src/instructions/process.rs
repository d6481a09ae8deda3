use anchor_lang::prelude::*;
use crate::{
    constants::*,
    errors::DividendTrackerError,
    payout::LamportPayer,
    processor::{plan_batch, run_batch},
    state::*,
};

/// Auto-claim for the next holders in the registry - permissionless crank
#[derive(Accounts)]
pub struct Process<'info> {
    pub caller: Signer<'info>,

    #[account(
        mut,
        seeds = [TRACKER_SEED, tracker.mint.as_ref()],
        bump = tracker.bump,
        has_one = registry,
    )]
    pub tracker: Account<'info, DividendTracker>,

    pub registry: AccountLoader<'info, HolderRegistry>,

    // Remaining accounts (passed dynamically), in visit order starting at
    // the position after `tracker.last_processed_index`:
    //   1. holder (mut, HolderAccount)
    //   2. wallet (mut)
}

pub fn handler<'info>(
    ctx: Context<'_, '_, 'info, 'info, Process<'info>>,
    compute_budget: u64,
) -> Result<ProcessOutcome> {
    let clock = Clock::get()?;
    let now = clock.unix_timestamp;

    let tracker_key = ctx.accounts.tracker.key();
    let vault = ctx.accounts.tracker.to_account_info();
    let tracker = &mut ctx.accounts.tracker;
    let registry = ctx.accounts.registry.load()?;

    let mut plan = plan_batch(
        tracker.last_processed_index,
        registry.len(),
        compute_budget,
        tracker.cost_per_iteration,
    );
    // never visit more holders than the caller supplied accounts for
    plan.truncate(ctx.remaining_accounts.len() / 2);

    let mut holders = Vec::with_capacity(plan.len());
    let mut wallets = Vec::with_capacity(plan.len());
    for pair in ctx.remaining_accounts.chunks_exact(2).take(plan.len()) {
        let holder = Account::<'info, HolderAccount>::try_from(&pair[0])?;
        check_visit_pair(&pair[0], &holder, &pair[1], &tracker_key)?;
        holders.push(holder);
        wallets.push(pair[1].clone());
    }

    let mut payer = LamportPayer::new(&vault, &wallets, Rent::get()?);
    let report = run_batch(tracker, &registry, &plan, &mut holders, now, &mut payer)?;

    for holder in holders.iter() {
        holder.exit(&crate::ID)?;
    }

    for claim in report.claims.iter() {
        emit!(Claim {
            wallet: claim.wallet,
            amount: claim.amount,
            automatic: true,
        });
    }

    emit!(ProcessedDividendTracker {
        iterations: report.outcome.iterations,
        claims: report.outcome.claims,
        last_processed_index: report.outcome.last_processed_index,
        compute_budget,
        processor: ctx.accounts.caller.key(),
    });

    Ok(report.outcome)
}

/// Both accounts of a visited pair must be writable, and the holder record
/// must belong to this tracker and name the supplied wallet. A read-only
/// wallet would turn every payout into a refusal while the cursor moves on.
pub(crate) fn check_visit_pair(
    holder_info: &AccountInfo,
    holder: &HolderAccount,
    wallet_info: &AccountInfo,
    tracker: &Pubkey,
) -> Result<()> {
    require!(
        holder_info.is_writable && wallet_info.is_writable,
        DividendTrackerError::InvalidHolderAccount
    );
    require_keys_eq!(
        holder.tracker,
        *tracker,
        DividendTrackerError::InvalidHolderAccount
    );
    require_keys_eq!(
        *wallet_info.key,
        holder.wallet,
        DividendTrackerError::InvalidHolderAccount
    );
    Ok(())
}

#[event]
pub struct Claim {
    pub wallet: Pubkey,
    pub amount: u64,
    pub automatic: bool,
}

#[event]
pub struct ProcessedDividendTracker {
    pub iterations: u32,
    pub claims: u32,
    pub last_processed_index: u32,
    pub compute_budget: u64,
    pub processor: Pubkey,
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::error::Error;

    struct TestAccount {
        key: Pubkey,
        lamports: u64,
        data: Vec<u8>,
    }

    impl TestAccount {
        fn new(key: Pubkey) -> Self {
            Self {
                key,
                lamports: 1_000_000,
                data: Vec::new(),
            }
        }

        fn info<'a>(&'a mut self, owner: &'a Pubkey, writable: bool) -> AccountInfo<'a> {
            AccountInfo::new(
                &self.key,
                false,
                writable,
                &mut self.lamports,
                &mut self.data,
                owner,
                false,
                0,
            )
        }
    }

    fn holder_of(tracker: Pubkey, wallet: Pubkey) -> HolderAccount {
        HolderAccount {
            tracker,
            wallet,
            ..Default::default()
        }
    }

    #[test]
    fn test_visit_pair_accepts_writable_accounts() {
        let (tracker, wallet, owner) = (Pubkey::new_unique(), Pubkey::new_unique(), Pubkey::new_unique());
        let holder = holder_of(tracker, wallet);
        let mut record = TestAccount::new(Pubkey::new_unique());
        let mut destination = TestAccount::new(wallet);

        check_visit_pair(
            &record.info(&owner, true),
            &holder,
            &destination.info(&owner, true),
            &tracker,
        )
        .unwrap();
    }

    #[test]
    fn test_visit_pair_rejects_read_only_wallet() {
        let (tracker, wallet, owner) = (Pubkey::new_unique(), Pubkey::new_unique(), Pubkey::new_unique());
        let holder = holder_of(tracker, wallet);
        let mut record = TestAccount::new(Pubkey::new_unique());
        let mut destination = TestAccount::new(wallet);

        let err = check_visit_pair(
            &record.info(&owner, true),
            &holder,
            &destination.info(&owner, false),
            &tracker,
        )
        .unwrap_err();
        assert_eq!(err, Error::from(DividendTrackerError::InvalidHolderAccount));
    }

    #[test]
    fn test_visit_pair_rejects_read_only_record() {
        let (tracker, wallet, owner) = (Pubkey::new_unique(), Pubkey::new_unique(), Pubkey::new_unique());
        let holder = holder_of(tracker, wallet);
        let mut record = TestAccount::new(Pubkey::new_unique());
        let mut destination = TestAccount::new(wallet);

        let err = check_visit_pair(
            &record.info(&owner, false),
            &holder,
            &destination.info(&owner, true),
            &tracker,
        )
        .unwrap_err();
        assert_eq!(err, Error::from(DividendTrackerError::InvalidHolderAccount));
    }

    #[test]
    fn test_visit_pair_rejects_foreign_records() {
        let (tracker, wallet, owner) = (Pubkey::new_unique(), Pubkey::new_unique(), Pubkey::new_unique());
        let mut record = TestAccount::new(Pubkey::new_unique());
        let mut destination = TestAccount::new(wallet);

        let other_tracker = holder_of(Pubkey::new_unique(), wallet);
        let err = check_visit_pair(
            &record.info(&owner, true),
            &other_tracker,
            &destination.info(&owner, true),
            &tracker,
        )
        .unwrap_err();
        assert_eq!(err, Error::from(DividendTrackerError::InvalidHolderAccount));

        let other_wallet = holder_of(tracker, Pubkey::new_unique());
        let err = check_visit_pair(
            &record.info(&owner, true),
            &other_wallet,
            &destination.info(&owner, true),
            &tracker,
        )
        .unwrap_err();
        assert_eq!(err, Error::from(DividendTrackerError::InvalidHolderAccount));
    }
}
