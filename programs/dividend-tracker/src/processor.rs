//! Cost-bounded round-robin auto-claim processing.
//!
//! `process` walks the registry from the position after the persisted cursor,
//! wrapping at the end, and visits at most one full cycle per call. Every
//! visit is charged `cost_per_iteration` whether or not a payout happens.

use std::ops::DerefMut;

use anchor_lang::prelude::*;

use crate::{errors::DividendTrackerError, policy, state::*};

/// Moves lamports to a holder. An `Err` means the recipient could not take
/// the payout and nothing moved.
pub trait DividendPayer {
    fn pay(&mut self, wallet: &Pubkey, amount: u64) -> Result<()>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClaimRecord {
    pub wallet: Pubkey,
    pub amount: u64,
}

#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcome: ProcessOutcome,
    pub claims: Vec<ClaimRecord>,
}

/// Registry positions the next `process` call visits, in order.
///
/// A cursor left past the end by removals wraps straight to 0.
pub fn plan_batch(
    cursor: u32,
    registry_len: usize,
    compute_budget: u64,
    cost_per_iteration: u64,
) -> Vec<u32> {
    if registry_len == 0 || cost_per_iteration == 0 {
        return Vec::new();
    }

    let affordable = compute_budget / cost_per_iteration;
    let steps = affordable.min(registry_len as u64) as usize;

    let mut index = cursor as usize;
    (0..steps)
        .map(|_| {
            index += 1;
            if index >= registry_len {
                index = 0;
            }
            index as u32
        })
        .collect()
}

/// Visit `holders` (already in `plan` order) and pay every holder whose
/// cooldown has expired. A refused payout is rolled back and skipped.
pub fn run_batch<H, P>(
    tracker: &mut DividendTracker,
    registry: &HolderRegistry,
    plan: &[u32],
    holders: &mut [H],
    now: i64,
    payer: &mut P,
) -> Result<BatchReport>
where
    H: DerefMut<Target = HolderAccount>,
    P: DividendPayer,
{
    require!(
        holders.len() >= plan.len(),
        DividendTrackerError::InvalidHolderAccount
    );

    let mut claims = Vec::new();
    for (position, holder) in plan.iter().zip(holders.iter_mut()) {
        let holder: &mut HolderAccount = holder;
        require_keys_eq!(
            registry.get(*position)?,
            holder.wallet,
            DividendTrackerError::InvalidHolderAccount
        );

        if !policy::can_auto_claim(holder.last_claim_time, now, tracker.claim_wait) {
            continue;
        }
        if let Some(amount) = tracker.claim(holder, now, payer)? {
            claims.push(ClaimRecord {
                wallet: holder.wallet,
                amount,
            });
        }
    }

    if let Some(last) = plan.last() {
        tracker.last_processed_index = *last;
    }

    Ok(BatchReport {
        outcome: ProcessOutcome {
            iterations: plan.len() as u32,
            claims: claims.len() as u32,
            last_processed_index: tracker.last_processed_index,
        },
        claims,
    })
}

impl DividendTracker {
    /// Withdraw and pay `holder` regardless of cooldown.
    ///
    /// Returns `None` when nothing is owed or the payout was refused; a
    /// refusal leaves the holder exactly as it was.
    pub fn claim<P: DividendPayer>(
        &mut self,
        holder: &mut HolderAccount,
        now: i64,
        payer: &mut P,
    ) -> Result<Option<u64>> {
        if self.withdrawable_dividend_of(holder)? == 0 {
            return Ok(None);
        }

        let amount = self.withdraw(holder)?;
        if let Err(err) = payer.pay(&holder.wallet, amount) {
            msg!(
                "Payout of {} lamports to {} refused: {}",
                amount,
                holder.wallet,
                err
            );
            self.restore_withdrawal(holder, amount)?;
            return Ok(None);
        }

        holder.last_claim_time = now;
        Ok(Some(amount))
    }

    pub fn holder_snapshot(
        &self,
        registry: &HolderRegistry,
        holder: &HolderAccount,
        now: i64,
    ) -> Result<HolderSnapshot> {
        let (index, iterations_until_processed) = match registry.position_of(holder) {
            Some(index) => (
                index as i64,
                iterations_until_processed(index, self.last_processed_index, registry.len()),
            ),
            None => (-1, -1),
        };

        let next_claim_time = policy::next_claim_time(holder.last_claim_time, self.claim_wait);
        let seconds_until_auto_claim_available = if next_claim_time > now {
            next_claim_time - now
        } else {
            0
        };

        Ok(HolderSnapshot {
            wallet: holder.wallet,
            index,
            iterations_until_processed,
            withdrawable_dividends: self.withdrawable_dividend_of(holder)?,
            total_dividends: self.accumulative_dividend_of(holder)?,
            last_claim_time: holder.last_claim_time,
            next_claim_time,
            seconds_until_auto_claim_available,
        })
    }

    pub fn stats(&self, registry: &HolderRegistry) -> TrackerStats {
        TrackerStats {
            number_of_holders: registry.len() as u32,
            last_processed_index: self.last_processed_index,
            total_shares: self.total_shares,
            total_distributed: self.total_distributed,
            total_withdrawn: self.total_withdrawn,
            claim_wait: self.claim_wait,
            cost_per_iteration: self.cost_per_iteration,
        }
    }
}

fn iterations_until_processed(index: u32, cursor: u32, registry_len: usize) -> i64 {
    let (index, cursor, len) = (index as i64, cursor as i64, registry_len as i64);
    if index > cursor {
        index - cursor
    } else {
        let until_end = if len > cursor { len - cursor } else { 0 };
        index + until_end
    }
}
