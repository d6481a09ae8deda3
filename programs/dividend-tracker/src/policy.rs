use anchor_lang::prelude::*;

use crate::{constants::*, errors::DividendTrackerError, state::*};

/// Shares a token balance is worth: nothing below the minimum or once excluded
pub fn eligible_shares(balance: u128, excluded: bool) -> u128 {
    if excluded || balance < MIN_BALANCE_FOR_DIVIDENDS {
        0
    } else {
        balance
    }
}

/// Whether the cooldown since `last_claim_time` has run out at `now`
pub fn can_auto_claim(last_claim_time: i64, now: i64, claim_wait: i64) -> bool {
    if last_claim_time > now {
        return false;
    }
    now.saturating_sub(last_claim_time) >= claim_wait
}

pub fn next_claim_time(last_claim_time: i64, claim_wait: i64) -> i64 {
    if last_claim_time > 0 {
        last_claim_time.saturating_add(claim_wait)
    } else {
        0
    }
}

pub fn check_claim_wait(claim_wait: i64) -> Result<()> {
    require!(
        (MIN_CLAIM_WAIT..=MAX_CLAIM_WAIT).contains(&claim_wait),
        DividendTrackerError::InvalidClaimWait
    );
    Ok(())
}

pub fn check_cost_per_iteration(cost_per_iteration: u64) -> Result<()> {
    require!(
        cost_per_iteration > 0,
        DividendTrackerError::InvalidCostPerIteration
    );
    Ok(())
}

impl DividendTracker {
    /// Returns the previous claim wait
    pub fn update_claim_wait(&mut self, claim_wait: i64) -> Result<i64> {
        check_claim_wait(claim_wait)?;
        require!(
            claim_wait != self.claim_wait,
            DividendTrackerError::InvalidClaimWait
        );
        Ok(std::mem::replace(&mut self.claim_wait, claim_wait))
    }

    /// Returns the previous cost per iteration
    pub fn update_cost_per_iteration(&mut self, cost_per_iteration: u64) -> Result<u64> {
        check_cost_per_iteration(cost_per_iteration)?;
        require!(
            cost_per_iteration != self.cost_per_iteration,
            DividendTrackerError::InvalidCostPerIteration
        );
        Ok(std::mem::replace(
            &mut self.cost_per_iteration,
            cost_per_iteration,
        ))
    }

    /// Permanently drop `holder` out of dividend accrual.
    /// Dividends earned so far stay withdrawable.
    pub fn exclude(&mut self, holder: &mut HolderAccount) -> Result<()> {
        require!(!holder.excluded, DividendTrackerError::AlreadyExcluded);
        self.rebalance(holder, 0)?;
        holder.excluded = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::error::Error;

    fn tracker() -> DividendTracker {
        DividendTracker {
            claim_wait: DEFAULT_CLAIM_WAIT,
            cost_per_iteration: DEFAULT_COST_PER_ITERATION,
            ..Default::default()
        }
    }

    #[test]
    fn test_min_balance_is_ten_thousand_tokens() {
        assert_eq!(MIN_BALANCE_FOR_DIVIDENDS, 10_000 * 10u128.pow(DECIMALS as u32));
        assert_eq!(eligible_shares(MIN_BALANCE_FOR_DIVIDENDS, false), MIN_BALANCE_FOR_DIVIDENDS);
        assert_eq!(eligible_shares(MIN_BALANCE_FOR_DIVIDENDS - 1, false), 0);
        assert_eq!(eligible_shares(MIN_BALANCE_FOR_DIVIDENDS * 3, true), 0);
    }

    #[test]
    fn test_can_auto_claim() {
        // never claimed
        assert!(can_auto_claim(0, 1_700_000_000, 3_600));

        assert!(!can_auto_claim(1_000, 4_599, 3_600));
        assert!(can_auto_claim(1_000, 4_600, 3_600));

        // clock behind the last claim
        assert!(!can_auto_claim(5_000, 4_000, 3_600));
    }

    #[test]
    fn test_next_claim_time() {
        assert_eq!(next_claim_time(0, 3_600), 0);
        assert_eq!(next_claim_time(1_000, 3_600), 4_600);
    }

    #[test]
    fn test_update_claim_wait_bounds() {
        let mut tracker = tracker();
        assert_eq!(tracker.claim_wait, 3_600);

        let err = tracker.update_claim_wait(3_599).unwrap_err();
        assert_eq!(err, Error::from(DividendTrackerError::InvalidClaimWait));
        let err = tracker.update_claim_wait(86_401).unwrap_err();
        assert_eq!(err, Error::from(DividendTrackerError::InvalidClaimWait));
        let err = tracker.update_claim_wait(3_600).unwrap_err();
        assert_eq!(err, Error::from(DividendTrackerError::InvalidClaimWait));

        assert_eq!(tracker.update_claim_wait(7_200).unwrap(), 3_600);
        assert_eq!(tracker.claim_wait, 7_200);
        assert_eq!(tracker.update_claim_wait(86_400).unwrap(), 7_200);
    }

    #[test]
    fn test_update_cost_per_iteration() {
        let mut tracker = tracker();

        let err = tracker.update_cost_per_iteration(0).unwrap_err();
        assert_eq!(err, Error::from(DividendTrackerError::InvalidCostPerIteration));

        let old = tracker.update_cost_per_iteration(DEFAULT_COST_PER_ITERATION + 1).unwrap();
        assert_eq!(old, DEFAULT_COST_PER_ITERATION);
        assert_eq!(tracker.cost_per_iteration, DEFAULT_COST_PER_ITERATION + 1);
    }

    #[test]
    fn test_exclude_zeroes_shares_once() {
        let mut tracker = tracker();
        let mut holder = HolderAccount {
            wallet: Pubkey::new_unique(),
            ..Default::default()
        };
        tracker.set_balance(&mut holder, 2 * MIN_BALANCE_FOR_DIVIDENDS).unwrap();
        tracker.distribute(1_000_000).unwrap();
        let earned = tracker.withdrawable_dividend_of(&holder).unwrap();

        tracker.exclude(&mut holder).unwrap();
        assert!(holder.excluded);
        assert_eq!(holder.balance, 0);
        assert_eq!(tracker.total_shares, 0);
        assert_eq!(tracker.withdrawable_dividend_of(&holder).unwrap(), earned);

        let err = tracker.exclude(&mut holder).unwrap_err();
        assert_eq!(err, Error::from(DividendTrackerError::AlreadyExcluded));

        // balance reports no longer count
        assert!(!tracker.set_balance(&mut holder, 5 * MIN_BALANCE_FOR_DIVIDENDS).unwrap());
        assert_eq!(tracker.total_shares, 0);
    }
}
