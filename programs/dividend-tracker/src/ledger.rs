//! Dividend-per-share ledger.
//!
//! Every deposit raises a global accumulator by `amount * 2^128 / total_shares`.
//! A holder's lifetime earnings are `(accumulator * shares + correction) / 2^128`,
//! where the correction absorbs the accumulator value at each balance change.
//! Earnings are derived on demand and never cached.
//!
//! Corrections are signed; they are kept as two's-complement U256 values and
//! combined with wrapping arithmetic. The true earnings are never negative, so
//! the wrapped sum is exact.

use anchor_lang::prelude::*;
use primitive_types::U256;

use crate::{constants::*, errors::DividendTrackerError, policy, state::*};

fn magnify(per_share: U256, shares: u128) -> Result<U256> {
    let product = per_share
        .checked_mul(U256::from(shares))
        .ok_or(DividendTrackerError::ArithmeticOverflow)?;
    Ok(product)
}

impl HolderAccount {
    pub fn magnified_correction(&self) -> U256 {
        U256(self.magnified_correction)
    }
}

impl DividendTracker {
    pub fn magnified_dividend_per_share(&self) -> U256 {
        U256(self.magnified_dividend_per_share)
    }

    /// Record a new token balance for `holder`.
    ///
    /// Returns whether the holder should be in the registry afterwards.
    /// Excluded holders are left untouched.
    pub fn set_balance(&mut self, holder: &mut HolderAccount, new_balance: u128) -> Result<bool> {
        if holder.excluded {
            return Ok(false);
        }

        let shares = policy::eligible_shares(new_balance, holder.excluded);
        self.rebalance(holder, shares)?;
        Ok(shares > 0)
    }

    /// Move `holder` to exactly `shares`, keeping already earned dividends fixed
    pub fn rebalance(&mut self, holder: &mut HolderAccount, shares: u128) -> Result<()> {
        let old = holder.balance;
        if shares == old {
            return Ok(());
        }

        let per_share = self.magnified_dividend_per_share();
        let correction = holder.magnified_correction();

        let (total_shares, correction) = if shares > old {
            let delta = shares - old;
            let total = self
                .total_shares
                .checked_add(delta)
                .ok_or(DividendTrackerError::ArithmeticOverflow)?;
            (total, correction.overflowing_sub(magnify(per_share, delta)?).0)
        } else {
            let delta = old - shares;
            let total = self
                .total_shares
                .checked_sub(delta)
                .ok_or(DividendTrackerError::ArithmeticOverflow)?;
            (total, correction.overflowing_add(magnify(per_share, delta)?).0)
        };

        self.total_shares = total_shares;
        holder.magnified_correction = correction.0;
        holder.balance = shares;
        Ok(())
    }

    /// Spread `amount` lamports over all current shares
    pub fn distribute(&mut self, amount: u64) -> Result<()> {
        require!(self.total_shares > 0, DividendTrackerError::NoShares);
        if amount == 0 {
            return Ok(());
        }

        // truncation loses at most (total_shares - 1) / 2^128 lamports per share
        let increment = (U256::from(amount) << MAGNITUDE_BITS) / U256::from(self.total_shares);
        let per_share = self
            .magnified_dividend_per_share()
            .checked_add(increment)
            .ok_or(DividendTrackerError::ArithmeticOverflow)?;
        let total_distributed = self
            .total_distributed
            .checked_add(amount)
            .ok_or(DividendTrackerError::ArithmeticOverflow)?;

        self.magnified_dividend_per_share = per_share.0;
        self.total_distributed = total_distributed;
        Ok(())
    }

    /// Lamports `holder` has earned over its whole history
    pub fn accumulative_dividend_of(&self, holder: &HolderAccount) -> Result<u64> {
        let gross = magnify(self.magnified_dividend_per_share(), holder.balance)?
            .overflowing_add(holder.magnified_correction())
            .0;
        let earned = u64::try_from(gross >> MAGNITUDE_BITS)
            .map_err(|_| DividendTrackerError::ArithmeticOverflow)?;
        Ok(earned)
    }

    pub fn withdrawable_dividend_of(&self, holder: &HolderAccount) -> Result<u64> {
        Ok(self
            .accumulative_dividend_of(holder)?
            .saturating_sub(holder.withdrawn))
    }

    /// Mark the withdrawable amount as paid and return it.
    ///
    /// State is updated before any lamports move; a refused transfer must
    /// be undone with `restore_withdrawal`.
    pub fn withdraw(&mut self, holder: &mut HolderAccount) -> Result<u64> {
        let amount = self.withdrawable_dividend_of(holder)?;
        require!(amount > 0, DividendTrackerError::NothingToWithdraw);

        let withdrawn = holder
            .withdrawn
            .checked_add(amount)
            .ok_or(DividendTrackerError::ArithmeticOverflow)?;
        let total_withdrawn = self
            .total_withdrawn
            .checked_add(amount)
            .ok_or(DividendTrackerError::ArithmeticOverflow)?;

        holder.withdrawn = withdrawn;
        self.total_withdrawn = total_withdrawn;
        Ok(amount)
    }

    pub fn restore_withdrawal(&mut self, holder: &mut HolderAccount, amount: u64) -> Result<()> {
        let withdrawn = holder
            .withdrawn
            .checked_sub(amount)
            .ok_or(DividendTrackerError::ArithmeticOverflow)?;
        let total_withdrawn = self
            .total_withdrawn
            .checked_sub(amount)
            .ok_or(DividendTrackerError::ArithmeticOverflow)?;

        holder.withdrawn = withdrawn;
        self.total_withdrawn = total_withdrawn;
        Ok(())
    }
}
