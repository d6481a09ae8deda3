//! Ordered holder registry.
//!
//! A dense slot array gives the processor stable positions to walk, and
//! each `HolderAccount` remembers its own slot so membership checks never scan.
//! Removal swaps the last entry into the freed slot, so iteration order is
//! insertion order only until the first removal.

use anchor_lang::prelude::*;

use crate::{constants::MAX_HOLDERS, errors::DividendTrackerError, policy, state::*};

impl HolderRegistry {
    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Wallet registered at `index`
    pub fn get(&self, index: u32) -> Result<Pubkey> {
        require!(index < self.len, DividendTrackerError::IndexOutOfRange);
        Ok(self.holders[index as usize])
    }

    pub fn position_of(&self, holder: &HolderAccount) -> Option<u32> {
        holder
            .registry_index
            .filter(|index| *index < self.len && self.holders[*index as usize] == holder.wallet)
    }

    pub fn contains(&self, holder: &HolderAccount) -> bool {
        self.position_of(holder).is_some()
    }

    /// Append `holder`; no-op when already registered
    pub fn insert(&mut self, holder: &mut HolderAccount) -> Result<()> {
        if self.contains(holder) {
            return Ok(());
        }
        require!(self.len() < MAX_HOLDERS, DividendTrackerError::RegistryFull);

        let index = self.len;
        self.holders[index as usize] = holder.wallet;
        self.len += 1;
        holder.registry_index = Some(index);
        Ok(())
    }

    /// Remove `holder`; no-op when absent.
    ///
    /// When `holder` is not the last entry, the last entry moves into its
    /// slot and `last_holder` must be that entry's account so its index can
    /// be rewritten.
    pub fn remove(
        &mut self,
        holder: &mut HolderAccount,
        last_holder: Option<&mut HolderAccount>,
    ) -> Result<()> {
        let Some(index) = holder.registry_index else {
            return Ok(());
        };
        require!(
            self.position_of(holder).is_some(),
            DividendTrackerError::InvalidHolderAccount
        );

        let last = self.len - 1;
        if index != last {
            let moved = self.holders[last as usize];
            let last_holder = last_holder.ok_or(DividendTrackerError::InvalidHolderAccount)?;
            require_keys_eq!(
                last_holder.wallet,
                moved,
                DividendTrackerError::InvalidHolderAccount
            );
            self.holders[index as usize] = moved;
            last_holder.registry_index = Some(index);
        }

        self.holders[last as usize] = Pubkey::default();
        self.len = last;
        holder.registry_index = None;
        Ok(())
    }

    /// Wallet that a removal from any other slot would move
    pub fn last(&self) -> Option<Pubkey> {
        self.len.checked_sub(1).map(|last| self.holders[last as usize])
    }
}

impl DividendTracker {
    /// Record a balance report and keep registry membership in step with
    /// the resulting shares. Returns whether the holder is registered.
    pub fn apply_balance(
        &mut self,
        registry: &mut HolderRegistry,
        holder: &mut HolderAccount,
        last_holder: Option<&mut HolderAccount>,
        new_balance: u128,
    ) -> Result<bool> {
        if holder.excluded {
            return Ok(false);
        }

        if policy::eligible_shares(new_balance, false) > 0 {
            registry.insert(holder)?;
        } else {
            registry.remove(holder, last_holder)?;
        }
        self.set_balance(holder, new_balance)
    }

    /// Exclude `holder` and drop it from the registry
    pub fn exclude_holder(
        &mut self,
        registry: &mut HolderRegistry,
        holder: &mut HolderAccount,
        last_holder: Option<&mut HolderAccount>,
    ) -> Result<()> {
        require!(!holder.excluded, DividendTrackerError::AlreadyExcluded);
        registry.remove(holder, last_holder)?;
        self.exclude(holder)
    }
}
