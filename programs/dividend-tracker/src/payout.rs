use anchor_lang::prelude::*;

use crate::{errors::DividendTrackerError, processor::DividendPayer};

/// Pays dividends straight out of the program-owned tracker account.
///
/// Lamports are moved by editing balances directly, so a payout makes no CPI
/// and cannot re-enter the program. A recipient that is missing, read-only,
/// executable, or would be left below rent exemption refuses the payout.
pub struct LamportPayer<'a, 'info> {
    vault: &'a AccountInfo<'info>,
    recipients: &'a [AccountInfo<'info>],
    rent: Rent,
}

impl<'a, 'info> LamportPayer<'a, 'info> {
    pub fn new(
        vault: &'a AccountInfo<'info>,
        recipients: &'a [AccountInfo<'info>],
        rent: Rent,
    ) -> Self {
        Self {
            vault,
            recipients,
            rent,
        }
    }
}

impl<'a, 'info> DividendPayer for LamportPayer<'a, 'info> {
    fn pay(&mut self, wallet: &Pubkey, amount: u64) -> Result<()> {
        let recipient = self
            .recipients
            .iter()
            .find(|info| info.key == wallet)
            .ok_or(DividendTrackerError::InvalidHolderAccount)?;

        require!(
            recipient.is_writable && !recipient.executable && recipient.key != self.vault.key,
            DividendTrackerError::PayoutRejected
        );

        let vault_after = self
            .vault
            .lamports()
            .checked_sub(amount)
            .ok_or(DividendTrackerError::PayoutRejected)?;
        require!(
            vault_after >= self.rent.minimum_balance(self.vault.data_len()),
            DividendTrackerError::PayoutRejected
        );

        let recipient_after = recipient
            .lamports()
            .checked_add(amount)
            .ok_or(DividendTrackerError::ArithmeticOverflow)?;
        require!(
            recipient_after >= self.rent.minimum_balance(recipient.data_len()),
            DividendTrackerError::PayoutRejected
        );

        **self.vault.try_borrow_mut_lamports()? = vault_after;
        **recipient.try_borrow_mut_lamports()? = recipient_after;
        Ok(())
    }
}
