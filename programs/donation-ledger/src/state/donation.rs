use anchor_lang::prelude::*;

use crate::constants::{DONATION_SEED, DONOR_SEED};
use crate::state::DonationError;

#[account]
pub struct DonationRecord {
    pub ledger: Pubkey,  // Parent ledger
    pub donor: Pubkey,   // Contributor's wallet
    pub amount: u64,
    pub timestamp: i64,  // Unix seconds at creation
    pub index: u64,      // Position in the ledger's history
    pub bump: u8,
}

impl Space for DonationRecord {
    const INIT_SPACE: usize = 8      // Discriminator
        + 32    // ledger: Pubkey
        + 32    // donor: Pubkey
        + 8     // amount: u64
        + 8     // timestamp: i64
        + 8     // index: u64
        + 1;    // bump: u8
}

impl DonationRecord {
    pub fn address(ledger: &Pubkey, index: u64) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[DONATION_SEED, ledger.as_ref(), &index.to_le_bytes()],
            &crate::ID,
        )
    }

    pub fn entry(&self) -> DonationEntry {
        DonationEntry {
            donor: self.donor,
            amount: self.amount,
            timestamp: self.timestamp,
        }
    }
}

/// What `get_donations` hands back for each record.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct DonationEntry {
    pub donor: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}

#[account]
pub struct DonorAccount {
    pub ledger: Pubkey,  // Parent ledger
    pub donor: Pubkey,   // Contributor's wallet
    pub amount: u64,     // Total contributed
    pub bump: u8,        // PDA bump
}

impl Space for DonorAccount {
    const INIT_SPACE: usize = 8      // Discriminator
        + 32    // ledger: Pubkey
        + 32    // donor: Pubkey
        + 8     // amount: u64
        + 1;    // bump: u8
}

impl DonorAccount {
    pub fn address(ledger: &Pubkey, donor: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(&[DONOR_SEED, ledger.as_ref(), donor.as_ref()], &crate::ID)
    }

    /// Fills in an account `init_if_needed` just created; an existing one is left alone.
    pub fn open(&mut self, ledger: Pubkey, donor: Pubkey, bump: u8) {
        if self.donor == Pubkey::default() {
            self.ledger = ledger;
            self.donor = donor;
            self.bump = bump;
        }
    }

    pub fn credit(&mut self, amount: u64) -> Result<()> {
        self.amount = self.amount.checked_add(amount).ok_or(DonationError::MathOverflow)?;
        Ok(())
    }

    /// Balance stored in a raw donor account, zero if it was never created.
    pub fn balance_of(info: &AccountInfo) -> Result<u64> {
        if info.owner != &crate::ID || info.data_is_empty() {
            return Ok(0);
        }
        let data = info.try_borrow_data()?;
        let account = DonorAccount::try_deserialize(&mut &data[..])?;
        Ok(account.amount)
    }
}
