use anchor_lang::prelude::*;

use crate::constants::{MAX_NAME_LEN, MIN_NAME_LEN};
use crate::state::{DonationRecord, DonorAccount};

#[account]
pub struct DonationLedger {
    pub owner: Pubkey,
    pub mint: Pubkey,
    pub name: String,
    pub total_donations: u64, // Lifetime sum, never reduced by withdrawals
    pub held_funds: u64,      // Currently withdrawable
    pub donation_count: u64,
    pub created_at: i64,
    pub bump: u8,
}

impl Space for DonationLedger {
    const INIT_SPACE: usize = 8      // Discriminator
        + 32    // owner: Pubkey
        + 32    // mint: Pubkey
        + 4 + MAX_NAME_LEN // name: String (max 32 bytes)
        + 8     // total_donations: u64
        + 8     // held_funds: u64
        + 8     // donation_count: u64
        + 8     // created_at: i64
        + 1;    // bump: u8
}

impl DonationLedger {
    pub fn new(owner: Pubkey, mint: Pubkey, name: String, created_at: i64, bump: u8) -> Result<Self> {
        require!(
            name.len() >= MIN_NAME_LEN && name.len() <= MAX_NAME_LEN,
            DonationError::NameLengthInvalid
        );

        Ok(Self {
            owner,
            mint,
            name,
            total_donations: 0,
            held_funds: 0,
            donation_count: 0,
            created_at,
            bump,
        })
    }

    /// Accounts for a donation of `amount` and returns the index assigned to its record.
    ///
    /// Nothing is written unless every counter can be advanced.
    pub fn record_donation(&mut self, amount: u64) -> Result<u64> {
        require!(amount > 0, DonationError::InvalidAmount);

        let total_donations = self.total_donations.checked_add(amount).ok_or(DonationError::MathOverflow)?;
        let held_funds = self.held_funds.checked_add(amount).ok_or(DonationError::MathOverflow)?;
        let next_count = self.donation_count.checked_add(1).ok_or(DonationError::MathOverflow)?;

        let index = self.donation_count;
        self.total_donations = total_donations;
        self.held_funds = held_funds;
        self.donation_count = next_count;
        Ok(index)
    }

    /// Books a donation from an opened `donor_account` into this ledger at address `ledger`.
    ///
    /// `record_bump` is the bump of the record PDA derived from the current `donation_count`,
    /// which becomes the record's index.
    pub fn accept_donation(
        &mut self,
        ledger: Pubkey,
        donor_account: &mut DonorAccount,
        amount: u64,
        now: i64,
        record_bump: u8,
    ) -> Result<(DonationRecord, DonationReceived)> {
        require!(amount > 0, DonationError::InvalidAmount);
        require!(
            donor_account.amount.checked_add(amount).is_some(),
            DonationError::MathOverflow
        );

        let index = self.record_donation(amount)?;
        donor_account.credit(amount)?;

        let record = DonationRecord {
            ledger,
            donor: donor_account.donor,
            amount,
            timestamp: now,
            index,
            bump: record_bump,
        };
        let event = DonationReceived {
            ledger,
            donor: donor_account.donor,
            amount,
            index,
            timestamp: now,
        };
        Ok((record, event))
    }

    /// Amount `caller` may withdraw right now. Ownership is checked before funds.
    pub fn withdrawable(&self, caller: &Pubkey) -> Result<u64> {
        require_keys_eq!(*caller, self.owner, DonationError::NotOwner);
        require!(self.held_funds > 0, DonationError::NoFundsAvailable);
        Ok(self.held_funds)
    }

    /// Applied only once the vault transfer for `amount` has gone through.
    pub fn settle_withdrawal(&mut self, amount: u64) -> Result<()> {
        self.held_funds = self.held_funds.checked_sub(amount).ok_or(DonationError::MathOverflow)?;
        Ok(())
    }

    pub fn complete_withdrawal(&mut self, ledger: Pubkey, amount: u64, now: i64) -> Result<FundsWithdrawn> {
        self.settle_withdrawal(amount)?;
        Ok(FundsWithdrawn {
            ledger,
            owner: self.owner,
            amount,
            timestamp: now,
        })
    }

    pub fn signer_seeds(&self) -> [&[u8]; 4] {
        [
            crate::constants::LEDGER_SEED,
            self.name.as_bytes(),
            self.owner.as_ref(),
            std::slice::from_ref(&self.bump),
        ]
    }
}

#[event]
pub struct LedgerInitialized {
    pub ledger: Pubkey,
    pub owner: Pubkey,
    pub mint: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct DonationReceived {
    pub ledger: Pubkey,
    pub donor: Pubkey,
    pub amount: u64,
    pub index: u64,
    pub timestamp: i64,
}

#[event]
pub struct FundsWithdrawn {
    pub ledger: Pubkey,
    pub owner: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}

#[error_code]
pub enum DonationError {
    #[msg("Amount must be greater than 0")]
    InvalidAmount,

    #[msg("Only the ledger owner can withdraw")]
    NotOwner,

    #[msg("No funds available")]
    NoFundsAvailable,

    #[msg("Transfer of held funds failed")]
    TransferFailure,

    #[msg("Math overflow error")]
    MathOverflow,

    #[msg("Name must be between 4 and 32 characters")]
    NameLengthInvalid,

    #[msg("Token account does not match the ledger mint")]
    InvalidMint,

    #[msg("Too many donation records requested")]
    PageTooLarge,

    #[msg("Requested donations are past the end of the ledger")]
    DonationOutOfRange,

    #[msg("Account is not the expected donation record")]
    DonationRecordMismatch,
}
