use anchor_lang::prelude::*;

use crate::constants::{DONOR_SEED, LEDGER_SEED, MAX_DONATIONS_PER_PAGE};
use crate::state::{DonationEntry, DonationError, DonationLedger, DonationRecord, DonorAccount};

#[derive(Accounts)]
pub struct ReadLedger<'info> {
    #[account(
        seeds=[LEDGER_SEED, ledger.name.as_str().as_bytes(), ledger.owner.key().as_ref()],
        bump=ledger.bump
    )]
    pub ledger: Account<'info, DonationLedger>,
}

impl<'info> ReadLedger<'info> {
    /// Records `start..start + records.len()`, in insertion order.
    pub fn get_donations(&self, start: u64, records: &[AccountInfo]) -> Result<Vec<DonationEntry>> {
        read_donation_page(&self.ledger.key(), self.ledger.donation_count, start, records)
    }

    pub fn get_total_donations(&self) -> Result<u64> {
        Ok(self.ledger.total_donations)
    }

    pub fn get_held_funds(&self) -> Result<u64> {
        Ok(self.ledger.held_funds)
    }
}

#[derive(Accounts)]
#[instruction(donor: Pubkey)]
pub struct GetDonorBalance<'info> {
    #[account(
        seeds=[LEDGER_SEED, ledger.name.as_str().as_bytes(), ledger.owner.key().as_ref()],
        bump=ledger.bump
    )]
    pub ledger: Account<'info, DonationLedger>,

    /// CHECK: May not exist yet; an uninitialized donor account reads as zero
    #[account(
        seeds = [DONOR_SEED, ledger.key().as_ref(), donor.as_ref()],
        bump
    )]
    pub donor_account: UncheckedAccount<'info>,
}

impl<'info> GetDonorBalance<'info> {
    pub fn get_donor_balance(&self) -> Result<u64> {
        DonorAccount::balance_of(&self.donor_account.to_account_info())
    }
}

pub fn read_donation_page(
    ledger: &Pubkey,
    donation_count: u64,
    start: u64,
    records: &[AccountInfo],
) -> Result<Vec<DonationEntry>> {
    require!(records.len() <= MAX_DONATIONS_PER_PAGE, DonationError::PageTooLarge);

    let end = start
        .checked_add(records.len() as u64)
        .ok_or(DonationError::DonationOutOfRange)?;
    require!(start <= donation_count && end <= donation_count, DonationError::DonationOutOfRange);

    let mut entries = Vec::with_capacity(records.len());
    for (index, info) in (start..end).zip(records) {
        let (expected, _) = DonationRecord::address(ledger, index);
        require_keys_eq!(info.key(), expected, DonationError::DonationRecordMismatch);
        require_keys_eq!(*info.owner, crate::ID, DonationError::DonationRecordMismatch);

        let data = info.try_borrow_data()?;
        let record = DonationRecord::try_deserialize(&mut &data[..])?;
        entries.push(record.entry());
    }
    Ok(entries)
}
