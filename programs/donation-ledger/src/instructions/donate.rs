use anchor_lang::prelude::*;
use anchor_spl::{
    token_interface::{Mint, TokenAccount, TokenInterface, TransferChecked, transfer_checked}
};

use crate::constants::{DONATION_SEED, DONOR_SEED, LEDGER_SEED};
use crate::state::{DonationError, DonationLedger, DonationRecord, DonorAccount};

#[derive(Accounts)]
pub struct Donate <'info> {
    #[account(mut)]
    pub donor: Signer<'info>,

    #[account(
        mut,
        seeds=[LEDGER_SEED, ledger.name.as_str().as_bytes(), ledger.owner.key().as_ref()],
        bump=ledger.bump
    )]
    pub ledger: Account<'info, DonationLedger>,

    #[account(
        init_if_needed,
        payer = donor,
        space = DonorAccount::INIT_SPACE,
        seeds = [DONOR_SEED, ledger.key().as_ref(), donor.key().as_ref()],
        bump
    )]
    pub donor_account: Account<'info, DonorAccount>,

    #[account(
        init,
        payer = donor,
        space = DonationRecord::INIT_SPACE,
        seeds = [DONATION_SEED, ledger.key().as_ref(), ledger.donation_count.to_le_bytes().as_ref()],
        bump
    )]
    pub donation_record: Account<'info, DonationRecord>,

    #[account(
        address = ledger.mint @ DonationError::InvalidMint,
    )]
    pub mint: InterfaceAccount<'info, Mint>,

    #[account(
        mut,
        constraint = donor_ata.owner == donor.key(),
        constraint = donor_ata.mint == ledger.mint @ DonationError::InvalidMint
    )]
    pub donor_ata: InterfaceAccount<'info, TokenAccount>,

    #[account(
        mut,
        constraint = vault.mint == ledger.mint @ DonationError::InvalidMint,
        constraint = vault.owner == ledger.key()
    )]
    pub vault: InterfaceAccount<'info, TokenAccount>,

    pub system_program: Program<'info, System>,
    pub token_program: Interface<'info, TokenInterface>
}

impl <'info> Donate <'info> {
    pub fn donate(&mut self, amount: u64, bumps: &DonateBumps) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;
        let ledger_key = self.ledger.key();

        self.donor_account.open(ledger_key, self.donor.key(), bumps.donor_account);
        let (record, event) = self.ledger.accept_donation(
            ledger_key,
            &mut self.donor_account,
            amount,
            now,
            bumps.donation_record,
        )?;

        let cpi_program = self.token_program.to_account_info();

        let cpi_accounts = TransferChecked {
            from: self.donor_ata.to_account_info(),
            mint: self.mint.to_account_info(),
            to: self.vault.to_account_info(),
            authority: self.donor.to_account_info(),
        };

        let cpi_ctx = CpiContext::new(cpi_program, cpi_accounts);
        transfer_checked(cpi_ctx, amount, self.mint.decimals)?;

        self.donation_record.set_inner(record);
        emit!(event);
        Ok(())
    }
}
