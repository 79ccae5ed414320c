#![allow(unexpected_cfgs)]
use anchor_lang::prelude::*;

pub mod constants;
pub mod instructions;
pub mod state;

use crate::instructions::*;
use crate::state::*;

declare_id!("6QrXuwJ4vVqKDEXKDJRMSdfDrGSNWdqHmEvB7zP8Ptpd");

#[program]
pub mod donation_ledger {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>, name: String) -> Result<()> {
        ctx.accounts.initialize(name, &ctx.bumps)?;
        Ok(())
    }

    pub fn donate(ctx: Context<Donate>, amount: u64) -> Result<()> {
        ctx.accounts.donate(amount, &ctx.bumps)?;
        Ok(())
    }

    pub fn withdraw(ctx: Context<Withdraw>) -> Result<()> {
        ctx.accounts.withdraw()?;
        Ok(())
    }

    pub fn get_donations(ctx: Context<ReadLedger>, start: u64) -> Result<Vec<DonationEntry>> {
        ctx.accounts.get_donations(start, ctx.remaining_accounts)
    }

    pub fn get_total_donations(ctx: Context<ReadLedger>) -> Result<u64> {
        ctx.accounts.get_total_donations()
    }

    pub fn get_held_funds(ctx: Context<ReadLedger>) -> Result<u64> {
        ctx.accounts.get_held_funds()
    }

    pub fn get_donor_balance(ctx: Context<GetDonorBalance>, _donor: Pubkey) -> Result<u64> {
        ctx.accounts.get_donor_balance()
    }
}
