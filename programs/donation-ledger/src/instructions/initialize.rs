use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{Mint, TokenAccount, TokenInterface}
};

use crate::constants::LEDGER_SEED;
use crate::state::{DonationLedger, LedgerInitialized};

#[derive(Accounts)]
#[instruction(name: String)]
pub struct Initialize <'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        init,
        payer=owner,
        space=DonationLedger::INIT_SPACE,
        seeds=[LEDGER_SEED, name.as_str().as_bytes(), owner.key().as_ref()],
        bump
    )]
    pub ledger: Account<'info, DonationLedger>,

    pub mint: InterfaceAccount<'info, Mint>,

    #[account(init,
        associated_token::mint=mint,
        associated_token::authority=ledger,
        payer=owner)]
    pub vault: InterfaceAccount<'info, TokenAccount>,

    pub system_program: Program<'info, System>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub token_program: Interface<'info, TokenInterface>
}

impl <'info> Initialize <'info> {
    pub fn initialize(&mut self, name: String, bumps: &InitializeBumps) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;

        self.ledger.set_inner(DonationLedger::new(
            self.owner.key(),
            self.mint.key(),
            name,
            now,
            bumps.ledger,
        )?);

        msg!("Ledger {} created for owner {}", self.ledger.name, self.owner.key());
        emit!(LedgerInitialized {
            ledger: self.ledger.key(),
            owner: self.owner.key(),
            mint: self.mint.key(),
            timestamp: now
        });
        Ok(())
    }
}
