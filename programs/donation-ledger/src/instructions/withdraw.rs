use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{Mint, TokenAccount, TokenInterface, TransferChecked, transfer_checked}
};

use crate::constants::LEDGER_SEED;
use crate::state::{DonationError, DonationLedger};

#[derive(Accounts)]
pub struct Withdraw <'info> {
    #[account(mut)]
    pub caller: Signer<'info>,

    /// CHECK: Bound to the ledger's recorded owner
    #[account(address = ledger.owner)]
    pub owner: AccountInfo<'info>,

    #[account(
        address = ledger.mint @ DonationError::InvalidMint,
    )]
    pub mint: InterfaceAccount<'info, Mint>,

    #[account(
        mut,
        seeds=[LEDGER_SEED, ledger.name.as_str().as_bytes(), ledger.owner.key().as_ref()],
        bump=ledger.bump
    )]
    pub ledger: Account<'info, DonationLedger>,

    #[account(
        mut,
        constraint = vault.mint == ledger.mint @ DonationError::InvalidMint,
        constraint = vault.owner == ledger.key()
    )]
    pub vault: InterfaceAccount<'info, TokenAccount>,

    #[account(
        init_if_needed,
        payer = caller,
        associated_token::mint = mint,
        associated_token::authority = owner
    )]
    pub owner_ata: InterfaceAccount<'info, TokenAccount>,

    pub system_program: Program<'info, System>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub token_program: Interface<'info, TokenInterface>
}

impl <'info> Withdraw <'info> {
    pub fn withdraw(&mut self) -> Result<()> {
        let amount = self.ledger.withdrawable(&self.caller.key())?;

        let cpi_program = self.token_program.to_account_info();

        let cpi_accounts = TransferChecked {
            from: self.vault.to_account_info(),
            mint: self.mint.to_account_info(),
            to: self.owner_ata.to_account_info(),
            authority: self.ledger.to_account_info(),
        };

        let ledger_seeds = self.ledger.signer_seeds();
        let signer = &[&ledger_seeds[..]];
        let cpi_ctx = CpiContext::new_with_signer(cpi_program, cpi_accounts, signer);

        // A failing token CPI aborts the transaction and the runtime rolls back every write,
        // so held_funds is only settled on the path where the transfer returned.
        transfer_checked(cpi_ctx, amount, self.mint.decimals).map_err(|err| {
            msg!("Vault transfer of {} failed: {}", amount, err);
            error!(DonationError::TransferFailure)
        })?;

        let ledger_key = self.ledger.key();
        let now = Clock::get()?.unix_timestamp;
        let event = self.ledger.complete_withdrawal(ledger_key, amount, now)?;
        emit!(event);
        Ok(())
    }
}
