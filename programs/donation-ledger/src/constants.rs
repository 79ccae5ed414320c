use anchor_lang::prelude::*;

#[constant]
pub const LEDGER_SEED: &[u8] = b"ledger";
#[constant]
pub const DONOR_SEED: &[u8] = b"donor";
#[constant]
pub const DONATION_SEED: &[u8] = b"donation";

pub const MIN_NAME_LEN: usize = 4;
pub const MAX_NAME_LEN: usize = 32;

// Return data is capped at 1024 bytes; 16 entries of 48 bytes plus the vec prefix fit.
pub const MAX_DONATIONS_PER_PAGE: usize = 16;
