pub mod donation;
pub mod ledger;

pub use donation::*;
pub use ledger::*;
