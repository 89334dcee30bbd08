pub mod deploy;
pub mod ledger;
