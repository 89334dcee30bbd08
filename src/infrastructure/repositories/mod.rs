mod artifact;
mod ledger;

pub use artifact::JsonArtifactRepository;
pub use ledger::TomlLedgerRepository;
